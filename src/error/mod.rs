mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::format_error_chain;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SysidError {
    #[error("Malformed release file line (expected KEY=VALUE): '{0}'")]
    MalformedReleaseLine(String),

    #[error("Field '{0}' is not present in the OS release metadata")]
    MissingReleaseField(String),

    #[error("Unrecognized platform: {0}")]
    UnrecognizedPlatform(String),

    #[error("OS release file not found: {0}")]
    ReleaseFileNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SysidError>;
