use crate::error::SysidError;

pub fn get_exit_code(error: &SysidError) -> i32 {
    match error {
        SysidError::MalformedReleaseLine(_) | SysidError::MissingReleaseField(_) => 2,

        SysidError::UnrecognizedPlatform(_) => 3,

        SysidError::ReleaseFileNotFound(_) => 4,

        _ => 1,
    }
}
