// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::SysidError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a SysidError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a SysidError) -> Self {
        let (suggestion, details) = match error {
            SysidError::MalformedReleaseLine(line) => {
                let suggestion = Some(
                    "Each non-empty line of an os-release file must have the form KEY=VALUE. \
                     Check the file for stray text or truncated lines."
                        .to_string(),
                );
                let details = Some(format!("Offending line: '{line}'"));
                (suggestion, details)
            }
            SysidError::MissingReleaseField(field) => {
                let suggestion = Some(format!(
                    "The os-release file on this host does not define '{}'. Identification \
                     requires it; check /etc/os-release on the target system.",
                    field.to_uppercase()
                ));
                let details = None;
                (suggestion, details)
            }
            SysidError::UnrecognizedPlatform(platform) => {
                let suggestion = Some(
                    "Only Linux and macOS hosts can be identified. Run on a supported host or \
                     resolve from a directory captured on one."
                        .to_string(),
                );
                let details = Some(format!("Reported host system: {platform}"));
                (suggestion, details)
            }
            SysidError::ReleaseFileNotFound(path) => {
                let suggestion = Some(
                    "Linux identification reads etc/os-release under the resolution root. \
                     Ensure the file exists, or pass a root that contains one."
                        .to_string(),
                );
                let details = Some(format!("Expected file: {path}"));
                (suggestion, details)
            }
            SysidError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check file permissions on the release files.".to_string())
                    }
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
            SysidError::Json(json_err) => {
                let details = Some(format!("JSON error: {json_err}"));
                (None, details)
            }
        };

        Self {
            error,
            suggestion,
            details,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
