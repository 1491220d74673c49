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

use crate::error::{Result, SysidError};
use crate::release::parse_release_text;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Read-only view over a parsed os-release file.
///
/// All keys are lowercased at parse time. Arbitrary fields are reachable
/// through [`ReleaseMetadata::get`]; the fields identification depends on
/// have named accessors that fail when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReleaseMetadata {
    vars: HashMap<String, String>,
}

impl ReleaseMetadata {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self {
            vars: parse_release_text(text)?,
        })
    }

    /// Read and parse a release file. A missing file is reported as
    /// [`SysidError::ReleaseFileNotFound`] rather than a bare I/O error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SysidError::ReleaseFileNotFound(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(&text)
    }

    /// Case-insensitive lookup. Absence is not an error.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&key.to_lowercase()).map(String::as_str)
    }

    /// The `ID` field. Mandatory for identification to proceed.
    pub fn id(&self) -> Result<&str> {
        self.require("id")
    }

    /// The `VERSION_ID` field. Callers that tolerate its absence (rolling
    /// releases) should use [`ReleaseMetadata::get`] instead.
    pub fn version_id(&self) -> Result<&str> {
        self.require("version_id")
    }

    fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| SysidError::MissingReleaseField(key.to_string()))
    }
}
