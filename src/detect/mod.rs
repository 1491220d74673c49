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

pub mod local;

use crate::error::{Result, SysidError};
use crate::family::OsFamily;
use crate::release::ReleaseMetadata;
use log::debug;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Separator used between packaging identifier components unless the caller
/// picks another one.
pub const ID_COMPONENT_SEPARATOR: &str = "-";

const OS_RELEASE_FILE: &str = "os-release";
const REDHAT_RELEASE_FILE: &str = "redhat-release";

/// Host operating system kind, in uname nomenclature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HostSystem {
    Linux,
    Darwin,
    Other(String),
}

impl HostSystem {
    /// The system this binary was built for.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "linux" => HostSystem::Linux,
            "macos" => HostSystem::Darwin,
            other => HostSystem::Other(other.to_string()),
        }
    }
}

impl fmt::Display for HostSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostSystem::Linux => write!(f, "Linux"),
            HostSystem::Darwin => write!(f, "Darwin"),
            HostSystem::Other(name) => write!(f, "{name}"),
        }
    }
}

/// The resolved identity of a system: host kind, CPU architecture, and the
/// release metadata read from its `etc` directory.
///
/// `linux_os_release` is populated exactly when the system is Linux; the
/// constructors enforce this. The `redhat-release` banner, when present, is
/// kept as an opaque trimmed string and never parsed for version data.
#[derive(Debug, Clone, Serialize)]
pub struct SysConfiguration {
    system: HostSystem,
    architecture: String,
    linux_os_release: Option<ReleaseMetadata>,
    redhat_release: Option<String>,
}

impl SysConfiguration {
    /// Resolve from a directory laid out like `/etc`.
    ///
    /// On Linux the `os-release` file is mandatory; the `redhat-release`
    /// banner is optional and an empty or whitespace-only banner counts as
    /// absent. Non-Linux systems read nothing.
    pub fn from_etc_dir(system: HostSystem, architecture: &str, etc_dir: &Path) -> Result<Self> {
        let mut linux_os_release = None;
        let mut redhat_release = None;

        if system == HostSystem::Linux {
            linux_os_release = Some(ReleaseMetadata::from_file(&etc_dir.join(OS_RELEASE_FILE))?);
            redhat_release = read_optional_banner(&etc_dir.join(REDHAT_RELEASE_FILE))?;
        }

        debug!(
            "resolved {system} {architecture} from {dir}",
            dir = etc_dir.display()
        );

        Ok(Self {
            system,
            architecture: architecture.to_string(),
            linux_os_release,
            redhat_release,
        })
    }

    /// Resolve from a base directory containing an `etc` subdirectory.
    pub fn from_base_dir(system: HostSystem, architecture: &str, base_dir: &Path) -> Result<Self> {
        Self::from_etc_dir(system, architecture, &base_dir.join("etc"))
    }

    /// Resolve the running host against the given filesystem root
    /// (normally `/`). Uncached; see [`local::local_sys_conf`] for the
    /// memoized variant.
    pub fn from_local_system(base_dir: &Path) -> Result<Self> {
        Self::from_base_dir(HostSystem::current(), std::env::consts::ARCH, base_dir)
    }

    pub fn system(&self) -> &HostSystem {
        &self.system
    }

    /// The raw platform string, passed through unchanged (`x86_64` and
    /// `amd64` are never unified).
    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn linux_os_release(&self) -> Option<&ReleaseMetadata> {
        self.linux_os_release.as_ref()
    }

    /// The trimmed `redhat-release` banner. A presence signal only.
    pub fn redhat_release(&self) -> Option<&str> {
        self.redhat_release.as_deref()
    }

    pub fn is_linux(&self) -> bool {
        self.system == HostSystem::Linux
    }

    pub fn is_macos(&self) -> bool {
        self.system == HostSystem::Darwin
    }

    /// The family this system's short OS name belongs to.
    pub fn os_family(&self) -> Result<OsFamily> {
        Ok(OsFamily::from(self.short_os_name()?.as_str()))
    }

    pub fn is_redhat_family(&self) -> Result<bool> {
        Ok(self.os_family()?.is_redhat_family())
    }

    /// Short platform name such as `centos`, `ubuntu`, or `macos`.
    ///
    /// For Linux this is the os-release `ID` field verbatim (the parser has
    /// already lowercased the key; the value is whatever the distribution
    /// ships). Fails for systems this crate does not identify.
    pub fn short_os_name(&self) -> Result<String> {
        match (&self.system, &self.linux_os_release) {
            (HostSystem::Darwin, _) => Ok(OsFamily::MacOs.id().to_string()),
            (HostSystem::Linux, Some(release)) => Ok(release.id()?.to_string()),
            _ => Err(SysidError::UnrecognizedPlatform(format!(
                "{}/{}",
                self.system, self.architecture
            ))),
        }
    }

    /// Truncated version string: the major version alone for RedHat-family
    /// systems, two leading components otherwise (`20.04`, `3.14`).
    ///
    /// Empty for non-Linux systems and for distributions without a
    /// `VERSION_ID` (rolling releases).
    pub fn short_os_version(&self) -> Result<String> {
        let release = match (&self.system, &self.linux_os_release) {
            (HostSystem::Linux, Some(release)) => release,
            _ => return Ok(String::new()),
        };

        let Some(version_id) = release.get("version_id") else {
            return Ok(String::new());
        };

        let num_components = if self.is_redhat_family()? { 1 } else { 2 };

        Ok(version_id
            .split('.')
            .take(num_components)
            .collect::<Vec<_>>()
            .join("."))
    }

    /// Name and version concatenated with no separator, e.g. `ubuntu20.04`
    /// or `centos8`. The version part may be empty.
    pub fn short_os_name_and_version(&self) -> Result<String> {
        Ok(format!(
            "{}{}",
            self.short_os_name()?,
            self.short_os_version()?
        ))
    }

    /// An identifier suitable for naming build artifacts: name+version, the
    /// caller's extra components in order, then the architecture, joined by
    /// `separator`. The extra components are not validated.
    pub fn id_for_packaging(&self, mid_parts: &[&str], separator: &str) -> Result<String> {
        let mut components = vec![self.short_os_name_and_version()?];
        components.extend(mid_parts.iter().map(|part| part.to_string()));
        components.push(self.architecture.clone());
        Ok(components.join(separator))
    }
}

fn read_optional_banner(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }
    let banner = fs::read_to_string(path)?;
    let banner = banner.trim();
    Ok((!banner.is_empty()).then(|| banner.to_string()))
}
