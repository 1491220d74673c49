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

/// Known operating system families, keyed by the short `ID` value each one
/// reports in os-release. Anything not in the roster is carried as `Other`
/// so conversion from raw identifiers never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    AlmaLinux,
    Alpine,
    AmazonLinux,
    Arch,
    CentOs,
    Debian,
    Fedora,
    MacOs,
    Manjaro,
    OpenSuseLeap,
    OpenSuseTumbleweed,
    OracleLinux,
    Rhel,
    Rocky,
    Ubuntu,
    Other(String),
}

impl OsFamily {
    pub fn id(&self) -> &str {
        match self {
            OsFamily::AlmaLinux => "almalinux",
            OsFamily::Alpine => "alpine",
            OsFamily::AmazonLinux => "amzn",
            OsFamily::Arch => "arch",
            OsFamily::CentOs => "centos",
            OsFamily::Debian => "debian",
            OsFamily::Fedora => "fedora",
            OsFamily::MacOs => "macos",
            OsFamily::Manjaro => "manjaro",
            OsFamily::OpenSuseLeap => "opensuse-leap",
            OsFamily::OpenSuseTumbleweed => "opensuse-tumbleweed",
            OsFamily::OracleLinux => "ol",
            OsFamily::Rhel => "rhel",
            OsFamily::Rocky => "rocky",
            OsFamily::Ubuntu => "ubuntu",
            OsFamily::Other(name) => name,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            OsFamily::AlmaLinux => "AlmaLinux",
            OsFamily::Alpine => "Alpine Linux",
            OsFamily::AmazonLinux => "Amazon Linux",
            OsFamily::Arch => "Arch Linux",
            OsFamily::CentOs => "CentOS",
            OsFamily::Debian => "Debian",
            OsFamily::Fedora => "Fedora",
            OsFamily::MacOs => "macOS",
            OsFamily::Manjaro => "Manjaro",
            OsFamily::OpenSuseLeap => "openSUSE Leap",
            OsFamily::OpenSuseTumbleweed => "openSUSE Tumbleweed",
            OsFamily::OracleLinux => "Oracle Linux",
            OsFamily::Rhel => "Red Hat Enterprise Linux",
            OsFamily::Rocky => "Rocky Linux",
            OsFamily::Ubuntu => "Ubuntu",
            OsFamily::Other(name) => name,
        }
    }

    /// Families treated as binary-compatible with each other within a
    /// matching major version.
    pub fn is_redhat_family(&self) -> bool {
        matches!(
            self,
            OsFamily::AlmaLinux
                | OsFamily::CentOs
                | OsFamily::OracleLinux
                | OsFamily::Rhel
                | OsFamily::Rocky
        )
    }
}

impl From<&str> for OsFamily {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "almalinux" => OsFamily::AlmaLinux,
            "alpine" => OsFamily::Alpine,
            "amzn" => OsFamily::AmazonLinux,
            "arch" => OsFamily::Arch,
            "centos" => OsFamily::CentOs,
            "debian" => OsFamily::Debian,
            "fedora" => OsFamily::Fedora,
            "macos" => OsFamily::MacOs,
            "manjaro" => OsFamily::Manjaro,
            "opensuse-leap" => OsFamily::OpenSuseLeap,
            "opensuse-tumbleweed" => OsFamily::OpenSuseTumbleweed,
            "ol" => OsFamily::OracleLinux,
            "rhel" => OsFamily::Rhel,
            "rocky" => OsFamily::Rocky,
            "ubuntu" => OsFamily::Ubuntu,
            other => OsFamily::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for id in [
            "almalinux",
            "alpine",
            "amzn",
            "arch",
            "centos",
            "debian",
            "fedora",
            "macos",
            "manjaro",
            "opensuse-leap",
            "opensuse-tumbleweed",
            "ol",
            "rhel",
            "rocky",
            "ubuntu",
        ] {
            assert_eq!(OsFamily::from(id).id(), id);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(OsFamily::OracleLinux.name(), "Oracle Linux");
        assert_eq!(OsFamily::CentOs.name(), "CentOS");
        assert_eq!(OsFamily::Other("nixos".to_string()).name(), "nixos");
    }

    #[test]
    fn test_unknown_id_becomes_other() {
        let family = OsFamily::from("nixos");
        assert_eq!(family, OsFamily::Other("nixos".to_string()));
        assert_eq!(family.id(), "nixos");
    }

    #[test]
    fn test_conversion_lowercases() {
        assert_eq!(OsFamily::from("Ubuntu"), OsFamily::Ubuntu);
        assert_eq!(OsFamily::from("CENTOS"), OsFamily::CentOs);
    }

    #[test]
    fn test_redhat_family_membership() {
        for id in ["almalinux", "centos", "ol", "rhel", "rocky"] {
            assert!(OsFamily::from(id).is_redhat_family(), "{id}");
        }
        for id in ["alpine", "debian", "fedora", "ubuntu", "macos", "nixos"] {
            assert!(!OsFamily::from(id).is_redhat_family(), "{id}");
        }
    }
}
