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

use crate::family::OsFamily;

/// Decide whether two OS name+version strings (as produced by
/// `short_os_name_and_version`) are interchangeable for reusing prebuilt
/// binary artifacts.
///
/// RedHat-family identifiers with the same numeric major version match
/// across families (`centos8` vs `almalinux8`). Everything else, including
/// RedHat-family identifiers with differing versions, requires exact string
/// equality. Total over all inputs; malformed text simply falls through to
/// the equality check.
pub fn is_compatible_os(os_and_version1: &str, os_and_version2: &str) -> bool {
    match (
        split_redhat_name_and_version(os_and_version1),
        split_redhat_name_and_version(os_and_version2),
    ) {
        (Some((_, version1)), Some((_, version2))) if version1 == version2 => true,
        _ => os_and_version1 == os_and_version2,
    }
}

/// Dissect an identifier of the form `<redhat-family-name><digits>`, e.g.
/// `centos8` or `rocky9`. Anything else, including versions with a `.` or a
/// separator between name and version, yields `None`.
fn split_redhat_name_and_version(s: &str) -> Option<(OsFamily, &str)> {
    let first_digit = s.find(|c: char| c.is_ascii_digit())?;
    let (name, version) = s.split_at(first_digit);
    if version.is_empty() || !version.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let family = OsFamily::from(name);
    family.is_redhat_family().then_some((family, version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_family_same_major_version() {
        assert!(is_compatible_os("centos8", "almalinux8"));
        assert!(is_compatible_os("rocky8", "almalinux8"));
        assert!(is_compatible_os("almalinux7", "rhel7"));
        assert!(is_compatible_os("ol8", "centos8"));
    }

    #[test]
    fn test_symmetry() {
        assert_eq!(
            is_compatible_os("centos8", "rocky8"),
            is_compatible_os("rocky8", "centos8")
        );
    }

    #[test]
    fn test_same_family_different_version() {
        assert!(!is_compatible_os("centos7", "centos8"));
        assert!(!is_compatible_os("centos7", "ol8"));
    }

    #[test]
    fn test_exact_equality_for_other_families() {
        assert!(is_compatible_os("ubuntu20.04", "ubuntu20.04"));
        assert!(!is_compatible_os("ubuntu18.04", "ubuntu20.04"));
        assert!(!is_compatible_os("ubuntu20.04", "centos8"));
        assert!(is_compatible_os("alpine3.14", "alpine3.14"));
    }

    #[test]
    fn test_identical_redhat_inputs() {
        assert!(is_compatible_os("centos7", "centos7"));
    }

    #[test]
    fn test_dotted_redhat_version_needs_exact_match() {
        // Dotted versions do not fit the name+digits pattern.
        assert!(is_compatible_os("centos8.4", "centos8.4"));
        assert!(!is_compatible_os("centos8.4", "almalinux8.4"));
    }

    #[test]
    fn test_malformed_inputs_fall_back_to_equality() {
        assert!(is_compatible_os("", ""));
        assert!(is_compatible_os("centos", "centos"));
        assert!(!is_compatible_os("centos", "centos8"));
        assert!(!is_compatible_os("fedora36", "rhel36"));
    }

    #[test]
    fn test_split_rejects_non_redhat_families() {
        assert!(split_redhat_name_and_version("ubuntu20").is_none());
        assert!(split_redhat_name_and_version("opensuse-leap15").is_none());
        assert_eq!(
            split_redhat_name_and_version("rocky9"),
            Some((OsFamily::Rocky, "9"))
        );
    }
}
