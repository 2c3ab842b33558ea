//! Consistency between a project's package version and its assembly and file versions.
//!
//! A project usually declares `Version` (the package version) and may declare
//! `AssemblyVersion` and `FileVersion` next to it. The longer versions are expected to extend
//! the package version on a component boundary: `1.2` is compatible with `1.2.0.556` but not
//! with `1.20.0.0`.

use std::fmt;

/// Outcome of a version consistency check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConsistency {
    /// `true` if the assembly or file version is not compatible with the package version
    pub has_error: bool,
    /// Description of the last failing comparison, or an informational note
    pub message: String,
}

impl fmt::Display for VersionConsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Returns `true` if `long_version` is compatible with `short_version`.
///
/// When `long_version` is not longer than `short_version` it must start with the whole of
/// `short_version`, which amounts to equality. Otherwise it must start with
/// `short_version` followed by a dot.
///
/// # Examples
///
/// ```rust
/// use slnscope::is_version_compatible;
///
/// assert!(is_version_compatible("1.2.0.556", "1.2.0.556"));
/// assert!(is_version_compatible("1.2.0.556", "1.2"));
/// assert!(!is_version_compatible("1.20.0.0", "1.2"));
/// ```
#[must_use]
pub fn is_version_compatible(long_version: &str, short_version: &str) -> bool {
    if long_version.chars().count() <= short_version.chars().count() {
        long_version.starts_with(short_version)
    } else {
        long_version.starts_with(&format!("{short_version}."))
    }
}

/// Compares the assembly and file versions against the package version.
///
/// The check is skipped when `version` is empty. Both comparisons run; when both fail the
/// message describes the file version.
#[must_use]
pub fn check_versions(version: &str, assembly_version: &str, file_version: &str) -> VersionConsistency {
    if version.is_empty() {
        return VersionConsistency {
            has_error: false,
            message: "Ignored because no version".to_string(),
        };
    }

    let mut result = VersionConsistency {
        has_error: false,
        message: String::new(),
    };

    if !is_version_compatible(assembly_version, version) {
        result.has_error = true;
        result.message = format!("{assembly_version} not compatible with {version}");
    }

    if !is_version_compatible(file_version, version) {
        result.has_error = true;
        result.message = format!("{file_version} not compatible with {version}");
    }

    result
}
