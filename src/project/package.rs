use std::fmt;

/// A `PackageReference` item of a project file.
///
/// Only items that name both a package and a version are recorded. Duplicates are kept, in
/// document order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageReference {
    project: String,
    name: String,
    version: String,
    condition: String,
    is_all_private_assets: bool,
}

impl PackageReference {
    /// Creates a package reference owned by the project named `project`.
    #[must_use]
    pub fn new(
        project: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        condition: impl Into<String>,
        is_all_private_assets: bool,
    ) -> Self {
        PackageReference {
            project: project.into(),
            name: name.into(),
            version: version.into(),
            condition: condition.into(),
            is_all_private_assets,
        }
    }

    /// Returns the name of the project containing the reference.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the package name (`Include`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the package version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the raw MSBuild condition; empty when the reference always applies.
    #[must_use]
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Returns `true` if the reference always applies.
    #[must_use]
    pub fn is_unconditional(&self) -> bool {
        self.condition.is_empty()
    }

    /// Returns `true` if `PrivateAssets` is `All`.
    #[must_use]
    pub fn is_all_private_assets(&self) -> bool {
        self.is_all_private_assets
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Version {}", self.name, self.version)
    }
}
