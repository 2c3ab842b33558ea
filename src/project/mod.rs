//! Projects of a solution and the details read from their project files.
//!
//! A [`Project`] is created from a [`ProjectRecord`] supplied by a solution parser. At that
//! point it only carries solution-level identity: name, relative path, GUID, declared type,
//! dependencies and build configurations. Calling one of the `load_details` methods reads the
//! project file itself and fills in everything else: SDK, output type, versions, package
//! metadata, target frameworks, package references and project references.
//!
//! # Key Components
//!
//! - [`Project`] - The project entity
//! - [`Framework`] - A decoded target framework moniker
//! - [`PackageReference`] - A `PackageReference` item
//! - [`Configuration`] - A configuration/platform pair the project is built in
//! - [`VersionConsistency`] - Result of comparing the package, assembly and file versions
//!
//! # Examples
//!
//! ```rust
//! use slnscope::{Project, ProjectType};
//!
//! let mut project = Project::new("Sample");
//! project.load_details_from_mem(br#"<Project Sdk="Microsoft.NET.Sdk">
//!   <PropertyGroup>
//!     <OutputType>Exe</OutputType>
//!     <TargetFrameworks>net481;net8.0-windows7.0</TargetFrameworks>
//!     <Version>1.2</Version>
//!     <AssemblyVersion>1.2.0.556</AssemblyVersion>
//!     <FileVersion>1.2.0.556</FileVersion>
//!   </PropertyGroup>
//! </Project>"#)?;
//!
//! assert_eq!(project.project_type(), ProjectType::Console);
//! assert_eq!(project.frameworks().len(), 2);
//! assert!(!project.check_version_consistency().has_error);
//! # Ok::<(), slnscope::Error>(())
//! ```

mod configuration;
mod framework;
mod package;
mod parser;
mod types;
mod version;

pub use configuration::Configuration;
pub use framework::{Framework, FrameworkMoniker, FrameworkType};
pub use package::PackageReference;
pub use types::{NullableAnnotation, ProjectFlags, ProjectType, SdkType};
pub use version::{is_version_compatible, VersionConsistency};

use std::{io::Read, path::Path};

use uguid::Guid;
use url::Url;

use crate::{
    file::{decode_text, read_to_memory, Backend, Physical},
    solution::ProjectRecord,
    xml::Element,
    Result,
};

/// A project of a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    name: String,
    relative_path: String,
    guid: String,
    project_type: ProjectType,
    extension: String,
    dependency_level: i32,
    is_static_library: bool,
    dependencies: Vec<String>,
    project_references: Vec<String>,
    parent_project_guid: String,
    configurations: Vec<Configuration>,
    details_loaded: bool,

    sdk_type: SdkType,
    output_type: String,
    flags: ProjectFlags,
    nullable: NullableAnnotation,
    language_version: String,
    neutral_language: String,

    version: String,
    assembly_version: String,
    file_version: String,

    author: String,
    description: String,
    copyright: String,
    repository_url: Option<Url>,
    application_icon: String,
    package_icon: String,
    package_license_expression: String,
    package_readme_file: String,

    target_frameworks: String,
    frameworks: Vec<Framework>,
    package_references: Vec<PackageReference>,
}

impl Project {
    /// Creates a project that is not part of a solution.
    ///
    /// The project has no path, GUID or configuration, and its type is
    /// [`ProjectType::Unknown`] until details are loaded.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Project {
            name: name.into(),
            relative_path: String::new(),
            guid: String::new(),
            project_type: ProjectType::Unknown,
            extension: String::new(),
            dependency_level: 0,
            is_static_library: false,
            dependencies: Vec::new(),
            project_references: Vec::new(),
            parent_project_guid: String::new(),
            configurations: Vec::new(),
            details_loaded: false,
            sdk_type: SdkType::Unknown,
            output_type: String::new(),
            flags: ProjectFlags::empty(),
            nullable: NullableAnnotation::None,
            language_version: String::new(),
            neutral_language: String::new(),
            version: String::new(),
            assembly_version: String::new(),
            file_version: String::new(),
            author: String::new(),
            description: String::new(),
            copyright: String::new(),
            repository_url: None,
            application_icon: String::new(),
            package_icon: String::new(),
            package_license_expression: String::new(),
            package_readme_file: String::new(),
            target_frameworks: String::new(),
            frameworks: Vec::new(),
            package_references: Vec::new(),
        }
    }

    /// Creates a project from the record a solution parser produced for it.
    ///
    /// The project type comes from the record's type tag through
    /// [`ProjectType::from_solution_tag`]. Each configuration key is split into a
    /// configuration name and a platform name.
    #[must_use]
    pub fn from_record(record: ProjectRecord) -> Self {
        let configurations = record
            .configurations
            .iter()
            .map(|entry| {
                Configuration::from_key(&record.name, &entry.key, entry.include_in_build)
                    .with_project_configuration(entry.project_configuration.as_str())
            })
            .collect();

        Project {
            project_type: ProjectType::from_solution_tag(&record.project_type),
            relative_path: record.relative_path,
            guid: record.guid,
            extension: record.extension,
            dependency_level: record.dependency_level,
            is_static_library: record.is_static_library,
            dependencies: record.dependencies,
            project_references: record.project_references,
            parent_project_guid: record.parent_guid.unwrap_or_default(),
            configurations,
            ..Project::new(record.name)
        }
    }

    /// Reads the project file at `path` and updates the project with its content.
    ///
    /// Scalar fields are only overwritten by elements present in the file; the framework,
    /// package reference and project reference lists are replaced.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be read,
    /// [`crate::Error::Malformed`] if it is not a well-formed XML document, and
    /// [`crate::Error::InvalidUri`] if `RepositoryUrl` is not an absolute URI.
    pub fn load_details(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let input = Physical::new(path)?;
        self.load_details_from_mem(input.data())
    }

    /// Reads a project file from `reader` and updates the project with its content.
    ///
    /// # Errors
    /// See [`Project::load_details`].
    pub fn load_details_from_reader<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<()> {
        let input = read_to_memory(reader)?;
        self.load_details_from_mem(input.data())
    }

    /// Parses project file content held in memory and updates the project with it.
    ///
    /// The content may be UTF-8, with or without byte order mark, or UTF-16 with a byte order
    /// mark.
    ///
    /// # Errors
    /// See [`Project::load_details`].
    pub fn load_details_from_mem(&mut self, data: &[u8]) -> Result<()> {
        let text = decode_text(data)?;
        let root = Element::parse(&text)?;
        parser::parse_project(self, &root)?;
        self.details_loaded = true;
        Ok(())
    }

    /// Returns `true` once a project file has been loaded successfully.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.details_loaded
    }

    /// Checks that the assembly and file versions extend the package version.
    ///
    /// The check is skipped, without error, when the project declares no `Version`.
    #[must_use]
    pub fn check_version_consistency(&self) -> VersionConsistency {
        version::check_versions(&self.version, &self.assembly_version, &self.file_version)
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the path of the project file relative to the solution, as written in the
    /// solution.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Returns the project GUID as written in the solution, braces included.
    #[must_use]
    pub fn guid_text(&self) -> &str {
        &self.guid
    }

    /// Returns the parsed project GUID, or `None` if the solution carries none or it is not a
    /// valid GUID.
    #[must_use]
    pub fn guid(&self) -> Option<Guid> {
        let text = self.guid.trim_start_matches('{').trim_end_matches('}');
        Guid::try_parse(text).ok()
    }

    /// Returns the project type.
    #[must_use]
    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    /// Returns the extension of the project file, dot included.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Returns the depth of the project in the solution's dependency graph.
    #[must_use]
    pub fn dependency_level(&self) -> i32 {
        self.dependency_level
    }

    /// Returns `true` if the solution marks the project as a static library.
    #[must_use]
    pub fn is_static_library(&self) -> bool {
        self.is_static_library
    }

    /// Returns the GUIDs of the projects this project depends on in the solution.
    #[must_use]
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Returns the names of the projects referenced by this project, without duplicates.
    #[must_use]
    pub fn project_references(&self) -> &[String] {
        &self.project_references
    }

    /// Returns the GUID of the containing solution folder, or an empty string.
    #[must_use]
    pub fn parent_project_guid(&self) -> &str {
        &self.parent_project_guid
    }

    /// Returns the configurations the solution declares for the project.
    #[must_use]
    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    /// Returns the SDK declared by the project file.
    #[must_use]
    pub fn sdk_type(&self) -> SdkType {
        self.sdk_type
    }

    /// Returns the raw `OutputType` value.
    #[must_use]
    pub fn output_type(&self) -> &str {
        &self.output_type
    }

    /// Returns the build flags.
    #[must_use]
    pub fn flags(&self) -> ProjectFlags {
        self.flags
    }

    /// Returns `true` if `UseWPF` is set.
    #[must_use]
    pub fn use_wpf(&self) -> bool {
        self.flags.contains(ProjectFlags::USE_WPF)
    }

    /// Returns `true` if `UseWindowsForms` is set.
    #[must_use]
    pub fn use_windows_forms(&self) -> bool {
        self.flags.contains(ProjectFlags::USE_WINDOWS_FORMS)
    }

    /// Returns `true` if `TreatWarningsAsErrors` is set.
    #[must_use]
    pub fn is_treat_warnings_as_errors(&self) -> bool {
        self.flags.contains(ProjectFlags::TREAT_WARNINGS_AS_ERRORS)
    }

    /// Returns `true` if `IsTestProject` is set.
    #[must_use]
    pub fn is_test_project(&self) -> bool {
        self.flags.contains(ProjectFlags::TEST_PROJECT)
    }

    /// Returns `true` if `IsPackable` is `false`.
    #[must_use]
    pub fn is_not_packable(&self) -> bool {
        self.flags.contains(ProjectFlags::NOT_PACKABLE)
    }

    /// Returns `true` if the project links a `.editorconfig` file.
    #[must_use]
    pub fn is_editor_config_linked(&self) -> bool {
        self.flags.contains(ProjectFlags::EDITOR_CONFIG_LINKED)
    }

    /// Returns the nullable annotation context.
    #[must_use]
    pub fn nullable(&self) -> NullableAnnotation {
        self.nullable
    }

    /// Returns the raw `LangVersion` value.
    #[must_use]
    pub fn language_version(&self) -> &str {
        &self.language_version
    }

    /// Returns the raw `NeutralLanguage` value.
    #[must_use]
    pub fn neutral_language(&self) -> &str {
        &self.neutral_language
    }

    /// Returns the package version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the assembly version.
    #[must_use]
    pub fn assembly_version(&self) -> &str {
        &self.assembly_version
    }

    /// Returns the file version.
    #[must_use]
    pub fn file_version(&self) -> &str {
        &self.file_version
    }

    /// Returns `true` if the project declares a package version.
    #[must_use]
    pub fn has_version(&self) -> bool {
        !self.version.is_empty()
    }

    /// Returns `true` if the project declares an assembly version.
    #[must_use]
    pub fn is_assembly_version_valid(&self) -> bool {
        !self.assembly_version.is_empty()
    }

    /// Returns `true` if the project declares a file version.
    #[must_use]
    pub fn is_file_version_valid(&self) -> bool {
        !self.file_version.is_empty()
    }

    /// Returns the `Authors` value.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the `Description` value.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the `Copyright` value.
    #[must_use]
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Returns the repository URL, if the project declares one.
    #[must_use]
    pub fn repository_url(&self) -> Option<&Url> {
        self.repository_url.as_ref()
    }

    /// Returns `true` if the project declares a repository URL.
    #[must_use]
    pub fn has_repository_url(&self) -> bool {
        self.repository_url.is_some()
    }

    /// Returns the `ApplicationIcon` value.
    #[must_use]
    pub fn application_icon(&self) -> &str {
        &self.application_icon
    }

    /// Returns the `PackageIcon` value.
    #[must_use]
    pub fn package_icon(&self) -> &str {
        &self.package_icon
    }

    /// Returns the `PackageLicenseExpression` value.
    #[must_use]
    pub fn package_license_expression(&self) -> &str {
        &self.package_license_expression
    }

    /// Returns the `PackageReadmeFile` value.
    #[must_use]
    pub fn package_readme_file(&self) -> &str {
        &self.package_readme_file
    }

    /// Returns the raw `TargetFramework` or `TargetFrameworks` value.
    #[must_use]
    pub fn target_frameworks(&self) -> &str {
        &self.target_frameworks
    }

    /// Returns `true` if at least one target framework was decoded.
    #[must_use]
    pub fn has_target_frameworks(&self) -> bool {
        !self.frameworks.is_empty()
    }

    /// Returns the decoded target frameworks, in declaration order.
    #[must_use]
    pub fn frameworks(&self) -> &[Framework] {
        &self.frameworks
    }

    /// Returns the package references, in document order.
    #[must_use]
    pub fn package_references(&self) -> &[PackageReference] {
        &self.package_references
    }
}
