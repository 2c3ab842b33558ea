//! Classification enums and build flags of a project.

use bitflags::bitflags;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Project types.
///
/// A project starts out with the type the solution file declares for it. Projects that the
/// solution only knows as MSBuild files (`Unknown`, `KnownToBeMSBuildFormat`) are refined into
/// `Library`, `Console` or `WinExe` once their project file has been loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, IntoStaticStr)]
pub enum ProjectType {
    /// Valid but unknown project type.
    #[default]
    Unknown,
    /// A library.
    Library,
    /// A console application.
    Console,
    /// An application with user interface.
    WinExe,
    /// A project file in MSBuild format.
    KnownToBeMSBuildFormat,
    /// Solution folder.
    SolutionFolder,
    /// Web Project.
    WebProject,
    /// Web Deployment Project.
    WebDeploymentProject,
    /// Subproject.
    EtpSubProject,
    /// A collection of shared files that is not buildable on its own.
    SharedProject,
    /// Invalid project type.
    Invalid,
}

impl ProjectType {
    /// Converts a solution-level project type tag into a [`ProjectType`].
    ///
    /// Only the tags a solution parser can produce are recognised; `Library`, `Console` and
    /// `WinExe` are derived from the project file and never come from a tag. Anything else maps
    /// to [`ProjectType::Invalid`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slnscope::ProjectType;
    ///
    /// assert_eq!(ProjectType::from_solution_tag("SolutionFolder"), ProjectType::SolutionFolder);
    /// assert_eq!(ProjectType::from_solution_tag("Library"), ProjectType::Invalid);
    /// ```
    #[must_use]
    pub fn from_solution_tag(tag: &str) -> ProjectType {
        match tag {
            "Unknown" => ProjectType::Unknown,
            "KnownToBeMSBuildFormat" => ProjectType::KnownToBeMSBuildFormat,
            "SolutionFolder" => ProjectType::SolutionFolder,
            "WebProject" => ProjectType::WebProject,
            "WebDeploymentProject" => ProjectType::WebDeploymentProject,
            "EtpSubProject" => ProjectType::EtpSubProject,
            "SharedProject" => ProjectType::SharedProject,
            _ => ProjectType::Invalid,
        }
    }

    /// Returns `true` if the project has a project file whose details can be loaded.
    #[must_use]
    pub fn is_msbuild_candidate(self) -> bool {
        matches!(
            self,
            ProjectType::Unknown | ProjectType::KnownToBeMSBuildFormat
        )
    }
}

/// SDK declared by a project file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum SdkType {
    /// No SDK, or an SDK that is not recognised.
    #[default]
    Unknown,
    /// `Microsoft.NET.Sdk`
    Sdk,
    /// `Microsoft.NET.Sdk.WindowsDesktop`
    WindowsDesktop,
}

impl SdkType {
    /// Maps the value of an `Sdk` attribute to an [`SdkType`], if it names a known SDK.
    #[must_use]
    pub fn from_attribute(value: &str) -> Option<SdkType> {
        match value {
            "Microsoft.NET.Sdk" => Some(SdkType::Sdk),
            "Microsoft.NET.Sdk.WindowsDesktop" => Some(SdkType::WindowsDesktop),
            _ => None,
        }
    }
}

/// Values for the `Nullable` project element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum NullableAnnotation {
    /// No nullable value.
    #[default]
    #[strum(disabled)]
    None,
    /// Nullable enabled.
    Enable,
    /// All nullability warnings are enabled.
    Warnings,
    /// All nullability warnings are disabled.
    Annotations,
    /// Nullable disabled.
    Disable,
}

impl NullableAnnotation {
    /// Matches element text case-insensitively; unrecognised text yields
    /// [`NullableAnnotation::None`].
    #[must_use]
    pub fn from_element(value: &str) -> NullableAnnotation {
        value.parse().unwrap_or_default()
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    /// Boolean build settings read from a project file
    pub struct ProjectFlags: u32 {
        /// `UseWPF` is `true`
        const USE_WPF = 0x0001;
        /// `UseWindowsForms` is `true`
        const USE_WINDOWS_FORMS = 0x0002;
        /// `TreatWarningsAsErrors` is `true`
        const TREAT_WARNINGS_AS_ERRORS = 0x0004;
        /// `IsTestProject` is `true`
        const TEST_PROJECT = 0x0008;
        /// `IsPackable` is `false`
        const NOT_PACKABLE = 0x0010;
        /// An `.editorconfig` file is linked into the project
        const EDITOR_CONFIG_LINKED = 0x0020;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn project_type_conversion() {
        for project_type in ProjectType::iter() {
            if matches!(
                project_type,
                ProjectType::Library | ProjectType::Console | ProjectType::WinExe
            ) {
                assert_eq!(
                    ProjectType::from_solution_tag(project_type.into()),
                    ProjectType::Invalid
                );
            } else {
                assert_eq!(
                    ProjectType::from_solution_tag(project_type.into()),
                    project_type
                );
            }
        }

        assert_eq!(ProjectType::from_solution_tag(""), ProjectType::Invalid);
        assert_eq!(
            ProjectType::from_solution_tag("solutionfolder"),
            ProjectType::Invalid
        );
    }

    #[test]
    fn sdk_attribute() {
        assert_eq!(
            SdkType::from_attribute("Microsoft.NET.Sdk"),
            Some(SdkType::Sdk)
        );
        assert_eq!(
            SdkType::from_attribute("Microsoft.NET.Sdk.WindowsDesktop"),
            Some(SdkType::WindowsDesktop)
        );
        assert_eq!(SdkType::from_attribute("Microsoft.NET.Sdk.Web"), None);
        assert_eq!(SdkType::from_attribute("microsoft.net.sdk"), None);
    }

    #[test]
    fn nullable_annotation() {
        assert_eq!(
            NullableAnnotation::from_element("enable"),
            NullableAnnotation::Enable
        );
        assert_eq!(
            NullableAnnotation::from_element("WARNINGS"),
            NullableAnnotation::Warnings
        );
        assert_eq!(
            NullableAnnotation::from_element("Annotations"),
            NullableAnnotation::Annotations
        );
        assert_eq!(
            NullableAnnotation::from_element("disable"),
            NullableAnnotation::Disable
        );
        assert_eq!(
            NullableAnnotation::from_element("on"),
            NullableAnnotation::None
        );
        assert_eq!(NullableAnnotation::from_element(""), NullableAnnotation::None);
        assert_eq!(
            NullableAnnotation::from_element("None"),
            NullableAnnotation::None
        );
        assert_eq!(
            NullableAnnotation::from_element("ENABLE"),
            NullableAnnotation::Enable
        );
        assert!("dIsAbLe".parse::<NullableAnnotation>().is_ok());
        assert!("none".parse::<NullableAnnotation>().is_err());
    }

    #[test]
    fn flags() {
        let mut flags = ProjectFlags::default();
        assert!(flags.is_empty());

        flags.set(ProjectFlags::USE_WPF, true);
        flags.set(ProjectFlags::NOT_PACKABLE, true);
        assert!(flags.contains(ProjectFlags::USE_WPF | ProjectFlags::NOT_PACKABLE));
        assert!(!flags.contains(ProjectFlags::TEST_PROJECT));

        flags.set(ProjectFlags::USE_WPF, false);
        assert_eq!(flags, ProjectFlags::NOT_PACKABLE);
    }
}
