use std::fmt;

/// A build configuration of a project, as declared by the solution.
///
/// There is one configuration per solution configuration and platform pair the project takes
/// part in, such as `Debug|x64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Configuration {
    project: String,
    configuration_name: String,
    platform_name: String,
    project_configuration: String,
    include_in_build: bool,
}

impl Configuration {
    /// Creates a configuration owned by the project named `project`.
    #[must_use]
    pub fn new(
        project: impl Into<String>,
        configuration_name: impl Into<String>,
        platform_name: impl Into<String>,
        include_in_build: bool,
    ) -> Self {
        Configuration {
            project: project.into(),
            configuration_name: configuration_name.into(),
            platform_name: platform_name.into(),
            project_configuration: String::new(),
            include_in_build,
        }
    }

    /// Sets the project configuration built when the solution is built in this configuration.
    #[must_use]
    pub fn with_project_configuration(mut self, project_configuration: impl Into<String>) -> Self {
        self.project_configuration = project_configuration.into();
        self
    }

    /// Creates a configuration from a `"<configuration>|<platform>"` key.
    ///
    /// The key is suffixed with `|` before splitting, so a key without a separator yields the
    /// whole key as configuration name and an empty platform name.
    #[must_use]
    pub fn from_key(project: impl Into<String>, key: &str, include_in_build: bool) -> Self {
        let padded = format!("{key}|");
        let mut parts = padded.split('|');
        let configuration_name = parts.next().unwrap_or_default();
        let platform_name = parts.next().unwrap_or_default();

        Configuration::new(project, configuration_name, platform_name, include_in_build)
    }

    /// Returns the name of the project this configuration belongs to.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the configuration name, e.g. `Debug`.
    #[must_use]
    pub fn configuration_name(&self) -> &str {
        &self.configuration_name
    }

    /// Returns the platform name, e.g. `x64`.
    #[must_use]
    pub fn platform_name(&self) -> &str {
        &self.platform_name
    }

    /// Returns the project configuration mapped to this solution configuration, e.g.
    /// `Debug|AnyCPU`, or an empty string for solution-level configurations.
    #[must_use]
    pub fn project_configuration(&self) -> &str {
        &self.project_configuration
    }

    /// Returns `true` if the project is built in this configuration.
    #[must_use]
    pub fn include_in_build(&self) -> bool {
        self.include_in_build
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.configuration_name, self.platform_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_key() {
        let configuration = Configuration::from_key("App", "Release|Any CPU", true);
        assert_eq!(configuration.project(), "App");
        assert_eq!(configuration.configuration_name(), "Release");
        assert_eq!(configuration.platform_name(), "Any CPU");
        assert!(configuration.include_in_build());
        assert_eq!(configuration.to_string(), "Release|Any CPU");
    }

    #[test]
    fn from_key_without_separator() {
        let configuration = Configuration::from_key("App", "Debug", false);
        assert_eq!(configuration.configuration_name(), "Debug");
        assert_eq!(configuration.platform_name(), "");
        assert!(!configuration.include_in_build());
    }

    #[test]
    fn from_key_extra_separators() {
        let configuration = Configuration::from_key("App", "Debug|x64|extra", true);
        assert_eq!(configuration.configuration_name(), "Debug");
        assert_eq!(configuration.platform_name(), "x64");
    }

    #[test]
    fn project_configuration() {
        let configuration = Configuration::from_key("App", "Debug|x86", true);
        assert_eq!(configuration.project_configuration(), "");

        let configuration = configuration.with_project_configuration("Debug|AnyCPU");
        assert_eq!(configuration.project_configuration(), "Debug|AnyCPU");
        assert_eq!(configuration.to_string(), "Debug|x86");
    }
}
