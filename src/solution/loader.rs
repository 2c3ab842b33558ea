//! SolutionLoader builder API for loading a solution together with its projects.

use std::path::{Path, PathBuf};

use log::warn;

use crate::{
    solution::{resolve_project_path, SlnParser, Solution, SolutionParser, SolutionResult},
    Error, Result,
};

/// Builder for parsing a solution and loading the details of its projects.
///
/// The loader parses the solution file, reads the project file of every project stored in
/// MSBuild format, and checks version consistency of the loaded projects. A project file that
/// fails to load is recorded in the [`SolutionResult`] and the remaining projects are still
/// processed, unless strict mode is enabled.
///
/// # Usage Examples
///
/// ## Parse and load everything
/// ```rust,no_run
/// use slnscope::SolutionLoader;
///
/// let result = SolutionLoader::new()
///     .solution_file("Method.Contracts.sln")?
///     .build()?;
/// # Ok::<(), slnscope::Error>(())
/// ```
///
/// ## Solution structure only
/// ```rust,no_run
/// use slnscope::SolutionLoader;
///
/// let result = SolutionLoader::new()
///     .solution_file("Method.Contracts.sln")?
///     .load_details(false)
///     .check_versions(false)
///     .build()?;
/// # Ok::<(), slnscope::Error>(())
/// ```
pub struct SolutionLoader {
    /// Solution file to parse
    solution_file: Option<PathBuf>,
    /// Whether to read the project files
    load_details: bool,
    /// Whether to fail on the first project file that cannot be loaded
    strict_mode: bool,
    /// Whether to check version consistency of the loaded projects
    check_versions: bool,
    /// Parser for the solution file
    parser: Box<dyn SolutionParser>,
}

impl SolutionLoader {
    /// Create a new SolutionLoader builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            solution_file: None,
            load_details: true,
            strict_mode: false,
            check_versions: true,
            parser: Box::new(SlnParser::new()),
        }
    }

    /// Set the solution file.
    ///
    /// # Errors
    /// Returns an error if the path does not exist.
    pub fn solution_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Error(format!(
                "Solution file does not exist: {}",
                path.display()
            )));
        }
        self.solution_file = Some(path.to_path_buf());
        Ok(self)
    }

    /// Enable or disable loading of project files (enabled by default).
    ///
    /// Only projects whose type is [`crate::ProjectType::Unknown`] or
    /// [`crate::ProjectType::KnownToBeMSBuildFormat`] have a project file to load.
    #[must_use]
    pub fn load_details(mut self, enabled: bool) -> Self {
        self.load_details = enabled;
        self
    }

    /// Enable or disable strict mode.
    ///
    /// In strict mode, a project file that fails to load fails the build. In non-strict mode
    /// (default), the failure is logged and recorded in the result.
    #[must_use]
    pub fn strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    /// Enable or disable the version consistency check (enabled by default).
    #[must_use]
    pub fn check_versions(mut self, enabled: bool) -> Self {
        self.check_versions = enabled;
        self
    }

    /// Use `parser` instead of [`SlnParser`] to read the solution file.
    #[must_use]
    pub fn with_parser(mut self, parser: impl SolutionParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Parse the solution and load its projects with the configured settings.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No solution file was specified
    /// - The solution file cannot be parsed
    /// - Strict mode is enabled and a project file fails to load
    pub fn build(self) -> Result<SolutionResult> {
        let solution_path = self.solution_file.as_ref().ok_or_else(|| {
            Error::Error(
                "No solution file specified. Use solution_file() to set the solution.".to_string(),
            )
        })?;

        let mut solution = Solution::from_path_with_parser(solution_path, self.parser.as_ref())?;
        let directory = solution.directory().to_path_buf();

        let mut loaded_projects = Vec::new();
        let mut load_failures = Vec::new();

        if self.load_details {
            for project in solution.projects_mut() {
                if !project.project_type().is_msbuild_candidate() {
                    continue;
                }

                let path = resolve_project_path(&directory, project.relative_path());
                match project.load_details(&path) {
                    Ok(()) => loaded_projects.push(project.name().to_string()),
                    Err(e) => {
                        if self.strict_mode {
                            return Err(Error::Error(format!(
                                "Failed to load {} in strict mode: {}",
                                project.name(),
                                e
                            )));
                        }
                        warn!("Failed to load project {}: {}", path.display(), e);
                        load_failures.push((project.name().to_string(), e.to_string()));
                    }
                }
            }
        }

        let mut result = SolutionResult::with_solution(solution);
        for name in loaded_projects {
            result.record_success(name);
        }

        for (name, error) in load_failures {
            result.record_failure(name, error);
        }

        if self.check_versions {
            let version_errors: Vec<_> = result
                .solution
                .projects()
                .iter()
                .map(|project| (project.name().to_string(), project.check_version_consistency()))
                .filter(|(_, consistency)| consistency.has_error)
                .collect();

            for (name, consistency) in version_errors {
                result.record_version_error(name, consistency);
            }
        }

        Ok(result)
    }
}

impl Default for SolutionLoader {
    fn default() -> Self {
        Self::new()
    }
}
