//! Solution loading result types and statistics.

use crate::{
    project::{Project, VersionConsistency},
    solution::Solution,
};

/// Result of a [`crate::SolutionLoader`] run.
///
/// Contains the solution along with statistics about the loading process: which project files
/// were loaded, which failed, and which projects have inconsistent versions.
///
/// # Usage
///
/// ```rust,no_run
/// use slnscope::{SolutionLoader, SolutionResult};
///
/// # fn main() -> slnscope::Result<()> {
/// let result: SolutionResult = SolutionLoader::new()
///     .solution_file("Method.Contracts.sln")?
///     .build()?;
///
/// if result.is_complete_success() {
///     println!("Loaded {} projects", result.success_count());
/// } else {
///     for (project, error) in &result.failed_loads {
///         println!("{}: {}", project, error);
///     }
/// }
///
/// for (project, consistency) in &result.version_errors {
///     println!("{}: {}", project, consistency);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SolutionResult {
    /// The solution, with details loaded for every project in `loaded_projects`
    pub solution: Solution,
    /// Names of the projects whose project file was loaded
    pub loaded_projects: Vec<String>,
    /// Projects whose project file failed to load (project name, error message)
    pub failed_loads: Vec<(String, String)>,
    /// Projects whose versions are inconsistent (project name, check outcome)
    pub version_errors: Vec<(String, VersionConsistency)>,
}

impl SolutionResult {
    /// Creates an empty result for `solution`.
    #[must_use]
    pub fn with_solution(solution: Solution) -> Self {
        SolutionResult {
            solution,
            loaded_projects: Vec::new(),
            failed_loads: Vec::new(),
            version_errors: Vec::new(),
        }
    }

    /// Check if every eligible project file was loaded.
    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.failed_loads.is_empty()
    }

    /// Check if any project file failed to load.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed_loads.is_empty()
    }

    /// Check if any project has inconsistent versions.
    #[must_use]
    pub fn has_version_errors(&self) -> bool {
        !self.version_errors.is_empty()
    }

    /// Iterate over the projects whose project file was loaded, in solution order.
    ///
    /// Unlike [`SolutionResult::loaded_projects`], projects sharing a name stay distinct.
    pub fn loaded(&self) -> impl Iterator<Item = &Project> {
        self.solution
            .projects()
            .iter()
            .filter(|project| project.is_loaded())
    }

    /// Get the number of loaded project files.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.loaded_projects.len()
    }

    /// Get the number of project files that failed to load.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failed_loads.len()
    }

    pub(crate) fn record_success(&mut self, project: String) {
        self.loaded_projects.push(project);
    }

    pub(crate) fn record_failure(&mut self, project: String, error_message: String) {
        self.failed_loads.push((project, error_message));
    }

    pub(crate) fn record_version_error(&mut self, project: String, consistency: VersionConsistency) {
        self.version_errors.push((project, consistency));
    }
}
