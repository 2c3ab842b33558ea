//! Raw records produced by a [`crate::SolutionParser`].
//!
//! Records are plain data with public fields: a parser fills them in, and
//! [`crate::Solution`] turns them into entities.

/// One solution configuration a project takes part in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationRecord {
    /// Solution configuration key, `"<configuration>|<platform>"`
    pub key: String,
    /// Project configuration built for this solution configuration, e.g. `Debug|AnyCPU`
    pub project_configuration: String,
    /// The project is built in this solution configuration
    pub include_in_build: bool,
}

/// A project declared in a solution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Project name
    pub name: String,
    /// Path of the project file, relative to the solution directory, as written
    pub relative_path: String,
    /// Project GUID, braces included
    pub guid: String,
    /// Type tag, see [`crate::ProjectType::from_solution_tag`]
    pub project_type: String,
    /// Extension of the project file, dot included
    pub extension: String,
    /// Depth in the dependency graph, `-1` when undefined
    pub dependency_level: i32,
    /// The project builds a static library
    pub is_static_library: bool,
    /// GUIDs of the projects this project depends on
    pub dependencies: Vec<String>,
    /// GUIDs of the projects referenced through solution-level properties
    pub project_references: Vec<String>,
    /// GUID of the containing solution folder
    pub parent_guid: Option<String>,
    /// Solution configurations the project takes part in
    pub configurations: Vec<ConfigurationRecord>,
}

/// Everything a solution parser extracts from a solution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionRecord {
    /// File format version, e.g. `12.00`
    pub format_version: String,
    /// Version of Visual Studio that last saved the solution
    pub visual_studio_version: String,
    /// Oldest version of Visual Studio that can open the solution
    pub minimum_visual_studio_version: String,
    /// Solution configuration keys, `"<configuration>|<platform>"`, in declaration order
    pub configurations: Vec<String>,
    /// Projects, in declaration order
    pub projects: Vec<ProjectRecord>,
}
