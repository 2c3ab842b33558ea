//! Solutions and the parsers that read them.
//!
//! A [`Solution`] is built from the records a [`SolutionParser`] extracts from a solution
//! file. The crate ships [`SlnParser`] for the `.sln` text format; other formats can be
//! plugged in by implementing the trait.
//!
//! # Key Components
//!
//! - [`Solution`] - The solution entity, owning its projects
//! - [`SolutionParser`] - Collaborator turning a solution file into a [`SolutionRecord`]
//! - [`SlnParser`] - Parser for `.sln` files
//! - [`SolutionLoader`] - Builder that parses a solution and loads its projects
//! - [`SolutionResult`] - Outcome of a [`SolutionLoader`] run
//!
//! # Examples
//!
//! ```rust,no_run
//! use slnscope::Solution;
//!
//! let mut solution = Solution::from_path("Method.Contracts.sln")?;
//! println!("{} ({} projects)", solution.name(), solution.projects().len());
//!
//! let directory = solution.directory().to_path_buf();
//! for project in solution.projects_mut() {
//!     if project.project_type().is_msbuild_candidate() {
//!         let path = directory.join(project.relative_path().replace('\\', "/"));
//!         project.load_details(path)?;
//!     }
//! }
//! # Ok::<(), slnscope::Error>(())
//! ```

mod loader;
mod parser;
mod record;
mod result;

pub use loader::SolutionLoader;
pub use parser::SlnParser;
pub use record::{ConfigurationRecord, ProjectRecord, SolutionRecord};
pub use result::SolutionResult;

use std::{
    io::Read,
    path::{Path, PathBuf, MAIN_SEPARATOR_STR},
};

use crate::{project::Configuration, Error, Project, Result};

/// Collaborator that extracts the projects of a solution file.
///
/// Parsers that can only read from the filesystem keep the default
/// [`SolutionParser::parse_reader`], which fails with [`Error::NotSupported`].
pub trait SolutionParser {
    /// Parses the solution file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid solution.
    fn parse_path(&self, path: &Path) -> Result<SolutionRecord>;

    /// Parses a solution from an in-memory stream.
    ///
    /// # Errors
    /// Returns [`Error::NotSupported`] unless the parser supports streams.
    fn parse_reader(&self, _reader: &mut dyn Read) -> Result<SolutionRecord> {
        Err(Error::NotSupported)
    }
}

/// A solution and its projects.
#[derive(Debug, Clone)]
pub struct Solution {
    file_name: PathBuf,
    name: String,
    format_version: String,
    visual_studio_version: String,
    minimum_visual_studio_version: String,
    configurations: Vec<Configuration>,
    projects: Vec<Project>,
}

impl Solution {
    /// Parses the solution file at `path` with [`SlnParser`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid solution.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Solution> {
        Self::from_path_with_parser(path, &SlnParser::new())
    }

    /// Parses the solution file at `path` with `parser`.
    ///
    /// # Errors
    /// Returns the parser's error.
    pub fn from_path_with_parser<P: SolutionParser + ?Sized>(
        path: impl AsRef<Path>,
        parser: &P,
    ) -> Result<Solution> {
        let path = path.as_ref();
        let record = parser.parse_path(path)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::from_record(path.to_path_buf(), name, record))
    }

    /// Parses a solution from `reader` with [`SlnParser`].
    ///
    /// `name` becomes the solution name as given. The solution has no file name, so project
    /// paths resolve against the current directory.
    ///
    /// # Errors
    /// Returns an error if the stream cannot be read or is not a valid solution.
    pub fn from_reader<R: Read>(name: impl Into<String>, reader: &mut R) -> Result<Solution> {
        Self::from_reader_with_parser(name, reader, &SlnParser::new())
    }

    /// Parses a solution from `reader` with `parser`.
    ///
    /// # Errors
    /// Returns [`Error::NotSupported`] if `parser` cannot read streams, or the parser's error.
    pub fn from_reader_with_parser<R: Read, P: SolutionParser + ?Sized>(
        name: impl Into<String>,
        reader: &mut R,
        parser: &P,
    ) -> Result<Solution> {
        let record = parser.parse_reader(reader)?;
        Ok(Self::from_record(PathBuf::new(), name.into(), record))
    }

    /// Parses solution file content held in memory with [`SlnParser`].
    ///
    /// Names the solution like [`Solution::from_reader`].
    ///
    /// # Errors
    /// Returns an error if `data` is not a valid solution.
    pub fn from_mem(name: impl Into<String>, data: &[u8]) -> Result<Solution> {
        let record = SlnParser::new().parse_mem(data)?;
        Ok(Self::from_record(PathBuf::new(), name.into(), record))
    }

    fn from_record(file_name: PathBuf, name: String, record: SolutionRecord) -> Solution {
        let configurations = record
            .configurations
            .iter()
            .map(|key| Configuration::from_key(name.as_str(), key, true))
            .collect();

        Solution {
            file_name,
            name,
            format_version: record.format_version,
            visual_studio_version: record.visual_studio_version,
            minimum_visual_studio_version: record.minimum_visual_studio_version,
            configurations,
            projects: record.projects.into_iter().map(Project::from_record).collect(),
        }
    }

    /// Returns the path the solution was read from, empty for in-memory solutions.
    #[must_use]
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    /// Returns the solution name: the file name without extension, or the name given to an
    /// in-memory constructor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the directory containing the solution file.
    #[must_use]
    pub fn directory(&self) -> &Path {
        self.file_name.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Returns the file format version, e.g. `12.00`.
    #[must_use]
    pub fn format_version(&self) -> &str {
        &self.format_version
    }

    /// Returns the `VisualStudioVersion` value, or an empty string.
    #[must_use]
    pub fn visual_studio_version(&self) -> &str {
        &self.visual_studio_version
    }

    /// Returns the `MinimumVisualStudioVersion` value, or an empty string.
    #[must_use]
    pub fn minimum_visual_studio_version(&self) -> &str {
        &self.minimum_visual_studio_version
    }

    /// Returns the solution configurations; their owner is the solution itself.
    #[must_use]
    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    /// Returns the projects, in declaration order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns the projects for loading their details.
    pub fn projects_mut(&mut self) -> &mut [Project] {
        &mut self.projects
    }

    /// Returns the first project named `name`.
    #[must_use]
    pub fn project_by_name(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.name() == name)
    }

    /// Returns the project with the given GUID, compared case-insensitively.
    #[must_use]
    pub fn project_by_guid(&self, guid: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|project| project.guid_text().eq_ignore_ascii_case(guid))
    }

    /// Returns the location of a project file on this system.
    #[must_use]
    pub fn project_path(&self, project: &Project) -> PathBuf {
        resolve_project_path(self.directory(), project.relative_path())
    }
}

/// Joins a solution-relative project path, written with `\` separators, to `directory`.
pub(crate) fn resolve_project_path(directory: &Path, relative_path: &str) -> PathBuf {
    directory.join(relative_path.replace('\\', MAIN_SEPARATOR_STR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test::method_contracts_solution, ProjectType};

    struct PathOnlyParser;

    impl SolutionParser for PathOnlyParser {
        fn parse_path(&self, _path: &Path) -> Result<SolutionRecord> {
            Ok(SolutionRecord {
                format_version: "12.00".to_string(),
                projects: vec![ProjectRecord {
                    name: "Only".to_string(),
                    project_type: "Mystery".to_string(),
                    ..ProjectRecord::default()
                }],
                ..SolutionRecord::default()
            })
        }
    }

    #[test]
    fn from_mem() {
        let solution =
            Solution::from_mem("Method.Contracts", method_contracts_solution().as_bytes())
                .unwrap();

        assert_eq!(solution.name(), "Method.Contracts");
        assert_eq!(solution.file_name(), Path::new(""));
        assert_eq!(solution.directory(), Path::new(""));
        assert_eq!(solution.format_version(), "12.00");
        assert_eq!(solution.projects().len(), 3);

        let configurations = solution.configurations();
        assert_eq!(configurations.len(), 2);
        assert_eq!(configurations[0].project(), "Method.Contracts");
        assert_eq!(configurations[1].configuration_name(), "Release");
        assert_eq!(configurations[1].platform_name(), "x64");
    }

    #[test]
    fn from_reader() {
        let content = method_contracts_solution();
        let solution =
            Solution::from_reader("Method.Contracts", &mut content.as_bytes()).unwrap();

        assert_eq!(solution.name(), "Method.Contracts");
        assert_eq!(solution.directory(), Path::new(""));
        assert_eq!(
            solution.project_by_name("Solution Items").map(Project::project_type),
            Some(ProjectType::SolutionFolder)
        );
    }

    #[test]
    fn in_memory_name_kept() {
        let data = method_contracts_solution();
        for name in ["My.Solution.v2", "nested/dir/Product", "Product.sln", ""] {
            let solution = Solution::from_mem(name, data.as_bytes()).unwrap();
            assert_eq!(solution.name(), name);
            assert_eq!(solution.file_name(), Path::new(""));
            assert_eq!(solution.configurations()[0].project(), name);
        }
    }

    #[test]
    fn reader_not_supported() {
        let result =
            Solution::from_reader_with_parser("Any", &mut "".as_bytes(), &PathOnlyParser);
        assert!(matches!(result, Err(Error::NotSupported)));

        let solution = Solution::from_path_with_parser("Any.sln", &PathOnlyParser).unwrap();
        assert_eq!(solution.name(), "Any");
        assert_eq!(solution.projects()[0].project_type(), ProjectType::Invalid);
    }

    #[test]
    fn lookups() {
        let solution =
            Solution::from_mem("Method.Contracts", method_contracts_solution().as_bytes())
                .unwrap();

        let project = solution.project_by_name("Method.Contracts").unwrap();
        let lower = project.guid_text().to_lowercase();
        assert_eq!(
            solution.project_by_guid(&lower).map(Project::name),
            Some("Method.Contracts")
        );
        assert!(solution.project_by_name("Missing").is_none());

        let expected = Path::new("Method.Contracts").join("Method.Contracts.csproj");
        assert_eq!(solution.project_path(project), expected);
    }
}
