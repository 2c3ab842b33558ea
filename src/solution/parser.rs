//! Parser for the Visual Studio `.sln` text format.
//!
//! A solution file is a line-oriented document:
//!
//! ```text
//! Microsoft Visual Studio Solution File, Format Version 12.00
//! # Visual Studio Version 17
//! VisualStudioVersion = 17.5.33516.290
//! MinimumVisualStudioVersion = 10.0.40219.1
//! Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "App", "App\App.csproj", "{GUID}"
//!     ProjectSection(ProjectDependencies) = postProject
//!         {GUID} = {GUID}
//!     EndProjectSection
//! EndProject
//! Global
//!     GlobalSection(SolutionConfigurationPlatforms) = preSolution
//!         Debug|Any CPU = Debug|Any CPU
//!     EndGlobalSection
//!     GlobalSection(ProjectConfigurationPlatforms) = postSolution
//!         {GUID}.Debug|Any CPU.ActiveCfg = Debug|Any CPU
//!         {GUID}.Debug|Any CPU.Build.0 = Debug|Any CPU
//!     EndGlobalSection
//!     GlobalSection(NestedProjects) = preSolution
//!         {CHILD} = {PARENT}
//!     EndGlobalSection
//! EndGlobal
//! ```
//!
//! Sections the parser does not use are skipped. GUIDs are compared case-insensitively, since
//! tools disagree on their casing.

use std::{
    collections::{HashMap, HashSet},
    io::Read,
    path::Path,
};

use log::debug;
use petgraph::{
    algo::{condensation, toposort},
    graph::{DiGraph, NodeIndex},
};

use crate::{
    file::{decode_text, read_to_memory, Backend, Physical},
    solution::{ConfigurationRecord, ProjectRecord, SolutionParser, SolutionRecord},
    Error, Result,
};

const HEADER: &str = "Microsoft Visual Studio Solution File, Format Version ";
const MIN_FORMAT_VERSION: u32 = 7;

/// Type GUIDs of projects stored as MSBuild files.
const MSBUILD_PROJECT_TYPES: [&str; 11] = [
    "{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}", // C#
    "{F184B08F-C81C-45F6-A57F-5ABD9991F28F}", // VB
    "{13B669BE-BB05-4DDF-9536-439F39A36129}", // CPS
    "{9A19103F-16F7-4668-BE54-9A1E7A4F7556}", // CPS C#
    "{778DAE3C-4631-46EA-AA77-85C1314464D9}", // CPS VB
    "{6EC3EE1D-3C4E-46DD-8F32-0CC8E7565705}", // CPS F#
    "{E6FDF86B-F3D1-11D4-8576-0002A516ECE8}", // J#
    "{8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942}", // C++
    "{F2A71F9B-5D33-465A-A702-920D77279786}", // F#
    "{C8D11400-126E-41CD-887F-60BD40844F9E}", // database
    "{BBD0F5D1-1CC4-42FD-BA4C-A96779C64378}", // synergex
];
const SOLUTION_FOLDER_TYPE: &str = "{2150E333-8FDC-42A3-9474-1A3956D46DE8}";
const SHARED_PROJECT_TYPE: &str = "{D954291E-2A0B-460D-934E-DC6B0785DB48}";
const WEB_DEPLOYMENT_TYPE: &str = "{2CFEAB61-6A3B-4EB8-B523-560B4BEEF521}";
const WEB_PROJECT_TYPE: &str = "{E24C65DC-7377-472B-9ABA-BC803B73C61A}";

/// The built-in [`SolutionParser`] for `.sln` files.
///
/// # Examples
///
/// ```rust
/// use slnscope::SlnParser;
///
/// let record = SlnParser::new().parse_mem(b"
/// Microsoft Visual Studio Solution File, Format Version 12.00
/// Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"App\", \"App\\App.csproj\", \"{11111111-2222-3333-4444-555555555555}\"
/// EndProject
/// ")?;
///
/// assert_eq!(record.format_version, "12.00");
/// assert_eq!(record.projects[0].name, "App");
/// assert_eq!(record.projects[0].project_type, "KnownToBeMSBuildFormat");
/// # Ok::<(), slnscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SlnParser;

impl SlnParser {
    /// Creates a new parser.
    #[must_use]
    pub fn new() -> Self {
        SlnParser
    }

    /// Parses solution file content held in memory.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] for empty input, [`Error::Malformed`] if the header or a project
    /// declaration cannot be read, and [`Error::NotSupported`] for format versions older than 7.
    pub fn parse_mem(&self, data: &[u8]) -> Result<SolutionRecord> {
        if data.is_empty() {
            return Err(Error::Empty);
        }

        let text = decode_text(data)?;
        parse_text(&text)
    }
}

impl SolutionParser for SlnParser {
    fn parse_path(&self, path: &Path) -> Result<SolutionRecord> {
        let input = Physical::new(path)?;
        self.parse_mem(input.data())
    }

    fn parse_reader(&self, reader: &mut dyn Read) -> Result<SolutionRecord> {
        let input = read_to_memory(reader)?;
        self.parse_mem(input.data())
    }
}

/// Project configuration entries of the `ProjectConfigurationPlatforms` section, keyed by
/// upper-case project GUID and solution configuration.
#[derive(Default)]
struct ProjectConfigurations {
    active: HashMap<(String, String), String>,
    build: HashSet<(String, String)>,
}

fn parse_text(text: &str) -> Result<SolutionRecord> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let mut record = SolutionRecord {
        format_version: parse_header(lines.next())?,
        ..SolutionRecord::default()
    };
    let mut project_configurations = ProjectConfigurations::default();
    let mut nested_projects = HashMap::new();

    while let Some(line) = lines.next() {
        if line.starts_with("Project(") {
            record.projects.push(parse_project(line, &mut lines)?);
        } else if line == "Global" {
            parse_global(
                &mut lines,
                &mut record.configurations,
                &mut project_configurations,
                &mut nested_projects,
            );
        } else if let Some((key, value)) = line.split_once('=') {
            match key.trim() {
                "VisualStudioVersion" => record.visual_studio_version = value.trim().to_string(),
                "MinimumVisualStudioVersion" => {
                    record.minimum_visual_studio_version = value.trim().to_string();
                }
                _ => {}
            }
        }
    }

    for project in &mut record.projects {
        let guid = project.guid.to_uppercase();
        project.parent_guid = nested_projects.get(&guid).cloned();
        project.configurations =
            project_configuration_records(&guid, &record.configurations, &project_configurations);
    }

    let levels = dependency_levels(&record.projects);
    for (project, level) in record.projects.iter_mut().zip(levels) {
        project.dependency_level = level;
    }

    debug!(
        "Parsed solution format {} with {} projects",
        record.format_version,
        record.projects.len()
    );

    Ok(record)
}

fn parse_header(line: Option<&str>) -> Result<String> {
    let version = line
        .and_then(|line| line.strip_prefix(HEADER))
        .ok_or_else(|| malformed_error!("Missing solution file header"))?
        .trim();

    let major = version
        .split('.')
        .next()
        .and_then(|major| major.parse::<u32>().ok())
        .ok_or_else(|| malformed_error!("Invalid solution format version - {}", version))?;

    if major < MIN_FORMAT_VERSION {
        return Err(Error::NotSupported);
    }

    Ok(version.to_string())
}

/// Returns the double-quoted values of a line, in order.
fn quoted_values(line: &str) -> Vec<&str> {
    line.split('"').skip(1).step_by(2).collect()
}

fn parse_project<'a, I>(line: &str, lines: &mut I) -> Result<ProjectRecord>
where
    I: Iterator<Item = &'a str>,
{
    let values = quoted_values(line);
    let &[type_guid, name, relative_path, guid] = values.as_slice() else {
        return Err(malformed_error!("Invalid project declaration - {}", line));
    };

    let mut record = ProjectRecord {
        name: name.to_string(),
        relative_path: relative_path.to_string(),
        guid: guid.to_string(),
        project_type: project_type_tag(type_guid, relative_path).to_string(),
        extension: extension(relative_path).to_string(),
        ..ProjectRecord::default()
    };

    while let Some(line) = lines.next() {
        if line == "EndProject" {
            return Ok(record);
        }

        if line.starts_with("ProjectSection(ProjectDependencies)") {
            for entry in section_entries(lines, "EndProjectSection") {
                if let Some((dependency, _)) = entry.split_once('=') {
                    push_unique(&mut record.dependencies, dependency.trim());
                }
            }
        } else if line.starts_with("ProjectSection(WebsiteProperties)") {
            for entry in section_entries(lines, "EndProjectSection") {
                let Some((key, value)) = entry.split_once('=') else {
                    continue;
                };
                if key.trim() != "ProjectReferences" {
                    continue;
                }

                for reference in value.trim().trim_matches('"').split(';') {
                    let guid = reference.split('|').next().unwrap_or_default().trim();
                    if !guid.is_empty() {
                        push_unique(&mut record.project_references, guid);
                        push_unique(&mut record.dependencies, guid);
                    }
                }
            }
        } else if line.starts_with("ProjectSection(") {
            section_entries(lines, "EndProjectSection");
        }
    }

    Err(malformed_error!("Missing EndProject for project {}", name))
}

fn parse_global<'a, I>(
    lines: &mut I,
    configurations: &mut Vec<String>,
    project_configurations: &mut ProjectConfigurations,
    nested_projects: &mut HashMap<String, String>,
) where
    I: Iterator<Item = &'a str>,
{
    while let Some(line) = lines.next() {
        if line == "EndGlobal" {
            return;
        }

        if line.starts_with("GlobalSection(SolutionConfigurationPlatforms)") {
            for entry in section_entries(lines, "EndGlobalSection") {
                if let Some((key, _)) = entry.split_once('=') {
                    push_unique(configurations, key.trim());
                }
            }
        } else if line.starts_with("GlobalSection(ProjectConfigurationPlatforms)") {
            for entry in section_entries(lines, "EndGlobalSection") {
                parse_project_configuration(entry, project_configurations);
            }
        } else if line.starts_with("GlobalSection(NestedProjects)") {
            for entry in section_entries(lines, "EndGlobalSection") {
                if let Some((child, parent)) = entry.split_once('=') {
                    nested_projects.insert(child.trim().to_uppercase(), parent.trim().to_string());
                }
            }
        } else if line.starts_with("GlobalSection(") {
            section_entries(lines, "EndGlobalSection");
        }
    }
}

/// Parses `{GUID}.<configuration>|<platform>.ActiveCfg = <project configuration>` and
/// `{GUID}.<configuration>|<platform>.Build.0 = <project configuration>`.
fn parse_project_configuration(entry: &str, project_configurations: &mut ProjectConfigurations) {
    let Some((key, value)) = entry.split_once('=') else {
        return;
    };
    let Some((guid, rest)) = key.trim().split_once("}.") else {
        return;
    };
    let guid = format!("{}}}", guid.to_uppercase());

    if let Some(configuration) = rest.strip_suffix(".ActiveCfg") {
        project_configurations.active.insert(
            (guid, configuration.to_string()),
            value.trim().to_string(),
        );
    } else if let Some(configuration) = rest.strip_suffix(".Build.0") {
        project_configurations
            .build
            .insert((guid, configuration.to_string()));
    }
}

/// Collects the lines of a section up to its terminator.
fn section_entries<'a, I>(lines: &mut I, terminator: &str) -> Vec<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    lines.take_while(|line| *line != terminator).collect()
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|existing| existing == value) {
        list.push(value.to_string());
    }
}

fn project_type_tag(type_guid: &str, relative_path: &str) -> &'static str {
    let type_guid = type_guid.to_uppercase();

    if MSBUILD_PROJECT_TYPES.contains(&type_guid.as_str()) {
        "KnownToBeMSBuildFormat"
    } else if type_guid == SOLUTION_FOLDER_TYPE {
        "SolutionFolder"
    } else if type_guid == SHARED_PROJECT_TYPE {
        "SharedProject"
    } else if type_guid == WEB_DEPLOYMENT_TYPE {
        "WebDeploymentProject"
    } else if type_guid == WEB_PROJECT_TYPE {
        "WebProject"
    } else if relative_path.to_lowercase().ends_with(".etp") {
        "EtpSubProject"
    } else {
        "Unknown"
    }
}

/// Returns the extension of the last path component, dot included.
fn extension(relative_path: &str) -> &str {
    let file_name = relative_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(relative_path);

    match file_name.rfind('.') {
        Some(index) if index > 0 => &file_name[index..],
        _ => "",
    }
}

fn project_configuration_records(
    guid: &str,
    solution_configurations: &[String],
    project_configurations: &ProjectConfigurations,
) -> Vec<ConfigurationRecord> {
    solution_configurations
        .iter()
        .filter_map(|configuration| {
            let key = (guid.to_string(), configuration.clone());
            let active = project_configurations.active.get(&key)?;

            Some(ConfigurationRecord {
                key: configuration.clone(),
                project_configuration: active.clone(),
                include_in_build: project_configurations.build.contains(&key),
            })
        })
        .collect()
}

/// Computes the dependency level of every project.
///
/// Dependencies on projects outside the solution are ignored. A project on a dependency cycle,
/// or depending on one, gets `-1`.
fn dependency_levels(projects: &[ProjectRecord]) -> Vec<i32> {
    let index: HashMap<String, usize> = projects
        .iter()
        .enumerate()
        .map(|(position, project)| (project.guid.to_uppercase(), position))
        .collect();

    // Edges point from a project to its dependencies
    let mut graph = DiGraph::<usize, ()>::with_capacity(projects.len(), 0);
    let nodes: Vec<NodeIndex> = (0..projects.len()).map(|p| graph.add_node(p)).collect();
    let mut self_dependent = vec![false; projects.len()];
    for (position, project) in projects.iter().enumerate() {
        for dependency in &project.dependencies {
            let Some(&target) = index.get(&dependency.to_uppercase()) else {
                continue;
            };
            self_dependent[position] |= target == position;
            graph.update_edge(nodes[position], nodes[target], ());
        }
    }

    let components = condensation(graph, true);
    let Ok(order) = toposort(&components, None) else {
        return vec![-1; projects.len()];
    };

    let mut component_levels = vec![0; components.node_count()];
    let mut levels = vec![0; projects.len()];
    for component in order.into_iter().rev() {
        let members = &components[component];
        let cyclic = members.len() > 1 || members.iter().any(|&p| self_dependent[p]);
        let level = if cyclic {
            -1
        } else {
            components
                .neighbors(component)
                .try_fold(0, |level, dependency| {
                    let dependency_level = component_levels[dependency.index()];
                    (dependency_level >= 0).then_some(level.max(dependency_level + 1))
                })
                .unwrap_or(-1)
        };

        component_levels[component.index()] = level;
        for &position in members {
            levels[position] = level;
        }
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{method_contracts_solution, SolutionFileBuilder, CSHARP_TYPE};

    #[test]
    fn header() {
        assert_eq!(
            parse_header(Some("Microsoft Visual Studio Solution File, Format Version 12.00"))
                .unwrap(),
            "12.00"
        );
        assert!(matches!(
            parse_header(Some("Microsoft Visual Studio Solution File, Format Version 6.00")),
            Err(Error::NotSupported)
        ));
        assert!(matches!(
            parse_header(Some("Microsoft Visual Studio Solution File, Format Version x")),
            Err(Error::Malformed { .. })
        ));
        assert!(matches!(
            parse_header(Some("<Project />")),
            Err(Error::Malformed { .. })
        ));
        assert!(matches!(parse_header(None), Err(Error::Malformed { .. })));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(SlnParser::new().parse_mem(b""), Err(Error::Empty)));
        assert!(matches!(
            SlnParser::new().parse_mem(b"\n\n  \n"),
            Err(Error::Malformed { .. })
        ));
    }

    #[test]
    fn versions() {
        let record = SlnParser::new()
            .parse_mem(method_contracts_solution().as_bytes())
            .unwrap();

        assert_eq!(record.format_version, "12.00");
        assert_eq!(record.visual_studio_version, "17.9.34728.123");
        assert_eq!(record.minimum_visual_studio_version, "10.0.40219.1");
        assert_eq!(
            record.configurations,
            vec!["Debug|x64", "Release|x64"]
        );
    }

    #[test]
    fn projects() {
        let record = SlnParser::new()
            .parse_mem(method_contracts_solution().as_bytes())
            .unwrap();

        let names: Vec<_> = record.projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Method.Contracts", "Method.Contracts.Test", "Solution Items"]
        );

        let library = &record.projects[0];
        assert_eq!(library.project_type, "KnownToBeMSBuildFormat");
        assert_eq!(library.extension, ".csproj");
        assert_eq!(library.dependency_level, 0);
        assert_eq!(library.configurations.len(), 2);
        assert_eq!(library.configurations[0].key, "Debug|x64");
        assert_eq!(library.configurations[0].project_configuration, "Debug|x64");
        assert!(library.configurations[0].include_in_build);

        let test = &record.projects[1];
        assert_eq!(test.dependencies.len(), 1);
        assert_eq!(test.dependency_level, 1);
        assert!(!test.configurations[1].include_in_build);

        let folder = &record.projects[2];
        assert_eq!(folder.project_type, "SolutionFolder");
        assert_eq!(folder.extension, "");
        assert!(folder.configurations.is_empty());
    }

    #[test]
    fn project_types() {
        assert_eq!(
            project_type_tag("{fae04ec0-301f-11d3-bf4b-00c04f79efbc}", "a.csproj"),
            "KnownToBeMSBuildFormat"
        );
        assert_eq!(
            project_type_tag("{9A19103F-16F7-4668-BE54-9A1E7A4F7556}", "a.csproj"),
            "KnownToBeMSBuildFormat"
        );
        assert_eq!(
            project_type_tag(SHARED_PROJECT_TYPE, "a.shproj"),
            "SharedProject"
        );
        assert_eq!(
            project_type_tag(WEB_PROJECT_TYPE, "http://localhost/site"),
            "WebProject"
        );
        assert_eq!(
            project_type_tag(WEB_DEPLOYMENT_TYPE, "a.wdproj"),
            "WebDeploymentProject"
        );
        assert_eq!(
            project_type_tag("{00000000-0000-0000-0000-000000000000}", "Sub\\a.ETP"),
            "EtpSubProject"
        );
        assert_eq!(
            project_type_tag("{00000000-0000-0000-0000-000000000000}", "a.proj"),
            "Unknown"
        );
    }

    #[test]
    fn extensions() {
        assert_eq!(extension("App\\App.csproj"), ".csproj");
        assert_eq!(extension("App/App.Core.vbproj"), ".vbproj");
        assert_eq!(extension("Solution Items"), "");
        assert_eq!(extension("dir.x\\.hidden"), "");
    }

    #[test]
    fn nested_projects() {
        let text = SolutionFileBuilder::new()
            .project(CSHARP_TYPE, "App", "src\\App\\App.csproj", "{00000000-0000-0000-0000-00000000000A}")
            .project(SOLUTION_FOLDER_TYPE, "src", "src", "{00000000-0000-0000-0000-00000000000F}")
            .nested("{00000000-0000-0000-0000-00000000000a}", "{00000000-0000-0000-0000-00000000000F}")
            .build();

        let record = SlnParser::new().parse_mem(text.as_bytes()).unwrap();
        assert_eq!(
            record.projects[0].parent_guid.as_deref(),
            Some("{00000000-0000-0000-0000-00000000000F}")
        );
        assert_eq!(record.projects[1].parent_guid, None);
    }

    #[test]
    fn dependency_cycle() {
        let text = SolutionFileBuilder::new()
            .project_with_dependencies(
                CSHARP_TYPE,
                "A",
                "A\\A.csproj",
                "{00000000-0000-0000-0000-00000000000A}",
                &["{00000000-0000-0000-0000-00000000000B}"],
            )
            .project_with_dependencies(
                CSHARP_TYPE,
                "B",
                "B\\B.csproj",
                "{00000000-0000-0000-0000-00000000000B}",
                &["{00000000-0000-0000-0000-00000000000A}"],
            )
            .project_with_dependencies(
                CSHARP_TYPE,
                "C",
                "C\\C.csproj",
                "{00000000-0000-0000-0000-00000000000C}",
                &["{99999999-0000-0000-0000-000000000000}"],
            )
            .build();

        let record = SlnParser::new().parse_mem(text.as_bytes()).unwrap();
        let levels: Vec<_> = record.projects.iter().map(|p| p.dependency_level).collect();
        assert_eq!(levels, vec![-1, -1, 0]);
    }

    #[test]
    fn dependency_on_itself() {
        let text = SolutionFileBuilder::new()
            .project_with_dependencies(
                CSHARP_TYPE,
                "A",
                "A\\A.csproj",
                "{00000000-0000-0000-0000-00000000000A}",
                &["{00000000-0000-0000-0000-00000000000a}"],
            )
            .project_with_dependencies(
                CSHARP_TYPE,
                "B",
                "B\\B.csproj",
                "{00000000-0000-0000-0000-00000000000B}",
                &["{00000000-0000-0000-0000-00000000000A}"],
            )
            .project(
                CSHARP_TYPE,
                "C",
                "C\\C.csproj",
                "{00000000-0000-0000-0000-00000000000C}",
            )
            .build();

        let record = SlnParser::new().parse_mem(text.as_bytes()).unwrap();
        let levels: Vec<_> = record.projects.iter().map(|p| p.dependency_level).collect();
        assert_eq!(levels, vec![-1, -1, 0]);
    }

    #[test]
    fn dependency_diamond() {
        let project = |guid: &str, dependencies: &[&str]| ProjectRecord {
            guid: guid.to_string(),
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
            ..ProjectRecord::default()
        };
        let projects = vec![
            project("{D}", &["{B}", "{C}"]),
            project("{B}", &["{A}"]),
            project("{C}", &["{B}", "{A}", "{A}"]),
            project("{A}", &[]),
        ];

        assert_eq!(dependency_levels(&projects), vec![3, 1, 2, 0]);
    }

    #[test]
    fn dependency_chain_depth() {
        const DEPTH: usize = 20_000;

        let projects: Vec<_> = (0..DEPTH)
            .map(|position| ProjectRecord {
                guid: format!("{{{position}}}"),
                dependencies: (position > 0)
                    .then(|| format!("{{{}}}", position - 1))
                    .into_iter()
                    .collect(),
                ..ProjectRecord::default()
            })
            .collect();

        let levels = dependency_levels(&projects);
        assert_eq!(levels[0], 0);
        assert_eq!(levels[DEPTH - 1], (DEPTH - 1) as i32);
    }

    #[test]
    fn website_references() {
        let text = "Microsoft Visual Studio Solution File, Format Version 12.00
Project(\"{E24C65DC-7377-472B-9ABA-BC803B73C61A}\") = \"Site\", \"http://localhost/Site\", \"{00000000-0000-0000-0000-000000000001}\"
\tProjectSection(WebsiteProperties) = preProject
\t\tProjectReferences = \"{00000000-0000-0000-0000-000000000002}|Lib.dll;\"
\t\tDebug.AspNetCompiler.Debug = \"True\"
\tEndProjectSection
EndProject
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Lib\", \"Lib\\Lib.csproj\", \"{00000000-0000-0000-0000-000000000002}\"
EndProject
";

        let record = SlnParser::new().parse_mem(text.as_bytes()).unwrap();
        let site = &record.projects[0];
        assert_eq!(site.project_type, "WebProject");
        assert_eq!(
            site.project_references,
            vec!["{00000000-0000-0000-0000-000000000002}"]
        );
        assert_eq!(site.dependencies, site.project_references);
        assert_eq!(site.dependency_level, 1);
    }

    #[test]
    fn unterminated_project() {
        let text = "Microsoft Visual Studio Solution File, Format Version 12.00
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Lib\", \"Lib\\Lib.csproj\", \"{00000000-0000-0000-0000-000000000002}\"
";
        assert!(matches!(
            SlnParser::new().parse_mem(text.as_bytes()),
            Err(Error::Malformed { .. })
        ));

        let text = "Microsoft Visual Studio Solution File, Format Version 12.00
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Lib\"
EndProject
";
        assert!(matches!(
            SlnParser::new().parse_mem(text.as_bytes()),
            Err(Error::Malformed { .. })
        ));
    }
}
