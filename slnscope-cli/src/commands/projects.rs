use std::path::Path;

use serde::Serialize;
use slnscope::Project;

use crate::{
    app::GlobalOptions,
    commands::common::{display_failures, failures, load_solution, FailureInfo},
    output::{or_dash, print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    pub path: String,
    pub project_type: String,
    pub sdk: String,
    pub output_type: String,
    pub nullable: String,
    pub frameworks: Vec<String>,
    pub version: String,
    pub test_project: bool,
    pub packable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_references: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectList {
    pub solution: String,
    pub projects: Vec<ProjectInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<FailureInfo>,
}

fn project_info(project: &Project) -> ProjectInfo {
    ProjectInfo {
        name: project.name().to_string(),
        path: project.relative_path().to_string(),
        project_type: project.project_type().to_string(),
        sdk: project.sdk_type().to_string(),
        output_type: project.output_type().to_string(),
        nullable: project.nullable().to_string(),
        frameworks: project
            .frameworks()
            .iter()
            .map(ToString::to_string)
            .collect(),
        version: project.version().to_string(),
        test_project: project.is_test_project(),
        packable: !project.is_not_packable(),
        project_references: project.project_references().to_vec(),
    }
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let result = load_solution(path, true)?;

    let list = ProjectList {
        solution: result.solution.name().to_string(),
        projects: result
            .loaded()
            .map(project_info)
            .collect(),
        failed: failures(&result),
    };

    print_output(&list, opts, |list| {
        let mut tw = TabWriter::new(&[
            ("Name", Align::Left),
            ("Type", Align::Left),
            ("SDK", Align::Left),
            ("Output", Align::Left),
            ("Nullable", Align::Left),
            ("Frameworks", Align::Left),
            ("Version", Align::Left),
        ]);
        for project in &list.projects {
            tw.row(vec![
                project.name.clone(),
                project.project_type.clone(),
                project.sdk.clone(),
                or_dash(&project.output_type),
                project.nullable.clone(),
                or_dash(&project.frameworks.join(";")),
                or_dash(&project.version),
            ]);
        }
        tw.print_or("No MSBuild projects found.");
        display_failures(&list.failed);
    })
}
