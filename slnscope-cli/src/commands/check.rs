use std::path::Path;

use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{display_failures, failures, load_solution, FailureInfo},
    output::{or_dash, print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct ProjectCheck {
    pub name: String,
    pub path: String,
    pub version: String,
    pub assembly_version: String,
    pub file_version: String,
    pub consistent: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CheckInfo {
    pub solution: String,
    pub projects: Vec<ProjectCheck>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<FailureInfo>,
    pub error_count: usize,
}

impl CheckInfo {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Load a solution and check the versions of every loaded project.
///
/// Projects that fail to load count as errors.
pub fn check_solution(path: &Path) -> anyhow::Result<CheckInfo> {
    let result = load_solution(path, true)?;

    let projects: Vec<ProjectCheck> = result
        .loaded()
        .map(|project| {
            let consistency = project.check_version_consistency();
            ProjectCheck {
                name: project.name().to_string(),
                path: project.relative_path().to_string(),
                version: project.version().to_string(),
                assembly_version: project.assembly_version().to_string(),
                file_version: project.file_version().to_string(),
                consistent: !consistency.has_error,
                message: consistency.message,
            }
        })
        .collect();

    Ok(CheckInfo {
        solution: result.solution.name().to_string(),
        projects,
        failed: failures(&result),
        error_count: result.version_errors.len() + result.failure_count(),
    })
}

pub fn display_check(info: &CheckInfo) {
    let mut tw = TabWriter::new(&[
        ("Project", Align::Left),
        ("Version", Align::Left),
        ("Assembly", Align::Left),
        ("File", Align::Left),
        ("Status", Align::Left),
    ]);
    for project in &info.projects {
        let status = if project.consistent {
            "OK".to_string()
        } else {
            format!("FAIL  {}", project.message)
        };
        tw.row(vec![
            project.name.clone(),
            or_dash(&project.version),
            or_dash(&project.assembly_version),
            or_dash(&project.file_version),
            status,
        ]);
    }
    tw.print_or("No MSBuild projects found.");
    display_failures(&info.failed);
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let info = check_solution(path)?;

    print_output(&info, opts, |info| {
        display_check(info);
        println!();
        println!("{}: {} error(s)", info.solution, info.error_count);
    })?;

    if info.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
