use std::path::Path;

use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_solution,
    output::{or_dash, print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct SolutionInfo {
    pub name: String,
    pub file: String,
    pub format_version: String,
    pub visual_studio_version: String,
    pub minimum_visual_studio_version: String,
    pub configurations: Vec<String>,
    pub project_count: usize,
    pub msbuild_project_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Serialize)]
pub struct ProjectEntry {
    pub name: String,
    pub project_type: String,
    pub path: String,
    pub dependency_level: i32,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let solution = load_solution(path, false)?.solution;

    let projects: Vec<ProjectEntry> = solution
        .projects()
        .iter()
        .map(|project| ProjectEntry {
            name: project.name().to_string(),
            project_type: project.project_type().to_string(),
            path: project.relative_path().to_string(),
            dependency_level: project.dependency_level(),
        })
        .collect();

    let info = SolutionInfo {
        name: solution.name().to_string(),
        file: solution.file_name().display().to_string(),
        format_version: solution.format_version().to_string(),
        visual_studio_version: solution.visual_studio_version().to_string(),
        minimum_visual_studio_version: solution.minimum_visual_studio_version().to_string(),
        configurations: solution
            .configurations()
            .iter()
            .map(ToString::to_string)
            .collect(),
        project_count: projects.len(),
        msbuild_project_count: solution
            .projects()
            .iter()
            .filter(|project| project.project_type().is_msbuild_candidate())
            .count(),
        projects,
    };

    print_output(&info, opts, |info| {
        println!("Solution:        {}", info.name);
        println!("File:            {}", info.file);
        println!("Format version:  {}", info.format_version);
        println!("VS version:      {}", or_dash(&info.visual_studio_version));
        println!(
            "Minimum VS:      {}",
            or_dash(&info.minimum_visual_studio_version)
        );
        println!("Configurations:  {}", info.configurations.join(", "));
        println!(
            "Projects:        {} ({} MSBuild)",
            info.project_count, info.msbuild_project_count
        );

        if !info.projects.is_empty() {
            println!();
            let mut tw = TabWriter::new(&[
                ("Name", Align::Left),
                ("Type", Align::Left),
                ("Level", Align::Right),
                ("Path", Align::Left),
            ])
            .indent("  ");
            for project in &info.projects {
                tw.row(vec![
                    project.name.clone(),
                    project.project_type.clone(),
                    project.dependency_level.to_string(),
                    project.path.clone(),
                ]);
            }
            tw.print_or("");
        }
    })
}
