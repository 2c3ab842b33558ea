use std::path::Path;

use serde::Serialize;
use slnscope::{Framework, FrameworkMoniker};

use crate::{
    app::GlobalOptions,
    commands::common::{display_failures, failures, load_solution, FailureInfo},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct FrameworkInfo {
    pub project: String,
    pub name: String,
    pub family: String,
    pub major: i32,
    pub minor: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub platform_major: i32,
    pub platform_minor: i32,
}

#[derive(Debug, Serialize)]
pub struct FrameworkList {
    pub frameworks: Vec<FrameworkInfo>,
    /// Projects declaring frameworks of which none could be decoded.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub undecoded: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<FailureInfo>,
}

fn framework_info(project: &str, framework: &Framework) -> FrameworkInfo {
    FrameworkInfo {
        project: project.to_string(),
        name: framework.name().to_string(),
        family: framework.framework_type().to_string(),
        major: framework.major(),
        minor: framework.minor(),
        platform: (framework.moniker() != FrameworkMoniker::None)
            .then(|| framework.moniker().to_string()),
        platform_major: framework.moniker_major(),
        platform_minor: framework.moniker_minor(),
    }
}

fn version_text(major: i32, minor: i32) -> String {
    if major < 0 {
        "-".to_string()
    } else {
        format!("{major}.{minor}")
    }
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let result = load_solution(path, true)?;

    let mut list = FrameworkList {
        frameworks: Vec::new(),
        undecoded: Vec::new(),
        failed: failures(&result),
    };

    for project in result.loaded() {
        if project.has_target_frameworks() && project.frameworks().is_empty() {
            list.undecoded.push(project.name().to_string());
        }

        list.frameworks.extend(
            project
                .frameworks()
                .iter()
                .map(|framework| framework_info(project.name(), framework)),
        );
    }

    print_output(&list, opts, |list| {
        let mut tw = TabWriter::new(&[
            ("Project", Align::Left),
            ("Framework", Align::Left),
            ("Family", Align::Left),
            ("Version", Align::Right),
            ("Platform", Align::Left),
            ("Platform version", Align::Right),
        ]);
        for framework in &list.frameworks {
            tw.row(vec![
                framework.project.clone(),
                framework.name.clone(),
                framework.family.clone(),
                version_text(framework.major, framework.minor),
                framework.platform.clone().unwrap_or_else(|| "-".to_string()),
                version_text(framework.platform_major, framework.platform_minor),
            ]);
        }
        tw.print_or("No target frameworks found.");

        for project in &list.undecoded {
            println!("{project}: no target framework could be decoded");
        }
        display_failures(&list.failed);
    })
}
