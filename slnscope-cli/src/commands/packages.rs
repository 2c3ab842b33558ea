use std::path::Path;

use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{display_failures, failures, load_solution, FailureInfo},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct PackageInfo {
    pub project: String,
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    pub private_assets: bool,
}

#[derive(Debug, Serialize)]
pub struct PackageList {
    pub packages: Vec<PackageInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<FailureInfo>,
}

pub fn run(path: &Path, name_filter: Option<&str>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let result = load_solution(path, true)?;
    let filter = name_filter.map(str::to_lowercase);

    let packages = result
        .loaded()
        .flat_map(|project| project.package_references())
        .filter(|package| {
            filter
                .as_deref()
                .map_or(true, |f| package.name().to_lowercase().contains(f))
        })
        .map(|package| PackageInfo {
            project: package.project().to_string(),
            name: package.name().to_string(),
            version: package.version().to_string(),
            condition: (!package.is_unconditional()).then(|| package.condition().to_string()),
            private_assets: package.is_all_private_assets(),
        })
        .collect();

    let list = PackageList {
        packages,
        failed: failures(&result),
    };

    print_output(&list, opts, |list| {
        let mut tw = TabWriter::new(&[
            ("Project", Align::Left),
            ("Package", Align::Left),
            ("Version", Align::Left),
            ("Private", Align::Left),
            ("Condition", Align::Left),
        ]);
        for package in &list.packages {
            tw.row(vec![
                package.project.clone(),
                package.name.clone(),
                package.version.clone(),
                if package.private_assets { "all" } else { "" }.to_string(),
                package.condition.clone().unwrap_or_default(),
            ]);
        }
        tw.print_or("No package references found.");
        display_failures(&list.failed);
    })
}
