use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;
use serde::Serialize;
use slnscope::{SolutionLoader, SolutionResult};

/// A project whose file could not be loaded.
#[derive(Debug, Serialize)]
pub struct FailureInfo {
    pub project: String,
    pub error: String,
}

/// Load a solution, parsing the project files of its MSBuild projects when `load_details` is set.
pub fn load_solution(path: &Path, load_details: bool) -> anyhow::Result<SolutionResult> {
    SolutionLoader::new()
        .solution_file(path)
        .and_then(|loader| loader.load_details(load_details).build())
        .with_context(|| format!("failed to load solution: {}", path.display()))
}

/// Failed project loads of a loader run, in solution order.
pub fn failures(result: &SolutionResult) -> Vec<FailureInfo> {
    result
        .failed_loads
        .iter()
        .map(|(project, error)| FailureInfo {
            project: project.clone(),
            error: error.clone(),
        })
        .collect()
}

/// Print the failed loads of a loader run below a table.
pub fn display_failures(failures: &[FailureInfo]) {
    if failures.is_empty() {
        return;
    }

    println!("\nFailed to load:");
    for failure in failures {
        println!("  {}: {}", failure.project, failure.error);
    }
}

/// Collect `<dir>/<name>/<name>.sln` for every subdirectory of `dir` that has one.
pub fn collect_solutions(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;

    let mut solutions = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        let Some(name) = path.file_name().map(|name| name.to_string_lossy().to_string()) else {
            continue;
        };

        let candidate = path.join(format!("{name}.sln"));
        if candidate.is_file() {
            solutions.push(candidate);
        }
    }

    solutions.sort();
    Ok(solutions)
}

/// Run `process` on every solution found by [`collect_solutions`] in parallel.
///
/// Results keep the sorted solution order. Failures are logged and counted.
pub fn process_directory<T, F>(dir: &Path, process: F) -> anyhow::Result<(Vec<T>, usize)>
where
    T: Send,
    F: Fn(&Path) -> anyhow::Result<T> + Sync,
{
    let solutions = collect_solutions(dir)?;
    let outcomes: Vec<anyhow::Result<T>> = solutions.par_iter().map(|path| process(path)).collect();

    let mut results = Vec::with_capacity(outcomes.len());
    let mut fail_count = 0;
    for (path, outcome) in solutions.iter().zip(outcomes) {
        match outcome {
            Ok(result) => results.push(result),
            Err(error) => {
                log::warn!("{}: {error:#}", path.display());
                fail_count += 1;
            }
        }
    }

    Ok((results, fail_count))
}
