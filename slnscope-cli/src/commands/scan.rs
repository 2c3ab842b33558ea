use std::path::Path;

use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::{
        check::{check_solution, display_check, CheckInfo},
        common::process_directory,
    },
    output::print_output,
};

#[derive(Debug, Serialize)]
struct BatchCheckInfo {
    results: Vec<CheckInfo>,
    total_solutions: usize,
    unreadable_solutions: usize,
    solutions_with_errors: usize,
}

pub fn run(dir: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let (results, fail_count) = process_directory(dir, check_solution)?;

    let batch = BatchCheckInfo {
        total_solutions: results.len() + fail_count,
        unreadable_solutions: fail_count,
        solutions_with_errors: results.iter().filter(|info| info.has_errors()).count(),
        results,
    };

    print_output(&batch, opts, |batch| {
        for info in &batch.results {
            println!("{}:", info.solution);
            display_check(info);
            println!();
        }
        println!(
            "Scanned {} solutions, {} with errors, {} unreadable",
            batch.total_solutions, batch.solutions_with_errors, batch.unreadable_solutions
        );
    })?;

    if batch.solutions_with_errors > 0 || batch.unreadable_solutions > 0 {
        std::process::exit(1);
    }
    Ok(())
}
