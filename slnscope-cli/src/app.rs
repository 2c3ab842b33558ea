use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// slnscope - Visual Studio solution and MSBuild project inspection
#[derive(Debug, Parser)]
#[command(name = "slnscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display solution overview: name, format, Visual Studio version, configurations.
    Info {
        /// Path to the .sln file.
        #[arg(value_name = "SLN")]
        path: PathBuf,
    },

    /// List projects with their type, SDK, output type, frameworks and version.
    Projects {
        /// Path to the .sln file.
        #[arg(value_name = "SLN")]
        path: PathBuf,
    },

    /// List the decoded target frameworks of every project.
    Frameworks {
        /// Path to the .sln file.
        #[arg(value_name = "SLN")]
        path: PathBuf,
    },

    /// List package references of every project.
    Packages {
        /// Path to the .sln file.
        #[arg(value_name = "SLN")]
        path: PathBuf,

        /// Show only packages whose name contains this text.
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
    },

    /// Check version consistency of every project. Exits with status 1 on errors.
    Check {
        /// Path to the .sln file.
        #[arg(value_name = "SLN")]
        path: PathBuf,
    },

    /// Check every `<DIR>/<name>/<name>.sln` below a directory.
    Scan {
        /// Directory holding one solution folder per repository.
        #[arg(value_name = "DIR")]
        path: PathBuf,
    },
}
