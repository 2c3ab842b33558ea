// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'file/physical.rs' uses mmap to map a file into memory

//! # slnscope
//!
//! A cross-platform inspector for Visual Studio solutions and MSBuild project files, written in
//! pure Rust. `slnscope` reads `.sln` files to enumerate their projects, then reads each
//! project file to extract its metadata: target frameworks, versions, package references, SDK
//! and output type. On top of that it runs a version consistency check between the package
//! version and the assembly and file versions.
//!
//! `slnscope` is not an MSBuild evaluator. It reads literal element and attribute values and
//! does not resolve properties, conditions or imports.
//!
//! ## Features
//!
//! - **Solution parsing** - Projects, GUIDs, solution folders, dependencies and the
//!   configuration/platform matrix of `.sln` files
//! - **Project metadata** - SDK, output type, versions, package metadata and build flags
//! - **Target framework decoding** - `net48`, `netstandard2.0`, `netcoreapp3.1` and
//!   `net8.0-windows7.0` decoded into structured versions
//! - **References** - Package references with their conditions, deduplicated project
//!   references
//! - **Consistency checks** - Assembly and file versions compared with the package version
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! slnscope = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust,no_run
//! use slnscope::prelude::*;
//!
//! let result = SolutionLoader::new()
//!     .solution_file("Method.Contracts.sln")?
//!     .build()?;
//!
//! for project in result.solution.projects() {
//!     println!("{}: {}", project.name(), project.project_type());
//! }
//! # Ok::<(), slnscope::Error>(())
//! ```
//!
//! ### Basic Usage
//!
//! ```rust,no_run
//! use slnscope::Solution;
//!
//! let mut solution = Solution::from_path("tests/samples/Method.Contracts/Method.Contracts.sln")?;
//! let paths: Vec<_> = solution
//!     .projects()
//!     .iter()
//!     .map(|project| solution.project_path(project))
//!     .collect();
//!
//! for (project, path) in solution.projects_mut().iter_mut().zip(paths) {
//!     if project.project_type().is_msbuild_candidate() {
//!         project.load_details(path)?;
//!         for framework in project.frameworks() {
//!             println!("{} targets {}", project.name(), framework);
//!         }
//!     }
//! }
//! # Ok::<(), slnscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`solution`] - [`Solution`] entity, the [`SolutionParser`] collaborator trait, the
//!   built-in [`SlnParser`] and the [`SolutionLoader`] builder
//! - [`project`] - [`Project`] entity, the project file extractor, [`Framework`] decoding and
//!   the version consistency check
//! - [`xml`] - Minimal element tree the extractor works on
//! - [`file`] - Input backends (memory-mapped files, in-memory buffers) and text decoding
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result). Missing elements are never errors;
//! only input that cannot be understood at all is:
//!
//! ```rust,no_run
//! use slnscope::{Error, Solution};
//!
//! match Solution::from_path("tests/samples/Method.Contracts/Method.Contracts.sln") {
//!     Ok(solution) => println!("{} projects", solution.projects().len()),
//!     Err(Error::NotSupported) => println!("Solution format not supported"),
//!     Err(Error::Malformed { message, .. }) => println!("Malformed solution: {}", message),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! # Install fuzzing tools
//! cargo install cargo-fuzz
//!
//! # Run fuzzers
//! cargo +nightly fuzz run project --release
//! cargo +nightly fuzz run solution --release
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```

#[macro_use]
pub(crate) mod error;
pub mod file;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust,no_run
/// use slnscope::prelude::*;
///
/// let solution = Solution::from_path("Method.Contracts.sln")?;
/// let folders = solution
///     .projects()
///     .iter()
///     .filter(|project| project.project_type() == ProjectType::SolutionFolder)
///     .count();
/// # Ok::<(), slnscope::Error>(())
/// ```
pub mod prelude;

/// Projects and the metadata read from their project files.
pub mod project;

/// Solutions, solution parsers and the solution loader.
pub mod solution;

/// Minimal XML element tree.
pub mod xml;

/// `slnscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
///
/// # Examples
///
/// ```rust,no_run
/// use slnscope::{Result, Solution};
///
/// fn load_solution(path: &str) -> Result<Solution> {
///     Solution::from_path(path)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `slnscope` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

pub use project::{
    is_version_compatible, Configuration, Framework, FrameworkMoniker, FrameworkType,
    NullableAnnotation, PackageReference, Project, ProjectFlags, ProjectType, SdkType,
    VersionConsistency,
};
pub use solution::{
    ConfigurationRecord, ProjectRecord, SlnParser, Solution, SolutionLoader, SolutionParser,
    SolutionRecord, SolutionResult,
};
