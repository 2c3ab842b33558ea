//! # slnscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the slnscope library. Import this module to get quick access to the essential
//! types for solution and project inspection.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all slnscope operations
pub use crate::Error;

/// The result type used throughout slnscope
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Solution entity and loading
pub use crate::solution::{Solution, SolutionLoader, SolutionResult};

/// Solution parser collaborator and its built-in implementation
pub use crate::solution::{SlnParser, SolutionParser};

// ================================================================================================
// Project Metadata
// ================================================================================================

/// Project entity and its classification
pub use crate::project::{NullableAnnotation, Project, ProjectFlags, ProjectType, SdkType};

/// Target frameworks
pub use crate::project::{Framework, FrameworkMoniker, FrameworkType};

/// References and configurations
pub use crate::project::{Configuration, PackageReference};

/// Version consistency
pub use crate::project::{is_version_compatible, VersionConsistency};
