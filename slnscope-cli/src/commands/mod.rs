pub mod check;
pub mod common;
pub mod frameworks;
pub mod info;
pub mod packages;
pub mod projects;
pub mod scan;
