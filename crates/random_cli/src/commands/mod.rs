//! CLI command implementations
//!
//! Each submodule implements a family of commands. Commands return the
//! lines to print so that `main` owns all output.

pub mod arrays;
pub mod sample;
