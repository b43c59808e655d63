//! Command-line interface module.

mod args;
pub mod dedup;
pub mod icons;
pub mod translate;

pub use args::{Cli, Commands};
