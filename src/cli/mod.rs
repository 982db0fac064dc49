//! Command-line interface

pub mod args;
mod bootstrap;

pub use args::{Cli, LogFormat};
pub use bootstrap::execute;
