//! UI module for console progress output
//!
//! Interactive terminals get colored symbols; CI and hosted platforms get
//! plain `[OK]` / `[SKIP]` / `[FAIL]` tags that read well in captured logs.

mod context;
mod output;

pub use context::UiContext;
pub use output::{intro, key_value, step_error, step_ok, step_skip, step_start};
