//! webboot - deployment bootstrap for Node web apps
//!
//! Installs dependencies, builds the application and launches its server
//! bound to the hosting platform's port and wildcard address.

pub mod cli;
pub mod config;
pub mod error;
pub mod orchestration;
pub mod ui;

pub use error::{WebbootError, WebbootResult};
