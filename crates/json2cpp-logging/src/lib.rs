//! json2cpp-logging - Stderr logging for the json2cpp tool
//!
//! This crate provides:
//! - [`init_logging`] to install the global subscriber once per process
//! - [`WarningCounter`] tracing layer that tallies warnings and errors
//! - Level filtering driven by [`LogLevel`] with `RUST_LOG` override

mod filter;
mod layer;

pub use filter::{env_filter, level_filter};
pub use json2cpp_core::LogLevel;
pub use layer::{WarningCounter, init_logging};
