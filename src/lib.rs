pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::registry::{API_DOCS, CLI_DOCS, DEFAULTS};
pub use core::wait::{status_line, wait_a_second, wait_a_second_to, wait_with_defaults, WaitRequest};
pub use utils::error::{Result, WaitError};
