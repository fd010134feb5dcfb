pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::http::{router, AddressServer};
pub use core::{directory::AddressDirectory, filter::FilterPolicy, retry::RetryPolicy};
pub use utils::error::{AddressError, Result};
