pub mod toml_config;

pub use toml_config::TomlConfig;

pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_BLACKLIST_ENDPOINT: &str = "http://localhost:8081/blacklist";
pub const DEFAULT_BLACKLIST_TIMEOUT_SECONDS: u64 = 5;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

#[cfg(feature = "cli")]
mod cli {
    use super::{DEFAULT_BLACKLIST_ENDPOINT, DEFAULT_LISTEN_ADDRESS};
    use crate::core::retry::RetryPolicy;
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_non_empty_string, validate_positive_number, validate_retry_budget, validate_url,
        Validate,
    };
    use clap::{ArgAction, Parser};
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "address-lookup")]
    #[command(about = "Address directory service with postcode blacklist filtering")]
    pub struct CliConfig {
        /// Path to a TOML configuration file; replaces the service flags below
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(long, default_value = DEFAULT_LISTEN_ADDRESS)]
        pub listen_address: String,

        /// Per-request timeout; must exceed the worst-case blacklist retry budget
        #[arg(long, default_value = "30")]
        pub request_timeout_seconds: u64,

        #[arg(long, default_value = DEFAULT_BLACKLIST_ENDPOINT)]
        pub blacklist_endpoint: String,

        #[arg(long, default_value = "5")]
        pub blacklist_timeout_seconds: u64,

        /// Suppress results for blacklisted postcodes
        #[arg(long, env = "ADDRESS_FILTER_ENABLED", default_value_t = true, action = ArgAction::Set)]
        pub filter_enabled: bool,

        #[arg(long, default_value = "3")]
        pub retry_attempts: u32,

        #[arg(long, default_value = "1000")]
        pub retry_backoff_ms: u64,

        /// JSON file with addresses to load at startup
        #[arg(long)]
        pub seed_file: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn listen_address(&self) -> &str {
            &self.listen_address
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(self.request_timeout_seconds)
        }

        fn blacklist_endpoint(&self) -> &str {
            &self.blacklist_endpoint
        }

        fn blacklist_timeout(&self) -> Duration {
            Duration::from_secs(self.blacklist_timeout_seconds)
        }

        fn filter_enabled(&self) -> bool {
            self.filter_enabled
        }

        fn retry_max_attempts(&self) -> u32 {
            self.retry_attempts
        }

        fn retry_backoff(&self) -> Duration {
            Duration::from_millis(self.retry_backoff_ms)
        }

        fn seed_file(&self) -> Option<&str> {
            self.seed_file.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_non_empty_string("listen_address", &self.listen_address)?;
            validate_url("blacklist_endpoint", &self.blacklist_endpoint)?;
            validate_positive_number("blacklist_timeout_seconds", self.blacklist_timeout_seconds, 1)?;
            validate_positive_number("retry_attempts", self.retry_attempts, 1)?;
            validate_retry_budget(
                "request_timeout_seconds",
                &RetryPolicy::new(self.retry_max_attempts(), self.retry_backoff()),
                self.blacklist_timeout(),
                self.request_timeout(),
            )?;
            Ok(())
        }
    }

}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
