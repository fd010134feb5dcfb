use super::{
    DEFAULT_BLACKLIST_ENDPOINT, DEFAULT_BLACKLIST_TIMEOUT_SECONDS, DEFAULT_LISTEN_ADDRESS,
    DEFAULT_REQUEST_TIMEOUT_SECONDS,
};
use crate::core::retry::{RetryPolicy, DEFAULT_BACKOFF, DEFAULT_MAX_ATTEMPTS};
use crate::core::ConfigProvider;
use crate::utils::error::{AddressError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_retry_budget, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub blacklist: BlacklistConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub listen_address: Option<String>,
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlacklistConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_attempts: Option<u32>,
    pub backoff_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub seed_file: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AddressError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AddressError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BLACKLIST_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AddressError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("server.listen_address", self.listen_address())?;
        validate_url("blacklist.endpoint", self.blacklist_endpoint())?;

        if let Some(timeout) = self.blacklist.timeout_seconds {
            validate_positive_number("blacklist.timeout_seconds", timeout, 1)?;
        }

        if let Some(attempts) = self.retry.max_attempts {
            validate_positive_number("retry.max_attempts", attempts, 1)?;
        }

        validate_retry_budget(
            "server.request_timeout_seconds",
            &RetryPolicy::new(self.retry_max_attempts(), self.retry_backoff()),
            self.blacklist_timeout(),
            self.request_timeout(),
        )?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn listen_address(&self) -> &str {
        self.server
            .listen_address
            .as_deref()
            .unwrap_or(DEFAULT_LISTEN_ADDRESS)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.server
                .request_timeout_seconds
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        )
    }

    fn blacklist_endpoint(&self) -> &str {
        self.blacklist
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_BLACKLIST_ENDPOINT)
    }

    fn blacklist_timeout(&self) -> Duration {
        Duration::from_secs(
            self.blacklist
                .timeout_seconds
                .unwrap_or(DEFAULT_BLACKLIST_TIMEOUT_SECONDS),
        )
    }

    /// 未設定時預設啟用
    fn filter_enabled(&self) -> bool {
        self.filter.enabled.unwrap_or(true)
    }

    fn retry_max_attempts(&self) -> u32 {
        self.retry.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    fn retry_backoff(&self) -> Duration {
        self.retry
            .backoff_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_BACKOFF)
    }

    fn seed_file(&self) -> Option<&str> {
        self.store.seed_file.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
