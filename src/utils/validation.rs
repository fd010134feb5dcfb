use crate::core::retry::RetryPolicy;
use crate::utils::error::{AddressError, Result};
use std::time::Duration;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AddressError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AddressError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AddressError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(AddressError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AddressError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 黑名單查詢的最長耗時（含重試）必須小於請求逾時，否則黑名單故障會拖垮讀取
pub fn validate_retry_budget(
    field_name: &str,
    retry: &RetryPolicy,
    blacklist_timeout: Duration,
    request_timeout: Duration,
) -> Result<()> {
    let budget = retry.worst_case_duration(blacklist_timeout);
    if budget >= request_timeout {
        return Err(AddressError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}s", request_timeout.as_secs()),
            reason: format!(
                "Request timeout must exceed the blacklist retry budget of {}ms ({} attempts x {}ms timeout + {}ms backoff between attempts)",
                budget.as_millis(),
                retry.max_attempts(),
                blacklist_timeout.as_millis(),
                retry.backoff().as_millis()
            ),
        });
    }
    Ok(())
}

/// 地址欄位的業務規則：不可為空白
pub fn validate_required_field(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AddressError::validation(field_name, "must not be blank"));
    }
    Ok(())
}
