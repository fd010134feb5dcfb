use crate::core::retry::RetryPolicy;
use crate::domain::ports::BlacklistGateway;
use std::sync::Arc;

/// 判斷郵遞區號是否應被隱藏
///
/// 每次查詢都會重新向黑名單服務取得最新資料，不做快取。黑名單服務
/// 在重試用盡後仍失敗時採 fail-open：視為未列入黑名單。
#[derive(Clone)]
pub struct FilterPolicy {
    enabled: bool,
    gateway: Arc<dyn BlacklistGateway>,
    retry: RetryPolicy,
}

impl FilterPolicy {
    pub fn new(enabled: bool, gateway: Arc<dyn BlacklistGateway>, retry: RetryPolicy) -> Self {
        Self {
            enabled,
            gateway,
            retry,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn is_blacklisted(&self, postcode: &str) -> bool {
        if postcode.trim().is_empty() || !self.enabled {
            return false;
        }

        let gateway = self.gateway.as_ref();
        match self.retry.execute(move || gateway.get_all_zones()).await {
            Ok(zones) => {
                let blacklisted = zones.iter().any(|zone| zone.post_code == postcode);
                if blacklisted {
                    tracing::info!("🚫 Postcode '{}' is blacklisted, suppressing results", postcode);
                }
                blacklisted
            }
            Err(e) => {
                // fail-open
                tracing::error!(
                    "❌ Error checking blacklist service for '{}': {} (treating as not blacklisted)",
                    postcode,
                    e
                );
                false
            }
        }
    }
}
