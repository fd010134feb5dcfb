use crate::core::{BlacklistGateway, Zone};
use crate::utils::error::{AddressError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// 透過 HTTP 取得黑名單的 gateway，預期回應為 `Zone` 的 JSON 陣列
#[derive(Debug, Clone)]
pub struct HttpBlacklistGateway {
    endpoint: String,
    client: Client,
}

impl HttpBlacklistGateway {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl BlacklistGateway for HttpBlacklistGateway {
    async fn get_all_zones(&self) -> Result<Vec<Zone>> {
        tracing::debug!("📡 Fetching blacklist from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AddressError::GatewayStatusError {
                status: status.as_u16(),
            });
        }

        let zones: Vec<Zone> = response.json().await?;
        tracing::debug!("📡 Blacklist contains {} zones", zones.len());
        Ok(zones)
    }
}
