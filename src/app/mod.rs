use crate::adapters::{HttpBlacklistGateway, InMemoryAddressStore};
use crate::core::directory::AddressDirectory;
use crate::core::filter::FilterPolicy;
use crate::core::retry::RetryPolicy;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use std::sync::Arc;

/// 依配置組裝 store、黑名單 gateway 與過濾策略
pub async fn build_directory<C: ConfigProvider>(config: &C) -> Result<AddressDirectory> {
    let store = match config.seed_file() {
        Some(path) => InMemoryAddressStore::from_seed_file(path).await?,
        None => InMemoryAddressStore::new(),
    };

    let gateway = HttpBlacklistGateway::new(
        config.blacklist_endpoint().to_string(),
        config.blacklist_timeout(),
    )?;

    let retry = RetryPolicy::new(config.retry_max_attempts(), config.retry_backoff());

    tracing::info!(
        filter_enabled = config.filter_enabled(),
        blacklist_endpoint = %gateway.endpoint(),
        retry_attempts = retry.max_attempts(),
        retry_backoff_ms = retry.backoff().as_millis() as u64,
        "Address directory configured"
    );

    let filter = FilterPolicy::new(config.filter_enabled(), Arc::new(gateway), retry);

    Ok(AddressDirectory::new(Arc::new(store), filter))
}
