use crate::domain::model::{Address, AddressPayload, Zone};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait AddressStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Address>>;
    async fn find_by_postcode(&self, postcode: &str) -> Result<Vec<Address>>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Address>>;
    async fn insert(&self, payload: AddressPayload) -> Result<Address>;
    /// 不存在時回傳 `None`
    async fn replace(&self, id: i32, payload: AddressPayload) -> Result<Option<Address>>;
    /// 回傳該筆記錄是否存在
    async fn delete_by_id(&self, id: i32) -> Result<bool>;
}

#[async_trait]
pub trait BlacklistGateway: Send + Sync {
    async fn get_all_zones(&self) -> Result<Vec<Zone>>;
}

pub trait ConfigProvider: Send + Sync {
    fn listen_address(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn blacklist_endpoint(&self) -> &str;
    fn blacklist_timeout(&self) -> Duration;
    fn filter_enabled(&self) -> bool;
    fn retry_max_attempts(&self) -> u32;
    fn retry_backoff(&self) -> Duration;
    fn seed_file(&self) -> Option<&str>;
}
