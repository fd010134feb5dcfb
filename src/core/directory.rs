use crate::core::filter::FilterPolicy;
use crate::domain::model::{Address, AddressPayload};
use crate::domain::ports::AddressStore;
use crate::utils::error::{AddressError, Result};
use crate::utils::validation::Validate;
use std::sync::Arc;

/// 地址目錄服務：查詢時套用黑名單過濾，寫入操作直接委派給 store
#[derive(Clone)]
pub struct AddressDirectory {
    store: Arc<dyn AddressStore>,
    filter: FilterPolicy,
}

impl AddressDirectory {
    pub fn new(store: Arc<dyn AddressStore>, filter: FilterPolicy) -> Self {
        Self { store, filter }
    }

    /// 未帶郵遞區號（或為空白）時回傳全部地址
    pub async fn list(&self, postcode: Option<&str>) -> Result<Vec<Address>> {
        match postcode {
            Some(postcode) if !postcode.trim().is_empty() => self.list_by_postcode(postcode).await,
            _ => self.list_all().await,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Address>> {
        self.store.find_all().await
    }

    pub async fn list_by_postcode(&self, postcode: &str) -> Result<Vec<Address>> {
        if postcode.trim().is_empty() {
            return self.list_all().await;
        }

        if self.filter.is_blacklisted(postcode).await {
            return Ok(Vec::new());
        }

        self.store.find_by_postcode(postcode).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Address> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AddressError::not_found(id))
    }

    pub async fn create(&self, payload: AddressPayload) -> Result<Address> {
        payload.validate()?;
        let address = self.store.insert(payload).await?;
        tracing::info!("✅ Created address {}", address.id);
        Ok(address)
    }

    pub async fn update(&self, id: i32, payload: AddressPayload) -> Result<Address> {
        payload.validate()?;
        let address = self
            .store
            .replace(id, payload)
            .await?
            .ok_or_else(|| AddressError::not_found(id))?;
        tracing::info!("✅ Updated address {}", id);
        Ok(address)
    }

    /// 刪除不存在的 id 回傳 `NotFound`
    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.store.delete_by_id(id).await? {
            return Err(AddressError::not_found(id));
        }
        tracing::info!("🗑️ Deleted address {}", id);
        Ok(())
    }
}
