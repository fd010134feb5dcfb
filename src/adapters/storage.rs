use crate::core::{Address, AddressPayload, AddressStore};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::sync::RwLock;

#[derive(Debug)]
struct StoreState {
    next_id: i32,
    records: BTreeMap<i32, Address>,
}

/// 記憶體內的地址 store，id 從 1 開始遞增且刪除後不重複使用
#[derive(Debug)]
pub struct InMemoryAddressStore {
    state: RwLock<StoreState>,
}

impl Default for InMemoryAddressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAddressStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }

    /// 從 JSON 檔案（`AddressPayload` 陣列）載入初始資料
    pub async fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path).await?;
        let payloads: Vec<AddressPayload> = serde_json::from_str(&content)?;

        let count = payloads.len();
        let store = Self::new();
        for payload in payloads {
            payload.validate()?;
            store.insert(payload).await?;
        }

        tracing::info!("📂 Seeded {} addresses from {}", count, path.as_ref().display());
        Ok(store)
    }
}

#[async_trait]
impl AddressStore for InMemoryAddressStore {
    async fn find_all(&self) -> Result<Vec<Address>> {
        let state = self.state.read().await;
        Ok(state.records.values().cloned().collect())
    }

    async fn find_by_postcode(&self, postcode: &str) -> Result<Vec<Address>> {
        let state = self.state.read().await;
        Ok(state
            .records
            .values()
            .filter(|address| address.postcode == postcode)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Address>> {
        let state = self.state.read().await;
        Ok(state.records.get(&id).cloned())
    }

    async fn insert(&self, payload: AddressPayload) -> Result<Address> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let address = Address::from_payload(id, payload);
        state.records.insert(id, address.clone());
        Ok(address)
    }

    async fn replace(&self, id: i32, payload: AddressPayload) -> Result<Option<Address>> {
        let mut state = self.state.write().await;
        match state.records.get_mut(&id) {
            Some(existing) => {
                *existing = Address::from_payload(id, payload);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let mut state = self.state.write().await;
        Ok(state.records.remove(&id).is_some())
    }
}
