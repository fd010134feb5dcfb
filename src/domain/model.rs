use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use serde::{Deserialize, Serialize};

/// 已儲存的地址記錄，`id` 由 store 指派
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i32,
    pub building: String,
    pub street: String,
    pub town: String,
    pub postcode: String,
}

/// 建立或更新時的請求內容；請求中若帶 `id` 會被忽略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    pub building: String,
    pub street: String,
    pub town: String,
    pub postcode: String,
}

impl Address {
    pub fn from_payload(id: i32, payload: AddressPayload) -> Self {
        Self {
            id,
            building: payload.building,
            street: payload.street,
            town: payload.town,
            postcode: payload.postcode,
        }
    }
}

impl Validate for AddressPayload {
    fn validate(&self) -> Result<()> {
        validate_required_field("building", &self.building)?;
        validate_required_field("street", &self.street)?;
        validate_required_field("town", &self.town)?;
        validate_required_field("postcode", &self.postcode)?;
        Ok(())
    }
}

/// 黑名單中的一筆郵遞區號
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub post_code: String,
    pub zone: String,
}
