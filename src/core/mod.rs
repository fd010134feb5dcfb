pub mod directory;
pub mod filter;
pub mod retry;

pub use crate::domain::model::{Address, AddressPayload, Zone};
pub use crate::domain::ports::{AddressStore, BlacklistGateway, ConfigProvider};
pub use crate::utils::error::Result;
