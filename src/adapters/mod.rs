// Adapters layer: concrete implementations for external systems (store, blacklist service, http).

pub mod blacklist;
pub mod http;
pub mod storage;

pub use blacklist::HttpBlacklistGateway;
pub use storage::InMemoryAddressStore;
