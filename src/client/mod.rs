//! Client records and the name-keyed roster store

mod data;
mod store;

pub use data::{ClaimsHistory, ClientFields, ClientRecord, RiskLevel, SafetyFeature};
pub use store::{ClientStore, StoreError, CLIENTS_KEY};
