//! LUMIA - Liability & Underwriting Management Insurance Assistant
//!
//! This library provides:
//! - Client record management with an ordered, name-keyed store
//! - Liability-exposure calculation from five financial inputs
//! - Coverage tier classification with agent-facing narratives
//! - Dashboard aggregates and printable per-client summary reports
//! - Whole-list persistence to a pluggable key-value surface

pub mod client;
pub mod exposure;
pub mod report;
pub mod storage;

// Re-export commonly used types
pub use client::{ClaimsHistory, ClientFields, ClientRecord, ClientStore, SafetyFeature, StoreError};
pub use exposure::{compute_exposure, ExposureBreakdown, InsuranceTier};
pub use report::{ClientSummary, DashboardStats};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
