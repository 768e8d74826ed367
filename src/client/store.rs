//! Ordered client-record store with whole-list persistence

use chrono::Utc;
use thiserror::Error;

use super::{ClientFields, ClientRecord};
use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the entire serialized roster as one blob
pub const CLIENTS_KEY: &str = "lumia-clients";

/// Failure of a store operation
///
/// All errors are reported synchronously to the caller, never retried,
/// and never fatal: the store remains usable after any of them.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Required fields absent or empty; lists every offending field
    #[error("missing required fields: {}", missing.join(", "))]
    Validation { missing: Vec<String> },

    /// Lookup or update targeted a name absent from the store
    #[error("client not found: {0}")]
    NotFound(String),

    /// Create or rename would produce two records with the same name
    #[error("a client named '{0}' already exists")]
    DuplicateName(String),

    /// The persistence surface rejected the write; the in-memory list
    /// keeps the accepted state and is NOT rolled back
    #[error("failed to persist client roster: {0}")]
    Persistence(#[from] StorageError),
}

/// Ordered collection of client records for one session
///
/// Owns its record list and storage handle; constructed once per session
/// and passed by reference to all call sites. Insertion order is preserved
/// across updates and persistence round-trips, with the most recently
/// created record last.
pub struct ClientStore<S: KeyValueStore> {
    records: Vec<ClientRecord>,
    storage: S,
}

impl<S: KeyValueStore> ClientStore<S> {
    /// Create an empty store over the given persistence surface
    pub fn new(storage: S) -> Self {
        Self { records: Vec::new(), storage }
    }

    /// Load the saved roster from the persistence surface
    ///
    /// A missing, unreadable, or corrupt blob falls back to an empty
    /// roster; no partial recovery is attempted.
    pub fn load(storage: S) -> Self {
        let records = match storage.get(CLIENTS_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<ClientRecord>>(&blob) {
                Ok(records) => {
                    log::info!("loaded {} client records", records.len());
                    records
                }
                Err(e) => {
                    log::warn!("saved client roster is corrupt, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => {
                log::info!("no saved client roster, starting empty");
                Vec::new()
            }
            Err(e) => {
                log::warn!("failed to read saved client roster, starting empty: {}", e);
                Vec::new()
            }
        };

        Self { records, storage }
    }

    /// Full ordered roster, insertion order preserved
    pub fn list(&self) -> &[ClientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by exact name match
    pub fn find_by_name(&self, name: &str) -> Option<&ClientRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Create a new client record
    ///
    /// Requires name/email/phone/address, all five financial fields, and
    /// the claims history; a [`StoreError::Validation`] enumerates every
    /// missing field. Derived fields are computed here, the record is
    /// appended, and the full roster is persisted. On a persistence
    /// failure the record stays in the in-memory roster and the error is
    /// surfaced to the caller.
    pub fn create(&mut self, fields: ClientFields) -> Result<&ClientRecord, StoreError> {
        let mut missing: Vec<String> = Vec::new();
        let mut require = |field: &str, value: &Option<String>| {
            if value.as_deref().map_or(true, str::is_empty) {
                missing.push(field.to_string());
            }
        };
        require("name", &fields.name);
        require("email", &fields.email);
        require("phone", &fields.phone);
        require("address", &fields.address);
        require("homeValue", &fields.home_value);
        require("vehicleValue", &fields.vehicle_value);
        require("income", &fields.income);
        require("lifeInsurance", &fields.life_insurance);
        require("investments", &fields.investments);
        if fields.claims_history.is_none() {
            missing.push("claimsHistory".to_string());
        }
        if !missing.is_empty() {
            return Err(StoreError::Validation { missing });
        }

        let name = fields.name.unwrap_or_default();
        if self.find_by_name(&name).is_some() {
            return Err(StoreError::DuplicateName(name));
        }

        let home_value = fields.home_value.unwrap_or_default();
        let vehicle_value = fields.vehicle_value.unwrap_or_default();
        let income = fields.income.unwrap_or_default();
        let life_insurance = fields.life_insurance.unwrap_or_default();
        let investments = fields.investments.unwrap_or_default();

        let breakdown = crate::exposure::compute_exposure_from_text(
            &home_value,
            &vehicle_value,
            &income,
            &life_insurance,
            &investments,
        );

        let created_at = Utc::now();
        let record = ClientRecord {
            id: created_at.timestamp_millis().to_string(),
            name,
            email: fields.email.unwrap_or_default(),
            phone: fields.phone.unwrap_or_default(),
            address: fields.address.unwrap_or_default(),
            home_value,
            vehicle_value,
            income,
            life_insurance,
            investments,
            claims_history: fields.claims_history.unwrap_or(super::ClaimsHistory::None),
            safety_features: fields.safety_features.unwrap_or_default(),
            liability_exposure: breakdown.total_exposure,
            insurance_tier: breakdown.tier(),
            created_at,
            updated_at: None,
        };

        log::info!(
            "created client '{}' with exposure {:.2} ({})",
            record.name,
            record.liability_exposure,
            record.insurance_tier.label()
        );

        let idx = self.records.len();
        self.records.push(record);
        self.persist()?;
        Ok(&self.records[idx])
    }

    /// Update an existing record by name
    ///
    /// Supplied fields are merged over the existing record; unspecified
    /// fields keep their previous values. The four identity fields must
    /// still be non-empty after the merge. Derived fields are recomputed,
    /// the updated timestamp is set, and the record is replaced in place
    /// so its position in the roster is unchanged.
    pub fn update(&mut self, name: &str, fields: ClientFields) -> Result<&ClientRecord, StoreError> {
        let idx = self
            .records
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        let mut record = self.records[idx].clone();
        if let Some(v) = fields.name {
            record.name = v;
        }
        if let Some(v) = fields.email {
            record.email = v;
        }
        if let Some(v) = fields.phone {
            record.phone = v;
        }
        if let Some(v) = fields.address {
            record.address = v;
        }
        if let Some(v) = fields.home_value {
            record.home_value = v;
        }
        if let Some(v) = fields.vehicle_value {
            record.vehicle_value = v;
        }
        if let Some(v) = fields.income {
            record.income = v;
        }
        if let Some(v) = fields.life_insurance {
            record.life_insurance = v;
        }
        if let Some(v) = fields.investments {
            record.investments = v;
        }
        if let Some(v) = fields.claims_history {
            record.claims_history = v;
        }
        if let Some(v) = fields.safety_features {
            record.safety_features = v;
        }

        let mut missing: Vec<String> = Vec::new();
        for (field, value) in [
            ("name", &record.name),
            ("email", &record.email),
            ("phone", &record.phone),
            ("address", &record.address),
        ] {
            if value.is_empty() {
                missing.push(field.to_string());
            }
        }
        if !missing.is_empty() {
            return Err(StoreError::Validation { missing });
        }

        if record.name != name && self.records.iter().any(|r| r.name == record.name) {
            return Err(StoreError::DuplicateName(record.name));
        }

        let breakdown = record.exposure_breakdown();
        record.liability_exposure = breakdown.total_exposure;
        record.insurance_tier = breakdown.tier();
        record.updated_at = Some(Utc::now());

        log::info!(
            "updated client '{}' with exposure {:.2} ({})",
            record.name,
            record.liability_exposure,
            record.insurance_tier.label()
        );

        self.records[idx] = record;
        self.persist()?;
        Ok(&self.records[idx])
    }

    /// Serialize the full roster and write it through the storage handle
    ///
    /// On failure the in-memory roster keeps the most recent accepted
    /// state; memory and durable storage are allowed to diverge and the
    /// caller is expected to surface the error to the user.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.records).map_err(StorageError::from)?;
        self.storage.set(CLIENTS_KEY, &blob)?;
        log::debug!("persisted {} client records", self.records.len());
        Ok(())
    }

    /// Tear down the store, handing back the persistence surface
    pub fn into_storage(self) -> S {
        self.storage
    }
}
