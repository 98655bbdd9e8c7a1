pub mod documents;

use log::info;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use crate::errors::AppError;
use crate::models::employee::EmployeeRecord;

/// The roster the reconciler reads from and appends to.
pub trait EmployeeStore: Send + Sync {
    fn find_by_identity(&self, aadhaar: &str) -> Result<Option<EmployeeRecord>, AppError>;

    /// Appends a new record. Fails with `Conflict` if the identity number is
    /// already present.
    fn append(&self, record: EmployeeRecord) -> Result<(), AppError>;

    fn list(&self) -> Result<Vec<EmployeeRecord>, AppError>;
}

/// Process-local roster kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    records: RwLock<Vec<EmployeeRecord>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<EmployeeRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn len(&self) -> Result<usize, AppError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.len())
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::StoreError("employee store lock poisoned".to_string())
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn find_by_identity(&self, aadhaar: &str) -> Result<Option<EmployeeRecord>, AppError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().find(|record| record.aadhaar() == aadhaar).cloned())
    }

    fn append(&self, record: EmployeeRecord) -> Result<(), AppError> {
        let mut records = self.records.write().map_err(poisoned)?;
        if records.iter().any(|existing| existing.aadhaar() == record.aadhaar()) {
            return Err(AppError::Conflict("Identity number already exists".to_string()));
        }
        records.push(record);
        Ok(())
    }

    fn list(&self) -> Result<Vec<EmployeeRecord>, AppError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.clone())
    }
}

/// Builds the roster, optionally seeded from a JSON array of records.
pub fn create_store(seed_path: Option<&Path>) -> Result<InMemoryEmployeeStore, AppError> {
    let Some(path) = seed_path else {
        return Ok(InMemoryEmployeeStore::new());
    };

    let raw = fs::read_to_string(path).map_err(|err| {
        AppError::StoreError(format!("Failed to read seed file {}: {}", path.display(), err))
    })?;
    let records: Vec<EmployeeRecord> = serde_json::from_str(&raw).map_err(|err| {
        AppError::StoreError(format!("Failed to parse seed file {}: {}", path.display(), err))
    })?;

    let mut seen = HashSet::new();
    if let Some(duplicate) = records.iter().find(|record| !seen.insert(record.aadhaar())) {
        return Err(AppError::Conflict(format!(
            "Seed file {} lists identity number {} more than once",
            path.display(),
            duplicate.aadhaar()
        )));
    }

    info!("Seeded employee store with {} records from {}", records.len(), path.display());
    Ok(InMemoryEmployeeStore::with_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::DocumentRefs;
    use crate::models::employee::EmployeeDetails;
    use std::path::PathBuf;

    fn record(employee_id: &str, aadhaar: &str) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: employee_id.to_string(),
            details: EmployeeDetails {
                aadhaar: aadhaar.to_string(),
                ..EmployeeDetails::default()
            },
            documents: DocumentRefs::default().resolve(),
        }
    }

    #[test]
    fn find_by_identity_matches_exactly() {
        let store = InMemoryEmployeeStore::with_records(vec![
            record("EMP1", "111122223333"),
            record("EMP2", "444455556666"),
        ]);

        let found = store.find_by_identity("444455556666").unwrap();
        assert_eq!(found.map(|r| r.employee_id), Some("EMP2".to_string()));
        assert_eq!(store.find_by_identity("44445555666").unwrap(), None);
    }

    #[test]
    fn append_keeps_insertion_order() {
        let store = InMemoryEmployeeStore::new();
        store.append(record("EMP1", "111122223333")).unwrap();
        store.append(record("EMP2", "444455556666")).unwrap();

        let ids: Vec<String> = store.list().unwrap().into_iter().map(|r| r.employee_id).collect();
        assert_eq!(ids, vec!["EMP1", "EMP2"]);
    }

    #[test]
    fn append_rejects_duplicate_identity() {
        let store = InMemoryEmployeeStore::new();
        store.append(record("EMP1", "111122223333")).unwrap();

        let err = store.append(record("EMP2", "111122223333")).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn poisoned_lock_is_reported_not_hidden() {
        let store = std::sync::Arc::new(InMemoryEmployeeStore::new());
        let writer = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = writer.records.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(store.len(), Err(AppError::StoreError(_))));
        assert!(matches!(store.list(), Err(AppError::StoreError(_))));
    }

    #[test]
    fn create_store_without_seed_is_empty() {
        assert_eq!(create_store(None).unwrap().len().unwrap(), 0);
    }

    #[test]
    fn create_store_loads_bundled_seed() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/employees.seed.json");
        let store = create_store(Some(path.as_path())).unwrap();

        assert_eq!(store.len().unwrap(), 2);
        assert!(store.find_by_identity("111122223333").unwrap().is_some());
    }

    #[test]
    fn create_store_reports_missing_seed() {
        let err = create_store(Some(Path::new("does/not/exist.json"))).unwrap_err();
        assert!(matches!(err, AppError::StoreError(_)));
    }
}
