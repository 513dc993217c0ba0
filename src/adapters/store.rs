//! Record stores: where an imported record set lives between requests.

use crate::domain::model::Record;
use crate::domain::ports::{RecordStore, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const RECORDS_FILE: &str = "records.json";

#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<Mutex<Vec<Record>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn replace_all(&self, records: &[Record]) -> Result<()> {
        let mut stored = self.records.lock().await;
        stored.clear();
        stored.extend_from_slice(records);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Record>> {
        Ok(self.records.lock().await.clone())
    }
}

/// Keeps the whole record set as one JSON document behind a [`Storage`].
///
/// Replacing rewrites the document in a single write; there is no locking
/// across processes, so concurrent imports race and the last writer wins.
#[derive(Debug, Clone)]
pub struct JsonFileRecordStore<S: Storage> {
    storage: S,
    file_name: String,
}

impl<S: Storage> JsonFileRecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_file_name(storage, RECORDS_FILE)
    }

    pub fn with_file_name(storage: S, file_name: &str) -> Self {
        Self {
            storage,
            file_name: file_name.to_string(),
        }
    }
}

#[async_trait]
impl<S: Storage> RecordStore for JsonFileRecordStore<S> {
    async fn replace_all(&self, records: &[Record]) -> Result<()> {
        let json = serde_json::to_vec_pretty(records)?;
        tracing::debug!("Writing {} records ({} bytes) to {}", records.len(), json.len(), self.file_name);
        self.storage.write_file(&self.file_name, &json).await
    }

    async fn find_all(&self) -> Result<Vec<Record>> {
        match self.storage.read_file(&self.file_name).await? {
            Some(data) => Ok(serde_json::from_slice(&data)?),
            None => {
                tracing::debug!("{} not found, store is empty", self.file_name);
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use crate::domain::model::Sex;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn person(first: &str) -> Record {
        Record {
            first_name: first.to_string(),
            last_name: "Souza".to_string(),
            email: "a@b.c".to_string(),
            sex: Sex::Female,
            access_ip: "::1".to_string(),
            age: 30,
            birth_date: NaiveDate::from_ymd_opt(1994, 1, 1),
        }
    }

    #[test]
    fn test_in_memory_replace_discards_previous_set() {
        tokio_test::block_on(async {
            let store = InMemoryRecordStore::new();
            store.replace_all(&[person("Ana"), person("Bia")]).await.unwrap();
            store.replace_all(&[person("Caio")]).await.unwrap();

            let records = store.find_all().await.unwrap();
            assert_eq!(records, vec![person("Caio")]);
        });
    }

    #[tokio::test]
    async fn test_json_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileRecordStore::new(LocalStorage::new(dir.path()));

        assert!(store.find_all().await.unwrap().is_empty());

        store.replace_all(&[person("Ana"), person("Bia")]).await.unwrap();
        store.replace_all(&[person("Caio")]).await.unwrap();

        assert_eq!(store.find_all().await.unwrap(), vec![person("Caio")]);
        assert!(dir.path().join(RECORDS_FILE).exists());
    }

    #[tokio::test]
    async fn test_json_store_rejects_corrupt_document() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(RECORDS_FILE), b"not json").unwrap();
        let store = JsonFileRecordStore::new(LocalStorage::new(dir.path()));

        assert!(store.find_all().await.is_err());
    }
}
