//! JSON-file backed contract records, scoped per owner.

pub mod records;

pub use records::{ContractRecord, ContractStatus, ContractUpdate, NewContract, OwnerStats};

use crate::error::{CoreError, CoreResult};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ContractStore {
    path: PathBuf,
}

impl ContractStore {
    /// Open a store rooted at `root`, creating the directory and an
    /// empty record file on first use.
    pub fn open(root: impl AsRef<Path>) -> CoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        let path = root.join("contracts.json");
        if !path.exists() {
            fs::write(&path, serde_json::to_vec_pretty(&Vec::<ContractRecord>::new())?)?;
        }
        Ok(Self { path })
    }

    fn read_all(&self) -> CoreResult<Vec<ContractRecord>> {
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write_all(&self, records: &[ContractRecord]) -> CoreResult<()> {
        fs::write(&self.path, serde_json::to_vec_pretty(records)?)?;
        Ok(())
    }

    /// Records for one owner, newest first. Insertion order breaks ties
    /// between identical timestamps.
    pub fn contracts_for_owner(&self, owner_id: &str) -> CoreResult<Vec<ContractRecord>> {
        let mut records: Vec<ContractRecord> = self
            .read_all()?
            .into_iter()
            .filter(|r| r.owner_id == owner_id)
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    pub fn get(&self, record_id: &str) -> CoreResult<Option<ContractRecord>> {
        Ok(self.read_all()?.into_iter().find(|r| r.id == record_id))
    }

    pub fn add(&self, owner_id: &str, new: NewContract) -> CoreResult<ContractRecord> {
        let mut records = self.read_all()?;
        let record = ContractRecord {
            id: format!("contract_{}", ulid::Ulid::new()),
            owner_id: owner_id.to_string(),
            title: new.title,
            contract_type: new.contract_type,
            content_sha256: sha256_hex(new.content.as_bytes()),
            content: new.content,
            created_at: now_rfc3339_utc(),
            status: new.status.unwrap_or(ContractStatus::Completed),
            risk_score: new.risk_score,
        };
        records.push(record.clone());
        self.write_all(&records)?;
        Ok(record)
    }

    pub fn update(&self, record_id: &str, updates: ContractUpdate) -> CoreResult<ContractRecord> {
        let mut records = self.read_all()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| CoreError::RecordNotFound(record_id.to_string()))?;
        if let Some(title) = updates.title {
            record.title = title;
        }
        if let Some(content) = updates.content {
            record.content_sha256 = sha256_hex(content.as_bytes());
            record.content = content;
        }
        if let Some(status) = updates.status {
            record.status = status;
        }
        if let Some(risk_score) = updates.risk_score {
            record.risk_score = Some(risk_score);
        }
        let updated = record.clone();
        self.write_all(&records)?;
        Ok(updated)
    }

    /// Remove a record. Returns false when no record carries the id.
    pub fn delete(&self, record_id: &str) -> CoreResult<bool> {
        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|r| r.id != record_id);
        if records.len() == before {
            return Ok(false);
        }
        self.write_all(&records)?;
        Ok(true)
    }

    pub fn stats_for_owner(&self, owner_id: &str) -> CoreResult<OwnerStats> {
        let records = self.contracts_for_owner(owner_id)?;
        let count = |status: ContractStatus| records.iter().filter(|r| r.status == status).count();
        Ok(OwnerStats {
            total_contracts: records.len(),
            completed_contracts: count(ContractStatus::Completed),
            analyzed_contracts: count(ContractStatus::Analyzed),
            draft_contracts: count(ContractStatus::Draft),
        })
    }
}

fn now_rfc3339_utc() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap()
}

/// SHA-256 hash of bytes as hex string.
fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_contract(title: &str) -> NewContract {
        NewContract {
            title: title.to_string(),
            contract_type: "services".to_string(),
            content: format!("Contenido de {}", title),
            status: None,
            risk_score: None,
        }
    }

    #[test]
    fn test_add_and_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContractStore::open(dir.path()).unwrap();

        let added = store.add("user_1", new_contract("Contrato A")).unwrap();
        assert!(added.id.starts_with("contract_"));
        assert_eq!(added.status, ContractStatus::Completed);

        let fetched = store.get(&added.id).unwrap().unwrap();
        assert_eq!(fetched, added);
    }

    #[test]
    fn test_content_hash_is_assigned_and_refreshed() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContractStore::open(dir.path()).unwrap();

        let added = store.add("user_1", new_contract("Contrato A")).unwrap();
        assert_eq!(added.content_sha256, sha256_hex(added.content.as_bytes()));

        let updated = store
            .update(
                &added.id,
                ContractUpdate {
                    content: Some("Texto revisado".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.content_sha256, sha256_hex(b"Texto revisado"));
        assert_ne!(updated.content_sha256, added.content_sha256);
    }

    #[test]
    fn test_listing_is_owner_scoped() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContractStore::open(dir.path()).unwrap();

        store.add("user_1", new_contract("Contrato A")).unwrap();
        store.add("user_2", new_contract("Contrato B")).unwrap();

        let mine = store.contracts_for_owner("user_1").unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "Contrato A");
    }

    #[test]
    fn test_update_missing_record_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContractStore::open(dir.path()).unwrap();

        let result = store.update("contract_missing", ContractUpdate::default());
        assert!(matches!(result, Err(CoreError::RecordNotFound(_))));
    }

    #[test]
    fn test_delete_reports_presence() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContractStore::open(dir.path()).unwrap();

        let added = store.add("user_1", new_contract("Contrato A")).unwrap();
        assert!(store.delete(&added.id).unwrap());
        assert!(!store.delete(&added.id).unwrap());
        assert!(store.get(&added.id).unwrap().is_none());
    }

    #[test]
    fn test_stats_count_by_status() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContractStore::open(dir.path()).unwrap();

        store.add("user_1", new_contract("Contrato A")).unwrap();
        store
            .add(
                "user_1",
                NewContract {
                    status: Some(ContractStatus::Draft),
                    ..new_contract("Contrato B")
                },
            )
            .unwrap();
        store
            .add(
                "user_1",
                NewContract {
                    status: Some(ContractStatus::Analyzed),
                    risk_score: Some(80),
                    ..new_contract("Contrato C")
                },
            )
            .unwrap();

        let stats = store.stats_for_owner("user_1").unwrap();
        assert_eq!(stats.total_contracts, 3);
        assert_eq!(stats.completed_contracts, 1);
        assert_eq!(stats.draft_contracts, 1);
        assert_eq!(stats.analyzed_contracts, 1);
    }

    #[test]
    fn test_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let added = {
            let store = ContractStore::open(dir.path()).unwrap();
            store.add("user_1", new_contract("Contrato A")).unwrap()
        };
        let reopened = ContractStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get(&added.id).unwrap().unwrap(), added);
    }
}
