//! Collection persisted to a single JSON file.
//!
//! # Design
//! Documents live in memory exactly as in `MemoryCollection`; after every
//! mutation the whole map is written to `<path>.tmp` and renamed over
//! `<path>`, so a crash mid-write leaves the previous file intact. The write
//! lock is held across the write, which keeps the on-disk order of mutations
//! identical to the in-memory one. When persisting fails the mutation is
//! undone before the error is returned.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::collection::{snapshot, Collection, Documents};
use crate::document::{merge, DocumentId, Fields, Todo};
use crate::error::StoreError;

#[derive(Debug)]
pub struct JsonFileCollection {
    path: PathBuf,
    docs: RwLock<Documents>,
}

impl JsonFileCollection {
    /// Load the collection stored at `path`. A missing file is an empty
    /// collection; the file is created on the first mutation.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let docs = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Documents::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                StoreError::new(format!("corrupt data file {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Documents::new(),
            Err(e) => {
                return Err(StoreError::new(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        };
        debug!(path = %path.display(), documents = docs.len(), "opened data file");
        Ok(Self {
            path,
            docs: RwLock::new(docs),
        })
    }

    async fn persist(&self, docs: &Documents) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(docs)
            .map_err(|e| StoreError::new(format!("failed to encode documents: {e}")))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| StoreError::new(format!("failed to write {}: {e}", tmp.display())))?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::new(format!(
                "failed to replace {}: {e}",
                self.path.display()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Collection for JsonFileCollection {
    async fn insert(&self, fields: Fields) -> Result<Todo, StoreError> {
        let id = DocumentId::new_v4();
        let mut docs = self.docs.write().await;
        docs.insert(id, fields.clone());
        if let Err(e) = self.persist(&docs).await {
            docs.remove(&id);
            return Err(e);
        }
        Ok(Todo::new(id, fields))
    }

    async fn find(&self) -> Result<Vec<Todo>, StoreError> {
        let docs = self.docs.read().await;
        Ok(snapshot(&docs))
    }

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Todo>, StoreError> {
        let docs = self.docs.read().await;
        Ok(docs.get(&id).map(|fields| Todo::new(id, fields.clone())))
    }

    async fn update_by_id(
        &self,
        id: DocumentId,
        patch: Fields,
    ) -> Result<Option<Todo>, StoreError> {
        let mut docs = self.docs.write().await;
        let Some(fields) = docs.get_mut(&id) else {
            return Ok(None);
        };
        let previous = fields.clone();
        merge(fields, patch);
        let updated = Todo::new(id, fields.clone());
        if let Err(e) = self.persist(&docs).await {
            docs.insert(id, previous);
            return Err(e);
        }
        Ok(Some(updated))
    }

    async fn delete_by_id(&self, id: DocumentId) -> Result<Option<Todo>, StoreError> {
        let mut docs = self.docs.write().await;
        let Some(fields) = docs.remove(&id) else {
            return Ok(None);
        };
        if let Err(e) = self.persist(&docs).await {
            docs.insert(id, fields);
            return Err(e);
        }
        Ok(Some(Todo::new(id, fields)))
    }
}
