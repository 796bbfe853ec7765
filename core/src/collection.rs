//! The document store seam and its in-memory engine.
//!
//! # Design
//! `Collection` is the boundary to whatever engine actually holds the
//! documents. It speaks in `Option` for absence and `StoreError` for faults,
//! the way document drivers usually do; `TodoStore` turns that into the
//! explicit `Lookup` type handlers consume. The trait is object safe so the
//! bootstrap can pick an engine at runtime and hand out `Arc<dyn Collection>`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::{merge, DocumentId, Fields, Todo};
use crate::error::StoreError;

/// Documents keyed by their identifier.
pub type Documents = HashMap<DocumentId, Fields>;

/// A schema-less document collection addressed by identifier.
#[async_trait]
pub trait Collection: Send + Sync + 'static {
    /// Insert a new document under a freshly assigned identifier.
    async fn insert(&self, fields: Fields) -> Result<Todo, StoreError>;

    /// Every document in the collection, in no particular order.
    async fn find(&self) -> Result<Vec<Todo>, StoreError>;

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Todo>, StoreError>;

    /// Merge `patch` into the document and return it as stored afterwards.
    async fn update_by_id(
        &self,
        id: DocumentId,
        patch: Fields,
    ) -> Result<Option<Todo>, StoreError>;

    /// Remove the document and return what was removed.
    async fn delete_by_id(&self, id: DocumentId) -> Result<Option<Todo>, StoreError>;
}

/// Volatile collection backed by a `HashMap`. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryCollection {
    docs: Arc<RwLock<Documents>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[async_trait]
impl Collection for MemoryCollection {
    async fn insert(&self, fields: Fields) -> Result<Todo, StoreError> {
        let id = DocumentId::new_v4();
        self.docs.write().await.insert(id, fields.clone());
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
        Ok(docs.get_mut(&id).map(|fields| {
            merge(fields, patch);
            Todo::new(id, fields.clone())
        }))
    }

    async fn delete_by_id(&self, id: DocumentId) -> Result<Option<Todo>, StoreError> {
        let mut docs = self.docs.write().await;
        Ok(docs.remove(&id).map(|fields| Todo::new(id, fields)))
    }
}

pub(crate) fn snapshot(docs: &Documents) -> Vec<Todo> {
    docs.iter()
        .map(|(id, fields)| Todo::new(*id, fields.clone()))
        .collect()
}
