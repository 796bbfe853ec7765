//! Resource store adapter for todos.
//!
//! # Design
//! `TodoStore` is a thin passthrough over a `Collection`. It owns the two
//! translations handlers should not care about: textual identifiers are
//! parsed here (an unparseable one fails like any other store fault), and the
//! driver-style `Option` results become `Lookup`, so "no such todo" can never
//! be confused with "the store is broken".

use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::collection::Collection;
use crate::document::{strip_reserved, DocumentId, Fields, Todo};
use crate::error::StoreError;

/// Outcome of a lookup that succeeded at the store level.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Lookup::NotFound, Lookup::Found)
    }
}

/// Shared handle to the todo collection. Cloning is cheap.
#[derive(Clone)]
pub struct TodoStore {
    collection: Arc<dyn Collection>,
}

impl fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore").finish_non_exhaustive()
    }
}

impl TodoStore {
    pub fn new(collection: impl Collection) -> Self {
        Self::from_shared(Arc::new(collection))
    }

    /// Wrap a collection the caller already holds as a trait object.
    pub fn from_shared(collection: Arc<dyn Collection>) -> Self {
        Self { collection }
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn create(&self, fields: Fields) -> Result<Todo, StoreError> {
        let todo = self.collection.insert(strip_reserved(fields)).await?;
        debug!(id = %todo.id, "created todo");
        Ok(todo)
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = self.collection.find().await?;
        debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn find_by_id(&self, id: &str) -> Result<Lookup<Todo>, StoreError> {
        let id: DocumentId = id.parse()?;
        Ok(self.collection.find_by_id(id).await?.into())
    }

    #[instrument(level = "debug", skip(self, patch))]
    pub async fn update_by_id(&self, id: &str, patch: Fields) -> Result<Lookup<Todo>, StoreError> {
        let id: DocumentId = id.parse()?;
        Ok(self
            .collection
            .update_by_id(id, strip_reserved(patch))
            .await?
            .into())
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete_by_id(&self, id: &str) -> Result<Lookup<Todo>, StoreError> {
        let id: DocumentId = id.parse()?;
        Ok(self.collection.delete_by_id(id).await?.into())
    }
}
