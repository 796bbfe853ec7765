//! Document store and resource store adapter for the todo service.
//!
//! # Overview
//! - `Collection` is the seam to the document engine. `MemoryCollection`
//!   and `JsonFileCollection` are the bundled engines.
//! - `TodoStore` adapts a collection into the five operations the HTTP layer
//!   needs and reports absence as `Lookup::NotFound`, separate from
//!   `StoreError`.
//!
//! # Design
//! - Todos are schema-less JSON objects plus a store-assigned `DocumentId`.
//! - Nothing here knows about HTTP; status mapping lives in `todo-server`.

pub mod collection;
pub mod document;
pub mod error;
pub mod file;
pub mod store;

pub use collection::{Collection, MemoryCollection};
pub use document::{DocumentId, Fields, Todo};
pub use error::StoreError;
pub use file::JsonFileCollection;
pub use store::{Lookup, TodoStore};
