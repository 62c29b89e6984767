//! # Storage Layer
//!
//! Records live behind a REST API. The [`RecordStore`] trait is the resource
//! client: one method per endpoint, generic over the record type so the same
//! client serves posts, comments, and the id-only view the allocator reads.
//!
//! ## Endpoints
//!
//! ```text
//! list     GET    /{resource}
//! get      GET    /{resource}/{id}
//! create   POST   /{resource}          full record, id included
//! replace  PUT    /{resource}/{id}     full record
//! patch    PATCH  /{resource}/{id}     partial record
//! delete   DELETE /{resource}/{id}
//! ```
//!
//! ## Failure Semantics
//!
//! - `get` returns `Ok(None)` when the record is absent (404).
//! - Any other non-success status becomes [`BoardError::Rejected`].
//! - Transport failures surface as [`BoardError::Transport`].
//!
//! There is no locking and no transaction support: a read followed by a write
//! can interleave with another client's writes.
//!
//! ## Implementations
//!
//! - [`http::HttpStore`]: Production client over blocking `reqwest`.
//! - [`memory::InMemoryStore`]: Mimics a json-server backend for testing.
//!
//! [`BoardError::Rejected`]: crate::error::BoardError::Rejected
//! [`BoardError::Transport`]: crate::error::BoardError::Transport

use crate::error::Result;
use crate::model::Resource;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod http;
pub mod memory;

/// Abstract interface for the remote record store.
pub trait RecordStore {
    /// Fetch every record of a resource
    fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>>;

    /// Fetch one record, `None` when it does not exist
    fn get<T: DeserializeOwned>(&self, resource: Resource, id: &str) -> Result<Option<T>>;

    /// Insert a full record (its id included)
    fn create<T: Serialize>(&mut self, resource: Resource, record: &T) -> Result<()>;

    /// Replace the record stored under `id`
    fn replace<T: Serialize>(&mut self, resource: Resource, id: &str, record: &T) -> Result<()>;

    /// Merge `fields` into the record stored under `id`
    fn patch<T: Serialize>(&mut self, resource: Resource, id: &str, fields: &T) -> Result<()>;

    /// Remove a record permanently
    fn delete(&mut self, resource: Resource, id: &str) -> Result<()>;
}
