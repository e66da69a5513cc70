//! HTTP gateway to the document backend
//!
//! [`BackendClient`] is the sole authority for document CRUD and export
//! against the proxy API. Each operation is a single request/response
//! round trip; there is no automatic retry, and writes are last-write-wins.
//! Read responses are held in a TTL cache keyed by request path and
//! invalidated explicitly after mutations.

pub mod cache;
pub mod client;
pub mod error;

pub use client::{BackendClient, ExportedFile};
pub use error::ClientError;
