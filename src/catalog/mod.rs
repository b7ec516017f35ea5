//! Catalog source access: the `/bosses` and `/weapons` endpoints.
//!
//! Responses are validated element by element at this boundary. A malformed
//! element is logged and skipped; a failed request, an error status or a body
//! that is not a JSON array fails the whole fetch.

mod client;
mod error;
pub mod records;

pub use client::{CatalogClient, BOSSES_PATH, WEAPONS_PATH};
pub use error::CatalogError;
