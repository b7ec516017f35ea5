//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - GET requests against the catalog source
//! - [`PreferencesBackend`] - persistence of favorites and theme

pub mod http;
pub mod preferences;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use preferences::PreferencesBackend;
