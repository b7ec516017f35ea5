//! Concrete implementations of the trait abstractions in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FilePreferences`] - JSON preferences file under the data directory
//!
//! The [`mock`] submodule provides test doubles for both.

pub mod file_preferences;
pub mod mock;
pub mod reqwest_http;

pub use file_preferences::{FilePreferences, PREFERENCES_FILE};
pub use mock::{InMemoryPreferences, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
