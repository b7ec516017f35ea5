//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `bossdex::adapters::mock` and adds a builder for
//! a mock catalog.

pub use bossdex::adapters::mock::{InMemoryPreferences, MockHttpClient, MockResponse};
pub use bossdex::traits::{Headers, HttpClient, HttpError, Response};

use super::{sample_bosses_json, sample_weapons_json, TEST_API};

/// Configuration for setting up a mock catalog.
pub struct MockCatalogConfig {
    client: MockHttpClient,
}

impl MockCatalogConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Serve the sample boss and weapon lists.
    pub fn with_samples(self) -> Self {
        self.with_bosses(200, sample_bosses_json())
            .with_weapons(200, sample_weapons_json())
    }

    pub fn with_bosses(self, status: u16, body: &str) -> Self {
        self.client.set_json(&format!("{}/bosses", TEST_API), status, body);
        self
    }

    pub fn with_weapons(self, status: u16, body: &str) -> Self {
        self.client.set_json(&format!("{}/weapons", TEST_API), status, body);
        self
    }

    /// Make the boss endpoint fail at the transport level.
    pub fn with_bosses_unreachable(self) -> Self {
        self.client.set_response(
            &format!("{}/bosses", TEST_API),
            MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
        );
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockCatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}
