use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::records::{BossRecord, WeaponRecord};
use super::CatalogError;
use crate::error::{classify_http_error, BossdexResult, ErrorContext, NetworkError, ResultExt};
use crate::models::{Boss, Weapon};
use crate::traits::{Headers, HttpClient};

/// Path of the boss list endpoint.
pub const BOSSES_PATH: &str = "/bosses";

/// Path of the weapon list endpoint.
pub const WEAPONS_PATH: &str = "/weapons";

/// Read-only client for the catalog source.
///
/// Cheap to clone; every screen entry spawns a fetch with its own clone.
#[derive(Clone)]
pub struct CatalogClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl CatalogClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch and validate the boss list. Malformed entries are skipped.
    pub async fn fetch_bosses(&self) -> BossdexResult<Vec<Boss>> {
        let values = self
            .fetch_array(BOSSES_PATH)
            .await
            .context(ErrorContext::new("fetch_bosses").with_component("catalog"))?;
        let bosses = decode_records("boss", values, BossRecord::into_boss, |b: &Boss| b.id);
        info!(count = bosses.len(), "Fetched bosses");
        Ok(bosses)
    }

    /// Fetch and validate the weapon list. Malformed entries are skipped.
    pub async fn fetch_weapons(&self) -> BossdexResult<Vec<Weapon>> {
        let values = self
            .fetch_array(WEAPONS_PATH)
            .await
            .context(ErrorContext::new("fetch_weapons").with_component("catalog"))?;
        let weapons = decode_records("weapon", values, WeaponRecord::into_weapon, |w: &Weapon| w.id);
        info!(count = weapons.len(), "Fetched weapons");
        Ok(weapons)
    }

    /// GET `path` and return the elements of the top-level JSON array.
    async fn fetch_array(&self, path: &str) -> BossdexResult<Vec<Value>> {
        let url = self.endpoint(path);
        debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url, &Headers::new())
            .await
            .map_err(|e| classify_http_error(e, &url))?;

        if !response.is_success() {
            let message = response
                .text()
                .unwrap_or_default()
                .chars()
                .take(200)
                .collect::<String>();
            return Err(NetworkError::HttpStatus {
                status: response.status,
                message,
            }
            .into());
        }

        match response.json::<Value>()? {
            Value::Array(values) => Ok(values),
            _ => Err(CatalogError::NotAnArray { endpoint: url }.into()),
        }
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Decode each element independently, logging and skipping the bad ones.
///
/// Later elements whose key repeats an earlier one are skipped as well.
fn decode_records<R, T, K>(
    kind: &'static str,
    values: Vec<Value>,
    validate: impl Fn(R) -> Result<T, String>,
    key: impl Fn(&T) -> K,
) -> Vec<T>
where
    R: DeserializeOwned,
    K: Eq + Hash + std::fmt::Display,
{
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        let decoded = serde_json::from_value::<R>(value)
            .map_err(|e| e.to_string())
            .and_then(&validate);

        match decoded {
            Ok(record) => {
                let id = key(&record);
                if seen.insert(id) {
                    records.push(record);
                } else {
                    warn!(kind, index, id = %key(&record), "Skipping duplicate catalog record");
                }
            }
            Err(reason) => {
                let err = CatalogError::InvalidRecord { kind, index, reason };
                warn!(code = err.error_code(), "Skipping catalog record: {}", err);
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::error::{BossdexError, ErrorCategory};
    use crate::models::{BossId, Isle, WeaponId};
    use crate::traits::HttpError;

    const BASE: &str = "http://catalog.test";

    fn client_with(mock: &MockHttpClient) -> CatalogClient {
        CatalogClient::new(Arc::new(mock.clone()), format!("{}/", BASE))
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = client_with(&MockHttpClient::new());
        assert_eq!(client.base_url(), BASE);
        assert_eq!(client.endpoint(BOSSES_PATH), "http://catalog.test/bosses");
    }

    #[tokio::test]
    async fn test_fetch_bosses_skips_malformed_entries() {
        let mock = MockHttpClient::new();
        mock.set_json(
            "http://catalog.test/bosses",
            200,
            r#"[
                {"id": 1, "name": "The Root Pack", "difficulty": 1, "isle": 1},
                {"id": 2, "name": "Broken", "difficulty": 9, "isle": 1},
                {"name": "No Id", "difficulty": 1, "isle": 1},
                {"id": "3", "name": "Cala Maria", "difficulty": 3.5, "isle": 2}
            ]"#,
        );

        let bosses = client_with(&mock).fetch_bosses().await.unwrap();

        let ids: Vec<BossId> = bosses.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![BossId(1), BossId(3)]);
        assert_eq!(bosses[1].isle, Isle::Two);
    }

    #[tokio::test]
    async fn test_fetch_bosses_drops_duplicate_ids() {
        let mock = MockHttpClient::new();
        mock.set_json(
            "http://catalog.test/bosses",
            200,
            r#"[
                {"id": 1, "name": "First", "difficulty": 1, "isle": 1},
                {"id": 1, "name": "Second", "difficulty": 2, "isle": 1}
            ]"#,
        );

        let bosses = client_with(&mock).fetch_bosses().await.unwrap();
        assert_eq!(bosses.len(), 1);
        assert_eq!(bosses[0].name, "First");
    }

    #[tokio::test]
    async fn test_fetch_weapons() {
        let mock = MockHttpClient::new();
        mock.set_json(
            "http://catalog.test/weapons",
            200,
            r##"[{"id": 4, "name": "Charge", "url": "charge", "damage": 6, "exDamage": 26, "dps": 35.5, "color": "#ff00ff"}]"##,
        );

        let weapons = client_with(&mock).fetch_weapons().await.unwrap();
        assert_eq!(weapons.len(), 1);
        assert_eq!(weapons[0].id, WeaponId(4));
        assert_eq!(mock.request_count("http://catalog.test/weapons"), 1);
    }

    #[tokio::test]
    async fn test_non_array_body_is_failure() {
        let mock = MockHttpClient::new();
        mock.set_json("http://catalog.test/bosses", 200, r#"{"bosses": []}"#);

        let err = client_with(&mock).fetch_bosses().await.unwrap_err();
        assert!(matches!(
            err.inner(),
            BossdexError::Catalog(CatalogError::NotAnArray { .. })
        ));
        assert_eq!(err.context().unwrap().operation, "fetch_bosses");
    }

    #[tokio::test]
    async fn test_invalid_json_is_failure() {
        let mock = MockHttpClient::new();
        mock.set_json("http://catalog.test/bosses", 200, "<html>");

        let err = client_with(&mock).fetch_bosses().await.unwrap_err();
        assert!(matches!(
            err.inner(),
            BossdexError::Catalog(CatalogError::InvalidBody { .. })
        ));
    }

    #[tokio::test]
    async fn test_error_status_is_failure() {
        let mock = MockHttpClient::new();
        mock.set_json("http://catalog.test/weapons", 503, "down");

        let err = client_with(&mock).fetch_weapons().await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Server);
        assert!(matches!(
            err.inner(),
            BossdexError::Network(NetworkError::HttpStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_transport_error_is_failure() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://catalog.test/bosses",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let err = client_with(&mock).fetch_bosses().await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Network);
    }
}
