//! Builds the long-lived objects the TUI and the CLI commands need.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::config::StartupConfig;
use crate::adapters::{FilePreferences, ReqwestHttpClient};
use crate::catalog::CatalogClient;
use crate::error::{BossdexResult, ErrorContext, NetworkError, ResultExt};
use crate::preferences::PreferenceStore;
use crate::traits::{HttpClient, PreferencesBackend};

/// Everything startup produces.
#[derive(Debug)]
pub struct Prepared {
    pub catalog: CatalogClient,
    pub preferences: PreferenceStore,
}

/// Build the reqwest-backed catalog client and the file-backed store.
pub fn prepare(config: &StartupConfig) -> BossdexResult<Prepared> {
    let data_dir = config
        .resolve_data_dir()
        .context(ErrorContext::new("resolve_data_dir").with_component("startup"))?;

    let http = ReqwestHttpClient::with_timeout(Duration::from_secs(config.request_timeout_secs))
        .map_err(|e| NetworkError::Other {
            message: e.to_string(),
        })?;

    let backend = FilePreferences::in_dir(&data_dir);
    Ok(prepare_with(config, Arc::new(http), Box::new(backend)))
}

/// Build from injected adapters.
pub fn prepare_with(
    config: &StartupConfig,
    http: Arc<dyn HttpClient>,
    backend: Box<dyn PreferencesBackend>,
) -> Prepared {
    info!(api_url = %config.api_url, preferences = %backend.describe(), "Preparing bossdex");

    Prepared {
        catalog: CatalogClient::new(http, &config.api_url),
        preferences: PreferenceStore::load(backend),
    }
}
