//! Shared HTTP client and service endpoints.

use std::time::Duration;

use crate::error::CatalogError;
use crate::tap::TapTable;

pub const SIMBAD_TAP_URL: &str = "https://simbad.cds.unistra.fr/simbad/sim-tap/sync";
pub const VIZIER_TAP_URL: &str = "https://tapvizier.cds.unistra.fr/TAPVizieR/tap/sync";
pub const SED_URL: &str = "https://vizier.cds.unistra.fr/viz-bin/sed";

/// HTTP client for the CDS catalog services.
///
/// Endpoints are explicit configuration rather than ambient state so tests
/// and mirrors can redirect individual services.
pub struct CatalogClient {
    pub(crate) http: reqwest::Client,
    pub(crate) simbad_tap_url: String,
    pub(crate) vizier_tap_url: String,
    pub(crate) sed_url: String,
    /// Live MATISSE limit document; `None` means estimated limits only.
    pub(crate) limits_url: Option<String>,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            simbad_tap_url: SIMBAD_TAP_URL.to_string(),
            vizier_tap_url: VIZIER_TAP_URL.to_string(),
            sed_url: SED_URL.to_string(),
            limits_url: None,
        }
    }

    /// Point the resolver at a different TAP endpoint.
    pub fn with_simbad_url(mut self, url: impl Into<String>) -> Self {
        self.simbad_tap_url = url.into();
        self
    }

    pub fn with_vizier_url(mut self, url: impl Into<String>) -> Self {
        self.vizier_tap_url = url.into();
        self
    }

    pub fn with_sed_url(mut self, url: impl Into<String>) -> Self {
        self.sed_url = url.into();
        self
    }

    /// Set the live MATISSE limit document URL.
    pub fn with_limits_url(mut self, url: Option<String>) -> Self {
        self.limits_url = url;
        self
    }

    pub fn limits_url(&self) -> Option<&str> {
        self.limits_url.as_deref()
    }

    /// Run a synchronous TAP query and parse the JSON table.
    pub(crate) async fn tap_query(
        &self,
        endpoint: &str,
        adql: &str,
    ) -> Result<TapTable, CatalogError> {
        let params = [
            ("REQUEST", "doQuery"),
            ("LANG", "ADQL"),
            ("FORMAT", "json"),
            ("QUERY", adql),
        ];
        let response = self
            .http
            .post(endpoint)
            .form(&params)
            .send()
            .await?
            .error_for_status()?;
        let table: TapTable = response.json().await?;
        Ok(table)
    }
}
