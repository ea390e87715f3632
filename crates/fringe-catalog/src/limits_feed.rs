//! Live MATISSE limiting-magnitude feed.
//!
//! The observatory publishes current limiting magnitudes as a JSON
//! document with the `MatisseLimits` shape. When no URL is configured or
//! the fetch fails, the fixed estimated-performance table is used
//! wholesale; that situation is logged and never surfaced as an error.

use tracing::info;

use fringe_core::MatisseLimits;

use crate::client::CatalogClient;
use crate::error::CatalogError;

/// Fetch the live limit document from `url`.
pub async fn fetch(client: &CatalogClient, url: &str) -> Result<MatisseLimits, CatalogError> {
    let response = client.http.get(url).send().await?.error_for_status()?;
    let limits: MatisseLimits = response.json().await?;
    Ok(limits)
}

/// Resolve the MATISSE limit table for a run: the configured live
/// document when reachable, the estimated table otherwise.
pub async fn current_limits(client: &CatalogClient) -> MatisseLimits {
    let Some(url) = client.limits_url() else {
        return MatisseLimits::estimated();
    };
    match fetch(client, url).await {
        Ok(limits) => limits,
        Err(e) => {
            info!("live MATISSE limits unavailable ({e}); using estimated performance");
            MatisseLimits::estimated()
        }
    }
}
