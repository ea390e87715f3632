//! Reachability probe for the catalog services.
//!
//! A survey issues hundreds of requests; checking the two hosts up front
//! gives one clear error instead of a page of per-target failures.

use tracing::error;

use crate::client::CatalogClient;

async fn reachable(client: &CatalogClient, url: &str) -> bool {
    match client.http.get(url).send().await {
        Ok(_) => true,
        Err(_) => false,
    }
}

/// Check that the resolver and the photometry service answer at all.
pub async fn servers_reachable(client: &CatalogClient) -> bool {
    let simbad = reachable(client, &client.simbad_tap_url).await;
    let vizier = reachable(client, &client.sed_url).await;
    match (simbad, vizier) {
        (true, true) => true,
        (false, false) => {
            error!("neither catalog host answers; check the internet connection");
            false
        }
        (false, true) => {
            error!("the SIMBAD server does not answer");
            false
        }
        (true, false) => {
            error!("the VizieR server does not answer");
            false
        }
    }
}
