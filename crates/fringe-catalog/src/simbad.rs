//! Identifier resolution through the SIMBAD TAP service.

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::tap::adql_quote;

/// What the resolver knows about a target.
#[derive(Debug, Clone, PartialEq)]
pub struct SimbadEntry {
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub sp_type: Option<String>,
    pub plx_mas: Option<f64>,
    pub plx_err_mas: Option<f64>,
    /// Direct catalog V flux, preferred over the SED estimate when the
    /// latter is undefined
    pub flux_v: Option<f64>,
    pub flux_b: Option<f64>,
}

/// Resolve a target name to coordinates, spectral type, parallax and the
/// direct V/B fluxes.
///
/// An unknown identifier is `CatalogError::NotFound` — the one per-target
/// fatal error of the pipeline.
pub async fn resolve(client: &CatalogClient, target: &str) -> Result<SimbadEntry, CatalogError> {
    let adql = format!(
        "SELECT basic.ra, basic.dec, basic.sp_type, basic.plx_value, basic.plx_err, \
         allfluxes.V, allfluxes.B \
         FROM ident \
         JOIN basic ON basic.oid = ident.oidref \
         LEFT JOIN allfluxes ON allfluxes.oidref = basic.oid \
         WHERE ident.id = {}",
        adql_quote(target)
    );
    let table = client.tap_query(&client.simbad_tap_url, &adql).await?;
    if table.is_empty() {
        return Err(CatalogError::NotFound(target.to_string()));
    }

    let (ra_deg, dec_deg) = match (table.f64(0, "ra"), table.f64(0, "dec")) {
        (Some(ra), Some(dec)) => (ra, dec),
        _ => {
            return Err(CatalogError::Malformed(format!(
                "resolver returned {target:?} without coordinates"
            )))
        }
    };

    Ok(SimbadEntry {
        ra_deg,
        dec_deg,
        sp_type: table.string(0, "sp_type"),
        plx_mas: table.f64(0, "plx_value"),
        plx_err_mas: table.f64(0, "plx_err"),
        flux_v: table.f64(0, "V"),
        flux_b: table.f64(0, "B"),
    })
}
