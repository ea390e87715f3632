//! VizieR queries: SED photometry, Gaia DR2 astrometry, guide-star cones.

use serde::Deserialize;
use tracing::warn;

use fringe_core::{Distance, GaiaAstrometry, GuideStar, Sed, SkyCoord};

use crate::client::CatalogClient;
use crate::error::CatalogError;

/// Speed of light over 1 GHz, in micrometers: wl_um = C / freq_ghz.
const C_UM_GHZ: f64 = 299_792.458;

/// Cone radius for SED photometry, arcsec.
const SED_RADIUS_ARCSEC: f64 = 1.0;
/// Cone radius for the Gaia DR2 counterpart, arcsec.
const GAIA_RADIUS_ARCSEC: f64 = 2.0;
/// Search radius for off-axis guide stars, arcsec.
pub const GUIDE_RADIUS_ARCSEC: f64 = 57.0;

/// One photometry point from the CDS SED service.
#[derive(Debug, Deserialize)]
struct SedPoint {
    #[serde(rename = "_tabname")]
    tabname: String,
    /// GHz
    sed_freq: f64,
    /// Jy
    sed_flux: f64,
    #[serde(default)]
    sed_eflux: Option<f64>,
}

/// Fetch the spectral energy distribution around a position.
///
/// Negative fluxes are dropped; points come back sorted by wavelength so
/// the core interpolator can consume them directly. Any failure degrades
/// to `None` — a missing SED must not abort the target.
pub async fn fetch_sed(client: &CatalogClient, coord: SkyCoord) -> Option<Sed> {
    let result = request_sed(client, coord).await;
    match result {
        Ok(sed) => Some(sed),
        Err(e) => {
            warn!("SED query failed at ({:.4}, {:.4}): {e}", coord.ra_deg, coord.dec_deg);
            None
        }
    }
}

async fn request_sed(client: &CatalogClient, coord: SkyCoord) -> Result<Sed, CatalogError> {
    let position = format!("{} {}", coord.ra_deg, coord.dec_deg);
    let response = client
        .http
        .get(&client.sed_url)
        .query(&[
            ("-c", position.as_str()),
            ("-c.rs", &SED_RADIUS_ARCSEC.to_string()),
        ])
        .send()
        .await?
        .error_for_status()?;
    let points: Vec<SedPoint> = response.json().await?;

    let mut samples: Vec<(f64, f64, f64, String)> = points
        .into_iter()
        .filter(|p| p.sed_flux >= 0.0 && p.sed_freq > 0.0)
        .map(|p| {
            let wl_um = C_UM_GHZ / p.sed_freq;
            (wl_um, p.sed_flux, p.sed_eflux.unwrap_or(f64::NAN), p.tabname)
        })
        .collect();
    samples.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut sed = Sed::default();
    for (wl, flux, err, catalog) in samples {
        sed.wavelength_um.push(wl);
        sed.flux_jy.push(flux);
        sed.flux_err_jy.push(err);
        sed.catalogs.push(catalog);
    }
    Ok(sed)
}

/// Gaia DR2 lookup result.
#[derive(Debug, Clone, PartialEq)]
pub struct GaiaResult {
    pub astrometry: GaiaAstrometry,
    pub g_mag: Option<f64>,
}

/// Query the Gaia DR2 counterpart of a position (2 arcsec cone).
///
/// Failure or no counterpart degrades to `None`.
pub async fn gaia_dr2(client: &CatalogClient, coord: SkyCoord) -> Option<GaiaResult> {
    let adql = cone_query(
        "\"I/345/gaia2\"",
        "RA_ICRS, e_RA_ICRS, DE_ICRS, e_DE_ICRS, Gmag, Plx, e_Plx, \
         pmRA, e_pmRA, pmDE, e_pmDE, Teff",
        coord,
        GAIA_RADIUS_ARCSEC,
    );
    let table = match client.tap_query(&client.vizier_tap_url, &adql).await {
        Ok(table) => table,
        Err(e) => {
            warn!("Gaia DR2 query failed: {e}");
            return None;
        }
    };
    if table.is_empty() {
        return None;
    }

    let plx = table.f64(0, "Plx");
    let e_plx = table.f64(0, "e_Plx");
    let distance = match (plx, e_plx) {
        (Some(plx), Some(e_plx)) if plx != 0.0 => Some(Distance::from_parallax(plx, e_plx)),
        _ => None,
    };

    let astrometry = GaiaAstrometry {
        ra_deg: table.f64(0, "RA_ICRS").unwrap_or(f64::NAN),
        e_ra_mas: table.f64(0, "e_RA_ICRS").unwrap_or(f64::NAN),
        dec_deg: table.f64(0, "DE_ICRS").unwrap_or(f64::NAN),
        e_dec_mas: table.f64(0, "e_DE_ICRS").unwrap_or(f64::NAN),
        plx_mas: plx.unwrap_or(f64::NAN),
        e_plx_mas: e_plx.unwrap_or(f64::NAN),
        pm_ra: table.f64(0, "pmRA").unwrap_or(f64::NAN),
        e_pm_ra: table.f64(0, "e_pmRA").unwrap_or(f64::NAN),
        pm_dec: table.f64(0, "pmDE").unwrap_or(f64::NAN),
        e_pm_dec: table.f64(0, "e_pmDE").unwrap_or(f64::NAN),
        teff_k: table.f64(0, "Teff"),
        distance_kpc: distance.map(|d| d.kpc),
        e_distance_kpc: distance.map(|d| d.err_kpc),
    };

    Some(GaiaResult {
        astrometry,
        g_mag: table.f64(0, "Gmag"),
    })
}

/// Search for off-axis guide-star candidates (57 arcsec, Gaia DR1).
///
/// Failure degrades to `None`; an empty candidate list is a valid answer
/// and comes back as an empty vector.
pub async fn guide_candidates(client: &CatalogClient, coord: SkyCoord) -> Option<Vec<GuideStar>> {
    let adql = cone_query(
        "\"I/337/gaia\"",
        "RA_ICRS, DE_ICRS, \"<Gmag>\"",
        coord,
        GUIDE_RADIUS_ARCSEC,
    );
    let table = match client.tap_query(&client.vizier_tap_url, &adql).await {
        Ok(table) => table,
        Err(e) => {
            warn!("guide-star query failed: {e}");
            return None;
        }
    };

    let mut candidates = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        let (Some(ra_deg), Some(dec_deg), Some(g_mag)) = (
            table.f64(row, "RA_ICRS"),
            table.f64(row, "DE_ICRS"),
            table.f64(row, "<Gmag>"),
        ) else {
            continue;
        };
        candidates.push(GuideStar { ra_deg, dec_deg, g_mag });
    }
    Some(candidates)
}

fn cone_query(table: &str, columns: &str, coord: SkyCoord, radius_arcsec: f64) -> String {
    format!(
        "SELECT {columns} FROM {table} \
         WHERE 1 = CONTAINS(POINT('ICRS', RA_ICRS, DE_ICRS), \
         CIRCLE('ICRS', {}, {}, {}))",
        coord.ra_deg,
        coord.dec_deg,
        radius_arcsec / 3600.0
    )
}
