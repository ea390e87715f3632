//! Per-target search pipeline.
//!
//! Order follows the data dependencies: the resolver fixes coordinates
//! and parallax, the SED fills the infrared magnitudes, Gaia adds G, and
//! only then can guiding, site visibility and the instrument rules run.
//! Every lookup after the resolver degrades instead of failing the
//! target.

use tracing::debug;

use fringe_catalog::{simbad, vizier, CatalogClient};
use fringe_core::{
    defined, gravity, guiding, instruments, mag_or_nan, matisse, Band, Distance, GuidingReport,
    InstrumentSet, Magnitudes, MatisseLimits, SiteObservability, SkyCoord, StarReport, VltiGuiding,
};

use crate::SurveyError;

/// Assemble magnitudes from the SED, preferring the resolver's direct
/// V and B fluxes when the SED leaves those undefined.
fn build_magnitudes(
    sed: Option<&fringe_core::Sed>,
    entry: &simbad::SimbadEntry,
) -> Magnitudes {
    let from_sed = |band: Band| -> Option<f64> {
        sed.map(|sed| sed.magnitude(band)).and_then(defined)
    };

    Magnitudes {
        b: from_sed(Band::B).or(entry.flux_b),
        v: from_sed(Band::V).or(entry.flux_v),
        r: from_sed(Band::R),
        j: from_sed(Band::J),
        h: from_sed(Band::H),
        k: from_sed(Band::K),
        l: from_sed(Band::L),
        m: from_sed(Band::M),
        n: from_sed(Band::N),
        g: None,
    }
}

/// Full search for one target.
///
/// Fails only when the identifier resolver does not know the target;
/// everything else degrades to undefined fields in the report.
pub async fn search(
    client: &CatalogClient,
    target: &str,
    limits: &MatisseLimits,
) -> Result<StarReport, SurveyError> {
    let name = target.to_uppercase();
    let entry = simbad::resolve(client, &name).await?;
    let coord = SkyCoord {
        ra_deg: entry.ra_deg,
        dec_deg: entry.dec_deg,
    };
    debug!("{name}: resolved at ({:.4}, {:.4})", coord.ra_deg, coord.dec_deg);

    let distance = match (entry.plx_mas, entry.plx_err_mas) {
        (Some(plx), Some(e_plx)) if plx != 0.0 => Some(Distance::from_parallax(plx, e_plx)),
        _ => None,
    };

    let sed = vizier::fetch_sed(client, coord).await;
    let mut mag = build_magnitudes(sed.as_ref(), &entry);

    let gaia = vizier::gaia_dr2(client, coord).await;
    if let Some(gaia) = &gaia {
        mag.g = gaia.g_mag;
    }

    let vlti_guiding = qualify_vlti_guiding(client, coord, &mag).await;

    let (mag_v, mag_r) = (mag_or_nan(mag.v), mag_or_nan(mag.r));
    let (mag_h, mag_k) = (mag_or_nan(mag.h), mag_or_nan(mag.k));
    let chara = instruments::chara(mag_k, mag_h, mag_r, mag_v);

    let instrument_set = InstrumentSet {
        matisse: matisse::evaluate(
            mag_or_nan(mag.l),
            mag_or_nan(mag.m),
            mag_or_nan(mag.n),
            mag_k,
            limits,
        ),
        gravity: gravity::evaluate(mag_v, mag_k),
        pionier: instruments::pionier(mag_h),
        vision: instruments::vision(mag_r),
        chara,
    };

    Ok(StarReport {
        name,
        coord,
        sp_type: entry.sp_type,
        distance,
        sed,
        mag,
        gaia: gaia.map(|g| g.astrometry),
        instruments: instrument_set,
        observability: SiteObservability::from_declination(coord.dec_deg),
        guiding: GuidingReport {
            vlti: vlti_guiding,
            chara: chara.guiding,
        },
    })
}

/// VLTI guide-star qualification: self-guiding when the target is bright
/// enough in G (or R), otherwise a 57 arcsec off-axis search. A failed
/// search leaves the qualification unknown.
async fn qualify_vlti_guiding(
    client: &CatalogClient,
    coord: SkyCoord,
    mag: &Magnitudes,
) -> Option<VltiGuiding> {
    if !guiding::requires_guide_star(mag_or_nan(mag.g), mag_or_nan(mag.r)) {
        return Some(VltiGuiding::ScienceStar);
    }
    vizier::guide_candidates(client, coord)
        .await
        .map(guiding::partition_candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fringe_core::Sed;

    fn entry() -> simbad::SimbadEntry {
        simbad::SimbadEntry {
            ra_deg: 150.0,
            dec_deg: -40.0,
            sp_type: None,
            plx_mas: None,
            plx_err_mas: None,
            flux_v: Some(6.5),
            flux_b: Some(7.1),
        }
    }

    #[test]
    fn catalog_fluxes_fill_in_when_the_sed_is_missing() {
        let mag = build_magnitudes(None, &entry());
        assert_eq!(mag.v, Some(6.5));
        assert_eq!(mag.b, Some(7.1));
        assert_eq!(mag.k, None);
    }

    #[test]
    fn sed_magnitudes_take_precedence_over_catalog_fluxes() {
        // Flat 100 Jy SED covering V: the SED value wins over flux_v.
        let sed = Sed {
            wavelength_um: vec![0.3, 1.0, 5.0, 15.0],
            flux_jy: vec![100.0; 4],
            flux_err_jy: vec![0.0; 4],
            catalogs: vec![],
        };
        let mag = build_magnitudes(Some(&sed), &entry());
        let expected = fringe_core::jy_to_mag(100.0, Band::V);
        assert!((mag.v.unwrap() - expected).abs() < 1e-9);
        // N (10.2 um) is inside range too
        assert!(mag.n.is_some());
    }
}
