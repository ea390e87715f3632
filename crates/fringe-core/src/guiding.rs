//! VLTI guide-star / tip-tilt qualification.
//!
//! The Coudé guiding can use the science target itself when its guide-band
//! magnitude sits inside the usable window. Otherwise an off-axis star
//! within 57 arcsec must be found; candidates split into two brightness
//! tiers (tier 1 fully usable, tier 2 usable in good conditions). The
//! off-axis search itself is a catalog query; this module only classifies.

use serde::{Deserialize, Serialize};

/// Faint end of the self-guiding window (exclusive).
const GUIDE_FAINT_LIMIT: f64 = 12.5;
/// Bright end of the self-guiding window (exclusive).
const GUIDE_BRIGHT_LIMIT: f64 = -3.0;
/// Faint end of the second candidate tier (inclusive).
const TIER2_FAINT_LIMIT: f64 = 15.0;

/// An off-axis guide-star candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideStar {
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub g_mag: f64,
}

/// Guide-star qualification of one target at the VLTI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VltiGuiding {
    /// The science target is bright enough to guide on
    ScienceStar,
    /// Off-axis candidates within the search radius, by brightness tier
    Candidates {
        /// Gmag <= 12.5
        tier1: Vec<GuideStar>,
        /// 12.5 < Gmag <= 15
        tier2: Vec<GuideStar>,
    },
}

impl VltiGuiding {
    /// Whether guiding is possible at all.
    pub fn usable(&self) -> bool {
        match self {
            VltiGuiding::ScienceStar => true,
            VltiGuiding::Candidates { tier1, tier2 } => !tier1.is_empty() || !tier2.is_empty(),
        }
    }
}

/// Whether an off-axis guide-star search is needed.
///
/// The guide band is G, falling back to R when G is undefined. The target
/// self-guides only when the chosen magnitude lies strictly inside
/// (-3, 12.5); with both magnitudes undefined a search is required.
pub fn requires_guide_star(mag_g: f64, mag_r: f64) -> bool {
    let mag = if mag_g.is_nan() { mag_r } else { mag_g };
    !(mag > GUIDE_BRIGHT_LIMIT && mag < GUIDE_FAINT_LIMIT)
}

/// Partition off-axis candidates into the two brightness tiers.
///
/// Candidates fainter than the tier-2 limit are dropped.
pub fn partition_candidates(candidates: Vec<GuideStar>) -> VltiGuiding {
    let (mut tier1, mut tier2) = (Vec::new(), Vec::new());
    for star in candidates {
        if star.g_mag <= GUIDE_FAINT_LIMIT {
            tier1.push(star);
        } else if star.g_mag <= TIER2_FAINT_LIMIT {
            tier2.push(star);
        }
    }
    VltiGuiding::Candidates { tier1, tier2 }
}
