//! GRAVITY observability evaluation.
//!
//! GRAVITY is limited by the K magnitude of the science target; the V
//! magnitude only selects which telescope class the Coudé guiding can use,
//! reported as a recommendation and never gating the K-band result.

use serde::{Deserialize, Serialize};

/// Telescope class recommendation derived from the V magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelescopeRecommendation {
    #[serde(rename = "AT")]
    At,
    #[serde(rename = "UT")]
    Ut,
    TooFaint,
}

/// Observability per spectral resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GravityModes {
    #[serde(rename = "MR")]
    pub mr: bool,
    #[serde(rename = "HR")]
    pub hr: bool,
}

/// GRAVITY observability tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GravityObservability {
    #[serde(rename = "UT")]
    pub ut: GravityModes,
    #[serde(rename = "AT")]
    pub at: GravityModes,
    /// Guiding recommendation from magV (informational)
    pub v_cond: TelescopeRecommendation,
}

/// Evaluate GRAVITY observability from the V and K magnitudes.
///
/// The K rule is a piecewise table over ascending, non-overlapping bins,
/// half-open on the right except the lowest bin which is closed on both
/// ends. NaN falls through every bin.
pub fn evaluate(mag_v: f64, mag_k: f64) -> GravityObservability {
    let v_cond = if mag_v <= 11.0 {
        TelescopeRecommendation::At
    } else if mag_v <= 16.0 {
        TelescopeRecommendation::Ut
    } else {
        TelescopeRecommendation::TooFaint
    };

    let off = GravityModes { mr: false, hr: false };
    let (ut, at) = if (-4.0..=-1.0).contains(&mag_k) {
        (off, GravityModes { mr: false, hr: true })
    } else if mag_k > -1.0 && mag_k <= 1.0 {
        (off, GravityModes { mr: true, hr: true })
    } else if mag_k > 1.0 && mag_k <= 4.0 {
        (GravityModes { mr: false, hr: true }, GravityModes { mr: true, hr: true })
    } else if mag_k > 4.0 && mag_k <= 8.0 {
        (GravityModes { mr: true, hr: true }, GravityModes { mr: true, hr: true })
    } else if mag_k > 8.0 && mag_k <= 9.0 {
        (GravityModes { mr: true, hr: true }, off)
    } else {
        (off, off)
    };

    GravityObservability { ut, at, v_cond }
}
