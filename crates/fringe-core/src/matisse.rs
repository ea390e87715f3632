//! MATISSE observability evaluation.
//!
//! MATISSE observes in L, M and N simultaneously; each telescope class and
//! fringe-tracking state has its own limiting magnitudes per band and
//! spectral resolution. The K-band flag reports whether the GRA4MAT fringe
//! tracker can lock on the target; it is informational and never gates the
//! L/M/N leaves here (the survey aggregator applies guiding conditions).

use serde::{Deserialize, Serialize};

use crate::limits::{FringeTracking, MatisseBand, MatisseLimits, Telescope};

/// Observability per spectral resolution for a three-resolution band (L).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResTriple {
    #[serde(rename = "LR")]
    pub lr: bool,
    #[serde(rename = "MR")]
    pub mr: bool,
    #[serde(rename = "HR")]
    pub hr: bool,
}

/// Observability per spectral resolution for a two-resolution band (M, N).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResPair {
    #[serde(rename = "LR")]
    pub lr: bool,
    #[serde(rename = "HR")]
    pub hr: bool,
}

/// Per-band observability for one telescope/tracking combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatisseModes {
    #[serde(rename = "L")]
    pub l: ResTriple,
    #[serde(rename = "M")]
    pub m: ResPair,
    #[serde(rename = "N")]
    pub n: ResPair,
}

/// Both tracking states of one telescope class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatisseTelescope {
    pub ft: MatisseModes,
    pub noft: MatisseModes,
}

/// K-band fringe-tracker lock limit per telescope class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KBandTracking {
    #[serde(rename = "AT")]
    pub at: bool,
    #[serde(rename = "UT")]
    pub ut: bool,
}

/// Full MATISSE observability tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatisseObservability {
    #[serde(rename = "AT")]
    pub at: MatisseTelescope,
    #[serde(rename = "UT")]
    pub ut: MatisseTelescope,
    #[serde(rename = "limK")]
    pub lim_k: KBandTracking,
}

// Thresholds are ordered faintest first and non-increasing (table
// invariant), so each resolution is an independent closed comparison.
fn triple(mag: f64, lim: &[f64]) -> ResTriple {
    ResTriple {
        lr: lim.first().is_some_and(|&t| mag <= t),
        mr: lim.get(1).is_some_and(|&t| mag <= t),
        hr: lim.get(2).is_some_and(|&t| mag <= t),
    }
}

fn pair(mag: f64, lim: &[f64]) -> ResPair {
    ResPair {
        lr: lim.first().is_some_and(|&t| mag <= t),
        hr: lim.get(1).is_some_and(|&t| mag <= t),
    }
}

fn modes(mag_l: f64, mag_m: f64, mag_n: f64, limits: &MatisseLimits, tel: Telescope, ft: FringeTracking) -> MatisseModes {
    MatisseModes {
        l: triple(mag_l, &limits.thresholds(tel, ft, MatisseBand::L)),
        m: pair(mag_m, &limits.thresholds(tel, ft, MatisseBand::M)),
        n: pair(mag_n, &limits.thresholds(tel, ft, MatisseBand::N)),
    }
}

/// Evaluate MATISSE observability against a limit table.
///
/// `limits` is either the live table (empty entries fall back to the
/// estimated table per sub-entry) or the estimated table itself. NaN
/// magnitudes compare false everywhere: an unknown magnitude is never
/// observable.
pub fn evaluate(
    mag_l: f64,
    mag_m: f64,
    mag_n: f64,
    mag_k: f64,
    limits: &MatisseLimits,
) -> MatisseObservability {
    MatisseObservability {
        at: MatisseTelescope {
            ft: modes(mag_l, mag_m, mag_n, limits, Telescope::At, FringeTracking::Ft),
            noft: modes(mag_l, mag_m, mag_n, limits, Telescope::At, FringeTracking::Noft),
        },
        ut: MatisseTelescope {
            ft: modes(mag_l, mag_m, mag_n, limits, Telescope::Ut, FringeTracking::Ft),
            noft: modes(mag_l, mag_m, mag_n, limits, Telescope::Ut, FringeTracking::Noft),
        },
        lim_k: KBandTracking {
            at: mag_k <= 7.5,
            ut: mag_k <= 10.0,
        },
    }
}
