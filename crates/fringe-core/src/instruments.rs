//! Single-threshold instruments: PIONIER, VISION and the CHARA suite.

use serde::{Deserialize, Serialize};

/// PIONIER observability (H band, AT or UT).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PionierObservability {
    #[serde(rename = "H")]
    pub h: bool,
}

/// Evaluate PIONIER: observable for -1 <= magH <= 9.
pub fn pionier(mag_h: f64) -> PionierObservability {
    PionierObservability {
        h: (-1.0..=9.0).contains(&mag_h),
    }
}

/// VISION observability (R band).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionObservability {
    /// Full imaging mode
    pub imaging: bool,
    /// Diameter measurement only
    pub diam: bool,
}

/// Evaluate VISION: imaging to magR 8, diameter measurement to magR 10.
pub fn vision(mag_r: f64) -> VisionObservability {
    VisionObservability {
        imaging: mag_r <= 8.0,
        diam: mag_r <= 10.0,
    }
}

/// VEGA observability per spectral resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VegaModes {
    #[serde(rename = "LR")]
    pub lr: bool,
    #[serde(rename = "MR")]
    pub mr: bool,
    #[serde(rename = "HR")]
    pub hr: bool,
}

/// CLASSIC observability per band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicBands {
    #[serde(rename = "K")]
    pub k: bool,
    #[serde(rename = "H")]
    pub h: bool,
    #[serde(rename = "V")]
    pub v: bool,
}

/// MIRC observability per band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MircBands {
    #[serde(rename = "H")]
    pub h: bool,
    #[serde(rename = "K")]
    pub k: bool,
}

/// SPICA observability per mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpicaModes {
    pub imaging: bool,
    pub diam: bool,
}

/// Observability of the CHARA beam combiners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharaObservability {
    #[serde(rename = "PAVO")]
    pub pavo_r: bool,
    #[serde(rename = "CLASSIC")]
    pub classic: ClassicBands,
    #[serde(rename = "CLIMB")]
    pub climb_k: bool,
    #[serde(rename = "MIRC")]
    pub mirc: MircBands,
    #[serde(rename = "MYSTIC")]
    pub mystic_k: bool,
    #[serde(rename = "VEGA")]
    pub vega: VegaModes,
    #[serde(rename = "SPICA")]
    pub spica: SpicaModes,
    /// Tip-tilt correction possible on the target itself
    #[serde(rename = "Guiding")]
    pub guiding: bool,
}

/// Minimum that propagates NaN, so an unknown magnitude never passes a
/// brightness check downstream.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Evaluate the CHARA suite from the K, H, R and V magnitudes.
pub fn chara(mag_k: f64, mag_h: f64, mag_r: f64, mag_v: f64) -> CharaObservability {
    CharaObservability {
        pavo_r: mag_r <= 7.0,
        classic: ClassicBands {
            k: mag_k <= 6.5,
            h: mag_h <= 7.0,
            v: mag_v <= 10.0,
        },
        climb_k: mag_k <= 6.0,
        mirc: MircBands {
            h: mag_h <= 6.5,
            k: mag_k <= 3.0,
        },
        mystic_k: mag_k <= 6.5,
        vega: VegaModes {
            lr: mag_v <= 7.2,
            mr: mag_v <= 5.8,
            hr: mag_v <= 4.2,
        },
        spica: SpicaModes {
            imaging: mag_v <= 6.0,
            diam: mag_v <= 8.0,
        },
        guiding: nan_min(mag_v, mag_r) <= 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pionier_window_boundaries() {
        assert!(pionier(9.0).h);
        assert!(!pionier(9.01).h);
        assert!(pionier(-1.0).h);
        assert!(!pionier(-1.01).h);
        assert!(!pionier(f64::NAN).h);
    }

    #[test]
    fn vision_imaging_implies_diameter() {
        for mag_r in [-2.0, 0.0, 5.0, 8.0, 9.0, 10.0, 11.0, f64::NAN] {
            let v = vision(mag_r);
            assert!(!v.imaging || v.diam, "magR={mag_r}");
        }
        assert_eq!(vision(7.0), VisionObservability { imaging: true, diam: true });
        assert_eq!(vision(9.0), VisionObservability { imaging: false, diam: true });
        assert_eq!(vision(11.0), VisionObservability::default());
    }

    #[test]
    fn chara_per_instrument_cutoffs() {
        let obs = chara(6.2, 6.8, 6.9, 5.0);
        assert!(obs.classic.k && obs.classic.h && obs.classic.v);
        assert!(!obs.climb_k);
        assert!(obs.pavo_r);
        assert!(!obs.mirc.h && !obs.mirc.k);
        assert!(obs.mystic_k);
        assert_eq!(obs.vega, VegaModes { lr: true, mr: true, hr: false });
        assert_eq!(obs.spica, SpicaModes { imaging: true, diam: true });
        assert!(obs.guiding);
    }

    #[test]
    fn chara_guiding_uses_the_brighter_of_v_and_r() {
        assert!(chara(0.0, 0.0, 9.5, 12.0).guiding);
        assert!(chara(0.0, 0.0, 12.0, 9.5).guiding);
        assert!(!chara(0.0, 0.0, 11.0, 12.0).guiding);
    }

    #[test]
    fn chara_guiding_fails_on_unknown_magnitudes() {
        assert!(!chara(0.0, 0.0, f64::NAN, 5.0).guiding);
        assert!(!chara(0.0, 0.0, 5.0, f64::NAN).guiding);
    }
}
