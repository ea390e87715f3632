//! Target records: magnitudes, astrometry and the assembled star report.

use serde::{Deserialize, Serialize};

use crate::gravity::GravityObservability;
use crate::guiding::VltiGuiding;
use crate::instruments::{CharaObservability, PionierObservability, VisionObservability};
use crate::matisse::MatisseObservability;
use crate::sed::Sed;
use crate::site::SiteObservability;

/// Photometric magnitudes of one target.
///
/// `None` means the magnitude could not be determined; it serializes to
/// JSON `null`. Built once by the search pipeline, never mutated after.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Magnitudes {
    #[serde(rename = "magB")]
    pub b: Option<f64>,
    #[serde(rename = "magV")]
    pub v: Option<f64>,
    #[serde(rename = "magR")]
    pub r: Option<f64>,
    #[serde(rename = "magJ")]
    pub j: Option<f64>,
    #[serde(rename = "magH")]
    pub h: Option<f64>,
    #[serde(rename = "magK")]
    pub k: Option<f64>,
    #[serde(rename = "magL")]
    pub l: Option<f64>,
    #[serde(rename = "magM")]
    pub m: Option<f64>,
    #[serde(rename = "magN")]
    pub n: Option<f64>,
    /// Gaia G magnitude
    #[serde(rename = "magG")]
    pub g: Option<f64>,
}

/// Store a computed magnitude, mapping non-finite values to undefined.
pub fn defined(mag: f64) -> Option<f64> {
    mag.is_finite().then_some(mag)
}

/// Read a magnitude for the evaluators, which expect NaN for undefined.
pub fn mag_or_nan(mag: Option<f64>) -> f64 {
    mag.unwrap_or(f64::NAN)
}

/// ICRS coordinates in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SkyCoord {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

/// Astrometric distance with its uncertainty, in kiloparsec.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    #[serde(rename = "d")]
    pub kpc: f64,
    #[serde(rename = "e_d")]
    pub err_kpc: f64,
}

impl Distance {
    /// Distance from a parallax in milliarcseconds.
    ///
    /// d = 1/plx (kpc for plx in mas), first-order error propagation
    /// e_d = e_plx / plx^2.
    pub fn from_parallax(plx_mas: f64, e_plx_mas: f64) -> Self {
        Distance {
            kpc: 1.0 / plx_mas,
            err_kpc: (e_plx_mas / (plx_mas * plx_mas)).abs(),
        }
    }
}

/// Gaia DR2 astrometry of the target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GaiaAstrometry {
    #[serde(rename = "RA")]
    pub ra_deg: f64,
    #[serde(rename = "e_RA")]
    pub e_ra_mas: f64,
    #[serde(rename = "DEC")]
    pub dec_deg: f64,
    #[serde(rename = "e_DEC")]
    pub e_dec_mas: f64,
    #[serde(rename = "Plx")]
    pub plx_mas: f64,
    #[serde(rename = "e_Plx")]
    pub e_plx_mas: f64,
    #[serde(rename = "pmRA")]
    pub pm_ra: f64,
    #[serde(rename = "e_pmRA")]
    pub e_pm_ra: f64,
    #[serde(rename = "pmDE")]
    pub pm_dec: f64,
    #[serde(rename = "e_pmDE")]
    pub e_pm_dec: f64,
    /// Effective temperature, Kelvin
    #[serde(rename = "Teff")]
    pub teff_k: Option<f64>,
    /// Distance derived from the Gaia parallax
    #[serde(rename = "Dkpc")]
    pub distance_kpc: Option<f64>,
    #[serde(rename = "e_Dkpc")]
    pub e_distance_kpc: Option<f64>,
}

/// Observability with every supported instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSet {
    #[serde(rename = "MATISSE")]
    pub matisse: MatisseObservability,
    #[serde(rename = "GRAVITY")]
    pub gravity: GravityObservability,
    #[serde(rename = "PIONIER")]
    pub pionier: PionierObservability,
    #[serde(rename = "VISION")]
    pub vision: VisionObservability,
    #[serde(rename = "CHARA")]
    pub chara: CharaObservability,
}

/// Guide-star qualification per observatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidingReport {
    /// `None` when the off-axis search itself was unavailable
    #[serde(rename = "VLTI")]
    pub vlti: Option<VltiGuiding>,
    /// Tip-tilt on the target itself at CHARA
    #[serde(rename = "CHARA")]
    pub chara: bool,
}

/// Everything the survey learned about one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarReport {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Coord")]
    pub coord: SkyCoord,
    #[serde(rename = "Sp_type")]
    pub sp_type: Option<String>,
    #[serde(rename = "Distance")]
    pub distance: Option<Distance>,
    #[serde(rename = "SED")]
    pub sed: Option<Sed>,
    #[serde(rename = "Mag")]
    pub mag: Magnitudes,
    #[serde(rename = "Gaia_dr2")]
    pub gaia: Option<GaiaAstrometry>,
    #[serde(rename = "Ins")]
    pub instruments: InstrumentSet,
    #[serde(rename = "Observability")]
    pub observability: SiteObservability,
    #[serde(rename = "Guiding_star")]
    pub guiding: GuidingReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::MatisseLimits;
    use crate::{gravity, instruments, matisse};

    #[test]
    fn distance_from_parallax() {
        // 2 mas -> 0.5 kpc; e_d = 0.1 / 4 = 0.025 kpc
        let d = Distance::from_parallax(2.0, 0.1);
        assert!((d.kpc - 0.5).abs() < 1e-12);
        assert!((d.err_kpc - 0.025).abs() < 1e-12);
    }

    #[test]
    fn undefined_magnitudes_serialize_to_null() {
        let mag = Magnitudes {
            k: Some(4.5),
            ..Default::default()
        };
        let json = serde_json::to_value(&mag).unwrap();
        assert_eq!(json["magK"], 4.5);
        assert!(json["magL"].is_null());
        let back: Magnitudes = serde_json::from_value(json).unwrap();
        assert_eq!(back, mag);
    }

    #[test]
    fn defined_rejects_non_finite_values() {
        assert_eq!(defined(4.2), Some(4.2));
        assert_eq!(defined(f64::NAN), None);
        assert_eq!(defined(f64::INFINITY), None);
        assert!(mag_or_nan(None).is_nan());
    }

    #[test]
    fn star_report_round_trips_with_native_booleans() {
        let limits = MatisseLimits::estimated();
        let report = StarReport {
            name: "WR104".into(),
            coord: SkyCoord { ra_deg: 275.0, dec_deg: -23.6 },
            sp_type: Some("WC9d+B0.5V".into()),
            distance: Some(Distance::from_parallax(0.4, 0.1)),
            sed: None,
            mag: Magnitudes { k: Some(2.4), v: Some(13.5), ..Default::default() },
            gaia: None,
            instruments: InstrumentSet {
                matisse: matisse::evaluate(0.1, 0.5, -0.5, 2.4, &limits),
                gravity: gravity::evaluate(13.5, 2.4),
                pionier: instruments::pionier(3.0),
                vision: instruments::vision(10.5),
                chara: instruments::chara(2.4, 3.0, 10.5, 13.5),
            },
            observability: SiteObservability::from_declination(-23.6),
            guiding: GuidingReport { vlti: Some(VltiGuiding::ScienceStar), chara: false },
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: StarReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);

        // Leaves are plain JSON booleans, not wrapped values.
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["Ins"]["MATISSE"]["AT"]["noft"]["L"]["LR"].is_boolean());
        assert!(value["Ins"]["CHARA"]["Guiding"].is_boolean());
    }
}
