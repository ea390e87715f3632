//! On-site visibility from declination alone.
//!
//! Both checks are deliberate simplifications: a target is counted as
//! visible when its meridian altitude clears the minimum usable elevation,
//! with no hour-angle or rise/set computation.

use serde::{Deserialize, Serialize};

/// Minimum usable elevation above the horizon, degrees.
const MIN_ELEVATION_DEG: f64 = 40.0;

/// Observing site of an interferometric array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Site {
    /// Cerro Paranal, Chile
    Vlti,
    /// Mount Wilson, California
    Chara,
}

impl Site {
    /// Site latitude in degrees.
    pub fn latitude_deg(self) -> f64 {
        match self {
            Site::Vlti => -24.63,
            Site::Chara => 34.2236,
        }
    }

    /// Whether a target at `dec_deg` ever clears the minimum elevation.
    pub fn is_visible(self, dec_deg: f64) -> bool {
        let horizon = 90.0 - MIN_ELEVATION_DEG;
        match self {
            Site::Vlti => dec_deg <= horizon - self.latitude_deg().abs(),
            Site::Chara => dec_deg >= self.latitude_deg() - horizon,
        }
    }
}

/// Per-site visibility of one target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteObservability {
    #[serde(rename = "VLTI")]
    pub vlti: bool,
    #[serde(rename = "CHARA")]
    pub chara: bool,
}

impl SiteObservability {
    pub fn from_declination(dec_deg: f64) -> Self {
        SiteObservability {
            vlti: Site::Vlti.is_visible(dec_deg),
            chara: Site::Chara.is_visible(dec_deg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_southern_target_is_vlti_only() {
        let obs = SiteObservability::from_declination(-80.0);
        assert!(obs.vlti);
        assert!(!obs.chara);
    }

    #[test]
    fn far_northern_target_is_chara_only() {
        let obs = SiteObservability::from_declination(80.0);
        assert!(!obs.vlti);
        assert!(obs.chara);
    }

    #[test]
    fn equatorial_target_is_visible_from_both() {
        let obs = SiteObservability::from_declination(0.0);
        assert!(obs.vlti && obs.chara);
    }

    #[test]
    fn visibility_cutoffs() {
        // VLTI cutoff: dec <= 50 - 24.63 = 25.37
        assert!(Site::Vlti.is_visible(25.37));
        assert!(!Site::Vlti.is_visible(25.38));
        // CHARA cutoff: dec >= 34.2236 - 50 = -15.7764
        assert!(Site::Chara.is_visible(-15.7764));
        assert!(!Site::Chara.is_visible(-15.78));
    }
}
