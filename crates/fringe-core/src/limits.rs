//! MATISSE limiting-magnitude tables.
//!
//! Two tables exist: a live one published by the observatory (refreshed by
//! the catalog layer, JSON document with the same shape as this struct)
//! and the fixed estimated-performance table from commissioning. A mode
//! whose live threshold list is empty is not commissioned yet; the lookup
//! falls back to the estimated table for that sub-entry only.

use serde::{Deserialize, Serialize};

/// VLTI telescope class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Telescope {
    /// Auxiliary Telescope (1.8 m)
    At,
    /// Unit Telescope (8.2 m)
    Ut,
}

/// Fringe-tracking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FringeTracking {
    /// External fringe tracker feeding the instrument
    Ft,
    /// Instrument self-tracking
    Noft,
}

/// Limiting magnitudes for one telescope/tracking combination.
///
/// Thresholds are ordered faintest first: L holds [LR, MR, HR], M and N
/// hold [LR, HR]. Higher resolution always requires a brighter target, so
/// each list is non-increasing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BandThresholds {
    #[serde(rename = "L")]
    pub l: Vec<f64>,
    #[serde(rename = "M")]
    pub m: Vec<f64>,
    #[serde(rename = "N")]
    pub n: Vec<f64>,
}

/// Limits for both tracking states of one telescope class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelescopeLimits {
    pub noft: BandThresholds,
    pub ft: BandThresholds,
}

/// Full MATISSE limit table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatisseLimits {
    pub at: TelescopeLimits,
    pub ut: TelescopeLimits,
}

/// Infrared band carrying MATISSE thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatisseBand {
    L,
    M,
    N,
}

impl MatisseLimits {
    /// Estimated performance from testing and commissioning. Used as the
    /// wholesale fallback when no live table is available, and as the
    /// per-entry fallback for modes the live table leaves empty.
    pub fn estimated() -> Self {
        MatisseLimits {
            at: TelescopeLimits {
                noft: BandThresholds {
                    l: vec![4.2, 0.9, -1.5],
                    m: vec![3.24, 1.0],
                    n: vec![-0.35, -2.2],
                },
                ft: BandThresholds {
                    l: vec![7.7, 6.1, 4.2],
                    m: vec![5.24, 1.6],
                    n: vec![1.6, 0.1],
                },
            },
            ut: TelescopeLimits {
                noft: BandThresholds {
                    l: vec![7.0, 3.7, 1.3],
                    m: vec![6.03, 3.83],
                    n: vec![2.7, 0.8],
                },
                ft: BandThresholds {
                    l: vec![10.3, 8.8, 6.9],
                    m: vec![5.0, 5.0],
                    n: vec![4.6, 3.2],
                },
            },
        }
    }

    fn entry(&self, telescope: Telescope, tracking: FringeTracking, band: MatisseBand) -> &[f64] {
        let tel = match telescope {
            Telescope::At => &self.at,
            Telescope::Ut => &self.ut,
        };
        let bands = match tracking {
            FringeTracking::Ft => &tel.ft,
            FringeTracking::Noft => &tel.noft,
        };
        match band {
            MatisseBand::L => &bands.l,
            MatisseBand::M => &bands.m,
            MatisseBand::N => &bands.n,
        }
    }

    /// Two-tier threshold lookup: this table's entry when non-empty, else
    /// the estimated-performance entry for the same key.
    pub fn thresholds(
        &self,
        telescope: Telescope,
        tracking: FringeTracking,
        band: MatisseBand,
    ) -> Vec<f64> {
        let live = self.entry(telescope, tracking, band);
        if !live.is_empty() {
            return live.to_vec();
        }
        MatisseLimits::estimated()
            .entry(telescope, tracking, band)
            .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimated_lists_are_non_increasing() {
        let limits = MatisseLimits::estimated();
        for tel in [Telescope::At, Telescope::Ut] {
            for ft in [FringeTracking::Ft, FringeTracking::Noft] {
                for band in [MatisseBand::L, MatisseBand::M, MatisseBand::N] {
                    let lim = limits.thresholds(tel, ft, band);
                    assert!(
                        lim.windows(2).all(|w| w[0] >= w[1]),
                        "{tel:?}/{ft:?}/{band:?}: {lim:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn empty_live_entry_falls_back_to_estimated() {
        let mut live = MatisseLimits::estimated();
        live.ut.ft.m.clear();
        live.ut.ft.l = vec![9.0, 8.0, 7.0];

        let estimated = MatisseLimits::estimated();
        assert_eq!(
            live.thresholds(Telescope::Ut, FringeTracking::Ft, MatisseBand::M),
            estimated.ut.ft.m
        );
        // Non-empty entries stay on the live table.
        assert_eq!(
            live.thresholds(Telescope::Ut, FringeTracking::Ft, MatisseBand::L),
            vec![9.0, 8.0, 7.0]
        );
    }

    #[test]
    fn live_document_round_trips() {
        let doc = r#"{
            "at": {"noft": {"L": [4.0, 1.0, -1.0], "M": [3.0, 1.0], "N": [0.0, -2.0]},
                   "ft":   {"L": [7.0, 6.0, 4.0], "M": [5.0, 2.0], "N": []}},
            "ut": {"noft": {"L": [7.0, 4.0, 1.0], "M": [6.0, 4.0], "N": [3.0, 1.0]},
                   "ft":   {"L": [], "M": [], "N": []}}
        }"#;
        let parsed: MatisseLimits = serde_json::from_str(doc).unwrap();
        assert_eq!(parsed.at.noft.l, vec![4.0, 1.0, -1.0]);
        assert!(parsed.ut.ft.l.is_empty());
        let back: MatisseLimits =
            serde_json::from_str(&serde_json::to_string(&parsed).unwrap()).unwrap();
        assert_eq!(parsed, back);
    }
}
