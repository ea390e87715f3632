//! Aggregation of a survey into per-instrument/mode target lists.
//!
//! This is a consumer of the per-target observability trees, not part of
//! the decision engine: it applies the site-visibility and guiding gates
//! on top of the instrument flags. VLTI instruments require VLTI site
//! visibility plus a usable VLTI guide star; CHARA instruments require
//! CHARA site visibility plus the tip-tilt flag.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SurveyResult;
use fringe_core::StarReport;

/// Which VISION mode gates the count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisionMode {
    #[default]
    Imaging,
    Diam,
}

/// Observable-star lists per spectral resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolutionLists {
    #[serde(rename = "LR")]
    pub lr: Vec<String>,
    #[serde(rename = "MR", skip_serializing_if = "Vec::is_empty", default)]
    pub mr: Vec<String>,
    #[serde(rename = "HR")]
    pub hr: Vec<String>,
}

/// MATISSE counts keep the historical matrix: L and N bands at LR and HR.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatisseBandLists {
    #[serde(rename = "L")]
    pub l: ResolutionLists,
    #[serde(rename = "N")]
    pub n: ResolutionLists,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatisseTelescopeLists {
    pub noft: MatisseBandLists,
    pub ft: MatisseBandLists,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatisseLists {
    #[serde(rename = "UT")]
    pub ut: MatisseTelescopeLists,
    #[serde(rename = "AT")]
    pub at: MatisseTelescopeLists,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GravityModeLists {
    #[serde(rename = "MR")]
    pub mr: Vec<String>,
    #[serde(rename = "HR")]
    pub hr: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GravityLists {
    #[serde(rename = "UT")]
    pub ut: GravityModeLists,
    #[serde(rename = "AT")]
    pub at: GravityModeLists,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassicLists {
    #[serde(rename = "V")]
    pub v: Vec<String>,
    #[serde(rename = "H")]
    pub h: Vec<String>,
    #[serde(rename = "K")]
    pub k: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MircLists {
    #[serde(rename = "H")]
    pub h: Vec<String>,
    #[serde(rename = "K")]
    pub k: Vec<String>,
}

/// Survey-wide observability counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyCount {
    #[serde(rename = "MATISSE")]
    pub matisse: MatisseLists,
    #[serde(rename = "GRAVITY")]
    pub gravity: GravityLists,
    #[serde(rename = "PIONIER")]
    pub pionier: Vec<String>,
    #[serde(rename = "VISION")]
    pub vision: Vec<String>,
    #[serde(rename = "PAVO")]
    pub pavo: Vec<String>,
    #[serde(rename = "CLASSIC")]
    pub classic: ClassicLists,
    #[serde(rename = "CLIMB")]
    pub climb: Vec<String>,
    #[serde(rename = "MYSTIC")]
    pub mystic: Vec<String>,
    #[serde(rename = "MIRC")]
    pub mirc: MircLists,
    #[serde(rename = "VEGA")]
    pub vega: ResolutionLists,
    /// Targets with no usable result
    pub unavailable: Vec<String>,
    pub n_stars: usize,
    pub n_vlti: usize,
    pub n_chara: usize,
}

fn add_matisse(count: &mut MatisseLists, report: &StarReport, star: &str, gate: bool) {
    let tree = &report.instruments.matisse;
    for (tel_lists, tel) in [(&mut count.at, tree.at), (&mut count.ut, tree.ut)] {
        for (band_lists, modes) in [(&mut tel_lists.noft, tel.noft), (&mut tel_lists.ft, tel.ft)] {
            for (list, flag) in [
                (&mut band_lists.l.lr, modes.l.lr),
                (&mut band_lists.l.hr, modes.l.hr),
                (&mut band_lists.n.lr, modes.n.lr),
                (&mut band_lists.n.hr, modes.n.hr),
            ] {
                if gate && flag {
                    list.push(star.to_string());
                }
            }
        }
    }
}

fn add_gravity(count: &mut GravityLists, report: &StarReport, star: &str, gate: bool) {
    let tree = &report.instruments.gravity;
    for (lists, modes) in [(&mut count.at, tree.at), (&mut count.ut, tree.ut)] {
        if gate && modes.mr {
            lists.mr.push(star.to_string());
        }
        if gate && modes.hr {
            lists.hr.push(star.to_string());
        }
    }
}

/// Aggregate a survey into per-instrument target lists.
pub fn count_survey(survey: &SurveyResult, vision_mode: VisionMode) -> SurveyCount {
    let mut count = SurveyCount {
        n_stars: survey.len(),
        ..Default::default()
    };

    for (star, report) in survey {
        let Some(report) = report else {
            count.unavailable.push(star.clone());
            continue;
        };

        if report.sed.is_some() {
            if report.observability.vlti {
                count.n_vlti += 1;
            }
            if report.observability.chara {
                count.n_chara += 1;
            }
        }

        let guid_vlti = report
            .guiding
            .vlti
            .as_ref()
            .is_some_and(|guiding| guiding.usable());
        let vlti_gate = report.observability.vlti && guid_vlti;
        let chara_gate = report.observability.chara && report.instruments.chara.guiding;

        add_matisse(&mut count.matisse, report, star, vlti_gate);
        add_gravity(&mut count.gravity, report, star, vlti_gate);

        if vlti_gate && report.instruments.pionier.h {
            count.pionier.push(star.clone());
        }
        let vision_ok = match vision_mode {
            VisionMode::Imaging => report.instruments.vision.imaging,
            VisionMode::Diam => report.instruments.vision.diam,
        };
        if vlti_gate && vision_ok {
            count.vision.push(star.clone());
        }

        let chara = &report.instruments.chara;
        if chara_gate {
            for (list, flag) in [
                (&mut count.mirc.h, chara.mirc.h),
                (&mut count.mirc.k, chara.mirc.k),
                (&mut count.vega.lr, chara.vega.lr),
                (&mut count.vega.mr, chara.vega.mr),
                (&mut count.vega.hr, chara.vega.hr),
                (&mut count.classic.v, chara.classic.v),
                (&mut count.classic.h, chara.classic.h),
                (&mut count.classic.k, chara.classic.k),
                (&mut count.pavo, chara.pavo_r),
                (&mut count.mystic, chara.mystic_k),
                (&mut count.climb, chara.climb_k),
            ] {
                if flag {
                    list.push(star.clone());
                }
            }
        }
    }
    count
}

impl fmt::Display for SurveyCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Survey of {} stars:", self.n_stars)?;
        writeln!(
            f,
            "Observability: {} from the VLTI, {} from the CHARA.",
            self.n_vlti, self.n_chara
        )?;
        writeln!(f, "VLTI:")?;
        writeln!(f, "  MATISSE (AT): {:?}", self.matisse.at.noft.l.lr)?;
        writeln!(f, "          (UT): {:?}", self.matisse.ut.noft.l.lr)?;
        writeln!(f, "  GRAVITY (AT): {:?}", self.gravity.at.mr)?;
        writeln!(f, "          (UT): {:?}", self.gravity.ut.mr)?;
        writeln!(f, "  PIONIER (AT/UT): {:?}", self.pionier)?;
        writeln!(f, "  VISION  (AT/UT): {:?}", self.vision)?;
        writeln!(f, "CHARA:")?;
        writeln!(f, "  VEGA:    {:?}", self.vega.lr)?;
        writeln!(f, "  PAVO:    {:?}", self.pavo)?;
        writeln!(f, "  MIRC:    {:?}", self.mirc.h)?;
        writeln!(f, "  CLIMB:   {:?}", self.climb)?;
        writeln!(f, "  CLASSIC: {:?}", self.classic.h)?;
        writeln!(f, "  MYSTIC:  {:?}", self.mystic)?;
        if !self.unavailable.is_empty() {
            writeln!(f, "Unavailable: {:?}", self.unavailable)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fringe_core::{
        gravity, instruments, matisse, GuidingReport, InstrumentSet, Magnitudes, MatisseLimits,
        Sed, SiteObservability, SkyCoord, StarReport, VltiGuiding,
    };

    fn report(dec_deg: f64, mag_k: f64, mag_v: f64) -> StarReport {
        let limits = MatisseLimits::estimated();
        let chara = instruments::chara(mag_k, 5.0, mag_v, mag_v);
        StarReport {
            name: "TEST".into(),
            coord: SkyCoord { ra_deg: 10.0, dec_deg },
            sp_type: None,
            distance: None,
            sed: Some(Sed::default()),
            mag: Magnitudes::default(),
            gaia: None,
            instruments: InstrumentSet {
                matisse: matisse::evaluate(0.0, 0.0, 0.0, mag_k, &limits),
                gravity: gravity::evaluate(mag_v, mag_k),
                pionier: instruments::pionier(5.0),
                vision: instruments::vision(mag_v),
                chara,
            },
            observability: SiteObservability::from_declination(dec_deg),
            guiding: GuidingReport { vlti: Some(VltiGuiding::ScienceStar), chara: chara.guiding },
        }
    }

    #[test]
    fn southern_star_counts_for_vlti_instruments_only() {
        let mut survey = SurveyResult::new();
        survey.insert("A".into(), Some(report(-60.0, 5.0, 6.0)));
        let count = count_survey(&survey, VisionMode::Imaging);

        assert_eq!(count.pionier, vec!["A"]);
        assert_eq!(count.gravity.ut.mr, vec!["A"]);
        assert_eq!(count.matisse.at.noft.l.lr, vec!["A"]);
        // Not visible from CHARA
        assert!(count.mirc.h.is_empty());
        assert!(count.climb.is_empty());
        assert_eq!(count.n_vlti, 1);
        assert_eq!(count.n_chara, 0);
    }

    #[test]
    fn northern_star_counts_for_chara_instruments_only() {
        let mut survey = SurveyResult::new();
        survey.insert("B".into(), Some(report(60.0, 5.0, 6.0)));
        let count = count_survey(&survey, VisionMode::Imaging);

        assert!(count.pionier.is_empty());
        assert_eq!(count.classic.k, vec!["B"]);
        assert_eq!(count.mystic, vec!["B"]);
        assert_eq!(count.vega.lr, vec!["B"]);
        assert_eq!(count.n_chara, 1);
    }

    #[test]
    fn missing_guide_star_gates_out_vlti_counts() {
        let mut r = report(-60.0, 5.0, 6.0);
        r.guiding.vlti = Some(VltiGuiding::Candidates { tier1: vec![], tier2: vec![] });
        let mut survey = SurveyResult::new();
        survey.insert("C".into(), Some(r));
        let count = count_survey(&survey, VisionMode::Imaging);
        assert!(count.pionier.is_empty());
        assert!(count.matisse.at.noft.l.lr.is_empty());
    }

    #[test]
    fn failed_targets_are_listed_unavailable() {
        let mut survey = SurveyResult::new();
        survey.insert("GHOST".into(), None);
        let count = count_survey(&survey, VisionMode::Imaging);
        assert_eq!(count.unavailable, vec!["GHOST"]);
        assert_eq!(count.n_stars, 1);
    }
}
