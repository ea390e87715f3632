//! Survey persistence round-trip tests.

use fringe_core::{
    gravity, instruments, matisse, GuidingReport, InstrumentSet, Magnitudes, MatisseLimits,
    SiteObservability, SkyCoord, StarReport, VltiGuiding,
};
use fringe_survey::{io, SurveyError, SurveyResult};

fn sample_survey() -> SurveyResult {
    let limits = MatisseLimits::estimated();
    let report = StarReport {
        name: "ALTAIR".into(),
        coord: SkyCoord { ra_deg: 297.695, dec_deg: 8.868 },
        sp_type: Some("A7Vn".into()),
        distance: None,
        sed: None,
        mag: Magnitudes {
            v: Some(0.76),
            k: Some(0.22),
            h: Some(0.1),
            r: Some(0.62),
            l: Some(0.2),
            ..Default::default()
        },
        gaia: None,
        instruments: InstrumentSet {
            matisse: matisse::evaluate(0.2, f64::NAN, f64::NAN, 0.22, &limits),
            gravity: gravity::evaluate(0.76, 0.22),
            pionier: instruments::pionier(0.1),
            vision: instruments::vision(0.62),
            chara: instruments::chara(0.22, 0.1, 0.62, 0.76),
        },
        observability: SiteObservability::from_declination(8.868),
        guiding: GuidingReport { vlti: Some(VltiGuiding::ScienceStar), chara: true },
    };

    let mut survey = SurveyResult::new();
    survey.insert("ALTAIR".into(), Some(report));
    survey.insert("NO_SUCH_STAR".into(), None);
    survey
}

#[test]
fn save_then_load_preserves_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let survey = sample_survey();

    let path = io::save(&survey, dir.path().join("survey"), false).unwrap();
    assert_eq!(path.extension().unwrap(), "json");

    let loaded = io::load(&path).unwrap();
    assert_eq!(loaded, survey);

    // Observability leaves stay native JSON booleans.
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw["ALTAIR"]["Ins"]["PIONIER"]["H"].is_boolean());
    assert!(raw["ALTAIR"]["Observability"]["VLTI"].is_boolean());
    assert!(raw["NO_SUCH_STAR"].is_null());
}

#[test]
fn save_refuses_to_overwrite_without_the_flag() {
    let dir = tempfile::tempdir().unwrap();
    let survey = sample_survey();
    let target = dir.path().join("already_there.json");
    std::fs::write(&target, "").unwrap();

    let err = io::save(&survey, &target, false).unwrap_err();
    assert!(matches!(err, SurveyError::AlreadyExists(_)));

    io::save(&survey, &target, true).unwrap();
    let loaded = io::load(&target).unwrap();
    assert_eq!(loaded, survey);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a/b/survey.json");
    io::save(&sample_survey(), &nested, false).unwrap();
    assert!(nested.is_file());
}

#[test]
fn load_of_a_missing_file_is_an_io_error() {
    let err = io::load("/no/such/file").unwrap_err();
    assert!(matches!(err, SurveyError::Io(_)));
}

#[test]
fn load_of_a_malformed_document_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();
    let err = io::load(&path).unwrap_err();
    assert!(matches!(err, SurveyError::Parse(_)));
}

#[test]
fn extensionless_load_finds_the_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let survey = sample_survey();
    io::save(&survey, dir.path().join("s0"), false).unwrap();
    let loaded = io::load(dir.path().join("s0")).unwrap();
    assert_eq!(loaded, survey);
}
