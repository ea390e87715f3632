//! fringe-core - Observability rules for VLTI and CHARA instruments
//!
//! Pure decision engine: magnitudes in, typed observability trees out.
//! No I/O anywhere in this crate; catalog lookups and persistence live in
//! `fringe-catalog` and `fringe-survey`.

pub mod bands;
pub mod gravity;
pub mod guiding;
pub mod instruments;
pub mod limits;
pub mod matisse;
pub mod models;
pub mod sed;
pub mod site;

pub use bands::{jy_to_mag, Band};
pub use gravity::{GravityModes, GravityObservability, TelescopeRecommendation};
pub use guiding::{partition_candidates, requires_guide_star, GuideStar, VltiGuiding};
pub use instruments::{
    CharaObservability, ClassicBands, MircBands, PionierObservability, SpicaModes, VegaModes,
    VisionObservability,
};
pub use limits::{
    BandThresholds, FringeTracking, MatisseBand, MatisseLimits, Telescope, TelescopeLimits,
};
pub use matisse::{
    KBandTracking, MatisseModes, MatisseObservability, MatisseTelescope, ResPair, ResTriple,
};
pub use models::{
    defined, mag_or_nan, Distance, GaiaAstrometry, GuidingReport, InstrumentSet, Magnitudes,
    SkyCoord, StarReport,
};
pub use sed::Sed;
pub use site::{Site, SiteObservability};
