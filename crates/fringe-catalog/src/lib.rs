//! fringe-catalog - Remote catalog clients
//!
//! Thin glue around the CDS services: identifier resolution, photometry
//! (SED) retrieval, Gaia astrometry, guide-star cone searches and the
//! optional live MATISSE limit feed. Every per-field lookup degrades to
//! "unavailable" instead of raising past the crate boundary; only a target
//! missing from the resolver is an error the caller must handle.

pub mod client;
pub mod error;
pub mod health;
pub mod limits_feed;
pub mod simbad;
pub mod tap;
pub mod vizier;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use simbad::SimbadEntry;
pub use vizier::GaiaResult;
