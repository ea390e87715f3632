//! Spectral energy distribution storage and band interpolation.
//!
//! The SED is a sparse, irregularly sampled flux-vs-wavelength sequence
//! fetched from the photometry service. Standard-band magnitudes are read
//! off it by interpolating `log10(flux)` linearly in wavelength. Queries
//! outside the sampled range are undefined rather than extrapolated:
//! a magnitude must never be fabricated beyond observed data.

use serde::{Deserialize, Serialize};

use crate::bands::{jy_to_mag, Band};

/// Spectral energy distribution of a target.
///
/// `wavelength_um` must be sorted ascending; the catalog layer sorts the
/// raw photometry points before constructing this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sed {
    /// Wavelengths in micrometers, ascending
    #[serde(rename = "wl")]
    pub wavelength_um: Vec<f64>,
    /// Flux densities in Jansky
    #[serde(rename = "Flux")]
    pub flux_jy: Vec<f64>,
    /// Flux uncertainties in Jansky
    #[serde(rename = "Err")]
    pub flux_err_jy: Vec<f64>,
    /// Source catalog of each photometry point
    #[serde(rename = "Catalogs")]
    pub catalogs: Vec<String>,
}

impl Sed {
    /// Interpolated flux density (Jy) at `wl_um`.
    ///
    /// Linear interpolation of `log10(flux)` between the two bracketing
    /// samples. Returns `None` when `wl_um` lies outside the closed
    /// sampled range or fewer than two samples exist.
    pub fn flux_at(&self, wl_um: f64) -> Option<f64> {
        let wl = &self.wavelength_um;
        if wl.len() < 2 || wl.len() != self.flux_jy.len() {
            return None;
        }
        let (&first, &last) = (wl.first()?, wl.last()?);
        if !(first..=last).contains(&wl_um) {
            return None;
        }

        // Index of the first sample at or beyond the query wavelength.
        let hi = wl.partition_point(|&w| w < wl_um).min(wl.len() - 1);
        if wl[hi] == wl_um {
            return Some(self.flux_jy[hi]);
        }
        let lo = hi - 1;

        let (log_lo, log_hi) = (self.flux_jy[lo].log10(), self.flux_jy[hi].log10());
        let t = (wl_um - wl[lo]) / (wl[hi] - wl[lo]);
        let log_flux = log_lo + t * (log_hi - log_lo);
        Some(10f64.powf(log_flux))
    }

    /// Magnitude in `band`, or NaN when the band wavelength falls outside
    /// the sampled range.
    pub fn magnitude(&self, band: Band) -> f64 {
        match self.flux_at(band.wavelength_um()) {
            Some(flux) => jy_to_mag(flux, band),
            None => f64::NAN,
        }
    }

    /// Magnitudes for a list of bands (NaN for undefined entries).
    pub fn magnitudes(&self, bands: &[Band]) -> Vec<f64> {
        bands.iter().map(|&band| self.magnitude(band)).collect()
    }
}
