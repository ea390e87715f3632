//! Photometric bands and flux/magnitude conversion.

use serde::{Deserialize, Serialize};

/// Standard Johnson photometric bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    B,
    V,
    R,
    I,
    J,
    H,
    K,
    L,
    M,
    N,
    Q,
}

impl Band {
    /// Bands derived from an interpolated SED, in pipeline order.
    pub const SED_BANDS: [Band; 9] = [
        Band::B,
        Band::V,
        Band::R,
        Band::J,
        Band::H,
        Band::K,
        Band::L,
        Band::M,
        Band::N,
    ];

    /// Central wavelength in micrometers.
    pub fn wavelength_um(self) -> f64 {
        match self {
            Band::B => 0.44,
            // Allen's astrophysical quantities
            Band::V => 0.5556,
            Band::R => 0.64,
            Band::I => 0.79,
            Band::J => 1.215,
            Band::H => 1.654,
            Band::K => 2.179,
            Band::L => 3.547,
            Band::M => 4.769,
            // 10.2, 42.7 Johnson N (https://www.gemini.edu/?q=node/11119)
            Band::N => 10.2,
            Band::Q => 20.13,
        }
    }

    /// Zero-point flux in Jansky.
    pub fn zero_point_jy(self) -> f64 {
        match self {
            Band::B => 4260.0,
            Band::V => 3540.0,
            Band::R => 3080.0,
            Band::I => 2550.0,
            Band::J => 1630.0,
            Band::H => 1050.0,
            Band::K => 655.0,
            Band::L => 276.0,
            Band::M => 160.0,
            Band::N => 42.7,
            Band::Q => 9.7,
        }
    }
}

/// Convert a flux density in Jansky to a Johnson magnitude.
///
/// Pure `-2.5 * log10(F / F0)`. Non-positive flux follows IEEE log
/// semantics (`0.0` yields `inf`, negative yields NaN); callers that want
/// "undefined" instead must guard before converting.
pub fn jy_to_mag(flux_jy: f64, band: Band) -> f64 {
    -2.5 * (flux_jy / band.zero_point_jy()).log10()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_point_flux_maps_to_zero_magnitude() {
        for band in Band::SED_BANDS {
            let mag = jy_to_mag(band.zero_point_jy(), band);
            assert!(mag.abs() < 1e-12, "{band:?}: {mag}");
        }
    }

    #[test]
    fn fainter_flux_means_larger_magnitude() {
        let bright = jy_to_mag(100.0, Band::K);
        let faint = jy_to_mag(1.0, Band::K);
        assert!(faint > bright);
        // One dex in flux is 2.5 magnitudes
        assert!((faint - bright - 5.0).abs() < 1e-12);
    }

    #[test]
    fn non_positive_flux_is_not_a_finite_magnitude() {
        assert!(jy_to_mag(0.0, Band::V).is_infinite());
        assert!(jy_to_mag(-1.0, Band::V).is_nan());
    }
}
