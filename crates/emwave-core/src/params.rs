use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::error::{ensure_finite, WaveError};

/// Spatial parameters of a sampled traveling sinusoid.
///
/// Set once per scene. The displacement at `x` for phase `p` is
/// `amplitude * sin(wavenumber * x - p)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParameters {
    pub amplitude: f64,
    pub wavenumber: f64,
    pub domain: Domain,
    pub sample_count: usize,
}

impl WaveParameters {
    pub fn new(
        amplitude: f64,
        wavenumber: f64,
        domain: Domain,
        sample_count: usize,
    ) -> Result<Self, WaveError> {
        let params = Self { amplitude, wavenumber, domain, sample_count };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), WaveError> {
        if self.sample_count == 0 {
            return Err(WaveError::invalid("sample count must be > 0"));
        }
        self.domain.validate()?;
        ensure_finite("amplitude", self.amplitude)?;
        if self.amplitude < 0.0 {
            return Err(WaveError::invalid(format!(
                "amplitude must be >= 0, got {}",
                self.amplitude
            )));
        }
        ensure_finite("wavenumber", self.wavenumber)?;
        if self.wavenumber == 0.0 {
            return Err(WaveError::invalid("wavenumber must be non-zero"));
        }
        Ok(())
    }

    /// Transverse displacement at `x` for the given phase.
    pub fn displacement(&self, x: f64, phase: f64) -> f64 {
        self.amplitude * (self.wavenumber * x - phase).sin()
    }

    pub fn wavelength(&self) -> f64 {
        std::f64::consts::TAU / self.wavenumber.abs()
    }

    /// Same wave over a different domain, e.g. a sub-region of a scene.
    pub fn with_domain(&self, domain: Domain, sample_count: usize) -> Result<Self, WaveError> {
        Self::new(self.amplitude, self.wavenumber, domain, sample_count)
    }
}
