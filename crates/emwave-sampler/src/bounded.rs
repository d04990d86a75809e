use emwave_core::{Domain, TransverseAxis, WaveCurve, WaveError, WaveParameters};
use serde::{Deserialize, Serialize};

use crate::planar::planar_field_curve;

/// Sample a wave confined to its own sub-domain, e.g. inside a dielectric.
///
/// The evaluation rule is the same as for the free-space curve; only the
/// region's wavenumber and bounds differ. Drawn on the `Y` axis.
pub fn bounded_region_curve(params: &WaveParameters, phase: f64) -> Result<WaveCurve, WaveError> {
    planar_field_curve(params, TransverseAxis::Y, phase)
}

/// Two adjoining regions: free space followed by a lossless medium.
///
/// The medium has a larger wavenumber (shorter wavelength, lower phase
/// velocity) but the same amplitude, since no energy is lost crossing
/// the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DielectricInterface {
    pub vacuum: WaveParameters,
    pub medium: WaveParameters,
}

impl DielectricInterface {
    pub fn new(vacuum: WaveParameters, medium: WaveParameters) -> Result<Self, WaveError> {
        let interface = Self { vacuum, medium };
        interface.validate()?;
        Ok(interface)
    }

    pub fn validate(&self) -> Result<(), WaveError> {
        self.vacuum.validate()?;
        self.medium.validate()?;
        if self.vacuum.domain.end > self.medium.domain.start {
            return Err(WaveError::invalid(format!(
                "vacuum region must end ({}) before the medium begins ({})",
                self.vacuum.domain.end, self.medium.domain.start
            )));
        }
        Ok(())
    }

    /// Midpoint of the gap between the two regions.
    pub fn boundary(&self) -> f64 {
        (self.vacuum.domain.end + self.medium.domain.start) / 2.0
    }

    /// Full extent covered by both regions.
    pub fn extent(&self) -> Domain {
        Domain {
            start: self.vacuum.domain.start,
            end: self.medium.domain.end,
        }
    }

    /// Ratio of medium to vacuum wavelength, i.e. `1 / n` for refractive index `n`.
    pub fn wavelength_ratio(&self) -> f64 {
        self.medium.wavelength() / self.vacuum.wavelength()
    }

    /// Both region curves at the same phase: `(vacuum, medium)`.
    pub fn curves(&self, phase: f64) -> Result<(WaveCurve, WaveCurve), WaveError> {
        self.curves_at(phase, phase)
    }

    /// Region curves with independent phases, for the frame where the
    /// wave first enters the medium.
    pub fn curves_at(
        &self,
        vacuum_phase: f64,
        medium_phase: f64,
    ) -> Result<(WaveCurve, WaveCurve), WaveError> {
        self.validate()?;
        let vacuum = bounded_region_curve(&self.vacuum, vacuum_phase)?;
        let medium = bounded_region_curve(&self.medium, medium_phase)?;
        Ok((vacuum, medium))
    }
}
