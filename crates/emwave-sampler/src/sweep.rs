use emwave_core::error::ensure_finite;
use emwave_core::WaveError;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// The phase schedule that animates a wave across frames.
///
/// Phases start after zero (the initial curve is drawn at phase 0 before
/// the sweep begins) and increase strictly with the frame index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PhaseSweep {
    /// `frames` evenly spaced steps covering `cycles` full periods.
    Cycles { cycles: f64, frames: usize },
    /// Fixed increment per frame.
    Stepped { step: f64, frames: usize },
}

impl Default for PhaseSweep {
    fn default() -> Self {
        PhaseSweep::Cycles { cycles: 2.0, frames: 40 }
    }
}

impl PhaseSweep {
    pub fn cycles(cycles: f64, frames: usize) -> Result<Self, WaveError> {
        let sweep = PhaseSweep::Cycles { cycles, frames };
        sweep.validate()?;
        Ok(sweep)
    }

    pub fn stepped(step: f64, frames: usize) -> Result<Self, WaveError> {
        let sweep = PhaseSweep::Stepped { step, frames };
        sweep.validate()?;
        Ok(sweep)
    }

    pub fn validate(&self) -> Result<(), WaveError> {
        let (name, value) = match *self {
            PhaseSweep::Cycles { cycles, .. } => ("sweep cycles", cycles),
            PhaseSweep::Stepped { step, .. } => ("sweep step", step),
        };
        ensure_finite(name, value)?;
        if value <= 0.0 {
            return Err(WaveError::invalid(format!("{name} must be > 0, got {value}")));
        }
        let last = self.final_phase();
        if !last.is_finite() {
            return Err(WaveError::invalid(format!(
                "sweep overflows: final phase after {} frames is {last}",
                self.frames()
            )));
        }
        Ok(())
    }

    pub fn frames(&self) -> usize {
        match *self {
            PhaseSweep::Cycles { frames, .. } | PhaseSweep::Stepped { frames, .. } => frames,
        }
    }

    /// Phase for frame `i`, counting from 1.
    pub fn phase_at(&self, i: usize) -> f64 {
        match *self {
            PhaseSweep::Cycles { cycles, frames } => (i as f64 / frames as f64) * cycles * TAU,
            PhaseSweep::Stepped { step, .. } => i as f64 * step,
        }
    }

    /// Last phase reached, or 0 for an empty sweep.
    pub fn final_phase(&self) -> f64 {
        match self.frames() {
            0 => 0.0,
            n => self.phase_at(n),
        }
    }

    pub fn phases(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=self.frames()).map(move |i| self.phase_at(i))
    }
}
