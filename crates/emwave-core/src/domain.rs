use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, WaveError};

/// A closed interval along the propagation axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
}

impl Domain {
    pub fn new(start: f64, end: f64) -> Result<Self, WaveError> {
        let domain = Self { start, end };
        domain.validate()?;
        Ok(domain)
    }

    pub fn validate(&self) -> Result<(), WaveError> {
        ensure_finite("domain start", self.start)?;
        ensure_finite("domain end", self.end)?;
        if self.start >= self.end {
            return Err(WaveError::invalid(format!(
                "domain start ({}) must be less than end ({})",
                self.start, self.end
            )));
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x <= self.end
    }

    /// `count` evenly spaced values from `start` to `end`, both included.
    ///
    /// A single sample sits at `start`. The last value is pinned to `end`
    /// so accumulated rounding never pushes it past the interval.
    pub fn linspace(&self, count: usize) -> impl Iterator<Item = f64> + '_ {
        let step = if count > 1 {
            self.width() / (count - 1) as f64
        } else {
            0.0
        };
        (0..count).map(move |i| {
            if count > 1 && i == count - 1 {
                self.end
            } else {
                self.start + step * i as f64
            }
        })
    }
}
