use emwave_core::error::ensure_finite;
use emwave_core::{ShellProfile, WaveError};
use serde::{Deserialize, Serialize};

/// Shells never fade below this opacity so the outermost stay visible.
pub const MIN_SHELL_OPACITY: f64 = 0.15;

/// Radius every shell starts from before expanding outward.
pub const SEED_RADIUS: f64 = 0.05;

/// How shell opacity drops off with distance from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Falloff {
    /// `base / (index + 1)`, independent of the actual radii.
    #[default]
    Discrete,
    /// `base * r0 / r`, with `r0` the innermost shell radius.
    InverseRadius,
}

/// Opacity and radius of one shell under the discrete falloff.
pub fn radial_amplitude_profile(
    shell_index: usize,
    max_radius: f64,
    base_opacity: f64,
) -> Result<ShellProfile, WaveError> {
    validate_radius(max_radius)?;
    validate_base_opacity(base_opacity)?;

    Ok(ShellProfile {
        index: shell_index,
        radius: max_radius,
        opacity: floored(base_opacity / (shell_index + 1) as f64),
    })
}

fn floored(opacity: f64) -> f64 {
    opacity.max(MIN_SHELL_OPACITY)
}

fn validate_radius(radius: f64) -> Result<(), WaveError> {
    ensure_finite("shell radius", radius)?;
    if radius <= 0.0 {
        return Err(WaveError::invalid(format!("shell radius must be > 0, got {radius}")));
    }
    Ok(())
}

fn validate_base_opacity(base_opacity: f64) -> Result<(), WaveError> {
    ensure_finite("base opacity", base_opacity)?;
    if !(0.0..=1.0).contains(&base_opacity) {
        return Err(WaveError::invalid(format!(
            "base opacity must be in [0, 1], got {base_opacity}"
        )));
    }
    Ok(())
}

/// A set of concentric wavefronts around a point source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphericalWave {
    /// Fully expanded radius of each shell, innermost first.
    pub radii: Vec<f64>,
    pub base_opacity: f64,
    #[serde(default)]
    pub falloff: Falloff,
}

impl Default for SphericalWave {
    fn default() -> Self {
        Self {
            radii: vec![0.8, 1.5, 2.2, 2.9, 3.6],
            base_opacity: 0.9,
            falloff: Falloff::Discrete,
        }
    }
}

impl SphericalWave {
    pub fn validate(&self) -> Result<(), WaveError> {
        if self.radii.is_empty() {
            return Err(WaveError::invalid("spherical wave needs at least one shell"));
        }
        for &r in &self.radii {
            validate_radius(r)?;
        }
        if self.radii.windows(2).any(|w| w[0] >= w[1]) {
            return Err(WaveError::invalid("shell radii must be strictly increasing"));
        }
        validate_base_opacity(self.base_opacity)
    }

    pub fn shells(&self) -> Result<Vec<ShellProfile>, WaveError> {
        self.validate()?;
        match self.falloff {
            Falloff::Discrete => self
                .radii
                .iter()
                .enumerate()
                .map(|(i, &r)| radial_amplitude_profile(i, r, self.base_opacity))
                .collect(),
            Falloff::InverseRadius => {
                let r0 = self.radii[0];
                Ok(self
                    .radii
                    .iter()
                    .enumerate()
                    .map(|(index, &radius)| ShellProfile {
                        index,
                        radius,
                        opacity: floored(self.base_opacity * r0 / radius),
                    })
                    .collect())
            }
        }
    }

    /// Shells partway through expanding from the source.
    ///
    /// At `progress = 0` every shell sits at `SEED_RADIUS` and is invisible;
    /// at `progress = 1` this equals `shells()`. Radius and opacity follow
    /// the same smoothstep ease, so the floor only holds once fully expanded.
    pub fn shells_at(&self, progress: f64) -> Result<Vec<ShellProfile>, WaveError> {
        ensure_finite("expansion progress", progress)?;
        if !(0.0..=1.0).contains(&progress) {
            return Err(WaveError::invalid(format!(
                "expansion progress must be in [0, 1], got {progress}"
            )));
        }
        let eased = progress * progress * (3.0 - 2.0 * progress);
        Ok(self
            .shells()?
            .into_iter()
            .map(|shell| {
                let seed = SEED_RADIUS.min(shell.radius);
                ShellProfile {
                    radius: seed * (1.0 - eased) + shell.radius * eased,
                    opacity: shell.opacity * eased,
                    ..shell
                }
            })
            .collect())
    }
}
