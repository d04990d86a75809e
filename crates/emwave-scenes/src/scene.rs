use std::path::Path;

use emwave_core::{Domain, TransverseAxis, WaveError, WaveParameters};
use emwave_sampler::{
    bounded_region_curve, planar_field_curve, planar_field_vectors, DielectricInterface, Falloff,
    PhaseSweep, SphericalWave, VectorLayout,
};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::frame::WaveFrame;

/// A plane wave with orthogonal E (y) and B (z) components and field arrows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneWaveScene {
    pub wave: WaveParameters,
    #[serde(default)]
    pub vectors: VectorLayout,
    #[serde(default)]
    pub sweep: PhaseSweep,
}

impl Default for PlaneWaveScene {
    fn default() -> Self {
        Self {
            wave: WaveParameters {
                amplitude: 1.5,
                wavenumber: 1.5,
                domain: Domain { start: 0.0, end: 6.5 },
                sample_count: 300,
            },
            vectors: VectorLayout::default(),
            sweep: PhaseSweep::default(),
        }
    }
}

impl PlaneWaveScene {
    fn validate(&self) -> Result<(), WaveError> {
        self.wave.validate()?;
        self.vectors.validate()?;
        self.sweep.validate()
    }

    fn render(&self, index: usize, phase: f64) -> Result<WaveFrame, WaveError> {
        let e = TransverseAxis::Y;
        let b = TransverseAxis::Z;
        Ok(WaveFrame::new(index, phase)
            .with_curve("electric", planar_field_curve(&self.wave, e, phase)?)
            .with_curve("magnetic", planar_field_curve(&self.wave, b, phase)?)
            .with_vectors("electric", planar_field_vectors(&self.wave, e, phase, &self.vectors)?)
            .with_vectors("magnetic", planar_field_vectors(&self.wave, b, phase, &self.vectors)?))
    }
}

/// Concentric shells expanding from a point source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphericalScene {
    pub wave: SphericalWave,
    /// Frames spent growing the shells out of the source. Zero draws them
    /// fully expanded in a single frame.
    #[serde(default = "default_expansion_frames")]
    pub expansion_frames: usize,
}

fn default_expansion_frames() -> usize {
    24
}

impl Default for SphericalScene {
    fn default() -> Self {
        Self {
            wave: SphericalWave::default(),
            expansion_frames: default_expansion_frames(),
        }
    }
}

impl SphericalScene {
    /// The flat variant: circles seen head-on, full base opacity.
    pub fn circular() -> Self {
        Self {
            wave: SphericalWave {
                radii: vec![1.0, 1.8, 2.6, 3.4, 4.2],
                base_opacity: 1.0,
                falloff: Falloff::Discrete,
            },
            ..Self::default()
        }
    }

    fn steps(&self) -> Vec<FrameStep> {
        let n = self.expansion_frames;
        if n == 0 {
            return vec![FrameStep { progress: 1.0, ..FrameStep::INITIAL }];
        }
        (0..=n)
            .map(|i| FrameStep { progress: i as f64 / n as f64, ..FrameStep::INITIAL })
            .collect()
    }
}

/// A wave crossing from free space into a lossless dielectric.
///
/// The wave first travels through the vacuum alone. One entry frame then
/// starts the medium at phase 0 while the vacuum holds its last phase,
/// after which both regions propagate together with the same phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DielectricScene {
    pub interface: DielectricInterface,
    pub vacuum_sweep: PhaseSweep,
    pub joint_sweep: PhaseSweep,
}

impl Default for DielectricScene {
    fn default() -> Self {
        Self {
            interface: DielectricInterface {
                vacuum: WaveParameters {
                    amplitude: 1.1,
                    wavenumber: 2.2,
                    domain: Domain { start: -5.0, end: 2.9 },
                    sample_count: 300,
                },
                medium: WaveParameters {
                    amplitude: 1.1,
                    wavenumber: 4.2,
                    domain: Domain { start: 3.0, end: 5.5 },
                    sample_count: 200,
                },
            },
            vacuum_sweep: PhaseSweep::Stepped { step: 0.3, frames: 17 },
            joint_sweep: PhaseSweep::Stepped { step: 0.3, frames: 21 },
        }
    }
}

impl DielectricScene {
    fn validate(&self) -> Result<(), WaveError> {
        self.interface.validate()?;
        self.vacuum_sweep.validate()?;
        self.joint_sweep.validate()
    }

    fn steps(&self) -> Vec<FrameStep> {
        let vacuum_only = self
            .vacuum_sweep
            .phases()
            .map(|phase| FrameStep { phase, ..FrameStep::INITIAL });
        let entry = FrameStep {
            phase: self.vacuum_sweep.final_phase(),
            medium: Some(0.0),
            ..FrameStep::INITIAL
        };
        let joint = self
            .joint_sweep
            .phases()
            .map(|phase| FrameStep { phase, medium: Some(phase), ..FrameStep::INITIAL });
        std::iter::once(FrameStep::INITIAL)
            .chain(vacuum_only)
            .chain(std::iter::once(entry))
            .chain(joint)
            .collect()
    }

    fn render(&self, index: usize, step: FrameStep) -> Result<WaveFrame, WaveError> {
        match step.medium {
            Some(medium_phase) => {
                let (vacuum, medium) = self.interface.curves_at(step.phase, medium_phase)?;
                Ok(WaveFrame::new(index, step.phase)
                    .with_curve("vacuum", vacuum)
                    .with_curve("medium", medium))
            }
            None => {
                let vacuum = bounded_region_curve(&self.interface.vacuum, step.phase)?;
                Ok(WaveFrame::new(index, step.phase).with_curve("vacuum", vacuum))
            }
        }
    }
}

/// One entry of a scene's frame schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    pub phase: f64,
    /// Phase of the dielectric region, if it is drawn.
    pub medium: Option<f64>,
    /// Shell expansion in [0, 1]. Only spherical scenes vary it.
    pub progress: f64,
}

impl FrameStep {
    pub const INITIAL: FrameStep = FrameStep { phase: 0.0, medium: None, progress: 1.0 };
}

/// A complete, renderable scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scene {
    PlaneWave(PlaneWaveScene),
    SphericalWave(SphericalScene),
    Dielectric(DielectricScene),
}

impl Scene {
    pub fn plane_wave() -> Self {
        Scene::PlaneWave(PlaneWaveScene::default())
    }

    pub fn spherical_wave() -> Self {
        Scene::SphericalWave(SphericalScene::default())
    }

    pub fn dielectric() -> Self {
        Scene::Dielectric(DielectricScene::default())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scene::PlaneWave(_) => "plane_wave",
            Scene::SphericalWave(_) => "spherical_wave",
            Scene::Dielectric(_) => "dielectric",
        }
    }

    pub fn validate(&self) -> Result<(), WaveError> {
        match self {
            Scene::PlaneWave(scene) => scene.validate(),
            Scene::SphericalWave(scene) => scene.wave.validate(),
            Scene::Dielectric(scene) => scene.validate(),
        }
    }

    /// Parse and validate a scene from JSON.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_json(&json)?;
        log::info!("Loaded {} scene from {:?}", scene.name(), path);
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The frame schedule. Wave scenes start with the initial frame at
    /// phase 0 followed by one step per sweep phase; spherical scenes grow
    /// their shells instead, since shells do not depend on phase.
    pub fn steps(&self) -> Vec<FrameStep> {
        match self {
            Scene::PlaneWave(scene) => std::iter::once(FrameStep::INITIAL)
                .chain(scene.sweep.phases().map(|phase| FrameStep { phase, ..FrameStep::INITIAL }))
                .collect(),
            Scene::SphericalWave(scene) => scene.steps(),
            Scene::Dielectric(scene) => scene.steps(),
        }
    }

    pub fn render(&self, index: usize, step: FrameStep) -> Result<WaveFrame, WaveError> {
        match self {
            Scene::PlaneWave(scene) => scene.render(index, step.phase),
            Scene::SphericalWave(scene) => {
                Ok(WaveFrame::new(index, step.phase).with_shells(scene.wave.shells_at(step.progress)?))
            }
            Scene::Dielectric(scene) => scene.render(index, step),
        }
    }

    /// Render every frame eagerly. Fails on the first invalid input.
    pub fn frames(&self) -> Result<Vec<WaveFrame>, WaveError> {
        self.validate()?;
        self.steps()
            .into_iter()
            .enumerate()
            .map(|(index, step)| self.render(index, step))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emwave_sampler::SEED_RADIUS;
    use std::f64::consts::PI;

    #[test]
    fn test_presets_are_valid() {
        for scene in [Scene::plane_wave(), Scene::spherical_wave(), Scene::dielectric()] {
            assert!(scene.validate().is_ok(), "{} preset invalid", scene.name());
        }
        assert!(SphericalScene::circular().wave.validate().is_ok());
    }

    #[test]
    fn test_plane_wave_schedule() {
        let steps = Scene::plane_wave().steps();
        assert_eq!(steps.len(), 41);
        assert_eq!(steps[0].phase, 0.0);
        assert!((steps[40].phase - 4.0 * PI).abs() < 1e-12);
        assert!(steps.iter().all(|s| s.medium.is_none()));
    }

    #[test]
    fn test_dielectric_schedule() {
        let steps = Scene::dielectric().steps();
        assert_eq!(steps.len(), 1 + 17 + 1 + 21);
        assert!(steps[..18].iter().all(|s| s.medium.is_none()));

        // The medium enters at phase 0 while the vacuum holds at 17 * 0.3.
        let entry = steps[18];
        assert!((entry.phase - 5.1).abs() < 1e-12);
        assert_eq!(entry.medium, Some(0.0));

        assert!((steps[19].phase - 0.3).abs() < 1e-12);
        assert!(steps[19..].iter().all(|s| s.medium == Some(s.phase)));
    }

    #[test]
    fn test_dielectric_frames_add_medium_later() {
        let frames = Scene::dielectric().frames().unwrap();
        assert!(frames[0].curve("medium").is_none());
        assert!(frames[17].curve("medium").is_none());
        let last = frames.last().unwrap();
        assert_eq!(last.curve("vacuum").map(|c| c.len()), Some(300));
        assert_eq!(last.curve("medium").map(|c| c.len()), Some(200));
    }

    #[test]
    fn test_dielectric_entry_frame_starts_medium_at_rest() {
        let scene = DielectricScene::default();
        let frames = Scene::Dielectric(scene.clone()).frames().unwrap();
        let entry = &frames[18];
        let medium = bounded_region_curve(&scene.interface.medium, 0.0).unwrap();
        let vacuum = bounded_region_curve(&scene.interface.vacuum, 17.0 * 0.3).unwrap();
        assert_eq!(entry.curve("medium"), Some(&medium));
        assert_eq!(entry.curve("vacuum"), Some(&vacuum));
    }

    #[test]
    fn test_spherical_shells_expand_from_seed() {
        let frames = Scene::spherical_wave().frames().unwrap();
        assert_eq!(frames.len(), 25);
        assert!(frames.iter().all(|f| f.shells.len() == 5 && f.curves.is_empty()));
        assert!(frames[0].shells.iter().all(|s| s.radius == SEED_RADIUS));

        for pair in frames.windows(2) {
            for (before, after) in pair[0].shells.iter().zip(&pair[1].shells) {
                assert!(after.radius > before.radius);
            }
        }
        let last = frames.last().unwrap();
        assert_eq!(last.shells, SphericalWave::default().shells().unwrap());
    }

    #[test]
    fn test_spherical_without_expansion_is_single_frame() {
        let scene = SphericalScene { expansion_frames: 0, ..SphericalScene::default() };
        let frames = Scene::SphericalWave(scene).frames().unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].shells, SphericalWave::default().shells().unwrap());
    }

    #[test]
    fn test_json_tag() {
        let json = Scene::spherical_wave().to_json().unwrap();
        assert!(json.contains(r#""kind": "spherical_wave""#));
        assert_eq!(Scene::from_json(&json).unwrap(), Scene::spherical_wave());
    }
}
