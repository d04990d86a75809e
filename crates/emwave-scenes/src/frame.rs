use emwave_core::{FieldVector, ShellProfile, WaveCurve};
use serde::{Deserialize, Serialize};

/// A curve tagged with the role it plays in the scene ("electric", "medium", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCurve {
    pub name: String,
    pub curve: WaveCurve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedVectors {
    pub name: String,
    pub vectors: Vec<FieldVector>,
}

/// Everything a renderer needs to draw one frame.
///
/// Frames are independent snapshots: a renderer replaces the previous
/// frame's geometry wholesale rather than patching it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveFrame {
    pub index: usize,
    pub phase: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub curves: Vec<NamedCurve>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vectors: Vec<NamedVectors>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shells: Vec<ShellProfile>,
}

impl WaveFrame {
    pub fn new(index: usize, phase: f64) -> Self {
        Self { index, phase, ..Default::default() }
    }

    pub fn with_curve(mut self, name: &str, curve: WaveCurve) -> Self {
        self.curves.push(NamedCurve { name: name.to_string(), curve });
        self
    }

    pub fn with_vectors(mut self, name: &str, vectors: Vec<FieldVector>) -> Self {
        self.vectors.push(NamedVectors { name: name.to_string(), vectors });
        self
    }

    pub fn with_shells(mut self, shells: Vec<ShellProfile>) -> Self {
        self.shells = shells;
        self
    }

    pub fn curve(&self, name: &str) -> Option<&WaveCurve> {
        self.curves.iter().find(|c| c.name == name).map(|c| &c.curve)
    }

    pub fn vectors(&self, name: &str) -> Option<&[FieldVector]> {
        self.vectors
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.vectors.as_slice())
    }
}
