pub mod error;
pub mod frame;
pub mod scene;
pub mod source;
pub mod producer;

pub use error::SceneError;
pub use frame::{NamedCurve, NamedVectors, WaveFrame};
pub use scene::{DielectricScene, FrameStep, PlaneWaveScene, Scene, SphericalScene};
pub use source::{FrameSource, SceneFrameSource};
pub use producer::FrameProducer;
