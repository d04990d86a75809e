pub mod point;
pub mod domain;
pub mod params;
pub mod curve;
pub mod error;

pub use point::Point;
pub use domain::Domain;
pub use params::WaveParameters;
pub use curve::{FieldVector, ShellProfile, TransverseAxis, WaveCurve};
pub use error::WaveError;
