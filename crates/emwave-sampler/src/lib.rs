//! Sampling of traveling-wave field values.
//!
//! Every function here is pure: the same parameters and phase always give
//! the same points, and nothing is remembered between calls. A renderer
//! drives the phase forward and asks for a fresh curve each frame.

pub mod planar;
pub mod bounded;
pub mod radial;
pub mod sweep;

pub use planar::{planar_field_curve, planar_field_vectors, VectorLayout, DEFAULT_VECTOR_THRESHOLD};
pub use bounded::{bounded_region_curve, DielectricInterface};
pub use radial::{radial_amplitude_profile, Falloff, SphericalWave, MIN_SHELL_OPACITY, SEED_RADIUS};
pub use sweep::PhaseSweep;
