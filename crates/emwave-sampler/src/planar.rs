use emwave_core::error::ensure_finite;
use emwave_core::{Domain, FieldVector, Point, TransverseAxis, WaveCurve, WaveError, WaveParameters};
use serde::{Deserialize, Serialize};

/// Displacements at or below this magnitude get no arrow.
pub const DEFAULT_VECTOR_THRESHOLD: f64 = 0.1;

/// Where field arrows are sampled, independent of the curve's density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorLayout {
    pub domain: Domain,
    pub count: usize,
    pub threshold: f64,
}

impl Default for VectorLayout {
    fn default() -> Self {
        Self {
            domain: Domain { start: 0.3, end: 6.3 },
            count: 12,
            threshold: DEFAULT_VECTOR_THRESHOLD,
        }
    }
}

impl VectorLayout {
    pub fn validate(&self) -> Result<(), WaveError> {
        self.domain.validate()?;
        if self.count == 0 {
            return Err(WaveError::invalid("vector count must be > 0"));
        }
        ensure_finite("vector threshold", self.threshold)?;
        if self.threshold < 0.0 {
            return Err(WaveError::invalid(format!(
                "vector threshold must be >= 0, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Sample the wave along the whole domain, placing displacement on `axis`.
///
/// Curves for `Y` and `Z` at the same phase are the electric and magnetic
/// components of one plane wave.
pub fn planar_field_curve(
    params: &WaveParameters,
    axis: TransverseAxis,
    phase: f64,
) -> Result<WaveCurve, WaveError> {
    params.validate()?;
    ensure_finite("phase", phase)?;

    let points: Vec<Point> = params
        .domain
        .linspace(params.sample_count)
        .map(|x| axis.embed(x, params.displacement(x, phase)))
        .collect();

    Ok(WaveCurve::new(axis, points))
}

/// Field arrows anchored on the propagation axis.
///
/// Samples whose displacement is within `layout.threshold` of zero are
/// skipped, so the result can be shorter than `layout.count`.
pub fn planar_field_vectors(
    params: &WaveParameters,
    axis: TransverseAxis,
    phase: f64,
    layout: &VectorLayout,
) -> Result<Vec<FieldVector>, WaveError> {
    params.validate()?;
    layout.validate()?;
    ensure_finite("phase", phase)?;

    let vectors: Vec<FieldVector> = layout
        .domain
        .linspace(layout.count)
        .filter_map(|x| {
            let displacement = params.displacement(x, phase);
            (displacement.abs() > layout.threshold)
                .then(|| FieldVector::new(Point::on_axis(x), axis.embed(x, displacement)))
        })
        .collect();

    log::debug!(
        "field vectors on {} at phase {phase:.3}: kept {} of {}",
        axis.name(),
        vectors.len(),
        layout.count
    );

    Ok(vectors)
}
