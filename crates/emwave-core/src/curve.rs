use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Which transverse axis a field component is drawn on.
///
/// Both axes are perpendicular to the propagation axis (x) and to each
/// other, so an electric curve on `Y` and a magnetic curve on `Z` at the
/// same phase satisfy the TEM condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransverseAxis {
    /// Electric field component.
    Y,
    /// Magnetic field component.
    Z,
}

impl TransverseAxis {
    /// Place a displacement at propagation coordinate `x` on this axis.
    pub fn embed(self, x: f64, displacement: f64) -> Point {
        match self {
            TransverseAxis::Y => Point::new(x, displacement, 0.0),
            TransverseAxis::Z => Point::new(x, 0.0, displacement),
        }
    }

    /// Read the displacement back out of an embedded point.
    pub fn component(self, point: &Point) -> f64 {
        match self {
            TransverseAxis::Y => point.y,
            TransverseAxis::Z => point.z,
        }
    }

    pub fn orthogonal(self) -> Self {
        match self {
            TransverseAxis::Y => TransverseAxis::Z,
            TransverseAxis::Z => TransverseAxis::Y,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TransverseAxis::Y => "y",
            TransverseAxis::Z => "z",
        }
    }
}

/// The instantaneous shape of a wave at one phase.
///
/// Points are ordered by increasing x. A new curve is built every frame;
/// curves are never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveCurve {
    pub axis: TransverseAxis,
    pub points: Vec<Point>,
}

impl WaveCurve {
    pub fn new(axis: TransverseAxis, points: Vec<Point>) -> Self {
        Self { axis, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn displacements(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(move |p| self.axis.component(p))
    }

    /// Largest absolute transverse displacement on the curve.
    pub fn peak(&self) -> f64 {
        self.displacements().fold(0.0_f64, |acc, d| acc.max(d.abs()))
    }

    /// Polyline length through all points.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }
}

/// A field arrow from a point on the propagation axis to the displaced point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldVector {
    pub origin: Point,
    pub tip: Point,
}

impl FieldVector {
    pub fn new(origin: Point, tip: Point) -> Self {
        Self { origin, tip }
    }

    pub fn displacement(&self) -> Point {
        self.tip - self.origin
    }

    pub fn length(&self) -> f64 {
        self.displacement().magnitude()
    }
}

/// One concentric shell of a spherical wavefront.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellProfile {
    pub index: usize,
    pub radius: f64,
    pub opacity: f64,
}
