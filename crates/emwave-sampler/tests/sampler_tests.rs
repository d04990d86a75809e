use emwave_core::{Domain, TransverseAxis, WaveParameters};
use emwave_sampler::{
    bounded_region_curve, planar_field_curve, planar_field_vectors, radial_amplitude_profile,
    PhaseSweep, VectorLayout, DEFAULT_VECTOR_THRESHOLD, MIN_SHELL_OPACITY,
};
use std::f64::consts::{PI, TAU};

// ── Helpers ──────────────────────────────────────────────────────

const TOLERANCE: f64 = 1e-9;

fn plane_wave() -> WaveParameters {
    WaveParameters::new(1.5, 1.5, Domain::new(0.0, 6.5).unwrap(), 300).unwrap()
}

/// Phases covering a couple of periods plus some awkward values.
fn sample_phases() -> Vec<f64> {
    let mut phases: Vec<f64> = PhaseSweep::default().phases().collect();
    phases.extend([0.0, -1.7, 0.123, 100.0]);
    phases
}

// ── 1. Curve shape ───────────────────────────────────────────────

#[test]
fn x_coordinates_do_not_depend_on_phase() {
    let params = plane_wave();
    let reference = planar_field_curve(&params, TransverseAxis::Y, 0.0).unwrap();
    let reference_xs: Vec<f64> = reference.xs().collect();

    for phase in sample_phases() {
        for axis in [TransverseAxis::Y, TransverseAxis::Z] {
            let curve = planar_field_curve(&params, axis, phase).unwrap();
            assert_eq!(curve.len(), params.sample_count);
            let xs: Vec<f64> = curve.xs().collect();
            assert_eq!(xs, reference_xs, "x drifted at phase {phase}");
        }
    }
}

#[test]
fn displacement_is_bounded_by_amplitude() {
    let params = plane_wave();
    for phase in sample_phases() {
        let curve = planar_field_curve(&params, TransverseAxis::Z, phase).unwrap();
        assert!(curve.peak() <= params.amplitude + TOLERANCE);
    }
}

#[test]
fn shifting_phase_by_full_period_reproduces_curve() {
    let params = plane_wave();
    let base = planar_field_curve(&params, TransverseAxis::Y, 0.0).unwrap();
    let shifted = planar_field_curve(&params, TransverseAxis::Y, TAU).unwrap();
    for (a, b) in base.points.iter().zip(&shifted.points) {
        assert!(a.approx_eq_within(b, TOLERANCE));
    }
}

#[test]
fn worked_example_matches() {
    let params = plane_wave();
    let curve = planar_field_curve(&params, TransverseAxis::Y, 0.0).unwrap();
    let first = curve.points[0];
    assert_eq!((first.x, first.y, first.z), (0.0, 0.0, 0.0));

    // x = π/3 is not on the sample grid; check the rule itself there.
    let y = params.displacement(PI / 3.0, 0.0);
    assert!((y - 1.5).abs() < TOLERANCE);
}

#[test]
fn electric_and_magnetic_are_synchronized() {
    let params = plane_wave();
    let e = planar_field_curve(&params, TransverseAxis::Y, 2.2).unwrap();
    let b = planar_field_curve(&params, TransverseAxis::Z, 2.2).unwrap();
    let e_disp: Vec<f64> = e.displacements().collect();
    let b_disp: Vec<f64> = b.displacements().collect();
    assert_eq!(e_disp, b_disp);
}

// ── 2. Field vectors ─────────────────────────────────────────────

#[test]
fn vectors_never_at_or_below_threshold() {
    let params = plane_wave();
    let layout = VectorLayout::default();
    for phase in sample_phases() {
        for axis in [TransverseAxis::Y, TransverseAxis::Z] {
            let vectors = planar_field_vectors(&params, axis, phase, &layout).unwrap();
            for v in vectors {
                let d = axis.component(&v.tip);
                assert!(d.abs() > DEFAULT_VECTOR_THRESHOLD);
            }
        }
    }
}

#[test]
fn displacement_exactly_at_threshold_gets_no_vector() {
    // Samples at x = 0 and x = π/2; with k = 1 the second sits on a crest,
    // so its displacement equals the amplitude exactly.
    let layout = VectorLayout {
        domain: Domain::new(0.0, PI / 2.0).unwrap(),
        count: 2,
        threshold: DEFAULT_VECTOR_THRESHOLD,
    };
    let at_threshold =
        WaveParameters::new(DEFAULT_VECTOR_THRESHOLD, 1.0, Domain::new(0.0, 2.0).unwrap(), 10)
            .unwrap();
    assert_eq!(at_threshold.displacement(PI / 2.0, 0.0), DEFAULT_VECTOR_THRESHOLD);
    let vectors = planar_field_vectors(&at_threshold, TransverseAxis::Y, 0.0, &layout).unwrap();
    assert!(vectors.is_empty());

    let above = WaveParameters { amplitude: 0.1001, ..at_threshold };
    let vectors = planar_field_vectors(&above, TransverseAxis::Y, 0.0, &layout).unwrap();
    assert_eq!(vectors.len(), 1);
    assert_eq!(vectors[0].origin.x, PI / 2.0);
}

#[test]
fn vector_sampling_ignores_curve_density() {
    let dense = plane_wave();
    let sparse = dense.with_domain(dense.domain, 7).unwrap();
    let layout = VectorLayout::default();
    let a = planar_field_vectors(&dense, TransverseAxis::Y, 0.8, &layout).unwrap();
    let b = planar_field_vectors(&sparse, TransverseAxis::Y, 0.8, &layout).unwrap();
    assert_eq!(a, b);
}

#[test]
fn vectors_match_curve_rule() {
    let params = plane_wave();
    let layout = VectorLayout::default();
    let vectors = planar_field_vectors(&params, TransverseAxis::Z, 1.1, &layout).unwrap();
    for v in vectors {
        let expected = params.displacement(v.origin.x, 1.1);
        assert!((v.tip.z - expected).abs() < TOLERANCE);
    }
}

// ── 3. Bounded regions ───────────────────────────────────────────

#[test]
fn bounded_region_uses_same_rule() {
    let medium = WaveParameters::new(1.1, 4.2, Domain::new(3.0, 5.5).unwrap(), 200).unwrap();
    let bounded = bounded_region_curve(&medium, 0.9).unwrap();
    let planar = planar_field_curve(&medium, TransverseAxis::Y, 0.9).unwrap();
    assert_eq!(bounded, planar);
}

// ── 4. Radial profile ────────────────────────────────────────────

#[test]
fn radial_opacity_is_non_increasing_and_floored() {
    let mut previous = f64::MAX;
    for i in 0..50 {
        let shell = radial_amplitude_profile(i, 1.0 + i as f64, 1.0).unwrap();
        assert!(shell.opacity <= previous);
        assert!(shell.opacity >= MIN_SHELL_OPACITY);
        previous = shell.opacity;
    }
}

#[test]
fn radial_worked_examples() {
    assert_eq!(radial_amplitude_profile(0, 1.0, 1.0).unwrap().opacity, 1.0);
    let fifth = radial_amplitude_profile(4, 4.2, 1.0).unwrap();
    assert!((fifth.opacity - 0.2).abs() < TOLERANCE);
}

// ── 5. Error handling ────────────────────────────────────────────

#[test]
fn invalid_parameters_return_error_without_output() {
    let mut params = plane_wave();
    params.sample_count = 0;
    assert!(planar_field_curve(&params, TransverseAxis::Y, 0.0).is_err());

    let mut params = plane_wave();
    params.wavenumber = 0.0;
    assert!(planar_field_vectors(&params, TransverseAxis::Y, 0.0, &VectorLayout::default()).is_err());

    let mut params = plane_wave();
    params.domain = Domain { start: 6.5, end: 0.0 };
    assert!(bounded_region_curve(&params, 0.0).is_err());
}
