mod support;

use approx::assert_relative_eq;
use uconic::{
    AngleRange,
    float_types::{Real, default_samples},
    rotation::rotate,
    sampling::{
        sample_by_axes, sample_by_axes_over, sample_by_shape_parameter, sample_standard_ellipse,
        sample_standard_ellipse_over,
    },
    shape::to_shape_parameter,
};

#[test]
fn zero_shape_parameter_samples_a_circle() {
    let n = 200;
    let curve = sample_by_shape_parameter(2.5, 0.0, &AngleRange::full_turn(n)).unwrap();
    assert_eq!(curve.len(), n);
    for p in curve.points() {
        assert_relative_eq!(p.x * p.x + p.y * p.y, 2.5 * 2.5, epsilon = 1e-9);
    }
    assert!(curve.is_closed());
}

#[test]
fn standard_ellipse_is_closed_and_on_the_ellipse() {
    let curve = sample_standard_ellipse(5.0, 3.0, 0.0).unwrap();
    assert_eq!(curve.len(), default_samples());
    for p in curve.points() {
        assert_relative_eq!((p.x / 5.0).powi(2) + (p.y / 3.0).powi(2), 1.0, epsilon = 1e-9);
    }
    let first = curve.points()[0];
    let last = curve.points()[curve.len() - 1];
    assert!(support::approx_eq(first.x, last.x, 1e-9));
    assert!(support::approx_eq(first.y, last.y, 1e-9));
    assert!(curve.is_closed());
}

#[test]
fn converted_five_by_three_stays_in_its_box() {
    let (r0, ue) = to_shape_parameter(5.0, 3.0).unwrap();
    let curve = sample_by_shape_parameter(r0, ue, &AngleRange::full_turn(720)).unwrap();
    let (min, max) = curve.bounding_box().unwrap();
    let eps = 1e-9;
    assert!(min.x >= -5.0 - eps && max.x <= 5.0 + eps);
    assert!(min.y >= -3.0 - eps && max.y <= 3.0 + eps);
    // reaches the box on both axes
    assert_relative_eq!(max.x, 5.0, epsilon = 1e-9);
    assert_relative_eq!(min.y, -3.0, epsilon = 1e-3);
    assert!(curve.is_closed());
}

#[test]
fn reversed_range_reverses_the_points() {
    let forward = AngleRange::new(-30.0, 400.0, 97).unwrap();
    let a = sample_by_shape_parameter(1.5, 0.6, &forward).unwrap();
    let b = sample_by_shape_parameter(1.5, 0.6, &forward.reversed()).unwrap();
    assert_eq!(a.len(), b.len());
    assert!(support::points_approx_eq(a.reversed().points(), b.points(), 1e-9));
}

#[test]
fn multi_turn_sweep_visits_every_hyperbola_branch_each_turn() {
    let range = AngleRange::turns(5, 3601).unwrap();
    assert_eq!(range.span_degrees(), 3600.0);
    let curve = sample_by_shape_parameter(1.0, 2.0, &range).unwrap();
    assert_eq!(curve.len(), 3601);

    let branches = curve.branches();
    // ten turns, each visiting the upper and the lower branch once
    assert_eq!(branches.len(), 20);
    for branch in &branches {
        let sign = branch.points()[0].y.signum();
        for p in branch.points() {
            assert_eq!(p.y.signum(), sign, "a branch never crosses the x-axis");
            assert!(p.y.abs() >= 1.0 - 1e-9, "closest approach is R0");
        }
    }
}

#[test]
fn parabolic_boundary_is_open_but_samples_finite_points() {
    let curve = sample_by_shape_parameter(2.0, 1.0, &AngleRange::full_turn(361)).unwrap();
    assert!(!curve.is_closed());
    let finite: Vec<_> = curve.branches().into_iter().flat_map(|b| b.into_points()).collect();
    assert!(!finite.is_empty());
    for p in finite {
        assert_relative_eq!(p.y.abs(), 2.0, epsilon = 1e-9);
    }
}

#[test]
fn shape_parameter_sampling_rejects_bad_input() {
    let range = AngleRange::full_turn(10);
    assert!(sample_by_shape_parameter(0.0, 0.5, &range).unwrap_err().is_invalid_parameter());
    assert!(sample_by_shape_parameter(1.0, -0.5, &range).unwrap_err().is_invalid_parameter());
    assert!(sample_by_shape_parameter(Real::NAN, 0.5, &range).unwrap_err().is_invalid_parameter());
}

#[test]
fn axes_sampling_rotates_the_whole_curve() {
    let range = AngleRange::full_turn(181);
    let base = sample_by_axes_over(4.0, 2.0, 0.0, &range).unwrap();
    let turned = sample_by_axes_over(4.0, 2.0, 72.0, &range).unwrap();
    assert_eq!(base.len(), turned.len());
    assert!(support::points_approx_eq(&rotate(base.points(), 72.0).unwrap(), turned.points(), 1e-12));

    // unrotated, the long axis lies along x
    let (min, max) = base.bounding_box().unwrap();
    assert_relative_eq!(max.x, 4.0, epsilon = 1e-9);
    assert_relative_eq!(min.x, -4.0, epsilon = 1e-9);
    assert!(max.y <= 2.0 + 1e-9);
}

#[test]
fn axes_sampling_uses_default_full_turn() {
    let curve = sample_by_axes(3.0, 2.0, 15.0).unwrap();
    assert_eq!(curve.len(), default_samples());
    assert!(curve.is_closed());
}

#[test]
fn axes_sampling_traces_the_same_ellipse_as_the_baseline() {
    // Both samplers cover the same set of points, with different spacing.
    let curve = sample_by_axes(6.0, 2.0, 0.0).unwrap();
    for p in curve.points() {
        assert_relative_eq!((p.x / 6.0).powi(2) + (p.y / 2.0).powi(2), 1.0, epsilon = 1e-9);
    }
    let baseline = sample_standard_ellipse(6.0, 2.0, 0.0).unwrap();
    assert_eq!(curve.len(), baseline.len());
    assert!(support::points_approx_eq(&curve.points()[..1], &baseline.points()[..1], 1e-9));
}

#[test]
fn axes_sampling_propagates_shape_errors() {
    assert!(sample_by_axes(2.0, 3.0, 0.0).unwrap_err().is_invalid_shape());
    assert!(sample_by_axes(2.0, 0.0, 0.0).unwrap_err().is_invalid_shape());
    assert!(sample_by_axes(2.0, 1.0, Real::NAN).unwrap_err().is_invalid_parameter());
}

#[test]
fn standard_ellipse_allows_a_flat_axis() {
    let range = AngleRange::full_turn(9);
    let curve = sample_standard_ellipse_over(2.0, 0.0, 90.0, &range).unwrap();
    for p in curve.points() {
        assert!(p.x.abs() < 1e-12, "flat ellipse rotated 90° lies on the y-axis");
    }
    assert!(sample_standard_ellipse(1.0, 2.0, 0.0).unwrap_err().is_invalid_shape());
}

#[test]
fn single_sample_and_empty_sweeps() {
    let one = AngleRange::new(90.0, 90.0, 1).unwrap();
    let curve = sample_by_shape_parameter(2.0, 0.5, &one).unwrap();
    assert_eq!(curve.len(), 1);
    assert_relative_eq!(curve.points()[0].y, 2.0, epsilon = 1e-12);

    let none = AngleRange::new(0.0, 90.0, 0).unwrap();
    assert!(sample_by_shape_parameter(2.0, 0.5, &none).unwrap().is_empty());
}

#[test]
fn degenerate_sweep_is_refused_up_front() {
    let err = AngleRange::new(10.0, 10.0, 2).unwrap_err();
    assert!(err.is_degenerate_sample());
}

#[test]
fn split_output_matches_points() {
    let curve = sample_by_shape_parameter(1.0, 0.3, &AngleRange::full_turn(16)).unwrap();
    let xs = curve.xs();
    let ys = curve.ys();
    let (xs2, ys2) = curve.clone().into_xy();
    assert_eq!(xs, xs2);
    assert_eq!(ys, ys2);
    assert_eq!(curve.to_line_string().0.len(), 16);
}

#[test]
fn concurrent_calls_agree_with_sequential_ones() {
    let range = AngleRange::new(0.0, 720.0, 500).unwrap();
    let expected = sample_by_shape_parameter(1.25, 0.7, &range).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| sample_by_shape_parameter(1.25, 0.7, &range).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
