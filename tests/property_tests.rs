//! Property tests for the algebraic laws of the vector primitives.

use nalgebra::{Point2, Vector2};
use plotsym::float_types::Real;
use plotsym::json::{control_points_from_json, control_points_to_json};
use plotsym::vector::{arrow_barbs, distance, line_intersection, rotated_vectors, to_vector};
use proptest::prelude::*;

const LO: Real = -1.0e3;
const HI: Real = 1.0e3;

proptest! {
    #[test]
    fn distance_is_symmetric(ax in LO..HI, ay in LO..HI, bx in LO..HI, by in LO..HI) {
        let a = Point2::new(ax, ay);
        let b = Point2::new(bx, by);
        prop_assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn to_vector_is_antisymmetric(ax in LO..HI, ay in LO..HI, bx in LO..HI, by in LO..HI) {
        let a = Point2::new(ax, ay);
        let b = Point2::new(bx, by);
        prop_assert_eq!(to_vector(a, b), -to_vector(b, a));
    }

    #[test]
    fn rotated_vectors_honor_angle_and_length(
        vx in LO..HI,
        vy in LO..HI,
        angle in 0.2..2.9_f64,
        length in 0.1..50.0_f64,
    ) {
        let v = Vector2::new(vx, vy);
        prop_assume!(v.norm() > 1e-3);
        let angle = angle as Real;
        let length = length as Real;

        let (left, right) = rotated_vectors(v, angle, length).unwrap();
        for u in [left, right] {
            prop_assert!((u.norm() - length).abs() < 1e-6 * length.max(1.0));
            let cos_angle = u.dot(&v) / (u.norm() * v.norm());
            prop_assert!((cos_angle - angle.cos()).abs() < 1e-6);
        }
    }

    #[test]
    fn intersection_is_stable_under_line_swap(
        v1x in -10.0..10.0_f64, v1y in -10.0..10.0_f64,
        v2x in -10.0..10.0_f64, v2y in -10.0..10.0_f64,
        p1x in LO..HI, p1y in LO..HI,
        p2x in LO..HI, p2y in LO..HI,
    ) {
        let v1 = Vector2::new(v1x as Real, v1y as Real);
        let v2 = Vector2::new(v2x as Real, v2y as Real);
        // Stay away from the (near-)parallel regime, where the two argument
        // orders legitimately disagree.
        prop_assume!(v1.norm() > 1e-2 && v2.norm() > 1e-2);
        let cross = v1.y * v2.x - v1.x * v2.y;
        prop_assume!(cross.abs() > 1e-2 * v1.norm() * v2.norm());

        let p1 = Point2::new(p1x, p1y);
        let p2 = Point2::new(p2x, p2y);
        let a = line_intersection(v1, v2, p1, p2);
        let b = line_intersection(v2, v1, p2, p1);
        let scale = 1.0 + a.x.abs().max(a.y.abs());
        prop_assert!((a.x - b.x).abs() < 1e-8 * scale);
        prop_assert!((a.y - b.y).abs() < 1e-8 * scale);
    }

    #[test]
    fn arrow_barbs_scale_with_the_shaft(
        sx in LO..HI, sy in LO..HI,
        ex in LO..HI, ey in LO..HI,
    ) {
        let start = Point2::new(sx, sy);
        let end = Point2::new(ex, ey);
        let shaft_length = distance(start, end);
        prop_assume!(shaft_length > 1e-3);

        let (left, right) = arrow_barbs(start, end).unwrap();
        for barb in [left, right] {
            prop_assert!((barb.start.x - end.x).abs() < 1e-12 * (1.0 + end.x.abs()));
            prop_assert!((barb.start.y - end.y).abs() < 1e-12 * (1.0 + end.y.abs()));
            let dx = barb.end.x - barb.start.x;
            let dy = barb.end.y - barb.start.y;
            let barb_length = (dx * dx + dy * dy).sqrt();
            prop_assert!((barb_length - shaft_length / 10.0).abs() < 1e-6 * shaft_length);
        }
    }

    #[test]
    fn control_points_round_trip(raw in prop::collection::vec((LO..HI, LO..HI), 1..16)) {
        let points: Vec<Point2<Real>> = raw.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        let text = control_points_to_json(&points).unwrap();
        let parsed = control_points_from_json(&text).unwrap();
        prop_assert_eq!(parsed, points);
    }
}
