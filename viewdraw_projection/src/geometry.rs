// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small polygon helpers used by the draw primitives.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::{Point, Vec2};

/// Returns the arithmetic mean of `points`, or `None` for an empty slice.
#[must_use]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vec2::ZERO, |acc, pt| acc + pt.to_vec2());
    #[allow(
        clippy::cast_precision_loss,
        reason = "Polygon vertex counts are far below 2^52."
    )]
    let n = points.len() as f64;
    Some((sum / n).to_point())
}

/// Builds a triangle from its three side lengths using the law of cosines.
///
/// The longest side becomes the base, running from `(0, 0)` to `(c, 0)`; the
/// apex sits above it at positive `y`. When `relative_to_centroid` is set the
/// vertices are shifted so the centroid lands on the origin.
///
/// Returns `None` if any side is negative or not finite, or if the sides
/// violate the triangle inequality.
#[must_use]
pub fn triangle_from_sides(a: f64, b: f64, c: f64, relative_to_centroid: bool) -> Option<[Point; 3]> {
    if ![a, b, c].iter().all(|s| s.is_finite() && *s >= 0.0) {
        return None;
    }
    let (mut a, mut b, mut c) = (a, b, c);
    let biggest = a.max(b).max(c);
    if biggest == a {
        core::mem::swap(&mut a, &mut c);
    } else if biggest == b {
        core::mem::swap(&mut b, &mut c);
    }
    if a + b < c {
        return None;
    }

    let proj_a = if a == 0.0 || c == 0.0 {
        0.0
    } else {
        (a * a - b * b + c * c) / (2.0 * c)
    };
    // Rounding can push a degenerate (flat) triangle slightly negative.
    let h = (a * a - proj_a * proj_a).max(0.0).sqrt();
    let mut points = [Point::ORIGIN, Point::new(proj_a, h), Point::new(c, 0.0)];

    if relative_to_centroid {
        if let Some(center) = centroid(&points) {
            let offset = center.to_vec2();
            for pt in &mut points {
                *pt -= offset;
            }
        }
    }
    Some(points)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{centroid, triangle_from_sides};
    use crate::distance;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn centroid_of_square() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        assert_eq!(centroid(&pts), Some(Point::new(1.0, 1.0)));
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn triangle_sides_are_preserved() {
        let [p0, p1, p2] = triangle_from_sides(3.0, 4.0, 5.0, false).unwrap();
        let mut sides = [distance(p0, p1), distance(p1, p2), distance(p2, p0)];
        sides.sort_by(f64::total_cmp);
        assert!(close(sides[0], 3.0));
        assert!(close(sides[1], 4.0));
        assert!(close(sides[2], 5.0));
        // Longest side lies on the x axis.
        assert_eq!(p0, Point::ORIGIN);
        assert!(close(p2.x, 5.0));
        assert!(p1.y > 0.0);
    }

    #[test]
    fn longest_side_is_moved_to_base() {
        let [_, _, base_end] = triangle_from_sides(5.0, 3.0, 4.0, false).unwrap();
        assert!(close(base_end.x, 5.0));
        let [_, _, base_end] = triangle_from_sides(3.0, 5.0, 4.0, false).unwrap();
        assert!(close(base_end.x, 5.0));
    }

    #[test]
    fn centred_triangle_has_origin_centroid() {
        let pts = triangle_from_sides(2.0, 2.0, 3.0, true).unwrap();
        let c = centroid(&pts).unwrap();
        assert!(close(c.x, 0.0));
        assert!(close(c.y, 0.0));
    }

    #[test]
    fn impossible_triangles_are_rejected() {
        assert!(triangle_from_sides(1.0, 1.0, 3.0, true).is_none());
        assert!(triangle_from_sides(-1.0, 1.0, 1.0, true).is_none());
        assert!(triangle_from_sides(f64::NAN, 1.0, 1.0, true).is_none());
    }

    #[test]
    fn flat_triangle_has_zero_height() {
        let [_, apex, _] = triangle_from_sides(1.0, 1.0, 2.0, false).unwrap();
        assert!(close(apex.y, 0.0));
        assert!(close(apex.x, 1.0));
    }
}
