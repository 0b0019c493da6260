//! Geometry helpers in normalized frame coordinates.
//!
//! The frame diagonals are the main diagonal `y = x` and the anti-diagonal
//! `y = 1 - x`; perpendicular distances to them divide by √2 so the result
//! stays in normalized units.

use nalgebra::Point2;

const SQRT_2: f32 = std::f32::consts::SQRT_2;

/// Squared Euclidean distance between two points.
#[inline]
pub fn dist2(a: Point2<f32>, b: Point2<f32>) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Euclidean distance between two points.
#[inline]
pub fn dist(a: Point2<f32>, b: Point2<f32>) -> f32 {
    dist2(a, b).sqrt()
}

/// Perpendicular distance of `p` to the main diagonal `y = x`.
#[inline]
pub fn main_diagonal_dist(p: Point2<f32>) -> f32 {
    (p.y - p.x).abs() / SQRT_2
}

/// Perpendicular distance of `p` to the anti-diagonal `y = 1 - x`.
#[inline]
pub fn anti_diagonal_dist(p: Point2<f32>) -> f32 {
    (p.x + p.y - 1.0).abs() / SQRT_2
}

/// Orthogonal projection of `p` onto the main diagonal.
#[inline]
pub fn project_main_diagonal(p: Point2<f32>) -> Point2<f32> {
    let t = 0.5 * (p.x + p.y);
    Point2::new(t, t)
}

/// Orthogonal projection of `p` onto the anti-diagonal.
#[inline]
pub fn project_anti_diagonal(p: Point2<f32>) -> Point2<f32> {
    let t = 0.5 * (p.x - p.y + 1.0);
    Point2::new(t, 1.0 - t)
}

/// Nearest of the registered `targets` to `p`; ties keep the earliest entry.
pub fn nearest_target(p: Point2<f32>, targets: &[Point2<f32>]) -> Point2<f32> {
    debug_assert!(!targets.is_empty());
    let mut best = targets[0];
    let mut best_d2 = dist2(p, best);
    for &t in &targets[1..] {
        let d2 = dist2(p, t);
        if d2 < best_d2 {
            best = t;
            best_d2 = d2;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_distances_match_hand_values() {
        let center = Point2::new(0.5, 0.5);
        assert!(main_diagonal_dist(center).abs() < 1e-6);
        assert!(anti_diagonal_dist(center).abs() < 1e-6);

        let corner = Point2::new(1.0, 0.0);
        assert!((main_diagonal_dist(corner) - 1.0 / SQRT_2).abs() < 1e-6);
        assert!(anti_diagonal_dist(corner).abs() < 1e-6);
    }

    #[test]
    fn projections_land_on_the_lines() {
        let p = Point2::new(0.8, 0.2);
        let on_main = project_main_diagonal(p);
        assert!((on_main.x - on_main.y).abs() < 1e-6);
        let on_anti = project_anti_diagonal(p);
        assert!((on_anti.x + on_anti.y - 1.0).abs() < 1e-6);
        // p already sits on the anti-diagonal
        assert!(dist(p, on_anti) < 1e-6);
    }

    #[test]
    fn nearest_target_breaks_ties_toward_first() {
        let targets = [
            Point2::new(1.0 / 3.0, 1.0 / 3.0),
            Point2::new(2.0 / 3.0, 1.0 / 3.0),
            Point2::new(1.0 / 3.0, 2.0 / 3.0),
            Point2::new(2.0 / 3.0, 2.0 / 3.0),
        ];
        // Equidistant from all four: first registered wins.
        let picked = nearest_target(Point2::new(0.5, 0.5), &targets);
        assert_eq!(picked, targets[0]);
    }
}
