//! Collision detection between vehicles and trails
//!
//! A vehicle is a point; a trail is a polyline. The whole collision system
//! reduces to one kernel: shortest distance from a point to a line segment,
//! scanned over every segment of every *other* actor's trail. An actor never
//! scans its own trail.

use glam::Vec2;

use super::trail::Trail;

/// Shortest distance from `point` to the segment `a`-`b`.
///
/// Projects the point onto the segment's supporting line and clamps the
/// projection parameter to [0, 1], so points whose perpendicular foot falls
/// outside the segment measure against the nearest endpoint.
pub fn point_segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < 1e-8 {
        // Degenerate segment
        return point.distance(a);
    }

    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Whether `position` is within `threshold` of any segment of `trail`.
///
/// The first segment under threshold is sufficient; trails with fewer than
/// 2 samples have no collidable geometry and never hit.
pub fn trail_hit(position: Vec2, trail: &Trail, threshold: f32) -> bool {
    trail
        .segments()
        .any(|(a, b)| point_segment_distance(position, a, b) < threshold)
}
