//! Trail polyline and ribbon geometry
//!
//! Each actor owns one trail: a FIFO-capped sequence of sampled world
//! positions (oldest first). The same samples feed both collision queries
//! (consecutive pairs, see `collision`) and rendering (a two-vertices-per-
//! sample ribbon regenerated wholesale after every accepted sample).

use glam::Vec2;

use crate::consts::{TRAIL_HALF_WIDTH, TRAIL_HEIGHT};

/// Triangle-list mesh for a trail ribbon, ready for a renderer to upload.
///
/// Vertices are `[x, y, z]` with `y` fixed at the trail height; `Vec2.y`
/// from the simulation plane maps to world `z`.
#[derive(Debug, Clone, Default)]
pub struct RibbonMesh {
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// A hazardous trail left behind a moving vehicle
#[derive(Debug, Clone)]
pub struct Trail {
    /// Recorded samples, oldest first
    points: Vec<Vec2>,
    /// Simulation time of the most recent accepted sample
    last_sample: Option<f32>,
    ribbon: RibbonMesh,
    max_points: usize,
    sample_interval: f32,
}

impl Trail {
    pub fn new(max_points: usize, sample_interval: f32) -> Self {
        Self {
            points: Vec::with_capacity(max_points + 1),
            last_sample: None,
            ribbon: RibbonMesh::default(),
            max_points,
            sample_interval,
        }
    }

    /// Record a sample at simulation time `now`.
    ///
    /// No-op unless at least the sampling interval has elapsed since the
    /// last accepted sample. On acceptance the oldest samples beyond the cap
    /// are evicted and the ribbon is regenerated. Returns whether the sample
    /// was accepted.
    pub fn record(&mut self, position: Vec2, now: f32) -> bool {
        if let Some(last) = self.last_sample {
            if now - last < self.sample_interval {
                return false;
            }
        }
        self.last_sample = Some(now);

        self.points.push(position);
        while self.points.len() > self.max_points {
            self.points.remove(0);
        }

        self.rebuild_ribbon();
        true
    }

    /// Clear all samples (on death and respawn)
    pub fn reset(&mut self) {
        self.points.clear();
        self.last_sample = None;
        self.ribbon = RibbonMesh::default();
    }

    /// Recorded samples, oldest first
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Consecutive sample pairs, the collidable geometry.
    ///
    /// A trail with fewer than 2 samples yields nothing.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Current ribbon mesh (empty until the trail has 2 samples)
    pub fn ribbon(&self) -> &RibbonMesh {
        &self.ribbon
    }

    /// Rebuild the ribbon from scratch: two vertices per sample, offset
    /// perpendicular to the local tangent. The sample cap bounds the cost.
    fn rebuild_ribbon(&mut self) {
        self.ribbon.vertices.clear();
        self.ribbon.indices.clear();
        if self.points.len() < 2 {
            return;
        }

        for (i, &pos) in self.points.iter().enumerate() {
            // Local tangent; the last sample reuses the previous segment's
            let dir = if i + 1 < self.points.len() {
                self.points[i + 1] - pos
            } else {
                pos - self.points[i - 1]
            };
            let dir = dir.normalize_or_zero();
            let perp = Vec2::new(-dir.y, dir.x) * TRAIL_HALF_WIDTH;

            self.ribbon
                .vertices
                .push([pos.x + perp.x, TRAIL_HEIGHT, pos.y + perp.y]);
            self.ribbon
                .vertices
                .push([pos.x - perp.x, TRAIL_HEIGHT, pos.y - perp.y]);

            if i + 1 < self.points.len() {
                let base = (i * 2) as u32;
                self.ribbon
                    .indices
                    .extend_from_slice(&[base, base + 1, base + 2, base + 1, base + 3, base + 2]);
            }
        }
    }
}
