//! The 42×42 sampling lattice and its per-point heights.

use bevy::prelude::*;

use crate::config::{GRID_MIN, GRID_POINTS, GRID_STEP, HEIGHT_SCALE, SAMPLE_SCALE};
use crate::noise_field::NoiseField;

/// World-space coordinate of the lattice point at `index` (index 0 → -20.0,
/// index 41 → 21.0). Used for both axes; the lattice is square.
pub fn grid_coord(index: usize) -> f32 {
    (GRID_MIN + index as i32 * GRID_STEP) as f32
}

/// Heights for every lattice point, row-major (`j * GRID_POINTS + i`).
///
/// Regenerated wholesale on every animation tick; the buffer is allocated
/// once and never resized.
#[derive(Resource, Clone)]
pub struct Heightfield {
    heights: Vec<f32>,
}

impl Heightfield {
    /// Build a heightfield sampled at the given noise-domain offset.
    pub fn sampled(noise: &NoiseField, offset: f32) -> Self {
        let mut field = Self {
            heights: vec![0.0; GRID_POINTS * GRID_POINTS],
        };
        field.resample(noise, offset);
        field
    }

    /// Re-evaluate every lattice point at `offset`.
    ///
    /// Height of point `(i, j)` is
    /// `HEIGHT_SCALE * noise(i / SAMPLE_SCALE + offset, j / SAMPLE_SCALE + offset)`;
    /// the noise domain is indexed by lattice position, not world coordinate,
    /// so the scroll speed is independent of where the lattice sits in space.
    pub fn resample(&mut self, noise: &NoiseField, offset: f32) {
        for j in 0..GRID_POINTS {
            for i in 0..GRID_POINTS {
                let x = i as f32 / SAMPLE_SCALE + offset;
                let y = j as f32 / SAMPLE_SCALE + offset;
                self.heights[j * GRID_POINTS + i] = HEIGHT_SCALE * noise.sample(x, y);
            }
        }
    }

    /// Height at lattice point `(i, j)`.
    pub fn height(&self, i: usize, j: usize) -> f32 {
        self.heights[j * GRID_POINTS + i]
    }

    /// Number of lattice points per axis.
    pub fn points_per_axis(&self) -> usize {
        GRID_POINTS
    }

    /// Total number of lattice points.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}
