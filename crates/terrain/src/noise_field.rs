//! Seeded 2D OpenSimplex noise, wrapped as a Bevy resource.

use bevy::prelude::*;
use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::config::TERRAIN_SEED;

/// The coherent-noise source driving the heightfield.
///
/// Deterministic for a given seed: the same `(x, y)` always yields the same
/// value, so the whole animation is reproducible.
#[derive(Resource)]
pub struct NoiseField {
    noise: FastNoiseLite,
}

impl NoiseField {
    pub fn new(seed: i32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        // Sample coordinates are pre-scaled by the caller, so the noise
        // itself runs at unit frequency.
        noise.set_frequency(Some(1.0));
        Self { noise }
    }

    /// Evaluate the noise at `(x, y)`. Total over the domain; output in [-1, 1].
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        self.noise.get_noise_2d(x, y)
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(TERRAIN_SEED)
    }
}
