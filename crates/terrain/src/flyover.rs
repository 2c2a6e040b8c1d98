//! The fly-over animation: one scalar offset scrolled through the noise
//! domain on a fixed tick.

use bevy::prelude::*;

use crate::config::SCROLL_STEP;
use crate::heightfield::Heightfield;
use crate::noise_field::NoiseField;

/// Where in the noise domain the lattice is currently sampled. This is the
/// entire animation state: it starts at 0 and only ever decreases.
#[derive(Resource, Default)]
pub struct ScrollOffset {
    pub value: f32,
}

/// Tick system: resample the heightfield at the current offset, then scroll.
///
/// Sampling happens before the decrement, so the first tick re-samples at
/// 0.0 (same surface the startup mesh was built from) and motion begins on
/// the second tick.
pub fn advance_flyover(
    noise: Res<NoiseField>,
    mut field: ResMut<Heightfield>,
    mut offset: ResMut<ScrollOffset>,
) {
    advance(&noise, &mut field, &mut offset);
}

fn advance(noise: &NoiseField, field: &mut Heightfield, offset: &mut ScrollOffset) {
    field.resample(noise, offset.value);
    offset.value -= SCROLL_STEP;
}
