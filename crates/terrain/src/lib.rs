//! Terrain model for the fly-over demo: a fixed sampling lattice whose
//! heights come from seeded OpenSimplex noise, plus the tick that scrolls
//! the sampling offset to animate it.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::common_conditions::on_timer;

pub mod config;
pub mod flyover;
pub mod heightfield;
pub mod noise_field;

#[cfg(test)]
mod integration_tests;

pub use flyover::ScrollOffset;
pub use heightfield::Heightfield;
pub use noise_field::NoiseField;

pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        let noise = NoiseField::default();
        let field = Heightfield::sampled(&noise, 0.0);

        app.insert_resource(noise)
            .insert_resource(field)
            .init_resource::<ScrollOffset>()
            .add_systems(
                Update,
                flyover::advance_flyover
                    .run_if(on_timer(Duration::from_millis(config::TICK_MILLIS))),
            );
    }
}
