use bevy::prelude::*;

/// Marker for the single terrain surface entity.
#[derive(Component)]
pub struct TerrainSurface;
