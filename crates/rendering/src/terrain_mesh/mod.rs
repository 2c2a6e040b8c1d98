mod coloring;
mod mesh;
mod systems;
mod types;

pub use coloring::face_color;
pub use mesh::TerrainMeshData;
pub use systems::{rebuild_terrain_mesh, spawn_terrain_surface};
pub use types::TerrainSurface;
