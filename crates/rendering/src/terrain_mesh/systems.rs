use bevy::prelude::*;

use terrain::Heightfield;

use super::mesh::TerrainMeshData;
use super::types::TerrainSurface;

/// Build the initial mesh and spawn the surface entity.
///
/// The original renders with additive blending over a black background, so
/// the material is unlit and uncull-ed; brightness comes entirely from the
/// per-face vertex colors.
pub fn spawn_terrain_surface(
    mut commands: Commands,
    field: Res<Heightfield>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let data = TerrainMeshData::build(&field);
    info!(
        "terrain surface: {} vertices, {} faces",
        data.vertices.len(),
        data.faces.len()
    );

    commands.spawn((
        Mesh3d(meshes.add(data.into_mesh())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            alpha_mode: AlphaMode::Add,
            cull_mode: None,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
        TerrainSurface,
    ));
}

/// Rebuild the surface mesh wholesale whenever the heightfield was resampled,
/// replacing the asset behind the existing handle in place.
pub fn rebuild_terrain_mesh(
    field: Res<Heightfield>,
    surface: Query<&Mesh3d, With<TerrainSurface>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if !field.is_changed() {
        return;
    }
    let Ok(mesh_handle) = surface.get_single() else {
        return;
    };
    let data = TerrainMeshData::build(&field);
    meshes.insert(&mesh_handle.0, data.into_mesh());
}
