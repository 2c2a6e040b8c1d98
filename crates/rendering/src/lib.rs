use bevy::prelude::*;

pub mod camera;
pub mod terrain_mesh;

use camera::CameraOrbitDrag;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraOrbitDrag>()
            .add_systems(
                Startup,
                (camera::setup_camera, terrain_mesh::spawn_terrain_surface).chain(),
            )
            .add_systems(
                Update,
                (
                    camera::camera_orbit_drag,
                    camera::camera_zoom,
                    camera::apply_orbit_camera,
                ),
            )
            .add_systems(Update, terrain_mesh::rebuild_terrain_mesh);
    }
}
