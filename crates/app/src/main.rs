use bevy::prelude::*;
use bevy::window::PresentMode;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Terrain".to_string(),
                resolution: (960.0, 540.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        // Additive-blended surface over black, like the original GL viewer
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins((terrain::TerrainPlugin, rendering::RenderingPlugin))
        .run();
}
