mod camera;
mod enemy;
mod inventory;
mod item;
mod math;
mod player;
mod registry;
mod render;
mod session;
mod sets;
mod shape;
mod ui;
mod world;

#[cfg(test)]
mod test_helpers;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use sets::GameSet;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Treasure Trail".into(),
                resolution: (900, 800).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .configure_sets(
            Update,
            (GameSet::Input, GameSet::Simulation, GameSet::Presentation).chain(),
        )
        .add_plugins(registry::RegistryPlugin)
        .add_plugins(session::SessionPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(world::WorldPlugin)
        .add_plugins(render::RenderPlugin)
        .add_plugins(camera::CameraPlugin)
        .add_plugins(ui::UiPlugin)
        .run();
}
