pub mod fit;

use bevy::prelude::*;

use crate::registry::AppState;
use crate::sets::GameSet;

/// Padding kept around the board, in board pixels.
const BOARD_MARGIN: f32 = 24.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera).add_systems(
            Update,
            fit::camera_fit_board
                .in_set(GameSet::Presentation)
                .run_if(in_state(AppState::InGame)),
        );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection::default_2d()),
    ));
}
