use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::BOARD_MARGIN;
use crate::registry::config::GameConfig;
use crate::render::canvas_to_world;

/// Projection scale that fits `board` plus margin inside `window`.
pub fn fit_scale(board: Vec2, window: Vec2) -> f32 {
    if window.x <= 0.0 || window.y <= 0.0 {
        return 1.0;
    }
    let padded = board + Vec2::splat(2.0 * BOARD_MARGIN);
    (padded.x / window.x).max(padded.y / window.y)
}

/// Centers the camera on the board and zooms so all of it stays visible.
pub fn camera_fit_board(
    mut camera_query: Query<(&mut Transform, &mut Projection), With<Camera2d>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<GameConfig>,
) {
    let Ok((mut camera_transform, mut projection)) = camera_query.single_mut() else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };

    let board = config.grid.board_size();
    let center = canvas_to_world(board / 2.0, camera_transform.translation.z);
    camera_transform.translation = center;

    if let Projection::Orthographic(ortho) = &mut *projection {
        let scale = fit_scale(board, Vec2::new(window.width(), window.height()));
        if (ortho.scale - scale).abs() > f32::EPSILON {
            ortho.scale = scale;
        }
    }
}
