pub mod debug;
pub mod sprites;

use bevy::prelude::*;

use crate::math::Rect;
use crate::registry::config::GameConfig;
use crate::registry::AppState;
use crate::sets::GameSet;

/// Canvas space has y growing downward; world space has it growing upward.
pub fn canvas_to_world(pos: Vec2, z: f32) -> Vec3 {
    Vec3::new(pos.x, -pos.y, z)
}

/// World-space center of a canvas rect.
pub fn rect_center(rect: &Rect, z: f32) -> Vec3 {
    canvas_to_world(rect.center(), z)
}

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<debug::DebugOverlay>().add_systems(
            Update,
            (
                sprites::rebuild_board.run_if(resource_changed::<GameConfig>),
                (
                    sprites::sync_ground,
                    sprites::sync_props,
                    sprites::sync_enemies,
                    sprites::sync_player,
                ),
                debug::toggle_debug_overlay,
                debug::draw_debug_overlay,
            )
                .chain()
                .in_set(GameSet::Presentation)
                .run_if(in_state(AppState::InGame)),
        );
    }
}
