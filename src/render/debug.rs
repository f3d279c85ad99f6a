use bevy::prelude::*;

use crate::session::GameSession;
use crate::world::zones::ZoneRole;

/// F3 toggles outlines of every zone and collision silhouette.
#[derive(Resource, Default)]
pub struct DebugOverlay {
    pub visible: bool,
}

pub fn toggle_debug_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut overlay: ResMut<DebugOverlay>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        overlay.visible = !overlay.visible;
        info!("Debug overlay {}", if overlay.visible { "on" } else { "off" });
    }
}

fn zone_color(role: ZoneRole, sealed: bool) -> Color {
    match role {
        ZoneRole::Forbidden => Color::srgba(1.0, 0.2, 0.2, 0.8),
        ZoneRole::Home => Color::srgba(0.3, 0.6, 1.0, 0.6),
        ZoneRole::Target if sealed => Color::srgba(1.0, 0.5, 0.0, 0.9),
        ZoneRole::Target => Color::srgba(0.2, 1.0, 0.3, 0.9),
    }
}

pub fn draw_debug_overlay(
    overlay: Res<DebugOverlay>,
    session: Res<GameSession>,
    mut gizmos: Gizmos,
) {
    if !overlay.visible {
        return;
    }
    let zones = session.zones();
    for zone in zones.iter() {
        let center = super::rect_center(&zone.rect, 0.0).truncate();
        gizmos.rect_2d(
            center,
            zone.rect.size(),
            zone_color(zone.role, zones.target_sealed()),
        );
    }

    let shapes = session
        .player()
        .shape_rects(session.player_shape())
        .into_iter()
        .chain(
            session
                .enemies()
                .iter()
                .flat_map(|enemy| enemy.shape_rects(session.enemy_shapes())),
        );
    for rect in shapes {
        let center = super::rect_center(&rect, 0.0).truncate();
        gizmos.rect_2d(center, rect.size(), Color::srgb(1.0, 1.0, 0.0));
    }
}
