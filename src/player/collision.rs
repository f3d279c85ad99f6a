use bevy::math::Vec2;

use super::Player;
use crate::enemy::{Enemy, EnemyShapes};
use crate::item::Prop;
use crate::math::{overlaps, Rect};
use crate::shape::{shapes_collide, ShapeMatrix};
use crate::world::zones::ZoneSet;

/// Rolls the player back to `before` if its shape entered any active
/// forbidden zone. Bounding boxes are compared first; the shape test only
/// runs for zones the box actually overlaps. Returns `true` on a rollback.
pub fn resolve_forbidden(
    player: &mut Player,
    before: Vec2,
    shape: &ShapeMatrix,
    zones: &ZoneSet,
) -> bool {
    let player_shape = player.shape_rects(shape);
    for zone in zones.active_forbidden() {
        if !overlaps(&player.rect, zone) {
            continue;
        }
        if shapes_collide(&player_shape, std::slice::from_ref(zone)) {
            player.rect.set_pos(before);
            return true;
        }
    }
    false
}

/// Index of the first enemy whose silhouette touches the player's.
pub fn find_enemy_contact(
    player: &Player,
    shape: &ShapeMatrix,
    enemies: &[Enemy],
    enemy_shapes: &EnemyShapes,
) -> Option<usize> {
    let player_shape = player.shape_rects(shape);
    enemies.iter().position(|enemy| {
        overlaps(&player.rect, &enemy.rect)
            && shapes_collide(&player_shape, &enemy.shape_rects(enemy_shapes))
    })
}

/// Index of the first uncollected prop the player's silhouette touches.
/// Props are whole rectangles.
pub fn find_prop_contact(player: &Player, shape: &ShapeMatrix, props: &[Prop]) -> Option<usize> {
    let player_shape = player.shape_rects(shape);
    props.iter().position(|prop| {
        prop.is_active()
            && overlaps(&player.rect, &prop.rect)
            && shapes_collide(&player_shape, &[prop.rect])
    })
}

/// True if the player lies fully inside `target`.
pub fn reached(player: &Player, target: &Rect) -> bool {
    crate::math::contains(&player.rect, target)
}
