use bevy::prelude::*;

use super::rect_center;
use crate::item::{GemColor, PropKind};
use crate::player::PlayerState;
use crate::registry::config::GameConfig;
use crate::session::GameSession;
use crate::world::ground::GroundMap;

const Z_GROUND: f32 = 0.0;
const Z_PROP: f32 = 1.0;
const Z_ENEMY: f32 = 2.0;
const Z_EYE: f32 = 2.5;
const Z_PLAYER: f32 = 3.0;

const EYE_SIZE: f32 = 8.0;

/// Everything spawned for the current board; despawned on config reload.
#[derive(Component)]
pub struct BoardSprite;

#[derive(Component)]
pub struct GroundCell {
    pub row: usize,
    pub col: usize,
}

#[derive(Component)]
pub struct PropSprite(pub usize);

#[derive(Component)]
pub struct EnemySprite(pub usize);

/// Marks the side an enemy is facing.
#[derive(Component)]
pub struct EnemyEye(pub usize);

#[derive(Component)]
pub struct PlayerSprite;

fn prop_color(kind: PropKind) -> Color {
    match kind {
        PropKind::Key => Color::srgb(0.95, 0.80, 0.15),
        PropKind::Heart => Color::srgb(0.90, 0.15, 0.25),
        PropKind::Gem(GemColor::Blue) => Color::srgb(0.20, 0.40, 1.00),
        PropKind::Gem(GemColor::Green) => Color::srgb(0.15, 0.85, 0.35),
        PropKind::Gem(GemColor::Orange) => Color::srgb(1.00, 0.55, 0.10),
    }
}

const ENEMY_COLOR: Color = Color::srgb(0.55, 0.20, 0.15);
const PLAYER_COLOR: Color = Color::srgb(0.95, 0.90, 0.80);

/// Spawns one sprite per cell, prop, enemy and the player. Runs whenever a
/// new config is installed.
pub fn rebuild_board(
    mut commands: Commands,
    existing: Query<Entity, With<BoardSprite>>,
    config: Res<GameConfig>,
    ground: Res<GroundMap>,
    session: Res<GameSession>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    for (row, tiles) in ground.rows() {
        for (col, tile) in tiles.iter().enumerate() {
            let rect = config.grid.cell_rect(row as i32, col as i32);
            commands.spawn((
                BoardSprite,
                GroundCell { row, col },
                Sprite::from_color(tile.color(), rect.size()),
                Transform::from_translation(rect_center(&rect, Z_GROUND)),
            ));
        }
    }

    for (index, prop) in session.props().iter().enumerate() {
        commands.spawn((
            BoardSprite,
            PropSprite(index),
            Sprite::from_color(prop_color(prop.kind), prop.rect.size()),
            Transform::from_translation(rect_center(&prop.rect, Z_PROP)),
        ));
    }

    for (index, enemy) in session.enemies().iter().enumerate() {
        commands.spawn((
            BoardSprite,
            EnemySprite(index),
            Sprite::from_color(ENEMY_COLOR, enemy.rect.size()),
            Transform::from_translation(rect_center(&enemy.rect, Z_ENEMY)),
        ));
        commands.spawn((
            BoardSprite,
            EnemyEye(index),
            Sprite::from_color(Color::WHITE, Vec2::splat(EYE_SIZE)),
            Transform::from_translation(rect_center(&enemy.rect, Z_EYE)),
        ));
    }

    let player = session.player();
    commands.spawn((
        BoardSprite,
        PlayerSprite,
        Sprite::from_color(PLAYER_COLOR, player.rect.size()),
        Transform::from_translation(rect_center(&player.rect, Z_PLAYER)),
    ));

    debug!(
        "Board spawned: {} props, {} enemies",
        session.props().len(),
        session.enemies().len()
    );
}

pub fn sync_ground(ground: Res<GroundMap>, mut cells: Query<(&GroundCell, &mut Sprite)>) {
    if !ground.is_changed() {
        return;
    }
    for (cell, mut sprite) in &mut cells {
        if let Some(tile) = ground.get(cell.row, cell.col) {
            sprite.color = tile.color();
        }
    }
}

pub fn sync_props(session: Res<GameSession>, mut props: Query<(&PropSprite, &mut Visibility)>) {
    for (PropSprite(index), mut visibility) in &mut props {
        let Some(prop) = session.props().get(*index) else {
            continue;
        };
        let wanted = if prop.is_active() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
    }
}

#[allow(clippy::type_complexity)]
pub fn sync_enemies(
    session: Res<GameSession>,
    mut bodies: Query<(&EnemySprite, &mut Transform), Without<EnemyEye>>,
    mut eyes: Query<(&EnemyEye, &mut Transform), Without<EnemySprite>>,
) {
    let enemies = session.enemies();
    for (EnemySprite(index), mut transform) in &mut bodies {
        if let Some(enemy) = enemies.get(*index) {
            transform.translation = rect_center(&enemy.rect, Z_ENEMY);
        }
    }
    for (EnemyEye(index), mut transform) in &mut eyes {
        if let Some(enemy) = enemies.get(*index) {
            let side = enemy.facing.sign();
            let offset = Vec3::new(side * enemy.rect.width * 0.3, enemy.rect.height * 0.2, 0.0);
            transform.translation = rect_center(&enemy.rect, Z_EYE) + offset;
        }
    }
}

pub fn sync_player(
    time: Res<Time>,
    session: Res<GameSession>,
    mut query: Query<(&mut Transform, &mut Sprite), With<PlayerSprite>>,
) {
    let Ok((mut transform, mut sprite)) = query.single_mut() else {
        return;
    };
    let player = session.player();
    transform.translation = rect_center(&player.rect, Z_PLAYER);

    // Blink while frozen.
    let alpha = match player.state {
        PlayerState::Frozen(_) if (time.elapsed_secs() * 10.0) as u32 % 2 == 0 => 0.3,
        PlayerState::Failed => 0.5,
        _ => 1.0,
    };
    sprite.color = PLAYER_COLOR.with_alpha(alpha);
}
