use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

use crate::enemy::Facing;
use crate::item::PropKind;
use crate::shape::ShapeMatrix;
use crate::world::grid::{Anchor, CellSpan, GridConfig};
use crate::world::ground::GroundTile;

/// Gameplay tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rules {
    pub start_lives: u8,
    pub max_lives: u8,
    pub gems_for_star: usize,
    pub freeze_secs: f32,
    /// Added to every enemy's speed on each key or gem pickup.
    pub pickup_speed_bonus: f32,
    /// Taken from the speed of an enemy that hits the player.
    pub hit_speed_penalty: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerDef {
    pub size: (f32, f32),
    pub speed: f32,
    pub start: Anchor,
    pub respawn: Anchor,
    pub shape: ShapeMatrix,
}

/// The enemy archetype shared by every lane.
#[derive(Debug, Clone, Deserialize)]
pub struct EnemyArchetypeDef {
    pub size: (f32, f32),
    pub shape_left: ShapeMatrix,
    pub shape_right: ShapeMatrix,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnemyDef {
    pub at: Anchor,
    pub speed: f32,
    pub facing: Facing,
    pub home: CellSpan,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropDef {
    pub kind: PropKind,
    pub at: Anchor,
    pub size: (f32, f32),
}

/// Asset loaded from game.config.ron
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct GameConfigAsset {
    pub grid: GridConfig,
    pub rules: Rules,
    pub player: PlayerDef,
    pub enemy: EnemyArchetypeDef,
    pub enemies: Vec<EnemyDef>,
    pub props: Vec<PropDef>,
    pub obstacles: Vec<CellSpan>,
    pub target: CellSpan,
    pub ground: Vec<Vec<GroundTile>>,
}
