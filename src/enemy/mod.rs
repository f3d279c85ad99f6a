pub mod patrol;

use bevy::math::Vec2;
use serde::Deserialize;

use crate::math::Rect;
use crate::shape::{shape_rects, ShapeError, ShapeMatrix};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Silhouettes of the enemy archetype, one per facing.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyShapes {
    left: ShapeMatrix,
    right: ShapeMatrix,
}

impl EnemyShapes {
    pub fn new(left: ShapeMatrix, right: ShapeMatrix) -> Result<Self, ShapeError> {
        if left.len() != right.len() {
            return Err(ShapeError::RowCountMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        Ok(Self { left, right })
    }

    pub fn for_facing(&self, facing: Facing) -> &ShapeMatrix {
        match facing {
            Facing::Left => &self.left,
            Facing::Right => &self.right,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    pub speed: f32,
    pub facing: Facing,
    spawn: Vec2,
    spawn_speed: f32,
    spawn_facing: Facing,
}

impl Enemy {
    pub fn new(spawn: Vec2, size: Vec2, speed: f32, facing: Facing) -> Self {
        Self {
            rect: Rect::from_pos_size(spawn, size),
            speed,
            facing,
            spawn,
            spawn_speed: speed,
            spawn_facing: facing,
        }
    }

    pub fn shape_rects(&self, shapes: &EnemyShapes) -> Vec<Rect> {
        shape_rects(&self.rect, shapes.for_facing(self.facing))
    }

    /// Changes speed by `delta`; speed never drops below zero.
    pub fn speed_up(&mut self, delta: f32) {
        self.speed = (self.speed + delta).max(0.0);
    }

    pub fn reset(&mut self) {
        self.rect.set_pos(self.spawn);
        self.speed = self.spawn_speed;
        self.facing = self.spawn_facing;
    }
}
