use bevy::math::Vec2;

use super::definition::PropKind;
use crate::math::Rect;

/// A pickup placed on the map.
#[derive(Debug, Clone)]
pub struct Prop {
    pub kind: PropKind,
    pub rect: Rect,
    pub collected: bool,
    spawn: Vec2,
}

impl Prop {
    pub fn new(kind: PropKind, spawn: Vec2, size: Vec2) -> Self {
        Self {
            kind,
            rect: Rect::from_pos_size(spawn, size),
            collected: false,
            spawn,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.collected
    }

    pub fn reset(&mut self) {
        self.rect.set_pos(self.spawn);
        self.collected = false;
    }
}
