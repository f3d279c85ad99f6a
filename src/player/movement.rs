use bevy::prelude::*;

use crate::session::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDir {
    Left,
    Right,
    Up,
    Down,
}

impl MoveDir {
    const KEYS: [(KeyCode, MoveDir); 4] = [
        (KeyCode::ArrowLeft, MoveDir::Left),
        (KeyCode::ArrowRight, MoveDir::Right),
        (KeyCode::ArrowUp, MoveDir::Up),
        (KeyCode::ArrowDown, MoveDir::Down),
    ];

    /// Unit step in canvas space (y grows downward).
    pub fn unit(self) -> Vec2 {
        match self {
            MoveDir::Left => Vec2::new(-1.0, 0.0),
            MoveDir::Right => Vec2::new(1.0, 0.0),
            MoveDir::Up => Vec2::new(0.0, -1.0),
            MoveDir::Down => Vec2::new(0.0, 1.0),
        }
    }
}

/// Two-level key stack: the newest held direction wins, and releasing it
/// falls back to the one held before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionInput {
    current: Option<MoveDir>,
    previous: Option<MoveDir>,
}

impl DirectionInput {
    pub fn current(&self) -> Option<MoveDir> {
        self.current
    }

    pub fn press(&mut self, dir: MoveDir) {
        if self.current != Some(dir) {
            self.previous = self.current;
        }
        self.current = Some(dir);
    }

    pub fn release(&mut self, dir: MoveDir) {
        if self.current == Some(dir) {
            self.current = self.previous;
        }
        self.previous = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn player_input(keys: Res<ButtonInput<KeyCode>>, mut session: ResMut<GameSession>) {
    for (key, dir) in MoveDir::KEYS {
        if keys.just_pressed(key) {
            session.input_mut().press(dir);
        }
        if keys.just_released(key) {
            session.input_mut().release(dir);
        }
    }
}
