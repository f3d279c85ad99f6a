pub mod collision;
pub mod movement;

use std::time::Duration;

use bevy::prelude::*;

use crate::math::Rect;
use crate::registry::AppState;
use crate::sets::GameSet;
use crate::shape::{shape_rects, ShapeMatrix};

use movement::DirectionInput;

/// Collision cooldown: the player and the enemy it touched hold still.
#[derive(Debug, Clone)]
pub struct Freeze {
    pub timer: Timer,
    pub enemy: usize,
    pub player_speed: f32,
    pub enemy_speed: f32,
}

impl Freeze {
    pub fn new(secs: f32, enemy: usize, player_speed: f32, enemy_speed: f32) -> Self {
        Self {
            timer: Timer::from_seconds(secs, TimerMode::Once),
            enemy,
            player_speed,
            enemy_speed,
        }
    }

    /// Advances the cooldown; returns `true` on the tick it runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        let step = Duration::try_from_secs_f32(dt)
            .unwrap_or(Duration::MAX)
            .min(self.timer.remaining());
        self.timer.tick(step);
        self.timer.just_finished()
    }
}

#[derive(Debug, Clone)]
pub enum PlayerState {
    Idle,
    Moving,
    Frozen(Freeze),
    Won,
    Failed,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub speed: f32,
    pub input: DirectionInput,
    pub state: PlayerState,
    spawn: Vec2,
    base_speed: f32,
}

impl Player {
    pub fn new(spawn: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            rect: Rect::from_pos_size(spawn, size),
            speed,
            input: DirectionInput::default(),
            state: PlayerState::Idle,
            spawn,
            base_speed: speed,
        }
    }

    pub fn shape_rects(&self, matrix: &ShapeMatrix) -> Vec<Rect> {
        shape_rects(&self.rect, matrix)
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self.state, PlayerState::Frozen(_))
    }

    /// Re-derives Idle/Moving from the held direction. Frozen and terminal
    /// states are left alone.
    pub fn refresh_motion(&mut self) {
        if matches!(self.state, PlayerState::Idle | PlayerState::Moving) {
            self.state = if self.input.current().is_some() {
                PlayerState::Moving
            } else {
                PlayerState::Idle
            };
        }
    }

    /// Proposed displacement for this tick.
    pub fn displacement(&self, dt: f32) -> Vec2 {
        match (&self.state, self.input.current()) {
            (PlayerState::Moving, Some(dir)) => dir.unit() * self.speed * dt,
            _ => Vec2::ZERO,
        }
    }

    pub fn freeze(&mut self, freeze: Freeze) {
        self.speed = 0.0;
        self.state = PlayerState::Frozen(freeze);
    }

    /// Ends a freeze by teleporting to `respawn` with the saved speed.
    pub fn thaw(&mut self, respawn: Vec2, speed: f32) {
        self.rect.set_pos(respawn);
        self.speed = speed;
        self.state = PlayerState::Idle;
        self.refresh_motion();
    }

    pub fn reset(&mut self) {
        self.rect.set_pos(self.spawn);
        self.speed = self.base_speed;
        self.input.clear();
        self.state = PlayerState::Idle;
    }
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            movement::player_input
                .in_set(GameSet::Input)
                .run_if(in_state(AppState::InGame)),
        );
    }
}
