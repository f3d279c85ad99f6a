use bevy::prelude::*;
use serde::Deserialize;

use crate::item::WinNarrative;

/// Delay between the star reveal and the goal tile turning into a door.
const DOOR_REVEAL_SECS: f32 = 2.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum GroundTile {
    Stone,
    Grass,
    Water,
    Door,
    Dimes,
    Beauty,
    Precious,
}

impl GroundTile {
    pub fn color(self) -> Color {
        match self {
            GroundTile::Stone => Color::srgb(0.55, 0.55, 0.58),
            GroundTile::Grass => Color::srgb(0.30, 0.62, 0.25),
            GroundTile::Water => Color::srgb(0.20, 0.45, 0.85),
            GroundTile::Door => Color::srgb(0.50, 0.33, 0.16),
            GroundTile::Dimes => Color::srgb(0.90, 0.75, 0.20),
            GroundTile::Beauty => Color::srgb(0.95, 0.55, 0.75),
            GroundTile::Precious => Color::srgb(0.60, 0.35, 0.85),
        }
    }
}

impl From<WinNarrative> for GroundTile {
    fn from(narrative: WinNarrative) -> Self {
        match narrative {
            WinNarrative::Dimes => GroundTile::Dimes,
            WinNarrative::Beauty => GroundTile::Beauty,
            WinNarrative::Precious => GroundTile::Precious,
        }
    }
}

/// Tile kinds for every cell, plus the cosmetic state of the goal cell.
#[derive(Resource, Debug, Clone)]
pub struct GroundMap {
    tiles: Vec<Vec<GroundTile>>,
    goal: (usize, usize),
    goal_initial: GroundTile,
    door_reveal: Option<Timer>,
}

impl GroundMap {
    pub fn new(tiles: Vec<Vec<GroundTile>>, goal: (usize, usize)) -> Self {
        let goal_initial = tiles
            .get(goal.0)
            .and_then(|row| row.get(goal.1))
            .copied()
            .unwrap_or(GroundTile::Water);
        Self {
            tiles,
            goal,
            goal_initial,
            door_reveal: None,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, &[GroundTile])> {
        self.tiles.iter().map(Vec::as_slice).enumerate()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<GroundTile> {
        self.tiles.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn goal_tile(&self) -> Option<GroundTile> {
        self.get(self.goal.0, self.goal.1)
    }

    fn set_goal(&mut self, tile: GroundTile) {
        if let Some(cell) = self
            .tiles
            .get_mut(self.goal.0)
            .and_then(|r| r.get_mut(self.goal.1))
        {
            *cell = tile;
        }
    }

    pub fn reset(&mut self) {
        self.door_reveal = None;
        self.set_goal(self.goal_initial);
    }

    pub fn schedule_door(&mut self) {
        self.door_reveal = Some(Timer::from_seconds(DOOR_REVEAL_SECS, TimerMode::Once));
    }

    pub fn reveal_prize(&mut self, narrative: WinNarrative) {
        self.door_reveal = None;
        self.set_goal(narrative.into());
    }

    pub fn tick(&mut self, dt: std::time::Duration) {
        let Some(timer) = self.door_reveal.as_mut() else {
            return;
        };
        timer.tick(dt);
        if timer.just_finished() {
            self.door_reveal = None;
            self.set_goal(GroundTile::Door);
        }
    }
}
