use bevy::prelude::*;

use crate::enemy::Facing;
use crate::item::{GemColor, PropKind};

/// Everything the session reports to the outside world.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Started,
    PropCollected { kind: PropKind },
    LifeRestored { lives: u8 },
    PlayerDamaged { lives_remaining: u8 },
    PlayerRespawned,
    StarRevealed,
    TargetUnlocked,
    EnemyBounced { enemy: usize, facing: Facing },
    /// `gem` is the star-completing gem, if the star was ever revealed.
    Won { gem: Option<GemColor> },
    Failed,
}
