use bevy::prelude::*;

use super::events::GameEvent;
use crate::enemy::{Enemy, EnemyShapes};
use crate::inventory::Inventory;
use crate::item::{PropKind, Prop};
use crate::player::collision;
use crate::player::movement::DirectionInput;
use crate::player::{Freeze, Player, PlayerState};
use crate::registry::assets::Rules;
use crate::registry::config::GameConfig;
use crate::shape::ShapeMatrix;
use crate::world::zones::ZoneSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the player to press start.
    #[default]
    Ready,
    Running,
    Won,
    Lost,
}

/// One play-through: owns every entity, the zones and the inventory, and
/// advances them with [`GameSession::step`].
///
/// Nothing here reads the clock or input devices. The host feeds `dt` and
/// direction changes and drains the emitted [`GameEvent`]s.
#[derive(Resource, Debug)]
pub struct GameSession {
    rules: Rules,
    player_shape: ShapeMatrix,
    enemy_shapes: EnemyShapes,
    respawn: Vec2,
    player: Player,
    enemies: Vec<Enemy>,
    props: Vec<Prop>,
    inventory: Inventory,
    zones: ZoneSet,
    phase: Phase,
    outbox: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        let enemies = config
            .enemies
            .iter()
            .map(|e| Enemy::new(e.pos, config.enemy_size, e.speed, e.facing))
            .collect();
        let homes = config.enemies.iter().map(|e| e.home).collect();
        let props = config
            .props
            .iter()
            .map(|p| Prop::new(p.kind, p.pos, p.size))
            .collect();
        let rules = config.rules.clone();
        Self {
            player: Player::new(config.player_start, config.player_size, config.player_speed),
            player_shape: config.player_shape.clone(),
            enemy_shapes: config.enemy_shapes.clone(),
            respawn: config.respawn,
            enemies,
            props,
            inventory: Inventory::new(rules.start_lives, rules.max_lives, rules.gems_for_star),
            zones: ZoneSet::new(config.forbidden.clone(), homes, config.target),
            phase: Phase::Ready,
            outbox: Vec::new(),
            rules,
        }
    }

    /// Restores the initial layout and begins ticking.
    pub fn start(&mut self) {
        self.reset();
        self.phase = Phase::Running;
        info!("Session started with {} lives", self.inventory.lives);
        self.outbox.push(GameEvent::Started);
    }

    /// Restores every entity, prop, the inventory and the sealed target, and
    /// waits in [`Phase::Ready`].
    pub fn reset(&mut self) {
        self.player.reset();
        for enemy in &mut self.enemies {
            enemy.reset();
        }
        for prop in &mut self.props {
            prop.reset();
        }
        self.inventory.reset();
        self.zones.reset();
        self.phase = Phase::Ready;
        self.outbox.clear();
    }

    /// Advances the simulation by `dt` seconds. Enemies move first, then the
    /// player. Does nothing outside [`Phase::Running`].
    pub fn step(&mut self, dt: f32) {
        if self.phase != Phase::Running {
            return;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.step_enemies(dt);
        self.step_player(dt);
    }

    fn step_enemies(&mut self, dt: f32) {
        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            let Some(home) = self.zones.home(index) else {
                continue;
            };
            if enemy.patrol(dt, home) {
                debug!("Enemy {index} turned {:?}", enemy.facing);
                self.outbox.push(GameEvent::EnemyBounced {
                    enemy: index,
                    facing: enemy.facing,
                });
            }
        }
    }

    fn step_player(&mut self, dt: f32) {
        self.tick_freeze(dt);
        self.player.refresh_motion();

        let before = self.player.rect.pos();
        let delta = self.player.displacement(dt);
        self.player.rect = self.player.rect.translated(delta);

        if !self.zones.target_sealed() && collision::reached(&self.player, self.zones.target()) {
            self.win();
            return;
        }
        if self.player.is_frozen() {
            return;
        }

        collision::resolve_forbidden(&mut self.player, before, &self.player_shape, &self.zones);

        if let Some(index) = collision::find_enemy_contact(
            &self.player,
            &self.player_shape,
            &self.enemies,
            &self.enemy_shapes,
        ) {
            self.hit_by(index);
            return;
        }

        if let Some(index) = collision::find_prop_contact(&self.player, &self.player_shape, &self.props)
        {
            self.collect(index);
        }
    }

    fn tick_freeze(&mut self, dt: f32) {
        let PlayerState::Frozen(freeze) = &mut self.player.state else {
            return;
        };
        if !freeze.tick(dt) {
            return;
        }
        let (enemy, player_speed, enemy_speed) = (freeze.enemy, freeze.player_speed, freeze.enemy_speed);
        if let Some(enemy) = self.enemies.get_mut(enemy) {
            enemy.speed = enemy_speed;
        }
        self.player.thaw(self.respawn, player_speed);
        debug!("Player respawned at {}", self.respawn);
        self.outbox.push(GameEvent::PlayerRespawned);
    }

    fn hit_by(&mut self, index: usize) {
        let Some(enemy) = self.enemies.get_mut(index) else {
            return;
        };
        enemy.speed_up(-self.rules.hit_speed_penalty);
        let lives = self.inventory.lose_life();
        self.outbox.push(GameEvent::PlayerDamaged {
            lives_remaining: lives,
        });

        if lives == 0 {
            self.player.state = PlayerState::Failed;
            self.phase = Phase::Lost;
            info!("Player caught by enemy {index}, no lives left");
            self.outbox.push(GameEvent::Failed);
            return;
        }

        info!("Player caught by enemy {index}, {lives} lives left");
        let freeze = Freeze::new(self.rules.freeze_secs, index, self.player.speed, enemy.speed);
        enemy.speed = 0.0;
        self.player.freeze(freeze);
    }

    fn collect(&mut self, index: usize) {
        let Some(prop) = self.props.get_mut(index) else {
            return;
        };
        prop.collected = true;
        let kind = prop.kind;
        debug!("Collected {kind:?}");
        self.outbox.push(GameEvent::PropCollected { kind });

        match kind {
            PropKind::Key => {
                self.speed_up_enemies();
                self.inventory.add_key();
            }
            PropKind::Heart => {
                if self.inventory.restore_life() {
                    self.outbox.push(GameEvent::LifeRestored {
                        lives: self.inventory.lives,
                    });
                }
            }
            PropKind::Gem(color) => {
                self.speed_up_enemies();
                if self.inventory.add_gem(color) {
                    info!("Star revealed by {color:?} gem");
                    self.outbox.push(GameEvent::StarRevealed);
                }
            }
        }

        if self.inventory.can_unlock_target() && self.zones.unseal_target() {
            info!("Target unlocked");
            self.outbox.push(GameEvent::TargetUnlocked);
        }
    }

    fn speed_up_enemies(&mut self) {
        for enemy in &mut self.enemies {
            enemy.speed_up(self.rules.pickup_speed_bonus);
        }
    }

    fn win(&mut self) {
        let gem = self.inventory.star_gem();
        self.player.state = PlayerState::Won;
        self.phase = Phase::Won;
        info!("Target reached, ending: {:?}", self.inventory.narrative());
        self.outbox.push(GameEvent::Won { gem });
    }

    /// Takes every event emitted since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.outbox)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn input_mut(&mut self) -> &mut DirectionInput {
        &mut self.player.input
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy_shapes(&self) -> &EnemyShapes {
        &self.enemy_shapes
    }

    pub fn player_shape(&self) -> &ShapeMatrix {
        &self.player_shape
    }

    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }
}
