use bevy::prelude::*;
use thiserror::Error;

use super::assets::{GameConfigAsset, Rules};
use crate::enemy::{EnemyShapes, Facing};
use crate::item::PropKind;
use crate::math::{contains, overlaps, Rect};
use crate::shape::{shape_rects, shapes_collide, ShapeError, ShapeMatrix};
use crate::world::grid::GridConfig;
use crate::world::ground::{GroundMap, GroundTile};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid shape: {0}")]
    Shape(#[from] ShapeError),
    #[error("grid cells must be positive, got {width}x{height} over {rows}x{cols}")]
    Grid {
        width: f32,
        height: f32,
        rows: u32,
        cols: u32,
    },
    #[error("{what} has invalid size ({width}, {height})")]
    Size {
        what: &'static str,
        width: f32,
        height: f32,
    },
    #[error("{what} speed must be finite and non-negative, got {speed}")]
    Speed { what: &'static str, speed: f32 },
    #[error("lives must satisfy 0 < start ({start}) <= max ({max})")]
    Lives { start: u8, max: u8 },
    #[error("gems_for_star must be at least 1")]
    NoGemsForStar,
    #[error("freeze_secs must be finite and non-negative, got {0}")]
    FreezeSecs(f32),
    #[error("ground map is {rows}x{cols}, grid expects {expected_rows}x{expected_cols}")]
    GroundSize {
        rows: usize,
        cols: usize,
        expected_rows: u32,
        expected_cols: u32,
    },
    #[error("target cell ({row}, {col}) lies outside the ground map")]
    TargetOutside { row: i32, col: i32 },
    #[error("enemy {enemy} spawns outside its home range")]
    SpawnOutsideHome { enemy: usize },
    #[error("player {what} point lies in a forbidden zone")]
    PlayerBlocked { what: &'static str },
}

#[derive(Debug, Clone)]
pub struct EnemySpawn {
    pub pos: Vec2,
    pub speed: f32,
    pub facing: Facing,
    pub home: Rect,
}

#[derive(Debug, Clone)]
pub struct PropSpawn {
    pub kind: PropKind,
    pub pos: Vec2,
    pub size: Vec2,
}

/// Validated game configuration in canvas coordinates.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub grid: GridConfig,
    pub rules: Rules,
    pub player_size: Vec2,
    pub player_speed: f32,
    pub player_start: Vec2,
    pub respawn: Vec2,
    pub player_shape: ShapeMatrix,
    pub enemy_size: Vec2,
    pub enemy_shapes: EnemyShapes,
    pub enemies: Vec<EnemySpawn>,
    pub props: Vec<PropSpawn>,
    /// Map borders followed by obstacles, in check order.
    pub forbidden: Vec<Rect>,
    pub target: Rect,
    pub ground: Vec<Vec<GroundTile>>,
    pub goal: (usize, usize),
}

fn size(what: &'static str, (width, height): (f32, f32)) -> Result<Vec2, ConfigError> {
    if width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0 {
        Ok(Vec2::new(width, height))
    } else {
        Err(ConfigError::Size {
            what,
            width,
            height,
        })
    }
}

/// Fails if the player's silhouette at `pos` touches any forbidden rect.
fn player_clear(
    what: &'static str,
    pos: Vec2,
    size: Vec2,
    shape: &ShapeMatrix,
    forbidden: &[Rect],
) -> Result<Vec2, ConfigError> {
    let body = Rect::from_pos_size(pos, size);
    let rects = shape_rects(&body, shape);
    let blocked = forbidden
        .iter()
        .any(|zone| overlaps(&body, zone) && shapes_collide(&rects, std::slice::from_ref(zone)));
    if blocked {
        Err(ConfigError::PlayerBlocked { what })
    } else {
        Ok(pos)
    }
}

fn speed(what: &'static str, speed: f32) -> Result<f32, ConfigError> {
    if speed.is_finite() && speed >= 0.0 {
        Ok(speed)
    } else {
        Err(ConfigError::Speed { what, speed })
    }
}

impl GameConfig {
    pub fn from_asset(asset: &GameConfigAsset) -> Result<Self, ConfigError> {
        let grid = asset.grid.clone();
        if !(grid.col_width > 0.0 && grid.row_height > 0.0) || grid.rows == 0 || grid.cols == 0 {
            return Err(ConfigError::Grid {
                width: grid.col_width,
                height: grid.row_height,
                rows: grid.rows,
                cols: grid.cols,
            });
        }

        let rules = asset.rules.clone();
        if rules.start_lives == 0 || rules.start_lives > rules.max_lives {
            return Err(ConfigError::Lives {
                start: rules.start_lives,
                max: rules.max_lives,
            });
        }
        if rules.gems_for_star == 0 {
            return Err(ConfigError::NoGemsForStar);
        }
        if !(rules.freeze_secs.is_finite() && rules.freeze_secs >= 0.0) {
            return Err(ConfigError::FreezeSecs(rules.freeze_secs));
        }
        speed("pickup bonus", rules.pickup_speed_bonus)?;
        speed("hit penalty", rules.hit_speed_penalty)?;

        let enemy_size = size("enemy", asset.enemy.size)?;
        let enemy_shapes = EnemyShapes::new(
            asset.enemy.shape_left.clone(),
            asset.enemy.shape_right.clone(),
        )?;

        let enemies = asset
            .enemies
            .iter()
            .enumerate()
            .map(|(index, def)| -> Result<EnemySpawn, ConfigError> {
                let pos = grid.anchor_point(def.at);
                let home = grid.ground_rect(def.home);
                if !contains(&Rect::from_pos_size(pos, enemy_size), &home) {
                    return Err(ConfigError::SpawnOutsideHome { enemy: index });
                }
                Ok(EnemySpawn {
                    pos,
                    speed: speed("enemy", def.speed)?,
                    facing: def.facing,
                    home,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let props = asset
            .props
            .iter()
            .map(|def| -> Result<PropSpawn, ConfigError> {
                Ok(PropSpawn {
                    kind: def.kind,
                    pos: grid.anchor_point(def.at),
                    size: size("prop", def.size)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows = asset.ground.len();
        let cols = asset.ground.first().map_or(0, Vec::len);
        if rows != grid.rows as usize || asset.ground.iter().any(|r| r.len() != grid.cols as usize) {
            return Err(ConfigError::GroundSize {
                rows,
                cols,
                expected_rows: grid.rows,
                expected_cols: grid.cols,
            });
        }
        let target_span = asset.target;
        let goal = match (usize::try_from(target_span.row), usize::try_from(target_span.col)) {
            (Ok(r), Ok(c)) if r < rows && c < cols => (r, c),
            _ => {
                return Err(ConfigError::TargetOutside {
                    row: target_span.row,
                    col: target_span.col,
                });
            }
        };

        let forbidden: Vec<Rect> = grid
            .border_spans()
            .into_iter()
            .chain(asset.obstacles.iter().copied())
            .map(|span| grid.ground_rect(span))
            .collect();

        let player_size = size("player", asset.player.size)?;
        let player_shape = &asset.player.shape;
        let player_start = player_clear(
            "start",
            grid.anchor_point(asset.player.start),
            player_size,
            player_shape,
            &forbidden,
        )?;
        let respawn = player_clear(
            "respawn",
            grid.anchor_point(asset.player.respawn),
            player_size,
            player_shape,
            &forbidden,
        )?;

        Ok(Self {
            player_size,
            player_speed: speed("player", asset.player.speed)?,
            player_start,
            respawn,
            player_shape: player_shape.clone(),
            enemy_size,
            enemy_shapes,
            enemies,
            props,
            forbidden,
            target: grid.ground_rect(target_span),
            ground: asset.ground.clone(),
            goal,
            grid,
            rules,
        })
    }

    pub fn ground_map(&self) -> GroundMap {
        GroundMap::new(self.ground.clone(), self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures;

    fn shipped() -> GameConfigAsset {
        ron::from_str(include_str!("../../assets/data/game.config.ron")).unwrap()
    }

    #[test]
    fn shipped_config_is_valid() {
        let config = GameConfig::from_asset(&shipped()).unwrap();
        assert_eq!(config.enemies.len(), 5);
        assert_eq!(config.props.len(), 5);
        assert_eq!(config.forbidden.len(), 4 + 6);
        assert_eq!(config.player_start, Vec2::new(25.0, 485.0));
        assert_eq!(config.respawn, Vec2::new(530.0, 568.0));
        assert_eq!(config.target, Rect::new(0.0, 548.0, 101.0, 83.0));
        assert_eq!(config.goal, (6, 0));
    }

    #[test]
    fn shipped_config_matches_fixture() {
        let shipped = GameConfig::from_asset(&shipped()).unwrap();
        let fixture = fixtures::test_game_config();
        assert_eq!(shipped.forbidden, fixture.forbidden);
        assert_eq!(shipped.player_shape, fixture.player_shape);
        assert_eq!(shipped.enemy_shapes, fixture.enemy_shapes);
        assert_eq!(shipped.rules, fixture.rules);
        assert_eq!(shipped.ground, fixture.ground);
        let homes = |c: &GameConfig| c.enemies.iter().map(|e| e.home).collect::<Vec<_>>();
        assert_eq!(homes(&shipped), homes(&fixture));
    }

    #[test]
    fn spawns_start_inside_their_homes() {
        let config = fixtures::test_game_config();
        for enemy in &config.enemies {
            let rect = Rect::from_pos_size(enemy.pos, config.enemy_size);
            assert!(crate::math::contains(&rect, &enemy.home), "{enemy:?}");
        }
    }

    #[test]
    fn rejects_mismatched_enemy_shapes() {
        let mut asset = fixtures::test_config_asset();
        asset.enemy.shape_right = ShapeMatrix::identity();
        assert_eq!(
            GameConfig::from_asset(&asset).unwrap_err(),
            ConfigError::Shape(ShapeError::RowCountMismatch { left: 5, right: 1 })
        );
    }

    #[test]
    fn rejects_bad_lives() {
        let mut asset = fixtures::test_config_asset();
        asset.rules.start_lives = 4;
        assert!(matches!(
            GameConfig::from_asset(&asset),
            Err(ConfigError::Lives { start: 4, max: 3 })
        ));
    }

    #[test]
    fn rejects_short_ground_row() {
        let mut asset = fixtures::test_config_asset();
        asset.ground[3].pop();
        assert!(matches!(
            GameConfig::from_asset(&asset),
            Err(ConfigError::GroundSize { .. })
        ));
    }

    #[test]
    fn rejects_negative_speed() {
        let mut asset = fixtures::test_config_asset();
        asset.enemies[2].speed = -1.0;
        assert!(matches!(
            GameConfig::from_asset(&asset),
            Err(ConfigError::Speed { what: "enemy", .. })
        ));
    }

    #[test]
    fn rejects_target_outside_map() {
        let mut asset = fixtures::test_config_asset();
        asset.target.row = 7;
        assert_eq!(
            GameConfig::from_asset(&asset).unwrap_err(),
            ConfigError::TargetOutside { row: 7, col: 0 }
        );
    }

    #[test]
    fn rejects_spawn_outside_home() {
        let mut asset = fixtures::test_config_asset();
        asset.enemies[0].at.row = 3;
        assert_eq!(
            GameConfig::from_asset(&asset).unwrap_err(),
            ConfigError::SpawnOutsideHome { enemy: 0 }
        );
    }

    #[test]
    fn rejects_player_start_inside_obstacle() {
        let mut asset = fixtures::test_config_asset();
        asset.player.start.row = 1;
        assert_eq!(
            GameConfig::from_asset(&asset).unwrap_err(),
            ConfigError::PlayerBlocked { what: "start" }
        );
    }

    #[test]
    fn rejects_respawn_beyond_map_edge() {
        let mut asset = fixtures::test_config_asset();
        asset.player.respawn.col = 6;
        assert_eq!(
            GameConfig::from_asset(&asset).unwrap_err(),
            ConfigError::PlayerBlocked { what: "respawn" }
        );
    }

    #[test]
    fn malformed_shape_rejected_at_parse_time() {
        let text = include_str!("../../assets/data/game.config.ron")
            .replacen("(0.20, 0.08, 0.60, 0.18)", "(0.20, 0.08, -0.60, 0.18)", 1);
        assert!(ron::from_str::<GameConfigAsset>(&text).is_err());
    }
}
