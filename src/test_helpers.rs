pub mod fixtures {
    use bevy::prelude::*;

    use crate::enemy::Facing;
    use crate::item::{GemColor, PropKind};
    use crate::registry::assets::{
        EnemyArchetypeDef, EnemyDef, GameConfigAsset, PlayerDef, PropDef, Rules,
    };
    use crate::registry::config::GameConfig;
    use crate::session::GameSession;
    use crate::shape::ShapeMatrix;
    use crate::world::grid::{Anchor, CellSpan, GridConfig};
    use crate::world::ground::{GroundMap, GroundTile};

    pub fn test_grid() -> GridConfig {
        GridConfig {
            col_width: 101.0,
            row_height: 83.0,
            offset_v: 50.0,
            rows: 7,
            cols: 6,
        }
    }

    pub fn test_rules() -> Rules {
        Rules {
            start_lives: 2,
            max_lives: 3,
            gems_for_star: 3,
            freeze_secs: 0.8,
            pickup_speed_bonus: 20.0,
            hit_speed_penalty: 20.0,
        }
    }

    fn anchor(row: i32, col: i32, dx: f32, dy: f32) -> Anchor {
        Anchor { row, col, dx, dy }
    }

    pub fn test_ground_tiles() -> Vec<Vec<GroundTile>> {
        use GroundTile::{Grass as G, Stone as S, Water as W};
        vec![
            vec![G, S, S, S, S, G],
            vec![W, W, G, S, S, S],
            vec![G, S, S, W, G, G],
            vec![G, W, G, G, W, W],
            vec![S, S, S, W, G, G],
            vec![G, G, W, W, S, S],
            vec![W, G, G, G, G, G],
        ]
    }

    pub fn test_ground_map() -> GroundMap {
        GroundMap::new(test_ground_tiles(), (6, 0))
    }

    /// The default layout, built in code.
    pub fn test_config_asset() -> GameConfigAsset {
        let enemy = |row, col, speed, facing, home: CellSpan| EnemyDef {
            at: anchor(row, col, 0.0, 65.0),
            speed,
            facing,
            home,
        };
        let prop = |kind, row, col, dx, dy, size| PropDef {
            kind,
            at: anchor(row, col, dx, dy),
            size,
        };
        GameConfigAsset {
            grid: test_grid(),
            rules: test_rules(),
            player: PlayerDef {
                size: (50.0, 50.0),
                speed: 100.0,
                start: anchor(5, 0, 25.0, 70.0),
                respawn: anchor(6, 5, 25.0, 70.0),
                shape: ShapeMatrix::new(vec![
                    (0.20, 0.08, 0.60, 0.18),
                    (0.06, 0.20, 0.88, 0.35),
                    (0.13, 0.55, 0.74, 0.15),
                    (0.28, 0.70, 0.45, 0.25),
                ])
                .unwrap(),
            },
            enemy: EnemyArchetypeDef {
                size: (70.0, 50.0),
                shape_left: ShapeMatrix::new(vec![
                    (0.05, 0.30, 0.12, 0.40),
                    (0.15, 0.18, 0.15, 0.60),
                    (0.30, 0.08, 0.50, 0.80),
                    (0.80, 0.18, 0.10, 0.60),
                    (0.90, 0.27, 0.06, 0.42),
                ])
                .unwrap(),
                shape_right: ShapeMatrix::new(vec![
                    (0.05, 0.27, 0.06, 0.40),
                    (0.10, 0.18, 0.10, 0.60),
                    (0.20, 0.08, 0.50, 0.80),
                    (0.70, 0.18, 0.15, 0.60),
                    (0.85, 0.25, 0.10, 0.40),
                ])
                .unwrap(),
            },
            enemies: vec![
                enemy(0, 3, 240.0, Facing::Right, CellSpan::new(0, 1, 1, 4)),
                enemy(1, 4, 130.0, Facing::Left, CellSpan::new(1, 3, 1, 3)),
                enemy(2, 1, 150.0, Facing::Right, CellSpan::new(2, 1, 1, 2)),
                enemy(4, 1, 110.0, Facing::Left, CellSpan::new(4, 0, 1, 3)),
                enemy(5, 4, 180.0, Facing::Right, CellSpan::new(5, 4, 1, 2)),
            ],
            props: vec![
                prop(PropKind::Key, 3, 3, 40.0, 75.0, (20.0, 40.0)),
                prop(PropKind::Heart, 4, 5, 35.0, 75.0, (30.0, 30.0)),
                prop(PropKind::Gem(GemColor::Blue), 0, 0, 35.0, 75.0, (30.0, 30.0)),
                prop(PropKind::Gem(GemColor::Green), 3, 0, 35.0, 75.0, (30.0, 30.0)),
                prop(PropKind::Gem(GemColor::Orange), 2, 5, 35.0, 75.0, (30.0, 30.0)),
            ],
            obstacles: vec![
                CellSpan::new(1, 0, 1, 2),
                CellSpan::new(2, 3, 1, 1),
                CellSpan::new(3, 1, 1, 1),
                CellSpan::new(3, 4, 1, 2),
                CellSpan::new(4, 3, 1, 1),
                CellSpan::new(5, 2, 1, 2),
            ],
            target: CellSpan::new(6, 0, 1, 1),
            ground: test_ground_tiles(),
        }
    }

    pub fn test_game_config() -> GameConfig {
        GameConfig::from_asset(&test_config_asset()).unwrap()
    }

    /// A session on the default layout, already running.
    pub fn test_session() -> GameSession {
        let mut session = GameSession::new(&test_game_config());
        session.start();
        session.drain_events();
        session
    }

    /// Create a minimal Bevy App with the default layout loaded.
    pub fn test_app() -> App {
        let config = test_game_config();
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameSession::new(&config));
        app.insert_resource(config.ground_map());
        app.insert_resource(config);
        app
    }
}
