pub mod assets;
pub mod config;
pub mod hot_reload;
pub mod loader;

use bevy::asset::AssetEvent;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use assets::GameConfigAsset;
use config::GameConfig;
use loader::ConfigLoader;

use crate::session::GameSession;
use crate::ui::props_panel::PanelFx;

const CONFIG_PATH: &str = "data/game.config.ron";

/// Application state: Loading waits for a valid config, InGame runs gameplay.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}

/// Keeps the config handle alive for hot-reload detection.
#[derive(Resource)]
pub(crate) struct ConfigHandle(pub(crate) Handle<GameConfigAsset>);

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_asset::<GameConfigAsset>()
            .init_asset_loader::<ConfigLoader>()
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_loading.run_if(in_state(AppState::Loading)))
            .add_systems(
                Update,
                hot_reload::hot_reload_config.run_if(in_state(AppState::InGame)),
            );
    }
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let handle = asset_server.load::<GameConfigAsset>(CONFIG_PATH);
    commands.insert_resource(ConfigHandle(handle));
}

/// Inserts everything derived from a validated config. The session starts in
/// the Ready phase with a cleared props panel.
pub(crate) fn install_config(commands: &mut Commands, config: GameConfig) {
    commands.insert_resource(GameSession::new(&config));
    commands.insert_resource(PanelFx::default());
    commands.insert_resource(config.ground_map());
    commands.insert_resource(config);
}

fn check_loading(
    mut commands: Commands,
    mut events: MessageReader<AssetEvent<GameConfigAsset>>,
    handle: Res<ConfigHandle>,
    assets: Res<Assets<GameConfigAsset>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for event in events.read() {
        if let AssetEvent::LoadedWithDependencies { id } | AssetEvent::Modified { id } = event
            && *id == handle.0.id()
            && let Some(asset) = assets.get(&handle.0)
        {
            match GameConfig::from_asset(asset) {
                Ok(config) => {
                    info!(
                        "Loaded {CONFIG_PATH}: {} enemies, {} props, {} forbidden zones",
                        config.enemies.len(),
                        config.props.len(),
                        config.forbidden.len()
                    );
                    install_config(&mut commands, config);
                    next_state.set(AppState::InGame);
                    return;
                }
                Err(err) => error!("Rejected {CONFIG_PATH}: {err}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Phase;
    use crate::test_helpers::fixtures;
    use crate::world::ground::GroundMap;

    #[test]
    fn install_config_inserts_session_and_ground() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, |mut commands: Commands| {
            install_config(&mut commands, fixtures::test_game_config());
        });
        app.update();

        let world = app.world();
        assert!(world.contains_resource::<GameConfig>());
        assert!(world.contains_resource::<GroundMap>());
        assert_eq!(world.resource::<GameSession>().phase(), Phase::Ready);
    }

    #[test]
    fn reinstall_clears_lit_star() {
        let mut app = fixtures::test_app();
        let mut fx = PanelFx::default();
        let session = app.world().resource::<GameSession>();
        fx.apply(&crate::session::GameEvent::StarRevealed, session.inventory());
        fx.tick(std::time::Duration::from_secs(1));
        assert!(fx.star_shown());
        app.insert_resource(fx);

        app.add_systems(Update, |mut commands: Commands| {
            install_config(&mut commands, fixtures::test_game_config());
        });
        app.update();
        assert!(!app.world().resource::<PanelFx>().star_shown());
    }
}
