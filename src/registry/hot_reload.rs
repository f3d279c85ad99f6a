//! Hot-reload of the game config.

use bevy::asset::AssetEvent;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::assets::GameConfigAsset;
use super::config::GameConfig;
use super::{install_config, ConfigHandle};

/// Rebuilds the config and a fresh session whenever the RON file changes.
/// An invalid edit is logged and the running game is left untouched.
pub(crate) fn hot_reload_config(
    mut commands: Commands,
    mut events: MessageReader<AssetEvent<GameConfigAsset>>,
    handle: Res<ConfigHandle>,
    assets: Res<Assets<GameConfigAsset>>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event
            && *id == handle.0.id()
            && let Some(asset) = assets.get(&handle.0)
        {
            match GameConfig::from_asset(asset) {
                Ok(config) => {
                    install_config(&mut commands, config);
                    info!("Hot-reloaded game config, session reset");
                }
                Err(err) => warn!("Ignoring invalid game config edit: {err}"),
            }
        }
    }
}
