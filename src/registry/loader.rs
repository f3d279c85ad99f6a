use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use thiserror::Error;

use super::assets::GameConfigAsset;

#[derive(Debug, Error)]
pub enum ConfigLoaderError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("config is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("malformed config: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Parses the raw bytes of a `.config.ron` file.
pub fn parse_config(bytes: &[u8]) -> Result<GameConfigAsset, ConfigLoaderError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(ron::from_str(text)?)
}

#[derive(TypePath, Default)]
pub struct ConfigLoader;

impl AssetLoader for ConfigLoader {
    type Asset = GameConfigAsset;
    type Settings = ();
    type Error = ConfigLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let asset = parse_config(&bytes)?;
        debug!(
            "Parsed game config: {} enemies, {} props, {} obstacles",
            asset.enemies.len(),
            asset.props.len(),
            asset.obstacles.len()
        );
        Ok(asset)
    }

    fn extensions(&self) -> &[&str] {
        &["config.ron"]
    }
}
