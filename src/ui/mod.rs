pub mod prompts;
pub mod props_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::registry::AppState;
use crate::sets::GameSet;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<props_panel::PanelFx>()
            .add_systems(
                Update,
                props_panel::update_panel_fx
                    .in_set(GameSet::Presentation)
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (props_panel::draw_props_panel, prompts::draw_prompts)
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
