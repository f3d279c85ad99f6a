use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::item::WinNarrative;
use crate::session::{GameSession, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub title: &'static str,
    pub text: &'static str,
    pub button: &'static str,
}

/// The modal shown for `phase`, if any. Running games show none.
pub fn prompt_for(phase: Phase, narrative: Option<WinNarrative>) -> Option<Prompt> {
    match phase {
        Phase::Running => None,
        Phase::Ready => Some(Prompt {
            title: "Treasure Trail",
            text: "Collect the key and all three gems to open the way to the \
                   treasure in the corner. Stay clear of the bugs. Arrow keys move.",
            button: "Play",
        }),
        Phase::Lost => Some(Prompt {
            title: "Caught",
            text: "The bugs got you before you reached the treasure.",
            button: "Try again",
        }),
        Phase::Won => Some(match narrative {
            Some(narrative) => Prompt {
                title: "You made it",
                text: narrative.prompt(),
                button: narrative.button_label(),
            },
            None => Prompt {
                title: "You made it",
                text: "You reached the treasure.",
                button: "Play again",
            },
        }),
    }
}

pub fn draw_prompts(mut contexts: EguiContexts, mut session: ResMut<GameSession>) -> Result {
    let Some(prompt) = prompt_for(session.phase(), session.inventory().narrative()) else {
        return Ok(());
    };
    let ctx = contexts.ctx_mut()?;

    let mut play = false;
    egui::Window::new(prompt.title)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.set_max_width(320.0);
            ui.label(prompt.text);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                play = ui.button(prompt.button).clicked();
            });
        });

    if play {
        session.start();
    }
    Ok(())
}
