use std::time::Duration;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::inventory::Inventory;
use crate::item::{GemColor, PropKind};
use crate::session::{GameEvent, GameSession};

const BOUNCE_SECS: f32 = 0.8;
const SHAKE_SECS: f32 = 0.8;
/// The star slot lights up this long after the third gem.
const STAR_DELAY_SECS: f32 = 1.0;

const ICON_SIZE: f32 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Key,
    Heart(usize),
    Gem(usize),
}

/// Cosmetic animation state of the props panel. Gameplay never waits on it.
#[derive(Resource, Debug, Default)]
pub struct PanelFx {
    bounce: Option<(Slot, Timer)>,
    shake: Option<(Slot, Timer)>,
    star_delay: Option<Timer>,
    star_shown: bool,
}

impl PanelFx {
    pub fn apply(&mut self, event: &GameEvent, inventory: &Inventory) {
        match *event {
            GameEvent::Started => *self = Self::default(),
            GameEvent::PropCollected {
                kind: PropKind::Key,
            } => self.bounce(Slot::Key),
            GameEvent::PropCollected {
                kind: PropKind::Gem(_),
            } => {
                if let Some(last) = inventory.gems.len().checked_sub(1) {
                    self.bounce(Slot::Gem(last));
                }
            }
            GameEvent::LifeRestored { lives } => {
                self.bounce(Slot::Heart(usize::from(lives.saturating_sub(1))));
            }
            GameEvent::PlayerDamaged { lives_remaining } => {
                self.shake = Some((
                    Slot::Heart(usize::from(lives_remaining)),
                    Timer::from_seconds(SHAKE_SECS, TimerMode::Once),
                ));
            }
            GameEvent::StarRevealed => {
                self.star_delay = Some(Timer::from_seconds(STAR_DELAY_SECS, TimerMode::Once));
            }
            _ => {}
        }
    }

    fn bounce(&mut self, slot: Slot) {
        self.bounce = Some((slot, Timer::from_seconds(BOUNCE_SECS, TimerMode::Once)));
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Some((_, timer)) = &mut self.bounce
            && timer.tick(dt).just_finished()
        {
            self.bounce = None;
        }
        if let Some((_, timer)) = &mut self.shake
            && timer.tick(dt).just_finished()
        {
            self.shake = None;
        }
        if let Some(timer) = &mut self.star_delay
            && timer.tick(dt).just_finished()
        {
            self.star_delay = None;
            self.star_shown = true;
        }
    }

    /// Size multiplier for `slot`: swells and settles while bouncing.
    pub fn scale(&self, slot: Slot) -> f32 {
        match &self.bounce {
            Some((s, timer)) if *s == slot => 1.0 + 0.4 * (1.0 - timer.fraction()),
            _ => 1.0,
        }
    }

    /// Horizontal jitter for `slot` in points.
    pub fn jitter(&self, slot: Slot) -> f32 {
        match &self.shake {
            Some((s, timer)) if *s == slot => {
                let t = timer.elapsed_secs();
                (t * 60.0).sin() * 4.0 * (1.0 - timer.fraction())
            }
            _ => 0.0,
        }
    }

    pub fn star_shown(&self) -> bool {
        self.star_shown
    }
}

pub fn update_panel_fx(
    time: Res<Time>,
    mut events: MessageReader<GameEvent>,
    session: Res<GameSession>,
    mut fx: ResMut<PanelFx>,
) {
    for event in events.read() {
        fx.apply(event, session.inventory());
    }
    fx.tick(time.delta());
}

fn gem_color(color: GemColor) -> egui::Color32 {
    match color {
        GemColor::Blue => egui::Color32::from_rgb(50, 100, 255),
        GemColor::Green => egui::Color32::from_rgb(40, 215, 90),
        GemColor::Orange => egui::Color32::from_rgb(255, 140, 25),
    }
}

const DIM: egui::Color32 = egui::Color32::from_gray(70);

fn icon(ui: &mut egui::Ui, fx: &PanelFx, slot: Slot, glyph: &str, color: egui::Color32) {
    let jitter = fx.jitter(slot);
    if jitter != 0.0 {
        ui.add_space(jitter.abs());
    }
    ui.label(
        egui::RichText::new(glyph)
            .size(ICON_SIZE * fx.scale(slot))
            .color(color),
    );
}

/// Hearts, gem slots, key and star along the top of the window.
pub fn draw_props_panel(
    mut contexts: EguiContexts,
    session: Res<GameSession>,
    fx: Res<PanelFx>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let inventory = session.inventory();

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220))
        .inner_margin(egui::Margin::same(8));

    egui::TopBottomPanel::top("props_panel")
        .resizable(false)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for i in 0..usize::from(inventory.max_lives) {
                    let color = if i < usize::from(inventory.lives) {
                        egui::Color32::from_rgb(230, 40, 60)
                    } else {
                        DIM
                    };
                    icon(ui, &fx, Slot::Heart(i), "♥", color);
                }

                ui.separator();
                for i in 0..inventory.gems_for_star() {
                    let color = inventory.gems.get(i).copied().map_or(DIM, gem_color);
                    icon(ui, &fx, Slot::Gem(i), "◆", color);
                }

                ui.separator();
                let key_color = if inventory.has_key {
                    egui::Color32::from_rgb(240, 205, 40)
                } else {
                    DIM
                };
                icon(ui, &fx, Slot::Key, "🔑", key_color);

                let star_color = if fx.star_shown() {
                    egui::Color32::from_rgb(255, 230, 90)
                } else {
                    DIM
                };
                ui.label(egui::RichText::new("★").size(ICON_SIZE).color(star_color));
            });
        });
    Ok(())
}
