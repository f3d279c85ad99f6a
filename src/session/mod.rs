pub mod events;
pub mod game;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

pub use events::GameEvent;
pub use game::{GameSession, Phase};

use crate::registry::AppState;
use crate::sets::GameSet;

/// Upper bound on the simulated step per frame.
pub const MAX_DELTA_SECS: f32 = 1.0 / 20.0;

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<GameEvent>().add_systems(
            Update,
            tick_session
                .in_set(GameSet::Simulation)
                .run_if(in_state(AppState::InGame)),
        );
    }
}

/// Steps the session with the frame delta and forwards its events.
pub fn tick_session(
    time: Res<Time>,
    mut session: ResMut<GameSession>,
    mut events: MessageWriter<GameEvent>,
) {
    let dt = time.delta_secs().min(MAX_DELTA_SECS);
    session.step(dt);
    for event in session.drain_events() {
        events.write(event);
    }
}
