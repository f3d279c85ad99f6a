pub mod grid;
pub mod ground;
pub mod zones;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::registry::AppState;
use crate::session::GameEvent;
use crate::sets::GameSet;
use ground::GroundMap;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            update_ground
                .in_set(GameSet::Presentation)
                .run_if(in_state(AppState::InGame)),
        );
    }
}

/// Drives the goal tile: door after the star, prize on a win, water again
/// on restart.
pub fn update_ground(
    time: Res<Time>,
    mut events: MessageReader<GameEvent>,
    mut ground: ResMut<GroundMap>,
) {
    for event in events.read() {
        match event {
            GameEvent::Started => ground.reset(),
            GameEvent::StarRevealed => ground.schedule_door(),
            GameEvent::Won { gem: Some(gem) } => ground.reveal_prize((*gem).into()),
            _ => {}
        }
    }
    ground.tick(time.delta());
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;

    use super::*;
    use crate::item::GemColor;
    use crate::test_helpers::fixtures;
    use ground::GroundTile;

    fn app() -> App {
        let mut app = fixtures::test_app();
        app.add_message::<GameEvent>()
            .add_systems(Update, update_ground);
        app
    }

    fn send(app: &mut App, event: GameEvent) {
        app.world_mut().resource_mut::<Messages<GameEvent>>().write(event);
    }

    #[test]
    fn win_reveals_prize_and_restart_restores_water() {
        let mut app = app();
        send(&mut app, GameEvent::Won { gem: Some(GemColor::Orange) });
        app.update();
        assert_eq!(
            app.world().resource::<GroundMap>().goal_tile(),
            Some(GroundTile::Dimes)
        );

        send(&mut app, GameEvent::Started);
        app.update();
        assert_eq!(
            app.world().resource::<GroundMap>().goal_tile(),
            Some(GroundTile::Water)
        );
    }

    #[test]
    fn star_schedules_door_without_changing_tile_yet() {
        let mut app = app();
        send(&mut app, GameEvent::StarRevealed);
        app.update();
        assert_eq!(
            app.world().resource::<GroundMap>().goal_tile(),
            Some(GroundTile::Water)
        );
    }
}
