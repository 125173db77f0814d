pub mod components;
pub mod events;
mod logic;
pub mod resources;
mod systems;

use crate::core::resources::Settings;
use crate::core::state::AppState;
use crate::remote::events::{MoodSelected, RemoteOutcome, RemoteRequest};
use crate::remote::resources::{Backend, Locator};
use crate::remote::systems::*;
use bevy::prelude::*;
use moodmap::backend::MemoryBackend;
use moodmap::session::FixedLocator;
use std::sync::Arc;

pub struct RemotePlugin;

impl Plugin for RemotePlugin {
    fn build(&self, app: &mut App) {
        let location = app
            .world()
            .get_resource::<Settings>()
            .and_then(|settings| settings.location);

        app.add_message::<RemoteRequest>()
            .add_message::<RemoteOutcome>()
            .add_message::<MoodSelected>()
            .insert_resource(Backend(Arc::new(MemoryBackend::new())))
            .insert_resource(Locator(Arc::new(FixedLocator::new(location))))
            .add_systems(OnEnter(AppState::SignedIn), request_initial_data)
            .add_systems(
                Update,
                (
                    submit_selected_moods,
                    dispatch_remote_requests,
                    poll_remote_tasks,
                    handle_remote_outcomes,
                )
                    .chain(),
            );
    }
}
