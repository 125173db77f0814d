pub mod components;
pub mod events;
mod logic;
mod systems;

use crate::globe::events::PaintMoodEvent;
use crate::globe::systems::*;
use bevy::prelude::*;

pub struct GlobePlugin;

impl Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PaintMoodEvent>()
            .add_systems(Startup, spawn_globe)
            .add_systems(Update, (animate_globe, paint_mood_events).chain());
    }
}
