use bevy::prelude::*;
use moodmap::{GeoPoint, Mood};

/// Light up the globe around a place in a mood's color.
#[derive(Message, Debug, Clone, Copy)]
pub struct PaintMoodEvent {
    pub geo_point: GeoPoint,
    pub mood: Mood,
}
