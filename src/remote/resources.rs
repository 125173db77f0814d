use bevy::prelude::*;
use moodmap::backend::MoodBackend;
use moodmap::session::GeoLocator;
use std::sync::Arc;

#[derive(Resource, Clone, Deref)]
pub struct Backend(pub Arc<dyn MoodBackend>);

#[derive(Resource, Clone, Deref)]
pub struct Locator(pub Arc<dyn GeoLocator>);
