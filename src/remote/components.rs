use crate::remote::events::RemoteOutcome;
use bevy::prelude::*;
use bevy::tasks::Task;

/// An in-flight backend or locator call. Despawned once it resolves.
#[derive(Component)]
pub struct RemoteTask(pub Task<RemoteOutcome>);
