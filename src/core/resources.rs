use bevy::prelude::*;
use moodmap::config::MosaicConfig;
use moodmap::session::Session;
use moodmap::MoodEvent;
use std::collections::VecDeque;

/// Snapshot of `moodmap_config.toml` taken at startup.
#[derive(Resource, Clone, Deref)]
pub struct Settings(pub MosaicConfig);

impl Default for Settings {
    fn default() -> Self {
        Self(moodmap::get_config())
    }
}

/// The signed-in user and their location. Started on sign-in, torn down on
/// sign-out.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct CurrentSession(pub Session);

/// Moods known to this client, newest first, capped at the feed limit.
#[derive(Resource)]
pub struct RecentMoods {
    events: VecDeque<MoodEvent>,
    limit: usize,
}

impl Default for RecentMoods {
    fn default() -> Self {
        Self::with_limit(moodmap::get_config().feed.recent_limit)
    }
}

impl RecentMoods {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(limit),
            limit,
        }
    }

    pub fn push(&mut self, event: MoodEvent) {
        self.events.push_front(event);
        self.events.truncate(self.limit);
    }

    /// Replaces everything with `events`, which must already be newest first.
    pub fn replace(&mut self, events: impl IntoIterator<Item = MoodEvent>) {
        self.events = events.into_iter().take(self.limit).collect();
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoodEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodmap::{GeoPoint, Mood};

    fn event(timestamp: u64) -> MoodEvent {
        MoodEvent::new(GeoPoint::ORIGIN, Mood::Work, timestamp)
    }

    #[test]
    fn push_keeps_newest_first_within_limit() {
        let mut recent = RecentMoods::with_limit(2);
        recent.push(event(1));
        recent.push(event(2));
        recent.push(event(3));

        let timestamps: Vec<u64> = recent.iter().map(|e| e.timestamp).collect();
        assert_eq!(timestamps, vec![3, 2]);
    }

    #[test]
    fn replace_truncates_to_limit() {
        let mut recent = RecentMoods::with_limit(3);
        recent.push(event(99));
        recent.replace((0..5).rev().map(event));

        assert_eq!(recent.len(), 3);
        assert_eq!(recent.iter().next().map(|e| e.timestamp), Some(4));
    }
}
