use bevy::prelude::*;
use moodmap::backend::{AuthUser, BackendError, Credentials, NewStatus, StatusId, StatusRecord};
use moodmap::{GeoPoint, Mood};

/// Work for the backend or the locator, run off the main thread.
#[derive(Message, Debug, Clone)]
pub enum RemoteRequest {
    SignUp(Credentials),
    SignIn(Credentials),
    SignOut { uid: String },
    SubmitMood(NewStatus),
    LoadRecent { limit: usize },
    Locate,
}

/// Result of a finished [`RemoteRequest`].
#[derive(Message, Debug, Clone)]
pub enum RemoteOutcome {
    Authenticated(Result<AuthUser, BackendError>),
    SignedOut(Result<(), BackendError>),
    MoodSaved(Result<StatusId, BackendError>),
    /// Newest first.
    RecentLoaded(Result<Vec<StatusRecord>, BackendError>),
    Located(GeoPoint),
}

/// The user picked a mood in the mood bar.
#[derive(Message, Debug, Clone, Copy)]
pub struct MoodSelected {
    pub mood: Mood,
}
