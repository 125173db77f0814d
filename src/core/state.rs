use bevy::prelude::States;

/// Mirrors the backend's auth state: the globe is always rendered, the UI on
/// top of it depends on whether someone is signed in.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub(crate) enum AppState {
    #[default]
    SignedOut,
    SignedIn,
}
