use bevy::prelude::*;
use moodmap::stats::RegionalStats;

/// Contents of the sign-in card.
#[derive(Resource, Default)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    /// Creating an account rather than signing in to one.
    pub registering: bool,
    /// A request is in flight; the submit button is disabled until it resolves.
    pub pending: bool,
}

/// A blocking message the user must dismiss, used for auth failures.
#[derive(Resource, Default)]
pub struct Notification {
    message: Option<String>,
}

impl Notification {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// The regional statistics overlay; hidden while `None`.
#[derive(Resource, Default)]
pub struct StatsPanel {
    pub stats: Option<RegionalStats>,
}
