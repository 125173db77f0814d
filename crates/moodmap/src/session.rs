use crate::backend::AuthUser;
use crate::geo::GeoPoint;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeoError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("no location source available")]
    Unavailable,
}

/// Where the current user is, as far as we can tell.
pub trait GeoLocator: Send + Sync {
    fn locate(&self) -> Result<GeoPoint, GeoError>;
}

/// Reports a configured coordinate, or [`GeoError::Unavailable`] when none is
/// set.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocator {
    point: Option<GeoPoint>,
}

impl FixedLocator {
    pub fn new(point: Option<GeoPoint>) -> Self {
        Self { point }
    }
}

impl GeoLocator for FixedLocator {
    fn locate(&self) -> Result<GeoPoint, GeoError> {
        self.point.ok_or(GeoError::Unavailable)
    }
}

/// Asks the locator for a position and falls back to [`GeoPoint::ORIGIN`].
/// Failures are logged, never surfaced.
pub fn resolve_location(locator: &dyn GeoLocator) -> GeoPoint {
    match locator.locate() {
        Ok(point) => point,
        Err(err) => {
            log::warn!("geolocation failed ({err}), using default location");
            GeoPoint::ORIGIN
        }
    }
}

/// Process-wide session context: who is signed in and where they are.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<AuthUser>,
    location: GeoPoint,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, user: AuthUser) {
        log::info!("session started for {}", user.email);
        self.user = Some(user);
    }

    /// Clears the user and forgets the location.
    pub fn end(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("session ended for {}", user.email);
        }
        self.location = GeoPoint::ORIGIN;
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    pub fn set_location(&mut self, location: GeoPoint) {
        self.location = location;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DeniedLocator;

    impl GeoLocator for DeniedLocator {
        fn locate(&self) -> Result<GeoPoint, GeoError> {
            Err(GeoError::PermissionDenied)
        }
    }

    fn user() -> AuthUser {
        AuthUser {
            uid: "uid-1".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn denied_location_falls_back_to_origin() {
        assert_eq!(resolve_location(&DeniedLocator), GeoPoint::ORIGIN);
        assert_eq!(resolve_location(&FixedLocator::default()), GeoPoint::ORIGIN);
    }

    #[test]
    fn fixed_locator_reports_its_point() {
        let paris = GeoPoint::new(48.85, 2.35);
        assert_eq!(resolve_location(&FixedLocator::new(Some(paris))), paris);
    }

    #[test]
    fn session_lifecycle() {
        let mut session = Session::new();
        assert!(!session.is_signed_in());

        session.start(user());
        session.set_location(GeoPoint::new(10.0, 20.0));
        assert_eq!(session.user().map(|u| u.uid.as_str()), Some("uid-1"));
        assert_eq!(session.location(), GeoPoint::new(10.0, 20.0));

        session.end();
        assert!(!session.is_signed_in());
        assert_eq!(session.location(), GeoPoint::ORIGIN);
    }
}
