//! Auth and storage seam.
//!
//! The app talks to whatever hosts accounts and mood records through
//! [`MoodBackend`]. [`MemoryBackend`] keeps everything in process and follows
//! the same observable rules as a hosted email/password service.

use crate::geo::GeoPoint;
use crate::mood::{Mood, MoodEvent};
use rand::Rng;
use rand::distr::Alphanumeric;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

pub type StatusId = u64;

const MIN_PASSWORD_LEN: usize = 6;
const UID_LEN: usize = 28;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("The email address is badly formatted.")]
    InvalidEmail,
    #[error("Password should be at least 6 characters.")]
    WeakPassword,
    #[error("The email address is already in use by another account.")]
    EmailInUse,
    #[error("Invalid email or password.")]
    InvalidCredential,
    #[error("You must be signed in to do that.")]
    NotSignedIn,
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
}

/// A mood about to be written. The timestamp is assigned by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStatus {
    pub uid: String,
    pub mood: Mood,
    pub geo_point: GeoPoint,
}

/// A stored mood record as the backend returns it.
///
/// The mood stays a raw key and coordinates are optional because records
/// written by other clients are not guaranteed to be well formed.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRecord {
    pub id: StatusId,
    pub uid: String,
    pub mood: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub timestamp: u64,
}

impl StatusRecord {
    /// `None` for records with an unknown mood or missing coordinates.
    pub fn to_event(&self) -> Option<MoodEvent> {
        let mood = Mood::from_key(&self.mood)?;
        let geo_point = GeoPoint::new(self.lat?, self.lng?);
        Some(MoodEvent::new(geo_point, mood, self.timestamp))
    }
}

/// Converts records to events, dropping malformed ones and keeping order.
pub fn events_from_records(records: &[StatusRecord]) -> Vec<MoodEvent> {
    records.iter().filter_map(StatusRecord::to_event).collect()
}

pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

/// Email/password accounts plus an append-only mood log.
///
/// Calls are blocking; the app runs them on a task pool.
pub trait MoodBackend: Send + Sync {
    /// Creates an account and signs it in.
    fn sign_up(&self, credentials: &Credentials) -> Result<AuthUser, BackendError>;
    fn sign_in(&self, credentials: &Credentials) -> Result<AuthUser, BackendError>;
    fn sign_out(&self, uid: &str) -> Result<(), BackendError>;
    fn add_status(&self, status: NewStatus) -> Result<StatusId, BackendError>;
    /// Most recent records first, at most `limit` of them.
    fn recent_statuses(&self, limit: usize) -> Result<Vec<StatusRecord>, BackendError>;
}

struct Account {
    uid: String,
    password: String,
}

#[derive(Default)]
struct MemoryStore {
    accounts: HashMap<String, Account>,
    signed_in: HashSet<String>,
    statuses: Vec<StatusRecord>,
    last_timestamp: u64,
}

impl MemoryStore {
    /// Wall-clock milliseconds, bumped so that no two writes share a value.
    fn next_timestamp(&mut self) -> u64 {
        self.last_timestamp = unix_millis().max(self.last_timestamp + 1);
        self.last_timestamp
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    store: Mutex<MemoryStore>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> Result<MutexGuard<'_, MemoryStore>, BackendError> {
        self.store
            .lock()
            .map_err(|_| BackendError::Unavailable("store lock poisoned".to_string()))
    }
}

fn validate_email(email: &str) -> Result<(), BackendError> {
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && domain.contains('.') && !domain.ends_with('.') =>
        {
            Ok(())
        }
        _ => Err(BackendError::InvalidEmail),
    }
}

fn generate_uid() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(UID_LEN)
        .map(char::from)
        .collect()
}

impl MoodBackend for MemoryBackend {
    fn sign_up(&self, credentials: &Credentials) -> Result<AuthUser, BackendError> {
        let email = credentials.email.trim().to_lowercase();
        validate_email(&email)?;
        if credentials.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(BackendError::WeakPassword);
        }

        let mut store = self.store()?;
        if store.accounts.contains_key(&email) {
            return Err(BackendError::EmailInUse);
        }

        let uid = generate_uid();
        store.accounts.insert(
            email.clone(),
            Account {
                uid: uid.clone(),
                password: credentials.password.clone(),
            },
        );
        store.signed_in.insert(uid.clone());
        log::info!("created account {uid}");

        Ok(AuthUser { uid, email })
    }

    fn sign_in(&self, credentials: &Credentials) -> Result<AuthUser, BackendError> {
        let email = credentials.email.trim().to_lowercase();
        validate_email(&email)?;

        let mut store = self.store()?;
        let uid = match store.accounts.get(&email) {
            Some(account) if account.password == credentials.password => account.uid.clone(),
            _ => return Err(BackendError::InvalidCredential),
        };
        store.signed_in.insert(uid.clone());

        Ok(AuthUser { uid, email })
    }

    fn sign_out(&self, uid: &str) -> Result<(), BackendError> {
        self.store()?.signed_in.remove(uid);
        Ok(())
    }

    fn add_status(&self, status: NewStatus) -> Result<StatusId, BackendError> {
        let mut store = self.store()?;
        if !store.signed_in.contains(&status.uid) {
            return Err(BackendError::NotSignedIn);
        }

        let id = store.statuses.len() as StatusId + 1;
        let timestamp = store.next_timestamp();
        store.statuses.push(StatusRecord {
            id,
            uid: status.uid,
            mood: status.mood.key().to_string(),
            lat: Some(status.geo_point.lat),
            lng: Some(status.geo_point.lng),
            timestamp,
        });
        Ok(id)
    }

    fn recent_statuses(&self, limit: usize) -> Result<Vec<StatusRecord>, BackendError> {
        let store = self.store()?;
        let mut records = store.statuses.clone();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(limit);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn signed_up(backend: &MemoryBackend) -> AuthUser {
        backend
            .sign_up(&Credentials::new("ada@example.com", "secret-pass"))
            .unwrap()
    }

    fn status(uid: &str, mood: Mood, lat: f64, lng: f64) -> NewStatus {
        NewStatus {
            uid: uid.to_string(),
            mood,
            geo_point: GeoPoint::new(lat, lng),
        }
    }

    #[rstest]
    #[case("not-an-email", "secret-pass", BackendError::InvalidEmail)]
    #[case("@example.com", "secret-pass", BackendError::InvalidEmail)]
    #[case("ada@localhost", "secret-pass", BackendError::InvalidEmail)]
    #[case("ada@example.com", "12345", BackendError::WeakPassword)]
    fn sign_up_rejects_bad_input(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: BackendError,
    ) {
        let backend = MemoryBackend::new();
        let result = backend.sign_up(&Credentials::new(email, password));
        assert_eq!(result, Err(expected));
    }

    #[test]
    fn debug_output_hides_the_password() {
        let printed = format!("{:?}", Credentials::new("ada@example.com", "hunter22"));
        assert!(printed.contains("ada@example.com"));
        assert!(!printed.contains("hunter22"));
    }

    #[test]
    fn sign_up_then_sign_in_returns_same_uid() {
        let backend = MemoryBackend::new();
        let created = signed_up(&backend);
        assert_eq!(created.uid.len(), UID_LEN);

        let again = backend
            .sign_in(&Credentials::new("  ADA@example.com ", "secret-pass"))
            .unwrap();
        assert_eq!(again, created);
    }

    #[test]
    fn duplicate_sign_up_fails() {
        let backend = MemoryBackend::new();
        signed_up(&backend);
        let result = backend.sign_up(&Credentials::new("ada@example.com", "another-pass"));
        assert_eq!(result, Err(BackendError::EmailInUse));
    }

    #[rstest]
    #[case("ada@example.com", "wrong-pass")]
    #[case("bob@example.com", "secret-pass")]
    fn bad_credentials_share_one_error(#[case] email: &str, #[case] password: &str) {
        let backend = MemoryBackend::new();
        signed_up(&backend);
        let result = backend.sign_in(&Credentials::new(email, password));
        assert_eq!(result, Err(BackendError::InvalidCredential));
    }

    #[test]
    fn writes_require_a_signed_in_user() {
        let backend = MemoryBackend::new();
        let user = signed_up(&backend);
        backend.sign_out(&user.uid).unwrap();

        let result = backend.add_status(status(&user.uid, Mood::Work, 10.0, 20.0));
        assert_eq!(result, Err(BackendError::NotSignedIn));
    }

    #[test]
    fn recent_statuses_are_newest_first_and_bounded() {
        let backend = MemoryBackend::new();
        let user = signed_up(&backend);
        for (i, mood) in Mood::ALL.into_iter().enumerate() {
            backend
                .add_status(status(&user.uid, mood, i as f64, i as f64))
                .unwrap();
        }

        let recent = backend.recent_statuses(4).unwrap();
        assert_eq!(recent.len(), 4);
        assert!(recent.windows(2).all(|w| w[0].timestamp > w[1].timestamp));
        assert_eq!(recent[0].mood, "ACTIVE");
        assert_eq!(recent[3].mood, "COMMUTE");
    }

    #[test]
    fn malformed_records_are_skipped() {
        let good = StatusRecord {
            id: 1,
            uid: "u".to_string(),
            mood: "SLEEP".to_string(),
            lat: Some(0.0),
            lng: Some(12.5),
            timestamp: 3,
        };
        let unknown_mood = StatusRecord {
            mood: "DEFAULT".to_string(),
            ..good.clone()
        };
        let missing_lat = StatusRecord {
            lat: None,
            ..good.clone()
        };

        let events = events_from_records(&[unknown_mood, good.clone(), missing_lat]);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].mood, Mood::Sleep);
        assert_eq!(events[0].geo_point, GeoPoint::new(0.0, 12.5));
        assert_eq!(events[0].timestamp, 3);
    }
}
