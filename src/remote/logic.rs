use crate::globe::events::PaintMoodEvent;
use crate::remote::events::{RemoteOutcome, RemoteRequest};
use moodmap::backend::{MoodBackend, StatusRecord, events_from_records};
use moodmap::session::{GeoLocator, resolve_location};
use moodmap::MoodEvent;

/// Runs one request to completion. Blocking; called from the IO task pool.
pub fn run_request(
    backend: &dyn MoodBackend,
    locator: &dyn GeoLocator,
    request: RemoteRequest,
) -> RemoteOutcome {
    match request {
        RemoteRequest::SignUp(credentials) => {
            RemoteOutcome::Authenticated(backend.sign_up(&credentials))
        }
        RemoteRequest::SignIn(credentials) => {
            RemoteOutcome::Authenticated(backend.sign_in(&credentials))
        }
        RemoteRequest::SignOut { uid } => RemoteOutcome::SignedOut(backend.sign_out(&uid)),
        RemoteRequest::SubmitMood(status) => RemoteOutcome::MoodSaved(backend.add_status(status)),
        RemoteRequest::LoadRecent { limit } => {
            RemoteOutcome::RecentLoaded(backend.recent_statuses(limit))
        }
        RemoteRequest::Locate => RemoteOutcome::Located(resolve_location(locator)),
    }
}

/// Turns a newest-first record page into the feed and the paint order.
///
/// Painting runs oldest to newest so that where moods overlap the latest
/// one is left on top. Malformed records are skipped.
pub fn replay_records(records: &[StatusRecord]) -> (Vec<MoodEvent>, Vec<PaintMoodEvent>) {
    let events = events_from_records(records);
    let paints = events
        .iter()
        .rev()
        .map(|event| PaintMoodEvent {
            geo_point: event.geo_point,
            mood: event.mood,
        })
        .collect();
    (events, paints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodmap::backend::{BackendError, Credentials, MemoryBackend, NewStatus};
    use moodmap::session::FixedLocator;
    use moodmap::{GeoPoint, Mood};
    use rstest::rstest;

    fn record(id: u64, mood: &str, lat: Option<f64>, lng: Option<f64>) -> StatusRecord {
        StatusRecord {
            id,
            uid: "someone".into(),
            mood: mood.into(),
            lat,
            lng,
            timestamp: 1_000 + id,
        }
    }

    #[test]
    fn sign_up_then_submit_and_load() {
        let backend = MemoryBackend::new();
        let locator = FixedLocator::default();

        let RemoteOutcome::Authenticated(Ok(user)) = run_request(
            &backend,
            &locator,
            RemoteRequest::SignUp(Credentials::new("ana@example.com", "secret1")),
        ) else {
            panic!("sign up failed");
        };

        let saved = run_request(
            &backend,
            &locator,
            RemoteRequest::SubmitMood(NewStatus {
                uid: user.uid.clone(),
                mood: Mood::Create,
                geo_point: GeoPoint::new(10.0, 20.0),
            }),
        );
        assert!(matches!(saved, RemoteOutcome::MoodSaved(Ok(_))));

        let RemoteOutcome::RecentLoaded(Ok(records)) =
            run_request(&backend, &locator, RemoteRequest::LoadRecent { limit: 10 })
        else {
            panic!("load failed");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].uid, user.uid);
    }

    #[test]
    fn wrong_password_is_reported_not_panicked() {
        let backend = MemoryBackend::new();
        let locator = FixedLocator::default();
        let outcome = run_request(
            &backend,
            &locator,
            RemoteRequest::SignIn(Credentials::new("nobody@example.com", "whatever")),
        );
        assert!(matches!(
            outcome,
            RemoteOutcome::Authenticated(Err(BackendError::InvalidCredential))
        ));
    }

    #[rstest]
    #[case(None, GeoPoint::ORIGIN)]
    #[case(Some(GeoPoint::new(48.85, 2.35)), GeoPoint::new(48.85, 2.35))]
    fn locate_falls_back_to_origin(#[case] fixed: Option<GeoPoint>, #[case] expected: GeoPoint) {
        let outcome = run_request(
            &MemoryBackend::new(),
            &FixedLocator::new(fixed),
            RemoteRequest::Locate,
        );
        assert!(matches!(outcome, RemoteOutcome::Located(point) if point == expected));
    }

    #[test]
    fn replay_paints_oldest_first_and_skips_bad_records() {
        // newest first, as the backend returns them
        let records = vec![
            record(3, "WORK", Some(1.0), Some(1.0)),
            record(2, "DEFAULT", Some(2.0), Some(2.0)),
            record(1, "SLEEP", None, Some(3.0)),
            record(0, "ANXIOUS", Some(0.0), Some(0.0)),
        ];
        let (events, paints) = replay_records(&records);

        let moods: Vec<Mood> = events.iter().map(|e| e.mood).collect();
        assert_eq!(moods, vec![Mood::Work, Mood::Anxious]);

        let painted: Vec<Mood> = paints.iter().map(|p| p.mood).collect();
        assert_eq!(painted, vec![Mood::Anxious, Mood::Work]);
        // zero coordinates are a real place
        assert_eq!(paints[0].geo_point, GeoPoint::ORIGIN);
    }
}
