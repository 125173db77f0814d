use crate::core::resources::{CurrentSession, RecentMoods, Settings};
use crate::core::state::AppState;
use crate::globe::events::PaintMoodEvent;
use crate::remote::components::RemoteTask;
use crate::remote::events::{MoodSelected, RemoteOutcome, RemoteRequest};
use crate::remote::logic::{replay_records, run_request};
use crate::remote::resources::{Backend, Locator};
use crate::ui::resources::Notification;
use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, block_on, futures_lite::future};
use moodmap::backend::{NewStatus, unix_millis};
use moodmap::MoodEvent;

pub fn dispatch_remote_requests(
    mut commands: Commands,
    mut requests: MessageReader<RemoteRequest>,
    backend: Res<Backend>,
    locator: Res<Locator>,
) {
    let pool = IoTaskPool::get();
    for request in requests.read() {
        debug!("Dispatching {request:?}");
        let backend = backend.0.clone();
        let locator = locator.0.clone();
        let request = request.clone();
        let task = pool.spawn(async move { run_request(&*backend, &*locator, request) });
        commands.spawn(RemoteTask(task));
    }
}

pub fn poll_remote_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut RemoteTask)>,
    mut outcomes: MessageWriter<RemoteOutcome>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(outcome) = block_on(future::poll_once(&mut task.0)) {
            outcomes.write(outcome);
            commands.entity(entity).despawn();
        }
    }
}

pub fn handle_remote_outcomes(
    mut outcomes: MessageReader<RemoteOutcome>,
    mut session: ResMut<CurrentSession>,
    mut recent: ResMut<RecentMoods>,
    mut notification: ResMut<Notification>,
    mut next_state: ResMut<NextState<AppState>>,
    mut paint_events: MessageWriter<PaintMoodEvent>,
) {
    for outcome in outcomes.read() {
        match outcome {
            RemoteOutcome::Authenticated(Ok(user)) => {
                session.start(user.clone());
                next_state.set(AppState::SignedIn);
            }
            RemoteOutcome::Authenticated(Err(err)) => {
                warn!("Authentication failed: {err}");
                notification.show(err.to_string());
            }
            RemoteOutcome::SignedOut(result) => {
                if let Err(err) = result {
                    warn!("Backend sign-out failed, ending local session anyway: {err}");
                }
                session.end();
                recent.clear();
                next_state.set(AppState::SignedOut);
            }
            RemoteOutcome::MoodSaved(Ok(id)) => info!("Mood saved as #{id}"),
            RemoteOutcome::MoodSaved(Err(err)) => error!("Error saving mood: {err}"),
            RemoteOutcome::RecentLoaded(Ok(records)) => {
                let (events, paints) = replay_records(records);
                paint_events.write_batch(paints);
                recent.replace(events);
                info!(
                    "Replayed {} of {} recent moods",
                    recent.len(),
                    records.len()
                );
            }
            RemoteOutcome::RecentLoaded(Err(err)) => warn!("Could not load recent moods: {err}"),
            RemoteOutcome::Located(point) => {
                info!("Located at ({:.2}, {:.2})", point.lat, point.lng);
                session.set_location(*point);
            }
        }
    }
}

/// Paints the chosen mood at once, then stores it in the background.
pub fn submit_selected_moods(
    mut selections: MessageReader<MoodSelected>,
    session: Res<CurrentSession>,
    mut recent: ResMut<RecentMoods>,
    mut paint_events: MessageWriter<PaintMoodEvent>,
    mut requests: MessageWriter<RemoteRequest>,
) {
    for MoodSelected { mood } in selections.read() {
        let Some(user) = session.user() else {
            warn!("Ignoring {mood}: nobody is signed in");
            continue;
        };
        let geo_point = session.location();

        paint_events.write(PaintMoodEvent {
            geo_point,
            mood: *mood,
        });
        recent.push(MoodEvent::new(geo_point, *mood, unix_millis()));
        requests.write(RemoteRequest::SubmitMood(NewStatus {
            uid: user.uid.clone(),
            mood: *mood,
            geo_point,
        }));
    }
}

pub fn request_initial_data(settings: Res<Settings>, mut requests: MessageWriter<RemoteRequest>) {
    requests.write(RemoteRequest::Locate);
    requests.write(RemoteRequest::LoadRecent {
        limit: settings.feed.recent_limit,
    });
}
