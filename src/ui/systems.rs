use crate::core::camera::components::MainCamera;
use crate::core::resources::{CurrentSession, RecentMoods, Settings};
use crate::globe::components::{GlobeEntity, GlobeVertices};
use crate::remote::events::{MoodSelected, RemoteOutcome, RemoteRequest};
use crate::ui::logic::{ClickTracker, pick_geo_point};
use crate::ui::resources::{AuthForm, Notification, StatsPanel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContexts, egui};
use moodmap::backend::Credentials;
use moodmap::stats::RegionalStats;
use moodmap::{Mood, Rgb};

const CARD_WIDTH: f32 = 320.0;

fn color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

pub fn auth_card_ui(
    mut contexts: EguiContexts,
    mut form: ResMut<AuthForm>,
    mut requests: MessageWriter<RemoteRequest>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Mood Mosaic")
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .default_width(CARD_WIDTH)
        .show(ctx, |ui| {
            ui.label("Share how you feel and watch the world light up.");
            ui.add_space(8.0);

            ui.add(egui::TextEdit::singleline(&mut form.email).hint_text("Email"));
            let password = ui.add(
                egui::TextEdit::singleline(&mut form.password)
                    .password(true)
                    .hint_text("Password"),
            );
            let entered =
                password.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
            ui.add_space(8.0);

            let label = if form.registering {
                "Register"
            } else {
                "Connect to Mosaic"
            };
            let ready = !form.pending && !form.email.trim().is_empty();
            let clicked = ui.add_enabled(ready, egui::Button::new(label)).clicked();

            if (clicked || (entered && ready)) && !form.pending {
                let credentials = Credentials::new(form.email.trim(), form.password.clone());
                requests.write(if form.registering {
                    RemoteRequest::SignUp(credentials)
                } else {
                    RemoteRequest::SignIn(credentials)
                });
                form.pending = true;
            }

            ui.add_space(4.0);
            let toggle = if form.registering {
                "Have an account? Sign in"
            } else {
                "New here? Register"
            };
            if ui.link(toggle).clicked() {
                form.registering = !form.registering;
            }
        });
}

/// Re-enables the sign-in card once an auth attempt has resolved.
pub fn settle_auth_form(mut outcomes: MessageReader<RemoteOutcome>, mut form: ResMut<AuthForm>) {
    for outcome in outcomes.read() {
        if matches!(outcome, RemoteOutcome::Authenticated(_)) {
            form.pending = false;
        }
    }
}

pub fn reset_auth_form(mut form: ResMut<AuthForm>) {
    form.password.clear();
    form.pending = false;
}

pub fn mood_bar_ui(
    mut contexts: EguiContexts,
    session: Res<CurrentSession>,
    mut selections: MessageWriter<MoodSelected>,
    mut requests: MessageWriter<RemoteRequest>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("mood_bar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            ui.label("How do you feel?");
            for mood in Mood::ALL {
                let text = egui::RichText::new(mood.label()).color(egui::Color32::BLACK);
                let button = egui::Button::new(text).fill(color32(mood.color()));
                if ui.add(button).clicked() {
                    selections.write(MoodSelected { mood });
                }
            }
        });
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if let Some(user) = session.user() {
                ui.label(user.email.as_str());
                let location = session.location();
                ui.weak(format!("({:.2}, {:.2})", location.lat, location.lng));
                if ui.button("Logout").clicked() {
                    requests.write(RemoteRequest::SignOut {
                        uid: user.uid.clone(),
                    });
                }
            }
        });
        ui.add_space(6.0);
    });
}

pub fn stats_panel_ui(mut contexts: EguiContexts, mut panel: ResMut<StatsPanel>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Some(stats) = &panel.stats else {
        return;
    };

    let mut open = true;
    egui::Window::new("Mood around here")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(CARD_WIDTH)
        .show(ctx, |ui| {
            ui.label(format!(
                "Within {:.0}° of ({:.1}, {:.1})",
                stats.radius_deg, stats.center.lat, stats.center.lng
            ));
            ui.add_space(6.0);

            if stats.is_empty() {
                ui.weak("Nobody has shared a mood here yet.");
                return;
            }

            for share in &stats.shares {
                ui.horizontal(|ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(swatch, 2.0, color32(share.mood.color()));
                    ui.label(share.mood.label());
                    ui.add(
                        egui::ProgressBar::new(share.percent as f32 / 100.0)
                            .text(format!("{}% ({})", share.percent, share.count)),
                    );
                });
            }
            ui.weak(format!("{} moods in total", stats.total));
        });

    if !open {
        panel.stats = None;
    }
}

pub fn notification_ui(mut contexts: EguiContexts, mut notification: ResMut<Notification>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Some(message) = notification.message().map(str::to_owned) else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("notification")).show(ctx, |ui| {
        ui.set_width(CARD_WIDTH - 40.0);
        ui.label(message);
        ui.add_space(8.0);
        ui.button("OK").clicked()
    });

    if modal.inner || modal.should_close() {
        notification.dismiss();
    }
}

/// Double-clicking the globe opens the mood distribution around that spot.
pub fn open_stats_on_double_click(
    mouse_input: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    globe_q: Query<(&GlobalTransform, &GlobeVertices), With<GlobeEntity>>,
    mut contexts: EguiContexts,
    settings: Res<Settings>,
    recent: Res<RecentMoods>,
    mut panel: ResMut<StatsPanel>,
    mut clicks: Local<ClickTracker>,
) {
    if !mouse_input.just_pressed(MouseButton::Left) {
        return;
    }
    let over_ui = contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false);
    if over_ui {
        return;
    }

    let Some(cursor) = windows.single().ok().and_then(Window::cursor_position) else {
        return;
    };
    if !clicks.register(time.elapsed_secs_f64(), cursor) {
        return;
    }

    let (Ok((camera, camera_transform)), Ok((globe_transform, vertices))) =
        (camera_q.single(), globe_q.single())
    else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };
    let Some(center) = pick_geo_point(
        ray.origin,
        *ray.direction,
        &globe_transform.affine(),
        vertices.radius,
    ) else {
        return;
    };

    let stats = RegionalStats::around(center, settings.stats.region_radius_deg, recent.iter());
    debug!(
        "Stats around ({:.2}, {:.2}): {} moods",
        center.lat, center.lng, stats.total
    );
    panel.stats = Some(stats);
}

pub fn close_stats_panel(mut panel: ResMut<StatsPanel>) {
    panel.stats = None;
}
