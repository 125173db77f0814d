mod logic;
pub mod resources;
mod systems;

use crate::core::state::AppState;
use crate::ui::resources::{AuthForm, Notification, StatsPanel};
use crate::ui::systems::*;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AuthForm>()
            .init_resource::<Notification>()
            .init_resource::<StatsPanel>()
            .add_systems(OnEnter(AppState::SignedOut), reset_auth_form)
            .add_systems(OnExit(AppState::SignedIn), close_stats_panel)
            .add_systems(
                Update,
                (
                    settle_auth_form,
                    open_stats_on_double_click.run_if(in_state(AppState::SignedIn)),
                ),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    auth_card_ui.run_if(in_state(AppState::SignedOut)),
                    (mood_bar_ui, stats_panel_ui).run_if(in_state(AppState::SignedIn)),
                    notification_ui,
                )
                    .chain(),
            );
    }
}
