mod core;
mod globe;
mod remote;
mod ui;

use crate::core::camera::CameraPlugin;
use crate::core::resources::{CurrentSession, RecentMoods, Settings};
use crate::core::state::AppState;
use crate::core::systems::reload_settings_on_key;
use crate::globe::GlobePlugin;
use crate::remote::RemotePlugin;
use crate::ui::UIPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub struct MosaicPlugin;

impl Plugin for MosaicPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<Settings>()
            .init_resource::<CurrentSession>()
            .init_resource::<RecentMoods>()
            .add_systems(Update, reload_settings_on_key)
            .add_plugins((
                EguiPlugin::default(),
                CameraPlugin,
                GlobePlugin,
                RemotePlugin,
                UIPlugin,
            ));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
