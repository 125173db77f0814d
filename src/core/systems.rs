use crate::core::resources::Settings;
use bevy::prelude::*;

/// F5 re-reads `moodmap_config.toml`. Camera, painting and animation values
/// apply at once; the mesh keeps the radius and detail it was built with.
pub fn reload_settings_on_key(keys: Res<ButtonInput<KeyCode>>, mut settings: ResMut<Settings>) {
    if !keys.just_pressed(KeyCode::F5) {
        return;
    }

    match moodmap::reload_config() {
        Ok(()) => {
            settings.0 = moodmap::get_config();
            info!("Settings reloaded");
        }
        Err(err) => warn!("Keeping current settings: {err}"),
    }
}
