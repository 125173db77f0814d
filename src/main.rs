// disable console on windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::DefaultPlugins;
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use mood_mosaic::MosaicPlugin;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb_u8(0x05, 0x05, 0x08)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Mood Mosaic".into(),
                resolution: WindowResolution::new(1280, 800),
                present_mode: PresentMode::AutoVsync,
                // follow the browser window on wasm
                fit_canvas_to_parent: true,
                resize_constraints: WindowResizeConstraints {
                    min_width: 480.0,
                    min_height: 360.0,
                    ..default()
                },
                ..default()
            }),
            ..default()
        }))
        .add_plugins(MosaicPlugin)
        .run();
}
