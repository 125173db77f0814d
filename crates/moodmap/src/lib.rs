pub mod backend;
pub mod config;
pub mod geo;
pub mod mesh_data;
pub mod mood;
pub mod paint;
pub mod session;
pub mod stats;

pub use config::{get_config, reload_config};
pub use geo::GeoPoint;
pub use mood::{Mood, MoodEvent, Rgb};
