pub mod camera;
pub mod resources;
pub mod state;
pub mod systems;
