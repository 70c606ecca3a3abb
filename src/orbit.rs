//! Orbit camera control.
//!
//! Left-drag orbits around the focus point, right-drag pans it, scroll
//! zooms. Spawns the Camera3d entity and takes over from [`crate::intro`]
//! once the fly-in completes.

mod entities;
mod systems;

pub use entities::{OrbitState, Viewer};

use bevy::prelude::*;

use crate::GameState;

/// Per-plugin configuration for the orbit controller.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct OrbitConfig {
    /// Vertical field of view (degrees).
    pub fov: f32,
    /// Orbit sensitivity (radians per pixel of drag).
    pub rotate_sensitivity: f32,
    /// Pan sensitivity (fraction of the orbit radius per pixel of drag).
    pub pan_sensitivity: f32,
    /// Scroll zoom speed multiplier.
    pub zoom_speed: f32,
    /// Margin from vertical to prevent camera flip (radians).
    pub pitch_margin: f32,
    /// Closest allowed orbit distance.
    pub min_radius: f32,
    /// Farthest allowed orbit distance.
    pub max_radius: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            fov: 65.0,
            rotate_sensitivity: 0.005,
            pan_sensitivity: 0.002,
            zoom_speed: 1.0,
            pitch_margin: 0.05,
            min_radius: 1.0,
            max_radius: 40.0,
        }
    }
}

/// Orbit/pan/zoom camera controller. Spawns the Camera3d entity.
pub struct OrbitPlugin(pub OrbitConfig);

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Viewer>()
            .register_type::<OrbitConfig>()
            .insert_resource(self.0.clone())
            .init_resource::<OrbitState>()
            .add_systems(Startup, systems::spawn_viewer)
            .add_systems(
                Update,
                systems::orbit.run_if(in_state(GameState::Running)),
            );
    }
}
