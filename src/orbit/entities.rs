use bevy::ecs::system::SystemParam;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use super::OrbitConfig;

/// Marker component for the user-controlled camera entity.
#[derive(Component, Reflect)]
pub struct Viewer;

/// Spherical camera state around a focus point.
///
/// Yaw/pitch/radius are synced from the camera transform on the first
/// controlled frame, so the handoff from the fly-in is seamless.
#[derive(Resource, Default)]
pub struct OrbitState {
    /// Point the camera orbits and looks at.
    pub target: Vec3,
    /// Rotation around +Y (radians).
    pub yaw: f32,
    /// Elevation above the horizontal plane (radians).
    pub pitch: f32,
    /// Distance from the target.
    pub radius: f32,
    /// Whether yaw/pitch/radius have been adopted from the transform.
    pub synced: bool,
}

/// Bundled input parameters for the orbit controller.
#[derive(SystemParam)]
pub struct OrbitInput<'w, 's> {
    /// Mouse button state.
    pub buttons: Res<'w, ButtonInput<MouseButton>>,
    /// Mouse movement since the last frame.
    pub mouse_motion: MessageReader<'w, 's, MouseMotion>,
    /// Scroll wheel messages.
    pub scroll: MessageReader<'w, 's, MouseWheel>,
    /// Controller configuration.
    pub cfg: Res<'w, OrbitConfig>,
    /// Spherical camera state.
    pub state: ResMut<'w, OrbitState>,
}
