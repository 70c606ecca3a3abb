use bevy::input::mouse::MouseScrollUnit;
use bevy::prelude::*;

use super::OrbitConfig;
use super::entities::{OrbitInput, OrbitState, Viewer};
use crate::intro::IntroConfig;
use crate::math;

/// Spawns the Camera3d entity at the fly-in start pose, aimed at the target.
pub fn spawn_viewer(
    mut commands: Commands,
    cfg: Res<OrbitConfig>,
    intro_cfg: Res<IntroConfig>,
    state: Res<OrbitState>,
) {
    commands.spawn((
        Name::new("Viewer"),
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: cfg.fov.to_radians(),
            ..default()
        }),
        Transform::from_translation(intro_cfg.start).looking_at(state.target, Vec3::Y),
        Viewer,
    ));
}

/// Left-drag orbit, right-drag pan, scroll zoom. Rebuilds the camera
/// transform from the spherical state every frame.
pub fn orbit(mut input: OrbitInput, mut query: Query<&mut Transform, With<Viewer>>) {
    let Ok(mut transform) = query.single_mut() else {
        return;
    };

    // First controlled frame: adopt whatever pose the fly-in left behind.
    if !input.state.synced {
        input.state.synced = true;
        let (yaw, pitch, radius) = math::look_angles(transform.translation - input.state.target);
        input.state.yaw = yaw;
        input.state.pitch = pitch;
        input.state.radius = radius;
    }

    let mut drag = Vec2::ZERO;
    for ev in input.mouse_motion.read() {
        drag += ev.delta;
    }

    if input.buttons.pressed(MouseButton::Left) && drag != Vec2::ZERO {
        input.state.yaw -= drag.x * input.cfg.rotate_sensitivity;
        let pitch_delta = math::clamp_pitch(
            input.state.pitch,
            -drag.y * input.cfg.rotate_sensitivity,
            input.cfg.pitch_margin,
        );
        input.state.pitch += pitch_delta;
    } else if input.buttons.pressed(MouseButton::Right) && drag != Vec2::ZERO {
        // Pan in the camera plane, scaled by distance so it feels constant.
        let step = input.state.radius * input.cfg.pan_sensitivity;
        let right = transform.right();
        let up = transform.up();
        input.state.target += (up * drag.y - right * drag.x) * step;
    }

    for ev in input.scroll.read() {
        let lines = match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / 40.0,
        };
        input.state.radius = math::zoom_radius(
            input.state.radius,
            lines,
            input.cfg.zoom_speed,
            input.cfg.min_radius,
            input.cfg.max_radius,
        );
    }

    let OrbitState {
        target,
        yaw,
        pitch,
        radius,
        ..
    } = *input.state;
    transform.translation = target + math::orbit_offset(yaw, pitch, radius);
    transform.look_at(target, Vec3::Y);
}
