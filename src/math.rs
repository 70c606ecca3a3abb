//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec3` inputs, making them straightforward to unit-test.

use bevy::prelude::Vec3;

/// Normalized completion fraction of a fixed-duration animation.
///
/// Returns `elapsed / duration` clamped to `[0, 1]`. `duration` must be
/// positive; [`crate::intro::IntroPlugin`] enforces this at construction.
///
/// # Examples
/// ```
/// # use desk_scene::math::animation_progress;
/// assert_eq!(animation_progress(0.0, 1.5), 0.0);
/// assert_eq!(animation_progress(0.75, 1.5), 0.5);
/// assert_eq!(animation_progress(4.0, 1.5), 1.0);
/// ```
pub fn animation_progress(elapsed: f32, duration: f32) -> f32 {
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Camera offset from the orbit target for a yaw/pitch/radius triple.
///
/// Yaw is measured around +Y from the +Z axis, pitch upward from the
/// horizontal plane. `orbit_offset(0, 0, r)` sits on the +Z axis.
pub fn orbit_offset(yaw: f32, pitch: f32, radius: f32) -> Vec3 {
    radius
        * Vec3::new(
            pitch.cos() * yaw.sin(),
            pitch.sin(),
            pitch.cos() * yaw.cos(),
        )
}

/// Decomposes a target-to-camera offset into `(yaw, pitch, radius)`.
///
/// Inverse of [`orbit_offset`]. A zero offset decomposes to all zeros so a
/// degenerate camera pose cannot produce NaN angles.
pub fn look_angles(offset: Vec3) -> (f32, f32, f32) {
    let radius = offset.length();
    if radius <= f32::EPSILON {
        return (0.0, 0.0, 0.0);
    }
    let pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();
    let yaw = offset.x.atan2(offset.z);
    (yaw, pitch, radius)
}

/// Clamps a pitch angle so the camera cannot flip past vertical.
///
/// `current` is the existing pitch in radians. `delta` is the desired change.
/// The result is clamped to `(-PI/2 + margin, PI/2 - margin)` and the
/// *effective* delta is returned (i.e. how much to actually rotate).
pub fn clamp_pitch(current: f32, delta: f32, margin: f32) -> f32 {
    let limit = std::f32::consts::FRAC_PI_2 - margin;
    let clamped = (current + delta).clamp(-limit, limit);
    clamped - current
}

/// Applies scroll-wheel zoom to an orbit radius.
///
/// Each scroll line scales the radius by `0.95^zoom_speed`, so zooming is
/// proportional at any distance. Positive `lines` (wheel up) moves the camera
/// closer. The result is clamped to `[min, max]`.
pub fn zoom_radius(radius: f32, lines: f32, zoom_speed: f32, min: f32, max: f32) -> f32 {
    let scale = 0.95f32.powf(lines * zoom_speed);
    (radius * scale).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── animation_progress ──────────────────────────────────────────

    #[test]
    fn progress_at_start_is_zero() {
        assert_eq!(animation_progress(0.0, 1.5), 0.0);
    }

    #[test]
    fn progress_at_duration_is_one() {
        assert_eq!(animation_progress(1.5, 1.5), 1.0);
    }

    #[test]
    fn progress_at_midpoint_is_half() {
        assert_eq!(animation_progress(0.75, 1.5), 0.5);
    }

    #[test]
    fn progress_clamps_past_duration() {
        assert_eq!(animation_progress(2.0, 1.5), 1.0);
        assert_eq!(animation_progress(1000.0, 1.5), 1.0);
    }

    #[test]
    fn progress_clamps_negative_elapsed() {
        assert_eq!(animation_progress(-0.5, 1.5), 0.0);
    }

    #[test]
    fn progress_is_monotonically_non_decreasing() {
        let steps: Vec<f32> = (0..=100)
            .map(|i| animation_progress(i as f32 * 0.02, 1.5))
            .collect();
        for w in steps.windows(2) {
            assert!(w[1] >= w[0], "progress must be non-decreasing");
        }
    }

    // ── orbit_offset / look_angles ──────────────────────────────────

    #[test]
    fn zero_angles_sit_on_positive_z() {
        let off = orbit_offset(0.0, 0.0, 3.0);
        assert!((off - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn quarter_pitch_matches_fly_in_end_pose() {
        // (0, 4, 4) is pitch 45° at radius √32 looking along +Z.
        let (yaw, pitch, radius) = look_angles(Vec3::new(0.0, 4.0, 4.0));
        assert!(yaw.abs() < 1e-6);
        assert!((pitch - std::f32::consts::FRAC_PI_4).abs() < 1e-5);
        assert!((radius - 32.0f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn offset_and_angles_round_trip() {
        for &v in &[
            Vec3::new(5.0, 5.0, 5.0),
            Vec3::new(0.0, 4.0, 4.0),
            Vec3::new(-2.0, 1.0, 7.0),
            Vec3::new(3.0, -0.5, -3.0),
        ] {
            let (yaw, pitch, radius) = look_angles(v);
            let back = orbit_offset(yaw, pitch, radius);
            assert!((back - v).length() < 1e-4, "round trip failed for {v:?}");
        }
    }

    #[test]
    fn zero_offset_decomposes_without_nan() {
        let (yaw, pitch, radius) = look_angles(Vec3::ZERO);
        assert_eq!((yaw, pitch, radius), (0.0, 0.0, 0.0));
    }

    // ── clamp_pitch ─────────────────────────────────────────────────

    #[test]
    fn small_delta_passes_through() {
        let delta = clamp_pitch(0.0, 0.1, 0.05);
        assert!((delta - 0.1).abs() < 1e-6);
    }

    #[test]
    fn clamps_at_upper_limit() {
        let limit = std::f32::consts::FRAC_PI_2 - 0.05;
        // Already near limit, trying to push past
        let delta = clamp_pitch(limit - 0.01, 0.1, 0.05);
        assert!(
            (delta - 0.01).abs() < 1e-4,
            "should clamp to remaining room"
        );
    }

    #[test]
    fn clamps_at_lower_limit() {
        let limit = -(std::f32::consts::FRAC_PI_2 - 0.05);
        let delta = clamp_pitch(limit + 0.01, -0.1, 0.05);
        assert!((delta - (-0.01)).abs() < 1e-4);
    }

    // ── zoom_radius ─────────────────────────────────────────────────

    #[test]
    fn scroll_up_moves_closer() {
        let r = zoom_radius(10.0, 1.0, 1.0, 1.0, 50.0);
        assert!((r - 9.5).abs() < 1e-5);
    }

    #[test]
    fn scroll_down_moves_away() {
        let r = zoom_radius(10.0, -1.0, 1.0, 1.0, 50.0);
        assert!(r > 10.0);
    }

    #[test]
    fn no_scroll_leaves_radius_unchanged() {
        assert_eq!(zoom_radius(10.0, 0.0, 1.0, 1.0, 50.0), 10.0);
    }

    #[test]
    fn zoom_clamps_to_range() {
        assert_eq!(zoom_radius(1.05, 100.0, 1.0, 1.0, 50.0), 1.0);
        assert_eq!(zoom_radius(49.0, -100.0, 1.0, 1.0, 50.0), 50.0);
    }
}
