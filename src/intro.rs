//! One-shot camera fly-in played at startup.
//!
//! Moves the camera linearly from its spawn pose down toward the desk over a
//! fixed duration, then hands control to [`crate::orbit`] by switching to
//! [`GameState::Running`]. The fly-in never replays.

use bevy::prelude::*;

use crate::GameState;
use crate::math;
use crate::orbit::{OrbitState, Viewer};

/// Per-plugin configuration for the camera fly-in.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct IntroConfig {
    /// Duration of the fly-in (seconds). Must be positive.
    pub duration: f32,
    /// Camera position at the start of the fly-in (also the spawn pose).
    pub start: Vec3,
    /// Camera position once the fly-in has settled.
    pub end: Vec3,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            duration: 1.5,
            start: Vec3::new(5.0, 5.0, 5.0),
            end: Vec3::new(0.0, 4.0, 4.0),
        }
    }
}

/// Startup camera animation that flies from the spawn pose to the rest pose.
pub struct IntroPlugin(pub IntroConfig);

impl Plugin for IntroPlugin {
    fn build(&self, app: &mut App) {
        assert!(
            self.0.duration > 0.0,
            "fly-in duration must be positive, got {}",
            self.0.duration
        );
        app.register_type::<IntroConfig>()
            .insert_resource(self.0.clone())
            .insert_resource(FlyIn::new())
            .add_systems(OnEnter(GameState::Intro), arm_fly_in)
            .add_systems(Update, run_intro.run_if(in_state(GameState::Intro)));
    }
}

/// State machine driving the fly-in. Runs exactly once:
/// `Unarmed → Armed → Done`, with no transition out of `Done`.
#[derive(Resource)]
pub struct FlyIn {
    phase: FlyInPhase,
}

#[derive(Clone, Copy, PartialEq)]
enum FlyInPhase {
    Unarmed,
    Armed { elapsed: f32 },
    Done,
}

impl FlyIn {
    /// A fly-in that has not been armed yet. Advancing it is a no-op.
    fn new() -> Self {
        Self {
            phase: FlyInPhase::Unarmed,
        }
    }

    /// Starts the animation. No effect when already armed or completed.
    pub fn arm(&mut self) {
        if self.phase == FlyInPhase::Unarmed {
            self.phase = FlyInPhase::Armed { elapsed: 0.0 };
        }
    }

    /// `true` once the fly-in has completed.
    pub fn done(&self) -> bool {
        self.phase == FlyInPhase::Done
    }

    /// Advances the animation by one frame's delta and returns the camera
    /// position to write, or `None` when not armed.
    ///
    /// Elapsed time accumulates from the moment [`arm`](Self::arm) was
    /// called. Progress clamps at 1, so the end pose is written exactly once
    /// and never overshot; that same call transitions to `Done`.
    pub fn advance(&mut self, delta_secs: f32, cfg: &IntroConfig) -> Option<Vec3> {
        let FlyInPhase::Armed { elapsed } = &mut self.phase else {
            return None;
        };
        *elapsed += delta_secs;
        let progress = math::animation_progress(*elapsed, cfg.duration);
        let position = cfg.start.lerp(cfg.end, progress);
        if progress >= 1.0 {
            self.phase = FlyInPhase::Done;
        }
        Some(position)
    }
}

/// Arms the fly-in when the intro state is entered.
fn arm_fly_in(mut fly: ResMut<FlyIn>) {
    fly.arm();
}

/// Per-frame fly-in update: writes the camera position while armed, then
/// switches to [`GameState::Running`] once done.
fn run_intro(
    time: Res<Time>,
    cfg: Res<IntroConfig>,
    mut fly: ResMut<FlyIn>,
    state: Res<OrbitState>,
    mut query: Query<&mut Transform, With<Viewer>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Ok(mut transform) = query.single_mut() else {
        return;
    };

    if let Some(position) = fly.advance(time.delta_secs(), &cfg) {
        transform.translation = position;
    }

    // Keep the camera aimed at the orbit target, as orbit control will once
    // it takes over.
    transform.look_at(state.target, Vec3::Y);

    if fly.done() {
        next.set(GameState::Running);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> IntroConfig {
        IntroConfig::default()
    }

    fn assert_vec3_eq(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < 1e-5,
            "expected {expected:?}, got {actual:?}"
        );
    }

    // ── arming ──────────────────────────────────────────────────────

    #[test]
    fn advance_before_arm_is_a_no_op() {
        let mut fly = FlyIn::new();
        assert_eq!(fly.advance(0.5, &cfg()), None);
        assert!(!fly.done());
    }

    #[test]
    fn arm_is_idempotent() {
        let mut fly = FlyIn::new();
        fly.arm();
        assert!(fly.advance(0.5, &cfg()).is_some());
        fly.arm();
        // A second arm must not reset the accumulated time.
        let pos = fly.advance(0.25, &cfg()).unwrap();
        assert_vec3_eq(pos, Vec3::new(2.5, 4.5, 4.5));
    }

    #[test]
    fn arm_after_completion_does_not_replay() {
        let mut fly = FlyIn::new();
        fly.arm();
        assert!(fly.advance(2.0, &cfg()).is_some());
        assert!(fly.done());
        fly.arm();
        assert!(fly.done());
        assert_eq!(fly.advance(0.1, &cfg()), None);
    }

    // ── interpolation ───────────────────────────────────────────────

    #[test]
    fn first_frame_writes_the_start_pose() {
        let mut fly = FlyIn::new();
        fly.arm();
        assert_vec3_eq(fly.advance(0.0, &cfg()).unwrap(), Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn midpoint_is_halfway_between_poses() {
        let mut fly = FlyIn::new();
        fly.arm();
        assert_vec3_eq(
            fly.advance(0.75, &cfg()).unwrap(),
            Vec3::new(2.5, 4.5, 4.5),
        );
    }

    #[test]
    fn full_duration_reaches_the_end_pose() {
        let mut fly = FlyIn::new();
        fly.arm();
        assert_vec3_eq(fly.advance(1.5, &cfg()).unwrap(), Vec3::new(0.0, 4.0, 4.0));
        assert!(fly.done());
    }

    #[test]
    fn overshoot_clamps_to_the_end_pose() {
        let mut fly = FlyIn::new();
        fly.arm();
        assert_vec3_eq(fly.advance(9.0, &cfg()).unwrap(), Vec3::new(0.0, 4.0, 4.0));
        assert!(fly.done());
    }

    #[test]
    fn positions_move_monotonically_toward_the_end() {
        let mut fly = FlyIn::new();
        fly.arm();
        let end = cfg().end;
        let mut last_dist = f32::INFINITY;
        for _ in 0..20 {
            if let Some(pos) = fly.advance(0.1, &cfg()) {
                let dist = (pos - end).length();
                assert!(dist <= last_dist, "camera moved away from the end pose");
                last_dist = dist;
            }
        }
        assert!(fly.done());
    }

    // ── completion ──────────────────────────────────────────────────

    #[test]
    fn completion_disarms_on_the_final_write() {
        let mut fly = FlyIn::new();
        fly.arm();
        assert!(!fly.done());
        assert!(fly.advance(1.5, &cfg()).is_some());
        assert!(fly.done());
    }

    #[test]
    fn advance_after_completion_writes_nothing() {
        let mut fly = FlyIn::new();
        fly.arm();
        assert!(fly.advance(1.5, &cfg()).is_some());
        assert_eq!(fly.advance(0.5, &cfg()), None);
        assert_eq!(fly.advance(100.0, &cfg()), None);
    }

    #[test]
    fn end_to_end_scenario() {
        // mount → arm → t=0 start pose → t=1.5s end pose + disarm → no-op.
        let mut fly = FlyIn::new();
        fly.arm();
        assert_vec3_eq(fly.advance(0.0, &cfg()).unwrap(), Vec3::new(5.0, 5.0, 5.0));
        assert_vec3_eq(fly.advance(1.5, &cfg()).unwrap(), Vec3::new(0.0, 4.0, 4.0));
        assert!(fly.done());
        assert_eq!(fly.advance(0.5, &cfg()), None);
    }
}
