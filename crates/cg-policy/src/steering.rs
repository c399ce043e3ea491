//! Bearing → discrete steering intent.

use cg_core::{Pose, Vec3};

use crate::MovementCommand;

/// Outcome of the deadband controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SteeringIntent {
    Forward,
    TurnLeft,
    TurnRight,
}

/// Bang-bang steering: turn in place until the bearing is inside
/// `[-deadband_deg, deadband_deg]`, then drive straight.
///
/// The bounds themselves count as inside.
#[inline]
pub fn resolve_steering(bearing_deg: f32, deadband_deg: f32) -> SteeringIntent {
    if bearing_deg < -deadband_deg {
        SteeringIntent::TurnLeft
    } else if bearing_deg > deadband_deg {
        SteeringIntent::TurnRight
    } else {
        SteeringIntent::Forward
    }
}

impl SteeringIntent {
    /// Overwrite the translation and rotation parts of `command`.
    ///
    /// Turning zeroes the translation and driving zeroes the rotation, so the
    /// result never depends on what the command held before.
    pub fn apply(self, pose: &Pose, command: &mut MovementCommand) {
        let (move_dir, rotate_dir) = match self {
            SteeringIntent::Forward   => (pose.forward, Vec3::ZERO),
            SteeringIntent::TurnLeft  => (Vec3::ZERO, pose.up),
            SteeringIntent::TurnRight => (Vec3::ZERO, -pose.up),
        };
        command.move_dir = move_dir;
        command.rotate_dir = rotate_dir;
    }
}
