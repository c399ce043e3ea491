//! Kinematic integration of a resolved [`MovementCommand`].

use cg_core::{ArenaConfig, Pose, Vec3};
use cg_policy::MovementCommand;

/// Advance `pose` by one fixed step.
///
/// Yaw is `turn_rate_deg * dt` about `rotate_dir` (positive about `up` turns
/// left); translation is `move_dir * agent_speed * dt`.  Walls are handled by
/// the caller.
pub fn integrate(pose: &mut Pose, command: &MovementCommand, config: &ArenaConfig, dt_secs: f32) {
    if command.rotate_dir != Vec3::ZERO {
        let sign = command.rotate_dir.dot(pose.up).signum();
        pose.yaw(sign * config.turn_rate_deg * dt_secs);
    }
    pose.position += command.move_dir * config.agent_speed * dt_secs;
}
