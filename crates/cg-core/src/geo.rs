//! Arena geometry: agent pose and signed-angle bearings.
//!
//! The arena uses a right-handed frame with `+Y` up.  A positive yaw about
//! `up` turns an agent to its left, so a point on the agent's left has a
//! *negative* bearing (see [`Pose::bearing_deg`]).

pub use glam::Vec3;

use glam::Quat;

/// Squared-magnitude floor below which a direction is treated as zero.
const EPSILON_NORMAL_SQR: f32 = 1e-15;

/// Unsigned angle in degrees between `from` and `to`, signed by the
/// direction of `from × to` relative to `axis`.
///
/// Zero-length inputs yield `0.0`.  An exactly-zero sign test counts as
/// positive, so antiparallel vectors give `+180`.
pub fn signed_angle_deg(from: Vec3, to: Vec3, axis: Vec3) -> f32 {
    let denominator = (from.length_squared() * to.length_squared()).sqrt();
    if denominator < EPSILON_NORMAL_SQR {
        return 0.0;
    }
    let cos = (from.dot(to) / denominator).clamp(-1.0, 1.0);
    let unsigned = cos.acos().to_degrees();
    let sign = if axis.dot(from.cross(to)) < 0.0 { -1.0 } else { 1.0 };
    unsigned * sign
}

/// Position and orientation of an agent in the arena.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Vec3,
    /// Unit heading.
    pub forward:  Vec3,
    /// Unit vertical axis.
    pub up:       Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self { position: Vec3::ZERO, forward: Vec3::Z, up: Vec3::Y }
    }
}

impl Pose {
    /// Pose at `position` facing `forward` (normalised; falls back to `+Z`).
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self {
            position,
            forward: forward.try_normalize().unwrap_or(Vec3::Z),
            up:      Vec3::Y,
        }
    }

    #[inline]
    pub fn backward(&self) -> Vec3 {
        -self.forward
    }

    #[inline]
    pub fn left(&self) -> Vec3 {
        self.up.cross(self.forward)
    }

    /// Signed angle from the direction toward `point` to the current heading,
    /// measured about `up`.  Negative when `point` lies to the left.
    #[inline]
    pub fn bearing_deg(&self, point: Vec3) -> f32 {
        signed_angle_deg(point - self.position, self.forward, self.up)
    }

    /// Rotate the heading by `degrees` about `up` (positive turns left).
    pub fn yaw(&mut self, degrees: f32) {
        let rotation = Quat::from_axis_angle(self.up, degrees.to_radians());
        self.forward = (rotation * self.forward).normalize_or_zero();
    }
}
