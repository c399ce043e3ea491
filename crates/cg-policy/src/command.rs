//! The per-tick output of the decision core.

use cg_core::Vec3;

/// Continuous command handed to the host's motion system.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct MovementCommand {
    /// Translation direction: zero, `forward` or `-forward`.
    pub move_dir:   Vec3,
    /// Yaw axis: zero, `up` (turn left) or `-up` (turn right).
    pub rotate_dir: Vec3,
    pub laser_on:   bool,
}

impl MovementCommand {
    /// All-zero command, laser off.
    #[inline]
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Where autonomous navigation should steer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavGoal {
    SeekTarget,
    SeekBase,
}

impl NavGoal {
    pub fn as_str(self) -> &'static str {
        match self {
            NavGoal::SeekTarget => "seek-target",
            NavGoal::SeekBase   => "seek-base",
        }
    }
}

impl std::fmt::Display for NavGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
