//! The five-slot discrete action vector and its per-slot meanings.
//!
//! | Slot | Meaning      | Codes                                   |
//! |------|--------------|-----------------------------------------|
//! | 0    | forward axis | 0 idle, 1 forward, 2 backward           |
//! | 1    | rotate axis  | 0 idle, 1 turn right, 2 turn left       |
//! | 2    | shoot        | 1 laser on, anything else off           |
//! | 3    | seek target  | 1 steer to the nearest eligible target  |
//! | 4    | seek base    | 1 steer to the home base                |
//!
//! Codes outside these ranges are not rejected; they decode to a no-op.

/// Number of discrete branches.
pub const ACTION_SLOTS: usize = 5;

/// Branch sizes, for sources that sample uniformly.
pub const BRANCH_SIZES: [u32; ACTION_SLOTS] = [3, 3, 2, 2, 2];

/// Raw discrete actions for one agent and one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionVector(pub [i32; ACTION_SLOTS]);

impl ActionVector {
    pub const IDLE: ActionVector = ActionVector([0; ACTION_SLOTS]);

    #[inline]
    pub fn new(forward: i32, rotate: i32, shoot: i32, seek_target: i32, seek_base: i32) -> Self {
        Self([forward, rotate, shoot, seek_target, seek_base])
    }

    #[inline]
    pub fn forward(&self) -> i32 {
        self.0[0]
    }

    #[inline]
    pub fn rotate(&self) -> i32 {
        self.0[1]
    }

    #[inline]
    pub fn shoot(&self) -> i32 {
        self.0[2]
    }

    #[inline]
    pub fn seek_target(&self) -> i32 {
        self.0[3]
    }

    #[inline]
    pub fn seek_base(&self) -> i32 {
        self.0[4]
    }
}

impl From<[i32; ACTION_SLOTS]> for ActionVector {
    fn from(slots: [i32; ACTION_SLOTS]) -> Self {
        Self(slots)
    }
}

/// Slot 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ForwardAxis {
    Idle,
    Forward,
    Backward,
}

impl ForwardAxis {
    /// `None` for codes outside `0..=2`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ForwardAxis::Idle),
            1 => Some(ForwardAxis::Forward),
            2 => Some(ForwardAxis::Backward),
            _ => None,
        }
    }
}

/// Slot 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RotateAxis {
    Idle,
    Right,
    Left,
}

impl RotateAxis {
    /// `None` for codes outside `0..=2`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(RotateAxis::Idle),
            1 => Some(RotateAxis::Right),
            2 => Some(RotateAxis::Left),
            _ => None,
        }
    }
}
