//! Manual override: keyboard state → action vector.

use crate::ActionVector;

/// Keys sampled by the host's input layer for one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualInput {
    pub up:    bool,
    pub down:  bool,
    pub left:  bool,
    pub right: bool,
    /// Shoot.
    pub space: bool,
    /// Seek the nearest target.
    pub a:     bool,
    /// Seek the home base.
    pub s:     bool,
}

impl ManualInput {
    /// Map held keys to slot codes.  Down beats up and left beats right
    /// when both are held.
    pub fn to_actions(self) -> ActionVector {
        let mut slots = [0; 5];
        if self.up {
            slots[0] = 1;
        }
        if self.down {
            slots[0] = 2;
        }
        if self.right {
            slots[1] = 1;
        }
        if self.left {
            slots[1] = 2;
        }
        if self.space {
            slots[2] = 1;
        }
        if self.a {
            slots[3] = 1;
        }
        if self.s {
            slots[4] = 1;
        }
        ActionVector(slots)
    }
}

impl From<ManualInput> for ActionVector {
    fn from(input: ManualInput) -> Self {
        input.to_actions()
    }
}
