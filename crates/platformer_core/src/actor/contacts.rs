//! Per-frame contact outcomes

use bitflags::bitflags;

bitflags! {
    /// What happened to the actor during one resolution pass
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ContactFlags: u8 {
        /// Standing on something at the end of the frame
        const GROUNDED = 1 << 0;
        /// Climbed onto a ledge instead of being pushed back
        const STEPPED_UP = 1 << 1;
        /// Pushed out of a solid obstacle horizontally
        const PUSHED = 1 << 2;
        /// Hit the underside of an obstacle while rising
        const HEAD_BUMP = 1 << 3;
        /// Feet were placed on a ramp surface
        const RAMP_SNAPPED = 1 << 4;
        /// Feet dropped below the fall limit
        const FELL_OUT = 1 << 5;
    }
}
