// Contract between stepper kinematics and the iterative step solver

use crate::{
    axis::Axis,
    motion::{Coord, Move},
};

// Active flags for axis filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ActiveFlags(u8);

impl ActiveFlags {
    const X: u8 = 1 << 0;
    const Y: u8 = 1 << 1;
    const Z: u8 = 1 << 2;
    const A: u8 = 1 << 3;
    const B: u8 = 1 << 4;
    const C: u8 = 1 << 5;
    const ALL: u8 = Self::X | Self::Y | Self::Z | Self::A | Self::B | Self::C;

    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::ALL)
    }

    const fn bit(axis: Axis) -> u8 {
        match axis {
            Axis::X => Self::X,
            Axis::Y => Self::Y,
            Axis::Z => Self::Z,
            Axis::A => Self::A,
            Axis::B => Self::B,
            Axis::C => Self::C,
        }
    }

    pub const fn with(mut self, axis: Axis) -> Self {
        self.0 |= Self::bit(axis);
        self
    }

    pub const fn with_x(self) -> Self {
        self.with(Axis::X)
    }

    pub const fn with_y(self) -> Self {
        self.with(Axis::Y)
    }

    pub const fn with_z(self) -> Self {
        self.with(Axis::Z)
    }

    pub const fn with_a(self) -> Self {
        self.with(Axis::A)
    }

    pub const fn with_b(self) -> Self {
        self.with(Axis::B)
    }

    pub const fn with_c(self) -> Self {
        self.with(Axis::C)
    }

    pub const fn has(&self, axis: Axis) -> bool {
        self.0 & Self::bit(axis) != 0
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Axes present in the mask, in canonical order.
    pub fn axes(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL.into_iter().filter(|axis| self.has(*axis))
    }

    // Check if a move is likely to cause movement on a stepper with these flags
    pub fn is_active_for(&self, m: &Move) -> bool {
        self.axes().any(|axis| m.axes_r.get(axis) != 0.0)
    }
}

/// A per-stepper kinematics unit.
///
/// The solver calls [`calc_position`](Self::calc_position) repeatedly while
/// searching for step times, and uses [`active_flags`](Self::active_flags)
/// to skip moves that cannot affect the stepper. Implementations must be
/// pure: the same move and time always give the same bits back.
pub trait StepperKinematics: Send + Sync {
    fn calc_position(&self, m: &Move, move_time: f64) -> f64;

    fn active_flags(&self) -> ActiveFlags;

    /// Evaluate the stepper position with the toolhead parked at `pos`.
    fn calc_position_from_coord(&self, pos: Coord) -> f64 {
        let m = Move::stationary(pos);
        self.calc_position(&m, m.mid_time())
    }
}

impl<K: StepperKinematics + ?Sized> StepperKinematics for Box<K> {
    fn calc_position(&self, m: &Move, move_time: f64) -> f64 {
        (**self).calc_position(m, move_time)
    }

    fn active_flags(&self) -> ActiveFlags {
        (**self).active_flags()
    }
}
