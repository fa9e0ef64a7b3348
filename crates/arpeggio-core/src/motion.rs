//! Trapezoid move segments as stored by the trajectory queue.
//!
//! Only the read side of the queue lives here: the segment layout and the
//! function that evaluates a segment's six-axis coordinate at a time
//! offset. Planning and queue bookkeeping belong to the host.

use crate::axis::Axis;
use serde::{Deserialize, Serialize};

/// Duration of the parked move built by [`Move::stationary`].
const STATIONARY_MOVE_T: f64 = 1000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coord {
    pub const fn from_array(v: [f64; 6]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            z: v[2],
            a: v[3],
            b: v[4],
            c: v[5],
        }
    }

    pub const fn to_array(self) -> [f64; 6] {
        [self.x, self.y, self.z, self.a, self.b, self.c]
    }

    /// Select one field. There is deliberately no fallback arm.
    #[inline]
    pub const fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
            Axis::A => self.a,
            Axis::B => self.b,
            Axis::C => self.c,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
            Axis::A => self.a = value,
            Axis::B => self.b = value,
            Axis::C => self.c = value,
        }
    }
}

/// A single accel, cruise or decel segment.
///
/// `axes_r` holds the per-axis direction ratios; the distance travelled
/// along the segment is scaled by them to get each axis' displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Move {
    pub print_time: f64,
    pub move_t: f64,
    pub start_v: f64,
    pub half_accel: f64,
    pub start_pos: Coord,
    pub axes_r: Coord,
}

impl Move {
    /// A long motionless move parked at `pos`.
    pub fn stationary(pos: Coord) -> Self {
        Self {
            print_time: 0.0,
            move_t: STATIONARY_MOVE_T,
            start_pos: pos,
            ..Self::default()
        }
    }

    /// Build a move at constant acceleration from `start_pos` along `axes_r`.
    pub fn new(
        print_time: f64,
        move_t: f64,
        start_v: f64,
        accel: f64,
        start_pos: Coord,
        axes_r: Coord,
    ) -> Self {
        Self {
            print_time,
            move_t,
            start_v,
            half_accel: 0.5 * accel,
            start_pos,
            axes_r,
        }
    }

    /// Midpoint of the move's time window.
    pub fn mid_time(&self) -> f64 {
        0.5 * self.move_t
    }
}

/// Calculate the distance traveled in a move at a given time
#[inline]
pub fn move_get_distance(m: &Move, move_time: f64) -> f64 {
    (m.start_v + m.half_accel * move_time) * move_time
}

/// Calculate the coordinate at a given time in a move
#[inline]
pub fn move_get_coord(m: &Move, move_time: f64) -> Coord {
    let move_dist = move_get_distance(m, move_time);
    Coord {
        x: m.start_pos.x + m.axes_r.x * move_dist,
        y: m.start_pos.y + m.axes_r.y * move_dist,
        z: m.start_pos.z + m.axes_r.z * move_dist,
        a: m.start_pos.a + m.axes_r.a * move_dist,
        b: m.start_pos.b + m.axes_r.b * move_dist,
        c: m.start_pos.c + m.axes_r.c * move_dist,
    }
}
