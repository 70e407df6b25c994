//! Pointer-driven rotation angle.

use core::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::vec::Vec2;

/// Horizontal distance (in pixels) below which the pointer counts as
/// vertically aligned with the center.
pub const POINTER_EPSILON: f32 = 1e-3;

/// Angle of the direction from `center` to `pointer`, both in window pixels
/// (origin top-left, +Y down).
///
/// `0` points right, `π/2` up, `π` left. The result lies in `(-π/2, 3π/2)`:
/// `atan(dy / dx)` plus `π` when the pointer is left of center.
///
/// When the pointer is within [`POINTER_EPSILON`] of the center column the
/// quotient is singular; the result is then `π/2` if the pointer is above
/// the center, `-π/2` if below, and `0` if it sits on the center.
pub fn pointer_angle(pointer: Vec2, center: Vec2) -> f32 {
    let dx = pointer.x - center.x;
    // Pixel Y grows downward; flip so "above" is positive.
    let dy = center.y - pointer.y;

    if dx.abs() < POINTER_EPSILON {
        return if dy > 0.0 {
            FRAC_PI_2
        } else if dy < 0.0 {
            -FRAC_PI_2
        } else {
            0.0
        };
    }

    let angle = (dy / dx).atan();
    if pointer.x < center.x { angle + PI } else { angle }
}

/// Wraps `angle` into `[0, 2π)`.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU { 0.0 } else { a }
}
