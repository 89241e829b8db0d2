// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides the 2D math primitives used by the renderer and the card art.
//!
//! All coordinates are pixel-addressed with a **top-left origin**: `x` grows to
//! the right and `y` grows downwards. All angular functions operate in
//! **radians** unless explicitly specified otherwise.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

// Re-export standard mathematical constants for convenience.
pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;

// --- Declare Sub-Modules ---

pub mod color;
pub mod dimension;
pub mod geometry;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::color::Color;
pub use self::dimension::Extent2D;
pub use self::geometry::Rect;
pub use self::vector::Vec2;

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use tabula_core::math::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Clamps a floating-point value to the `[0.0, 1.0]` range.
///
/// `NaN` is mapped to `0.0` so that bad input never leaks into blending math.
///
/// # Examples
///
/// ```
/// use tabula_core::math::saturate;
/// assert_eq!(saturate(1.5), 1.0);
/// assert_eq!(saturate(-0.5), 0.0);
/// ```
#[inline]
pub fn saturate(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Linearly interpolates between two scalars. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Performs an approximate equality comparison between two floats with a custom tolerance.
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use tabula_core::math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturate_handles_nan() {
        assert_eq!(saturate(f32::NAN), 0.0);
        assert_eq!(saturate(0.25), 0.25);
    }

    #[test]
    fn lerp_is_unclamped() {
        assert!(approx_eq(lerp(0.0, 10.0, 0.5), 5.0));
        assert!(approx_eq(lerp(0.0, 10.0, 1.5), 15.0));
    }
}
