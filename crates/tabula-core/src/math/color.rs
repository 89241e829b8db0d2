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

//! Defines the `Color` type and associated operations.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

use super::saturate;

/// Represents a color in the **sRGB** color space using straight (non-premultiplied)
/// `f32` components in the `[0.0, 1.0]` range.
///
/// The 2D pipeline blends directly in sRGB, exactly like a classic sprite batch,
/// so no linear conversion happens anywhere between a palette entry and the
/// final pixel.
#[derive(
    Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct Color {
    /// The red component.
    pub r: f32,
    /// The green component.
    pub g: f32,
    /// The blue component.
    pub b: f32,
    /// The alpha (opacity) component.
    pub a: f32,
}

impl Color {
    // --- Common Color Constants ---

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new `Color` with explicit RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Color` (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates an opaque color from 8-bit sRGB channels.
    #[inline]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    /// Creates a color from 8-bit sRGB channels and an 8-bit alpha.
    #[inline]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a `Color` from a hex string (`#RRGGBB` or `#RRGGBBAA`).
    ///
    /// Malformed channels fall back to `0` (alpha to `255`) instead of panicking.
    ///
    /// # Example
    /// ```
    /// use tabula_core::math::Color;
    /// let color = Color::from_hex("#FF8800");
    /// assert_eq!(color.to_rgba8(), [255, 136, 0, 255]);
    /// ```
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>, fallback: u8| {
            hex.get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .unwrap_or(fallback)
        };
        Self::rgba8(
            channel(0..2, 0),
            channel(2..4, 0),
            channel(4..6, 0),
            channel(6..8, 255),
        )
    }

    /// Converts this color to 8-bit RGBA channels, clamping out-of-range values.
    #[inline]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (saturate(self.r) * 255.0).round() as u8,
            (saturate(self.g) * 255.0).round() as u8,
            (saturate(self.b) * 255.0).round() as u8,
            (saturate(self.a) * 255.0).round() as u8,
        ]
    }
}

// --- Manipulations ---
impl Color {
    /// Returns a new color with the same RGB components but a different alpha.
    #[inline]
    pub fn with_alpha(&self, a: f32) -> Self {
        Self { a, ..*self }
    }

    /// Returns a new color with its alpha multiplied by `factor`.
    #[inline]
    pub fn fade(&self, factor: f32) -> Self {
        Self {
            a: saturate(self.a * factor),
            ..*self
        }
    }

    /// Moves the color towards white by `amount` (`0.0` = unchanged, `1.0` = white).
    #[inline]
    pub fn lighten(&self, amount: f32) -> Self {
        Self::lerp(*self, Self::WHITE.with_alpha(self.a), amount)
    }

    /// Moves the color towards black by `amount` (`0.0` = unchanged, `1.0` = black).
    #[inline]
    pub fn darken(&self, amount: f32) -> Self {
        Self::lerp(*self, Self::BLACK.with_alpha(self.a), amount)
    }

    /// Linearly interpolates between two colors.
    /// The factor `t` is clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        let t = saturate(t);
        Self {
            r: start.r + (end.r - start.r) * t,
            g: start.g + (end.g - start.g) * t,
            b: start.b + (end.b - start.b) * t,
            a: start.a + (end.a - start.a) * t,
        }
    }

    /// Composites `self` over `dst` using straight-alpha source-over blending.
    pub fn over(&self, dst: Self) -> Self {
        let src_a = saturate(self.a);
        let out_a = src_a + dst.a * (1.0 - src_a);
        if out_a <= 0.0 {
            return Self::TRANSPARENT;
        }
        let blend = |s: f32, d: f32| (s * src_a + d * dst.a * (1.0 - src_a)) / out_a;
        Self {
            r: blend(self.r, dst.r),
            g: blend(self.g, dst.g),
            b: blend(self.b, dst.b),
            a: out_a,
        }
    }
}

impl Default for Color {
    /// Returns opaque white by default.
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

impl Add for Color {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a + rhs.a,
        }
    }
}

impl Mul for Color {
    type Output = Self;
    /// Multiplies two colors component-wise (tinting).
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
            a: self.a * rhs.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_color_hex_conversion() {
        let color = Color::from_hex("#FF5733CC");
        assert_eq!(color.to_rgba8(), [0xFF, 0x57, 0x33, 0xCC]);

        let opaque = Color::from_hex("102030");
        assert_eq!(opaque.to_rgba8(), [0x10, 0x20, 0x30, 0xFF]);
    }

    #[test]
    fn test_malformed_hex_does_not_panic() {
        let color = Color::from_hex("#zz");
        assert_eq!(color.to_rgba8(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_fade_clamps() {
        let c = Color::RED.fade(2.0);
        assert!(approx_eq(c.a, 1.0));
        let c = Color::RED.fade(0.25);
        assert!(approx_eq(c.a, 0.25));
    }

    #[test]
    fn test_over_opaque_source_replaces_destination() {
        let out = Color::RED.over(Color::BLUE);
        assert_eq!(out.to_rgba8(), [255, 0, 0, 255]);
    }

    #[test]
    fn test_over_half_transparent_mixes() {
        let out = Color::WHITE.with_alpha(0.5).over(Color::BLACK);
        assert!(approx_eq(out.r, 0.5));
        assert!(approx_eq(out.a, 1.0));
    }

    #[test]
    fn test_over_onto_transparent_keeps_source_color() {
        let out = Color::GREEN.with_alpha(0.4).over(Color::TRANSPARENT);
        assert!(approx_eq(out.g, 1.0));
        assert!(approx_eq(out.a, 0.4));
    }

    #[test]
    fn test_lighten_darken() {
        let grey = Color::rgb(0.5, 0.5, 0.5);
        assert!(approx_eq(grey.lighten(1.0).r, 1.0));
        assert!(approx_eq(grey.darken(1.0).r, 0.0));
        assert!(approx_eq(grey.darken(0.5).r, 0.25));
    }
}
