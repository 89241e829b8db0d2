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

//! Provides the axis-aligned rectangle used for draw areas, sprite
//! destinations and scissor clips.

use serde::{Deserialize, Serialize};

use super::{Extent2D, Vec2};

/// An axis-aligned rectangle in pixel space, anchored at its top-left corner.
///
/// A `Rect` carries no ownership semantics: it is passed by value into every
/// drawing call. Negative or zero sizes describe an empty rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x: f32,
    /// The y-coordinate of the top edge.
    pub y: f32,
    /// The width of the rectangle.
    pub width: f32,
    /// The height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle centered on `center`.
    #[inline]
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width * 0.5,
            center.y - height * 0.5,
            width,
            height,
        )
    }

    /// Creates a rectangle covering a whole extent, anchored at the origin.
    #[inline]
    pub fn from_extent(extent: Extent2D) -> Self {
        Self::new(0.0, 0.0, extent.width as f32, extent.height as f32)
    }

    /// The x-coordinate of the right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The y-coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// The top-left corner.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// The size as a vector.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// The smaller of the two dimensions.
    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Returns `true` if the rectangle covers no area.
    ///
    /// `NaN` sizes are treated as empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Checks whether a point lies inside the rectangle (right/bottom edges excluded).
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns the overlapping region of two rectangles.
    ///
    /// The result has a zero size when the rectangles do not overlap.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        Rect::new(x0, y0, (x1 - x0).max(0.0), (y1 - y0).max(0.0))
    }

    /// Returns the rectangle shrunk by `amount` on every side.
    #[inline]
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2.0,
            self.height - amount * 2.0,
        )
    }

    /// Snaps the rectangle outwards to whole pixels.
    pub fn round_out(&self) -> Rect {
        let x0 = self.x.floor();
        let y0 = self.y.floor();
        let x1 = self.right().ceil();
        let y1 = self.bottom().ceil();
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_overlapping() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(&b), Rect::new(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn test_negative_size_is_empty() {
        assert!(Rect::new(0.0, 0.0, -4.0, 10.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 4.0, f32::NAN).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_contains_excludes_far_edges() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(1.5, 1.5)));
        assert!(!r.contains(Vec2::new(2.0, 1.0)));
    }

    #[test]
    fn test_round_out() {
        let r = Rect::new(0.5, 1.2, 2.0, 2.0).round_out();
        assert_eq!(r, Rect::new(0.0, 1.0, 3.0, 3.0));
    }
}
