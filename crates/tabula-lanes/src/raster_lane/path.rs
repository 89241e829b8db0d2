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

//! Vector paths flattened into polygons.

use tabula_core::math::Vec2;

/// Maximum distance, in pixels, between a curve and its flattened polyline.
const FLATTEN_TOLERANCE: f32 = 0.25;
/// Upper bound on the segments emitted for a single curve.
const MAX_CURVE_SEGMENTS: usize = 64;

/// A path made of straight and curved segments, stored flattened.
///
/// Every subpath is implicitly closed when filled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    contours: Vec<Vec<Vec2>>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// The flattened contours of this path.
    pub fn contours(&self) -> &[Vec<Vec2>] {
        &self.contours
    }

    /// Returns `true` if the path has no fillable contour.
    pub fn is_empty(&self) -> bool {
        self.contours.iter().all(|c| c.len() < 3)
    }

    /// Starts a new contour at `point`.
    pub fn move_to(&mut self, point: Vec2) -> &mut Self {
        self.contours.push(vec![point]);
        self
    }

    /// Adds a straight segment to `point`.
    pub fn line_to(&mut self, point: Vec2) -> &mut Self {
        match self.contours.last_mut() {
            Some(contour) => contour.push(point),
            None => self.contours.push(vec![point]),
        }
        self
    }

    fn current(&self) -> Vec2 {
        self.contours
            .last()
            .and_then(|c| c.last())
            .copied()
            .unwrap_or(Vec2::ZERO)
    }

    /// Adds a quadratic Bézier segment.
    pub fn quad_to(&mut self, control: Vec2, end: Vec2) -> &mut Self {
        let start = self.current();
        let steps = segment_count(start.distance(control) + control.distance(end));
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let a = Vec2::lerp(start, control, t);
            let b = Vec2::lerp(control, end, t);
            self.line_to(Vec2::lerp(a, b, t));
        }
        self
    }

    /// Adds a cubic Bézier segment.
    pub fn cubic_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) -> &mut Self {
        let start = self.current();
        let hull = start.distance(c1) + c1.distance(c2) + c2.distance(end);
        let steps = segment_count(hull);
        for i in 1..=steps {
            self.line_to(cubic_point(start, c1, c2, end, i as f32 / steps as f32));
        }
        self
    }

    /// Adds a full circle as a new contour.
    pub fn circle(&mut self, center: Vec2, radius: f32) -> &mut Self {
        if !(radius > 0.0) {
            return self;
        }
        let steps = ((radius.sqrt() * 6.0).ceil() as usize).clamp(8, 256);
        let mut contour = Vec::with_capacity(steps);
        for i in 0..steps {
            let angle = i as f32 / steps as f32 * std::f32::consts::TAU;
            contour.push(center + Vec2::from_angle(angle) * radius);
        }
        self.contours.push(contour);
        self
    }

    /// Adds a closed polygon as a new contour.
    pub fn polygon(&mut self, points: &[Vec2]) -> &mut Self {
        if points.len() >= 3 {
            self.contours.push(points.to_vec());
        }
        self
    }

    /// Adds a quadrilateral of thickness `width` around the segment `a`-`b`.
    ///
    /// The quad is wound the same way as [`Path::circle`] so strokes built from
    /// quads and round joins union instead of cancelling.
    pub fn thick_segment(&mut self, a: Vec2, b: Vec2, width: f32) -> &mut Self {
        let dir = b - a;
        if dir.length_squared() <= f32::EPSILON || !(width > 0.0) {
            return self;
        }
        let n = dir.normalize().perp() * (width * 0.5);
        self.contours.push(vec![a - n, b - n, b + n, a + n]);
        self
    }
}

/// Evaluates a cubic Bézier at `t` in Bernstein form.
pub fn cubic_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

fn segment_count(length: f32) -> usize {
    if !length.is_finite() {
        return 1;
    }
    ((length / (FLATTEN_TOLERANCE * 16.0)).sqrt().ceil() as usize * 2).clamp(1, MAX_CURVE_SEGMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_endpoints() {
        let p0 = Vec2::new(0.0, 0.0);
        let p3 = Vec2::new(10.0, 0.0);
        let c1 = Vec2::new(3.0, 5.0);
        let c2 = Vec2::new(7.0, 5.0);
        assert_eq!(cubic_point(p0, c1, c2, p3, 0.0), p0);
        assert_eq!(cubic_point(p0, c1, c2, p3, 1.0), p3);
        let mid = cubic_point(p0, c1, c2, p3, 0.5);
        assert!((mid.x - 5.0).abs() < 1e-5);
        assert!((mid.y - 3.75).abs() < 1e-5);
    }

    #[test]
    fn test_curve_ends_at_target() {
        let mut path = Path::new();
        path.move_to(Vec2::ZERO)
            .cubic_to(Vec2::new(0.0, 40.0), Vec2::new(40.0, 40.0), Vec2::new(40.0, 0.0));
        let contour = &path.contours()[0];
        assert!(contour.len() > 3);
        assert_eq!(*contour.last().unwrap(), Vec2::new(40.0, 0.0));
    }

    #[test]
    fn test_degenerate_shapes_are_skipped() {
        let mut path = Path::new();
        path.circle(Vec2::ZERO, 0.0)
            .thick_segment(Vec2::ZERO, Vec2::ZERO, 4.0)
            .polygon(&[Vec2::ZERO, Vec2::ONE]);
        assert!(path.is_empty());
    }
}
