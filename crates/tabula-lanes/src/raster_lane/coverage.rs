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

//! An anti-aliasing coverage rasterizer based on signed-area accumulation.
//!
//! Every line segment deposits the signed area it covers into an accumulation
//! buffer. A running sum along each row then yields the exact coverage of
//! every pixel. Overlapping contours of the same orientation saturate instead
//! of cancelling out.

use tabula_core::math::Vec2;

/// Accumulates line segments and resolves them into an 8-bit coverage mask.
#[derive(Debug, Clone)]
pub struct CoverageRasterizer {
    width: usize,
    height: usize,
    /// Row stride is `width + 2` so deposits at the right edge stay in-row.
    acc: Vec<f32>,
}

impl CoverageRasterizer {
    /// Creates an empty rasterizer for a `width` x `height` mask.
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            width,
            height,
            acc: vec![0.0; (width + 2) * height],
        }
    }

    /// Width of the mask in pixels.
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    /// Height of the mask in pixels.
    pub fn height(&self) -> u32 {
        self.height as u32
    }

    #[inline]
    fn stride(&self) -> usize {
        self.width + 2
    }

    /// Adds a closed polygon outline.
    pub fn add_polygon(&mut self, points: &[Vec2]) {
        if points.len() < 3 {
            return;
        }
        for (i, &a) in points.iter().enumerate() {
            self.draw_line(a, points[(i + 1) % points.len()]);
        }
    }

    /// Deposits the signed area of one edge.
    pub fn draw_line(&mut self, p0: Vec2, p1: Vec2) {
        if !(p0.y - p1.y).is_normal() || self.width == 0 {
            return;
        }
        let (dir, p0, p1) = if p0.y < p1.y {
            (1.0, p0, p1)
        } else {
            (-1.0, p1, p0)
        };
        let dxdy = (p1.x - p0.x) / (p1.y - p0.y);
        let max_x = self.width as f32;
        let stride = self.stride();

        let y_start = p0.y.max(0.0);
        let mut x = p0.x + (y_start - p0.y) * dxdy;
        let row_end = (p1.y.ceil().max(0.0) as usize).min(self.height);

        for y in (y_start as usize)..row_end {
            let dy = ((y + 1) as f32).min(p1.y) - (y as f32).max(p0.y);
            let x_next = x + dxdy * dy;
            let d = dy * dir;
            let line = y * stride;

            let (x0, x1) = if x < x_next { (x, x_next) } else { (x_next, x) };
            let (x0, x1) = (x0.clamp(0.0, max_x), x1.clamp(0.0, max_x));
            let x0_floor = x0.floor();
            let x0i = x0_floor as usize;
            let x1_ceil = x1.ceil();
            let x1i = x1_ceil as usize;

            if x1i <= x0i + 1 {
                // The segment stays within one pixel column.
                let xmf = 0.5 * (x0 + x1) - x0_floor;
                self.acc[line + x0i] += d - d * xmf;
                self.acc[line + x0i + 1] += d * xmf;
            } else {
                let s = (x1 - x0).recip();
                let x0f = x0 - x0_floor;
                let a0 = 0.5 * s * (1.0 - x0f) * (1.0 - x0f);
                let x1f = x1 - x1_ceil + 1.0;
                let am = 0.5 * s * x1f * x1f;
                self.acc[line + x0i] += d * a0;
                if x1i == x0i + 2 {
                    self.acc[line + x0i + 1] += d * (1.0 - a0 - am);
                } else {
                    let a1 = s * (1.5 - x0f);
                    self.acc[line + x0i + 1] += d * (a1 - a0);
                    for xi in x0i + 2..x1i - 1 {
                        self.acc[line + xi] += d * s;
                    }
                    let a2 = a1 + (x1i - x0i - 3) as f32 * s;
                    self.acc[line + x1i - 1] += d * (1.0 - a2 - am);
                }
                self.acc[line + x1i] += d * am;
            }
            x = x_next;
        }
    }

    /// Resolves the accumulated area into one coverage byte per pixel.
    pub fn coverage(&self) -> Vec<u8> {
        let stride = self.stride();
        let mut out = Vec::with_capacity(self.width * self.height);
        for row in self.acc.chunks_exact(stride) {
            let mut sum = 0.0f32;
            for &a in &row[..self.width] {
                sum += a;
                out.push((sum.abs().min(1.0) * 255.0 + 0.5) as u8);
            }
        }
        out
    }

    /// Clears the buffer for reuse.
    pub fn reset(&mut self) {
        self.acc.iter_mut().for_each(|a| *a = 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f32, y0: f32, x1: f32, y1: f32) -> [Vec2; 4] {
        [
            Vec2::new(x0, y0),
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
        ]
    }

    #[test]
    fn test_pixel_aligned_square_is_opaque_inside() {
        let mut raster = CoverageRasterizer::new(8, 8);
        raster.add_polygon(&square(2.0, 2.0, 6.0, 6.0));
        let mask = raster.coverage();
        assert_eq!(mask[3 * 8 + 3], 255);
        assert_eq!(mask[2 * 8 + 2], 255);
        assert_eq!(mask[0], 0);
        assert_eq!(mask[7 * 8 + 7], 0);
        assert_eq!(mask[3 * 8 + 6], 0);
    }

    #[test]
    fn test_half_pixel_edge_is_half_covered() {
        let mut raster = CoverageRasterizer::new(4, 4);
        raster.add_polygon(&square(0.0, 0.0, 1.5, 4.0));
        let mask = raster.coverage();
        assert_eq!(mask[0], 255);
        assert!((mask[1] as i32 - 128).abs() <= 1);
        assert_eq!(mask[2], 0);
    }

    #[test]
    fn test_shapes_outside_bounds_do_not_panic() {
        let mut raster = CoverageRasterizer::new(4, 4);
        raster.add_polygon(&square(-10.0, -10.0, 20.0, 20.0));
        let mask = raster.coverage();
        assert!(mask.iter().all(|&c| c == 255));
    }

    #[test]
    fn test_overlapping_contours_saturate() {
        let mut raster = CoverageRasterizer::new(4, 4);
        raster.add_polygon(&square(0.0, 0.0, 4.0, 4.0));
        raster.add_polygon(&square(1.0, 1.0, 3.0, 3.0));
        let mask = raster.coverage();
        assert_eq!(mask[5], 255);
        raster.reset();
        assert!(raster.coverage().iter().all(|&c| c == 0));
    }
}
