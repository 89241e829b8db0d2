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

//! The anti-aliased CPU vector canvas.

use super::{CoverageRasterizer, Path};
use image::{Rgba, RgbaImage};
use tabula_core::math::{saturate, Color, Extent2D, Rect, Vec2};
use tabula_core::renderer::{CpuTexture, ResourceError};

/// An RGBA canvas with anti-aliased fills, strokes and gradients.
///
/// This is the vector backend used for everything the sprite batch cannot
/// express cheaply: atmospheric card backgrounds, glyph outlines and cached
/// decorative textures. All blending is straight-alpha source-over.
pub struct VectorCanvas {
    image: RgbaImage,
    raster: CoverageRasterizer,
}

impl VectorCanvas {
    /// Creates a transparent canvas. Zero dimensions are raised to one pixel.
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            image: RgbaImage::new(width, height),
            raster: CoverageRasterizer::new(width, height),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Canvas dimensions.
    pub fn size(&self) -> Extent2D {
        Extent2D::new(self.width(), self.height())
    }

    /// The canvas bounds as a rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::from_extent(self.size())
    }

    /// Read access to the underlying image.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Overwrites every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        let rgba = Rgba(color.to_rgba8());
        self.image.pixels_mut().for_each(|p| *p = rgba);
    }

    /// Blends `color` into one pixel. Out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        let [r, g, b, a] = pixel.0;
        pixel.0 = color.over(Color::rgba8(r, g, b, a)).to_rgba8();
    }

    /// Fills every contour of `path` with `color` (nonzero, saturating).
    pub fn fill_path(&mut self, path: &Path, color: Color) {
        if path.is_empty() || color.a <= 0.0 {
            return;
        }
        self.raster.reset();
        for contour in path.contours() {
            self.raster.add_polygon(contour);
        }
        let coverage = self.raster.coverage();
        let width = self.width() as usize;
        for (i, &c) in coverage.iter().enumerate() {
            if c == 0 {
                continue;
            }
            let (x, y) = ((i % width) as i32, (i / width) as i32);
            self.blend_pixel(x, y, color.fade(c as f32 / 255.0));
        }
    }

    /// Fills an axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let mut path = Path::new();
        path.polygon(&[
            rect.origin(),
            Vec2::new(rect.right(), rect.y),
            Vec2::new(rect.right(), rect.bottom()),
            Vec2::new(rect.x, rect.bottom()),
        ]);
        self.fill_path(&path, color);
    }

    /// Fills an anti-aliased circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let mut path = Path::new();
        path.circle(center, radius);
        self.fill_path(&path, color);
    }

    /// Fills a closed polygon.
    pub fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let mut path = Path::new();
        path.polygon(points);
        self.fill_path(&path, color);
    }

    /// Strokes an open polyline with round joins and caps.
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color) {
        if points.len() < 2 || !(width > 0.0) {
            return;
        }
        let mut path = Path::new();
        for pair in points.windows(2) {
            path.thick_segment(pair[0], pair[1], width);
        }
        for &p in points {
            path.circle(p, width * 0.5);
        }
        self.fill_path(&path, color);
    }

    /// Strokes a cubic Bézier curve.
    pub fn stroke_cubic(
        &mut self,
        p0: Vec2,
        c1: Vec2,
        c2: Vec2,
        p3: Vec2,
        width: f32,
        color: Color,
    ) {
        let mut curve = Path::new();
        curve.move_to(p0).cubic_to(c1, c2, p3);
        if let Some(points) = curve.contours().first() {
            let points = points.clone();
            self.stroke_polyline(&points, width, color);
        }
    }

    /// Blends a soft glow whose alpha falls off quadratically to zero at `radius`.
    pub fn soft_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if !(radius > 0.0) {
            return;
        }
        let bounds = Rect::from_center(center, radius * 2.0, radius * 2.0)
            .round_out()
            .intersect(&self.bounds());
        for y in bounds.y as i32..bounds.bottom() as i32 {
            for x in bounds.x as i32..bounds.right() as i32 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5).distance(center) / radius;
                if d < 1.0 {
                    let falloff = (1.0 - d) * (1.0 - d);
                    self.blend_pixel(x, y, color.fade(falloff));
                }
            }
        }
    }

    /// Blends a radial gradient over the whole canvas, `inner` at `center`
    /// fading to `outer` at `radius` and beyond.
    pub fn radial_gradient(&mut self, center: Vec2, radius: f32, inner: Color, outer: Color) {
        let radius = radius.max(1.0);
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let t = Vec2::new(x as f32 + 0.5, y as f32 + 0.5).distance(center) / radius;
                self.blend_pixel(x, y, Color::lerp(inner, outer, t));
            }
        }
    }

    /// Darkens the canvas towards its edges. `strength` is the alpha reached at the corners.
    pub fn vignette(&mut self, color: Color, strength: f32) {
        let center = self.bounds().center();
        let max_d = center.length().max(1.0);
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5).distance(center) / max_d;
                let t = saturate((d - 0.45) / 0.55);
                if t > 0.0 {
                    self.blend_pixel(x, y, color.with_alpha(strength * t * t));
                }
            }
        }
    }

    /// Copies the canvas into a texture ready for upload.
    pub fn to_texture(&self) -> Result<CpuTexture, ResourceError> {
        CpuTexture::from_rgba8(self.size(), self.image.as_raw().clone())
    }

    /// Consumes the canvas into a texture ready for upload.
    pub fn into_texture(self) -> Result<CpuTexture, ResourceError> {
        let size = self.size();
        CpuTexture::from_rgba8(size, self.image.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_canvas_is_one_pixel() {
        let canvas = VectorCanvas::new(0, 0);
        assert_eq!(canvas.size(), Extent2D::new(1, 1));
    }

    #[test]
    fn test_fill_rect_and_clear() {
        let mut canvas = VectorCanvas::new(10, 10);
        canvas.clear(Color::BLACK);
        canvas.fill_rect(Rect::new(2.0, 2.0, 4.0, 4.0), Color::RED);
        let tex = canvas.into_texture().unwrap();
        assert_eq!(tex.pixel(3, 3), Some([255, 0, 0, 255]));
        assert_eq!(tex.pixel(8, 8), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_circle_is_antialiased() {
        let mut canvas = VectorCanvas::new(32, 32);
        canvas.fill_circle(Vec2::new(16.0, 16.0), 10.0, Color::WHITE);
        let img = canvas.image();
        assert_eq!(img.get_pixel(16, 16).0[3], 255);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        let partial = img.pixels().filter(|p| p.0[3] > 0 && p.0[3] < 255).count();
        assert!(partial > 0, "edge pixels should be partially covered");
    }

    #[test]
    fn test_soft_circle_fades_out() {
        let mut canvas = VectorCanvas::new(40, 40);
        canvas.soft_circle(Vec2::new(20.0, 20.0), 15.0, Color::WHITE);
        let img = canvas.image();
        let center = img.get_pixel(20, 20).0[3];
        let edge = img.get_pixel(33, 20).0[3];
        assert!(center > 200);
        assert!(edge < center);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_stroke_polyline_covers_path() {
        let mut canvas = VectorCanvas::new(20, 20);
        canvas.stroke_polyline(&[Vec2::new(2.0, 10.0), Vec2::new(18.0, 10.0)], 4.0, Color::BLUE);
        let img = canvas.image();
        assert_eq!(img.get_pixel(10, 10).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(10, 2).0[3], 0);
    }

    #[test]
    fn test_vignette_leaves_center_untouched() {
        let mut canvas = VectorCanvas::new(40, 40);
        canvas.clear(Color::WHITE);
        canvas.vignette(Color::BLACK, 0.8);
        let img = canvas.image();
        assert_eq!(img.get_pixel(20, 20).0, [255, 255, 255, 255]);
        assert!(img.get_pixel(0, 0).0[0] < 255);
    }
}
