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

//! Proportional drawing on top of the primitive renderer.
//!
//! A [`Sketch`] measures everything in percent of the card's shorter side,
//! relative to the card center: `(0, 0)` is the center and `(-50, -50)` the
//! top-left corner of the largest centered square.

use tabula_agents::render_agent::PrimitiveRenderer;
use tabula_core::math::{Color, Rect, Vec2, DEG_TO_RAD};

/// Line segments used to approximate arcs.
const ARC_SEGMENTS_PER_TURN: f32 = 48.0;

pub(crate) struct Sketch<'a> {
    renderer: &'a mut PrimitiveRenderer,
    center: Vec2,
    size: f32,
}

/// Corners of a regular polygon in sketch units.
pub(crate) fn regular_polygon(
    x: f32,
    y: f32,
    radius: f32,
    sides: usize,
    rotation_deg: f32,
) -> Vec<(f32, f32)> {
    (0..sides)
        .map(|i| {
            let angle = (rotation_deg + 360.0 * i as f32 / sides as f32) * DEG_TO_RAD;
            (x + radius * angle.cos(), y + radius * angle.sin())
        })
        .collect()
}

/// Points along an axis-aligned ellipse in sketch units.
pub(crate) fn ellipse_points(x: f32, y: f32, rx: f32, ry: f32) -> Vec<(f32, f32)> {
    let steps = ARC_SEGMENTS_PER_TURN as usize;
    (0..steps)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / steps as f32;
            (x + rx * angle.cos(), y + ry * angle.sin())
        })
        .collect()
}

/// Corners of a star alternating between `outer` and `inner` radii.
pub(crate) fn star_points(
    x: f32,
    y: f32,
    outer: f32,
    inner: f32,
    points: usize,
    rotation_deg: f32,
) -> Vec<(f32, f32)> {
    (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = (rotation_deg + 180.0 * i as f32 / points as f32) * DEG_TO_RAD;
            (x + radius * angle.cos(), y + radius * angle.sin())
        })
        .collect()
}

impl<'a> Sketch<'a> {
    pub(crate) fn new(renderer: &'a mut PrimitiveRenderer, area: Rect) -> Self {
        Self {
            renderer,
            center: area.center(),
            size: area.min_side(),
        }
    }

    /// Converts sketch units to pixels.
    pub(crate) fn u(&self, units: f32) -> f32 {
        self.size * units / 100.0
    }

    /// Converts a sketch point to pixels.
    pub(crate) fn at(&self, x: f32, y: f32) -> Vec2 {
        self.center + Vec2::new(self.u(x), self.u(y))
    }

    fn points(&self, points: &[(f32, f32)]) -> Vec<Vec2> {
        points.iter().map(|&(x, y)| self.at(x, y)).collect()
    }

    // --- Primitives ---

    pub(crate) fn circle(&mut self, color: Color, x: f32, y: f32, radius: f32, alpha: f32) {
        let (center, radius) = (self.at(x, y), self.u(radius));
        self.renderer.draw_circle(color, center, radius, 0.0, alpha);
    }

    pub(crate) fn ellipse(&mut self, color: Color, x: f32, y: f32, rx: f32, ry: f32, alpha: f32) {
        self.fill(color, &ellipse_points(x, y, rx, ry), alpha);
    }

    pub(crate) fn ring(
        &mut self,
        color: Color,
        x: f32,
        y: f32,
        radius: f32,
        width: f32,
        alpha: f32,
    ) {
        let (center, radius, width) = (self.at(x, y), self.u(radius), self.u(width).max(1.0));
        self.renderer.draw_circle(color, center, radius, width, alpha);
    }

    pub(crate) fn line(
        &mut self,
        color: Color,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        alpha: f32,
    ) {
        let (a, b) = (self.at(from.0, from.1), self.at(to.0, to.1));
        let width = self.u(width).max(1.0);
        self.renderer.draw_line(color, a, b, width, alpha);
    }

    pub(crate) fn polyline(&mut self, color: Color, points: &[(f32, f32)], width: f32, alpha: f32) {
        for pair in points.windows(2) {
            self.line(color, pair[0], pair[1], width, alpha);
        }
    }

    pub(crate) fn fill(&mut self, color: Color, points: &[(f32, f32)], alpha: f32) {
        let points = self.points(points);
        self.renderer.draw_polygon(color, &points, 0.0, alpha);
    }

    pub(crate) fn outline(&mut self, color: Color, points: &[(f32, f32)], width: f32, alpha: f32) {
        let points = self.points(points);
        let width = self.u(width).max(1.0);
        self.renderer.draw_polygon(color, &points, width, alpha);
    }

    pub(crate) fn rect(&mut self, color: Color, x: f32, y: f32, w: f32, h: f32, alpha: f32) {
        let origin = self.at(x, y);
        let rect = Rect::new(origin.x, origin.y, self.u(w), self.u(h));
        self.renderer.draw_rect(color, rect, 0.0, alpha);
    }

    pub(crate) fn frame(
        &mut self,
        color: Color,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        width: f32,
        alpha: f32,
    ) {
        let origin = self.at(x, y);
        let rect = Rect::new(origin.x, origin.y, self.u(w), self.u(h));
        let width = self.u(width).max(1.0);
        self.renderer.draw_rect(color, rect, width, alpha);
    }

    // --- Shapes ---

    pub(crate) fn triangle(
        &mut self,
        color: Color,
        a: (f32, f32),
        b: (f32, f32),
        c: (f32, f32),
        alpha: f32,
    ) {
        self.fill(color, &[a, b, c], alpha);
    }

    /// A pointy-topped hexagon, filled when `width <= 0`.
    pub(crate) fn hexagon(
        &mut self,
        color: Color,
        x: f32,
        y: f32,
        radius: f32,
        width: f32,
        alpha: f32,
    ) {
        let points = regular_polygon(x, y, radius, 6, -90.0);
        if width > 0.0 {
            self.outline(color, &points, width, alpha);
        } else {
            self.fill(color, &points, alpha);
        }
    }

    pub(crate) fn star(
        &mut self,
        color: Color,
        x: f32,
        y: f32,
        outer: f32,
        points: usize,
        alpha: f32,
    ) {
        let star = star_points(x, y, outer, outer * 0.45, points, -90.0);
        self.fill(color, &star, alpha);
    }

    /// A four-pointed twinkle with a bright core.
    pub(crate) fn sparkle(&mut self, color: Color, x: f32, y: f32, radius: f32, alpha: f32) {
        let star = star_points(x, y, radius, radius * 0.22, 4, -90.0);
        self.fill(color, &star, alpha);
        self.circle(Color::WHITE, x, y, radius * 0.18, alpha);
    }

    /// Sparkles at fixed `(x, y, radius)` positions.
    pub(crate) fn sparkles(&mut self, color: Color, spots: &[(f32, f32, f32)], alpha: f32) {
        for &(x, y, radius) in spots {
            self.sparkle(color, x, y, radius, alpha);
        }
    }

    /// An arc from `start_deg` to `end_deg`, clockwise on screen.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn arc(
        &mut self,
        color: Color,
        x: f32,
        y: f32,
        radius: f32,
        start_deg: f32,
        end_deg: f32,
        width: f32,
        alpha: f32,
    ) {
        let sweep = end_deg - start_deg;
        let steps = ((sweep.abs() / 360.0 * ARC_SEGMENTS_PER_TURN).ceil() as usize).max(2);
        let points: Vec<(f32, f32)> = (0..=steps)
            .map(|i| {
                let angle = (start_deg + sweep * i as f32 / steps as f32) * DEG_TO_RAD;
                (x + radius * angle.cos(), y + radius * angle.sin())
            })
            .collect();
        self.polyline(color, &points, width, alpha);
    }

    pub(crate) fn heart(&mut self, color: Color, x: f32, y: f32, radius: f32, alpha: f32) {
        let lobe = radius * 0.5;
        self.circle(color, x - lobe, y - lobe * 0.4, lobe * 1.05, alpha);
        self.circle(color, x + lobe, y - lobe * 0.4, lobe * 1.05, alpha);
        self.triangle(
            color,
            (x - radius * 1.02, y - lobe * 0.1),
            (x + radius * 1.02, y - lobe * 0.1),
            (x, y + radius * 1.1),
            alpha,
        );
    }
}
