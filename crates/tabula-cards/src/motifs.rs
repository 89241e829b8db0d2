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

//! Composite figures reused across card families.
//!
//! Each figure is authored in its own local units around an anchor and
//! placed with a [`Pose`].

use crate::palette::Palette;
use crate::shapes::Sketch;
use tabula_core::math::Color;

pub(crate) const RAINBOW_BANDS: [Color; 6] = [
    Color::rgb8(240, 70, 80),
    Color::rgb8(255, 160, 60),
    Color::rgb8(255, 225, 80),
    Color::rgb8(90, 200, 110),
    Color::rgb8(80, 150, 240),
    Color::rgb8(160, 100, 220),
];

/// Anchor and scale of a figure. Local units are multiplied by `k`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Pose {
    pub x: f32,
    pub y: f32,
    pub k: f32,
}

impl Pose {
    pub(crate) const fn new(x: f32, y: f32, k: f32) -> Self {
        Self { x, y, k }
    }

    pub(crate) fn p(&self, lx: f32, ly: f32) -> (f32, f32) {
        (self.x + lx * self.k, self.y + ly * self.k)
    }

    pub(crate) fn r(&self, v: f32) -> f32 {
        v * self.k
    }

    pub(crate) fn pts(&self, local: &[(f32, f32)]) -> Vec<(f32, f32)> {
        local.iter().map(|&(lx, ly)| self.p(lx, ly)).collect()
    }
}

/// Colors of a unicorn-like creature.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Coat {
    pub body: Color,
    pub mane: [Color; 3],
    pub horn: Color,
    pub eye: Color,
}

impl Coat {
    pub(crate) fn from_palette(palette: &Palette) -> Self {
        Self {
            body: palette.primary,
            mane: [palette.secondary, palette.accent, palette.highlight],
            horn: palette.glow,
            eye: palette.shadow,
        }
    }

    pub(crate) fn rainbow(body: Color) -> Self {
        Self {
            body,
            mane: [RAINBOW_BANDS[0], RAINBOW_BANDS[2], RAINBOW_BANDS[4]],
            horn: Color::rgb8(255, 215, 90),
            eye: Color::rgb8(40, 30, 60),
        }
    }
}

/// A spiralled horn from `base` to `tip`.
pub(crate) fn horn(s: &mut Sketch, base: (f32, f32), tip: (f32, f32), width: f32, color: Color) {
    let (dx, dy) = (tip.0 - base.0, tip.1 - base.1);
    let len = (dx * dx + dy * dy).sqrt().max(f32::EPSILON);
    let (nx, ny) = (-dy / len * width * 0.5, dx / len * width * 0.5);
    s.triangle(color, (base.0 + nx, base.1 + ny), (base.0 - nx, base.1 - ny), tip, 1.0);
    let groove = color.darken(0.35);
    for i in 1..4 {
        let t = i as f32 / 4.0;
        let c = (base.0 + dx * t, base.1 + dy * t);
        let half = 1.0 - t;
        s.line(
            groove,
            (c.0 + nx * half, c.1 + ny * half),
            (c.0 - nx * half + dx * 0.06, c.1 - ny * half + dy * 0.06),
            0.4,
            0.8,
        );
    }
}

/// A unicorn head in profile, facing right. About 60 local units tall.
pub(crate) fn unicorn_head(s: &mut Sketch, pose: Pose, coat: &Coat) {
    let outline = coat.eye.with_alpha(0.6);
    // Mane behind the neck.
    let mane_spots = [
        (-11.0, -12.0, 6.0),
        (-15.0, -4.0, 6.5),
        (-17.0, 5.0, 7.0),
        (-18.0, 15.0, 7.0),
        (-19.0, 24.0, 6.5),
    ];
    for (i, &(mx, my, mr)) in mane_spots.iter().enumerate() {
        let (cx, cy) = pose.p(mx, my);
        s.circle(coat.mane[i % 3], cx, cy, pose.r(mr), 1.0);
    }
    s.fill(coat.body, &pose.pts(&[(-14.0, 4.0), (-3.0, 4.0), (3.0, 28.0), (-19.0, 28.0)]), 1.0);
    let (hx, hy) = pose.p(0.0, 0.0);
    s.circle(coat.body, hx, hy, pose.r(12.0), 1.0);
    s.fill(coat.body, &pose.pts(&[(3.0, -7.0), (20.0, 1.0), (19.0, 10.0), (2.0, 10.0)]), 1.0);
    let (sx, sy) = pose.p(17.0, 6.0);
    s.circle(coat.body, sx, sy, pose.r(5.0), 1.0);
    let (nx, ny) = pose.p(19.5, 5.5);
    s.circle(outline, nx, ny, pose.r(1.0), 1.0);
    s.triangle(
        coat.body.darken(0.08),
        pose.p(-7.0, -9.0),
        pose.p(-3.0, -21.0),
        pose.p(1.0, -10.0),
        1.0,
    );
    horn(s, pose.p(3.0, -10.0), pose.p(11.0, -33.0), pose.r(5.0), coat.horn);
    // Forelock over the brow.
    let (fx, fy) = pose.p(-3.0, -9.0);
    s.circle(coat.mane[0], fx, fy, pose.r(4.0), 1.0);
    let (ex, ey) = pose.p(4.0, -2.0);
    s.circle(coat.eye, ex, ey, pose.r(2.3), 1.0);
    let (gx, gy) = pose.p(4.8, -2.8);
    s.circle(Color::WHITE, gx, gy, pose.r(0.8), 1.0);
}

/// A round-faced baby unicorn, facing the viewer. About 50 local units tall.
pub(crate) fn baby_unicorn(s: &mut Sketch, pose: Pose, coat: &Coat) {
    let (hx, hy) = pose.p(0.0, 0.0);
    let spots = [(-11.0, -9.0), (-4.0, -15.0), (4.0, -15.0), (11.0, -9.0)];
    for (i, &(mx, my)) in spots.iter().enumerate() {
        let (cx, cy) = pose.p(mx, my);
        s.circle(coat.mane[i % 3], cx, cy, pose.r(6.0), 1.0);
    }
    s.triangle(coat.body, pose.p(-15.0, -4.0), pose.p(-13.0, -20.0), pose.p(-6.0, -10.0), 1.0);
    s.triangle(coat.body, pose.p(15.0, -4.0), pose.p(13.0, -20.0), pose.p(6.0, -10.0), 1.0);
    s.circle(coat.body, hx, hy, pose.r(15.0), 1.0);
    s.ellipse(coat.body.lighten(0.2), pose.x, pose.y + pose.r(8.0), pose.r(9.0), pose.r(6.0), 1.0);
    horn(s, pose.p(0.0, -13.0), pose.p(0.0, -27.0), pose.r(5.0), coat.horn);
    for side in [-1.0, 1.0] {
        let (ex, ey) = pose.p(side * 6.0, -1.0);
        s.circle(coat.eye, ex, ey, pose.r(3.0), 1.0);
        let (gx, gy) = pose.p(side * 6.0 + 1.0, -2.2);
        s.circle(Color::WHITE, gx, gy, pose.r(1.1), 1.0);
        let (bx, by) = pose.p(side * 10.0, 5.0);
        s.circle(Color::rgb8(255, 140, 170), bx, by, pose.r(2.5), 0.6);
    }
    for side in [-1.0, 1.0] {
        let (nx, ny) = pose.p(side * 3.0, 8.5);
        s.circle(coat.eye, nx, ny, pose.r(0.9), 0.8);
    }
}

/// A narwhal swimming right. About 70 local units long including the tusk.
pub(crate) fn narwhal(s: &mut Sketch, pose: Pose, body: Color, belly: Color, tusk: Color) {
    s.triangle(body, pose.p(-24.0, 0.0), pose.p(-34.0, -9.0), pose.p(-31.0, 1.0), 1.0);
    s.triangle(body, pose.p(-24.0, 0.0), pose.p(-34.0, 9.0), pose.p(-31.0, -1.0), 1.0);
    s.ellipse(body, pose.x, pose.y, pose.r(26.0), pose.r(11.0), 1.0);
    s.ellipse(belly, pose.x + pose.r(2.0), pose.y + pose.r(5.0), pose.r(20.0), pose.r(5.0), 1.0);
    s.triangle(body.darken(0.15), pose.p(-2.0, 6.0), pose.p(6.0, 6.0), pose.p(-4.0, 14.0), 1.0);
    for (sx, sy) in [(-12.0, -5.0), (-5.0, -7.0), (3.0, -6.0), (-16.0, 0.0)] {
        let (cx, cy) = pose.p(sx, sy);
        s.circle(body.darken(0.2), cx, cy, pose.r(1.2), 0.7);
    }
    horn(s, pose.p(24.0, -3.0), pose.p(46.0, -14.0), pose.r(3.0), tusk);
    let (ex, ey) = pose.p(15.0, -2.0);
    s.circle(Color::rgb8(20, 20, 40), ex, ey, pose.r(1.8), 1.0);
}

/// A rainbow arch centered on `(x, y)`, outer radius `radius`.
pub(crate) fn rainbow(s: &mut Sketch, x: f32, y: f32, radius: f32, band: f32, alpha: f32) {
    for (i, &color) in RAINBOW_BANDS.iter().enumerate() {
        let r = radius - band * i as f32;
        s.arc(color, x, y, r, 180.0, 360.0, band * 1.1, alpha);
    }
}

pub(crate) fn cloud(s: &mut Sketch, pose: Pose, color: Color, alpha: f32) {
    for (cx, cy, r) in [(-12.0, 2.0, 8.0), (-3.0, -4.0, 10.0), (9.0, -1.0, 9.0), (16.0, 4.0, 6.0)] {
        let (px, py) = pose.p(cx, cy);
        s.circle(color, px, py, pose.r(r), alpha);
    }
    let (lx, ly) = pose.p(-18.0, 3.0);
    s.rect(color, lx, ly, pose.r(38.0), pose.r(7.0), alpha);
}

/// A feathered wing rooted at the pose anchor, spreading left (`side = -1`) or right.
pub(crate) fn wing(s: &mut Sketch, pose: Pose, side: f32, color: Color) {
    for i in 0..5 {
        let t = i as f32;
        let tip = pose.p(side * (14.0 + t * 5.0), -18.0 + t * 7.0);
        s.triangle(
            color.darken(t * 0.04),
            pose.p(0.0, -2.0 + t * 2.0),
            pose.p(0.0, 6.0 + t * 2.0),
            tip,
            1.0,
        );
    }
    let (cx, cy) = pose.p(side * 6.0, 0.0);
    s.circle(color, cx, cy, pose.r(7.0), 1.0);
}

pub(crate) fn lightning(s: &mut Sketch, pose: Pose, color: Color, alpha: f32) {
    let bolt = pose.pts(&[
        (4.0, -30.0),
        (-10.0, 2.0),
        (-1.0, 2.0),
        (-6.0, 30.0),
        (12.0, -6.0),
        (2.0, -6.0),
        (10.0, -30.0),
    ]);
    s.fill(color, &bolt, alpha);
}

pub(crate) fn shield(s: &mut Sketch, pose: Pose, fill: Color, rim: Color) {
    let outline = [
        (-20.0, -24.0),
        (20.0, -24.0),
        (20.0, 0.0),
        (12.0, 16.0),
        (0.0, 26.0),
        (-12.0, 16.0),
        (-20.0, 0.0),
    ];
    s.fill(fill, &pose.pts(&outline), 1.0);
    s.outline(rim, &pose.pts(&outline), pose.r(2.5), 1.0);
}

/// A "no" sign: a ring crossed by a diagonal bar.
pub(crate) fn prohibition(s: &mut Sketch, x: f32, y: f32, radius: f32, color: Color, alpha: f32) {
    let width = radius * 0.18;
    s.ring(color, x, y, radius, width, alpha);
    let d = (radius - width * 0.5) * std::f32::consts::FRAC_1_SQRT_2;
    s.line(color, (x - d, y - d), (x + d, y + d), width, alpha);
}

/// A block arrow pointing up (`up = true`) or down.
pub(crate) fn arrow(s: &mut Sketch, pose: Pose, up: bool, color: Color) {
    let dir = if up { 1.0 } else { -1.0 };
    let points: Vec<(f32, f32)> = [
        (0.0, -28.0),
        (20.0, -6.0),
        (8.0, -6.0),
        (8.0, 26.0),
        (-8.0, 26.0),
        (-8.0, -6.0),
        (-20.0, -6.0),
    ]
    .iter()
    .map(|&(x, y)| pose.p(x, y * dir))
    .collect();
    s.fill(color, &points, 1.0);
}

pub(crate) fn crown(s: &mut Sketch, pose: Pose, color: Color, jewel: Color) {
    let outline = [
        (-18.0, 10.0),
        (-20.0, -10.0),
        (-9.0, 0.0),
        (0.0, -14.0),
        (9.0, 0.0),
        (20.0, -10.0),
        (18.0, 10.0),
    ];
    s.fill(color, &pose.pts(&outline), 1.0);
    let (bx, by) = pose.p(-18.0, 10.0);
    s.rect(color.darken(0.15), bx, by, pose.r(36.0), pose.r(5.0), 1.0);
    for (jx, jy) in [(-20.0, -10.0), (0.0, -14.0), (20.0, -10.0)] {
        let (cx, cy) = pose.p(jx, jy);
        s.circle(jewel, cx, cy, pose.r(2.5), 1.0);
    }
}

pub(crate) fn flame(s: &mut Sketch, pose: Pose, outer: Color, inner: Color) {
    s.fill(
        outer,
        &pose.pts(
            &[(0.0, -30.0), (12.0, -6.0), (14.0, 8.0), (0.0, 18.0), (-14.0, 8.0), (-12.0, -6.0)],
        ),
        1.0,
    );
    let (cx, cy) = pose.p(0.0, 6.0);
    s.circle(outer, cx, cy, pose.r(13.0), 1.0);
    s.fill(inner, &pose.pts(&[(0.0, -12.0), (7.0, 2.0), (0.0, 14.0), (-7.0, 2.0)]), 1.0);
    let (ix, iy) = pose.p(0.0, 8.0);
    s.circle(inner, ix, iy, pose.r(6.0), 1.0);
}

pub(crate) fn potion(s: &mut Sketch, pose: Pose, glass: Color, liquid: Color) {
    let (nx, ny) = pose.p(-4.0, -26.0);
    s.rect(glass, nx, ny, pose.r(8.0), pose.r(12.0), 0.9);
    let (kx, ky) = pose.p(-5.0, -30.0);
    s.rect(Color::rgb8(150, 100, 60), kx, ky, pose.r(10.0), pose.r(5.0), 1.0);
    let (bx, by) = pose.p(0.0, 0.0);
    s.circle(glass, bx, by, pose.r(16.0), 0.9);
    s.circle(liquid, bx, by + pose.r(3.0), pose.r(12.5), 1.0);
    let (hx, hy) = pose.p(-7.0, -6.0);
    s.circle(Color::WHITE, hx, hy, pose.r(3.0), 0.7);
    for (ux, uy, ur) in [(3.0, -2.0, 1.6), (-2.0, 5.0, 1.2), (6.0, 6.0, 1.0)] {
        let (cx, cy) = pose.p(ux, uy);
        s.ring(Color::WHITE, cx, cy, pose.r(ur), pose.r(0.4), 0.8);
    }
}

/// A chain link ring with a highlight.
pub(crate) fn chain_link(s: &mut Sketch, x: f32, y: f32, radius: f32, color: Color) {
    s.ring(color, x, y, radius, radius * 0.35, 1.0);
    s.arc(color.lighten(0.4), x, y, radius * 0.85, 200.0, 260.0, radius * 0.12, 0.8);
}
