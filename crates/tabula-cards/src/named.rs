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

//! Bespoke unicorn illustrations selected from the card name.
//!
//! Names are matched by case-insensitive substring against an ordered token
//! list. The first match wins, so more specific tokens come first (every
//! "narwhal" special case precedes the plain "narwhal").

use crate::motifs::{
    baby_unicorn, crown, flame, horn, narwhal, rainbow, unicorn_head, wing, Coat, Pose,
    RAINBOW_BANDS,
};
use crate::palette::{self, Palette};
use crate::shapes::{star_points, Sketch};
use tabula_core::math::Color;

pub(crate) struct NamedUnicorn {
    pub token: &'static str,
    pub palette: Palette,
    pub draw: fn(&mut Sketch, &Palette),
}

const fn named(
    token: &'static str,
    palette: Palette,
    draw: fn(&mut Sketch, &Palette),
) -> NamedUnicorn {
    NamedUnicorn {
        token,
        palette,
        draw,
    }
}

static NAMED_UNICORNS: [NamedUnicorn; 21] = [
    named("narwhal torpedo", palette::OCEAN, narwhal_torpedo),
    named("great narwhal", palette::OCEAN, great_narwhal),
    named("shabby", palette::OCEAN, shabby_narwhal),
    named("narwhal", palette::OCEAN, plain_narwhal),
    named("zombie", palette::GRAVE, zombie),
    named("phoenix", palette::EMBER, phoenix),
    named("shark", palette::OCEAN, shark),
    named("rhinocorn", palette::SLATE, rhinocorn),
    named("llamacorn", palette::MEADOW, llamacorn),
    named("kittencorn", palette::PASTEL, kittencorn),
    named("puppicorn", palette::MEADOW, puppicorn),
    named("americorn", palette::STARS_AND_STRIPES, americorn),
    named("queen bee", palette::HONEY, queen_bee),
    named("angel", palette::HEAVEN, angel),
    named("black knight", palette::NIGHT, black_knight),
    named("chainsaw", palette::STEEL, chainsaw),
    named("mermaid", palette::LAGOON, mermaid),
    named("seductive", palette::ROSE, seductive),
    named("ginormous", palette::ROYAL, ginormous),
    named("flying", palette::HEAVEN, flying),
    named("rainbow", palette::RAINBOW, rainbow_unicorn),
];

/// The name tokens that select a bespoke unicorn illustration, in match order.
pub fn named_tokens() -> impl Iterator<Item = &'static str> {
    NAMED_UNICORNS.iter().map(|n| n.token)
}

pub(crate) fn find(card_name: &str) -> Option<&'static NamedUnicorn> {
    let name = card_name.to_lowercase();
    NAMED_UNICORNS.iter().find(|n| name.contains(n.token))
}

/// Returns the token a unicorn card name matches, if any.
pub fn named_override(card_name: &str) -> Option<&'static str> {
    find(card_name).map(|n| n.token)
}

fn speed_lines(s: &mut Sketch, color: Color, x: f32, rows: &[f32]) {
    for (i, &y) in rows.iter().enumerate() {
        let len = 12.0 + (i % 2) as f32 * 8.0;
        s.line(color, (x - len, y), (x, y), 1.0, 0.7);
    }
}

fn bubbles(s: &mut Sketch, color: Color, spots: &[(f32, f32, f32)]) {
    for &(x, y, r) in spots {
        s.ring(color, x, y, r, r * 0.3, 0.8);
    }
}

fn narwhal_torpedo(s: &mut Sketch, p: &Palette) {
    speed_lines(s, p.highlight, -30.0, &[-10.0, -4.0, 2.0, 8.0]);
    narwhal(s, Pose::new(0.0, 0.0, 0.85), p.primary, p.secondary, p.glow);
    flame(s, Pose::new(-40.0, 0.0, 0.35), Color::rgb8(255, 140, 40), Color::rgb8(255, 230, 120));
}

fn great_narwhal(s: &mut Sketch, p: &Palette) {
    narwhal(s, Pose::new(-4.0, 8.0, 1.1), p.primary, p.secondary, p.glow);
    crown(s, Pose::new(2.0, -10.0, 0.55), Color::rgb8(255, 210, 70), p.accent);
    bubbles(s, p.highlight, &[(28.0, -30.0, 3.0), (34.0, -20.0, 2.0), (-30.0, -26.0, 2.5)]);
}

fn shabby_narwhal(s: &mut Sketch, p: &Palette) {
    narwhal(s, Pose::new(0.0, 4.0, 0.95), p.primary.darken(0.15), p.secondary, p.glow.darken(0.1));
    // Patches and stitches.
    s.rect(Color::rgb8(170, 120, 80), -12.0, -4.0, 7.0, 6.0, 1.0);
    s.rect(Color::rgb8(120, 160, 110), 4.0, -2.0, 6.0, 5.0, 1.0);
    for x in [-11.0, -8.0, 5.0, 8.0] {
        s.line(p.shadow, (x, -5.0), (x + 1.0, 3.0), 0.4, 0.8);
    }
}

fn plain_narwhal(s: &mut Sketch, p: &Palette) {
    narwhal(s, Pose::new(-2.0, 2.0, 1.0), p.primary, p.secondary, p.glow);
    bubbles(
        s,
        p.highlight,
        &[(30.0, 20.0, 3.0), (24.0, 28.0, 2.0), (-28.0, -22.0, 2.5), (-22.0, -30.0, 1.5)],
    );
}

fn zombie(s: &mut Sketch, p: &Palette) {
    let coat = Coat {
        body: p.primary,
        mane: [p.secondary, p.shadow.lighten(0.2), p.secondary.darken(0.2)],
        horn: Color::rgb8(220, 215, 190),
        eye: p.shadow,
    };
    unicorn_head(s, Pose::new(-4.0, 6.0, 1.1), &coat);
    // Stitches across the cheek and a crossed-out eye.
    s.line(p.shadow, (-8.0, 12.0), (8.0, 4.0), 0.6, 1.0);
    for i in 0..4 {
        let t = i as f32 / 3.0;
        let (x, y) = (-8.0 + 16.0 * t, 12.0 - 8.0 * t);
        s.line(p.shadow, (x - 1.0, y - 2.0), (x + 1.0, y + 2.0), 0.5, 1.0);
    }
    s.line(p.accent, (-1.0, -6.0), (7.0, 1.0), 0.8, 1.0);
    s.line(p.accent, (7.0, -6.0), (-1.0, 1.0), 0.8, 1.0);
}

fn phoenix(s: &mut Sketch, p: &Palette) {
    flame(s, Pose::new(0.0, 10.0, 1.5), p.accent, p.primary);
    wing(s, Pose::new(-10.0, 4.0, 1.0), -1.0, p.secondary);
    wing(s, Pose::new(10.0, 4.0, 1.0), 1.0, p.secondary);
    let coat = Coat {
        body: p.primary,
        mane: [p.secondary, p.accent, p.highlight],
        horn: p.highlight,
        eye: p.shadow,
    };
    unicorn_head(s, Pose::new(0.0, -2.0, 0.7), &coat);
}

fn shark(s: &mut Sketch, p: &Palette) {
    // Waterline, fin and a horn breaking the surface.
    s.rect(p.accent, -50.0, 10.0, 100.0, 40.0, 0.5);
    s.fill(p.primary, &[(-18.0, 12.0), (4.0, -22.0), (14.0, 12.0)], 1.0);
    horn(s, (0.0, -16.0), (10.0, -38.0), 5.0, p.glow);
    for i in 0..5 {
        let x = -40.0 + i as f32 * 18.0;
        s.arc(p.highlight, x, 14.0, 6.0, 200.0, 340.0, 1.0, 0.8);
    }
}

fn rhinocorn(s: &mut Sketch, p: &Palette) {
    let pose = Pose::new(-4.0, 8.0, 1.1);
    s.ellipse(p.primary, pose.x, pose.y, pose.r(22.0), pose.r(16.0), 1.0);
    let snout = pose.pts(&[(10.0, -8.0), (30.0, 0.0), (28.0, 14.0), (8.0, 12.0)]);
    s.fill(p.primary, &snout, 1.0);
    horn(s, pose.p(24.0, -2.0), pose.p(30.0, -26.0), pose.r(7.0), p.highlight);
    horn(s, pose.p(14.0, -8.0), pose.p(16.0, -20.0), pose.r(5.0), p.highlight);
    let (ex, ey) = pose.p(6.0, -4.0);
    s.circle(p.shadow, ex, ey, pose.r(2.0), 1.0);
    s.triangle(
        p.primary.darken(0.1),
        pose.p(-12.0, -12.0),
        pose.p(-6.0, -24.0),
        pose.p(-2.0, -12.0),
        1.0,
    );
}

fn llamacorn(s: &mut Sketch, p: &Palette) {
    // Long woolly neck.
    for i in 0..6 {
        let y = 34.0 - i as f32 * 9.0;
        s.circle(p.primary, -4.0 + i as f32 * 0.5, y, 11.0, 1.0);
    }
    let coat = Coat {
        body: p.primary,
        mane: [p.primary.darken(0.05), p.secondary.lighten(0.3), p.primary],
        horn: p.accent,
        eye: p.shadow,
    };
    unicorn_head(s, Pose::new(2.0, -14.0, 0.8), &coat);
    for (i, &color) in RAINBOW_BANDS.iter().enumerate().take(4) {
        s.rect(color, -15.0, 8.0 + i as f32 * 3.0, 22.0, 3.0, 0.9);
    }
}

fn ears(s: &mut Sketch, pose: Pose, color: Color, inner: Color, floppy: bool) {
    for side in [-1.0, 1.0] {
        if floppy {
            s.ellipse(
                color,
                pose.x + pose.r(side * 15.0),
                pose.y + pose.r(2.0),
                pose.r(5.0),
                pose.r(12.0),
                1.0,
            );
        } else {
            s.triangle(
                color,
                pose.p(side * 15.0, -2.0),
                pose.p(side * 13.0, -22.0),
                pose.p(side * 4.0, -12.0),
                1.0,
            );
            s.triangle(
                inner,
                pose.p(side * 13.0, -5.0),
                pose.p(side * 12.5, -17.0),
                pose.p(side * 7.0, -11.0),
                1.0,
            );
        }
    }
}

fn kittencorn(s: &mut Sketch, p: &Palette) {
    let pose = Pose::new(0.0, 4.0, 1.1);
    let coat = Coat::from_palette(p);
    ears(s, pose, coat.body, p.secondary, false);
    baby_unicorn(s, pose, &coat);
    for side in [-1.0, 1.0] {
        for dy in [-1.5, 1.5] {
            s.line(p.shadow, (side * 8.0, 13.0), (side * 22.0, 13.0 + dy * 2.0), 0.4, 0.8);
        }
    }
}

fn puppicorn(s: &mut Sketch, p: &Palette) {
    let pose = Pose::new(0.0, 4.0, 1.1);
    let coat = Coat::from_palette(p);
    baby_unicorn(s, pose, &coat);
    ears(s, pose, p.secondary, p.secondary, true);
    s.ellipse(p.shadow, 0.0, 12.0, 3.0, 2.0, 1.0);
    s.ellipse(Color::rgb8(240, 100, 120), 2.0, 19.0, 2.5, 3.5, 1.0);
}

fn americorn(s: &mut Sketch, p: &Palette) {
    for i in 0..7 {
        let color = if i % 2 == 0 { p.accent } else { p.primary };
        s.rect(color, -50.0, 14.0 + i as f32 * 5.0, 100.0, 5.0, 0.8);
    }
    for (x, y) in [(-32.0, -32.0), (-22.0, -36.0), (-36.0, -20.0), (30.0, -30.0), (36.0, -18.0)] {
        s.star(p.highlight, x, y, 3.5, 5, 1.0);
    }
    unicorn_head(s, Pose::new(-4.0, 2.0, 0.95), &Coat::from_palette(p));
}

fn queen_bee(s: &mut Sketch, p: &Palette) {
    for side in [-1.0, 1.0] {
        s.ellipse(Color::rgb8(230, 245, 255), side * 14.0, -2.0, 12.0, 7.0, 0.8);
    }
    s.ellipse(p.primary, 0.0, 16.0, 14.0, 18.0, 1.0);
    for y in [8.0, 16.0, 24.0] {
        s.rect(p.secondary, -14.0, y, 28.0, 3.5, 1.0);
    }
    let coat = Coat {
        body: p.primary,
        mane: [p.secondary, p.primary.darken(0.2), p.secondary],
        horn: p.highlight,
        eye: p.shadow,
    };
    baby_unicorn(s, Pose::new(0.0, -12.0, 0.7), &coat);
    crown(s, Pose::new(0.0, -34.0, 0.35), Color::rgb8(255, 215, 60), p.accent);
}

fn angel(s: &mut Sketch, p: &Palette) {
    wing(s, Pose::new(-8.0, 4.0, 1.1), -1.0, p.primary);
    wing(s, Pose::new(8.0, 4.0, 1.1), 1.0, p.primary);
    s.ring(p.secondary, 0.0, -32.0, 10.0, 1.8, 1.0);
    unicorn_head(s, Pose::new(-2.0, 6.0, 0.8), &Coat::from_palette(p));
}

fn black_knight(s: &mut Sketch, p: &Palette) {
    let coat = Coat {
        body: p.primary,
        mane: [p.accent, p.accent.darken(0.3), p.primary.lighten(0.2)],
        horn: p.secondary,
        eye: p.accent,
    };
    unicorn_head(s, Pose::new(-4.0, 6.0, 1.1), &coat);
    // Helmet visor slats.
    for i in 0..4 {
        let y = -6.0 + i as f32 * 3.0;
        s.line(p.secondary, (-6.0, y), (16.0, y + 4.0), 0.8, 0.9);
    }
    s.line(p.secondary, (-34.0, 36.0), (-10.0, -20.0), 2.0, 1.0);
    s.fill(p.accent, &[(-10.0, -20.0), (-4.0, -34.0), (-16.0, -26.0)], 1.0);
}

fn chainsaw(s: &mut Sketch, p: &Palette) {
    unicorn_head(s, Pose::new(-10.0, 6.0, 0.95), &Coat::from_palette(p));
    // The horn is a blade with teeth.
    s.rect(p.primary, 6.0, -34.0, 30.0, 8.0, 1.0);
    let teeth: Vec<(f32, f32)> = (0..=10)
        .map(|i| (6.0 + i as f32 * 3.0, if i % 2 == 0 { -34.0 } else { -38.0 }))
        .collect();
    s.polyline(p.secondary, &teeth, 0.8, 1.0);
    s.rect(p.secondary, 0.0, -36.0, 8.0, 12.0, 1.0);
}

fn mermaid(s: &mut Sketch, p: &Palette) {
    s.ellipse(p.secondary, 6.0, 26.0, 12.0, 8.0, 1.0);
    s.fill(p.secondary, &[(14.0, 26.0), (34.0, 14.0), (30.0, 26.0), (34.0, 38.0)], 1.0);
    for i in 0..3 {
        s.arc(p.secondary.lighten(0.3), -2.0 + i as f32 * 6.0, 24.0, 3.0, 0.0, 180.0, 0.6, 0.8);
    }
    unicorn_head(s, Pose::new(-6.0, -4.0, 0.85), &Coat::from_palette(p));
    bubbles(s, p.highlight, &[(28.0, -20.0, 3.0), (34.0, -30.0, 2.0), (24.0, -34.0, 1.5)]);
}

fn seductive(s: &mut Sketch, p: &Palette) {
    unicorn_head(s, Pose::new(-4.0, 6.0, 1.1), &Coat::from_palette(p));
    s.heart(p.secondary, 1.0, 3.0, 3.0, 1.0);
    for (x, y, r) in [(26.0, -26.0, 5.0), (32.0, -10.0, 3.0), (-30.0, -30.0, 4.0)] {
        s.heart(p.accent, x, y, r, 0.9);
    }
}

fn ginormous(s: &mut Sketch, p: &Palette) {
    unicorn_head(s, Pose::new(-8.0, 16.0, 1.9), &Coat::from_palette(p));
}

fn flying(s: &mut Sketch, p: &Palette) {
    wing(s, Pose::new(-14.0, 10.0, 1.2), -1.0, p.primary.lighten(0.1));
    unicorn_head(s, Pose::new(0.0, 4.0, 0.95), &Coat::from_palette(p));
    wing(s, Pose::new(-4.0, 18.0, 1.0), 1.0, p.primary);
}

fn rainbow_unicorn(s: &mut Sketch, p: &Palette) {
    rainbow(s, 0.0, 34.0, 48.0, 4.5, 0.9);
    unicorn_head(s, Pose::new(-4.0, 8.0, 1.05), &Coat::rainbow(p.primary));
    let burst = star_points(26.0, -26.0, 6.0, 2.0, 8, 0.0);
    s.fill(p.highlight, &burst, 1.0);
}
