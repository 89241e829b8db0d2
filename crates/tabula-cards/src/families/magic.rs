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

use crate::motifs::Pose;
use crate::palette::Palette;
use crate::shapes::{regular_polygon, Sketch};
use tabula_core::math::Color;

pub(super) fn draw(s: &mut Sketch, variant: usize, palette: &Palette) {
    match variant {
        0 => {
            // Wand with a sparkle trail.
            s.line(palette.shadow, (-26.0, 28.0), (10.0, -8.0), 4.0, 1.0);
            s.line(palette.highlight, (-26.0, 28.0), (-20.0, 22.0), 4.0, 1.0);
            s.star(palette.secondary, 14.0, -12.0, 12.0, 5, 1.0);
            s.sparkles(
                palette.highlight,
                &[(24.0, -28.0, 5.0), (30.0, -4.0, 3.5), (2.0, -30.0, 3.0), (-4.0, 8.0, 2.5)],
                1.0,
            );
        }
        1 => {
            // Crystal ball on a stand.
            let base = Pose::new(0.0, 26.0, 1.0);
            let stand = base.pts(&[(-16.0, 0.0), (16.0, 0.0), (11.0, -8.0), (-11.0, -8.0)]);
            s.fill(palette.shadow.lighten(0.25), &stand, 1.0);
            s.circle(palette.primary, 0.0, -2.0, 22.0, 0.85);
            s.circle(palette.accent, 0.0, -2.0, 14.0, 0.5);
            s.circle(palette.highlight, 0.0, -2.0, 6.0, 0.8);
            s.circle(Color::WHITE, -9.0, -12.0, 4.0, 0.7);
            s.ring(palette.highlight, 0.0, -2.0, 22.0, 1.2, 0.9);
        }
        2 => {
            // Open spell book with floating runes.
            s.fill(palette.primary, &[(-30.0, 10.0), (0.0, 16.0), (0.0, 34.0), (-30.0, 28.0)], 1.0);
            s.fill(
                palette.primary.darken(0.15),
                &[(30.0, 10.0), (0.0, 16.0), (0.0, 34.0), (30.0, 28.0)],
                1.0,
            );
            for i in 0..3 {
                let y = 18.0 + i as f32 * 4.0;
                s.line(palette.highlight, (-25.0, y), (-5.0, y + 3.0), 0.6, 0.7);
                s.line(palette.highlight, (5.0, y + 3.0), (25.0, y), 0.6, 0.7);
            }
            for (x, y, r) in [(-16.0, -14.0, 7.0), (2.0, -26.0, 8.0), (18.0, -10.0, 6.0)] {
                s.hexagon(palette.secondary, x, y, r, 1.2, 1.0);
                s.circle(palette.highlight, x, y, r * 0.3, 0.9);
            }
        }
        _ => {
            // Summoning circle.
            s.ring(palette.secondary, 0.0, 0.0, 34.0, 1.5, 1.0);
            s.ring(palette.secondary, 0.0, 0.0, 28.0, 0.8, 0.8);
            let corners = regular_polygon(0.0, 0.0, 28.0, 5, -90.0);
            let star: Vec<(f32, f32)> = (0..5).map(|i| corners[(i * 2) % 5]).collect();
            s.outline(palette.highlight, &star, 1.2, 1.0);
            for &(x, y) in &corners {
                s.circle(palette.accent, x, y, 3.0, 1.0);
            }
            s.circle(palette.glow, 0.0, 0.0, 6.0, 0.9);
        }
    }
}
