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

use crate::motifs::{baby_unicorn, cloud, Coat, Pose};
use crate::palette::Palette;
use crate::shapes::Sketch;
use tabula_core::math::Color;

pub(super) fn draw(s: &mut Sketch, variant: usize, palette: &Palette) {
    let coat = Coat::from_palette(palette);
    match variant {
        0 => {
            baby_unicorn(s, Pose::new(0.0, 4.0, 1.1), &coat);
            for (x, y, r) in [
                (-32.0, -26.0, 5.0),
                (30.0, -22.0, 4.0),
                (-28.0, 30.0, 3.5),
                (31.0, 28.0, 4.5),
            ] {
                s.heart(palette.secondary, x, y, r, 0.9);
            }
        }
        1 => {
            // Asleep on a cloud under a crescent moon.
            cloud(s, Pose::new(0.0, 22.0, 1.3), palette.highlight, 0.95);
            baby_unicorn(s, Pose::new(0.0, 2.0, 0.85), &coat);
            for side in [-1.0, 1.0] {
                s.line(palette.shadow, (side * 7.0, 1.0), (side * 3.0, 1.0), 0.8, 1.0);
            }
            s.circle(palette.glow, 28.0, -30.0, 9.0, 1.0);
            s.circle(palette.sky_inner, 32.0, -33.0, 8.0, 1.0);
            for (x, y, r) in [(16.0, -20.0, 1.2), (20.0, -27.0, 1.6), (25.0, -17.0, 1.0)] {
                s.circle(palette.highlight, x, y, r, 0.9);
            }
        }
        2 => {
            // Hatching from an egg.
            baby_unicorn(s, Pose::new(0.0, -4.0, 0.9), &coat);
            let shell = Color::rgb8(250, 245, 230);
            s.fill(
                shell,
                &[
                    (-22.0, 6.0),
                    (-15.0, 12.0),
                    (-8.0, 5.0),
                    (0.0, 12.0),
                    (8.0, 5.0),
                    (15.0, 12.0),
                    (22.0, 6.0),
                    (20.0, 26.0),
                    (0.0, 36.0),
                    (-20.0, 26.0),
                ],
                1.0,
            );
            for (x, y) in [(-10.0, 22.0), (6.0, 28.0), (14.0, 18.0)] {
                s.circle(palette.secondary, x, y, 3.0, 0.7);
            }
        }
        _ => {
            // Holding a balloon.
            s.line(palette.shadow, (14.0, 8.0), (26.0, -18.0), 0.5, 0.8);
            s.ellipse(palette.secondary, 27.0, -28.0, 9.0, 11.0, 1.0);
            s.circle(Color::WHITE, 24.0, -32.0, 2.5, 0.6);
            baby_unicorn(s, Pose::new(-4.0, 8.0, 1.0), &coat);
            s.sparkles(
                palette.highlight,
                &[(-30.0, -30.0, 5.0), (-34.0, 12.0, 3.5), (34.0, 26.0, 4.0)],
                0.9,
            );
        }
    }
}
