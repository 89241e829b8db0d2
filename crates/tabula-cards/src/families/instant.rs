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

use crate::motifs::{lightning, Pose};
use crate::palette::Palette;
use crate::shapes::{star_points, Sketch};

pub(super) fn draw(s: &mut Sketch, variant: usize, palette: &Palette) {
    match variant {
        0 => {
            lightning(s, Pose::new(0.0, 0.0, 1.3), palette.primary, 1.0);
            lightning(s, Pose::new(1.0, 0.0, 0.9), palette.highlight, 0.6);
        }
        1 => {
            // Stopwatch.
            s.rect(palette.shadow, -4.0, -34.0, 8.0, 6.0, 1.0);
            s.circle(palette.highlight, 0.0, 2.0, 28.0, 1.0);
            s.ring(palette.secondary, 0.0, 2.0, 28.0, 3.0, 1.0);
            for i in 0..12 {
                let angle = (i as f32 * 30.0).to_radians();
                let (c, sn) = (angle.cos(), angle.sin());
                s.line(
                    palette.shadow,
                    (c * 21.0, 2.0 + sn * 21.0),
                    (c * 24.0, 2.0 + sn * 24.0),
                    1.0,
                    0.8,
                );
            }
            s.line(palette.shadow, (0.0, 2.0), (0.0, -16.0), 2.0, 1.0);
            s.line(palette.secondary, (0.0, 2.0), (12.0, 10.0), 1.5, 1.0);
            s.circle(palette.shadow, 0.0, 2.0, 2.5, 1.0);
        }
        2 => {
            // Burst.
            let burst = star_points(0.0, 0.0, 38.0, 18.0, 12, -90.0);
            s.fill(palette.secondary, &burst, 0.9);
            let core = star_points(0.0, 0.0, 24.0, 12.0, 12, -75.0);
            s.fill(palette.primary, &core, 1.0);
            s.circle(palette.highlight, 0.0, 0.0, 8.0, 1.0);
        }
        _ => {
            // Hourglass.
            s.rect(palette.shadow, -20.0, -32.0, 40.0, 5.0, 1.0);
            s.rect(palette.shadow, -20.0, 27.0, 40.0, 5.0, 1.0);
            s.outline(
                palette.highlight,
                &[
                    (-16.0, -27.0),
                    (16.0, -27.0),
                    (2.0, 0.0),
                    (16.0, 27.0),
                    (-16.0, 27.0),
                    (-2.0, 0.0),
                ],
                1.2,
                1.0,
            );
            s.triangle(palette.primary, (-8.0, -12.0), (8.0, -12.0), (0.0, -2.0), 1.0);
            s.triangle(palette.primary, (0.0, 10.0), (14.0, 26.0), (-14.0, 26.0), 1.0);
            s.line(palette.primary, (0.0, -2.0), (0.0, 20.0), 0.8, 0.9);
        }
    }
}
