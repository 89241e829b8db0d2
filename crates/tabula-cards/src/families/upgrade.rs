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

use crate::motifs::{arrow, crown, potion, Pose};
use crate::palette::Palette;
use crate::shapes::Sketch;

pub(super) fn draw(s: &mut Sketch, variant: usize, palette: &Palette) {
    match variant {
        0 => {
            arrow(s, Pose::new(0.0, 2.0, 1.2), true, palette.primary);
            arrow(s, Pose::new(0.0, 2.0, 0.8), true, palette.highlight.with_alpha(0.35));
            s.sparkles(
                palette.highlight,
                &[(-26.0, -24.0, 6.0), (27.0, -10.0, 4.5), (-22.0, 24.0, 3.5), (24.0, 28.0, 5.0)],
                1.0,
            );
        }
        1 => {
            // Stacked chevrons.
            for i in 0..3 {
                let y = 18.0 - i as f32 * 16.0;
                let alpha = 0.55 + 0.2 * i as f32;
                s.polyline(
                    palette.primary,
                    &[(-22.0, y + 10.0), (0.0, y - 10.0), (22.0, y + 10.0)],
                    7.0,
                    alpha,
                );
            }
            s.sparkle(palette.highlight, 0.0, -34.0, 7.0, 1.0);
        }
        2 => {
            potion(s, Pose::new(0.0, 6.0, 1.3), palette.highlight, palette.secondary);
            s.sparkles(
                palette.accent,
                &[(-26.0, -20.0, 4.5), (24.0, -26.0, 5.5), (28.0, 16.0, 3.5)],
                1.0,
            );
        }
        _ => {
            s.hexagon(palette.accent, 0.0, 10.0, 24.0, 0.0, 0.6);
            s.hexagon(palette.highlight, 0.0, 10.0, 24.0, 1.5, 1.0);
            crown(s, Pose::new(0.0, -18.0, 1.1), palette.primary, palette.secondary);
            s.star(palette.primary, 0.0, 12.0, 10.0, 5, 1.0);
        }
    }
}
