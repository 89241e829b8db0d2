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

use crate::palette::Palette;
use crate::shapes::Sketch;

pub(super) fn draw(s: &mut Sketch, variant: usize, palette: &Palette) {
    match variant {
        0 => {
            // Card-back lattice.
            for i in -3..=3 {
                let o = i as f32 * 14.0;
                s.line(palette.secondary, (o - 30.0, -40.0), (o + 30.0, 40.0), 0.8, 0.6);
                s.line(palette.secondary, (o + 30.0, -40.0), (o - 30.0, 40.0), 0.8, 0.6);
            }
            s.fill(palette.primary, &[(0.0, -22.0), (16.0, 0.0), (0.0, 22.0), (-16.0, 0.0)], 1.0);
            s.outline(
                palette.accent,
                &[(0.0, -22.0), (16.0, 0.0), (0.0, 22.0), (-16.0, 0.0)],
                1.2,
                1.0,
            );
        }
        1 => {
            // Question mark.
            s.arc(palette.primary, 0.0, -12.0, 14.0, 180.0, 405.0, 6.0, 1.0);
            s.line(palette.primary, (10.0, -2.0), (0.0, 8.0), 6.0, 1.0);
            s.line(palette.primary, (0.0, 8.0), (0.0, 14.0), 6.0, 1.0);
            s.circle(palette.primary, 0.0, 26.0, 4.0, 1.0);
        }
        2 => {
            for (i, r) in [34.0, 26.0, 18.0, 10.0].into_iter().enumerate() {
                let color = if i % 2 == 0 { palette.secondary } else { palette.accent };
                s.hexagon(color, 0.0, 0.0, r, 1.5, 1.0);
            }
            s.hexagon(palette.primary, 0.0, 0.0, 5.0, 0.0, 1.0);
        }
        _ => {
            // Die showing five.
            s.rect(palette.primary, -22.0, -22.0, 44.0, 44.0, 1.0);
            s.frame(palette.secondary, -22.0, -22.0, 44.0, 44.0, 2.0, 1.0);
            for (x, y) in [(-11.0, -11.0), (11.0, -11.0), (0.0, 0.0), (-11.0, 11.0), (11.0, 11.0)] {
                s.circle(palette.shadow, x, y, 4.0, 1.0);
            }
        }
    }
}
