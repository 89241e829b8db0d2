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

use crate::motifs::{horn, rainbow, unicorn_head, Coat, Pose, RAINBOW_BANDS};
use crate::palette::Palette;
use crate::shapes::Sketch;

pub(super) fn draw(s: &mut Sketch, variant: usize, palette: &Palette) {
    let coat = Coat::from_palette(palette);
    match variant {
        0 => {
            unicorn_head(s, Pose::new(-4.0, 6.0, 1.15), &coat);
            s.sparkles(
                palette.highlight,
                &[(26.0, -30.0, 6.0), (33.0, -12.0, 3.5), (-32.0, -30.0, 4.0)],
                1.0,
            );
        }
        1 => {
            rainbow(s, 0.0, 30.0, 46.0, 4.0, 0.85);
            unicorn_head(s, Pose::new(-2.0, 10.0, 1.0), &Coat::rainbow(palette.primary));
        }
        2 => {
            // Night profile under a crescent.
            for (x, y, r) in [
                (-30.0, -32.0, 1.0),
                (-18.0, -38.0, 1.4),
                (-36.0, -14.0, 0.8),
                (30.0, 8.0, 1.1),
                (36.0, -6.0, 0.7),
            ] {
                s.circle(palette.highlight, x, y, r, 0.9);
            }
            s.circle(palette.glow, 24.0, -28.0, 11.0, 1.0);
            s.circle(palette.sky_outer, 29.0, -31.0, 9.5, 1.0);
            unicorn_head(s, Pose::new(-6.0, 8.0, 1.05), &coat);
        }
        _ => {
            // Heraldic crest: crossed horns over a hexagon.
            s.hexagon(palette.secondary, 0.0, 4.0, 30.0, 0.0, 0.9);
            s.hexagon(palette.highlight, 0.0, 4.0, 30.0, 2.0, 1.0);
            s.hexagon(palette.accent, 0.0, 4.0, 22.0, 1.2, 0.8);
            horn(s, (-22.0, 26.0), (20.0, -30.0), 8.0, coat.horn);
            horn(s, (22.0, 26.0), (-20.0, -30.0), 8.0, coat.horn);
            s.star(RAINBOW_BANDS[2], 0.0, 4.0, 8.0, 5, 1.0);
        }
    }
}
