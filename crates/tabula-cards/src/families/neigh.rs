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

use crate::motifs::{horn, prohibition, shield, unicorn_head, Coat, Pose};
use crate::palette::Palette;
use crate::shapes::Sketch;

pub(super) fn draw(s: &mut Sketch, variant: usize, palette: &Palette) {
    match variant {
        0 => {
            // A horn, crossed out.
            horn(s, (0.0, 30.0), (0.0, -32.0), 14.0, palette.secondary);
            s.line(palette.primary, (-26.0, -26.0), (26.0, 26.0), 7.0, 1.0);
            s.line(palette.primary, (26.0, -26.0), (-26.0, 26.0), 7.0, 1.0);
        }
        1 => {
            let coat = Coat::from_palette(palette);
            unicorn_head(s, Pose::new(-2.0, 6.0, 0.8), &Coat { body: palette.secondary, ..coat });
            prohibition(s, 0.0, 0.0, 34.0, palette.primary, 1.0);
        }
        2 => {
            shield(s, Pose::new(0.0, 0.0, 1.3), palette.secondary, palette.primary);
            s.line(palette.primary, (-12.0, -14.0), (12.0, 10.0), 5.0, 1.0);
            s.line(palette.primary, (12.0, -14.0), (-12.0, 10.0), 5.0, 1.0);
        }
        _ => {
            // Gavel striking.
            s.line(palette.shadow.lighten(0.35), (-24.0, 24.0), (8.0, -8.0), 4.0, 1.0);
            s.fill(
                palette.primary,
                &[(-2.0, -26.0), (10.0, -38.0), (30.0, -18.0), (18.0, -6.0)],
                1.0,
            );
            s.rect(palette.shadow.lighten(0.2), -30.0, 28.0, 34.0, 6.0, 1.0);
            for (x, y) in [(12.0, 16.0), (22.0, 8.0), (18.0, 26.0)] {
                s.line(palette.highlight, (6.0, 20.0), (x, y), 0.8, 0.8);
            }
        }
    }
}
