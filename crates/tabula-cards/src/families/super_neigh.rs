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

use crate::motifs::{crown, lightning, prohibition, shield, Pose};
use crate::palette::Palette;
use crate::shapes::Sketch;

pub(super) fn draw(s: &mut Sketch, variant: usize, palette: &Palette) {
    match variant {
        0 => {
            prohibition(s, 0.0, 0.0, 38.0, palette.accent, 0.8);
            prohibition(s, 0.0, 0.0, 28.0, palette.primary, 1.0);
            s.sparkles(
                palette.highlight,
                &[(-30.0, -30.0, 5.0), (32.0, -28.0, 4.0), (30.0, 32.0, 5.0), (-32.0, 30.0, 3.5)],
                1.0,
            );
        }
        1 => {
            shield(s, Pose::new(0.0, 0.0, 1.35), palette.primary, palette.secondary);
            shield(s, Pose::new(0.0, -1.0, 1.0), palette.primary.darken(0.2), palette.highlight);
            s.star(palette.secondary, 0.0, -4.0, 11.0, 5, 1.0);
        }
        2 => {
            s.line(palette.primary, (-30.0, -30.0), (30.0, 30.0), 9.0, 1.0);
            s.line(palette.primary, (30.0, -30.0), (-30.0, 30.0), 9.0, 1.0);
            lightning(s, Pose::new(0.0, 0.0, 1.0), palette.secondary, 1.0);
        }
        _ => {
            crown(s, Pose::new(0.0, -20.0, 1.1), palette.secondary, palette.primary);
            s.line(palette.primary, (-18.0, 0.0), (18.0, 32.0), 6.0, 1.0);
            s.line(palette.primary, (18.0, 0.0), (-18.0, 32.0), 6.0, 1.0);
        }
    }
}
