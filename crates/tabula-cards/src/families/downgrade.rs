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

use crate::motifs::{arrow, chain_link, cloud, horn, lightning, Pose};
use crate::palette::Palette;
use crate::shapes::Sketch;

pub(super) fn draw(s: &mut Sketch, variant: usize, palette: &Palette) {
    match variant {
        0 => {
            arrow(s, Pose::new(0.0, 0.0, 1.2), false, palette.secondary);
            // Cracks across the shaft.
            s.polyline(
                palette.shadow,
                &[(-9.0, -20.0), (-2.0, -14.0), (-6.0, -8.0), (3.0, -2.0)],
                1.2,
                0.9,
            );
            s.polyline(palette.shadow, &[(9.0, 6.0), (2.0, 12.0), (6.0, 18.0)], 1.0, 0.9);
        }
        1 => {
            // A broken horn, the tip falling away.
            horn(s, (-10.0, 30.0), (-2.0, -4.0), 14.0, palette.primary);
            let tip = [(4.0, -10.0), (12.0, -36.0), (10.0, -8.0)];
            s.fill(palette.primary.lighten(0.15), &tip, 1.0);
            s.polyline(palette.highlight, &[(-8.0, -6.0), (-2.0, -10.0), (2.0, -5.0)], 0.8, 0.7);
        }
        2 => {
            cloud(s, Pose::new(0.0, -16.0, 1.4), palette.primary, 1.0);
            cloud(s, Pose::new(-6.0, -22.0, 1.0), palette.primary.lighten(0.15), 1.0);
            lightning(s, Pose::new(2.0, 14.0, 0.9), palette.highlight, 1.0);
            for x in [-24.0, -14.0, 16.0, 26.0] {
                s.line(palette.accent, (x, 6.0), (x - 4.0, 18.0), 1.0, 0.7);
            }
        }
        _ => {
            // Chains and a padlock.
            for i in 0..6 {
                let t = i as f32;
                chain_link(s, -34.0 + t * 13.0, -20.0 + t * 4.0, 6.0, palette.primary);
            }
            s.rect(palette.secondary, -12.0, 2.0, 24.0, 20.0, 1.0);
            s.arc(palette.primary, 0.0, 2.0, 8.0, 180.0, 360.0, 3.0, 1.0);
            s.circle(palette.shadow, 0.0, 10.0, 2.5, 1.0);
            s.rect(palette.shadow, -1.0, 10.0, 2.0, 6.0, 1.0);
        }
    }
}
