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

//! Color sets shared by a card's background and foreground.

use crate::kind::CardKind;
use tabula_core::math::Color;

/// The colors of one illustration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Palette {
    /// Background gradient center.
    pub sky_inner: Color,
    /// Background gradient edge.
    pub sky_outer: Color,
    /// Central glow behind the subject.
    pub glow: Color,
    /// Energy arcs and secondary details.
    pub accent: Color,
    /// Sparkles, dust and rim light.
    pub highlight: Color,
    /// Vignette and outlines.
    pub shadow: Color,
    /// Main subject fill.
    pub primary: Color,
    /// Secondary subject fill.
    pub secondary: Color,
}

impl Palette {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        sky_inner: Color,
        sky_outer: Color,
        glow: Color,
        accent: Color,
        highlight: Color,
        shadow: Color,
        primary: Color,
        secondary: Color,
    ) -> Self {
        Self {
            sky_inner,
            sky_outer,
            glow,
            accent,
            highlight,
            shadow,
            primary,
            secondary,
        }
    }

    /// Shifts the sky towards lighter or darker tones for a variant.
    fn shaded(self, variant: usize) -> Self {
        let shift = [0.0, 0.08, -0.08, 0.15][variant % 4];
        let adjust = |c: Color| {
            if shift >= 0.0 {
                c.lighten(shift)
            } else {
                c.darken(-shift)
            }
        };
        Self {
            sky_inner: adjust(self.sky_inner),
            sky_outer: adjust(self.sky_outer),
            ..self
        }
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::rgb8(r, g, b)
}

pub(crate) const PASTEL: Palette = Palette::new(
    rgb(255, 214, 236),
    rgb(170, 130, 200),
    rgb(255, 240, 250),
    rgb(140, 220, 255),
    rgb(255, 255, 255),
    rgb(70, 40, 90),
    rgb(255, 250, 255),
    rgb(255, 170, 210),
);

pub(crate) const ROYAL: Palette = Palette::new(
    rgb(150, 120, 255),
    rgb(35, 20, 90),
    rgb(210, 190, 255),
    rgb(255, 120, 220),
    rgb(255, 245, 200),
    rgb(15, 5, 40),
    rgb(250, 250, 255),
    rgb(120, 220, 255),
);

pub(crate) const GOLDEN: Palette = Palette::new(
    rgb(255, 236, 150),
    rgb(200, 120, 30),
    rgb(255, 250, 210),
    rgb(255, 200, 60),
    rgb(255, 255, 230),
    rgb(80, 40, 10),
    rgb(255, 205, 60),
    rgb(110, 200, 120),
);

pub(crate) const STORM: Palette = Palette::new(
    rgb(120, 130, 150),
    rgb(30, 30, 45),
    rgb(160, 170, 190),
    rgb(150, 80, 200),
    rgb(220, 230, 255),
    rgb(10, 10, 15),
    rgb(90, 95, 110),
    rgb(200, 60, 80),
);

pub(crate) const ARCANE: Palette = Palette::new(
    rgb(90, 230, 220),
    rgb(20, 40, 90),
    rgb(160, 255, 245),
    rgb(200, 120, 255),
    rgb(240, 255, 255),
    rgb(5, 15, 40),
    rgb(120, 90, 200),
    rgb(255, 220, 120),
);

pub(crate) const EMBER: Palette = Palette::new(
    rgb(255, 200, 90),
    rgb(170, 40, 20),
    rgb(255, 235, 160),
    rgb(255, 120, 30),
    rgb(255, 250, 210),
    rgb(60, 10, 5),
    rgb(255, 230, 90),
    rgb(255, 90, 40),
);

pub(crate) const CRIMSON: Palette = Palette::new(
    rgb(240, 110, 110),
    rgb(90, 10, 20),
    rgb(255, 170, 160),
    rgb(255, 60, 60),
    rgb(255, 230, 220),
    rgb(35, 0, 5),
    rgb(230, 40, 50),
    rgb(250, 245, 240),
);

pub(crate) const ABYSS: Palette = Palette::new(
    rgb(170, 60, 90),
    rgb(20, 0, 20),
    rgb(255, 120, 140),
    rgb(255, 200, 60),
    rgb(255, 235, 180),
    rgb(0, 0, 0),
    rgb(200, 20, 40),
    rgb(255, 200, 60),
);

pub(crate) const SLATE: Palette = Palette::new(
    rgb(180, 190, 210),
    rgb(60, 70, 95),
    rgb(225, 230, 245),
    rgb(120, 160, 230),
    rgb(250, 250, 255),
    rgb(20, 25, 40),
    rgb(235, 235, 245),
    rgb(120, 140, 190),
);

pub(crate) const OCEAN: Palette = Palette::new(
    rgb(90, 200, 240),
    rgb(10, 40, 100),
    rgb(180, 240, 255),
    rgb(40, 150, 220),
    rgb(230, 250, 255),
    rgb(0, 15, 40),
    rgb(150, 190, 220),
    rgb(240, 240, 250),
);

pub(crate) const GRAVE: Palette = Palette::new(
    rgb(150, 200, 120),
    rgb(30, 45, 30),
    rgb(200, 240, 170),
    rgb(120, 90, 150),
    rgb(220, 255, 200),
    rgb(10, 15, 10),
    rgb(140, 190, 120),
    rgb(90, 60, 110),
);

pub(crate) const MEADOW: Palette = Palette::new(
    rgb(200, 240, 170),
    rgb(80, 140, 90),
    rgb(240, 255, 220),
    rgb(255, 200, 90),
    rgb(255, 255, 240),
    rgb(30, 50, 30),
    rgb(245, 235, 215),
    rgb(160, 110, 70),
);

pub(crate) const HONEY: Palette = Palette::new(
    rgb(255, 220, 110),
    rgb(160, 100, 20),
    rgb(255, 245, 190),
    rgb(40, 30, 20),
    rgb(255, 255, 235),
    rgb(50, 30, 5),
    rgb(255, 200, 40),
    rgb(40, 30, 20),
);

pub(crate) const HEAVEN: Palette = Palette::new(
    rgb(255, 250, 230),
    rgb(170, 190, 230),
    rgb(255, 255, 255),
    rgb(255, 220, 120),
    rgb(255, 255, 255),
    rgb(80, 90, 130),
    rgb(255, 255, 255),
    rgb(255, 215, 90),
);

pub(crate) const NIGHT: Palette = Palette::new(
    rgb(80, 80, 110),
    rgb(5, 5, 15),
    rgb(140, 140, 180),
    rgb(200, 40, 60),
    rgb(220, 220, 240),
    rgb(0, 0, 0),
    rgb(45, 45, 55),
    rgb(190, 190, 205),
);

pub(crate) const STEEL: Palette = Palette::new(
    rgb(230, 180, 120),
    rgb(90, 50, 30),
    rgb(255, 220, 170),
    rgb(255, 140, 40),
    rgb(255, 240, 210),
    rgb(30, 15, 5),
    rgb(190, 195, 205),
    rgb(255, 160, 40),
);

pub(crate) const LAGOON: Palette = Palette::new(
    rgb(120, 240, 220),
    rgb(20, 80, 120),
    rgb(200, 255, 245),
    rgb(255, 130, 180),
    rgb(240, 255, 255),
    rgb(5, 30, 50),
    rgb(255, 240, 250),
    rgb(60, 200, 170),
);

pub(crate) const ROSE: Palette = Palette::new(
    rgb(255, 150, 190),
    rgb(120, 20, 70),
    rgb(255, 210, 230),
    rgb(255, 60, 130),
    rgb(255, 240, 250),
    rgb(50, 0, 25),
    rgb(255, 245, 250),
    rgb(230, 30, 100),
);

pub(crate) const RAINBOW: Palette = Palette::new(
    rgb(255, 240, 200),
    rgb(110, 150, 230),
    rgb(255, 255, 240),
    rgb(255, 120, 200),
    rgb(255, 255, 255),
    rgb(40, 40, 90),
    rgb(255, 255, 255),
    rgb(255, 190, 80),
);

pub(crate) const STARS_AND_STRIPES: Palette = Palette::new(
    rgb(230, 230, 255),
    rgb(30, 50, 130),
    rgb(255, 255, 255),
    rgb(210, 30, 50),
    rgb(255, 255, 255),
    rgb(10, 15, 50),
    rgb(250, 250, 255),
    rgb(210, 30, 50),
);

/// The palette of a card kind, shaded per variant.
pub(crate) fn for_kind(kind: CardKind, variant: usize) -> Palette {
    let base = match kind {
        CardKind::BabyUnicorn => PASTEL,
        CardKind::Unicorn => ROYAL,
        CardKind::Upgrade => GOLDEN,
        CardKind::Downgrade => STORM,
        CardKind::Magic => ARCANE,
        CardKind::Instant => EMBER,
        CardKind::Neigh => CRIMSON,
        CardKind::SuperNeigh => ABYSS,
        CardKind::Generic => SLATE,
    };
    base.shaded(variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_zero_is_the_base_palette() {
        assert_eq!(for_kind(CardKind::Magic, 0), ARCANE);
    }

    #[test]
    fn test_variants_only_shade_the_sky() {
        let shaded = for_kind(CardKind::Upgrade, 1);
        assert_ne!(shaded.sky_inner, GOLDEN.sky_inner);
        assert_eq!(shaded.primary, GOLDEN.primary);
    }
}
