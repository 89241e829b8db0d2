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

//! Procedural card illustrations.
//!
//! [`draw_illustration`] renders a cached atmospheric background followed by
//! a foreground composition chosen from the card kind and a variant index.
//! Unicorn cards may instead get a bespoke composition picked from their name.
//! Every coordinate is proportional to the card area, so illustrations scale
//! uniformly.

#![warn(missing_docs)]

mod background;
mod families;
mod kind;
mod motifs;
mod named;
mod palette;
mod shapes;

pub use kind::CardKind;
pub use named::{named_override, named_tokens};

use tabula_agents::render_agent::PrimitiveRenderer;
use tabula_core::math::Rect;

use crate::shapes::Sketch;

/// Number of compositions per card kind.
pub const VARIANT_COUNT: i32 = 4;

/// Draws the illustration of a card into `area`.
///
/// `kind` is matched case-insensitively; unknown kinds get the generic
/// illustration. `variant` is reduced modulo [`VARIANT_COUNT`], negative
/// values included. For unicorn cards, `card_name` may select a bespoke
/// composition and background palette.
///
/// Areas narrower or shorter than one pixel draw nothing. Must be called
/// between `begin_frame` and `end_frame`.
pub fn draw_illustration(
    renderer: &mut PrimitiveRenderer,
    kind: &str,
    variant: i32,
    area: Rect,
    card_name: Option<&str>,
) {
    if !(area.width >= 1.0 && area.height >= 1.0) {
        log::trace!("Illustration area {area:?} too small, skipped");
        return;
    }
    let kind = CardKind::parse(kind);
    let variant = variant.rem_euclid(VARIANT_COUNT) as usize;
    let named = match kind {
        CardKind::Unicorn => card_name.and_then(named::find),
        _ => None,
    };
    let palette = named.map_or_else(|| palette::for_kind(kind, variant), |n| n.palette);

    background::draw(renderer, kind, variant, area, card_name, &palette);

    renderer.push_clip(area);
    {
        let mut sketch = Sketch::new(renderer, area);
        match named {
            Some(named) => (named.draw)(&mut sketch, &palette),
            None => families::draw(kind, variant, &mut sketch, &palette),
        }
    }
    renderer.pop_clip();
}
