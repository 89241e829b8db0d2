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

//! Foreground compositions per card kind, four variants each.

mod baby_unicorn;
mod downgrade;
mod generic;
mod instant;
mod magic;
mod neigh;
mod super_neigh;
mod unicorn;
mod upgrade;

use crate::kind::CardKind;
use crate::palette::Palette;
use crate::shapes::Sketch;

type Composition = fn(&mut Sketch, usize, &Palette);

fn composition(kind: CardKind) -> Composition {
    match kind {
        CardKind::BabyUnicorn => baby_unicorn::draw,
        CardKind::Unicorn => unicorn::draw,
        CardKind::Upgrade => upgrade::draw,
        CardKind::Downgrade => downgrade::draw,
        CardKind::Magic => magic::draw,
        CardKind::Instant => instant::draw,
        CardKind::Neigh => neigh::draw,
        CardKind::SuperNeigh => super_neigh::draw,
        CardKind::Generic => generic::draw,
    }
}

/// Draws variant `variant` (already reduced to `0..4`) of `kind`.
pub(crate) fn draw(kind: CardKind, variant: usize, sketch: &mut Sketch, palette: &Palette) {
    composition(kind)(sketch, variant, palette);
}
