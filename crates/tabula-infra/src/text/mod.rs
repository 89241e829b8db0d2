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

//! Font backends for the primitive renderer.
//!
//! Both backends are found by probing a fixed list of well-known OS font
//! paths. A failed probe yields `None` and the renderer degrades: without a
//! text font nothing is drawn, without a color emoji font emoji fall back to
//! tinted glyphs or dots.

mod emoji_font;
mod ttf_font;

pub use emoji_font::{ColorEmojiFont, EMOJI_FONT_CANDIDATES};
pub use ttf_font::{TtfFontSystem, TEXT_FONT_CANDIDATES};

use std::path::{Path, PathBuf};

/// Tries `load` on each path in order and returns the first success.
///
/// Failures are logged at debug level and never retried.
fn probe_paths<T>(
    candidates: impl IntoIterator<Item = PathBuf>,
    what: &str,
    mut load: impl FnMut(&Path) -> anyhow::Result<T>,
) -> Option<T> {
    for path in candidates {
        if !path.is_file() {
            continue;
        }
        match load(&path) {
            Ok(font) => {
                log::info!("Loaded {what} from {}", path.display());
                return Some(font);
            }
            Err(e) => log::debug!("Skipping {what} candidate {}: {e:#}", path.display()),
        }
    }
    log::warn!("No usable {what} found");
    None
}
