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

//! The game-state to background-track table.

use std::collections::BTreeMap;

/// Built-in background tracks, one per game state.
pub const DEFAULT_MUSIC: &[(&str, &str)] = &[
    ("menu", "menu_theme.ogg"),
    ("lobby", "lobby_lounge.ogg"),
    ("blackjack", "blackjack_table.ogg"),
    ("poker", "poker_night.ogg"),
    ("roulette", "roulette_spin.ogg"),
    ("slots", "slots_arcade.ogg"),
    ("baccarat", "baccarat_salon.ogg"),
    ("craps", "craps_alley.ogg"),
    ("uno", "uno_party.ogg"),
    ("unstable_unicorns", "unstable_unicorns.ogg"),
    ("exploding_kittens", "exploding_kittens.ogg"),
    ("game_over", "game_over.ogg"),
];

/// Maps game-state names to background track file names.
///
/// State names are matched case-insensitively after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicTable {
    tracks: BTreeMap<String, String>,
}

impl Default for MusicTable {
    fn default() -> Self {
        Self {
            tracks: DEFAULT_MUSIC
                .iter()
                .map(|&(state, track)| (state.to_owned(), track.to_owned()))
                .collect(),
        }
    }
}

fn normalize(state: &str) -> String {
    state.trim().to_lowercase()
}

impl MusicTable {
    /// The built-in table with `overrides` added or replacing entries.
    pub fn with_overrides<I, S, T>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: Into<String>,
    {
        let mut table = Self::default();
        for (state, track) in overrides {
            table.tracks.insert(normalize(state.as_ref()), track.into());
        }
        table
    }

    /// The track file for `state`, if any.
    pub fn track_for(&self, state: &str) -> Option<&str> {
        self.tracks.get(&normalize(state)).map(String::as_str)
    }

    /// Number of states with a track.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
