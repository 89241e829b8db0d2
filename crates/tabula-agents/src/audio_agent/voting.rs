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

//! Democratic muting and per-client volume preferences.

use std::collections::BTreeMap;

/// Per-client mute votes.
///
/// Mute is asserted when the votes for mute strictly exceed half of the
/// registered voters, so a tie keeps the music playing.
#[derive(Debug, Clone, Default)]
pub struct MuteVotes {
    votes: BTreeMap<String, bool>,
}

impl MuteVotes {
    /// Records or replaces the vote of `client`.
    pub fn set_vote(&mut self, client: &str, mute: bool) {
        self.votes.insert(client.to_owned(), mute);
    }

    /// Forgets `client`. Returns `true` if it had voted.
    pub fn remove(&mut self, client: &str) -> bool {
        self.votes.remove(client).is_some()
    }

    /// Number of registered voters.
    pub fn voter_count(&self) -> usize {
        self.votes.len()
    }

    /// Number of voters currently asking for mute.
    pub fn mute_count(&self) -> usize {
        self.votes.values().filter(|&&mute| mute).count()
    }

    /// Number of mute votes needed to reach a majority.
    pub fn mute_required(&self) -> usize {
        self.voter_count() / 2 + 1
    }

    /// Returns `true` when a strict majority votes for mute.
    pub fn is_muted(&self) -> bool {
        self.mute_count() * 2 > self.voter_count()
    }
}

/// Per-client listening volumes.
#[derive(Debug, Clone, Default)]
pub struct ClientVolumes {
    volumes: BTreeMap<String, f32>,
}

impl ClientVolumes {
    /// Records the volume of `client`, clamped to `[0, 1]`. `NaN` counts as silence.
    pub fn set(&mut self, client: &str, volume: f32) {
        let volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
        self.volumes.insert(client.to_owned(), volume);
    }

    /// The stored volume of `client`.
    pub fn get(&self, client: &str) -> Option<f32> {
        self.volumes.get(client).copied()
    }

    /// Forgets `client`. Returns `true` if it had a volume.
    pub fn remove(&mut self, client: &str) -> bool {
        self.volumes.remove(client).is_some()
    }

    /// The quietest registered volume, or `base` when nobody registered one.
    pub fn effective(&self, base: f32) -> f32 {
        self.volumes.values().copied().reduce(f32::min).unwrap_or(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_of_three() {
        let mut votes = MuteVotes::default();
        votes.set_vote("a", true);
        votes.set_vote("b", false);
        votes.set_vote("c", false);
        assert!(!votes.is_muted());
        assert_eq!(votes.mute_required(), 2);

        votes.set_vote("b", true);
        assert!(votes.is_muted());
        assert_eq!(votes.mute_count(), 2);
    }

    #[test]
    fn test_tie_is_not_muted() {
        let mut votes = MuteVotes::default();
        votes.set_vote("a", true);
        votes.set_vote("b", false);
        assert!(!votes.is_muted());
        assert_eq!(votes.mute_required(), 2);
    }

    #[test]
    fn test_no_voters_is_not_muted() {
        let votes = MuteVotes::default();
        assert!(!votes.is_muted());
        assert_eq!(votes.mute_required(), 1);
    }

    #[test]
    fn test_volume_clamping_and_minimum() {
        let mut volumes = ClientVolumes::default();
        assert_eq!(volumes.effective(0.35), 0.35);
        volumes.set("a", 1.5);
        volumes.set("b", -0.2);
        assert_eq!(volumes.get("a"), Some(1.0));
        assert_eq!(volumes.get("b"), Some(0.0));
        volumes.set("c", f32::NAN);
        assert_eq!(volumes.get("c"), Some(0.0));
        assert!(volumes.remove("b"));
        assert!(!volumes.remove("b"));
    }
}
