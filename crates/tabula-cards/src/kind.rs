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

use std::fmt;

/// The illustration family of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// Baby unicorns, born in the nursery.
    BabyUnicorn,
    /// Basic and magical unicorns.
    Unicorn,
    /// Upgrade cards.
    Upgrade,
    /// Downgrade cards.
    Downgrade,
    /// Magic cards.
    Magic,
    /// Instant cards.
    Instant,
    /// The Neigh instant.
    Neigh,
    /// The Super Neigh instant.
    SuperNeigh,
    /// Anything else.
    Generic,
}

impl CardKind {
    /// Every kind, in declaration order.
    pub const ALL: [CardKind; 9] = [
        CardKind::BabyUnicorn,
        CardKind::Unicorn,
        CardKind::Upgrade,
        CardKind::Downgrade,
        CardKind::Magic,
        CardKind::Instant,
        CardKind::Neigh,
        CardKind::SuperNeigh,
        CardKind::Generic,
    ];

    /// Parses a kind name, ignoring case, separators and surrounding spaces.
    ///
    /// Unknown names map to [`CardKind::Generic`].
    pub fn parse(kind: &str) -> Self {
        let normalized = kind
            .trim()
            .to_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        match normalized.as_str() {
            "baby unicorn" | "baby" | "babyunicorn" => CardKind::BabyUnicorn,
            "unicorn" | "basic unicorn" | "magical unicorn" => CardKind::Unicorn,
            "upgrade" => CardKind::Upgrade,
            "downgrade" => CardKind::Downgrade,
            "magic" | "magic card" => CardKind::Magic,
            "instant" => CardKind::Instant,
            "neigh" => CardKind::Neigh,
            "super neigh" | "superneigh" => CardKind::SuperNeigh,
            _ => CardKind::Generic,
        }
    }

    /// A stable identifier, used in cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::BabyUnicorn => "baby_unicorn",
            CardKind::Unicorn => "unicorn",
            CardKind::Upgrade => "upgrade",
            CardKind::Downgrade => "downgrade",
            CardKind::Magic => "magic",
            CardKind::Instant => "instant",
            CardKind::Neigh => "neigh",
            CardKind::SuperNeigh => "super_neigh",
            CardKind::Generic => "generic",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spellings() {
        assert_eq!(CardKind::parse("Baby Unicorn"), CardKind::BabyUnicorn);
        assert_eq!(CardKind::parse("baby_unicorn"), CardKind::BabyUnicorn);
        assert_eq!(CardKind::parse("  UNICORN "), CardKind::Unicorn);
        assert_eq!(CardKind::parse("Magical Unicorn"), CardKind::Unicorn);
        assert_eq!(CardKind::parse("super-neigh"), CardKind::SuperNeigh);
        assert_eq!(CardKind::parse("Super  Neigh"), CardKind::SuperNeigh);
        assert_eq!(CardKind::parse("Neigh"), CardKind::Neigh);
        assert_eq!(CardKind::parse("magic"), CardKind::Magic);
    }

    #[test]
    fn test_unknown_is_generic() {
        assert_eq!(CardKind::parse(""), CardKind::Generic);
        assert_eq!(CardKind::parse("exploding kitten"), CardKind::Generic);
    }

    #[test]
    fn test_identifiers_round_trip() {
        for kind in CardKind::ALL {
            assert_eq!(CardKind::parse(kind.as_str()), kind);
        }
    }
}
