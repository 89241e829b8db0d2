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

//! Emoji classification.
//!
//! The classification is deliberately broad: every codepoint from U+2000
//! upwards counts as emoji, which also sweeps in General Punctuation, arrows
//! and math symbols. Narrowing it changes how existing UI strings render.

use tabula_core::math::Color;

/// Inclusive codepoint ranges classified as emoji.
pub const EMOJI_RANGES: &[(u32, u32)] = &[(0x2000, 0x10FFFF)];

/// Codepoints below the emoji ranges that are still rendered as emoji.
pub const EMOJI_EXCEPTIONS: &[char] = &['\u{00A9}', '\u{00AE}'];

/// Zero width joiner.
pub const ZWJ: char = '\u{200D}';

/// Returns `true` if `ch` should be drawn through the emoji path.
pub fn is_emoji(ch: char) -> bool {
    let code = ch as u32;
    EMOJI_EXCEPTIONS.contains(&ch)
        || EMOJI_RANGES
            .iter()
            .any(|&(start, end)| (start..=end).contains(&code))
}

/// Returns `true` if `text` contains at least one emoji codepoint.
pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}

/// Returns `true` for codepoints that attach to the preceding emoji.
pub fn is_emoji_modifier(ch: char) -> bool {
    matches!(ch as u32,
        // Variation selectors (text / emoji presentation)
        0xFE0E | 0xFE0F |
        // Combining enclosing keycap
        0x20E3 |
        // Fitzpatrick skin tones
        0x1F3FB..=0x1F3FF |
        // Tag sequences (subdivision flags)
        0xE0020..=0xE007F
    )
}

/// Returns `true` for regional indicator symbols (flag halves).
pub fn is_regional_indicator(ch: char) -> bool {
    matches!(ch as u32, 0x1F1E6..=0x1F1FF)
}

/// Approximate colors of common emoji, used to tint monochrome glyphs when no
/// color emoji typeface is available.
const EMOJI_TINTS: &[(char, [u8; 3])] = &[
    ('\u{2764}', [220, 40, 60]),   // red heart
    ('\u{1F525}', [255, 120, 20]), // fire
    ('\u{2B50}', [255, 205, 40]),  // star
    ('\u{1F31F}', [255, 215, 70]), // glowing star
    ('\u{2728}', [255, 225, 110]), // sparkles
    ('\u{1F984}', [230, 150, 230]), // unicorn
    ('\u{1F308}', [150, 120, 240]), // rainbow
    ('\u{1F4A3}', [60, 60, 70]),   // bomb
    ('\u{1F4A5}', [255, 140, 40]), // collision
    ('\u{1F431}', [240, 170, 80]), // cat face
    ('\u{1F408}', [200, 140, 70]), // cat
    ('\u{1F3B2}', [235, 235, 235]), // game die
    ('\u{1F0CF}', [220, 60, 60]),  // joker
    ('\u{2660}', [30, 30, 40]),    // spade
    ('\u{2665}', [210, 30, 50]),   // heart suit
    ('\u{2666}', [210, 30, 50]),   // diamond suit
    ('\u{2663}', [30, 30, 40]),    // club suit
    ('\u{1F4B0}', [230, 190, 60]), // money bag
    ('\u{1FA99}', [240, 200, 60]), // coin
    ('\u{1F3C6}', [240, 190, 40]), // trophy
    ('\u{1F451}', [245, 200, 50]), // crown
    ('\u{1F480}', [225, 225, 215]), // skull
    ('\u{1F47B}', [240, 240, 250]), // ghost
    ('\u{1F409}', [70, 170, 80]),  // dragon
    ('\u{1F988}', [120, 150, 180]), // shark
    ('\u{1F419}', [230, 100, 120]), // octopus
    ('\u{1F40D}', [90, 170, 70]),  // snake
    ('\u{1F6AB}', [220, 40, 40]),  // prohibited
    ('\u{2705}', [60, 180, 80]),   // check mark button
    ('\u{274C}', [220, 40, 40]),   // cross mark
    ('\u{1F389}', [250, 170, 60]), // party popper
    ('\u{1F50A}', [90, 140, 230]), // speaker
    ('\u{1F507}', [140, 140, 150]), // muted speaker
];

/// Looks up the fallback tint of an emoji codepoint.
pub fn emoji_tint(ch: char) -> Option<Color> {
    EMOJI_TINTS
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|&(_, [r, g, b])| Color::rgb8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_not_emoji() {
        assert!(!"Hello, world! 123".chars().any(is_emoji));
        assert!(!is_emoji('é'));
    }

    #[test]
    fn test_emoji_and_exceptions() {
        assert!(is_emoji('🦄'));
        assert!(is_emoji('❤'));
        assert!(is_emoji('©'));
        assert!(is_emoji('®'));
        assert!(contains_emoji("Unicorn 🦄"));
    }

    #[test]
    fn test_general_punctuation_is_swept_in() {
        // En dash and ellipsis live in General Punctuation.
        assert!(is_emoji('\u{2013}'));
        assert!(is_emoji('…'));
        assert!(!is_emoji('\u{1FFF}'));
    }

    #[test]
    fn test_modifiers() {
        assert!(is_emoji_modifier('\u{FE0F}'));
        assert!(is_emoji_modifier('\u{1F3FD}'));
        assert!(!is_emoji_modifier('a'));
        assert!(is_regional_indicator('🇫'));
    }

    #[test]
    fn test_tint_lookup() {
        assert_eq!(emoji_tint('🔥'), Some(Color::rgb8(255, 120, 20)));
        assert_eq!(emoji_tint('🙂'), None);
    }
}
