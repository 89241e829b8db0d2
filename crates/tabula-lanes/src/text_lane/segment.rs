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

//! Text-run and emoji-cluster segmentation.

use super::emoji::{is_emoji, is_emoji_modifier, is_regional_indicator, ZWJ};

/// A maximal substring whose characters share one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun<'a> {
    /// The run's text.
    pub text: &'a str,
    /// `true` if the run is drawn through the emoji path.
    pub is_emoji: bool,
}

/// Splits `text` into maximal runs of emoji and non-emoji characters.
///
/// Emoji modifiers and joiners stay attached to the emoji run they follow.
pub fn segment_runs(text: &str) -> Vec<TextRun<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (i, ch) in text.char_indices() {
        let emoji = is_emoji(ch) || (current == Some(true) && is_emoji_modifier(ch));
        match current {
            Some(kind) if kind != emoji => {
                runs.push(TextRun {
                    text: &text[start..i],
                    is_emoji: kind,
                });
                start = i;
                current = Some(emoji);
            }
            None => current = Some(emoji),
            _ => {}
        }
    }
    if let Some(kind) = current {
        runs.push(TextRun {
            text: &text[start..],
            is_emoji: kind,
        });
    }
    runs
}

/// Splits an emoji run into clusters, each drawn as one color glyph.
///
/// A cluster is a base codepoint followed by any variation selectors, skin
/// tones or tags, with zero-width-joiner sequences and flag pairs kept whole.
pub fn emoji_clusters(run: &str) -> Vec<&str> {
    let mut clusters = Vec::new();
    let mut start: Option<usize> = None;
    let mut join_next = false;
    let mut pending_flag = false;

    for (i, ch) in run.char_indices() {
        let attaches = match start {
            None => false,
            Some(_) => {
                join_next
                    || ch == ZWJ
                    || is_emoji_modifier(ch)
                    || (pending_flag && is_regional_indicator(ch))
            }
        };
        if !attaches {
            if let Some(s) = start {
                clusters.push(&run[s..i]);
            }
            start = Some(i);
            pending_flag = is_regional_indicator(ch);
        } else if is_regional_indicator(ch) {
            pending_flag = false;
        }
        join_next = ch == ZWJ;
    }
    if let Some(s) = start {
        clusters.push(&run[s..]);
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_one_run() {
        let runs = segment_runs("Draw a card");
        assert_eq!(runs.len(), 1);
        assert!(!runs[0].is_emoji);
        assert!(segment_runs("").is_empty());
    }

    #[test]
    fn test_mixed_runs() {
        let runs = segment_runs("Hi 🦄🔥 there");
        let texts: Vec<_> = runs.iter().map(|r| (r.text, r.is_emoji)).collect();
        assert_eq!(
            texts,
            vec![("Hi ", false), ("🦄🔥", true), (" there", false)]
        );
    }

    #[test]
    fn test_clusters_keep_modifiers_and_joiners() {
        let family = "👨\u{200D}👩\u{200D}👧";
        let thumbs = "👍\u{1F3FD}";
        let heart = "❤\u{FE0F}";
        let run = format!("{family}{thumbs}{heart}🔥");
        let clusters = emoji_clusters(&run);
        assert_eq!(clusters, vec![family, thumbs, heart, "🔥"]);
    }

    #[test]
    fn test_flags_pair_up() {
        let clusters = emoji_clusters("🇫🇷🇯🇵");
        assert_eq!(clusters, vec!["🇫🇷", "🇯🇵"]);
    }
}
