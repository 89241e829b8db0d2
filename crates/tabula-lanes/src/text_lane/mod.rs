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

//! Text analysis strategies used by the primitive renderer.

mod emoji;
mod segment;

pub use emoji::*;
pub use segment::*;

use tabula_core::lane::{Lane, LaneKind};

/// A lane splitting text into emoji and non-emoji runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSegmentationLane;

impl TextSegmentationLane {
    /// Creates a new `TextSegmentationLane`.
    pub fn new() -> Self {
        Self
    }

    /// Splits `text` into maximal runs. See [`segment_runs`].
    pub fn segment<'a>(&self, text: &'a str) -> Vec<TextRun<'a>> {
        segment_runs(text)
    }
}

impl Lane for TextSegmentationLane {
    fn strategy_name(&self) -> &'static str {
        "TextSegmentation"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Text
    }
}
