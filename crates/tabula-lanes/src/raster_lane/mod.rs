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

//! Rasterization strategies.
//!
//! [`scanline`] turns circles, rings and polygons into horizontal pixel spans
//! that the primitive renderer submits as stretched sprites. [`VectorCanvas`]
//! is the anti-aliased CPU backend used for cached textures.

mod canvas;
mod coverage;
mod path;
pub mod scanline;

pub use canvas::*;
pub use coverage::*;
pub use path::*;
pub use scanline::{circle_spans, polygon_spans, ring_spans, Span, ALL_ROWS};

use std::ops::Range;

use tabula_core::lane::{Lane, LaneKind};
use tabula_core::math::Vec2;

/// A lane generating the pixel spans of filled shapes.
///
/// Every span costs one sprite submission, so the work is O(height) per
/// shape. This suits the small radii used by card art (up to a few hundred
/// pixels) and is not meant for large shapes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanlineLane;

impl ScanlineLane {
    /// Creates a new `ScanlineLane`.
    pub fn new() -> Self {
        Self
    }

    /// Spans of a filled circle. See [`circle_spans`].
    pub fn circle(&self, center: Vec2, radius: f32, rows: Range<i32>) -> Vec<Span> {
        circle_spans(center, radius, rows)
    }

    /// Spans of a ring. See [`ring_spans`].
    pub fn ring(&self, center: Vec2, radius: f32, width: f32, rows: Range<i32>) -> Vec<Span> {
        ring_spans(center, radius, width, rows)
    }

    /// Spans of a filled polygon. See [`polygon_spans`].
    pub fn polygon(&self, points: &[Vec2], rows: Range<i32>) -> Vec<Span> {
        polygon_spans(points, rows)
    }
}

impl Lane for ScanlineLane {
    fn strategy_name(&self) -> &'static str {
        "Scanline"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Raster
    }
}
