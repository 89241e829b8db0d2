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

//! # Lane Abstraction
//!
//! A **Lane** is a reusable, swappable processing strategy owned by an agent.
//! Each lane encapsulates one algorithmic approach to a domain task: span
//! generation for the primitive renderer, audio mixing, asset decoding.
//!
//! Domain-specific traits extend `Lane` with their execution methods, for
//! example `AssetLoaderLane<A>: Lane` in `tabula-lanes`.

use std::fmt;

/// Classifies the kind of processing a lane performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    /// 2D rasterization and span generation.
    Raster,
    /// Text segmentation and glyph classification.
    Text,
    /// Audio mixing.
    Audio,
    /// Asset loading and decoding.
    Asset,
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneKind::Raster => write!(f, "Raster"),
            LaneKind::Text => write!(f, "Text"),
            LaneKind::Audio => write!(f, "Audio"),
            LaneKind::Asset => write!(f, "Asset"),
        }
    }
}

/// The base trait shared by every lane.
pub trait Lane: Send + Sync {
    /// Human-readable name identifying this lane's strategy.
    ///
    /// Used for logging. Should be unique within a lane kind.
    fn strategy_name(&self) -> &'static str;

    /// The kind of processing this lane performs.
    fn lane_kind(&self) -> LaneKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;

    impl Lane for Dummy {
        fn strategy_name(&self) -> &'static str {
            "Dummy"
        }
        fn lane_kind(&self) -> LaneKind {
            LaneKind::Raster
        }
    }

    #[test]
    fn lane_identity() {
        let lane: Box<dyn Lane> = Box::new(Dummy);
        assert_eq!(lane.strategy_name(), "Dummy");
        assert_eq!(lane.lane_kind().to_string(), "Raster");
        assert_eq!(LaneKind::Asset.to_string(), "Asset");
    }
}
