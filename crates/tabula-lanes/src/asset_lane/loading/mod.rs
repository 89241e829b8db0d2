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

//! Loaders turning raw file bytes into engine-ready assets.

mod audio_loader_lane;
mod texture_loader_lane;

pub use audio_loader_lane::*;
pub use texture_loader_lane::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or decoding an asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The bytes were not a valid instance of the expected format.
    #[error("failed to decode {format} data: {reason}")]
    Decode {
        /// The format the loader expected.
        format: &'static str,
        /// What went wrong.
        reason: String,
    },
}

impl AssetError {
    pub(crate) fn decode(format: &'static str, reason: impl ToString) -> Self {
        Self::Decode {
            format,
            reason: reason.to_string(),
        }
    }
}

/// A trait for types that can load a specific kind of asset from a byte slice.
///
/// Implementors are responsible for the potentially CPU-intensive work of
/// parsing and decoding raw file data. Each loader is specialized for a
/// single asset type `A`.
pub trait AssetLoaderLane<A>: tabula_core::lane::Lane {
    /// Parses a byte slice and converts it into an instance of the asset `A`.
    fn load(&self, bytes: &[u8]) -> Result<A, AssetError>;
}
