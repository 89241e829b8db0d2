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

/// Counters describing the work submitted to the sprite batch.
///
/// `sprites` and `batches` are reset by `begin_frame`; `texture_uploads`
/// accumulates over the renderer's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Sprites submitted since the frame began.
    pub sprites: usize,
    /// Number of `begin` calls issued to the batch this frame (clip changes restart it).
    pub batches: usize,
    /// Textures uploaded to the backend since the renderer was created.
    pub texture_uploads: usize,
}
