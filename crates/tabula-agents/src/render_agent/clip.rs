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

//! The nested scissor rectangle stack.

use tabula_core::math::Rect;

/// A stack of scissor rectangles. Every pushed rectangle is intersected with
/// the one below it, so nested clips never widen.
#[derive(Debug, Default, Clone)]
pub(crate) struct ClipStack {
    stack: Vec<Rect>,
}

impl ClipStack {
    /// Pushes `rect` clipped against the current top (or `root` when empty)
    /// and returns the effective scissor.
    pub(crate) fn push(&mut self, rect: Rect, root: Rect) -> Rect {
        let parent = self.current().unwrap_or(root);
        let clipped = rect.round_out().intersect(&parent);
        self.stack.push(clipped);
        clipped
    }

    /// Pops the top rectangle, returning `false` when the stack was empty.
    pub(crate) fn pop(&mut self) -> bool {
        self.stack.pop().is_some()
    }

    /// The active scissor, `None` when no clip is pushed.
    pub(crate) fn current(&self) -> Option<Rect> {
        self.stack.last().copied()
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_clips_intersect() {
        let root = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut clips = ClipStack::default();
        assert_eq!(
            clips.push(Rect::new(10.0, 10.0, 50.0, 50.0), root),
            Rect::new(10.0, 10.0, 50.0, 50.0),
        );
        let inner = clips.push(Rect::new(40.0, 0.0, 100.0, 30.0), root);
        assert_eq!(inner, Rect::new(40.0, 10.0, 20.0, 20.0));
        assert_eq!(clips.depth(), 2);
        assert!(clips.pop());
        assert_eq!(clips.current(), Some(Rect::new(10.0, 10.0, 50.0, 50.0)));
        assert!(clips.pop());
        assert!(!clips.pop());
    }

    #[test]
    fn test_clip_is_bounded_by_root() {
        let root = Rect::new(0.0, 0.0, 64.0, 32.0);
        let mut clips = ClipStack::default();
        assert_eq!(clips.push(Rect::new(-10.0, -10.0, 500.0, 500.0), root), root);
    }
}
