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

//! Pooled per-level buffers for the backtracking search.
//!
//! The search keeps one [`Frame`] per recursion level. Frames live in a
//! `Vec` indexed by depth and are handed out and returned in strict stack
//! order. Releasing a level only lowers the depth counter, so the buffer
//! keeps its allocation for the next sibling or child; acquiring clears it
//! first so no stale vertices leak from an earlier level.

use crate::graph::Vertex;

/// Scratch state owned by one search level.
#[derive(Debug, Default)]
pub struct Frame {
    pub(crate) candidates: Vec<Vertex>,
    pub(crate) excluded: Vec<Vertex>,
    pub(crate) branches: Vec<Vertex>,
    pub(crate) cursor: usize,
}

impl Frame {
    fn reset(&mut self) {
        self.candidates.clear();
        self.excluded.clear();
        self.branches.clear();
        self.cursor = 0;
    }

    /// Vertices that may still extend the clique at this level (P).
    pub fn candidates(&self) -> &[Vertex] {
        &self.candidates
    }

    /// Vertices already tried at this level (X).
    pub fn excluded(&self) -> &[Vertex] {
        &self.excluded
    }

    /// Moves `v` from the candidate set to the excluded set once its branch
    /// has been explored.
    pub(crate) fn exclude(&mut self, v: Vertex) {
        if let Some(i) = self.candidates.iter().position(|&w| w == v) {
            self.candidates.remove(i);
        }
        self.excluded.push(v);
    }

    /// Borrows P and X for reading alongside the branch buffer for writing.
    pub(crate) fn split_for_branching(&mut self) -> (&[Vertex], &[Vertex], &mut Vec<Vertex>) {
        (&self.candidates, &self.excluded, &mut self.branches)
    }

    /// Next vertex to branch on, advancing the cursor.
    pub(crate) fn next_branch(&mut self) -> Option<Vertex> {
        let v = self.branches.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(v)
    }
}

/// Stack-discipline pool of [`Frame`]s that grows on demand.
#[derive(Debug, Default)]
pub struct FrameArena {
    frames: Vec<Frame>,
    depth: usize,
}

impl FrameArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocates `levels` frames.
    pub fn with_capacity(levels: usize) -> Self {
        let mut frames = Vec::with_capacity(levels);
        frames.resize_with(levels, Frame::default);
        FrameArena { frames, depth: 0 }
    }

    /// Number of frames currently held by the search.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of frames allocated so far, active or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Pushes a fresh, empty frame and returns it.
    pub fn acquire(&mut self) -> &mut Frame {
        if self.depth == self.frames.len() {
            self.frames.push(Frame::default());
        }
        let frame = &mut self.frames[self.depth];
        self.depth += 1;
        frame.reset();
        frame
    }

    /// Pushes a fresh frame and returns it together with the frame below.
    ///
    /// # Panics
    /// Panics if no frame is active.
    pub fn acquire_child(&mut self) -> (&Frame, &mut Frame) {
        assert!(self.depth > 0, "acquire_child needs an active parent frame");
        self.acquire();
        let depth = self.depth;
        let (below, above) = self.frames.split_at_mut(depth - 1);
        (&below[depth - 2], &mut above[0])
    }

    /// Returns the top frame to the pool.
    pub fn release(&mut self) {
        debug_assert!(self.depth > 0, "release without a matching acquire");
        self.depth = self.depth.saturating_sub(1);
    }

    /// Topmost active frame.
    #[inline]
    pub fn top(&mut self) -> Option<&mut Frame> {
        match self.depth {
            0 => None,
            d => Some(&mut self.frames[d - 1]),
        }
    }

    /// Releases every active frame, innermost first.
    pub fn unwind(&mut self) {
        while self.depth > 0 {
            self.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_past_initial_capacity() {
        let mut arena = FrameArena::with_capacity(1);
        arena.acquire().candidates.push(1);
        arena.acquire().candidates.push(2);
        arena.acquire().candidates.push(3);
        assert_eq!(arena.depth(), 3);
        assert_eq!(arena.capacity(), 3);
    }

    #[test]
    fn reacquired_frame_is_cleared() {
        let mut arena = FrameArena::new();
        arena.acquire();
        {
            let (_, child) = arena.acquire_child();
            child.candidates.extend([4, 5]);
            child.excluded.push(6);
            child.branches.push(4);
            child.cursor = 1;
        }
        arena.release();
        let (parent, child) = arena.acquire_child();
        assert!(parent.candidates().is_empty());
        assert!(child.candidates().is_empty());
        assert!(child.excluded().is_empty());
        assert!(child.branches.is_empty());
        assert_eq!(child.cursor, 0);
    }

    #[test]
    fn child_sees_parent_contents() {
        let mut arena = FrameArena::new();
        arena.acquire().candidates.extend([1, 2, 3]);
        let (parent, child) = arena.acquire_child();
        child.candidates.extend(parent.candidates().iter().filter(|&&v| v != 2));
        assert_eq!(child.candidates(), &[1, 3]);
    }

    #[test]
    fn exclude_moves_vertex() {
        let mut frame = Frame::default();
        frame.candidates.extend([1, 2, 3]);
        frame.exclude(2);
        assert_eq!(frame.candidates(), &[1, 3]);
        assert_eq!(frame.excluded(), &[2]);
    }

    #[test]
    fn unwind_releases_everything() {
        let mut arena = FrameArena::new();
        for _ in 0..4 {
            arena.acquire();
        }
        arena.unwind();
        assert_eq!(arena.depth(), 0);
        assert!(arena.top().is_none());
        assert_eq!(arena.capacity(), 4);
    }
}
