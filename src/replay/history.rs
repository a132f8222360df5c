//! Per-stick flick history
//!
//! Holds the last few distinct flicks of each stick so rotation gestures can
//! be matched against the tail. The classifier only ever borrows these.

use tracing::trace;

use crate::skill::{SkillInput, StickSide};

/// Bounded flick history for both sticks
#[derive(Debug, Clone)]
pub struct FlickHistory {
    window: usize,
    left: Vec<SkillInput>,
    right: Vec<SkillInput>,
}

impl FlickHistory {
    /// Create an empty history keeping at most `window` flicks per stick
    pub fn new(window: usize) -> Self {
        Self {
            window,
            left: Vec::with_capacity(window + 1),
            right: Vec::with_capacity(window + 1),
        }
    }

    fn buffer(&self, side: StickSide) -> &Vec<SkillInput> {
        match side {
            StickSide::Left => &self.left,
            StickSide::Right => &self.right,
        }
    }

    fn buffer_mut(&mut self, side: StickSide) -> &mut Vec<SkillInput> {
        match side {
            StickSide::Left => &mut self.left,
            StickSide::Right => &mut self.right,
        }
    }

    /// Record a flick
    ///
    /// A flick equal to the most recent one is the stick still resting in
    /// the same sector; it is not recorded and `false` is returned.
    pub fn record(&mut self, side: StickSide, input: SkillInput) -> bool {
        let window = self.window;
        let buffer = self.buffer_mut(side);

        if buffer.last() == Some(&input) {
            trace!("Ignoring repeated {} on {}", input, side);
            return false;
        }

        buffer.push(input);
        let excess = buffer.len().saturating_sub(window);
        buffer.drain(..excess);

        true
    }

    /// The most recent `len` flicks, oldest first, if that many are recorded
    pub fn recent(&self, side: StickSide, len: usize) -> Option<&[SkillInput]> {
        let buffer = self.buffer(side);
        buffer.len().checked_sub(len).map(|start| &buffer[start..])
    }

    pub fn clear(&mut self, side: StickSide) {
        self.buffer_mut(side).clear();
    }

    pub fn len(&self, side: StickSide) -> usize {
        self.buffer(side).len()
    }

    pub fn is_empty(&self, side: StickSide) -> bool {
        self.buffer(side).is_empty()
    }
}
