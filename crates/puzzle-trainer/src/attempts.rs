//! Per-attempt counters reported to the spaced-repetition scheduler.

/// Incorrect-attempt count and sticky hint flag for the active puzzle.
/// These two values are the complete review signal handed to the external
/// scheduler when the puzzle is solved.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttemptTracker {
    incorrect: u32,
    hint_used: bool,
}

impl AttemptTracker {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn record_incorrect(&mut self) {
        self.incorrect += 1;
    }

    pub fn use_hint(&mut self) {
        self.hint_used = true;
    }

    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }
}
