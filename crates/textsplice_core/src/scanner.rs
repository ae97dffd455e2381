//! Per-leaf match cursor.

use regex::Captures;

use crate::Pattern;

/// Walks the matches of one pattern through one string.
///
/// The cursor starts at zero for every leaf and only this scanner moves
/// it. Offsets are byte offsets and always sit on char boundaries.
pub(crate) struct Scanner<'p, 't> {
    pattern: &'p Pattern,
    input: &'t str,
    last_index: usize,
    done: bool,
}

impl<'p, 't> Scanner<'p, 't> {
    pub(crate) fn new(pattern: &'p Pattern, input: &'t str) -> Self {
        Self {
            pattern,
            input,
            last_index: 0,
            done: false,
        }
    }

    /// Finds the next candidate at or after the cursor.
    ///
    /// Non-global patterns get exactly one attempt.
    pub(crate) fn next_match(&mut self) -> Option<Captures<'t>> {
        if self.done || self.last_index > self.input.len() {
            return None;
        }

        let captures = self
            .pattern
            .regex()
            .captures_at(self.input, self.last_index);

        if captures.is_none() || !self.pattern.is_global() {
            self.done = true;
        }
        captures
    }

    /// Moves past an accepted match spanning `start..end`.
    ///
    /// An empty match moves one char forward so the scan cannot stall.
    pub(crate) fn accept(&mut self, start: usize, end: usize) {
        self.last_index = if end > start {
            end
        } else {
            self.step_from(start)
        };
    }

    /// Resumes one char after the start of a rejected match.
    pub(crate) fn reject(&mut self, start: usize) {
        self.last_index = self.step_from(start);
    }

    fn step_from(&self, at: usize) -> usize {
        self.input
            .get(at..)
            .and_then(|rest| rest.chars().next())
            .map_or(at + 1, |c| at + c.len_utf8())
    }
}
