use std::collections::VecDeque;

/// Snapshots kept for undo.
pub const HISTORY_LIMIT: usize = 50;

/// Bounded undo/redo over snapshots of one value.
///
/// Callers [`record`](History::record) the value *before* each mutation. Recording drops the redo
/// stack, and the oldest snapshot falls off once [`HISTORY_LIMIT`] is reached.
#[derive(Clone, Debug)]
pub struct History<T> {
    past: VecDeque<T>,
    future: Vec<T>,
    limit: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl<T> History<T> {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            past: VecDeque::with_capacity(limit.min(HISTORY_LIMIT)),
            future: Vec::new(),
            limit,
        }
    }

    pub fn record(&mut self, previous: T) {
        self.future.clear();
        if self.limit == 0 {
            return;
        }
        if self.past.len() == self.limit {
            self.past.pop_front();
        }
        self.past.push_back(previous);
    }

    /// Swap `current` for the latest snapshot. `None` when there is nothing to undo.
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.past.pop_back()?;
        self.future.push(current);
        Some(previous)
    }

    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.future.pop()?;
        self.past.push_back(current);
        if self.past.len() > self.limit {
            self.past.pop_front();
        }
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.past.len()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/history.rs"]
mod tests;
