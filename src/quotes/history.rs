// Recency buffer for shown quotes
//
// Remembers the ids of the most recently displayed quotes so the selector
// can avoid near-term repeats. Capacity is 5; the exclusion window the
// selector consults is the last 3. Lives only for the UI session.

use std::collections::VecDeque;

/// Maximum ids retained (oldest dropped beyond this)
pub const HISTORY_CAP: usize = 5;

/// How many of the most recent ids are excluded from the next draw
pub const EXCLUDE_WINDOW: usize = 3;

/// Bounded recency buffer of previously shown quote identifiers
#[derive(Debug, Clone, Default)]
pub struct History {
    shown: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self {
            shown: VecDeque::with_capacity(HISTORY_CAP),
        }
    }

    /// Record a shown quote id, dropping the oldest entry past capacity
    pub fn record(&mut self, id: &str) {
        if self.shown.len() >= HISTORY_CAP {
            self.shown.pop_front();
        }
        self.shown.push_back(id.to_string());
    }

    /// Whether `id` falls inside the exclusion window (last 3 shown)
    pub fn is_recent(&self, id: &str) -> bool {
        self.shown
            .iter()
            .rev()
            .take(EXCLUDE_WINDOW)
            .any(|shown| shown == id)
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    /// Most recently shown id, if any
    pub fn last(&self) -> Option<&str> {
        self.shown.back().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_bounded() {
        let mut history = History::new();
        for i in 0..20 {
            history.record(&format!("q{i}"));
            assert!(history.len() <= HISTORY_CAP);
        }
        assert_eq!(history.len(), HISTORY_CAP);
        // Oldest entries slid out
        assert!(!history.is_recent("q0"));
        assert_eq!(history.last(), Some("q19"));
    }

    #[test]
    fn test_exclusion_window_is_last_three() {
        let mut history = History::new();
        for id in ["a", "b", "c", "d", "e"] {
            history.record(id);
        }
        // Buffer holds a..e, window covers c, d, e
        assert!(!history.is_recent("a"));
        assert!(!history.is_recent("b"));
        assert!(history.is_recent("c"));
        assert!(history.is_recent("d"));
        assert!(history.is_recent("e"));
    }

    #[test]
    fn test_short_history_window() {
        let mut history = History::new();
        history.record("a");
        assert!(history.is_recent("a"));
        assert!(!history.is_recent("b"));
    }
}
