//! Session command history.

use std::collections::VecDeque;

/// Ordered list of previously entered lines, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line`, then drop the oldest entries beyond `max`.
    pub fn push(&mut self, line: impl Into<String>, max: Option<usize>) {
        self.entries.push_back(line.into());
        if let Some(max) = max {
            self.truncate(max);
        }
    }

    /// Keep only the newest `max` entries.
    pub fn truncate(&mut self, max: usize) {
        while self.entries.len() > max {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for History {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Interpret a `HISTORY_MAX` value. Negative means unbounded.
pub fn limit_from(value: f64) -> Option<usize> {
    (value >= 0.0).then_some(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_trims_oldest() {
        let mut history = History::new();
        for line in ["a", "b", "c", "d"] {
            history.push(line, Some(2));
        }
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["c", "d"]);
    }

    #[test]
    fn unbounded_when_no_limit() {
        let mut history = History::new();
        for i in 0..50 {
            history.push(i.to_string(), None);
        }
        assert_eq!(history.len(), 50);
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut history = History::new();
        history.push("x", Some(0));
        assert!(history.is_empty());
    }

    #[test]
    fn limit_parsing() {
        assert_eq!(limit_from(100.0), Some(100));
        assert_eq!(limit_from(0.0), Some(0));
        assert_eq!(limit_from(-1.0), None);
    }

    #[test]
    fn collects_from_lines() {
        let history: History = ["one", "two"].into_iter().collect();
        assert_eq!(history.len(), 2);
    }
}
