use crate::domain::model::SpecificityResult;
use std::collections::VecDeque;

pub const HISTORY_CAPACITY: usize = 50;

/// Most-recent-first list of completed calculations. Oldest entries fall off the end.
#[derive(Debug, Clone)]
pub struct ResultHistory {
    entries: VecDeque<SpecificityResult>,
    capacity: usize,
}

impl ResultHistory {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, result: SpecificityResult) {
        self.entries.push_front(result);
        self.entries.truncate(self.capacity);
    }

    pub fn latest(&self) -> Option<&SpecificityResult> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpecificityResult> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<SpecificityResult> {
        self.entries.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ResultHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{SpecificityInput, SpecificityOutput};

    fn result(rank: u64) -> SpecificityResult {
        SpecificityResult::merge(
            SpecificityInput::default(),
            SpecificityOutput {
                host_rank: rank,
                host_index: rank as f64 / 10.0,
            },
        )
    }

    #[test]
    fn test_push_prepends() {
        let mut history = ResultHistory::new();
        history.push(result(1));
        history.push(result(2));

        let ranks: Vec<u64> = history.iter().map(|r| r.output.host_rank).collect();
        assert_eq!(ranks, vec![2, 1]);
        assert_eq!(history.latest().unwrap().output.host_rank, 2);
    }

    #[test]
    fn test_evicts_oldest_beyond_capacity() {
        let mut history = ResultHistory::new();
        for rank in 1..=51 {
            history.push(result(rank));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.latest().unwrap().output.host_rank, 51);
        assert_eq!(history.iter().last().unwrap().output.host_rank, 2);
    }

    #[test]
    fn test_custom_capacity() {
        let mut history = ResultHistory::with_capacity(2);
        for rank in 1..=3 {
            history.push(result(rank));
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.capacity(), 2);
        assert_eq!(history.to_vec()[1].output.host_rank, 2);
    }

    #[test]
    fn test_starts_empty() {
        let history = ResultHistory::default();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
