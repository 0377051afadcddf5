//! Bounded recent-sample buffers.

use std::collections::VecDeque;

use crate::probe::ProbeResult;

/// Fixed-capacity chronological buffer. The oldest entry is evicted when a
/// push would exceed capacity; the most recent entry is last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryWindow<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> HistoryWindow<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(value);
    }

    /// The last `k` entries in chronological order (fewer if not yet filled).
    pub fn tail(&self, k: usize) -> impl Iterator<Item = &T> {
        let skip = self.entries.len().saturating_sub(k);
        self.entries.iter().skip(skip)
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
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

impl<T: Clone> HistoryWindow<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

/// Latency and reachability windows, updated together once per cycle.
#[derive(Debug, Clone)]
pub struct ProbeHistory {
    latency: HistoryWindow<Option<u32>>,
    reachability: HistoryWindow<bool>,
}

impl ProbeHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            latency: HistoryWindow::new(capacity),
            reachability: HistoryWindow::new(capacity),
        }
    }

    pub fn record(&mut self, result: &ProbeResult) {
        self.latency.push(result.latency_ms);
        self.reachability.push(result.reachable);
    }

    pub fn latency(&self) -> &HistoryWindow<Option<u32>> {
        &self.latency
    }

    pub fn reachability(&self) -> &HistoryWindow<bool> {
        &self.reachability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_evicted() {
        let mut window = HistoryWindow::new(3);
        for v in [10, 20, 30, 40] {
            window.push(v);
        }
        assert_eq!(window.to_vec(), vec![20, 30, 40]);
        assert_eq!(window.len(), 3);
        assert_eq!(window.latest(), Some(&40));
    }

    #[test]
    fn test_tail_before_filled() {
        let mut window = HistoryWindow::new(3);
        window.push(1);
        window.push(2);

        assert_eq!(window.tail(3).copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(window.tail(1).copied().collect::<Vec<_>>(), vec![2]);
        assert_eq!(window.tail(0).count(), 0);
    }

    #[test]
    fn test_probe_history_tracks_both_series() {
        let mut history = ProbeHistory::new(3);
        history.record(&ProbeResult::reachable(true, Some(12)));
        history.record(&ProbeResult::unreachable());

        assert_eq!(history.latency().to_vec(), vec![Some(12), None]);
        assert_eq!(history.reachability().to_vec(), vec![true, false]);
    }
}
