use super::config::SupportThreshold;
use super::Item;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Per-item transaction support, kept in first-discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct ItemCounts<T> {
    counts: Vec<(T, usize)>,
    #[serde(skip)]
    positions: HashMap<T, usize>,
    num_transactions: usize,
}

impl<T: Item> ItemCounts<T> {
    /// Counts each distinct item once per transaction.
    pub fn from_transactions<S: AsRef<[T]>>(transactions: &[S]) -> Self {
        let mut counts: Vec<(T, usize)> = Vec::new();
        let mut positions: HashMap<T, usize> = HashMap::new();

        for transaction in transactions {
            let mut seen: HashSet<&T> = HashSet::new();
            for item in transaction.as_ref() {
                if !seen.insert(item) {
                    continue;
                }
                match positions.get(item) {
                    Some(&pos) => counts[pos].1 += 1,
                    None => {
                        positions.insert(item.clone(), counts.len());
                        counts.push((item.clone(), 1));
                    }
                }
            }
        }

        debug!(
            transactions = transactions.len(),
            distinct_items = counts.len(),
            "counted item support"
        );

        Self {
            counts,
            positions,
            num_transactions: transactions.len(),
        }
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn get(&self, item: &T) -> Option<usize> {
        self.positions.get(item).map(|&pos| self.counts[pos].1)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(item, count)| (item, *count))
    }

    /// Drops items below `threshold` and ranks the rest by descending
    /// support. The sort is stable, so ties keep discovery order.
    pub fn filter(&self, threshold: &SupportThreshold) -> ItemFrequencyTable<T> {
        let mut frequent: Vec<(T, usize)> = self
            .counts
            .iter()
            .filter(|&(_, count)| threshold.is_met(*count))
            .cloned()
            .collect();

        frequent.sort_by(|a, b| b.1.cmp(&a.1));

        let ranks = frequent
            .iter()
            .enumerate()
            .map(|(rank, (item, _))| (item.clone(), rank))
            .collect();

        debug!(
            min_support_count = threshold.count,
            kept = frequent.len(),
            dropped = self.counts.len() - frequent.len(),
            "applied support threshold"
        );

        ItemFrequencyTable {
            entries: frequent,
            ranks,
        }
    }
}

/// Surviving items in global order, most frequent first.
#[derive(Debug, Clone, Serialize)]
pub struct ItemFrequencyTable<T> {
    entries: Vec<(T, usize)>,
    #[serde(skip)]
    ranks: HashMap<T, usize>,
}

impl<T: Item> ItemFrequencyTable<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn support(&self, item: &T) -> Option<usize> {
        self.ranks.get(item).map(|&rank| self.entries[rank].1)
    }

    /// Position of `item` in the global order.
    pub fn rank(&self, item: &T) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.ranks.contains_key(item)
    }

    pub fn ordering(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.entries.iter().map(|(item, _)| item)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.entries.iter().map(|(item, count)| (item, *count))
    }
}
