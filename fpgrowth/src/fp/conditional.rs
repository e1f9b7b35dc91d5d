use super::config::SupportThreshold;
use super::pattern_base::PatternBase;
use super::Item;
use serde::Serialize;

/// Single-level summary of a pattern base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionalPattern<T> {
    /// Longest prefix shared by every path of the base.
    pub prefix: Vec<T>,
    /// Sum of counts over the whole base.
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PatternOutcome<T> {
    Included(ConditionalPattern<T>),
    /// Aggregate count fell short of the support threshold.
    Excluded(ConditionalPattern<T>),
}

impl<T> PatternOutcome<T> {
    pub fn is_included(&self) -> bool {
        matches!(self, PatternOutcome::Included(_))
    }

    pub fn pattern(&self) -> &ConditionalPattern<T> {
        match self {
            PatternOutcome::Included(pattern) | PatternOutcome::Excluded(pattern) => pattern,
        }
    }

    pub fn included(&self) -> Option<&ConditionalPattern<T>> {
        match self {
            PatternOutcome::Included(pattern) => Some(pattern),
            PatternOutcome::Excluded(_) => None,
        }
    }
}

/// Length of the prefix shared by all paths.
///
/// Grows one position at a time and stops at the first length some path
/// cannot reach or where two paths disagree.
pub fn common_prefix_len<T: Item>(base: &PatternBase<T>) -> usize {
    let Some(first) = base.paths.first() else {
        return 0;
    };

    let mut len = 0;
    while len < first.path.len() {
        let item = &first.path[len];
        let shared = base
            .paths
            .iter()
            .all(|p| p.path.get(len).is_some_and(|other| other == item));
        if !shared {
            break;
        }
        len += 1;
    }
    len
}

pub fn summarize<T: Item>(base: &PatternBase<T>) -> ConditionalPattern<T> {
    let len = common_prefix_len(base);
    let prefix = base
        .paths
        .first()
        .map(|p| p.path[..len].to_vec())
        .unwrap_or_default();

    ConditionalPattern {
        prefix,
        count: base.total_count(),
    }
}

pub fn apply_threshold<T>(
    pattern: ConditionalPattern<T>,
    threshold: &SupportThreshold,
) -> PatternOutcome<T> {
    if threshold.is_met(pattern.count) {
        PatternOutcome::Included(pattern)
    } else {
        PatternOutcome::Excluded(pattern)
    }
}

/// Conditional patterns for every ranked item, least frequent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionalPatterns<T> {
    entries: Vec<(T, PatternOutcome<T>)>,
}

impl<T> Default for ConditionalPatterns<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Item> ConditionalPatterns<T> {
    pub fn push(&mut self, item: T, outcome: PatternOutcome<T>) {
        self.entries.push((item, outcome));
    }

    pub fn get(&self, item: &T) -> Option<&PatternOutcome<T>> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == item)
            .map(|(_, outcome)| outcome)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &PatternOutcome<T>)> {
        self.entries.iter().map(|(item, outcome)| (item, outcome))
    }

    /// Items whose pattern cleared the threshold, with that pattern.
    pub fn included(&self) -> impl Iterator<Item = (&T, &ConditionalPattern<T>)> {
        self.entries
            .iter()
            .filter_map(|(item, outcome)| outcome.included().map(|pattern| (item, pattern)))
    }
}

impl<T> IntoIterator for ConditionalPatterns<T> {
    type Item = (T, PatternOutcome<T>);
    type IntoIter = std::vec::IntoIter<(T, PatternOutcome<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
