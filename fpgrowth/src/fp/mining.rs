use super::conditional::{apply_threshold, summarize, ConditionalPatterns};
use super::config::{MinerConfig, SupportThreshold};
use super::error::MiningResult;
use super::frequency::{ItemCounts, ItemFrequencyTable};
use super::matrix::transactions_from_matrix;
use super::pattern_base::PatternBase;
use super::reorder::order_transactions;
use super::tree::FPTree;
use super::Item;
use ndarray::ArrayView2;
use tracing::{debug, info};

/// Every intermediate structure of one mining run.
#[derive(Debug, Clone)]
pub struct MiningReport<T> {
    pub threshold: SupportThreshold,
    /// Support of every item seen, before filtering.
    pub item_counts: ItemCounts<T>,
    pub frequencies: ItemFrequencyTable<T>,
    pub ordered_transactions: Vec<Vec<T>>,
    pub tree: FPTree<T>,
    /// Least frequent item first.
    pub pattern_bases: Vec<(T, PatternBase<T>)>,
    pub patterns: ConditionalPatterns<T>,
}

#[derive(Debug, Clone, Default)]
pub struct FpGrowth {
    config: MinerConfig,
}

impl FpGrowth {
    pub fn new(config: MinerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    pub fn mine<T: Item, S: AsRef<[T]>>(
        &self,
        transactions: &[S],
    ) -> MiningResult<ConditionalPatterns<T>> {
        Ok(self.mine_with_report(transactions)?.patterns)
    }

    pub fn mine_matrix(
        &self,
        transactions: ArrayView2<i32>,
    ) -> MiningResult<ConditionalPatterns<usize>> {
        self.config.validate()?;
        let transactions = transactions_from_matrix(transactions)?;
        self.mine(&transactions)
    }

    pub fn mine_with_report<T: Item, S: AsRef<[T]>>(
        &self,
        transactions: &[S],
    ) -> MiningResult<MiningReport<T>> {
        let threshold = self.config.threshold(transactions.len())?;

        let item_counts = ItemCounts::from_transactions(transactions);
        let frequencies = item_counts.filter(&threshold);
        let ordered_transactions = order_transactions(transactions, &frequencies);
        let tree = build_fp_tree(&ordered_transactions);

        let mut pattern_bases = Vec::with_capacity(frequencies.len());
        let mut patterns = ConditionalPatterns::default();

        for item in frequencies.ordering().rev() {
            let base = tree.get_prefix_paths(item);
            let summary = summarize(&base);
            let outcome = apply_threshold(summary, &threshold);
            debug!(
                item = ?item,
                paths = base.len(),
                prefix_len = outcome.pattern().prefix.len(),
                count = outcome.pattern().count,
                included = outcome.is_included(),
                "summarized conditional pattern"
            );
            patterns.push(item.clone(), outcome);
            pattern_bases.push((item.clone(), base));
        }

        info!(
            transactions = transactions.len(),
            frequent_items = frequencies.len(),
            tree_nodes = tree.node_count(),
            included = patterns.included().count(),
            "mining complete"
        );

        Ok(MiningReport {
            threshold,
            item_counts,
            frequencies,
            ordered_transactions,
            tree,
            pattern_bases,
            patterns,
        })
    }
}

pub fn build_fp_tree<T: Item>(ordered_transactions: &[Vec<T>]) -> FPTree<T> {
    let mut tree = FPTree::new();
    for transaction in ordered_transactions {
        tree.insert_transaction(transaction);
    }
    debug!(nodes = tree.node_count(), "built FP-tree");
    tree
}

/// Mines `transactions` with a minimum support ratio in (0, 1].
pub fn mine<T: Item, S: AsRef<[T]>>(
    transactions: &[S],
    min_support: f64,
) -> MiningResult<ConditionalPatterns<T>> {
    FpGrowth::new(MinerConfig::new(min_support)).mine(transactions)
}
