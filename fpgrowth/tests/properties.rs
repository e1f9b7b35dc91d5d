use fpgrowth::fp::conditional::summarize;
use fpgrowth::fp::reorder::order_transaction;
use fpgrowth::{FpGrowth, ItemCounts, MinerConfig, PatternBase};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn transactions() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0u8..8, 0..7), 0..16)
}

fn min_support() -> impl Strategy<Value = f64> {
    (1u32..=20).prop_map(|n| n as f64 / 20.0)
}

proptest! {
    #[test]
    fn supported_items_meet_threshold(txs in transactions(), ratio in min_support()) {
        let report = FpGrowth::new(MinerConfig::new(ratio)).mine_with_report(&txs).unwrap();
        let threshold = ratio * txs.len() as f64;

        for (item, count) in report.item_counts.iter() {
            let supported = report.frequencies.contains(item);
            prop_assert_eq!(supported, count as f64 >= threshold);
            let in_transactions = txs.iter().filter(|tx| tx.contains(item)).count();
            prop_assert_eq!(count, in_transactions);
        }
    }

    #[test]
    fn ordering_is_descending_with_discovery_ties(txs in transactions(), ratio in min_support()) {
        let report = FpGrowth::new(MinerConfig::new(ratio)).mine_with_report(&txs).unwrap();
        let discovery: HashMap<u8, usize> = report
            .item_counts
            .iter()
            .enumerate()
            .map(|(pos, (item, _))| (*item, pos))
            .collect();

        let ranked: Vec<(u8, usize)> = report.frequencies.iter().map(|(i, c)| (*i, c)).collect();
        for pair in ranked.windows(2) {
            let (a, count_a) = pair[0];
            let (b, count_b) = pair[1];
            prop_assert!(count_a >= count_b);
            if count_a == count_b {
                prop_assert!(discovery[&a] < discovery[&b]);
            }
        }
    }

    #[test]
    fn ordered_transactions_hold_supported_items_once(txs in transactions(), ratio in min_support()) {
        let report = FpGrowth::new(MinerConfig::new(ratio)).mine_with_report(&txs).unwrap();

        for (raw, ordered) in txs.iter().zip(&report.ordered_transactions) {
            let expected: HashSet<u8> = raw
                .iter()
                .copied()
                .filter(|item| report.frequencies.contains(item))
                .collect();
            let got: HashSet<u8> = ordered.iter().copied().collect();
            prop_assert_eq!(got.len(), ordered.len());
            prop_assert_eq!(&got, &expected);

            let ranks: Vec<usize> = ordered
                .iter()
                .map(|item| report.frequencies.rank(item).unwrap())
                .collect();
            prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(&order_transaction(raw, &report.frequencies), ordered);
        }
    }

    #[test]
    fn tree_siblings_unique_and_root_counts_match(txs in transactions(), ratio in min_support()) {
        let report = FpGrowth::new(MinerConfig::new(ratio)).mine_with_report(&txs).unwrap();
        let tree = &report.tree;

        for node in &tree.nodes {
            let labels: Vec<u8> = node.children.iter().map(|&c| tree.nodes[c].item.unwrap()).collect();
            let distinct: HashSet<u8> = labels.iter().copied().collect();
            prop_assert_eq!(distinct.len(), labels.len());
        }

        for child in tree.children(tree.root_index) {
            let label = child.item.unwrap();
            let leading = report
                .ordered_transactions
                .iter()
                .filter(|tx| tx.first() == Some(&label))
                .count();
            prop_assert_eq!(child.count, leading);
        }
    }

    #[test]
    fn link_chains_are_complete(txs in transactions(), ratio in min_support()) {
        let report = FpGrowth::new(MinerConfig::new(ratio)).mine_with_report(&txs).unwrap();
        let tree = &report.tree;

        for item in report.frequencies.ordering() {
            let chain: Vec<usize> = tree.chain(item).collect();
            let visited: HashSet<usize> = chain.iter().copied().collect();
            let labeled: HashSet<usize> = tree
                .nodes
                .iter()
                .enumerate()
                .filter(|(_, node)| node.item.as_ref() == Some(item))
                .map(|(idx, _)| idx)
                .collect();
            prop_assert_eq!(visited.len(), chain.len());
            prop_assert_eq!(&visited, &labeled);
            prop_assert_eq!(tree.item_support(item), report.frequencies.support(item).unwrap());
        }
    }

    #[test]
    fn aggregate_count_equals_item_support(txs in transactions(), ratio in min_support()) {
        let report = FpGrowth::new(MinerConfig::new(ratio)).mine_with_report(&txs).unwrap();

        prop_assert_eq!(report.patterns.len(), report.frequencies.len());
        for (item, outcome) in report.patterns.iter() {
            prop_assert_eq!(outcome.pattern().count, report.frequencies.support(item).unwrap());
            prop_assert!(outcome.is_included());
        }
    }

    #[test]
    fn summarizing_identical_paths_returns_them(
        path in prop::collection::vec(0u8..8, 0..6),
        counts in prop::collection::vec(1usize..10, 1..6),
    ) {
        let base: PatternBase<u8> = counts.iter().map(|&count| (path.clone(), count)).collect();
        let pattern = summarize(&base);

        prop_assert_eq!(pattern.prefix, path);
        prop_assert_eq!(pattern.count, counts.iter().sum::<usize>());
    }
}

#[test]
fn item_counts_are_per_transaction() {
    let counts = ItemCounts::from_transactions(&[vec![1u8, 1, 1], vec![1]]);
    assert_eq!(counts.get(&1), Some(2));
}
