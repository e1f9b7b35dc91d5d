//! FP-tree construction and single-level conditional pattern mining.
//!
//! Transactions are counted, filtered by a minimum support ratio and
//! reordered by global item frequency before being folded into an
//! [`FPTree`]. For every surviving item the tree yields a conditional
//! pattern base, which is summarized into the prefix shared by all of the
//! item's occurrences together with the item's total support.
//!
//! ```
//! use fpgrowth::{mine, PatternOutcome};
//!
//! let transactions = vec![vec!["a", "b"], vec!["a", "c"], vec!["a", "b"]];
//! let patterns = mine(&transactions, 0.5).unwrap();
//!
//! match patterns.get(&"b") {
//!     Some(PatternOutcome::Included(pattern)) => {
//!         assert_eq!(pattern.prefix, vec!["a"]);
//!         assert_eq!(pattern.count, 2);
//!     }
//!     other => panic!("unexpected outcome {other:?}"),
//! }
//! ```

pub mod fp;

pub use fp::{
    build_fp_tree, mine, transactions_from_matrix, ConditionalPattern, ConditionalPatterns,
    FPNode, FPTree, FpGrowth, Item, ItemCounts, ItemFrequencyTable, MinerConfig, MiningError,
    MiningReport, MiningResult, PatternBase, PatternOutcome, PrefixPath, SupportThreshold,
};
