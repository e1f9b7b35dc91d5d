use std::fmt::Debug;
use std::hash::Hash;

pub mod conditional;
pub mod config;
pub mod error;
pub mod frequency;
pub mod matrix;
pub mod mining;
pub mod pattern_base;
pub mod reorder;
pub mod tree;


/// Anything usable as an item identifier.
pub trait Item: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Item for T {}

pub use conditional::{ConditionalPattern, ConditionalPatterns, PatternOutcome};
pub use config::{MinerConfig, SupportThreshold};
pub use error::{MiningError, MiningResult};
pub use frequency::{ItemCounts, ItemFrequencyTable};
pub use matrix::transactions_from_matrix;
pub use mining::{build_fp_tree, mine, FpGrowth, MiningReport};
pub use pattern_base::{PatternBase, PrefixPath};
pub use tree::{FPNode, FPTree};
