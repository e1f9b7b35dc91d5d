use super::tree::FPTree;
use super::Item;
use serde::Serialize;
use tracing::trace;

/// One occurrence of an item in the tree: the labels above it and its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixPath<T> {
    pub path: Vec<T>,
    pub count: usize,
}

impl<T> PrefixPath<T> {
    pub fn new(path: Vec<T>, count: usize) -> Self {
        Self { path, count }
    }
}

/// Conditional pattern base of a single item, in link-chain order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternBase<T> {
    pub paths: Vec<PrefixPath<T>>,
}

impl<T> Default for PatternBase<T> {
    fn default() -> Self {
        Self { paths: Vec::new() }
    }
}

impl<T> PatternBase<T> {
    pub fn new(paths: Vec<PrefixPath<T>>) -> Self {
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.paths.iter().map(|p| p.count).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrefixPath<T>> {
        self.paths.iter()
    }
}

impl<T> FromIterator<(Vec<T>, usize)> for PatternBase<T> {
    fn from_iter<I: IntoIterator<Item = (Vec<T>, usize)>>(iter: I) -> Self {
        Self {
            paths: iter
                .into_iter()
                .map(|(path, count)| PrefixPath::new(path, count))
                .collect(),
        }
    }
}

impl<T: Item> FPTree<T> {
    /// Collects one prefix path per node labeled `item`.
    ///
    /// Starts at the chain head, the first node created for the item, so
    /// every occurrence is visited even when a later node sits earlier in
    /// pre-order. Nodes directly under the root give an empty path.
    pub fn get_prefix_paths(&self, item: &T) -> PatternBase<T> {
        let base: PatternBase<T> = self
            .chain(item)
            .map(|idx| {
                let node = &self.nodes[idx];
                let path = node
                    .parent
                    .map(|parent| self.path_to_root(parent))
                    .unwrap_or_default();
                (path, node.count)
            })
            .collect();

        trace!(item = ?item, paths = base.len(), "extracted pattern base");
        base
    }
}
