use super::Item;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone)]
pub struct FPNode<T> {
    /// `None` only for the root.
    pub item: Option<T>,
    pub count: usize,
    pub parent: Option<usize>,
    /// Child indices in insertion order; labels are unique among siblings.
    pub children: Vec<usize>,
    /// Next node elsewhere in the tree carrying the same item.
    pub link: Option<usize>,
}

/// First and last node of a same-item link chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainEnds {
    pub head: usize,
    pub tail: usize,
}

/// Prefix tree over ordered transactions, stored as an arena of nodes.
///
/// Nodes are owned by `nodes`; `parent`, `children` and `link` are plain
/// indices into it. The header table keeps the ends of every link chain so a
/// new node is appended to its chain without searching the tree.
#[derive(Debug, Clone)]
pub struct FPTree<T> {
    pub nodes: Vec<FPNode<T>>,
    pub header_table: HashMap<T, ChainEnds>,
    pub root_index: usize,
}

impl<T> FPNode<T> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: Vec::new(),
            link: None,
        }
    }

    pub fn new_item(item: T, parent: usize) -> Self {
        Self {
            item: Some(item),
            count: 1,
            parent: Some(parent),
            children: Vec::new(),
            link: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.item.is_none()
    }
}

impl<T: Item> Default for FPTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Item> FPTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            root_index: 0,
        }
    }

    pub fn root(&self) -> &FPNode<T> {
        &self.nodes[self.root_index]
    }

    pub fn node(&self, index: usize) -> &FPNode<T> {
        &self.nodes[index]
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root().children.is_empty()
    }

    pub fn child_with_item(&self, index: usize, item: &T) -> Option<usize> {
        self.nodes[index]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].item.as_ref() == Some(item))
    }

    pub fn children(&self, index: usize) -> impl Iterator<Item = &FPNode<T>> + '_ {
        self.nodes[index].children.iter().map(move |&child| &self.nodes[child])
    }

    pub fn insert_transaction(&mut self, transaction: &[T]) {
        let mut current_index = self.root_index;

        for item in transaction {
            if let Some(child_index) = self.child_with_item(current_index, item) {
                self.nodes[child_index].count += 1;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes
                    .push(FPNode::new_item(item.clone(), current_index));
                self.nodes[current_index].children.push(new_index);
                self.link_node(item, new_index);
                current_index = new_index;
            }
        }
    }

    fn link_node(&mut self, item: &T, new_index: usize) {
        match self.header_table.get_mut(item) {
            Some(ends) => {
                self.nodes[ends.tail].link = Some(new_index);
                ends.tail = new_index;
            }
            None => {
                self.header_table.insert(
                    item.clone(),
                    ChainEnds {
                        head: new_index,
                        tail: new_index,
                    },
                );
            }
        }
    }

    /// Pre-order search from the root for the first node labeled `item`.
    pub fn find_first(&self, item: &T) -> Option<usize> {
        let mut stack = vec![self.root_index];

        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if node.item.as_ref() == Some(item) {
                return Some(index);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Head of the link chain, i.e. the first node created for `item`.
    pub fn chain_head(&self, item: &T) -> Option<usize> {
        self.header_table.get(item).map(|ends| ends.head)
    }

    /// Walks the link chain of `item` in node creation order.
    pub fn chain(&self, item: &T) -> ChainIter<'_, T> {
        self.chain_from(self.chain_head(item))
    }

    pub fn chain_from(&self, start: Option<usize>) -> ChainIter<'_, T> {
        ChainIter {
            tree: self,
            next: start,
        }
    }

    /// Labels from the root down to `index` inclusive, root excluded.
    pub fn path_to_root(&self, index: usize) -> Vec<T> {
        let mut path = Vec::new();
        let mut current = Some(index);

        while let Some(i) = current {
            if let Some(item) = &self.nodes[i].item {
                path.push(item.clone());
            }
            current = self.nodes[i].parent;
        }
        path.reverse();
        path
    }

    /// Total count held by the nodes of one chain.
    pub fn item_support(&self, item: &T) -> usize {
        self.chain(item).map(|index| self.nodes[index].count).sum()
    }
}

pub struct ChainIter<'a, T> {
    tree: &'a FPTree<T>,
    next: Option<usize>,
}

impl<T> Iterator for ChainIter<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        self.next = self.tree.nodes[current].link;
        Some(current)
    }
}

impl<T: fmt::Display> fmt::Display for FPNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item {
            None => write!(f, "Null"),
            Some(item) if self.link.is_some() => write!(f, "[]{} : {}", item, self.count),
            Some(item) => write!(f, "{} : {}", item, self.count),
        }
    }
}

impl<T: fmt::Display> fmt::Display for FPTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self.root_index, 0usize)];

        while let Some((index, depth)) = stack.pop() {
            let node = &self.nodes[index];
            writeln!(f, "{}--{}", "  ".repeat(depth), node)?;
            stack.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
        }
        Ok(())
    }
}
