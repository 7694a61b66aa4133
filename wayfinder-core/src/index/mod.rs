//! Sorted name index backed by an unbalanced binary search tree.
//!
//! Nodes live in an arena and refer to their children by handle. Insertion,
//! lookup and in-order traversal are iterative, so a degenerate insertion
//! order (for example, already sorted keys) produces a deep tree without
//! risking stack exhaustion. The tree is never rebalanced: its shape is fixed
//! by insertion order.

use std::{cmp::Ordering, sync::Arc};

type Handle = usize;

#[derive(Clone, Debug)]
struct TreeNode {
    key: Arc<str>,
    left: Option<Handle>,
    right: Option<Handle>,
}

/// Binary search tree of location names.
///
/// # Examples
/// ```
/// use wayfinder_core::LocationTree;
///
/// let tree: LocationTree = ["Library", "Cafeteria", "Auditorium"].into_iter().collect();
/// assert!(tree.search("Cafeteria"));
/// assert!(!tree.search("cafeteria"));
/// let sorted: Vec<&str> = tree.inorder().map(AsRef::as_ref).collect();
/// assert_eq!(sorted, ["Auditorium", "Cafeteria", "Library"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LocationTree {
    nodes: Vec<TreeNode>,
    root: Option<Handle>,
}

impl LocationTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the tree holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts `key`, returning `false` if it was already present.
    pub fn insert(&mut self, key: impl Into<Arc<str>>) -> bool {
        let key = key.into();
        let Some(mut cursor) = self.root else {
            self.root = Some(self.push(key));
            return true;
        };

        loop {
            let node = &self.nodes[cursor];
            let ordering = key.as_ref().cmp(node.key.as_ref());
            let (left, right) = (node.left, node.right);
            match ordering {
                Ordering::Equal => return false,
                Ordering::Less => match left {
                    Some(next) => cursor = next,
                    None => {
                        let leaf = self.push(key);
                        self.nodes[cursor].left = Some(leaf);
                        return true;
                    }
                },
                Ordering::Greater => match right {
                    Some(next) => cursor = next,
                    None => {
                        let leaf = self.push(key);
                        self.nodes[cursor].right = Some(leaf);
                        return true;
                    }
                },
            }
        }
    }

    /// Returns `true` when `key` is stored. Comparison is case-sensitive.
    #[must_use]
    pub fn search(&self, key: &str) -> bool {
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = &self.nodes[handle];
            cursor = match key.cmp(node.key.as_ref()) {
                Ordering::Equal => return true,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// Returns a lazy iterator over the keys in ascending order.
    ///
    /// Each call starts a fresh traversal.
    #[must_use]
    pub fn inorder(&self) -> Inorder<'_> {
        Inorder {
            tree: self,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(Handle, usize)> =
            self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((handle, level)) = pending.pop() {
            deepest = deepest.max(level);
            let node = &self.nodes[handle];
            pending.extend(
                [node.left, node.right]
                    .into_iter()
                    .flatten()
                    .map(|child| (child, level.saturating_add(1))),
            );
        }
        deepest
    }

    fn push(&mut self, key: Arc<str>) -> Handle {
        self.nodes.push(TreeNode {
            key,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }
}

impl<K: Into<Arc<str>>> Extend<K> for LocationTree {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: Into<Arc<str>>> FromIterator<K> for LocationTree {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

/// In-order iterator returned by [`LocationTree::inorder`].
#[derive(Debug)]
pub struct Inorder<'a> {
    tree: &'a LocationTree,
    stack: Vec<Handle>,
    cursor: Option<Handle>,
}

impl<'a> Iterator for Inorder<'a> {
    type Item = &'a Arc<str>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.cursor {
            self.stack.push(handle);
            self.cursor = self.tree.nodes[handle].left;
        }
        let handle = self.stack.pop()?;
        let node = &self.tree.nodes[handle];
        self.cursor = node.right;
        Some(&node.key)
    }
}

#[cfg(test)]
mod tests;
