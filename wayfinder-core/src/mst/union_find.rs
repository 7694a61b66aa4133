//! Union-find (disjoint set union) over arbitrary hashable keys.
//!
//! Kruskal's algorithm uses this structure to decide whether an edge joins
//! two separate components or would close a cycle. Keys must be registered
//! with [`DisjointSet::make_set`] before they can be found or merged.

use std::{collections::HashMap, fmt, hash::Hash};

use crate::error::DisjointSetError;

/// Partition of keys into disjoint sets with path compression and
/// union-by-rank.
///
/// # Examples
/// ```
/// use wayfinder_core::DisjointSet;
///
/// let mut sets = DisjointSet::new();
/// for key in ["a", "b", "c"] {
///     sets.make_set(key);
/// }
/// assert_eq!(sets.union(&"a", &"b"), Ok(true));
/// assert_eq!(sets.union(&"b", &"a"), Ok(false));
/// assert_eq!(sets.find(&"b"), Ok("a"));
/// assert_eq!(sets.component_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<K> {
    parent: HashMap<K, K>,
    rank: HashMap<K, usize>,
    components: usize,
}

impl<K> Default for DisjointSet<K> {
    fn default() -> Self {
        Self {
            parent: HashMap::new(),
            rank: HashMap::new(),
            components: 0,
        }
    }
}

impl<K> DisjointSet<K>
where
    K: Clone + Eq + Hash + fmt::Debug,
{
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `key` as a singleton set. Returns `false` if it was already
    /// present, in which case nothing changes.
    pub fn make_set(&mut self, key: K) -> bool {
        if self.parent.contains_key(&key) {
            return false;
        }
        self.parent.insert(key.clone(), key.clone());
        self.rank.insert(key, 0);
        self.components = self.components.saturating_add(1);
        true
    }

    /// Returns `true` when `key` has been registered.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.parent.contains_key(key)
    }

    /// Returns the number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no keys are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the set containing `key`.
    ///
    /// Every node on the walked path is re-pointed directly at the root. The
    /// partition itself is unchanged.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownKey`] when `key` is not registered.
    pub fn find(&mut self, key: &K) -> Result<K, DisjointSetError> {
        let mut root = key.clone();
        loop {
            let parent = self.parent.get(&root).ok_or_else(|| unknown(key))?;
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        let mut node = key.clone();
        while node != root {
            match self.parent.insert(node, root.clone()) {
                Some(next) => node = next,
                None => break,
            }
        }
        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The root with the lower rank is attached beneath the other. On equal
    /// ranks `right`'s root goes beneath `left`'s root, whose rank grows by
    /// one. Returns `false` when both keys already share a set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownKey`] when either key is not
    /// registered.
    pub fn union(&mut self, left: &K, right: &K) -> Result<bool, DisjointSetError> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank_of(&left_root);
        let right_rank = self.rank_of(&right_root);
        if left_rank < right_rank {
            self.parent.insert(left_root, right_root);
        } else {
            if left_rank == right_rank {
                self.rank
                    .insert(left_root.clone(), left_rank.saturating_add(1));
            }
            self.parent.insert(right_root, left_root);
        }
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    fn rank_of(&self, root: &K) -> usize {
        self.rank.get(root).copied().unwrap_or_default()
    }
}

fn unknown<K: fmt::Debug>(key: &K) -> DisjointSetError {
    DisjointSetError::UnknownKey {
        key: format!("{key:?}"),
    }
}
