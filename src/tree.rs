use crate::{
    error::EmptyTreeError,
    iter::{LevelIter, OwnedIter, RefIter},
    node::{height, remove_recurse, Node, RemoveResult},
};

/// An ordered multiset of keys, stored in a height-balanced (AVL) binary
/// search tree.
///
/// Keys must form a total order ([`Ord`]). Duplicate keys are permitted and
/// routed to the right subtree on insert; each stored instance remains
/// individually discoverable and removable.
///
/// Every mutating operation restores the AVL invariant (the subtree heights
/// of any node differ by at most 1) with at most O(log n) rotations, keeping
/// the depth of the tree, and therefore the cost of all operations,
/// logarithmic in the number of stored keys.
#[derive(Debug, Clone)]
pub struct AvlTree<K>(Option<Box<Node<K>>>);

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K> AvlTree<K>
where
    K: Ord,
{
    /// Initialise an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` to the tree.
    ///
    /// Insertion always succeeds; a key equal to an existing key is stored as
    /// an additional instance.
    pub fn insert(&mut self, key: K) {
        match self.0 {
            Some(ref mut v) => v.insert(key),
            None => self.0 = Some(Box::new(Node::new(key))),
        }
    }

    /// Return a reference to the stored key equal to `key`, if any.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.0.as_ref().and_then(|v| v.get(key))
    }

    /// Return true iff at least one instance of `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove one instance of `key` from the tree, returning the extracted
    /// key.
    ///
    /// Returns [`None`] without modifying the tree if the key is absent - a
    /// normal negative result, not an error.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        match remove_recurse(&mut self.0, key)? {
            RemoveResult::Removed(v) => Some(v),
            RemoveResult::ParentUnlink => unreachable!(),
        }
    }

    /// Return the smallest key in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the tree holds no keys.
    pub fn min(&self) -> Result<&K, EmptyTreeError> {
        let mut n = self.0.as_deref().ok_or(EmptyTreeError)?;

        // Descend the left spine.
        while let Some(v) = n.left() {
            n = v;
        }

        Ok(n.key())
    }

    /// Return the largest key in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the tree holds no keys.
    pub fn max(&self) -> Result<&K, EmptyTreeError> {
        let mut n = self.0.as_deref().ok_or(EmptyTreeError)?;

        // Descend the right spine.
        while let Some(v) = n.right() {
            n = v;
        }

        Ok(n.key())
    }

    /// Iterate over the keys in ascending (in-order) order.
    ///
    /// Each call returns a fresh iterator over the current tree content.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.0
            .iter()
            .flat_map(|v| RefIter::new(v))
            .map(|v| v.key())
    }

    /// Enumerate the keys breadth-first as `(depth, key)` tuples, the root at
    /// depth 0 and each level yielded left to right.
    ///
    /// A diagnostic view of the tree shape; it has no effect on tree state.
    pub fn levels(&self) -> impl Iterator<Item = (usize, &K)> {
        self.0
            .iter()
            .flat_map(|v| LevelIter::new(v))
            .map(|(depth, v)| (depth, v.key()))
    }

    /// Return true iff the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The height of the tree: the number of edges on the longest root-leaf
    /// path.
    ///
    /// An empty tree has a height of -1 and a single node has a height of 0.
    /// The AVL invariant bounds the height of a tree of n keys to at most
    /// 1.44 * log2(n + 2).
    pub fn height(&self) -> i16 {
        height(self.0.as_deref())
    }
}

impl<K> IntoIterator for AvlTree<K> {
    type Item = K;
    type IntoIter = OwnedIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.0)
    }
}

impl<K> Extend<K> for AvlTree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}
