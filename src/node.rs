use std::cmp::Ordering;

#[derive(Debug)]
pub(super) enum RemoveResult<K> {
    /// The key was removed from the tree.
    Removed(K),

    /// The direct descendent node contains the key, but contains no children
    /// and must be unlinked by the parent.
    ParentUnlink,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// Child node pointers.
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 0; the height of an absent subtree is defined
    /// as -1 and is produced by [`height()`] rather than stored.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    key: K,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 0,
        }
    }

    pub(crate) fn insert(self: &mut Box<Self>, key: K)
    where
        K: Ord,
    {
        // Keys equal to this node are routed right, making duplicate keys
        // admissible.
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal | Ordering::Greater => &mut self.right,
        };

        match child {
            Some(v) => v.insert(key),
            None => {
                // Insert the key as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(key)));

                // Inserting this new child node cannot skew the tree in the
                // direction of the new addition such that it requires the tree
                // be rebalanced as, at most, it creates an absolute difference
                // of 1 in this direction (from balanced, or slightly skewed in
                // the opposite direction).
                //
                // Update this node and skip the rebalancing checks.
                update_height(self);
                return;
            }
        }

        // Update this node's height.
        update_height(self);

        // Determine the balance factor of the subtree rooted at self and
        // correct it if the absolute difference in height between branches is
        // > 1.
        match (balance(self), self.left(), self.right()) {
            // Left-heavy
            (2, Some(l), _) if balance(l) >= 0 => {
                rotate_right(self);
            }
            (2, Some(_l), _) => {
                rotate_left(self.left_mut().unwrap());
                rotate_right(self);
            }
            // Right-heavy
            (-2, _, Some(r)) if balance(r) < 0 => {
                rotate_left(self);
            }
            (-2, _, Some(_r)) => {
                rotate_right(self.right_mut().unwrap());
                rotate_left(self);
            }
            (-1..=1, _, _) => { /* The tree is well balanced */ }
            _ => unreachable!(),
        };

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(balance(self).abs() <= 1);
    }

    pub(super) fn remove(self: &mut Box<Self>, key: &K) -> Option<RemoveResult<K>>
    where
        K: Ord,
    {
        // Recurse down the subtree rooted at `self`.
        //
        // If the key is not found, or successfully removed, the result is
        // returned. If the direct descendent node contains the key and no
        // children, it returns [`RemoveResult::ParentUnlink`] and the node is
        // unlinked here in the parent before returning the result to the
        // caller.
        match key.cmp(&self.key) {
            Ordering::Less => return remove_recurse(&mut self.left, key),
            Ordering::Greater => return remove_recurse(&mut self.right, key),
            Ordering::Equal => {
                // This node holds the key to be removed from the tree.
                //
                // Duplicates of the key may exist deeper in the subtree;
                // removing the first match encountered is sufficient.
            }
        };

        // This node may have 0, 1 or 2 child node(s):
        //
        //                          +----------+
        //                          |  parent  |
        //                          +----------+
        //                                |
        //                                v
        //                          +----------+
        //                     +----|   self   |----+
        //                     |    +----------+    |
        //                     |                    |
        //                     v                    v
        //               +-----------+       +------------+
        //               | self.left |       | self.right |
        //               +-----------+       +------------+
        //
        // The in-order predecessor (if any) should move to replace this node.
        //
        // If "self.left" has a right child, descend the right-most edge to
        // locate the predecessor to "self" returned in an in-order traversal
        // and use it in place of "self". The left child of "self" after
        // removing this predecessor (if any) is then linked to this
        // replacement. The extraction relinks the predecessor's own left
        // subtree in its place, so no descendant is ever discarded.
        //
        // If there is no right node of "self.left", the "self.left" itself
        // replaces the target node (the maximum subtree predecessor value).
        //
        // If there is no left child, then "self.right" replaces "self"; the
        // balance invariant limits it to a single leaf, which is exactly the
        // in-order successor.
        let old = if let Some(mut left) = self.left.take() {
            debug_assert_ne!(self.height, 0);

            // Extract the maximum node in the left subtree, if any.
            match extract_subtree_max(&mut left) {
                Some(mut max) => {
                    // This maximum node "max" should be mutated to link
                    // self.left on the left, and self.right (if any) linked on
                    // the right in order to preserve the binary search
                    // property.
                    //
                    // The "max" node is guaranteed to have no right pointer
                    // as it is the right-most / maximum node in the subtree,
                    // and no left pointer as extraction relinked its left
                    // child into the slot it vacated.
                    debug_assert!(max.left.is_none());
                    debug_assert!(max.right.is_none());

                    max.right = self.right.take();
                    max.left = Some(left);

                    std::mem::replace(self, max)
                }

                None => {
                    // Otherwise the extracted "left" is the predecessor, and
                    // can replace "self".
                    //
                    // It is guaranteed that "left" has no right pointer,
                    // otherwise the above branch would be taken.
                    debug_assert!(left.right.is_none());

                    left.right = self.right.take();
                    std::mem::replace(self, left)
                }
            }
        } else if let Some(right) = self.right.take() {
            // Otherwise, if "self" has a right child only, simply replace
            // "self" with the right child (the minimum subtree value).
            debug_assert!(self.left.is_none());
            debug_assert_ne!(self.height, 0);

            std::mem::replace(self, right)
        } else {
            // Otherwise "self" has no children.
            debug_assert!(self.left.is_none());
            debug_assert!(self.right.is_none());
            debug_assert_eq!(self.height, 0);

            // Parent will unlink this "self" node.
            return Some(RemoveResult::ParentUnlink);
        };

        // Invariant: the node being unlinked contains no subtree.
        debug_assert!(old.right.is_none());
        debug_assert!(old.left.is_none());

        // Invariant: the old node being unlinked does contain the target key.
        debug_assert!(old.key == *key);

        Some(RemoveResult::Removed(old.key))
    }

    pub(crate) fn get(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let node = match self.key.cmp(key) {
            Ordering::Greater => self.left(),
            Ordering::Equal => return Some(&self.key),
            Ordering::Less => self.right(),
        }?;

        node.get(key)
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this [`Node`] into the key `K` it contains.
    pub(crate) fn into_key(self) -> K {
        self.key
    }
}

/// Return the AVL height of `n`, where an absent subtree has a height of -1.
pub(crate) fn height<K>(n: Option<&Node<K>>) -> i16 {
    n.map(|v| i16::from(v.height())).unwrap_or(-1)
}

fn update_height<K>(n: &mut Node<K>) {
    // Correctness: a leaf resolves to max(-1, -1) + 1 = 0 and heights only
    // grow from there, so the cast never truncates or inverts sign.
    n.height = (height(n.left()).max(height(n.right())) + 1) as u8;
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number
/// when left heavy, and a negative number when right heavy.
fn balance<K>(n: &Node<K>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion, and the difference between
    // the heights of two subtrees of one node fits in an i8.
    (height(n.left()) - height(n.right())) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<K>(x: &mut Box<Node<K>>) {
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<K>(y: &mut Box<Node<K>>) {
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Extracts the node holding the maximum subtree value in a descendent of
/// `root`, if any, linking the left subtree of the extracted node in its
/// place.
///
/// Each node on the descent path is height-adjusted and rebalanced as the
/// recursion unwinds, restoring the AVL invariant bottom-up along the chain
/// of the extracted node's former ancestors.
fn extract_subtree_max<K>(root: &mut Box<Node<K>>) -> Option<Box<Node<K>>> {
    // Descend right to the leaf.
    let v = match extract_subtree_max(root.right_mut()?) {
        Some(v) => Some(v),
        None => {
            // The right child is the end of the right edge.
            //
            // ```text
            //          2
            //         / \
            //        1  <5>   <- here
            //           /
            //          3
            //           \
            //            4
            // ```
            //
            // Unlink the left node of the right root, which will become the
            // new right node of "root" (if any).
            let right_left = root.right_mut().and_then(|v| v.left.take());

            std::mem::replace(&mut root.right, right_left)
        }
    };

    rebalance_after_remove(root);
    debug_assert!(balance(root).abs() <= 1);
    v
}

/// Recurse into `node`, calling [`Node::remove()`] to remove the provided
/// `key` from the subtree rooted at `node`, if it exists.
///
/// Returns [`None`] if the key is not found.
///
/// Clears the `node` pointer if the [`Node::remove()`] call returns
/// [`RemoveResult::ParentUnlink`], returning the extracted key within a
/// [`RemoveResult::Removed`] variant.
pub(super) fn remove_recurse<K>(
    node: &mut Option<Box<Node<K>>>,
    key: &K,
) -> Option<RemoveResult<K>>
where
    K: Ord,
{
    // Remove the key (if any) and rebalance the tree.
    let remove_ret = node.as_mut().and_then(|v| {
        let ret = v.remove(key)?;
        rebalance_after_remove(v);
        Some(ret)
    })?;

    let v = match remove_ret {
        RemoveResult::Removed(v) => v,
        RemoveResult::ParentUnlink => {
            let node = node.take().unwrap();
            debug_assert!(node.key == *key);

            node.key
        }
    };

    Some(RemoveResult::Removed(v))
}

fn rebalance_after_remove<K>(v: &mut Box<Node<K>>) {
    // Recompute the height of the relocated node.
    update_height(v);

    // And rebalance the subtree.
    match balance(v) {
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
        }
        (2..) => {
            v.left_mut().map(rotate_left);
            rotate_right(v);
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
        }
        (..=-2) => {
            v.right_mut().map(rotate_right);
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a key.
    debug_assert!(balance(v).abs() <= 1);
}
