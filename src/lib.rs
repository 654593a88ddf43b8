//! An ordered multiset of keys backed by a height-balanced (AVL) binary
//! search tree.
//!
//! [`AvlTree`] stores any totally-ordered key type and supports insert,
//! lookup and removal in guaranteed O(log n) time. Every mutation restores
//! the AVL invariant (the subtree heights of any node differ by at most 1)
//! by applying single or double rotations along the mutated path, so the
//! tree never degenerates even for adversarial (fully sorted) insert
//! sequences.
//!
//! Duplicate keys are permitted; each inserted instance is individually
//! discoverable and removable. In-order iteration always yields keys in
//! non-decreasing order, and a breadth-first [`AvlTree::levels()`] view
//! exposes the tree shape for diagnostics.
//!
//! ```
//! use avlset::AvlTree;
//!
//! let mut t = AvlTree::default();
//!
//! t.insert(42);
//! t.insert(22);
//! t.insert(25);
//!
//! assert!(t.contains(&25));
//! assert_eq!(t.min(), Ok(&22));
//! assert_eq!(t.max(), Ok(&42));
//!
//! // In-order iteration yields keys in ascending order.
//! assert_eq!(t.iter().copied().collect::<Vec<_>>(), vec![22, 25, 42]);
//!
//! t.remove(&25);
//! assert!(!t.contains(&25));
//! ```

mod error;
mod iter;
mod node;
mod tree;


pub use error::*;
pub use iter::OwnedIter;
pub use tree::*;
