use std::collections::VecDeque;

use crate::node::Node;

/// A breadth-first iterator of borrowed [`Node`] instances, yielding each
/// node paired with its depth.
///
/// The root is yielded at depth 0, its children at depth 1, and so on, with
/// each level enumerated left to right. Purely diagnostic; visiting a node
/// has no effect on tree state.
#[derive(Debug)]
pub(crate) struct LevelIter<'a, K> {
    queue: VecDeque<(usize, &'a Node<K>)>,
}

impl<'a, K> LevelIter<'a, K> {
    pub(crate) fn new(root: &'a Node<K>) -> Self {
        Self {
            queue: VecDeque::from([(0, root)]),
        }
    }
}

impl<'a, K> Iterator for LevelIter<'a, K> {
    type Item = (usize, &'a Node<K>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, v) = self.queue.pop_front()?;

        // Enqueue the children one level down, left before right, preserving
        // the left-to-right order within each level.
        if let Some(left) = v.left() {
            self.queue.push_back((depth + 1, left));
        }
        if let Some(right) = v.right() {
            self.queue.push_back((depth + 1, right));
        }

        Some((depth, v))
    }
}
