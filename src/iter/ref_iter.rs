use crate::node::Node;

/// An in-order iterator of borrowed [`Node`] instances, yielding keys in
/// ascending order.
#[derive(Debug)]
pub(crate) struct RefIter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> RefIter<'a, K> {
    pub(crate) fn new(root: &'a Node<K>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<K>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, K> Iterator for RefIter<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v)
    }
}
