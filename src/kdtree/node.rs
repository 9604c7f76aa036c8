/// One node of a k-d tree: a cached bounding box plus either a leaf slice of items or two
/// children.
///
/// A tree mutably borrows the item slice it was built from for its whole lifetime `'a`. Leaves
/// are sub-slices of that storage, never copies, so values changed through
/// [`visit_mut`][Node::visit_mut] show up in the original container once the tree is dropped.
///
/// `bounds` is computed once during construction. Moving an item's coordinates through
/// `visit_mut` leaves every ancestor's bounds stale; later pruned traversals may then miss that
/// item. This is not detected.
#[derive(Debug)]
pub struct Node<'a, I, B> {
    pub(crate) bounds: B,
    pub(crate) body: Body<'a, I, B>,
}

/// The contents of a [`Node`].
#[derive(Debug)]
pub enum Body<'a, I, B> {
    /// A contiguous run of items from the original slice.
    Leaf(&'a mut [I]),
    /// Two exclusively owned subtrees, in partition order.
    Branch {
        /// Items whose sort key is `<=` the split.
        left: Box<Node<'a, I, B>>,
        /// Items whose sort key is `>=` the split.
        right: Box<Node<'a, I, B>>,
    },
}

impl<'a, I, B> Node<'a, I, B> {
    pub(crate) fn leaf(bounds: B, items: &'a mut [I]) -> Self {
        Self {
            bounds,
            body: Body::Leaf(items),
        }
    }

    pub(crate) fn branch(bounds: B, left: Self, right: Self) -> Self {
        Self {
            bounds,
            body: Body::Branch {
                left: Box::new(left),
                right: Box::new(right),
            },
        }
    }

    /// The bounding box enclosing every item in this subtree.
    #[inline]
    pub fn bounds(&self) -> &B {
        &self.bounds
    }

    /// The contents of this node.
    #[inline]
    pub fn body(&self) -> &Body<'a, I, B> {
        &self.body
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.body, Body::Leaf(_))
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }

    /// The left and right children, or `None` for a leaf.
    pub fn children(&self) -> Option<(&Self, &Self)> {
        match &self.body {
            Body::Leaf(_) => None,
            Body::Branch { left, right } => Some((&**left, &**right)),
        }
    }

    /// The items held directly by this node, or `None` for a branch.
    pub fn items(&self) -> Option<&[I]> {
        match &self.body {
            Body::Leaf(items) => Some(&**items),
            Body::Branch { .. } => None,
        }
    }

    /// The total number of items in this subtree.
    pub fn len(&self) -> usize {
        self.leaves().map(|items| items.len()).sum()
    }

    /// Returns `true` if this subtree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of levels in this subtree. A single leaf has depth 1.
    pub fn depth(&self) -> usize {
        match &self.body {
            Body::Leaf(_) => 1,
            Body::Branch { left, right } => 1 + left.depth().max(right.depth()),
        }
    }

    /// The number of leaf nodes in this subtree.
    pub fn num_leaves(&self) -> usize {
        self.leaves().count()
    }

    /// The number of branch nodes in this subtree.
    pub fn num_branches(&self) -> usize {
        match &self.body {
            Body::Leaf(_) => 0,
            Body::Branch { left, right } => 1 + left.num_branches() + right.num_branches(),
        }
    }

    /// Iterate over the item slices of every leaf, left to right.
    ///
    /// Concatenated, they hold exactly the items of the original slice.
    pub fn leaves(&self) -> Leaves<'_, 'a, I, B> {
        Leaves { stack: vec![self] }
    }
}

/// Depth-first iterator over the leaf slices of a tree, created by [`Node::leaves`].
#[derive(Debug)]
pub struct Leaves<'s, 'a, I, B> {
    stack: Vec<&'s Node<'a, I, B>>,
}

impl<'s, I, B> Iterator for Leaves<'s, '_, I, B> {
    type Item = &'s [I];

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match &node.body {
                Body::Leaf(items) => return Some(&**items),
                Body::Branch { left, right } => {
                    // Note: pushed in backwards order to what gets popped
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}
