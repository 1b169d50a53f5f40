use itree_core::Coordinate;

/// One discriminant of the tree.
///
/// `start..start + len` addresses the intervals covering `discriminant` in both
/// auxiliary arrays of the owning [`StabIndex`](crate::builder::StabIndex).
#[derive(Debug, Clone, PartialEq)]
pub struct Node<V>
where
    V: Coordinate,
{
    pub discriminant: V,
    pub start: usize,
    pub len: usize,
    pub left: Option<Box<Node<V>>>,
    pub right: Option<Box<Node<V>>>,
}

impl<V> Node<V>
where
    V: Coordinate,
{
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }

    /// Number of levels in the subtree rooted here.
    pub fn depth(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |l| l.depth());
        let right = self.right.as_ref().map_or(0, |r| r.depth());
        1 + left.max(right)
    }

    pub fn count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |l| l.count())
            + self.right.as_ref().map_or(0, |r| r.count())
    }
}
