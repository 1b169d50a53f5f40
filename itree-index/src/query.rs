use std::cmp::Ordering;
use std::iter::FusedIterator;

use itree_core::Interval;

use crate::builder::StabIndex;
use crate::node::Node;

/// An iterator over the intervals of an [`IntervalTree`](crate::IntervalTree)
/// that contain a query point.
///
/// This struct is created by [`IntervalTree::query`](crate::IntervalTree::query).
/// It walks a single root-to-leaf path, draining the covering list of each node
/// on the way for as long as entries still contain the point:
///
/// * below a node's discriminant it reads the list sorted by `low` and stops at
///   the first `low > point`, then continues left;
/// * above it reads the list sorted by `high` (largest first) and stops at the
///   first `high < point`, then continues right;
/// * on the discriminant itself every entry matches and the walk ends with the
///   list, since any interval containing the point covers that discriminant.
///
/// Nothing is allocated. Within one node, results come out in non-decreasing
/// `low` order (below) or non-increasing `high` order (above); no order is
/// promised across nodes. Cloning the iterator before consuming it gives an
/// independent restart of the same query.
///
/// # Examples
///
/// ```
/// use itree_index::IntervalTree;
/// use itree_core::models::Span;
///
/// let mut tree = IntervalTree::new();
/// tree.push(Span::new(10.0, 20.0, "a"));
/// tree.push(Span::new(15.0, 25.0, "b"));
/// tree.construct().unwrap();
///
/// for span in tree.query(17.5).unwrap() {
///     println!("{} contains 17.5", span.val);
/// }
/// ```
#[derive(Debug)]
pub struct QueryIter<'a, N>
where
    N: Interval,
{
    intervals: &'a [N],
    ascending: &'a [usize],
    descending: &'a [usize],
    node: Option<&'a Node<N::Coord>>,
    index: usize,
    point: N::Coord,
}

impl<'a, N> QueryIter<'a, N>
where
    N: Interval,
{
    pub(crate) fn new(
        intervals: &'a [N],
        index: &'a StabIndex<N::Coord>,
        point: N::Coord,
    ) -> Self {
        let mut iter = Self {
            intervals,
            ascending: index.ascending(),
            descending: index.descending(),
            node: index.root(),
            index: 0,
            point,
        };
        iter.settle();
        iter
    }

    /// The point being stabbed.
    #[inline]
    pub fn point(&self) -> N::Coord {
        self.point
    }

    /// Descend from the current node until one has a first list entry
    /// containing the point, or the path runs out.
    fn settle(&mut self) {
        self.index = 0;
        while let Some(node) = self.node {
            match self.point.partial_cmp(&node.discriminant) {
                Some(Ordering::Less) => {
                    if node.len > 0
                        && self.intervals[self.ascending[node.start]].low() <= self.point
                    {
                        return;
                    }
                    self.node = node.left.as_deref();
                }
                Some(Ordering::Greater) => {
                    if node.len > 0
                        && self.intervals[self.descending[node.start]].high() >= self.point
                    {
                        return;
                    }
                    self.node = node.right.as_deref();
                }
                Some(Ordering::Equal) => {
                    if node.len == 0 {
                        self.node = None;
                    }
                    return;
                }
                // NaN stabs nothing
                None => {
                    self.node = None;
                    return;
                }
            }
        }
    }

    /// Step to the next entry of the current list, or move down the path once
    /// the list has no more matches.
    fn advance(&mut self) {
        let Some(node) = self.node else {
            return;
        };
        self.index += 1;
        let side = self.point.partial_cmp(&node.discriminant);

        if self.index == node.len {
            self.node = match side {
                Some(Ordering::Less) => node.left.as_deref(),
                Some(Ordering::Greater) => node.right.as_deref(),
                _ => None,
            };
            self.settle();
            return;
        }

        let pos = node.start + self.index;
        match side {
            Some(Ordering::Less) => {
                if self.intervals[self.ascending[pos]].low() <= self.point {
                    return;
                }
                self.node = node.left.as_deref();
            }
            Some(Ordering::Greater) => {
                if self.intervals[self.descending[pos]].high() >= self.point {
                    return;
                }
                self.node = node.right.as_deref();
            }
            _ => return,
        }
        self.settle();
    }

    #[inline]
    fn current(&self, node: &Node<N::Coord>) -> &'a N {
        let intervals = self.intervals;
        let pos = node.start + self.index;
        let slot = if self.point <= node.discriminant {
            self.ascending[pos]
        } else {
            self.descending[pos]
        };
        &intervals[slot]
    }
}

impl<N> Clone for QueryIter<'_, N>
where
    N: Interval,
{
    fn clone(&self) -> Self {
        Self {
            intervals: self.intervals,
            ascending: self.ascending,
            descending: self.descending,
            node: self.node,
            index: self.index,
            point: self.point,
        }
    }
}

impl<'a, N> Iterator for QueryIter<'a, N>
where
    N: Interval,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        let item = self.current(node);
        self.advance();
        Some(item)
    }
}

impl<N> FusedIterator for QueryIter<'_, N> where N: Interval {}
