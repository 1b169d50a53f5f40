use std::cmp::Ordering;

use itree_core::{Coordinate, ITreeError, Interval};

use crate::node::Node;

/// The built, immutable part of an [`IntervalTree`](crate::IntervalTree).
///
/// The tree branches on the distinct endpoint values of the indexed intervals,
/// always picking the median of the remaining value range, so its depth is
/// logarithmic in the number of distinct endpoints no matter how the intervals
/// are distributed. Every interval is stored at the first node whose
/// discriminant it straddles, once in `ascending` (sorted by `low` within the
/// node's slice) and once in `descending` (sorted by `high`, largest first).
/// Both arrays hold positions into the interval store.
#[derive(Debug, Clone)]
pub struct StabIndex<V>
where
    V: Coordinate,
{
    root: Option<Box<Node<V>>>,
    ascending: Vec<usize>,
    descending: Vec<usize>,
    node_count: usize,
    distinct_endpoints: usize,
}

impl<V> StabIndex<V>
where
    V: Coordinate,
{
    /// Build the index over `intervals`.
    ///
    /// Fails with [`ITreeError::InvalidInterval`] on the first interval whose
    /// endpoints are out of order or not comparable.
    /// ```
    /// use itree_index::StabIndex;
    /// use itree_core::models::Span;
    ///
    /// let spans = vec![Span::new(1, 4, 'a'), Span::new(2, 9, 'b'), Span::new(6, 7, 'c')];
    /// let index = StabIndex::build(&spans).unwrap();
    /// assert_eq!(index.distinct_endpoints(), 6);
    /// assert_eq!(index.ascending().len(), 3);
    /// ```
    pub fn build<N>(intervals: &[N]) -> Result<Self, ITreeError>
    where
        N: Interval<Coord = V>,
    {
        let values = endpoint_values(intervals)?;

        let mut builder = Builder {
            intervals,
            values: &values,
            ascending: vec![0; intervals.len()],
            descending: vec![0; intervals.len()],
            node_count: 0,
        };

        // scratch list of store positions, partitioned in place while descending
        let mut handles: Vec<usize> = (0..intervals.len()).collect();
        let (root, written) = builder.build_node(&mut handles, 0, values.len(), 0);
        debug_assert_eq!(written, intervals.len());

        Ok(StabIndex {
            root,
            ascending: builder.ascending,
            descending: builder.descending,
            node_count: builder.node_count,
            distinct_endpoints: values.len(),
        })
    }

    #[inline]
    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    #[inline]
    pub fn ascending(&self) -> &[usize] {
        &self.ascending
    }

    #[inline]
    pub fn descending(&self) -> &[usize] {
        &self.descending
    }

    /// Number of materialized nodes. Discriminants covering nothing and
    /// having no children are never allocated.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.depth())
    }

    #[inline]
    pub fn distinct_endpoints(&self) -> usize {
        self.distinct_endpoints
    }
}

/// Collect every `low` and `high`, sorted ascending and deduplicated.
fn endpoint_values<N>(intervals: &[N]) -> Result<Vec<N::Coord>, ITreeError>
where
    N: Interval,
{
    let mut values = Vec::with_capacity(intervals.len() * 2);
    for (index, interval) in intervals.iter().enumerate() {
        // rejects NaN too, which keeps the sorts below total
        if !interval.is_valid() {
            return Err(ITreeError::InvalidInterval {
                index,
                low: format!("{:?}", interval.low()),
                high: format!("{:?}", interval.high()),
            });
        }
        values.push(interval.low());
        values.push(interval.high());
    }
    values.sort_unstable_by(total);
    values.dedup();
    Ok(values)
}

#[inline]
fn total<V: PartialOrd>(a: &V, b: &V) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Scratch state for a single construction.
struct Builder<'a, N>
where
    N: Interval,
{
    intervals: &'a [N],
    values: &'a [N::Coord],
    ascending: Vec<usize>,
    descending: Vec<usize>,
    node_count: usize,
}

impl<N> Builder<'_, N>
where
    N: Interval,
{
    /// Build the subtree over `values[lo..hi]` from the intervals named in
    /// `handles`, writing covering lists starting at `cursor`.
    ///
    /// Returns the subtree and the cursor just past everything it wrote.
    fn build_node(
        &mut self,
        handles: &mut [usize],
        lo: usize,
        hi: usize,
        cursor: usize,
    ) -> (Option<Box<Node<N::Coord>>>, usize) {
        if lo >= hi {
            return (None, cursor);
        }

        let mid = (lo + hi - 1) / 2;
        let discriminant = self.values[mid];

        // Three-way partition in one pass:
        //   handles[..right]      entirely below the discriminant
        //   handles[right..size]  entirely above
        //   handles[size..]       covering, already copied to the aux arrays
        let list_start = cursor;
        let mut cursor = cursor;
        let mut i = 0;
        let mut right = handles.len();
        let mut size = handles.len();

        while i < right {
            let interval = &self.intervals[handles[i]];
            debug_assert!(interval.is_valid());

            if interval.low() <= discriminant && interval.high() >= discriminant {
                self.ascending[cursor] = handles[i];
                self.descending[cursor] = handles[i];
                cursor += 1;

                right -= 1;
                handles.swap(i, right);
                size -= 1;
                handles.swap(right, size);
            } else if interval.low() > discriminant {
                right -= 1;
                handles.swap(i, right);
            } else {
                i += 1;
            }
        }
        let list_len = cursor - list_start;

        let (below, rest) = handles.split_at_mut(right);
        let above = &mut rest[..size - right];

        let mut left_node = None;
        if !below.is_empty() && lo < mid {
            (left_node, cursor) = self.build_node(below, lo, mid, cursor);
        }

        let mut right_node = None;
        if !above.is_empty() && mid + 1 < hi {
            (right_node, cursor) = self.build_node(above, mid + 1, hi, cursor);
        }

        if list_len == 0 && left_node.is_none() && right_node.is_none() {
            return (None, cursor);
        }

        if list_len > 1 {
            let intervals = self.intervals;
            let range = list_start..list_start + list_len;
            self.ascending[range.clone()]
                .sort_by(|&a, &b| total(&intervals[a].low(), &intervals[b].low()));
            self.descending[range]
                .sort_by(|&a, &b| total(&intervals[b].high(), &intervals[a].high()));
        }

        self.node_count += 1;
        let node = Node {
            discriminant,
            start: list_start,
            len: list_len,
            left: left_node,
            right: right_node,
        };
        (Some(Box::new(node)), cursor)
    }
}
