use std::ops::Index;

use itree_core::{ITreeError, Interval};
use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::Stabber;
use crate::builder::StabIndex;
use crate::query::QueryIter;
use crate::store::IntervalStore;

/// A centered interval tree answering "which intervals contain this point".
///
/// The tree has two modes. Fill it with [`push`](Self::push) (or build it from
/// a `Vec`), then call [`construct`](Self::construct) to put it into query
/// mode. Queries on a tree that is not constructed fail with
/// [`ITreeError::NotConstructed`]. The stored intervals can be read in every
/// mode.
///
/// # Examples
///
/// ```
/// use itree_index::IntervalTree;
/// use itree_core::models::Span;
///
/// let mut tree = IntervalTree::new();
/// tree.push(Span::new(2, 5, "short"));
/// tree.push(Span::new(0, 100, "long"));
/// tree.push(Span::new(50, 60, "late"));
///
/// assert!(tree.query(3).is_err());
/// tree.construct().unwrap();
///
/// let mut hits: Vec<&str> = tree.query(3).unwrap().map(|s| s.val).collect();
/// hits.sort();
/// assert_eq!(hits, vec!["long", "short"]);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalTree<N>
where
    N: Interval,
{
    store: IntervalStore<N>,
    index: Option<StabIndex<N::Coord>>,
}

impl<N> Default for IntervalTree<N>
where
    N: Interval,
{
    fn default() -> Self {
        Self {
            store: IntervalStore::default(),
            index: None,
        }
    }
}

impl<N> IntervalTree<N>
where
    N: Interval,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            store: IntervalStore::with_capacity(cap),
            index: None,
        }
    }

    /// Append an interval to the store.
    ///
    /// SIDE EFFECTS: pushing into a constructed tree discards the built index,
    /// so the tree has to be constructed again before the next query.
    /// ```
    /// use itree_index::IntervalTree;
    /// use itree_core::models::Span;
    ///
    /// let mut tree = IntervalTree::from(vec![Span::new(0, 5, 1)]);
    /// tree.construct().unwrap();
    /// tree.push(Span::new(3, 8, 2));
    /// assert!(!tree.is_constructed());
    /// ```
    pub fn push(&mut self, interval: N) {
        self.invalidate();
        self.store.push(interval);
    }

    /// Build the tree over the current contents of the store and put it into
    /// query mode. Calling it again rebuilds from scratch.
    ///
    /// On error the tree is left unconstructed.
    pub fn construct(&mut self) -> Result<(), ITreeError> {
        self.index = None;
        let index = StabIndex::build(self.store.as_slice())?;
        debug!(
            "Constructed interval tree: {} intervals, {} distinct endpoints, {} nodes, depth {}",
            self.store.len(),
            index.distinct_endpoints(),
            index.node_count(),
            index.depth()
        );
        self.index = Some(index);
        Ok(())
    }

    /// Drop the built index and go back to filling mode. The intervals stay.
    pub fn deconstruct(&mut self) {
        self.index = None;
    }

    #[inline]
    pub fn is_constructed(&self) -> bool {
        self.index.is_some()
    }

    /// Stab the tree with `point`, lazily yielding every interval that
    /// contains it.
    pub fn query(&self, point: N::Coord) -> Result<QueryIter<'_, N>, ITreeError> {
        let index = self.index.as_ref().ok_or(ITreeError::NotConstructed)?;
        Ok(QueryIter::new(self.store.as_slice(), index, point))
    }

    /// Collect every interval containing `point`.
    pub fn find(&self, point: N::Coord) -> Result<Vec<&N>, ITreeError> {
        Ok(self.query(point)?.collect())
    }

    /// Count the intervals containing `point` without allocating.
    pub fn count(&self, point: N::Coord) -> Result<usize, ITreeError> {
        Ok(self.query(point)?.count())
    }

    /// Run one query per point. With the `parallel` feature the points are
    /// spread over the rayon thread pool.
    /// ```
    /// use itree_index::IntervalTree;
    /// use itree_core::models::Span;
    ///
    /// let mut tree = IntervalTree::from(vec![Span::new(0, 10, 'a'), Span::new(5, 15, 'b')]);
    /// tree.construct().unwrap();
    ///
    /// let counts: Vec<usize> = tree
    ///     .query_many(&[0, 7, 20])
    ///     .unwrap()
    ///     .iter()
    ///     .map(|hits| hits.len())
    ///     .collect();
    /// assert_eq!(counts, vec![1, 2, 0]);
    /// ```
    pub fn query_many(&self, points: &[N::Coord]) -> Result<Vec<Vec<&N>>, ITreeError> {
        let index = self.index.as_ref().ok_or(ITreeError::NotConstructed)?;
        let intervals = self.store.as_slice();

        #[cfg(feature = "parallel")]
        let hits = points
            .par_iter()
            .map(|&point| QueryIter::new(intervals, index, point).collect::<Vec<_>>())
            .collect();

        #[cfg(not(feature = "parallel"))]
        let hits = points
            .iter()
            .map(|&point| QueryIter::new(intervals, index, point).collect::<Vec<_>>())
            .collect();

        Ok(hits)
    }

    /// The built index, if the tree is constructed.
    #[inline]
    pub fn stab_index(&self) -> Option<&StabIndex<N::Coord>> {
        self.index.as_ref()
    }

    pub fn node_count(&self) -> Option<usize> {
        self.index.as_ref().map(|index| index.node_count())
    }

    pub fn depth(&self) -> Option<usize> {
        self.index.as_ref().map(|index| index.depth())
    }

    pub fn distinct_endpoints(&self) -> Option<usize> {
        self.index.as_ref().map(|index| index.distinct_endpoints())
    }

    #[inline]
    pub fn store(&self) -> &IntervalStore<N> {
        &self.store
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[inline]
    pub fn get(&self, pos: usize) -> Option<&N> {
        self.store.get(pos)
    }

    /// Iterate over all intervals in insertion order, constructed or not.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.store.iter()
    }

    fn invalidate(&mut self) {
        if self.index.take().is_some() {
            warn!("Interval store modified after construction; the tree must be constructed again");
        }
    }
}

impl<N> Stabber<N> for IntervalTree<N>
where
    N: Interval,
{
    /// Create and construct a tree in one go.
    /// ```
    /// use itree_index::{IntervalTree, Stabber};
    /// use itree_core::models::Span;
    ///
    /// let tree = IntervalTree::build(vec![Span::new(10, 20, "x")]).unwrap();
    /// assert_eq!(tree.find(10).unwrap().len(), 1);
    /// assert_eq!(tree.find(21).unwrap().len(), 0);
    /// ```
    fn build(intervals: Vec<N>) -> Result<Self, ITreeError>
    where
        Self: Sized,
    {
        let mut tree = IntervalTree::from(intervals);
        tree.construct()?;
        Ok(tree)
    }

    fn find_iter<'a>(
        &'a self,
        point: N::Coord,
    ) -> Result<Box<dyn Iterator<Item = &'a N> + 'a>, ITreeError> {
        Ok(Box::new(self.query(point)?))
    }

    fn len(&self) -> usize {
        self.store.len()
    }
}

impl<N> Index<usize> for IntervalTree<N>
where
    N: Interval,
{
    type Output = N;

    #[inline]
    fn index(&self, pos: usize) -> &N {
        &self.store[pos]
    }
}

impl<N> From<Vec<N>> for IntervalTree<N>
where
    N: Interval,
{
    fn from(intervals: Vec<N>) -> Self {
        Self {
            store: IntervalStore::from(intervals),
            index: None,
        }
    }
}

impl<N> FromIterator<N> for IntervalTree<N>
where
    N: Interval,
{
    fn from_iter<It: IntoIterator<Item = N>>(iter: It) -> Self {
        Self {
            store: iter.into_iter().collect(),
            index: None,
        }
    }
}

impl<N> Extend<N> for IntervalTree<N>
where
    N: Interval,
{
    fn extend<It: IntoIterator<Item = N>>(&mut self, iter: It) {
        self.invalidate();
        self.store.extend(iter);
    }
}

impl<'a, N> IntoIterator for &'a IntervalTree<N>
where
    N: Interval,
{
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> std::slice::Iter<'a, N> {
        self.store.iter()
    }
}
