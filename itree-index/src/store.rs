use std::ops::Index;

use itree_core::Interval;

/// Append-only, insertion-ordered storage for the intervals of an index.
///
/// The store owns every interval; everything else (auxiliary arrays, query
/// results) refers to them by position or by reference.
#[derive(Debug, Clone)]
pub struct IntervalStore<N>
where
    N: Interval,
{
    intervals: Vec<N>,
}

impl<N> Default for IntervalStore<N>
where
    N: Interval,
{
    fn default() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }
}

impl<N> IntervalStore<N>
where
    N: Interval,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn push(&mut self, interval: N) {
        self.intervals.push(interval);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    #[inline]
    pub fn get(&self, pos: usize) -> Option<&N> {
        self.intervals.get(pos)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.intervals.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[N] {
        &self.intervals
    }
}

impl<N> Index<usize> for IntervalStore<N>
where
    N: Interval,
{
    type Output = N;

    #[inline]
    fn index(&self, pos: usize) -> &N {
        &self.intervals[pos]
    }
}

impl<N> From<Vec<N>> for IntervalStore<N>
where
    N: Interval,
{
    fn from(intervals: Vec<N>) -> Self {
        Self { intervals }
    }
}

impl<N> FromIterator<N> for IntervalStore<N>
where
    N: Interval,
{
    fn from_iter<It: IntoIterator<Item = N>>(iter: It) -> Self {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl<N> Extend<N> for IntervalStore<N>
where
    N: Interval,
{
    fn extend<It: IntoIterator<Item = N>>(&mut self, iter: It) {
        self.intervals.extend(iter);
    }
}

impl<N> IntoIterator for IntervalStore<N>
where
    N: Interval,
{
    type Item = N;
    type IntoIter = ::std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a IntervalStore<N>
where
    N: Interval,
{
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> std::slice::Iter<'a, N> {
        self.intervals.iter()
    }
}
