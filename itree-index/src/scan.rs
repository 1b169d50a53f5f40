use itree_core::{ITreeError, Interval};

use super::Stabber;

/// Brute-force stabbing: every query checks every interval.
///
/// Always correct and never needs construction, which makes it the reference
/// the tree is checked against. Queries are `O(n)`.
///
/// # Examples
///
/// ```
/// use itree_index::{LinearScan, Stabber};
/// use itree_core::models::Span;
///
/// let scan = LinearScan::build(vec![
///     Span::new(1, 4, "a"),
///     Span::new(3, 8, "b"),
/// ]).unwrap();
/// assert_eq!(scan.find(3).unwrap().len(), 2);
/// assert_eq!(scan.find(8).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LinearScan<N>
where
    N: Interval,
{
    /// List of intervals, in insertion order
    pub intervals: Vec<N>,
}

impl<N> LinearScan<N>
where
    N: Interval,
{
    /// Return an iterator over the stored intervals
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.intervals.iter()
    }
}

impl<N> Stabber<N> for LinearScan<N>
where
    N: Interval,
{
    fn build(intervals: Vec<N>) -> Result<Self, ITreeError>
    where
        Self: Sized,
    {
        Ok(LinearScan { intervals })
    }

    fn find_iter<'a>(
        &'a self,
        point: N::Coord,
    ) -> Result<Box<dyn Iterator<Item = &'a N> + 'a>, ITreeError> {
        Ok(Box::new(
            self.intervals.iter().filter(move |iv| iv.contains(point)),
        ))
    }

    fn len(&self) -> usize {
        self.intervals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use itree_core::models::Span;
    use pretty_assertions::{assert_eq, assert_ne};
    use rstest::{fixture, rstest};

    #[fixture]
    fn spans() -> Vec<Span<u32, &'static str>> {
        vec![
            Span::new(1, 5, "a"),
            Span::new(3, 7, "b"),
            Span::new(6, 10, "c"),
            Span::new(8, 12, "d"),
        ]
    }

    #[rstest]
    fn test_build_and_len(spans: Vec<Span<u32, &'static str>>) {
        let scan = LinearScan::build(spans.clone()).unwrap();
        assert_eq!(scan.len(), spans.len());
        assert_ne!(scan.is_empty(), true);
    }

    #[rstest]
    fn test_find_keeps_insertion_order(spans: Vec<Span<u32, &'static str>>) {
        let scan = LinearScan::build(spans).unwrap();

        let vals: Vec<&str> = scan.find(4).unwrap().iter().map(|s| s.val).collect();
        assert_eq!(vals, vec!["a", "b"]);

        let vals: Vec<&str> = scan.find(8).unwrap().iter().map(|s| s.val).collect();
        assert_eq!(vals, vec!["c", "d"]);
    }

    #[rstest]
    fn test_find_no_overlap(spans: Vec<Span<u32, &'static str>>) {
        let scan = LinearScan::build(spans).unwrap();
        assert_eq!(scan.find(13).unwrap().is_empty(), true);
        assert_eq!(scan.find(0).unwrap().is_empty(), true);
    }

    #[rstest]
    fn test_empty_scan() {
        let scan: LinearScan<Span<u32, &str>> = LinearScan::build(vec![]).unwrap();
        assert_eq!(scan.is_empty(), true);
        assert_eq!(scan.find_iter(1).unwrap().count(), 0);
    }
}
