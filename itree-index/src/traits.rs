use itree_core::{ITreeError, Interval};

pub use itree_core::models::Span;

/// Common interface of every point stabbing index in this crate.
pub trait Stabber<N>: Send + Sync
where
    N: Interval,
{
    fn build(intervals: Vec<N>) -> Result<Self, ITreeError>
    where
        Self: Sized;

    fn find_iter<'a>(
        &'a self,
        point: N::Coord,
    ) -> Result<Box<dyn Iterator<Item = &'a N> + 'a>, ITreeError>;

    fn find(&self, point: N::Coord) -> Result<Vec<&N>, ITreeError> {
        Ok(self.find_iter(point)?.collect())
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
