use std::cmp::Ordering;
use std::hash::Hash;

use crate::traits::{Coordinate, Interval};

/// Represent a closed range `[low, high]` tagged with a value.
/// Both endpoints are inclusive; `val` doubles as the span's identity.
#[derive(Eq, Debug, Clone, Copy)]
pub struct Span<V, T>
where
    V: Coordinate,
    T: Eq + Hash + Clone + Send + Sync,
{
    pub low: V,
    pub high: V,
    pub val: T,
}

impl<V, T> Span<V, T>
where
    V: Coordinate,
    T: Eq + Hash + Clone + Send + Sync,
{
    /// Create a span from two endpoints given in either order.
    /// ```
    /// use itree_core::models::Span;
    ///
    /// let s = Span::new(5.0, 2.0, "a");
    /// assert_eq!((s.low, s.high), (2.0, 5.0));
    /// ```
    #[inline]
    pub fn new(a: V, b: V, val: T) -> Self {
        if b < a {
            Span {
                low: b,
                high: a,
                val,
            }
        } else {
            Span {
                low: a,
                high: b,
                val,
            }
        }
    }

    /// Check if two spans share at least one point
    #[inline]
    pub fn overlap(&self, low: V, high: V) -> bool {
        self.low <= high && self.high >= low
    }
}

impl<V, T> Interval for Span<V, T>
where
    V: Coordinate,
    T: Eq + Hash + Clone + Send + Sync,
{
    type Coord = V;
    type Id = T;

    #[inline]
    fn low(&self) -> V {
        self.low
    }

    #[inline]
    fn high(&self) -> V {
        self.high
    }

    #[inline]
    fn id(&self) -> T {
        self.val.clone()
    }
}

impl<V, T> PartialOrd for Span<V, T>
where
    V: Coordinate,
    T: Eq + Hash + Clone + Send + Sync,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.low.partial_cmp(&other.low)? {
            Ordering::Equal => self.high.partial_cmp(&other.high),
            ord => Some(ord),
        }
    }
}

impl<V, T> PartialEq for Span<V, T>
where
    V: Coordinate,
    T: Eq + Hash + Clone + Send + Sync,
{
    #[inline]
    fn eq(&self, other: &Span<V, T>) -> bool {
        self.low == other.low && self.high == other.high
    }
}
