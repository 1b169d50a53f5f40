use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Num;

/// Numeric type usable as an interval endpoint.
///
/// Anything that behaves like a number and can be compared qualifies, so both
/// integer and floating point coordinates work. Floats are only partially
/// ordered: a `NaN` endpoint is rejected when a tree is built, and a `NaN`
/// query point simply matches nothing.
pub trait Coordinate: Num + PartialOrd + Copy + Debug + Send + Sync {}

impl<V> Coordinate for V where V: Num + PartialOrd + Copy + Debug + Send + Sync {}

/// A closed interval `[low, high]` with an identity.
///
/// Implement this for your own record type to index it directly; the index
/// never clones or constructs intervals, it only hands out references to the
/// ones it was given.
///
/// ```
/// use itree_core::Interval;
///
/// struct Reading {
///     from: f64,
///     to: f64,
///     sensor: u32,
/// }
///
/// impl Interval for Reading {
///     type Coord = f64;
///     type Id = u32;
///
///     fn low(&self) -> f64 { self.from }
///     fn high(&self) -> f64 { self.to }
///     fn id(&self) -> u32 { self.sensor }
/// }
///
/// let r = Reading { from: 1.0, to: 2.5, sensor: 7 };
/// assert!(r.contains(2.5));
/// assert!(!r.contains(2.6));
/// ```
pub trait Interval: Send + Sync {
    type Coord: Coordinate;
    type Id: Eq + Hash + Clone;

    fn low(&self) -> Self::Coord;

    fn high(&self) -> Self::Coord;

    fn id(&self) -> Self::Id;

    /// Closed on both ends.
    #[inline]
    fn contains(&self, point: Self::Coord) -> bool {
        self.low() <= point && point <= self.high()
    }

    /// `true` when `low <= high`. Incomparable endpoints (`NaN`) are not valid.
    #[inline]
    fn is_valid(&self) -> bool {
        self.low() <= self.high()
    }
}
