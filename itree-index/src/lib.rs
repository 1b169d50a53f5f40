//! Point stabbing queries over a static set of closed intervals.
//!
//! This crate answers "which intervals contain `x`?" for many `x` without
//! rescanning every interval. The main data structure is [`IntervalTree`], a
//! centered interval tree built once over the distinct endpoint values of its
//! intervals and then queried as often as needed.
//!
//! ## Features
//!
//! - **Logarithmic depth**: the tree branches on the median of the remaining
//!   endpoint values, so its depth only depends on the number of distinct
//!   endpoints, never on how the intervals overlap
//! - **Iterator-based API**: [`QueryIter`] yields references lazily and can be
//!   dropped at any point
//! - **Thread-safe reads**: a constructed tree is never mutated by queries, so
//!   it can be shared across threads; enable the `parallel` feature to batch
//!   queries over rayon with [`IntervalTree::query_many`]
//! - **Any numeric coordinate**: integers and floats both work through
//!   [`itree_core::Coordinate`]
//!
//! ## Quick Start
//!
//! ```rust
//! use itree_index::IntervalTree;
//! use itree_core::models::Span;
//!
//! let mut tree = IntervalTree::new();
//! tree.push(Span::new(10.0, 20.0, "first"));
//! tree.push(Span::new(15.0, 30.0, "second"));
//! tree.push(Span::new(40.0, 40.0, "point"));
//!
//! // put the tree into query mode
//! tree.construct().unwrap();
//!
//! // both ends are inclusive
//! assert_eq!(tree.count(20.0).unwrap(), 2);
//! assert_eq!(tree.count(40.0).unwrap(), 1);
//! assert_eq!(tree.count(35.0).unwrap(), 0);
//!
//! for span in tree.query(17.0).unwrap() {
//!     println!("{} contains 17.0", span.val);
//! }
//! ```
//!
//! ## Choosing an implementation at runtime
//!
//! ```rust
//! use itree_index::{StabberType, build_stabber};
//! use itree_core::models::Span;
//!
//! let spans = vec![Span::new(1u32, 9, 'a'), Span::new(5, 6, 'b')];
//! let index = build_stabber(StabberType::IntervalTree, spans).unwrap();
//! assert_eq!(index.find(5).unwrap().len(), 2);
//! ```

/// The built tree and its construction.
///
/// See [`StabIndex`] for details.
pub mod builder;

/// Tree nodes.
pub mod node;

/// The lazy stabbing query.
///
/// See [`QueryIter`] for details.
pub mod query;

/// Brute-force reference implementation.
///
/// See [`LinearScan`] for details.
pub mod scan;

/// Insertion-ordered interval storage.
pub mod store;

/// Core traits for stabbing queries.
///
/// See [`Stabber`] for the main trait.
pub mod traits;

/// The interval tree with its build/query lifecycle.
///
/// See [`IntervalTree`] for details.
pub mod tree;

// re-exports
pub use self::builder::StabIndex;
pub use self::query::QueryIter;
pub use self::scan::LinearScan;
pub use self::store::IntervalStore;
pub use self::traits::{Span, Stabber};
pub use self::tree::IntervalTree;
pub use itree_core::{Coordinate, ITreeError, Interval};

/// The type of stabbing index to use.
///
/// # Variants
///
/// * `IntervalTree` - Use the centered interval tree. Sub-linear queries after
///   a one-off `O(n log n)` construction.
/// * `LinearScan` - Check every interval on every query. No construction cost;
///   useful as a reference or for very small sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabberType {
    /// Use the centered interval tree.
    IntervalTree,
    /// Use the brute-force scan.
    LinearScan,
}

/// Build the stabbing index selected by `stabber_type` over `intervals`.
pub fn build_stabber<N>(
    stabber_type: StabberType,
    intervals: Vec<N>,
) -> Result<Box<dyn Stabber<N>>, ITreeError>
where
    N: Interval + 'static,
{
    let stabber: Box<dyn Stabber<N>> = match stabber_type {
        StabberType::IntervalTree => Box::new(IntervalTree::build(intervals)?),
        StabberType::LinearScan => Box::new(LinearScan::build(intervals)?),
    };
    Ok(stabber)
}

/// Constants used throughout the crate.
pub mod consts {
    /// Name of the tree backend, as accepted by [`StabberType::from_name`](crate::StabberType::from_name).
    pub const INTERVAL_TREE: &str = "itree";
    /// Name of the brute-force backend.
    pub const LINEAR_SCAN: &str = "scan";
}

impl StabberType {
    /// Look a backend up by its name in [`consts`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            consts::INTERVAL_TREE => Some(StabberType::IntervalTree),
            consts::LINEAR_SCAN => Some(StabberType::LinearScan),
            _ => None,
        }
    }
}
