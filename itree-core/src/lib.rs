//! Shared building blocks for the itree workspace: the [`Interval`] capability
//! every indexed record implements, the [`Coordinate`] bound on endpoint values,
//! a ready-made [`models::Span`] and the [`ITreeError`] type.

pub mod errors;
pub mod models;
pub mod traits;

pub use self::errors::ITreeError;
pub use self::traits::{Coordinate, Interval};
