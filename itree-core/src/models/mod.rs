pub mod interval;

// re-export for cleaner imports
pub use self::interval::Span;
