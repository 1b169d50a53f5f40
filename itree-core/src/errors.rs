use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ITreeError {
    #[error("Interval tree has not been constructed; call construct() before querying")]
    NotConstructed,

    #[error("Invalid interval at index {index}: low={low}, high={high}")]
    InvalidInterval {
        index: usize,
        low: String,
        high: String,
    },
}
