use thiserror::Error;

/// Error types for `Sequence` cursor operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SequenceError {
    /// The cursor sits past the last element, so there is no current item
    #[error("No current item: cursor {cursor} is at the end of a sequence of length {len}")]
    NoCurrentItem {
        /// Cursor index at the time of the call
        cursor: usize,
        /// Number of live elements at the time of the call
        len: usize,
    },
}

pub type Result<T> = core::result::Result<T, SequenceError>;
