/// Errors reported by the windowing engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index lookup (or insertion point) fell outside the valid range.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A build was anchored on an entry other than the one right before its start index.
    #[error("anchor entry {index} does not precede build start {start_index}")]
    AnchorMismatch { index: usize, start_index: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
