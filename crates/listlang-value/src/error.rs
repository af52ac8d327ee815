/// Error raised for an out-of-range index or a malformed range
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("ERR_INDEX: index {index} out of range for list of length {len}")]
    OutOfRange { index: i64, len: usize },

    #[error("ERR_INDEX: slice [{begin}, {end}) out of range for list of length {len}")]
    InvalidRange { begin: i64, end: i64, len: usize },

    #[error("ERR_INDEX: cannot remove from an empty list")]
    Empty,
}

impl IndexError {
    #[must_use]
    pub fn out_of_range(index: i64, len: usize) -> Self {
        log::debug!("rejected index {index} for list of length {len}");
        Self::OutOfRange { index, len }
    }

    #[must_use]
    pub fn invalid_range(begin: i64, end: i64, len: usize) -> Self {
        log::debug!("rejected slice [{begin}, {end}) for list of length {len}");
        Self::InvalidRange { begin, end, len }
    }

    #[must_use]
    pub fn empty() -> Self {
        log::debug!("rejected removal from an empty list");
        Self::Empty
    }
}
