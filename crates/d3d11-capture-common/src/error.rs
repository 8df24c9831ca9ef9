use thiserror::Error;

pub type Result<T, E = ViewDescError> = std::result::Result<T, E>;

/// Failure decoding a view descriptor from captured words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewDescError {
    #[error("truncated {desc}: expected {expected} words, found {found}")]
    Truncated {
        desc: &'static str,
        expected: usize,
        found: usize,
    },
}
