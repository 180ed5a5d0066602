//! Error types for checked set construction.

/// Represents an attempt to build a set from input holding equal elements.
///
/// Returned by [`PersistentListSet::try_from_vec`](super::PersistentListSet::try_from_vec)
/// when the caller asserts uniqueness and the input disagrees.
///
/// # Examples
///
/// ```rust
/// use setwise::persistent::{DuplicateElementError, PersistentListSet};
///
/// let error = PersistentListSet::try_from_vec(vec![4, 5, 4]).unwrap_err();
/// assert_eq!(error, DuplicateElementError { position: 2, first_position: 0 });
/// assert_eq!(
///     format!("{}", error),
///     "element at position 2 duplicates the element at position 0"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateElementError {
    /// Index of the later of the two equal elements.
    pub position: usize,
    /// Index of the earlier element it duplicates.
    pub first_position: usize,
}

impl std::fmt::Display for DuplicateElementError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "element at position {} duplicates the element at position {}",
            self.position, self.first_position
        )
    }
}

impl std::error::Error for DuplicateElementError {}
