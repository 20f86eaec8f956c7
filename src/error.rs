use std::fmt;

/// Misuses of a [`BoundedRankedIndex`](struct.BoundedRankedIndex.html).
///
/// These are programmer errors: nothing in the index can fail transiently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankError {
    /// A rank was requested past the end of the ranked values.
    InvalidIndex {
        /// The requested rank.
        index: usize,
        /// The number of ranked values when the request happened.
        size: usize,
    },
    /// An index was requested with room for zero value.
    InvalidCapacity,
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankError::InvalidIndex { index, size } => write!(
                f,
                "Invalid rank {} for an index of {} ranked values.",
                index, size
            ),
            RankError::InvalidCapacity => {
                write!(f, "Ranked index capacity must be at least 1.")
            }
        }
    }
}

impl std::error::Error for RankError {}

#[cfg(test)]
mod tests {
    use super::RankError;

    #[test]
    fn test_display() {
        let e = RankError::InvalidIndex { index: 3, size: 2 };
        assert_eq!(
            e.to_string(),
            "Invalid rank 3 for an index of 2 ranked values."
        );
        assert!(RankError::InvalidCapacity.to_string().contains("at least 1"));
    }
}
