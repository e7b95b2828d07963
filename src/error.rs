use std::fmt;

/// Reasons a generator cannot be constructed.
///
/// Once a generator exists none of its transitions can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The integer or set to partition has size 0
    EmptySet,

    /// The requested number of parts is not in `1..=n`
    PartsOutOfRange {
        /// Integer being partitioned
        n: usize,
        /// Requested number of parts
        m: usize,
    },

    /// The size exceeds what the generator's storage or label type can hold
    TooLarge {
        /// Requested size
        n: usize,
        /// Largest supported size
        max: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptySet => write!(f, "size must be at least 1"),
            Error::PartsOutOfRange { n, m } => {
                write!(f, "number of parts {} is not in 1..={}", m, n)
            }
            Error::TooLarge { n, max } => {
                write!(f, "size {} exceeds the supported maximum of {}", n, max)
            }
        }
    }
}

impl std::error::Error for Error {}
