//! Error types for depot construction and resource withdrawal.

use std::error::Error;
use std::fmt;

/// Errors from area and converter construction or withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepotError {
    /// An area was requested with zero capacity.
    ZeroCapacity,
    /// A withdrawal of zero resources was requested.
    ZeroCount,
    /// A converter batch size was configured as zero.
    ZeroBatch {
        /// Which batch: `"demanded"` or `"supplied"`.
        which: &'static str,
    },
}

impl fmt::Display for DepotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "area capacity must be positive"),
            Self::ZeroCount => write!(f, "withdrawal count must be positive"),
            Self::ZeroBatch { which } => {
                write!(f, "converter {which} batch must be positive")
            }
        }
    }
}

impl Error for DepotError {}
