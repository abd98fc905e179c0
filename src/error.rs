//! Configuration errors
//!
//! Every error here is raised before streaming starts. Per-sample processing
//! is infallible: numeric overflow saturates in place.

use core::fmt;

/// Rejection of a filter configuration or of a call shape
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Order is zero or odd
    InvalidOrder(u16),
    /// More stages requested than the history capacity holds
    TooManyStages {
        /// Stages implied by the order
        requested: usize,
        /// Stages the state can hold
        capacity: usize,
    },
    /// Coefficient table shorter than the stage count
    MissingCoefficients {
        /// Stages implied by the order
        required: usize,
        /// Coefficient sets supplied
        available: usize,
    },
    /// History array shorter than the stage count
    HistoryTooShort {
        /// Stages implied by the order
        required: usize,
        /// Delay lines supplied
        available: usize,
    },
    /// Real-valued coefficient not representable after halving
    CoefficientOutOfRange,
    /// Input and output blocks differ in length
    BufferLengthMismatch {
        /// Input length in samples
        input: usize,
        /// Output length in samples
        output: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrder(order) => {
                write!(f, "filter order {order} must be even and at least 2")
            }
            Self::TooManyStages {
                requested,
                capacity,
            } => write!(
                f,
                "{requested} stages requested but history holds {capacity}"
            ),
            Self::MissingCoefficients {
                required,
                available,
            } => write!(
                f,
                "{required} coefficient sets required but {available} supplied"
            ),
            Self::HistoryTooShort {
                required,
                available,
            } => write!(
                f,
                "{required} delay lines required but {available} supplied"
            ),
            Self::CoefficientOutOfRange => {
                write!(f, "coefficient outside the representable Q15 range")
            }
            Self::BufferLengthMismatch { input, output } => write!(
                f,
                "input block has {input} samples but output block has {output}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "embedded")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::InvalidOrder(order) => defmt::write!(f, "InvalidOrder({})", order),
            Self::TooManyStages {
                requested,
                capacity,
            } => defmt::write!(f, "TooManyStages({}/{})", requested, capacity),
            Self::MissingCoefficients {
                required,
                available,
            } => defmt::write!(f, "MissingCoefficients({}/{})", required, available),
            Self::HistoryTooShort {
                required,
                available,
            } => defmt::write!(f, "HistoryTooShort({}/{})", required, available),
            Self::CoefficientOutOfRange => defmt::write!(f, "CoefficientOutOfRange"),
            Self::BufferLengthMismatch { input, output } => {
                defmt::write!(f, "BufferLengthMismatch({}/{})", input, output);
            }
        }
    }
}
