//! Shared types used across the filter engine
//!
//! Domain types that carry the fixed-point formats and enforce the filter
//! order invariant at construction time.

use core::fmt;

use fixed::types::I1F15;

use crate::error::ConfigError;

/// Audio sample: signed 16-bit, one per call
pub type Sample = i16;

/// Filter coefficient in Q1.15 format, range [-1, 1)
pub type Coefficient = I1F15;

/// Filter order: even and at least 2
///
/// An order of `n` is realized as `n / 2` cascaded biquad stages.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Order(u16);

impl Order {
    /// Second order (one stage)
    pub const SECOND: Self = Self(2);

    /// Fourth order (two stages)
    pub const FOURTH: Self = Self(4);

    /// Validate a raw order
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidOrder`] if `order` is zero or odd.
    pub const fn new(order: u16) -> Result<Self, ConfigError> {
        if order >= 2 && order.is_multiple_of(2) {
            Ok(Self(order))
        } else {
            Err(ConfigError::InvalidOrder(order))
        }
    }

    /// Order realized by `stages` biquad sections
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidOrder`] if `stages` is zero or the order does
    /// not fit in a `u16`.
    pub fn from_stages(stages: usize) -> Result<Self, ConfigError> {
        let order = stages
            .checked_mul(2)
            .and_then(|o| u16::try_from(o).ok())
            .ok_or(ConfigError::InvalidOrder(u16::MAX))?;
        Self::new(order)
    }

    /// Raw order value
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Number of biquad stages
    #[must_use]
    pub const fn stages(self) -> usize {
        (self.0 / 2) as usize
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order({})", self.0)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Order {
    type Error = ConfigError;

    fn try_from(order: u16) -> Result<Self, Self::Error> {
        Self::new(order)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Order {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "order {}", self.0);
    }
}
