//! Biquad Coefficient Layout
//!
//! One stage is described by six Q1.15 words, in table order:
//!
//! ```text
//!   [0] a0       direct gain
//!   [1] a1 / 2   first feed-forward tap, halved
//!   [2] a2       second feed-forward tap
//!   [3] unused   reserved, never read
//!   [4] b1 / 2   first feedback tap, halved
//!   [5] b2       second feedback tap
//! ```
//!
//! Stable second-order sections routinely need |a1| and |b1| up to 2, which
//! Q1.15 cannot hold. Those two taps are stored at half magnitude and the
//! stage applies each of them twice. Feedback taps are subtracted, so the
//! stage realizes
//!
//! ```text
//!   y[n] = a0·x[n] + a1·x[n-1] + a2·x[n-2] - b1·y[n-1] - b2·y[n-2]
//! ```

use fixed::types::I17F15;

use crate::config::{COEFFS_PER_STAGE, UNUSED_SLOT};
use crate::error::ConfigError;
use crate::types::Coefficient;

/// Quantized coefficients for one biquad stage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoefficientSet {
    a0: Coefficient,
    a1_half: Coefficient,
    a2: Coefficient,
    reserved: i16,
    b1_half: Coefficient,
    b2: Coefficient,
}

impl CoefficientSet {
    /// All taps zero: output is always zero
    pub const ZERO: Self = Self::from_raw([0; COEFFS_PER_STAGE]);

    /// Exact sign inversion (`a0 = -1.0`)
    ///
    /// +1.0 is not representable in Q1.15, so unity gain is built from two of
    /// these in cascade. The only inexact input is -32768, which saturates to
    /// 32767.
    pub const INVERT: Self = Self::from_raw([i16::MIN, 0, 0, 0, 0, 0]);

    /// Build from Q1.15 values, with the first taps already halved
    #[must_use]
    pub const fn new(
        a0: Coefficient,
        a1_half: Coefficient,
        a2: Coefficient,
        b1_half: Coefficient,
        b2: Coefficient,
    ) -> Self {
        Self {
            a0,
            a1_half,
            a2,
            reserved: 0,
            b1_half,
            b2,
        }
    }

    /// Import one stage from a raw six-word table row
    ///
    /// The reserved word is kept so [`Self::to_raw`] reproduces the row.
    #[must_use]
    pub const fn from_raw(raw: [i16; COEFFS_PER_STAGE]) -> Self {
        Self {
            a0: Coefficient::from_bits(raw[0]),
            a1_half: Coefficient::from_bits(raw[1]),
            a2: Coefficient::from_bits(raw[2]),
            reserved: raw[UNUSED_SLOT],
            b1_half: Coefficient::from_bits(raw[4]),
            b2: Coefficient::from_bits(raw[5]),
        }
    }

    /// Export as a raw six-word table row
    #[must_use]
    pub const fn to_raw(&self) -> [i16; COEFFS_PER_STAGE] {
        [
            self.a0.to_bits(),
            self.a1_half.to_bits(),
            self.a2.to_bits(),
            self.reserved,
            self.b1_half.to_bits(),
            self.b2.to_bits(),
        ]
    }

    /// Quantize real-valued coefficients
    ///
    /// `a1` and `b1` are the full-magnitude taps in [-2, 2); they are halved
    /// here. All other taps must lie in [-1, 1). Quantization rounds to the
    /// nearest Q15 step; values within half a step of +1.0 clamp to
    /// [`Coefficient::MAX`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::CoefficientOutOfRange`] if any value (after halving)
    /// falls outside [-1, 1) or is not finite.
    pub fn from_f32(a0: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> Result<Self, ConfigError> {
        let quantize = |value: f32| {
            if (-1.0..1.0).contains(&value) {
                Ok(Coefficient::saturating_from_num(value))
            } else {
                Err(ConfigError::CoefficientOutOfRange)
            }
        };
        let set = Self::new(
            quantize(a0)?,
            quantize(a1 / 2.0)?,
            quantize(a2)?,
            quantize(b1 / 2.0)?,
            quantize(b2)?,
        );
        trace!("quantized stage {}", set.to_raw());
        Ok(set)
    }

    /// Direct gain
    #[must_use]
    pub const fn a0(&self) -> Coefficient {
        self.a0
    }

    /// Stored (halved) first feed-forward tap
    #[must_use]
    pub const fn a1_half(&self) -> Coefficient {
        self.a1_half
    }

    /// Second feed-forward tap
    #[must_use]
    pub const fn a2(&self) -> Coefficient {
        self.a2
    }

    /// Stored (halved) first feedback tap
    #[must_use]
    pub const fn b1_half(&self) -> Coefficient {
        self.b1_half
    }

    /// Second feedback tap
    #[must_use]
    pub const fn b2(&self) -> Coefficient {
        self.b2
    }

    /// Reconstructed first feed-forward tap, `2 × a1_half`
    #[must_use]
    pub fn a1(&self) -> I17F15 {
        double(self.a1_half)
    }

    /// Reconstructed first feedback tap, `2 × b1_half`
    #[must_use]
    pub fn b1(&self) -> I17F15 {
        double(self.b1_half)
    }

    /// True if every tap the engine reads is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        [self.a0, self.a1_half, self.a2, self.b1_half, self.b2]
            .iter()
            .all(|c| *c == Coefficient::ZERO)
    }
}

impl Default for CoefficientSet {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[i16; COEFFS_PER_STAGE]> for CoefficientSet {
    fn from(raw: [i16; COEFFS_PER_STAGE]) -> Self {
        Self::from_raw(raw)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for CoefficientSet {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "CoefficientSet({})", self.to_raw());
    }
}

fn double(half: Coefficient) -> I17F15 {
    I17F15::from_bits(i32::from(half.to_bits()) * 2)
}
