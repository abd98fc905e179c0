//! Scaled Multiply-Accumulate
//!
//! Fractional Q15 × sample products accumulated into a 32-bit accumulator.
//! The product is doubled (Q15 × Q15 → Q31) as on DSPs running in fractional
//! mode, so existing coefficient tables keep their exact response.
//!
//! Seven taps of up to 2^31 each can exceed the accumulator range, so every
//! step is computed wide and saturated once at the `i32` extremes. The only
//! product that does not itself fit Q31 is `-1.0 × -32768`.

use crate::config::SCALE_BITS;
use crate::types::{Coefficient, Sample};

/// Wide accumulator, transient within one stage
pub type Accumulator = i32;

/// Exact fractional product of a coefficient and a sample (Q31 scale)
#[inline]
#[must_use]
pub fn product(coefficient: Coefficient, sample: Sample) -> i64 {
    (i64::from(coefficient.to_bits()) * i64::from(sample)) << 1
}

/// Accumulate `coefficient × sample`
#[inline]
#[must_use]
pub fn mac_add(acc: Accumulator, coefficient: Coefficient, sample: Sample) -> Accumulator {
    saturate(i64::from(acc) + product(coefficient, sample))
}

/// Subtract `coefficient × sample` from the accumulator
#[inline]
#[must_use]
pub fn mac_sub(acc: Accumulator, coefficient: Coefficient, sample: Sample) -> Accumulator {
    saturate(i64::from(acc) - product(coefficient, sample))
}

/// Convert an accumulator back to sample scale
///
/// Floor division by 2^16; no rounding. An `i32` shifted right by 16 always
/// fits an `i16`, so the narrowing is exact.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn rescale(acc: Accumulator) -> Sample {
    (acc >> SCALE_BITS) as Sample
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn saturate(value: i64) -> Accumulator {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as Accumulator
}
