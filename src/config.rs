//! Fixed-point and audio constants
//!
//! Compile-time parameters of the filter engine. The numeric constants are
//! part of the coefficient table format and must not change without
//! regenerating every table.

/// Right shift applied to the accumulator to return to sample scale
///
/// A Q15 × Q15 fractional product lands in Q31; dropping 16 bits yields Q15.
pub const SCALE_BITS: u32 = 16;

/// Number of words per stage in a raw coefficient table
pub const COEFFS_PER_STAGE: usize = 6;

/// Index of the reserved word in a raw coefficient table
pub const UNUSED_SLOT: usize = 3;

/// Number of delay slots per direction (x and y) in one stage
pub const HISTORY_DEPTH: usize = 2;

/// Default stage capacity for filters built with [`crate::dsp::filter::FilterConfig`]
///
/// Eight stages cover filters up to 16th order.
pub const MAX_STAGES: usize = 8;
