//! Digital Signal Processing
//!
//! Provides the fixed-point IIR engine:
//! - Scaled multiply-accumulate unit
//! - Biquad coefficient layout (with halved first taps)
//! - Per-stage delay lines
//! - Cascaded biquad stages and the validated filter front end

pub mod mac;
pub mod coefficients;
pub mod history;
pub mod biquad;
pub mod filter;
