//! Fixed-Point Cascaded Biquad IIR Filter Library
//!
//! This library provides a per-sample, fixed-point IIR filtering engine for
//! 16-bit audio streams. Filters of any even order are realized as a cascade
//! of second-order (biquad) sections, each with its own quantized coefficient
//! set and its own delay line.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      FILTER LAYER                            │
//! │  FilterConfig (shared)  │  ChannelState  │  IirFilter/Stereo │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      BIQUAD LAYER                            │
//! │  cascade  │  second_order  │  fourth_order  │  nth_order     │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    ARITHMETIC LAYER                          │
//! │        Scaled MAC (Q15 × i16 → saturating i32)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Caller-owned state**: delay lines live in [`dsp::filter::ChannelState`],
//!   one per channel, passed by `&mut` into every call
//! - **Validated configuration**: order and capacity are checked once, before
//!   any sample is processed
//! - **No allocation, no unsafe**: usable from an interrupt or DMA callback
//! - **Saturating arithmetic**: the accumulator never wraps

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod fmt;

/// Digital Signal Processing
///
/// MAC unit, coefficient layout, biquad stages and cascaded filters.
pub mod dsp;

/// Error types
pub mod error;

/// Shared types used across modules
pub mod types;

/// Fixed-point and audio constants
pub mod config;

pub mod prelude {
    //! Convenient re-exports for common types.

    pub use crate::config::*;
    pub use crate::dsp::biquad::{fourth_order, nth_order, second_order};
    pub use crate::dsp::coefficients::CoefficientSet;
    pub use crate::dsp::filter::{ChannelState, FilterConfig, IirFilter, StereoIir};
    pub use crate::dsp::history::DelayLine;
    pub use crate::error::ConfigError;
    pub use crate::types::{Coefficient, Order, Sample};
}
