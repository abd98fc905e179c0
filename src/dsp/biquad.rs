//! Cascaded Biquad Sections
//!
//! One routine computes a biquad stage and one routine chains stages. The
//! single-stage, two-stage and N-stage entry points are thin shapes over the
//! same cascade, so they agree bit for bit whenever their stage counts match.
//!
//! Each stage truncates once. The truncated output feeds both the stage's own
//! `y(n-1)` slot and the next stage's input.

use super::coefficients::CoefficientSet;
use super::history::DelayLine;
use super::mac::{mac_add, mac_sub, rescale};
use crate::error::ConfigError;
use crate::types::{Order, Sample};

/// Run one biquad stage and advance its delay line
#[inline]
pub fn stage(coeffs: &CoefficientSet, history: &mut DelayLine, input: Sample) -> Sample {
    let [x1, x2] = history.x();
    let [y1, y2] = history.y();

    let mut acc = 0;
    acc = mac_add(acc, coeffs.a0(), input);
    acc = mac_add(acc, coeffs.a1_half(), x1);
    acc = mac_add(acc, coeffs.a1_half(), x1);
    acc = mac_add(acc, coeffs.a2(), x2);
    acc = mac_sub(acc, coeffs.b1_half(), y1);
    acc = mac_sub(acc, coeffs.b1_half(), y1);
    acc = mac_sub(acc, coeffs.b2(), y2);

    let output = rescale(acc);
    history.push(input, output);
    output
}

/// Chain stages: stage k consumes the output of stage k-1
///
/// Stages beyond the shorter of the two slices are not run; callers that
/// accept untrusted lengths go through [`nth_order`] or
/// [`super::filter::FilterConfig`].
#[inline]
pub fn cascade(coeffs: &[CoefficientSet], history: &mut [DelayLine], input: Sample) -> Sample {
    coeffs
        .iter()
        .zip(history.iter_mut())
        .fold(input, |sample, (c, h)| stage(c, h, sample))
}

/// Second-order filter: one stage
///
/// A single stage cannot pass a signal through unchanged because `a0` stops
/// one step short of +1.0. Cascade two [`CoefficientSet::INVERT`] stages for
/// exact unity gain.
pub fn second_order(input: Sample, coeffs: &CoefficientSet, history: &mut DelayLine) -> Sample {
    cascade(core::slice::from_ref(coeffs), core::slice::from_mut(history), input)
}

/// Fourth-order filter: two fixed stages
pub fn fourth_order(
    input: Sample,
    coeffs: &[CoefficientSet; 2],
    history: &mut [DelayLine; 2],
) -> Sample {
    cascade(coeffs, history, input)
}

/// Filter of arbitrary even order: `order / 2` stages
///
/// Only the first `order / 2` entries of each slice are used.
///
/// # Errors
///
/// Returns [`ConfigError::MissingCoefficients`] or
/// [`ConfigError::HistoryTooShort`] if either slice holds fewer than
/// `order / 2` entries. No history is touched on error.
pub fn nth_order(
    input: Sample,
    coeffs: &[CoefficientSet],
    history: &mut [DelayLine],
    order: Order,
) -> Result<Sample, ConfigError> {
    let stages = order.stages();
    let coeffs = coeffs.get(..stages).ok_or(ConfigError::MissingCoefficients {
        required: stages,
        available: coeffs.len(),
    })?;
    let available = history.len();
    let history = history
        .get_mut(..stages)
        .ok_or(ConfigError::HistoryTooShort {
            required: stages,
            available,
        })?;
    Ok(cascade(coeffs, history, input))
}
