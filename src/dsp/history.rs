//! Per-stage delay lines
//!
//! Each biquad stage remembers its two previous inputs and two previous
//! outputs. A delay line belongs to exactly one stage of one channel.

use crate::config::HISTORY_DEPTH;
use crate::types::Sample;

/// Input and output history of one biquad stage
///
/// `x[0]` is x(n-1), `x[1]` is x(n-2); likewise for `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DelayLine {
    x: [Sample; HISTORY_DEPTH],
    y: [Sample; HISTORY_DEPTH],
}

impl DelayLine {
    /// Silent history
    pub const ZERO: Self = Self {
        x: [0; HISTORY_DEPTH],
        y: [0; HISTORY_DEPTH],
    };

    /// Create a silent delay line
    #[must_use]
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Create a delay line preloaded with past samples
    #[must_use]
    pub const fn with_history(x: [Sample; HISTORY_DEPTH], y: [Sample; HISTORY_DEPTH]) -> Self {
        Self { x, y }
    }

    /// Previous inputs, newest first
    #[must_use]
    pub const fn x(&self) -> [Sample; HISTORY_DEPTH] {
        self.x
    }

    /// Previous outputs, newest first
    #[must_use]
    pub const fn y(&self) -> [Sample; HISTORY_DEPTH] {
        self.y
    }

    /// Shift in the sample just consumed and the sample just produced
    #[inline]
    pub fn push(&mut self, input: Sample, output: Sample) {
        self.x[1] = self.x[0];
        self.x[0] = input;
        self.y[1] = self.y[0];
        self.y[0] = output;
    }

    /// Clear to silence
    pub fn reset(&mut self) {
        *self = Self::ZERO;
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for DelayLine {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "x={} y={}", self.x, self.y);
    }
}
