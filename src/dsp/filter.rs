//! Validated IIR Filters
//!
//! [`FilterConfig`] is the immutable, shareable description of a cascade;
//! [`ChannelState`] is the mutable history of one channel. Both carry the same
//! stage capacity `N`, so a state can never be too small for a config it is
//! paired with. All checks happen at construction; processing cannot fail.

use heapless::Vec;

use super::biquad::cascade;
use super::coefficients::CoefficientSet;
use super::history::DelayLine;
use crate::config::MAX_STAGES;
use crate::error::ConfigError;
use crate::types::{Order, Sample};

/// Validated stage list, shared read-only across channels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterConfig<const N: usize = MAX_STAGES> {
    stages: Vec<CoefficientSet, N>,
    order: Order,
}

impl<const N: usize> FilterConfig<N> {
    /// Use every set in `stages`; the order is twice their count
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidOrder`] if `stages` is empty,
    /// [`ConfigError::TooManyStages`] if it holds more than `N` sets.
    pub fn new(stages: &[CoefficientSet]) -> Result<Self, ConfigError> {
        if stages.len() > N {
            warn!("{} stages exceed capacity {}", stages.len(), N);
            return Err(ConfigError::TooManyStages {
                requested: stages.len(),
                capacity: N,
            });
        }
        let order = Order::from_stages(stages.len()).inspect_err(|_| {
            warn!("rejected empty coefficient table");
        })?;
        Self::build(stages, order)
    }

    /// Use the first `order / 2` sets of a larger table
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidOrder`] for zero or odd orders,
    /// [`ConfigError::MissingCoefficients`] if the table is too short,
    /// [`ConfigError::TooManyStages`] if `order / 2` exceeds `N`.
    pub fn with_order(table: &[CoefficientSet], order: u16) -> Result<Self, ConfigError> {
        let order = Order::new(order).inspect_err(|_| {
            warn!("rejected filter order {}", order);
        })?;
        let stages = order.stages();
        let Some(selected) = table.get(..stages) else {
            warn!("{} stages need coefficients, table has {}", stages, table.len());
            return Err(ConfigError::MissingCoefficients {
                required: stages,
                available: table.len(),
            });
        };
        Self::build(selected, order)
    }

    fn build(stages: &[CoefficientSet], order: Order) -> Result<Self, ConfigError> {
        let too_many = ConfigError::TooManyStages {
            requested: stages.len(),
            capacity: N,
        };
        let stages = Vec::from_slice(stages).map_err(|()| {
            warn!("{} stages exceed capacity {}", stages.len(), N);
            too_many
        })?;
        debug!("configured {} with {} stages", order, stages.len());
        Ok(Self { stages, order })
    }

    /// Filter order
    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Number of biquad stages in use
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Coefficient sets, first stage first
    #[must_use]
    pub fn stages(&self) -> &[CoefficientSet] {
        &self.stages
    }

    /// Filter one sample of one channel
    pub fn process(&self, state: &mut ChannelState<N>, input: Sample) -> Sample {
        let active = &mut state.stages[..self.stages.len()];
        cascade(&self.stages, active, input)
    }
}

/// Delay lines of one channel, one per stage
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelState<const N: usize = MAX_STAGES> {
    stages: [DelayLine; N],
}

impl<const N: usize> ChannelState<N> {
    /// Create a silent channel
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stages: [DelayLine::ZERO; N],
        }
    }

    /// Delay line of stage `index`
    #[must_use]
    pub fn stage(&self, index: usize) -> Option<&DelayLine> {
        self.stages.get(index)
    }

    /// All delay lines, including unused capacity
    #[must_use]
    pub fn stages(&self) -> &[DelayLine] {
        &self.stages
    }

    /// Clear every stage to silence
    pub fn reset(&mut self) {
        self.stages.iter_mut().for_each(DelayLine::reset);
    }
}

impl<const N: usize> Default for ChannelState<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// A config paired with the state of a single channel
#[derive(Clone, Debug)]
pub struct IirFilter<'a, const N: usize = MAX_STAGES> {
    config: &'a FilterConfig<N>,
    state: ChannelState<N>,
}

impl<'a, const N: usize> IirFilter<'a, N> {
    /// Create a filter with silent history
    #[must_use]
    pub const fn new(config: &'a FilterConfig<N>) -> Self {
        Self {
            config,
            state: ChannelState::new(),
        }
    }

    /// Process a single sample
    pub fn process(&mut self, input: Sample) -> Sample {
        self.config.process(&mut self.state, input)
    }

    /// Process a block of samples in-place
    pub fn process_block(&mut self, samples: &mut [Sample]) {
        for sample in samples.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Process `input` into `output`
    ///
    /// # Errors
    ///
    /// [`ConfigError::BufferLengthMismatch`] if the blocks differ in length;
    /// no sample is processed in that case.
    pub fn process_into(
        &mut self,
        input: &[Sample],
        output: &mut [Sample],
    ) -> Result<(), ConfigError> {
        if input.len() != output.len() {
            return Err(ConfigError::BufferLengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        for (x, y) in input.iter().zip(output.iter_mut()) {
            *y = self.process(*x);
        }
        Ok(())
    }

    /// Channel history
    #[must_use]
    pub fn state(&self) -> &ChannelState<N> {
        &self.state
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

/// Left and right channels filtered by one shared config
#[derive(Clone, Debug)]
pub struct StereoIir<'a, const N: usize = MAX_STAGES> {
    config: &'a FilterConfig<N>,
    left: ChannelState<N>,
    right: ChannelState<N>,
}

impl<'a, const N: usize> StereoIir<'a, N> {
    /// Create a stereo filter with silent history on both channels
    #[must_use]
    pub const fn new(config: &'a FilterConfig<N>) -> Self {
        Self {
            config,
            left: ChannelState::new(),
            right: ChannelState::new(),
        }
    }

    /// Process one left/right sample pair
    pub fn process(&mut self, left: Sample, right: Sample) -> (Sample, Sample) {
        (
            self.config.process(&mut self.left, left),
            self.config.process(&mut self.right, right),
        )
    }

    /// Process one block per channel in-place
    ///
    /// # Errors
    ///
    /// [`ConfigError::BufferLengthMismatch`] if the channel blocks differ in
    /// length; no sample is processed in that case.
    pub fn process_block(
        &mut self,
        left: &mut [Sample],
        right: &mut [Sample],
    ) -> Result<(), ConfigError> {
        if left.len() != right.len() {
            return Err(ConfigError::BufferLengthMismatch {
                input: left.len(),
                output: right.len(),
            });
        }
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            (*l, *r) = self.process(*l, *r);
        }
        Ok(())
    }

    /// Left channel history
    #[must_use]
    pub fn left(&self) -> &ChannelState<N> {
        &self.left
    }

    /// Right channel history
    #[must_use]
    pub fn right(&self) -> &ChannelState<N> {
        &self.right
    }

    /// Reset both channels
    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
    }
}
