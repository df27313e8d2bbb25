//! Timed resource conversion between two bounded areas.

use crate::area::Area;
use crate::error::DepotError;

/// Batch sizes and timing for a [`Converter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConverterConfig {
    /// Resources taken from the input per conversion.
    pub demanded: u32,
    /// Resources deposited into the output per conversion.
    pub supplied: u32,
    /// Seconds one conversion takes.
    pub conversion_time: f32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            demanded: 5,
            supplied: 3,
            conversion_time: 3.0,
        }
    }
}

/// Converts input resources into output resources over time.
///
/// A converter is inactive until [`set_active`](Converter::set_active)
/// and driven by [`update`](Converter::update) with elapsed seconds.
/// While active it repeatedly takes a demanded batch from the input
/// area, waits out the conversion interval, and deposits a supplied
/// batch into the output. It deactivates itself when the input runs
/// short or the output has no room for another batch. Deactivating
/// mid-conversion refunds the in-flight batch to the input; nothing is
/// lost on shutdown.
#[derive(Clone, Debug)]
pub struct Converter {
    input: Area,
    output: Area,
    config: ConverterConfig,
    elapsed: f32,
    converting: bool,
    active: bool,
}

impl Converter {
    /// Create an inactive converter with the default batch sizes.
    pub fn new(input_capacity: u32, output_capacity: u32) -> Result<Self, DepotError> {
        Self::with_config(input_capacity, output_capacity, ConverterConfig::default())
    }

    /// Create an inactive converter with explicit batch sizes.
    ///
    /// Rejects a zero demanded or supplied batch.
    pub fn with_config(
        input_capacity: u32,
        output_capacity: u32,
        config: ConverterConfig,
    ) -> Result<Self, DepotError> {
        if config.demanded == 0 {
            return Err(DepotError::ZeroBatch { which: "demanded" });
        }
        if config.supplied == 0 {
            return Err(DepotError::ZeroBatch { which: "supplied" });
        }
        Ok(Self {
            input: Area::new(input_capacity)?,
            output: Area::new(output_capacity)?,
            config,
            elapsed: 0.0,
            converting: false,
            active: false,
        })
    }

    /// Whether the converter is currently running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Resources waiting in the input area.
    pub fn input_count(&self) -> u32 {
        self.input.count()
    }

    /// Resources accumulated in the output area.
    pub fn output_count(&self) -> u32 {
        self.output.count()
    }

    /// Whether the input holds a full demanded batch.
    pub fn can_take(&self) -> bool {
        self.input.can_remove(self.config.demanded)
    }

    /// Whether the input area has room for more resources.
    pub fn has_free_space(&self) -> bool {
        self.input.count() < self.input.capacity()
    }

    /// Deposit raw resources into the input area.
    ///
    /// Returns the overflow that burned.
    pub fn put(&mut self, count: u32) -> u32 {
        self.input.add(count)
    }

    /// Start or stop the converter.
    ///
    /// Stopping mid-conversion refunds the in-flight demanded batch to
    /// the input area.
    pub fn set_active(&mut self, state: bool) {
        if !state {
            self.turn_off();
        }
        self.active = state;
    }

    /// Advance the state machine by `dt` seconds.
    ///
    /// No-op while inactive. Otherwise: an idle converter takes a
    /// demanded batch (deactivating instead when the input runs short);
    /// a running conversion accumulates time and, once the interval
    /// elapses, deposits the supplied batch — then deactivates if the
    /// output cannot fit another one.
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        if self.converting {
            self.elapsed += dt;
        } else if self.can_take() && self.input.remove(self.config.demanded).is_ok() {
            self.converting = true;
        } else {
            self.active = false;
        }

        if self.elapsed >= self.config.conversion_time {
            self.converting = false;
            self.elapsed = 0.0;
            self.output.add(self.config.supplied);
            if !self.output.can_add(self.config.supplied) {
                self.active = false;
            }
        }
    }

    fn turn_off(&mut self) {
        if self.converting {
            self.elapsed = 0.0;
            self.converting = false;
            self.input.add(self.config.demanded);
        }
    }
}
