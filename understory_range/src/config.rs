// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range configuration: bounds, step granularity, and mode flags.

use core::fmt;

use crate::scale::round_half_up;

/// Error returned when a configuration update is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RangeError {
    /// The input did not round to a finite number.
    NonFinite(f64),
    /// The step rounded to zero or a negative number.
    NonPositiveStep(i64),
    /// `min` is greater than `max`.
    InvertedBounds {
        /// The requested minimum.
        min: i64,
        /// The requested maximum.
        max: i64,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite(v) => write!(f, "{v} is not a finite number"),
            Self::NonPositiveStep(step) => write!(f, "step must be positive, got {step}"),
            Self::InvertedBounds { min, max } => {
                write!(f, "min {min} is greater than max {max}")
            }
        }
    }
}

impl core::error::Error for RangeError {}

/// Configuration of a range track.
///
/// Bounds and step are integers. Inputs arrive as `f64` (as they would from a
/// text field or attribute) and are rounded half toward positive infinity.
///
/// The `with_*` builders silently keep the previous value when an input is
/// rejected; the `try_set_*` methods report the rejection instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeConfig {
    min: i64,
    max: i64,
    step: i64,
    snaps: bool,
    dual_knobs: bool,
    pin: bool,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            step: 1,
            snaps: false,
            dual_knobs: false,
            pin: false,
        }
    }
}

impl RangeConfig {
    /// Creates a validated configuration with the given bounds and step.
    ///
    /// Unlike the individual setters, this also requires `min <= max`.
    pub fn new(min: i64, max: i64, step: i64) -> Result<Self, RangeError> {
        if step <= 0 {
            return Err(RangeError::NonPositiveStep(step));
        }
        if min > max {
            return Err(RangeError::InvertedBounds { min, max });
        }
        Ok(Self {
            min,
            max,
            step,
            ..Self::default()
        })
    }

    /// Minimum value.
    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Maximum value.
    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Value granularity.
    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Whether knobs snap to step positions and ticks are generated.
    #[must_use]
    pub fn snaps(&self) -> bool {
        self.snaps
    }

    /// Whether the track has two knobs.
    #[must_use]
    pub fn dual_knobs(&self) -> bool {
        self.dual_knobs
    }

    /// Whether the host should show a value pin above a pressed knob.
    #[must_use]
    pub fn pin(&self) -> bool {
        self.pin
    }

    /// Sets the minimum from a possibly fractional input.
    pub fn try_set_min(&mut self, min: f64) -> Result<(), RangeError> {
        self.min = round_input(min)?;
        Ok(())
    }

    /// Sets the maximum from a possibly fractional input.
    pub fn try_set_max(&mut self, max: f64) -> Result<(), RangeError> {
        self.max = round_input(max)?;
        Ok(())
    }

    /// Sets the step from a possibly fractional input.
    pub fn try_set_step(&mut self, step: f64) -> Result<(), RangeError> {
        let step = round_input(step)?;
        if step <= 0 {
            return Err(RangeError::NonPositiveStep(step));
        }
        self.step = step;
        Ok(())
    }

    /// Enables or disables snapping.
    pub fn set_snaps(&mut self, snaps: bool) {
        self.snaps = snaps;
    }

    /// Switches between one and two knobs.
    pub fn set_dual_knobs(&mut self, dual_knobs: bool) {
        self.dual_knobs = dual_knobs;
    }

    /// Enables or disables the value pin.
    pub fn set_pin(&mut self, pin: bool) {
        self.pin = pin;
    }

    /// Returns a copy with the given minimum, or unchanged if rejected.
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        let _ = self.try_set_min(min);
        self
    }

    /// Returns a copy with the given maximum, or unchanged if rejected.
    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        let _ = self.try_set_max(max);
        self
    }

    /// Returns a copy with the given step, or unchanged if rejected.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        let _ = self.try_set_step(step);
        self
    }

    /// Returns a copy with snapping set.
    #[must_use]
    pub fn with_snaps(mut self, snaps: bool) -> Self {
        self.snaps = snaps;
        self
    }

    /// Returns a copy with dual-knob mode set.
    #[must_use]
    pub fn with_dual_knobs(mut self, dual_knobs: bool) -> Self {
        self.dual_knobs = dual_knobs;
        self
    }

    /// Returns a copy with the value pin set.
    #[must_use]
    pub fn with_pin(mut self, pin: bool) -> Self {
        self.pin = pin;
        self
    }
}

fn round_input(v: f64) -> Result<i64, RangeError> {
    let rounded = round_half_up(v);
    if !rounded.is_finite() {
        return Err(RangeError::NonFinite(v));
    }
    #[expect(clippy::cast_possible_truncation, reason = "saturating, checked finite")]
    let rounded = rounded as i64;
    Ok(rounded)
}
