// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between pointer positions, ratios, and stepped values.
//!
//! A *ratio* is a knob position normalized to `[0, 1]` along the track. The
//! conversions here reproduce the classic web range control exactly, including
//! its rounding mode (half toward positive infinity) and the way
//! [`RangeConfig::value_to_ratio`] steps the offset from `min` before dividing
//! by the span.

use kurbo::{Point, Rect};

use crate::RangeConfig;

impl RangeConfig {
    /// Maps a ratio to the nearest step-aligned value in `[min, max]`.
    ///
    /// ```
    /// use understory_range::RangeConfig;
    ///
    /// let config = RangeConfig::new(21, 72, 3).unwrap();
    /// assert_eq!(config.ratio_to_value(0.0), 21);
    /// assert_eq!(config.ratio_to_value(0.47), 45);
    /// assert_eq!(config.ratio_to_value(1.0), 72);
    /// ```
    #[must_use]
    pub fn ratio_to_value(&self, ratio: f64) -> i64 {
        let ratio = clamp_ratio(ratio);
        let span = self.max().saturating_sub(self.min()) as f64;
        let step = self.step() as f64;
        let raw = round_half_up(span * ratio);
        let stepped = round_half_up(raw / step) * step + self.min() as f64;
        #[expect(clippy::cast_possible_truncation, reason = "saturating, clamped below")]
        let stepped = stepped as i64;
        clamp_value(self.min(), stepped, self.max())
    }

    /// Maps a value to its step-aligned ratio in `[0, 1]`.
    ///
    /// A degenerate range (`max <= min`) maps everything to `0.0`.
    #[must_use]
    pub fn value_to_ratio(&self, value: i64) -> f64 {
        let span = self.max().saturating_sub(self.min());
        if span <= 0 {
            return 0.0;
        }
        let step = self.step() as f64;
        let offset = value.saturating_sub(self.min()) as f64;
        let stepped = round_half_up(offset / step) * step;
        clamp_ratio(stepped / span as f64)
    }
}

/// Returns where `point` falls along `rect` horizontally, clamped to `[0, 1]`.
///
/// Only `rect.x0` (left) and `rect.width()` are consulted. Empty or
/// non-finite geometry yields `0.0`.
#[must_use]
pub fn pointer_ratio(point: Point, rect: Rect) -> f64 {
    let width = rect.width();
    if !width.is_finite() || width <= 0.0 {
        return 0.0;
    }
    clamp_ratio((point.x - rect.x0) / width)
}

/// Rounds to the nearest integer, with halves going toward positive infinity.
///
/// Compares against the floor instead of computing `floor(v + 0.5)`, whose
/// addition can itself round (`0.49999999999999994` and odd integers past
/// `2^52`).
pub(crate) fn round_half_up(v: f64) -> f64 {
    let r = libm::floor(v);
    if v - r >= 0.5 { r + 1.0 } else { r }
}

/// Clamps into `[0, 1]`; `NaN` maps to `0.0`.
pub(crate) fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.min(1.0).max(0.0)
}

/// `max(lo, min(v, hi))`; favors `lo` when the bounds are inverted.
pub(crate) fn clamp_value(lo: i64, v: i64, hi: i64) -> i64 {
    v.min(hi).max(lo)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{clamp_value, pointer_ratio, round_half_up};
    use crate::RangeConfig;

    #[test]
    fn rounding_sends_halves_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.49), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(
            round_half_up(4_503_599_627_370_497.0),
            4_503_599_627_370_497.0
        );
        assert_eq!(
            RangeConfig::new(0, 1, 1)
                .unwrap()
                .ratio_to_value(0.49999999999999994),
            0
        );
    }

    #[test]
    fn midpoint_of_default_range() {
        let config = RangeConfig::default();
        assert_eq!(config.ratio_to_value(0.5), 50);
        assert_eq!(config.value_to_ratio(50), 0.5);
    }

    #[test]
    fn values_land_on_step_offsets() {
        let config = RangeConfig::new(1000, 2000, 100).unwrap();
        assert_eq!(config.ratio_to_value(0.0), 1000);
        assert_eq!(config.ratio_to_value(0.26), 1300);
        assert_eq!(config.ratio_to_value(0.34), 1300);
        assert_eq!(config.ratio_to_value(0.36), 1400);
        assert_eq!(config.ratio_to_value(1.0), 2000);
    }

    #[test]
    fn ratio_is_stepped_from_offset() {
        let config = RangeConfig::new(21, 72, 3).unwrap();
        assert_eq!(config.value_to_ratio(21), 0.0);
        assert_eq!(config.value_to_ratio(45), 24.0 / 51.0);
        // 46 is not step aligned; its offset 25 rounds to 24.
        assert_eq!(config.value_to_ratio(46), 24.0 / 51.0);
        assert_eq!(config.value_to_ratio(72), 1.0);
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        let config = RangeConfig::default();
        assert_eq!(config.ratio_to_value(-3.0), 0);
        assert_eq!(config.ratio_to_value(7.0), 100);
        assert_eq!(config.ratio_to_value(f64::NAN), 0);
        assert_eq!(config.value_to_ratio(-40), 0.0);
        assert_eq!(config.value_to_ratio(400), 1.0);
    }

    #[test]
    fn degenerate_range_maps_to_start() {
        let config = RangeConfig::new(5, 5, 1).unwrap();
        assert_eq!(config.value_to_ratio(5), 0.0);
        assert_eq!(config.ratio_to_value(0.7), 5);

        let inverted = RangeConfig::default().with_min(50.0).with_max(10.0);
        assert_eq!(inverted.value_to_ratio(30), 0.0);
        assert_eq!(inverted.ratio_to_value(0.5), 50);
    }

    #[test]
    fn pointer_ratio_uses_left_and_width() {
        let rect = Rect::new(10.0, 0.0, 210.0, 20.0);
        assert_eq!(pointer_ratio(Point::new(110.0, 5.0), rect), 0.5);
        assert_eq!(pointer_ratio(Point::new(0.0, 5.0), rect), 0.0);
        assert_eq!(pointer_ratio(Point::new(400.0, 500.0), rect), 1.0);
        assert_eq!(
            pointer_ratio(Point::new(10.0, 0.0), Rect::new(10.0, 0.0, 10.0, 0.0)),
            0.0
        );
    }

    #[test]
    fn clamp_value_never_panics_on_inverted_bounds() {
        assert_eq!(clamp_value(0, 5, 10), 5);
        assert_eq!(clamp_value(0, -5, 10), 0);
        assert_eq!(clamp_value(10, 5, 0), 10);
    }
}
