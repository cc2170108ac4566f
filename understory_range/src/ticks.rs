// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generation and activation for snapping tracks.
//!
//! One tick is produced per step from `min` to `max` inclusive, so a range of
//! `21..=72` with step `3` has `floor(51 / 3) + 1 = 18` ticks:
//!
//! ```
//! use understory_range::{RangeConfig, ticks};
//!
//! let config = RangeConfig::new(21, 72, 3).unwrap();
//! let ticks = ticks::generate(&config);
//! assert_eq!(ticks.len(), 18);
//! assert_eq!(ticks[0].position, 0.0);
//! ```
//!
//! Grids finer than [`MAX_TICKS`] are not drawn at all.

use alloc::vec::Vec;

use log::debug;

use crate::RangeConfig;

/// A tick mark at a step position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Position along the track in `[0, 1]`.
    pub ratio: f64,
    /// Position along the track in percent.
    pub position: f64,
    /// Whether the tick lies within the filled segment.
    pub active: bool,
}

/// The most ticks [`generate`] will produce for one track.
pub const MAX_TICKS: usize = 10_000;

/// Number of step positions in `[min, max]`, or `0` when `min > max`.
#[must_use]
pub fn count(config: &RangeConfig) -> u64 {
    let (min, max, step) = (config.min(), config.max(), config.step());
    if min > max || step <= 0 {
        return 0;
    }
    (max.abs_diff(min) / step.unsigned_abs()).saturating_add(1)
}

/// Builds the ticks for `config`, all inactive.
///
/// Returns an empty list when `min > max`, or when there would be more than
/// [`MAX_TICKS`] of them.
#[must_use]
pub fn generate(config: &RangeConfig) -> Vec<Tick> {
    let count = count(config);
    let Some(len) = usize::try_from(count).ok().filter(|&len| len <= MAX_TICKS) else {
        debug!("skipping {count} ticks, more than {MAX_TICKS}");
        return Vec::new();
    };

    let mut ticks = Vec::with_capacity(len);
    let mut value = config.min();
    for _ in 0..len {
        let ratio = config.value_to_ratio(value);
        ticks.push(Tick {
            ratio,
            position: ratio * 100.0,
            active: false,
        });
        value = value.saturating_add(config.step());
    }
    ticks
}

/// Recomputes `active` flags.
///
/// With an `upper` ratio (dual mode) a tick is active when it lies within
/// `[lower, upper]`; otherwise when it lies at or before `lower`.
pub fn activate(ticks: &mut [Tick], lower: f64, upper: Option<f64>) {
    match upper {
        Some(upper) => {
            for tick in ticks {
                tick.active = tick.ratio >= lower && tick.ratio <= upper;
            }
        }
        None => {
            for tick in ticks {
                tick.active = tick.ratio <= lower;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{MAX_TICKS, activate, count, generate};
    use crate::RangeConfig;

    #[test]
    fn count_is_floor_of_span_over_step_plus_one() {
        let config = RangeConfig::new(0, 100, 1).unwrap();
        assert_eq!(generate(&config).len(), 101);
        let config = RangeConfig::new(0, 10, 3).unwrap();
        assert_eq!(generate(&config).len(), 4);
        let config = RangeConfig::new(1000, 2000, 100).unwrap();
        assert_eq!(generate(&config).len(), 11);
        let config = RangeConfig::new(7, 7, 5).unwrap();
        assert_eq!(generate(&config).len(), 1);
    }

    #[test]
    fn inverted_bounds_have_no_ticks() {
        let config = RangeConfig::default().with_min(10.0).with_max(0.0);
        assert!(generate(&config).is_empty());
    }

    #[test]
    fn positions_are_percentages() {
        let config = RangeConfig::new(0, 100, 25).unwrap();
        let positions: Vec<f64> = generate(&config).iter().map(|t| t.position).collect();
        assert_eq!(positions, [0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn generation_stops_at_integer_limit() {
        let config = RangeConfig::new(i64::MAX - 2, i64::MAX, 2).unwrap();
        assert_eq!(generate(&config).len(), 2);
    }

    #[test]
    fn grids_past_the_limit_are_skipped() {
        let config = RangeConfig::default().with_min(-1e15);
        assert_eq!(count(&config), 1_000_000_000_000_101);
        assert!(generate(&config).is_empty());

        let config = RangeConfig::new(i64::MIN, i64::MAX, 1).unwrap();
        assert_eq!(count(&config), u64::MAX);
        assert!(generate(&config).is_empty());
    }

    #[test]
    fn grid_at_the_limit_is_kept() {
        let last = i64::try_from(MAX_TICKS).unwrap() - 1;
        let config = RangeConfig::new(0, last, 1).unwrap();
        assert_eq!(generate(&config).len(), MAX_TICKS);

        let config = RangeConfig::new(0, last + 1, 1).unwrap();
        assert!(generate(&config).is_empty());
    }

    #[test]
    fn single_activation_fills_from_start() {
        let config = RangeConfig::new(0, 100, 25).unwrap();
        let mut ticks = generate(&config);
        activate(&mut ticks, 0.5, None);
        let active: Vec<bool> = ticks.iter().map(|t| t.active).collect();
        assert_eq!(active, [true, true, true, false, false]);
    }

    #[test]
    fn dual_activation_is_inclusive() {
        let config = RangeConfig::new(0, 100, 25).unwrap();
        let mut ticks = generate(&config);
        activate(&mut ticks, 0.25, Some(0.75));
        let active: Vec<bool> = ticks.iter().map(|t| t.active).collect();
        assert_eq!(active, [false, true, true, true, false]);
    }
}
