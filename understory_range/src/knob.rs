// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Knob state and the values derived from it.
//!
//! The track stores two physical knobs, `A` and `B`. The logical `lower` and
//! `upper` roles are never stored per knob: [`RangeValue::from_knobs`] derives
//! them from the current knob values on every update, so a knob that is
//! dragged past its sibling simply swaps roles.

/// Identifies one of the two physical knobs on a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum KnobId {
    /// The first knob; the only knob in single mode.
    #[default]
    A,
    /// The second knob, present in dual-knob mode.
    B,
}

impl KnobId {
    /// Returns the sibling knob.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// State of a single knob.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Knob {
    /// Current integer value.
    pub value: i64,
    /// Position along the track in `[0, 1]`.
    pub ratio: f64,
    /// Whether the knob is being dragged.
    pub pressed: bool,
}

/// The externally visible value of a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeValue {
    /// Single-knob value.
    Single(i64),
    /// Dual-knob value, with `lower <= upper`.
    Dual {
        /// The smaller of the two knob values.
        lower: i64,
        /// The larger of the two knob values.
        upper: i64,
    },
}

impl RangeValue {
    /// Builds a dual value from two values in any order.
    #[must_use]
    pub fn dual(a: i64, b: i64) -> Self {
        Self::Dual {
            lower: a.min(b),
            upper: a.max(b),
        }
    }

    /// Composes the reported value from the two physical knobs.
    #[must_use]
    pub fn from_knobs(a: &Knob, b: &Knob, dual: bool) -> Self {
        if dual {
            Self::dual(a.value, b.value)
        } else {
            Self::Single(a.value)
        }
    }

    /// The single value, or `lower` for a dual value.
    #[must_use]
    pub fn lower(&self) -> i64 {
        match *self {
            Self::Single(v) => v,
            Self::Dual { lower, .. } => lower,
        }
    }

    /// The single value, or `upper` for a dual value.
    #[must_use]
    pub fn upper(&self) -> i64 {
        match *self {
            Self::Single(v) => v,
            Self::Dual { upper, .. } => upper,
        }
    }

    /// Returns `true` for [`RangeValue::Dual`].
    #[must_use]
    pub fn is_dual(&self) -> bool {
        matches!(self, Self::Dual { .. })
    }

    /// Converts to the shape used by a track in the given mode.
    ///
    /// A single value becomes `lower` of a dual value whose `upper` is `max`;
    /// a dual value keeps its `lower` when collapsed to a single knob.
    #[must_use]
    pub fn reshape(self, dual: bool, max: i64) -> Self {
        match (self, dual) {
            (Self::Single(v), true) => Self::dual(v, max),
            (Self::Dual { lower, .. }, false) => Self::Single(lower),
            (value, _) => value,
        }
    }

    pub(crate) fn clamp(self, min: i64, max: i64) -> Self {
        let clamp = |v: i64| crate::scale::clamp_value(min, v, max);
        match self {
            Self::Single(v) => Self::Single(clamp(v)),
            Self::Dual { lower, upper } => Self::dual(clamp(lower), clamp(upper)),
        }
    }
}

impl From<i64> for RangeValue {
    fn from(value: i64) -> Self {
        Self::Single(value)
    }
}

/// Insets of the filled segment of the track, in percent of the track width.
///
/// Hosts typically apply these as CSS-like `left`/`right` offsets of the
/// active bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarFill {
    /// Distance from the track start to the filled segment. `None` in single
    /// mode, where the fill starts at the track start.
    pub left: Option<f64>,
    /// Distance from the end of the filled segment to the track end.
    pub right: f64,
}

impl BarFill {
    /// Derives the fill from knob ratios.
    #[must_use]
    pub fn from_ratios(ratio_a: f64, ratio_b: f64, dual: bool) -> Self {
        if dual {
            Self {
                left: Some(ratio_a.min(ratio_b) * 100.0),
                right: 100.0 - ratio_a.max(ratio_b) * 100.0,
            }
        } else {
            Self {
                left: None,
                right: 100.0 - ratio_a * 100.0,
            }
        }
    }
}

impl Default for BarFill {
    fn default() -> Self {
        Self {
            left: None,
            right: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BarFill, Knob, KnobId, RangeValue};

    fn knob(value: i64) -> Knob {
        Knob {
            value,
            ..Knob::default()
        }
    }

    #[test]
    fn other_knob_flips() {
        assert_eq!(KnobId::A.other(), KnobId::B);
        assert_eq!(KnobId::B.other(), KnobId::A);
    }

    #[test]
    fn lower_upper_follow_values_not_knobs() {
        assert_eq!(
            RangeValue::from_knobs(&knob(70), &knob(30), true),
            RangeValue::Dual {
                lower: 30,
                upper: 70
            }
        );
        assert_eq!(
            RangeValue::from_knobs(&knob(30), &knob(70), true),
            RangeValue::dual(70, 30)
        );
        assert_eq!(
            RangeValue::from_knobs(&knob(30), &knob(70), false),
            RangeValue::Single(30)
        );
    }

    #[test]
    fn reshape_between_modes() {
        assert_eq!(RangeValue::Single(40).reshape(true, 100), RangeValue::dual(40, 100));
        assert_eq!(RangeValue::dual(10, 20).reshape(false, 100), RangeValue::Single(10));
        assert_eq!(RangeValue::Single(40).reshape(false, 100), RangeValue::Single(40));
    }

    #[test]
    fn clamp_keeps_order() {
        assert_eq!(RangeValue::dual(-5, 500).clamp(0, 100), RangeValue::dual(0, 100));
        assert_eq!(RangeValue::Single(500).clamp(0, 100), RangeValue::Single(100));
    }

    #[test]
    fn bar_fill_single_and_dual() {
        let single = BarFill::from_ratios(0.25, 0.9, false);
        assert_eq!(single.left, None);
        assert_eq!(single.right, 75.0);

        let dual = BarFill::from_ratios(0.75, 0.25, true);
        assert_eq!(dual.left, Some(25.0));
        assert_eq!(dual.right, 25.0);
    }
}
