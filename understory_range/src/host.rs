// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities consumed by a [`RangeTrack`](crate::RangeTrack).
//!
//! The track calls into its host at well-defined points of an interaction:
//!
//! | Event            | Calls                                              |
//! |------------------|----------------------------------------------------|
//! | pointer-down     | `focus`, then `value_changed` if moved, then `selection_start` |
//! | pointer-move     | `value_changed` and, when snapping, `selection_changed` |
//! | pointer-up       | `value_changed` if moved, then `selection_end`, then `blur` |
//! | keyboard step    | `value_changed`                                    |
//!
//! Every method has an empty default body, so a host implements only what it
//! needs. Haptics in particular are optional.

use crate::RangeValue;

/// Callbacks from the track to its host.
pub trait RangeHost {
    /// The reported value changed.
    fn value_changed(&mut self, value: RangeValue) {
        let _ = value;
    }

    /// A drag session started.
    fn selection_start(&mut self) {}

    /// The value snapped to a new step during a drag.
    fn selection_changed(&mut self) {}

    /// A drag session ended.
    fn selection_end(&mut self) {}

    /// The track gained focus at session start.
    fn focus(&mut self) {}

    /// The track lost focus at session end.
    fn blur(&mut self) {}
}

/// A host that ignores every callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopHost;

impl RangeHost for NoopHost {}

impl<H: RangeHost + ?Sized> RangeHost for &mut H {
    fn value_changed(&mut self, value: RangeValue) {
        (**self).value_changed(value);
    }

    fn selection_start(&mut self) {
        (**self).selection_start();
    }

    fn selection_changed(&mut self) {
        (**self).selection_changed();
    }

    fn selection_end(&mut self) {
        (**self).selection_end();
    }

    fn focus(&mut self) {
        (**self).focus();
    }

    fn blur(&mut self) {
        (**self).blur();
    }
}
