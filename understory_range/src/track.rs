// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The range track: knob model plus pointer/keyboard state machine.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use log::{debug, trace};

use crate::scale::{clamp_value, pointer_ratio};
use crate::session::DragSession;
use crate::ticks::{self, Tick};
use crate::{BarFill, Knob, KnobId, NoopHost, RangeConfig, RangeError, RangeHost, RangeValue};

/// Slider state for one or two knobs on a horizontal track.
///
/// A track starts at `Single(min)`, or `Dual { lower: min, upper: max }` in
/// dual-knob mode. See the [crate docs](crate) for the interaction flow.
#[derive(Clone, Debug)]
pub struct RangeTrack<H = NoopHost> {
    config: RangeConfig,
    disabled: bool,
    knobs: [Knob; 2],
    value: RangeValue,
    session: Option<DragSession>,
    bar: BarFill,
    ticks: Vec<Tick>,
    host: H,
}

impl RangeTrack<NoopHost> {
    /// Creates a track that reports to nobody.
    #[must_use]
    pub fn new(config: RangeConfig) -> Self {
        Self::with_host(config, NoopHost)
    }
}

impl<H: RangeHost> RangeTrack<H> {
    /// Creates a track that reports changes, haptics, and focus to `host`.
    pub fn with_host(config: RangeConfig, host: H) -> Self {
        let value = if config.dual_knobs() {
            RangeValue::dual(config.min(), config.max())
        } else {
            RangeValue::Single(config.min())
        };
        let mut track = Self {
            config,
            disabled: false,
            knobs: [Knob::default(); 2],
            value,
            session: None,
            bar: BarFill::default(),
            ticks: Vec::new(),
            host,
        };
        track.rebuild_ticks();
        track.input_updated();
        track
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Sets the minimum. Non-finite inputs are ignored.
    pub fn set_min(&mut self, min: f64) {
        let result = self.config.try_set_min(min);
        self.reconfigured("min", result);
    }

    /// Sets the maximum. Non-finite inputs are ignored.
    pub fn set_max(&mut self, max: f64) {
        let result = self.config.try_set_max(max);
        self.reconfigured("max", result);
    }

    /// Sets the step. Non-finite or non-positive inputs are ignored.
    pub fn set_step(&mut self, step: f64) {
        let result = self.config.try_set_step(step);
        self.reconfigured("step", result);
    }

    /// Enables or disables snapping, rebuilding the ticks.
    pub fn set_snaps(&mut self, snaps: bool) {
        if self.config.snaps() == snaps {
            return;
        }
        self.config.set_snaps(snaps);
        self.rebuild_ticks();
        self.refresh();
    }

    /// Switches between one and two knobs.
    ///
    /// The logical value is reshaped with [`RangeValue::reshape`].
    pub fn set_dual_knobs(&mut self, dual_knobs: bool) {
        if self.config.dual_knobs() == dual_knobs {
            return;
        }
        self.config.set_dual_knobs(dual_knobs);
        self.value = self.value.reshape(dual_knobs, self.config.max());
        self.input_updated();
    }

    /// Enables or disables the value pin.
    pub fn set_pin(&mut self, pin: bool) {
        self.config.set_pin(pin);
    }

    /// Returns `true` if pointer and keyboard input are ignored.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables input. Disabling cancels an open session.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled && self.session.take().is_some() {
            debug!("range session cancelled by disable");
            for knob in &mut self.knobs {
                knob.pressed = false;
            }
        }
    }

    /// The logical value last emitted or set.
    #[must_use]
    pub fn value(&self) -> RangeValue {
        self.value
    }

    /// Sets the logical value from outside, without notifying the host.
    ///
    /// The value is clamped into `[min, max]` and reshaped to the current
    /// mode. Knob values and ratios are re-derived from it.
    pub fn set_value(&mut self, value: RangeValue) {
        self.value = value
            .reshape(self.config.dual_knobs(), self.config.max())
            .clamp(self.config.min(), self.config.max());
        self.input_updated();
    }

    /// State of one knob.
    #[must_use]
    pub fn knob(&self, id: KnobId) -> &Knob {
        &self.knobs[id.index()]
    }

    /// Ratio of the lower knob in dual mode, else of the only knob.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        let [a, b] = &self.knobs;
        if self.config.dual_knobs() {
            a.ratio.min(b.ratio)
        } else {
            a.ratio
        }
    }

    /// Ratio of the upper knob in dual mode.
    #[must_use]
    pub fn ratio_upper(&self) -> Option<f64> {
        let [a, b] = &self.knobs;
        self.config.dual_knobs().then(|| a.ratio.max(b.ratio))
    }

    /// The filled segment of the track.
    #[must_use]
    pub fn bar(&self) -> BarFill {
        self.bar
    }

    /// Tick marks; empty unless snapping is enabled.
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Returns `true` while a knob is held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.knobs.iter().any(|knob| knob.pressed)
    }

    /// The open drag session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The knob being dragged, if a session is open.
    #[must_use]
    pub fn active_knob(&self) -> Option<KnobId> {
        self.session.as_ref().map(DragSession::knob)
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the track, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Starts a drag session at `point`, with the track occupying `rect`.
    ///
    /// In dual mode the knob whose ratio is strictly closer to the pointer is
    /// chosen; ties go to knob `A`. The chosen knob jumps to the pointer right
    /// away, so a tap without movement still moves it.
    ///
    /// Returns `false` and changes nothing when disabled.
    pub fn pointer_down(&mut self, point: Point, rect: Rect) -> bool {
        if self.disabled {
            return false;
        }
        self.host.focus();

        let ratio = pointer_ratio(point, rect);
        let [a, b] = &self.knobs;
        let knob = if self.config.dual_knobs() && (ratio - a.ratio).abs() > (ratio - b.ratio).abs()
        {
            KnobId::B
        } else {
            KnobId::A
        };
        debug!("range session started on knob {knob:?} at ratio {ratio}");
        self.session = Some(DragSession::new(knob, rect, point));

        self.update_knob(knob, point, rect, true);
        self.host.selection_start();
        true
    }

    /// Moves the active knob to `point`.
    ///
    /// Uses the rectangle captured at pointer-down. Returns whether the value
    /// changed; a no-op returning `false` without an open session.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.update(point);
        let (knob, rect) = (session.knob(), session.rect());

        let changed = self.update_knob(knob, point, rect, true);
        if changed && self.config.snaps() {
            self.host.selection_changed();
        }
        changed
    }

    /// Ends the session with a final update at `point`, releasing the knob.
    ///
    /// Returns whether the value changed; a no-op returning `false` without an
    /// open session.
    pub fn pointer_up(&mut self, point: Point) -> bool {
        let Some(mut session) = self.session.take() else {
            return false;
        };
        session.update(point);
        let tap = !session.has_moved();

        let changed = self.update_knob(session.knob(), point, session.rect(), false);
        self.host.selection_end();
        self.host.blur();
        debug!("range session ended (tap: {tap}, changed: {changed})");
        changed
    }

    /// Moves the active knob (knob `A` outside a session) to `point`.
    ///
    /// This is the step shared by the pointer handlers:
    /// 1. The pointer ratio is mapped to a stepped value.
    /// 2. With snapping, the ratio is re-derived from that value.
    /// 3. The knob takes the new state; the other knob is released.
    /// 4. Bar fill and ticks refresh.
    /// 5. If the value differs from the knob's previous value, the reported
    ///    value is recomposed and sent to the host.
    ///
    /// Returns whether the value changed.
    pub fn update(&mut self, point: Point, rect: Rect, pressed: bool) -> bool {
        let knob = self.active_knob().unwrap_or_default();
        self.update_knob(knob, point, rect, pressed)
    }

    /// Moves `knob` one step up or down, as for arrow keys.
    ///
    /// Always reported as a change. Returns `false` only when disabled or when
    /// addressing knob `B` on a single-knob track.
    pub fn key_step(&mut self, increase: bool, knob: KnobId) -> bool {
        if self.disabled || (knob == KnobId::B && !self.config.dual_knobs()) {
            return false;
        }
        let (min, max, step) = (self.config.min(), self.config.max(), self.config.step());
        let slot = &mut self.knobs[knob.index()];
        let value = if increase {
            slot.value.saturating_add(step)
        } else {
            slot.value.saturating_sub(step)
        };
        slot.value = clamp_value(min, value, max);
        slot.ratio = self.config.value_to_ratio(slot.value);

        self.refresh();
        self.emit();
        true
    }

    fn update_knob(&mut self, knob: KnobId, point: Point, rect: Rect, pressed: bool) -> bool {
        let mut ratio = pointer_ratio(point, rect);
        let value = self.config.ratio_to_value(ratio);
        if self.config.snaps() {
            ratio = self.config.value_to_ratio(value);
        }

        self.knobs[knob.other().index()].pressed = false;
        let slot = &mut self.knobs[knob.index()];
        let unchanged = slot.value == value;
        *slot = Knob {
            value,
            ratio,
            pressed,
        };

        self.refresh();
        if unchanged {
            return false;
        }
        self.emit();
        true
    }

    fn emit(&mut self) {
        let [a, b] = &self.knobs;
        self.value = RangeValue::from_knobs(a, b, self.config.dual_knobs());
        trace!("range value changed to {:?}", self.value);
        self.host.value_changed(self.value);
    }

    fn reconfigured(&mut self, field: &str, result: Result<(), RangeError>) {
        match result {
            Ok(()) => {
                self.rebuild_ticks();
                self.input_updated();
            }
            Err(err) => debug!("ignoring range {field}: {err}"),
        }
    }

    /// Re-derives knob state from the logical value.
    fn input_updated(&mut self) {
        match self.value {
            RangeValue::Dual { lower, upper } => {
                self.knobs[0].value = lower;
                self.knobs[1].value = upper;
                self.knobs[0].ratio = self.config.value_to_ratio(lower);
                self.knobs[1].ratio = self.config.value_to_ratio(upper);
            }
            RangeValue::Single(value) => {
                self.knobs[0].value = value;
                self.knobs[0].ratio = self.config.value_to_ratio(value);
            }
        }
        self.refresh();
    }

    fn rebuild_ticks(&mut self) {
        self.ticks = if self.config.snaps() {
            ticks::generate(&self.config)
        } else {
            Vec::new()
        };
    }

    fn refresh(&mut self) {
        let [a, b] = &self.knobs;
        self.bar = BarFill::from_ratios(a.ratio, b.ratio, self.config.dual_knobs());
        if self.config.snaps() {
            let (lower, upper) = (self.ratio(), self.ratio_upper());
            ticks::activate(&mut self.ticks, lower, upper);
        }
    }
}
