// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_range --heading-base-level=0

//! Understory Range: a headless slider interaction core.
//!
//! This crate models the state behind a slider ("range") control with one or
//! two knobs: integer bounds and step, value/ratio mapping with snapping, tick
//! marks, the filled bar segment, and the pointer/keyboard state machine that
//! moves the knobs. It does **not** render anything or route events. Callers
//! are expected to:
//! - Hit test and capture the pointer themselves, then forward pointer
//!   positions and the track's bounding rectangle to a [`RangeTrack`].
//! - Suppress scrolling while a session is open.
//! - Draw knobs, the bar, and ticks from the track's read accessors.
//! - Implement [`RangeHost`] to receive value changes, haptic cues, and
//!   focus/blur; or use [`NoopHost`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_range::{RangeConfig, RangeTrack, RangeValue};
//!
//! let mut track = RangeTrack::new(RangeConfig::default());
//! let rect = Rect::new(10.0, 0.0, 210.0, 20.0);
//!
//! // Tap at the middle of the track.
//! assert!(track.pointer_down(Point::new(110.0, 10.0), rect));
//! assert_eq!(track.value(), RangeValue::Single(50));
//!
//! // Drag to three quarters and release.
//! track.pointer_move(Point::new(160.0, 10.0));
//! track.pointer_up(Point::new(160.0, 10.0));
//! assert_eq!(track.value(), RangeValue::Single(75));
//! assert_eq!(track.bar().right, 25.0);
//! ```
//!
//! ## Dual knobs
//!
//! With [`RangeConfig::with_dual_knobs`], pointer-down picks whichever knob is
//! strictly closer to the pointer (ties pick knob `A`) and keeps it for the
//! whole session. The reported value is [`RangeValue::Dual`], whose `lower`
//! and `upper` are derived from the two knob values on every update, so knobs
//! may cross freely.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_range::{KnobId, RangeConfig, RangeTrack, RangeValue};
//!
//! let config = RangeConfig::new(21, 72, 3).unwrap().with_snaps(true).with_dual_knobs(true);
//! let mut track = RangeTrack::new(config);
//! assert_eq!(track.ticks().len(), 18);
//!
//! let rect = Rect::new(0.0, 0.0, 100.0, 10.0);
//! track.pointer_down(Point::new(90.0, 5.0), rect);
//! assert_eq!(track.active_knob(), Some(KnobId::B));
//! track.pointer_up(Point::new(47.0, 5.0));
//! assert_eq!(track.value(), RangeValue::Dual { lower: 21, upper: 45 });
//! ```
//!
//! ## Sessions
//!
//! A session runs from [`RangeTrack::pointer_down`] through any number of
//! [`RangeTrack::pointer_move`] calls to [`RangeTrack::pointer_up`]. The
//! bounding rectangle passed at pointer-down is kept in the
//! [`session::DragSession`] and reused for every later event; if the track
//! moves mid-drag, the stale geometry is used. Moves and ups without an open
//! session are ignored.
//!
//! ## Debouncing
//!
//! The track reports every change immediately. Delay policies live at the
//! boundary: see [`debounce::Debouncer`].
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
pub mod debounce;
mod host;
mod knob;
mod scale;
pub mod session;
pub mod ticks;
mod track;

pub use config::{RangeConfig, RangeError};
pub use host::{NoopHost, RangeHost};
pub use knob::{BarFill, Knob, KnobId, RangeValue};
pub use scale::pointer_ratio;
pub use ticks::Tick;
pub use track::RangeTrack;
