// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: the state of one pointer-down to pointer-up interaction.
//!
//! ## Usage
//!
//! 1) Open a session with [`DragSession::new`] at pointer-down, recording the
//!    active knob and the track's bounding rectangle.
//! 2) On each move or at pointer-up, call [`DragSession::update`] with the
//!    pointer position.
//! 3) Use [`DragSession::rect`] for every conversion during the session; the
//!    rectangle is never re-queried mid-drag.
//! 4) Drop the session at pointer-up. If the pointer never left its starting
//!    point, [`DragSession::has_moved`] is `false` and the session was a tap.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_range::{KnobId, session::DragSession};
//!
//! let rect = Rect::new(0.0, 0.0, 200.0, 20.0);
//! let mut session = DragSession::new(KnobId::B, rect, Point::new(10.0, 5.0));
//!
//! session.update(Point::new(10.0, 5.0));
//! assert!(!session.has_moved());
//!
//! session.update(Point::new(25.0, 5.0));
//! assert!(session.has_moved());
//! assert_eq!(session.last_pos(), Point::new(25.0, 5.0));
//! ```

use kurbo::{Point, Rect};

use crate::KnobId;

/// Per-drag state captured at pointer-down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    knob: KnobId,
    rect: Rect,
    start_pos: Point,
    last_pos: Point,
    moved: bool,
}

impl DragSession {
    /// Opens a session on `knob` against the captured bounding rectangle.
    #[must_use]
    pub fn new(knob: KnobId, rect: Rect, pos: Point) -> Self {
        Self {
            knob,
            rect,
            start_pos: pos,
            last_pos: pos,
            moved: false,
        }
    }

    /// The knob chosen at pointer-down.
    #[must_use]
    pub fn knob(&self) -> KnobId {
        self.knob
    }

    /// The bounding rectangle captured at pointer-down.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The most recent pointer position.
    #[must_use]
    pub fn last_pos(&self) -> Point {
        self.last_pos
    }

    /// Records a new pointer position.
    pub fn update(&mut self, pos: Point) {
        self.last_pos = pos;
        self.moved |= pos != self.start_pos;
    }

    /// Returns `true` once the pointer has been seen away from where the
    /// session started, even if it later came back.
    ///
    /// A session that ends without moving is a tap.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }
}
