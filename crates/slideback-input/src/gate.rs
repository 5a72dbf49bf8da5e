//! Edge-swipe touch classification.

use crate::event::{TouchAction, TouchEvent};
use crate::gesture_constants::{scaled_edge_width, TOUCH_SLOP};

/// Where the owning engine currently is in the gesture lifecycle.
///
/// The gate only reads this; transitions are owned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    /// No gesture in flight.
    Idle,
    /// Primary pointer pressed inside the edge zone; slop not yet crossed.
    ArmedInZone,
    /// Drag in progress; layers track the pointer.
    Sliding,
    /// Resolve animation running; all input is frozen.
    Animating,
}

/// Semantic classification of one raw touch event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Signal {
    /// Not part of an edge swipe; defer to the content beneath.
    Ignore,
    /// Primary pointer pressed inside the activation zone.
    Down,
    /// Primary pointer moved far enough to drive (or keep driving) a drag.
    Move(f32),
    /// Primary pointer released.
    Up,
    /// A secondary pointer pressed mid-sequence.
    MultiDown,
    /// A secondary pointer released mid-sequence.
    MultiUp,
}

/// Classifies raw touch events into [`Signal`]s.
///
/// Per pointer sequence the gate remembers the press position and whether
/// it landed inside the activation zone; once a press is out of zone every
/// following event of that sequence classifies as [`Signal::Ignore`] until
/// the next primary press. Movement below the slop threshold also stays
/// [`Signal::Ignore`] so a slightly wobbly tap never turns into a drag.
///
/// Input freezing during the resolve animation is handled by the engine
/// before classification (every event is consumed unseen), so the gate
/// never observes [`GestureState::Animating`] in practice.
#[derive(Debug)]
pub struct TouchGate {
    edge_width_px: f32,
    touch_slop_px: f32,
    last_down_x: f32,
    in_zone: bool,
}

impl TouchGate {
    pub fn new(density: f32) -> Self {
        Self::with_slop(density, TOUCH_SLOP.to_px(density))
    }

    /// Build a gate with a host-supplied slop (platform configuration).
    pub fn with_slop(density: f32, touch_slop_px: f32) -> Self {
        Self {
            edge_width_px: scaled_edge_width(density),
            touch_slop_px,
            last_down_x: 0.0,
            in_zone: false,
        }
    }

    pub fn edge_width_px(&self) -> f32 {
        self.edge_width_px
    }

    pub fn touch_slop_px(&self) -> f32 {
        self.touch_slop_px
    }

    /// Drop the current sequence as if the press had landed outside the
    /// zone. Used when arming fails and the gesture should silently
    /// degrade to "no visual effect".
    pub fn deactivate(&mut self) {
        self.in_zone = false;
    }

    pub fn classify(&mut self, event: &TouchEvent, state: GestureState) -> Signal {
        if event.action == TouchAction::Down {
            self.last_down_x = event.raw_x;
            self.in_zone = event.raw_x >= 0.0 && event.raw_x <= self.edge_width_px;
            log::trace!(
                "gate: down at x={} in_zone={} (edge={})",
                event.raw_x,
                self.in_zone,
                self.edge_width_px
            );
            return if self.in_zone {
                Signal::Down
            } else {
                Signal::Ignore
            };
        }

        if !self.in_zone {
            return Signal::Ignore;
        }

        match event.action {
            TouchAction::Down => unreachable!("handled above"),
            TouchAction::PointerDown => Signal::MultiDown,
            TouchAction::Move => {
                // Only the primary pointer drives the drag.
                if event.pointer_index != 0 {
                    return Signal::Ignore;
                }
                match state {
                    GestureState::Sliding => Signal::Move(event.raw_x),
                    GestureState::ArmedInZone
                        if (event.raw_x - self.last_down_x).abs() >= self.touch_slop_px =>
                    {
                        Signal::Move(event.raw_x)
                    }
                    _ => Signal::Ignore,
                }
            }
            TouchAction::Up | TouchAction::Cancel | TouchAction::PointerUp
            | TouchAction::Outside => {
                // Only the primary pointer lifting resolves the gesture.
                if event.pointer_index == 0 {
                    Signal::Up
                } else {
                    Signal::MultiUp
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/gate_tests.rs"]
mod tests;
