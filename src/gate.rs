//! Intro gate: blocks the card until the visitor opens it.
//!
//! The state machine only decides; the browser glue performs the returned
//! [`GateAction`]s. `Revealed` is terminal and is entered exactly once, which
//! is what makes the reveal dispatch run at most once per page load.

use crate::capability::Capabilities;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Gated,
    Transitioning,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    /// Nothing to do; the event arrived in the wrong state.
    Ignore,
    /// Play the door sequence; call [`Gate::finish_transition`] when it ends.
    PlayDoors,
    /// Hide the overlay and run the reveal dispatch now.
    Reveal,
}

#[derive(Debug)]
pub struct Gate {
    state: GateState,
    caps: Capabilities,
}

impl Gate {
    pub fn new(caps: Capabilities) -> Self {
        Self {
            state: GateState::Gated,
            caps,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Debug bypass found in the URL at load.
    pub fn bypass(&mut self) -> GateAction {
        match self.state {
            GateState::Gated => {
                self.state = GateState::Revealed;
                GateAction::Reveal
            }
            _ => GateAction::Ignore,
        }
    }

    /// Click, Enter or Space on the activation control.
    pub fn activate(&mut self) -> GateAction {
        if self.state != GateState::Gated {
            return GateAction::Ignore;
        }
        if self.caps.timeline {
            self.state = GateState::Transitioning;
            GateAction::PlayDoors
        } else {
            self.state = GateState::Revealed;
            GateAction::Reveal
        }
    }

    /// Door sequence finished, or failed and must fall back to an instant reveal.
    pub fn finish_transition(&mut self) -> GateAction {
        match self.state {
            GateState::Transitioning => {
                self.state = GateState::Revealed;
                GateAction::Reveal
            }
            _ => GateAction::Ignore,
        }
    }
}
