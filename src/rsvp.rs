//! RSVP button timing.
//!
//! The browser glue schedules real timeouts; [`RsvpControl`] is the state
//! those timeouts flip, and [`RsvpControl::schedule`] lists what to schedule.

use crate::config::RsvpConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RsvpEvent {
    /// Start fading the confirmation message.
    FadeMessage,
    /// Detach the confirmation message.
    RemoveMessage,
    /// Re-enable the button and clear its active mark.
    Rearm,
}

#[derive(Debug)]
pub struct RsvpControl {
    enabled: bool,
    message_shown: bool,
}

impl Default for RsvpControl {
    fn default() -> Self {
        Self {
            enabled: true,
            message_shown: false,
        }
    }
}

impl RsvpControl {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn message_shown(&self) -> bool {
        self.message_shown
    }

    /// Returns false when pressed while cooling down.
    pub fn press(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.enabled = false;
        self.message_shown = true;
        true
    }

    pub fn apply(&mut self, event: RsvpEvent) {
        match event {
            RsvpEvent::FadeMessage => {}
            RsvpEvent::RemoveMessage => self.message_shown = false,
            RsvpEvent::Rearm => self.enabled = true,
        }
    }

    /// Events to fire after a successful press, with their delay from the press in ms.
    pub fn schedule(cfg: &RsvpConfig) -> [(u32, RsvpEvent); 3] {
        [
            (cfg.message_visible_ms, RsvpEvent::FadeMessage),
            (
                cfg.message_visible_ms + cfg.message_fade_ms,
                RsvpEvent::RemoveMessage,
            ),
            (cfg.cooldown_ms, RsvpEvent::Rearm),
        ]
    }
}
