use nenmatu_invite::config::RsvpConfig;
use nenmatu_invite::rsvp::{RsvpControl, RsvpEvent};

/// Replays the scheduled events that are due by `elapsed` ms after a press.
fn run_until(control: &mut RsvpControl, cfg: &RsvpConfig, elapsed: u32) {
    let mut due: Vec<_> = RsvpControl::schedule(cfg)
        .into_iter()
        .filter(|(at, _)| *at <= elapsed)
        .collect();
    due.sort_by_key(|(at, _)| *at);
    for (_, event) in due {
        control.apply(event);
    }
}

#[test]
fn disabled_during_cooldown_then_rearmed() {
    let cfg = RsvpConfig::default();
    let mut control = RsvpControl::default();
    assert!(control.is_enabled());

    assert!(control.press());
    assert!(!control.is_enabled());
    assert!(!control.press(), "second press during cooldown must be refused");

    run_until(&mut control, &cfg, 2_599);
    assert!(!control.is_enabled());

    let mut control = RsvpControl::default();
    control.press();
    run_until(&mut control, &cfg, 2_600);
    assert!(control.is_enabled());
    assert!(control.press());
}

#[test]
fn message_is_transient() {
    let cfg = RsvpConfig::default();
    let mut control = RsvpControl::default();
    control.press();
    assert!(control.message_shown());

    run_until(&mut control, &cfg, 1_700);
    assert!(control.message_shown(), "fading, not yet removed");

    let mut control = RsvpControl::default();
    control.press();
    run_until(&mut control, &cfg, 2_250);
    assert!(!control.message_shown());
}

#[test]
fn schedule_follows_config() {
    let cfg = RsvpConfig {
        message_visible_ms: 100,
        message_fade_ms: 50,
        cooldown_ms: 400,
        ..RsvpConfig::default()
    };
    assert_eq!(
        RsvpControl::schedule(&cfg),
        [
            (100, RsvpEvent::FadeMessage),
            (150, RsvpEvent::RemoveMessage),
            (400, RsvpEvent::Rearm),
        ]
    );
}
