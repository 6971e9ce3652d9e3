use nenmatu_invite::config::{InviteConfig, Span};
use nenmatu_invite::InviteError;

#[test]
fn empty_document_yields_defaults() {
    let cfg = InviteConfig::from_json("{}").unwrap();
    assert_eq!(cfg.countdown_target, "2025-10-15T11:00:00+07:00");
    assert_eq!(cfg.countdown_tick_ms, 1000);
    assert_eq!(cfg.slide_interval_ms, 5000);
    assert_eq!(cfg.bypass_token, "skipIntro");
    assert_eq!(cfg.rsvp.cooldown_ms, 2600);
    assert_eq!(cfg.rsvp.message_transition_ms, 500);
    assert!(cfg.rsvp.message_transition_ms <= cfg.rsvp.message_fade_ms);
    assert_eq!(cfg.confetti.count, 32);
    assert_eq!(cfg.fireworks.burst_size, 48);
    assert_eq!(cfg.fireworks.max_live, 520);
    assert_eq!(cfg.fireworks.trail_decay, 0.92);
    assert_eq!(cfg.fireworks.hue, Span::new(320.0, 370.0));
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let cfg = InviteConfig::from_json(
        r#"{
            "countdown_target": "2026-01-01T00:00:00Z",
            "rsvp": { "message": "Thank you!" },
            "fireworks": { "hue": { "min": 180, "max": 220 }, "hide_after_ms": 8000 }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.countdown_target, "2026-01-01T00:00:00Z");
    assert_eq!(cfg.rsvp.message, "Thank you!");
    assert_eq!(cfg.rsvp.message_visible_ms, 1700);
    assert_eq!(cfg.fireworks.hue, Span::new(180.0, 220.0));
    assert_eq!(cfg.fireworks.hide_after_ms, 8000);
    assert_eq!(cfg.fireworks.show_after_ms, 1200);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = InviteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, InviteError::Config(_)));
    assert!(!err.is_missing_target());
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn degenerate_span_samples_its_minimum() {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(Span::new(3.0, 3.0).sample(&mut rng), 3.0);
    assert_eq!(Span::new(5.0, 1.0).sample(&mut rng), 5.0);
}
