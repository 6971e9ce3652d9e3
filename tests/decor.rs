use nenmatu_invite::audio::{toggle_action, ToggleAction};
use nenmatu_invite::config::ConfettiConfig;
use nenmatu_invite::confetti;
use nenmatu_invite::decor::{self, Anchor, DecorKind};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn generated_symbols_stay_in_bounds() {
    let mut rng = SmallRng::seed_from_u64(11);
    for kind in [
        DecorKind::intro_petal(),
        DecorKind::extra_petal(),
        DecorKind::heart(),
        DecorKind::card_petal(),
    ] {
        for item in kind.spawn_many(200, &mut rng) {
            assert!(kind.glyphs.contains(&item.glyph));
            assert!(kind.left_pct.contains(item.left_pct));
            assert!(kind.size_px.contains(item.size_px));
            assert!(kind.duration_s.contains(item.duration_s));
            match (kind.delay_s, item.delay_s) {
                (Some(bounds), Some(delay)) => assert!(bounds.contains(delay)),
                (None, None) => {}
                other => panic!("delay mismatch: {other:?}"),
            }
        }
    }
}

#[test]
fn heart_css_hides_below_by_its_size() {
    let mut rng = SmallRng::seed_from_u64(5);
    let heart = DecorKind::heart().spawn(&mut rng);
    assert_eq!(heart.anchor, Anchor::BelowBySize);
    let css = heart.css();
    assert!(css.contains(&format!("bottom:-{:.2}px;", heart.size_px)));
    assert!(css.contains(&format!("font-size:{:.2}px;", heart.size_px)));
    assert!(css.contains("animation-delay:"));
}

#[test]
fn card_petal_css_has_opacity_and_no_delay() {
    let mut rng = SmallRng::seed_from_u64(5);
    let petal = DecorKind::card_petal().spawn(&mut rng);
    let css = petal.css();
    assert!(css.contains("top:-30px;"));
    assert!(css.contains("opacity:0.9;"));
    assert!(!css.contains("animation-delay"));
    assert_eq!(petal.lifetime_ms(), petal.duration_s * 1000.0);
}

#[test]
fn card_petal_cadence() {
    let mut rng = SmallRng::seed_from_u64(9);
    for _ in 0..500 {
        let next = decor::next_card_petal_ms(&mut rng);
        assert!((400.0..1600.0).contains(&next));
    }
}

#[test]
fn confetti_burst_shape() {
    let cfg = ConfettiConfig::default();
    let mut rng = SmallRng::seed_from_u64(21);
    let pieces = confetti::burst(&cfg, &mut rng);
    assert_eq!(pieces.len(), 32);
    for piece in &pieces {
        assert!(cfg.colors.contains(&piece.color));
        assert!((-260.0..260.0).contains(&piece.dx));
        assert!((-104.0..416.0).contains(&piece.dy));
        assert!((0.6..1.4).contains(&piece.scale));
        assert!((0.0..540.0).contains(&piece.rotation_deg));
        assert!((1400.0..2000.0).contains(&piece.duration_ms));
    }
}

#[test]
fn confetti_fallback_keyframes() {
    let mut rng = SmallRng::seed_from_u64(1);
    let piece = confetti::burst(&ConfettiConfig::default(), &mut rng).remove(0);
    let (from, to) = piece.keyframes();
    assert_eq!(from, "translate(-50%,-50%) scale(1)");
    assert!(to.starts_with("translate("));
    assert!(to.ends_with(&format!("scale({:.2})", piece.scale)));
}

#[test]
fn music_toggle_follows_paused_state() {
    assert_eq!(toggle_action(true), ToggleAction::Play);
    assert_eq!(toggle_action(false), ToggleAction::Pause);
}
