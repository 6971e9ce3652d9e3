use nenmatu_invite::capability::Capabilities;
use nenmatu_invite::gate::{Gate, GateAction, GateState};
use nenmatu_invite::url::bypass_requested;

const WITH_TIMELINE: Capabilities = Capabilities {
    timeline: true,
    vector: false,
};

#[test]
fn starts_gated() {
    assert_eq!(Gate::new(Capabilities::NONE).state(), GateState::Gated);
}

#[test]
fn without_timeline_click_reveals_directly() {
    let mut gate = Gate::new(Capabilities::NONE);
    assert_eq!(gate.activate(), GateAction::Reveal);
    assert_eq!(gate.state(), GateState::Revealed);
    assert_eq!(gate.activate(), GateAction::Ignore);
}

#[test]
fn with_timeline_doors_play_then_reveal_once() {
    let mut gate = Gate::new(WITH_TIMELINE);
    assert_eq!(gate.activate(), GateAction::PlayDoors);
    assert_eq!(gate.state(), GateState::Transitioning);

    // Click and keyboard activations during the doors are no-ops.
    assert_eq!(gate.activate(), GateAction::Ignore);
    assert_eq!(gate.activate(), GateAction::Ignore);

    assert_eq!(gate.finish_transition(), GateAction::Reveal);
    assert_eq!(gate.state(), GateState::Revealed);
    assert_eq!(gate.finish_transition(), GateAction::Ignore);
}

#[test]
fn bypass_skips_transition() {
    let mut gate = Gate::new(WITH_TIMELINE);
    assert_eq!(gate.bypass(), GateAction::Reveal);
    assert_eq!(gate.state(), GateState::Revealed);
    assert_eq!(gate.activate(), GateAction::Ignore);
    assert_eq!(gate.bypass(), GateAction::Ignore);
}

#[test]
fn finish_without_activation_is_ignored() {
    let mut gate = Gate::new(WITH_TIMELINE);
    assert_eq!(gate.finish_transition(), GateAction::Ignore);
    assert_eq!(gate.state(), GateState::Gated);
}

#[test]
fn capability_probe_reads_globals() {
    let caps = Capabilities::probe(|name| name == "gsap");
    assert_eq!(caps, WITH_TIMELINE);
    assert_eq!(Capabilities::probe(|_| false), Capabilities::NONE);
}

fn keys(present: &'static [&'static str]) -> impl Fn(&str) -> bool {
    move |key| present.iter().any(|p| *p == key)
}

#[test]
fn bypass_token_in_query_or_fragment() {
    assert!(bypass_requested("", "skipIntro", keys(&["skipIntro"])));
    assert!(bypass_requested("", "skipIntro", keys(&["a", "skipIntro"])));
    assert!(bypass_requested("#skipIntro", "skipIntro", keys(&[])));
    assert!(bypass_requested("skipIntro", "skipIntro", keys(&[])));

    assert!(!bypass_requested("", "skipIntro", keys(&[])));
    assert!(!bypass_requested("", "skipIntro", keys(&["skipIntroduction"])));
    assert!(!bypass_requested("#other", "skipIntro", keys(&["x"])));
    assert!(!bypass_requested("#skipIntro", "", keys(&["skipIntro"])));
}

#[test]
fn fragment_match_skips_the_query_lookup() {
    let mut asked = false;
    assert!(bypass_requested("#skipIntro", "skipIntro", |_| {
        asked = true;
        false
    }));
    assert!(!asked);
}
