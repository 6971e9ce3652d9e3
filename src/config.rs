//! Tunables for the invitation page.
//!
//! Every field has a default matching the shipped page, so an empty JSON object
//! (or no config element at all) yields the stock behaviour.

use serde::Deserialize;

use crate::error::InviteError;

/// Inclusive-exclusive range used by the random generators.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..self.max)
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v < self.max
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct InviteConfig {
    /// RFC 3339 timestamp the countdown runs to.
    pub countdown_target: String,
    pub countdown_tick_ms: u32,
    pub slide_interval_ms: u32,
    pub bypass_token: String,
    pub bouquet_delay_ms: u32,
    pub extra_petals_delay_ms: u32,
    pub rsvp: RsvpConfig,
    pub confetti: ConfettiConfig,
    pub fireworks: FireworkConfig,
    pub audio: AudioConfig,
    pub lottie_path: String,
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            countdown_target: "2025-10-15T11:00:00+07:00".to_string(),
            countdown_tick_ms: 1000,
            slide_interval_ms: 5000,
            bypass_token: "skipIntro".to_string(),
            bouquet_delay_ms: 2400,
            extra_petals_delay_ms: 5000,
            rsvp: RsvpConfig::default(),
            confetti: ConfettiConfig::default(),
            fireworks: FireworkConfig::default(),
            audio: AudioConfig::default(),
            lottie_path: "https://assets10.lottiefiles.com/packages/lf20_qp1q7mct.json"
                .to_string(),
        }
    }
}

impl InviteConfig {
    /// Parse a JSON document, filling anything it omits with defaults.
    pub fn from_json(text: &str) -> Result<Self, InviteError> {
        let cfg: InviteConfig = serde_json::from_str(text)?;
        Ok(cfg)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RsvpConfig {
    pub message: String,
    pub message_visible_ms: u32,
    pub message_fade_ms: u32,
    /// Opacity transition length; shorter than `message_fade_ms` so the
    /// message is fully transparent before it is removed.
    pub message_transition_ms: u32,
    pub cooldown_ms: u32,
}

impl Default for RsvpConfig {
    fn default() -> Self {
        Self {
            message: "Cảm ơn bạn đã xác nhận!".to_string(),
            message_visible_ms: 1700,
            message_fade_ms: 550,
            message_transition_ms: 500,
            cooldown_ms: 2600,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    pub count: usize,
    pub colors: Vec<String>,
    /// Full width of the horizontal scatter in CSS pixels.
    pub spread: f64,
    pub duration_ms: Span,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            count: 32,
            colors: ["#ff8fa8", "#ffd3dd", "#ffc2d1", "#e98aa0", "#f7b7c8"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            spread: 520.0,
            duration_ms: Span::new(1400.0, 2000.0),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FireworkConfig {
    pub burst_size: usize,
    pub max_live: usize,
    pub spawn_every_ms: f64,
    pub gravity: f64,
    pub trail_decay: f64,
    pub trail_cutoff: f64,
    pub speed: Span,
    pub max_age: Span,
    pub size: Span,
    pub hue: Span,
    /// Overlay alpha painted each frame for the fading trail effect.
    pub fade_alpha: f64,
    pub show_after_ms: u32,
    pub hide_after_ms: u32,
}

impl Default for FireworkConfig {
    fn default() -> Self {
        Self {
            burst_size: 48,
            max_live: 520,
            spawn_every_ms: 950.0,
            gravity: 0.02,
            trail_decay: 0.92,
            trail_cutoff: 0.03,
            speed: Span::new(2.4, 5.6),
            max_age: Span::new(70.0, 100.0),
            size: Span::new(1.2, 3.0),
            hue: Span::new(320.0, 370.0),
            fade_alpha: 0.10,
            show_after_ms: 1200,
            hide_after_ms: 12000,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub volume: f64,
    pub intro_label: String,
    pub playing_label: String,
    pub paused_label: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: 0.8,
            intro_label: "🌼".to_string(),
            playing_label: "🔊 Pause".to_string(),
            paused_label: "🎵 Play".to_string(),
        }
    }
}
