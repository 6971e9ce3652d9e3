//! Write-once decorative symbols (petals and hearts).
//!
//! Motion is left to the stylesheet's looping keyframes; logic only picks the
//! placement, size and timing attributes once, at creation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Span;

const INTRO_PETALS: &[&str] = &["🌸", "🌺", "🌼", "🌻", "💮", "🏵️"];
const EXTRA_PETALS: &[&str] = &["🌸", "🌺", "🌼", "🌻", "💮"];
const CARD_PETALS: &[&str] = &["🌸", "💮", "🌺"];
const HEART: &[&str] = &["❤"];

/// Vertical anchor of a symbol before its animation moves it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// `top: -Npx`
    Above(f64),
    /// `bottom: -Npx`; hearts hide exactly their own size below the edge.
    BelowBySize,
}

/// Generator bounds for one family of symbols.
#[derive(Clone, Debug, PartialEq)]
pub struct DecorKind {
    pub class: &'static str,
    pub glyphs: &'static [&'static str],
    pub left_pct: Span,
    pub size_px: Span,
    pub duration_s: Span,
    pub delay_s: Option<Span>,
    pub anchor: Anchor,
    pub opacity: Option<f64>,
}

impl DecorKind {
    /// Petals the gate drops over the intro overlay.
    pub fn intro_petal() -> Self {
        Self {
            class: "petal",
            glyphs: INTRO_PETALS,
            left_pct: Span::new(0.0, 100.0),
            size_px: Span::new(18.0, 30.0),
            duration_s: Span::new(10.0, 18.0),
            delay_s: Some(Span::new(0.0, 5.0)),
            anchor: Anchor::Above(50.0),
            opacity: None,
        }
    }

    /// The second, lighter wave added a few seconds after load.
    pub fn extra_petal() -> Self {
        Self {
            class: "petal",
            glyphs: EXTRA_PETALS,
            left_pct: Span::new(0.0, 100.0),
            size_px: Span::new(16.0, 26.0),
            duration_s: Span::new(8.0, 18.0),
            delay_s: Some(Span::new(0.0, 4.0)),
            anchor: Anchor::Above(40.0),
            opacity: None,
        }
    }

    pub fn heart() -> Self {
        Self {
            class: "floating-heart",
            glyphs: HEART,
            left_pct: Span::new(0.0, 100.0),
            size_px: Span::new(10.0, 28.0),
            duration_s: Span::new(18.0, 36.0),
            delay_s: Some(Span::new(0.0, 8.0)),
            anchor: Anchor::BelowBySize,
            opacity: None,
        }
    }

    /// Petals inside the card; kept off the edges and removed after one fall.
    pub fn card_petal() -> Self {
        Self {
            class: "petal",
            glyphs: CARD_PETALS,
            left_pct: Span::new(5.0, 95.0),
            size_px: Span::new(14.0, 24.0),
            duration_s: Span::new(9.0, 17.0),
            delay_s: None,
            anchor: Anchor::Above(30.0),
            opacity: Some(0.9),
        }
    }

    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Decor {
        let glyph = self.glyphs.choose(rng).copied().unwrap_or("🌸");
        Decor {
            class: self.class,
            glyph,
            left_pct: self.left_pct.sample(rng),
            size_px: self.size_px.sample(rng),
            duration_s: self.duration_s.sample(rng),
            delay_s: self.delay_s.map(|d| d.sample(rng)),
            anchor: self.anchor,
            opacity: self.opacity,
        }
    }

    pub fn spawn_many<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Decor> {
        (0..n).map(|_| self.spawn(rng)).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Decor {
    pub class: &'static str,
    pub glyph: &'static str,
    pub left_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: Option<f64>,
    pub anchor: Anchor,
    pub opacity: Option<f64>,
}

impl Decor {
    /// Inline style for the element.
    pub fn css(&self) -> String {
        let mut css = format!("left:{:.2}%;", self.left_pct);
        match self.anchor {
            Anchor::Above(px) => css.push_str(&format!("top:-{px}px;")),
            Anchor::BelowBySize => css.push_str(&format!("bottom:-{:.2}px;", self.size_px)),
        }
        css.push_str(&format!(
            "font-size:{:.2}px;animation-duration:{:.2}s;",
            self.size_px, self.duration_s
        ));
        if let Some(delay) = self.delay_s {
            css.push_str(&format!("animation-delay:{delay:.2}s;"));
        }
        if let Some(opacity) = self.opacity {
            css.push_str(&format!("opacity:{opacity};"));
        }
        css
    }

    /// How long the element needs to stay in the document for one full fall.
    pub fn lifetime_ms(&self) -> f64 {
        self.duration_s * 1000.0
    }
}

/// Delay before the next card petal drops.
pub fn next_card_petal_ms<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    Span::new(400.0, 1600.0).sample(rng)
}
