//! One-shot celebratory burst fired from the RSVP control.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::ConfettiConfig;

const FALLBACK_COLOR: &str = "#ff8fa8";

/// Where one confetti dot ends up, relative to screen centre.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub color: String,
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
    pub rotation_deg: f64,
    pub duration_ms: f64,
}

impl ConfettiPiece {
    pub const BASE_STYLE: &'static str = "position:fixed;top:50%;left:50%;width:10px;height:10px;\
         border-radius:50%;pointer-events:none;z-index:3000;transform:translate(-50%,-50%);";

    /// Keyframes for the native animation fallback, as CSS transform strings.
    pub fn keyframes(&self) -> (String, String) {
        (
            "translate(-50%,-50%) scale(1)".to_string(),
            format!(
                "translate({:.1}px,{:.1}px) scale({:.2})",
                self.dx, self.dy, self.scale
            ),
        )
    }
}

pub fn burst<R: Rng + ?Sized>(cfg: &ConfettiConfig, rng: &mut R) -> Vec<ConfettiPiece> {
    (0..cfg.count)
        .map(|_| {
            let color = cfg
                .colors
                .choose(rng)
                .map(String::as_str)
                .unwrap_or(FALLBACK_COLOR)
                .to_string();
            // Biased downward so pieces rain more than they rise.
            let dx = (rng.gen::<f64>() - 0.5) * cfg.spread;
            let dy = (rng.gen::<f64>() - 0.2) * cfg.spread;
            let size = rng.gen::<f64>() * 8.0 + 6.0;
            ConfettiPiece {
                color,
                dx,
                dy,
                scale: size / 10.0,
                rotation_deg: rng.gen::<f64>() * 540.0,
                duration_ms: cfg.duration_ms.sample(rng),
            }
        })
        .collect()
}
