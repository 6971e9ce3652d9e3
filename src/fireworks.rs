//! Firework bursts: the only subsystem with its own per-frame physics.
//!
//! [`FireworkField::frame`] is driven by the display-refresh callback. Drawing
//! goes through [`SparkPainter`] so the simulation runs the same against a
//! 2D canvas or a recording painter in tests.

use std::f64::consts::TAU;

use rand::Rng;

use crate::config::FireworkConfig;

/// Lightness used for live sparks, in HSL percent.
pub const SPARK_LIGHTNESS: u8 = 72;
/// Lightness used for trail echoes.
pub const TRAIL_LIGHTNESS: u8 = 80;
/// Trail echoes are drawn smaller than the spark that left them.
pub const TRAIL_SCALE: f64 = 0.7;

#[derive(Clone, Debug, PartialEq)]
pub struct Spark {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Frames lived so far.
    pub age: f64,
    pub max_age: f64,
    pub hue: f64,
    pub size: f64,
}

impl Spark {
    /// Linear fade from 1 at birth to 0 at `max_age`, clamped.
    pub fn alpha(&self) -> f64 {
        if self.max_age <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age.min(self.max_age) / self.max_age).max(0.0)
    }

    fn step(&mut self, gravity: f64) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += gravity;
        self.age += 1.0;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub alpha: f64,
    pub hue: f64,
    pub size: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

pub trait SparkPainter {
    /// Wash the whole surface with translucent white.
    fn fade(&mut self, width: f64, height: f64, alpha: f64);
    fn dot(&mut self, x: f64, y: f64, radius: f64, hue: f64, lightness: u8, alpha: f64);
}

pub struct FireworkField {
    cfg: FireworkConfig,
    sparks: Vec<Spark>,
    trails: Vec<TrailPoint>,
    last_spawn_ms: f64,
}

impl FireworkField {
    pub fn new(cfg: FireworkConfig) -> Self {
        Self {
            cfg,
            sparks: Vec::new(),
            trails: Vec::new(),
            last_spawn_ms: 0.0,
        }
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn trails(&self) -> &[TrailPoint] {
        &self.trails
    }

    pub fn live(&self) -> usize {
        self.sparks.len()
    }

    /// Drop every spark and trail.
    pub fn clear(&mut self) {
        self.sparks.clear();
        self.trails.clear();
    }

    /// Advance one rendered frame. Returns true when a burst was spawned.
    pub fn frame<R, P>(&mut self, now_ms: f64, view: Viewport, rng: &mut R, painter: &mut P) -> bool
    where
        R: Rng + ?Sized,
        P: SparkPainter + ?Sized,
    {
        painter.fade(view.width, view.height, self.cfg.fade_alpha);

        let gravity = self.cfg.gravity;
        for spark in &mut self.sparks {
            spark.step(gravity);
            let alpha = spark.alpha();
            self.trails.push(TrailPoint {
                x: spark.x,
                y: spark.y,
                alpha,
                hue: spark.hue,
                size: spark.size,
            });
            painter.dot(spark.x, spark.y, spark.size, spark.hue, SPARK_LIGHTNESS, alpha);
        }

        let (decay, cutoff) = (self.cfg.trail_decay, self.cfg.trail_cutoff);
        self.trails.retain_mut(|t| {
            t.alpha *= decay;
            if t.alpha < cutoff {
                return false;
            }
            painter.dot(t.x, t.y, t.size * TRAIL_SCALE, t.hue, TRAIL_LIGHTNESS, t.alpha);
            true
        });

        self.sparks.retain(|s| s.age < s.max_age);

        if self.should_spawn(now_ms) {
            self.spawn_burst(view, rng);
            self.last_spawn_ms = now_ms;
            return true;
        }
        false
    }

    fn should_spawn(&self, now_ms: f64) -> bool {
        now_ms - self.last_spawn_ms > self.cfg.spawn_every_ms
            && self.sparks.len() + self.cfg.burst_size <= self.cfg.max_live
    }

    /// One burst in the upper-middle of the view, evenly spaced angles, shared hue.
    pub fn spawn_burst<R: Rng + ?Sized>(&mut self, view: Viewport, rng: &mut R) {
        let x = rng.gen::<f64>() * view.width * 0.6 + view.width * 0.2;
        let y = rng.gen::<f64>() * view.height * 0.3 + view.height * 0.15;
        let hue = self.cfg.hue.sample(rng);
        let count = self.cfg.burst_size;
        self.sparks.reserve(count);
        for i in 0..count {
            let angle = TAU * i as f64 / count as f64;
            let speed = self.cfg.speed.sample(rng);
            self.sparks.push(Spark {
                x,
                y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                age: 0.0,
                max_age: self.cfg.max_age.sample(rng),
                hue,
                size: self.cfg.size.sample(rng),
            });
        }
    }
}
