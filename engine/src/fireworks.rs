//! Fireworks particle overlay for the celebration.
//!
//! Shells launch from the bottom edge, rise, burst into a ring of sparks,
//! and the sparks decay under gravity until they age out or leave the
//! viewport. Coordinates are normalized to the unit square (x right, y
//! down) so the renderer can map them onto any terminal size.

use std::time::Duration;

/// Hard cap on the spark population. Bursts are skipped at the cap, so the
/// overlay can never grow without bound.
pub const MAX_SPARKS: usize = 400;

const SPARK_LIFETIME: f32 = 1.6;
const GRAVITY: f32 = 0.22;
const SHELL_SPEED: f32 = 0.55;
const SPARKS_PER_BURST: usize = 28;
const LAUNCH_MIN: f32 = 0.35;
const LAUNCH_JITTER: f32 = 0.6;

/// A single glowing particle.
#[derive(Debug, Clone, Copy)]
pub struct Spark {
    pub x: f32,
    pub y: f32,
    vx: f32,
    vy: f32,
    age: f32,
    /// Stable per-burst value the renderer maps to a color.
    pub color_seed: u8,
}

impl Spark {
    /// 0.0 freshly burst, 1.0 about to fade out.
    #[must_use]
    pub fn age_frac(&self) -> f32 {
        (self.age / SPARK_LIFETIME).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Shell {
    x: f32,
    y: f32,
    burst_y: f32,
    color_seed: u8,
}

#[derive(Debug, Default)]
pub struct Fireworks {
    active: bool,
    shells: Vec<Shell>,
    sparks: Vec<Spark>,
    until_launch: f32,
    booms: u32,
}

impl Fireworks {
    /// Turn the overlay on. Idempotent; the first shell launches on the
    /// next tick.
    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
            self.until_launch = 0.0;
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    /// Bursts since the last call. The caller decides whether they make a
    /// sound.
    pub fn take_booms(&mut self) -> u32 {
        std::mem::take(&mut self.booms)
    }

    pub fn tick(&mut self, delta: Duration) {
        if !self.active {
            return;
        }
        let dt = delta.as_secs_f32();

        self.until_launch -= dt;
        if self.until_launch <= 0.0 {
            self.launch();
            self.until_launch = LAUNCH_MIN + rand::random::<f64>() as f32 * LAUNCH_JITTER;
        }

        let mut bursts: Vec<(f32, f32, u8)> = Vec::new();
        self.shells.retain_mut(|shell| {
            shell.y -= SHELL_SPEED * dt;
            if shell.y <= shell.burst_y {
                bursts.push((shell.x, shell.y, shell.color_seed));
                false
            } else {
                true
            }
        });
        for (x, y, seed) in bursts {
            self.burst_at(x, y, seed);
        }

        self.sparks.retain_mut(|spark| {
            spark.x += spark.vx * dt;
            spark.y += spark.vy * dt;
            spark.vy += GRAVITY * dt;
            spark.age += dt;
            spark.age < SPARK_LIFETIME
                && (0.0..=1.0).contains(&spark.x)
                && (0.0..=1.0).contains(&spark.y)
        });
    }

    fn launch(&mut self) {
        self.shells.push(Shell {
            x: 0.1 + rand::random::<f64>() as f32 * 0.8,
            y: 1.0,
            burst_y: 0.15 + rand::random::<f64>() as f32 * 0.3,
            color_seed: (rand::random::<f64>() * 255.0) as u8,
        });
    }

    /// Explode a ring of sparks, respecting the population cap.
    pub(crate) fn burst_at(&mut self, x: f32, y: f32, color_seed: u8) {
        if self.sparks.len() + SPARKS_PER_BURST > MAX_SPARKS {
            return;
        }
        self.booms = self.booms.saturating_add(1);
        for i in 0..SPARKS_PER_BURST {
            let angle = (i as f32 / SPARKS_PER_BURST as f32) * std::f32::consts::TAU;
            let speed = 0.12 + rand::random::<f64>() as f32 * 0.18;
            self.sparks.push(Spark {
                x,
                y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                age: 0.0,
                color_seed,
            });
        }
    }
}
