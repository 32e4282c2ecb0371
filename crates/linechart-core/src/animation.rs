// File: crates/linechart-core/src/animation.rs
// Summary: Timed path transitions (fade) and retargetable tweens.

use crate::path::Path;
use crate::types::{AnimationConfig, AnimationType};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseInOut,
}

impl Easing {
    /// Progress curve over clamped `t` in [0, 1].
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// A retargetable timed value. `retarget` starts a new run from the
/// current sample, so superseding an in-flight tween never jumps.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f64,
    to: f64,
    started_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Tween {
    /// A tween already settled at `value`.
    pub fn fixed(value: f64) -> Self {
        Self { from: value, to: value, started_ms: 0.0, duration_ms: 0.0, easing: Easing::Linear }
    }

    pub fn retarget(&mut self, now_ms: f64, to: f64, duration_ms: f64, easing: Easing) {
        self.from = self.value_at(now_ms);
        self.to = to;
        self.started_ms = now_ms;
        self.duration_ms = duration_ms;
        self.easing = easing;
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = (now_ms - self.started_ms) / self.duration_ms;
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn done_at(&self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms - self.started_ms >= self.duration_ms
    }
}

#[derive(Debug)]
enum Phase {
    Idle,
    FadingOut { started_ms: f64, from_opacity: f64 },
    FadingIn { started_ms: f64 },
}

/// Cross-fades a line's geometry when its data changes: fade the old path
/// out, swap at the midpoint, fade the new one in, then reveal the
/// end-point marker. At most one transition is in flight per line; a new
/// change supersedes the current one and restarts from the sampled opacity.
#[derive(Debug)]
pub struct Transition {
    config: Option<AnimationConfig>,
    phase: Phase,
    pending: Option<Path>,
    opacity: f64,
    reveal: f64,
}

impl Transition {
    pub fn new(config: Option<AnimationConfig>) -> Self {
        Self { config, phase: Phase::Idle, pending: None, opacity: 1.0, reveal: 1.0 }
    }

    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Hand the transition its next geometry. Returns the path when the
    /// swap must happen immediately (no animation configured); otherwise
    /// the swap is delivered by a later `tick`.
    pub fn begin(&mut self, next: Path, now_ms: f64) -> Option<Path> {
        let Some(cfg) = self.config else {
            return Some(next);
        };
        if cfg.duration_ms <= 0.0 {
            return Some(next);
        }
        match cfg.animation_type {
            AnimationType::Fade => {}
        }

        if self.is_animating() {
            log::debug!("transition superseded; restarting toward newest data");
        } else {
            log::debug!("transition started ({} ms fade)", cfg.duration_ms);
        }
        self.pending = Some(next);
        self.phase = Phase::FadingOut { started_ms: now_ms, from_opacity: self.opacity };
        None
    }

    /// Advance the state machine. Returns the new geometry exactly once,
    /// at the midpoint swap.
    pub fn tick(&mut self, now_ms: f64) -> Option<Path> {
        let Some(cfg) = self.config else {
            return None;
        };
        let half = (cfg.duration_ms / 2.0).max(1e-9);

        match self.phase {
            Phase::Idle => None,
            Phase::FadingOut { started_ms, from_opacity } => {
                let t = (now_ms - started_ms) / half;
                if t >= 1.0 {
                    self.opacity = 0.0;
                    self.reveal = 0.0;
                    self.phase = Phase::FadingIn { started_ms: now_ms };
                    self.pending.take()
                } else {
                    self.opacity = from_opacity * (1.0 - Easing::EaseInOut.apply(t));
                    None
                }
            }
            Phase::FadingIn { started_ms } => {
                let t = (now_ms - started_ms) / half;
                self.opacity = Easing::EaseInOut.apply(t);
                self.reveal = self.opacity;
                if t >= 1.0 {
                    self.opacity = 1.0;
                    self.reveal = 1.0;
                    self.phase = Phase::Idle;
                    log::debug!("transition finished");
                }
                None
            }
        }
    }

    /// Current line opacity in [0, 1].
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// End-point marker reveal progress in [0, 1].
    pub fn end_point_reveal(&self) -> f64 {
        self.reveal
    }
}
