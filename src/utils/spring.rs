//! Damped harmonic oscillator used to smooth every animated dock value.
//!
//! The integrator is semi-implicit Euler with fixed-size substeps, so a long
//! frame never feeds one huge step into the recurrence.

use serde::{Deserialize, Serialize};

/// Longest substep the integrator takes.
const MAX_SUBSTEP: f32 = 1.0 / 240.0;
/// Frames longer than this (window dragged, process stalled) are clamped.
const MAX_FRAME: f32 = 0.1;
/// Distance and speed under which the spring snaps onto its target.
const REST_EPSILON: f32 = 1e-3;
/// Fastest response rate (rad/s or 1/s) a spring may have; keeps the
/// substep count per frame bounded.
pub const MAX_RATE: f32 = 10_000.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringParams {
    pub const fn new(mass: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            mass,
            stiffness,
            damping,
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.mass, self.stiffness, self.damping]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
            && self.rate() <= MAX_RATE
    }

    /// The larger of the natural frequency `sqrt(k/m)` and the damping rate
    /// `c/m`. Semi-implicit Euler stays stable while `h * rate <= 1`.
    pub fn rate(&self) -> f32 {
        (self.stiffness / self.mass)
            .sqrt()
            .max(self.damping / self.mass)
    }

    fn substep(&self) -> f32 {
        let rate = self.rate();
        if rate.is_finite() && rate > 0.0 {
            MAX_SUBSTEP.min(1.0 / rate.min(MAX_RATE))
        } else {
            MAX_SUBSTEP
        }
    }

    /// `< 1.0` overshoots, `>= 1.0` settles without crossing the target.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    params: SpringParams,
}

impl Spring {
    pub fn new(params: SpringParams, value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            params,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advances the spring by `dt` seconds. Returns `true` while it is still
    /// moving.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.is_settled() {
            return false;
        }
        if dt.is_nan() || dt <= 0.0 {
            return true;
        }

        let dt = dt.min(MAX_FRAME);
        let substeps = (dt / self.params.substep()).ceil().max(1.0);
        let h = dt / substeps;
        let SpringParams {
            mass,
            stiffness,
            damping,
        } = self.params;

        for _ in 0..substeps as u32 {
            let displacement = self.value - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
        }

        if (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }

        true
    }
}
