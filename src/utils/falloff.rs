//! Maps pointer distance to a magnification factor.
//!
//! The nearest icon follows the full curve up to `max_factor`; the icons
//! right next to it follow the same eased progress but only up to
//! `neighbor_factor`. Every other icon stays at `BASE_FACTOR`.
//!
//! A neighbour on the side the pointer is moving towards holds its full
//! neighbour factor, so no icon shrinks while the pointer approaches it.

use std::f32::consts::PI;

use crate::config::{DockConfig, MagnificationConfig};
use crate::types::PointerState;

pub const BASE_FACTOR: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Nearest,
    Neighbor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Falloff {
    pub radius: f32,
    pub max_factor: f32,
    pub neighbor_factor: f32,
}

impl From<&MagnificationConfig> for Falloff {
    fn from(config: &MagnificationConfig) -> Self {
        Self {
            radius: config.radius,
            max_factor: config.max_factor,
            neighbor_factor: config.neighbor_factor,
        }
    }
}

fn cosine_ease(progress: f32) -> f32 {
    (1.0 - (progress * PI).cos()) / 2.0
}

impl Falloff {
    /// Linear closeness in `[0, 1]`: 1 at the centre, 0 at or beyond the radius.
    pub fn proximity(&self, distance: Option<f32>) -> f32 {
        match distance {
            Some(d) if d.is_finite() && d.abs() < self.radius => 1.0 - d.abs() / self.radius,
            _ => 0.0,
        }
    }

    pub fn eased(&self, distance: Option<f32>) -> f32 {
        cosine_ease(self.proximity(distance))
    }

    pub fn factor(&self, distance: Option<f32>, tier: Tier) -> f32 {
        let peak = match tier {
            Tier::Nearest => self.max_factor,
            Tier::Neighbor => self.neighbor_factor,
        };
        BASE_FACTOR + (peak - BASE_FACTOR) * self.eased(distance)
    }

    /// Factors for every icon, given their measured centres in strip order.
    pub fn tiered_factors(&self, pointer: PointerState, centers: &[Option<f32>]) -> Vec<f32> {
        let mut factors = vec![BASE_FACTOR; centers.len()];

        let nearest = centers
            .iter()
            .enumerate()
            .filter_map(|(i, center)| pointer.distance_to(*center).map(|d| (i, d)))
            .min_by(|a, b| a.1.abs().total_cmp(&b.1.abs()));

        let Some((nearest, distance)) = nearest else {
            return factors;
        };

        factors[nearest] = self.factor(Some(distance), Tier::Nearest);
        let neighbor = |index: usize| {
            let approaching = centers[index]
                .zip(centers[nearest])
                .is_some_and(|(center, anchor)| (center - anchor) * distance > 0.0);
            let distance = if approaching { 0.0 } else { distance };
            self.factor(Some(distance), Tier::Neighbor)
        };
        if nearest > 0 {
            factors[nearest - 1] = neighbor(nearest - 1);
        }
        if nearest + 1 < factors.len() {
            factors[nearest + 1] = neighbor(nearest + 1);
        }

        factors
    }

    /// Container edge length for a factor, clamped to `[base_size, max_size]`.
    pub fn size_for(&self, factor: f32, dock: &DockConfig) -> f32 {
        let span = self.max_factor - BASE_FACTOR;
        let t = if span > 0.0 {
            (factor - BASE_FACTOR) / span
        } else {
            0.0
        };
        (dock.base_size + (dock.max_size - dock.base_size) * t).clamp(dock.base_size, dock.max_size)
    }
}
