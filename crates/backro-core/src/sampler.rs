//! Weighted sampling without replacement.
//!
//! A small cumulative-weight sampler over an explicit index set with
//! removal. Each draw is O(n), which is fine at the scale of a phrase's
//! character positions.

use rand::Rng;

/// Samples indices without replacement, proportionally to their weights.
#[derive(Debug, Clone)]
pub struct WeightedSampler {
    indices: Vec<usize>,
    weights: Vec<f64>,
    total: f64,
}

impl WeightedSampler {
    /// Create a sampler over `0..weights.len()`.
    ///
    /// Weights must be finite and strictly positive; anything else is a
    /// programming defect and panics.
    pub fn new(weights: &[f64]) -> Self {
        assert!(!weights.is_empty(), "sampler needs at least one weight");
        assert!(
            weights.iter().all(|w| w.is_finite() && *w > 0.0),
            "sampler weights must be finite and positive"
        );
        Self {
            indices: (0..weights.len()).collect(),
            weights: weights.to_vec(),
            total: weights.iter().sum(),
        }
    }

    /// Number of indices still available.
    pub fn remaining(&self) -> usize {
        self.indices.len()
    }

    /// Draw one index and remove it from the pool.
    ///
    /// Returns `None` once the pool is exhausted.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if self.indices.is_empty() {
            return None;
        }
        let target = rng.random_range(0.0..self.total);
        let mut acc = 0.0;
        let mut slot = self.indices.len() - 1;
        for (i, w) in self.weights.iter().enumerate() {
            acc += w;
            // Float accumulation can land short of total; the final slot
            // catches the remainder.
            if target < acc {
                slot = i;
                break;
            }
        }
        let index = self.indices.swap_remove(slot);
        let weight = self.weights.swap_remove(slot);
        self.total -= weight;
        Some(index)
    }

    /// Draw up to `count` distinct indices.
    pub fn draw_many<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> Vec<usize> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            match self.draw(rng) {
                Some(index) => drawn.push(index),
                None => break,
            }
        }
        drawn
    }
}
