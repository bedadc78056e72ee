//! Estimate/residual vector pair
//!
//! The solver's mutable state is two dense vectors owned by one computation:
//! `p`, the accumulated estimate (monotonically non-decreasing entry-wise),
//! and `r`, the residual mass not yet committed to `p`. `r` starts as a copy
//! of the seed; `p` starts at zero.

use crate::errors::{ApprError, Result};

/// Dense estimate (`p`) and residual (`r`) vectors for one computation
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualState {
    p: Vec<f64>,
    r: Vec<f64>,
    seed_mass: f64,
}

impl ResidualState {
    /// Initialize state for `n` nodes from a seed distribution.
    ///
    /// The seed is copied into the residual vector and never referenced
    /// again. Seed entries are not validated: negative seeds are accepted
    /// but put the run outside the algorithm's proven guarantees, which is
    /// the caller's responsibility.
    pub fn from_seed(n: usize, seed: &[f64]) -> Result<Self> {
        if seed.len() != n {
            return Err(ApprError::DimensionMismatch {
                what: "seed",
                expected: n,
                actual: seed.len(),
            });
        }
        Ok(Self {
            p: vec![0.0; n],
            r: seed.to_vec(),
            seed_mass: seed.iter().sum(),
        })
    }

    /// Current estimate at a node
    pub fn p(&self, node: usize) -> f64 {
        self.p[node]
    }

    /// Current residual at a node
    pub fn r(&self, node: usize) -> f64 {
        self.r[node]
    }

    /// Add committed mass to the estimate at a node
    pub fn add_p(&mut self, node: usize, delta: f64) {
        self.p[node] += delta;
    }

    /// Overwrite the residual at a node
    pub fn set_r(&mut self, node: usize, value: f64) {
        self.r[node] = value;
    }

    /// Add mass to the residual at a node
    pub fn add_r(&mut self, node: usize, delta: f64) {
        self.r[node] += delta;
    }

    /// Total seed mass recorded at initialization
    pub fn seed_mass(&self) -> f64 {
        self.seed_mass
    }

    /// Diagnostic: total mass currently tracked, `Σp + Σr`.
    ///
    /// When the degree table equals the weighted out-degree, every push
    /// conserves this quantity, so it stays equal to [`seed_mass`](Self::seed_mass)
    /// throughout the run (up to floating-point error).
    pub fn mass(&self) -> f64 {
        self.p.iter().sum::<f64>() + self.r.iter().sum::<f64>()
    }

    /// Consume the state, returning `(p, r)`
    pub fn into_vectors(self) -> (Vec<f64>, Vec<f64>) {
        (self.p, self.r)
    }
}
