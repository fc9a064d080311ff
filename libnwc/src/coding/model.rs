//! Adaptive predictive model
//!
//! Produces the conditional cumulative frequency tables the arithmetic
//! coder draws symbol ranges from. Four fixed distribution shapes are
//! precomputed at construction; per-sample adaptation happens through a
//! tracked mean, a GARCH-style deviation that selects among the shapes,
//! an outlier gate, and a modular symbol shift that recenters the active
//! table on the predicted next symbol.
//!
//! Encoder and decoder hold their own copy of this model and feed it the
//! same symbols in the same order, so both always query identical tables.
//! Table construction is deterministic down to the bit: plain IEEE-754
//! doubles and `libm::erf`, no reassociation.

use std::f64::consts::SQRT_2;

use crate::core::types::{Frequency, Symbol, MAX_FREQUENCY, NUM_SYMBOLS};

/// number of precomputed conditional distributions
const NUM_DIST: usize = 4;

// dynamic state constants
const MA: f64 = 0.20;
const LTV: f64 = 7.5;
const ALPHA: f64 = 0.725;
const BETA: f64 = 0.175;
const OUTLIER_LEVEL: f64 = 8.4;
const MRR: f64 = 0.05;

// per-distribution shape constants
const STD_LEVELS: [f64; NUM_DIST] = [16.0, 18.0, 20.0, 22.0];
const CDF_SCALE: [f64; NUM_DIST] = [5.145, 6.035, 8.547, 20.05];
const CDF_W: [f64; NUM_DIST] = [2.5e-4; NUM_DIST];
const CDF_Z: [f64; NUM_DIST] = [106.3, 82.84, 62.87, 61.86];

/// normal CDF via the error function
fn normal_cdf(x: f64, loc: f64, scale: f64) -> f64 {
    let standardized = (x - loc) / scale;
    0.5 * (1.0 + libm::erf(standardized / SQRT_2))
}

/// raw mixture CDF for one distribution shape
///
/// `w` floors every symbol at a small probability; `z` is a point mass at
/// the center of the distribution.
fn mixture_cdf(x: f64, scale: f64, w: f64, z: f64) -> f64 {
    let mut p = (1.0 - w - z) * normal_cdf(x, 511.0, scale) + w;
    if x >= 511.0 {
        p += z;
    }
    p
}

/// adaptive predictive model over the 1025-symbol alphabet
pub struct Model {
    // conditional cumulative frequency tables, fixed after construction
    ccft: [[Frequency; NUM_SYMBOLS + 1]; NUM_DIST],

    // index of the distribution currently in effect
    active_dist: usize,
    // modular relocation applied to every symbol lookup
    active_symbol_shift: i32,

    // dynamic state
    mean: f64,
    stdev: f64,
    omega: f64,
    outlier_counter: u32,
}

impl Model {
    /// build the model and its four frequency tables
    pub fn new() -> Self {
        let omega = LTV / (1.0 - ALPHA - BETA);

        let mut ccft = [[0 as Frequency; NUM_SYMBOLS + 1]; NUM_DIST];
        for (d, table) in ccft.iter_mut().enumerate() {
            let z = CDF_Z[d] / NUM_SYMBOLS as f64;
            let max_p = mixture_cdf(NUM_SYMBOLS as f64, CDF_SCALE[d], CDF_W[d], z);

            for j in 1..NUM_SYMBOLS {
                let p = mixture_cdf(j as f64, CDF_SCALE[d], CDF_W[d], z);
                // the + j term keeps every symbol at least one unit wide
                table[j] = (p / max_p * (MAX_FREQUENCY as usize - NUM_SYMBOLS) as f64)
                    as Frequency
                    + j as Frequency;
            }
            table[0] = 0;
            table[NUM_SYMBOLS] = MAX_FREQUENCY;
        }

        Model {
            ccft,
            active_dist: 0,
            active_symbol_shift: 0,
            mean: 511.0,
            stdev: 8.0,
            omega,
            outlier_counter: 0,
        }
    }

    /// cumulative frequency bounds `[low, high)` of a symbol
    pub fn symbol_low_high(&self, symbol: Symbol) -> (Frequency, Frequency) {
        let loc = self.shifted_location(symbol);
        (
            self.ccft[self.active_dist][loc],
            self.ccft[self.active_dist][loc + 1],
        )
    }

    /// symbol whose cumulative frequency range contains `freq`
    pub fn frequency_symbol(&self, freq: Frequency) -> Symbol {
        let table = &self.ccft[self.active_dist];

        // first entry strictly above freq, then step back one slot
        let upper = table.partition_point(|&f| f <= freq);
        let loc = upper.saturating_sub(1);

        let symbol = (loc as i64 + NUM_SYMBOLS as i64 - self.active_symbol_shift as i64)
            .rem_euclid(NUM_SYMBOLS as i64);
        symbol as Symbol
    }

    /// advance the model with an observed symbol
    ///
    /// Must run after every coded symbol on both sides; the tables consulted
    /// for a symbol always reflect the state before it.
    pub fn update_state(&mut self, symbol: Symbol) {
        let ds = symbol as f64 - self.mean;

        // outlier gate: up to three consecutive out-of-band samples are
        // suppressed, the fourth one is taken into the state
        if ds.abs() > OUTLIER_LEVEL * self.stdev {
            self.outlier_counter += 1;
        } else {
            self.outlier_counter = 0;
        }
        if self.outlier_counter > 3 {
            self.outlier_counter = 0;
        }

        if self.outlier_counter == 0 {
            self.mean = MA * self.mean + (1.0 - MA) * symbol as f64;
            // ds carries the pre-update mean
            self.stdev = (self.omega + ALPHA * self.stdev * self.stdev + BETA * ds * ds).sqrt();

            self.active_dist = STD_LEVELS
                .partition_point(|&level| level < self.stdev)
                .min(NUM_DIST - 1);

            let predicted = self.mean + (symbol as f64 - self.mean) * MRR;
            self.active_symbol_shift = 511 - predicted as i32;
        }
    }

    /// table slot of a symbol under the recentering shift
    ///
    /// The shift is signed and transiently larger than half the alphabet,
    /// so the sum is formed in i64 and reduced with a euclidean remainder.
    fn shifted_location(&self, symbol: Symbol) -> usize {
        let loc = symbol as i64 + NUM_SYMBOLS as i64 + self.active_symbol_shift as i64;
        loc.rem_euclid(NUM_SYMBOLS as i64) as usize
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
