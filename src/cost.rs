//! Transistor-count cost model for decoders.
//!
//! Compares the single-level decoder produced by this crate with a tree decoder
//! that splits the `k` input bits into a top-level decoder of fanout `f` feeding
//! `f` smaller decoders, recursively.
//!
//! Costs are computed with [`BigUint`] since they grow as `k * 2^k`.

use std::fmt::Write as _;
use std::ops::RangeInclusive;

use log::debug;
use num_bigint::BigUint;

/// Parameters of the cost model.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CostModel {
    /// Transistors per inverter.
    pub t_not: u64,
    /// Maximum fanout of a top-level decoder in the tree.
    pub f_max: u64,
    /// Largest decoder output size built as a single level.
    pub base: u64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            t_not: 2,
            f_max: 8,
            base: 4,
        }
    }
}

impl CostModel {
    /// Transistors of an AND gate with `fan_in` inputs.
    pub fn and_cost(&self, fan_in: u64) -> BigUint {
        BigUint::from(2 * fan_in + 2)
    }

    /// Cost of a single-level `2^k`-output decoder with enable.
    ///
    /// ```text
    /// t_not * k * 2^(k-1) + and(k + 1) * 2^k
    /// ```
    pub fn single_level(&self, k: u32) -> BigUint {
        let outputs = BigUint::from(1u8) << k;
        let inverters = if k == 0 {
            BigUint::from(0u8)
        } else {
            BigUint::from(self.t_not) * k * (BigUint::from(1u8) << (k - 1))
        };
        inverters + self.and_cost(k as u64 + 1) * outputs
    }

    /// Fanout of the top-level decoder for a `k`-input tree: `2^ceil(k/2)` clamped to `[2, f_max]`.
    pub fn fanout(&self, k: u32) -> u64 {
        let half = (k + 1) / 2;
        1u64.checked_shl(half).unwrap_or(u64::MAX).min(self.f_max).max(2)
    }

    /// Cost of a `2^k`-output tree decoder.
    pub fn tree(&self, k: u32) -> BigUint {
        let f = self.fanout(k);
        let outputs = BigUint::from(1u8) << k;
        if outputs <= BigUint::from(self.base) || outputs < BigUint::from(f) * 2u8 {
            return self.single_level(k);
        }
        // `f` may be clamped by a non power of two `f_max`; round down to keep the split exact.
        let top = f.ilog2();
        debug!("tree(k = {}): fanout {} splits into {} + {}", k, f, top, k - top);
        self.tree(top) + BigUint::from(1u64 << top) * self.tree(k - top)
    }
}

/// Tree costs over a grid of `f_max` and `base` values.
#[derive(Debug, Clone)]
pub struct CostTable {
    pub t_not: u64,
    pub ks: RangeInclusive<u32>,
    pub f_max: Vec<u64>,
    pub base: Vec<u64>,
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            t_not: CostModel::default().t_not,
            ks: 2..=18,
            f_max: vec![2, 4, 8, 16, 32, 64, 128],
            base: vec![4, 8, 16, 32, 64, 128],
        }
    }
}

impl CostTable {
    /// All rows as `(model, costs for each k)`.
    pub fn rows(&self) -> Vec<(CostModel, Vec<BigUint>)> {
        let mut rows = Vec::new();
        for &f_max in &self.f_max {
            for &base in &self.base {
                let model = CostModel {
                    t_not: self.t_not,
                    f_max,
                    base,
                };
                let costs = self.ks.clone().map(|k| model.tree(k)).collect();
                rows.push((model, costs));
            }
        }
        rows
    }

    /// One line per `(f_max, base, k)` combination.
    pub fn to_text(&self) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        for (model, costs) in self.rows() {
            for (k, cost) in self.ks.clone().zip(costs) {
                writeln!(
                    out,
                    "Cost(k = {}, f_max = {}, b = {}) = {}",
                    k, model.f_max, model.base, cost
                )?;
            }
        }
        Ok(out)
    }

    /// Header `f_max, b, <k>...` followed by one row per `(f_max, base)` pair.
    pub fn to_csv(&self) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        let header: Vec<String> = self.ks.clone().map(|k| k.to_string()).collect();
        writeln!(out, "f_max, b, {}", header.join(", "))?;
        for (model, costs) in self.rows() {
            let costs: Vec<String> = costs.iter().map(|c| c.to_string()).collect();
            writeln!(out, "{}, {}, {}", model.f_max, model.base, costs.join(", "))?;
        }
        Ok(out)
    }
}
