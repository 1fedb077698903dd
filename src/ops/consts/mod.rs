//! Precomputed range-reduction tables for the exponential and the logarithm.

mod e;

pub use e::E;
pub(crate) use e::E_ROOTS;

use crate::common::consts::ONE;
use crate::num::BigDec;
use core::cmp::Ordering;
use itertools::Itertools;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// The finest exponent step of the modifier table, 1/1024 as a decimal.
/// A working value closer to the reduction target than this step cannot be
/// improved by the table, so it bounds the reduction loops.
pub(crate) const TABLE_GRANULARITY: f64 = 0.00098;

// Exponent bookkeeping of the table runs in integer ticks of 1/1024,
// so combination sums stay exact.
const TICKS_PER_UNIT: i32 = 1024;

/// A range reduction step: `multiplier = e^exp`, with `exp` a sum of
/// negative powers of two.
pub(crate) struct ExpModifier {
    pub exp: BigDec,
    pub multiplier: BigDec,
    pub exp_f64: f64,
    pub multiplier_f64: f64,
}

lazy_static! {

    /// 1/1024
    static ref TICK: BigDec = "0.0009765625".parse().expect("constant TICK initialization");

    /// 0.00098, the reduction tolerance of the logarithm loop.
    pub(crate) static ref LN_SERIES_THRESHOLD: BigDec =
        "0.00098".parse().expect("constant LN_SERIES_THRESHOLD initialization");

    /// Modifiers sorted by exponent (and thus by multiplier).
    pub(crate) static ref EXP_MODIFIERS: Vec<ExpModifier> = generate_exp_modifiers();
}

// Searches small integer combinations of the e-root exponents
// {1, 1/2, 1/4, ..., 1/1024} for every reachable exponent value, keeping the
// combination with the smallest total magnitude whose multiplier stays inside
// [1/e, e]. Multipliers outside that window cannot bring a value from the
// (0, e) range closer to 1.
fn generate_exp_modifiers() -> Vec<ExpModifier> {
    let roots = &*E_ROOTS;
    let roots_f64: Vec<f64> = roots.iter().map(BigDec::to_f64).collect();

    // exponent of roots[i], in ticks
    let ticks: Vec<i32> = (0..roots.len())
        .map(|i| TICKS_PER_UNIT >> i)
        .collect();

    let limit_lo = 1.0 / std::f64::consts::E - 0.001;
    let limit_hi = std::f64::consts::E + 0.001;

    let mut best: HashMap<i32, (Vec<i32>, i32)> = HashMap::new();

    for first in -5i32..=5 {
        for rest in itertools::repeat_n(-1i32..=1, roots.len() - 1).multi_cartesian_product() {
            let mut exp_ticks = first * ticks[0];
            let mut full_count = first.abs();
            for (i, c) in rest.iter().enumerate() {
                exp_ticks += c * ticks[i + 1];
                full_count += c.abs();
            }

            // the offset is too small to be useful
            if exp_ticks.abs() <= 1 {
                continue;
            }

            if let Some((_, count)) = best.get(&exp_ticks) {
                if full_count >= *count {
                    continue;
                }
            }

            let mut multiplier = roots_f64[0].powi(first);
            for (i, c) in rest.iter().enumerate() {
                multiplier *= roots_f64[i + 1].powi(*c);
            }

            if multiplier < limit_lo || multiplier > limit_hi {
                continue;
            }

            let mut counts = Vec::with_capacity(roots.len());
            counts.push(first);
            counts.extend(rest.iter().copied());
            best.insert(exp_ticks, (counts, full_count));
        }
    }

    let inverses: Vec<BigDec> = roots
        .iter()
        .map(|m| ONE.div(m).expect("e-root inversion"))
        .collect();

    let mut table: Vec<ExpModifier> = best
        .into_iter()
        .map(|(exp_ticks, (counts, _))| {
            let mut multiplier = ONE.clone();
            for (i, count) in counts.iter().enumerate() {
                let unit = if *count >= 0 { &roots[i] } else { &inverses[i] };
                for _ in 0..count.abs() {
                    multiplier = multiplier.mul(unit);
                }
            }

            let multiplier = multiplier.round(E.max_precision());
            ExpModifier {
                exp: BigDec::from(exp_ticks).mul(&TICK),
                multiplier_f64: multiplier.to_f64(),
                multiplier,
                exp_f64: exp_ticks as f64 / TICKS_PER_UNIT as f64,
            }
        })
        .collect();

    table.sort_by(|a, b| {
        a.exp_f64
            .partial_cmp(&b.exp_f64)
            .unwrap_or(Ordering::Equal)
    });
    table
}

/// Picks the table entry whose multiplier brings `input` closest to 1.
/// `input` is expected to be positive and below `e`; values outside that
/// range clamp to the edge entries.
pub(crate) fn nearest_by_multiplier(input: f64) -> &'static ExpModifier {
    let table = &*EXP_MODIFIERS;

    if input < 1.0 / std::f64::consts::E {
        return table.last().expect("modifier table is not empty");
    }

    if input > std::f64::consts::E {
        return &table[0];
    }

    let wanted = 1.0 / input;
    let pivot = table.partition_point(|m| m.multiplier_f64 < wanted);

    window_min(table, pivot, |m| (1.0 - m.multiplier_f64 * input).abs())
}

/// Picks the table entry with the exponent closest to `x`.
pub(crate) fn nearest_by_exp(x: f64) -> &'static ExpModifier {
    let table = &*EXP_MODIFIERS;
    let pivot = table.partition_point(|m| m.exp_f64 < x);

    window_min(table, pivot, |m| (x - m.exp_f64).abs())
}

fn window_min(
    table: &'static [ExpModifier],
    pivot: usize,
    weight: impl Fn(&ExpModifier) -> f64,
) -> &'static ExpModifier {
    let from = pivot.saturating_sub(3);
    let to = (pivot + 4).min(table.len());

    let mut picked = &table[from];
    for item in &table[from..to] {
        if weight(item) < weight(picked) {
            picked = item;
        }
    }
    picked
}
