// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Cauchy Combination Test** - *Aggregating Dependent p-values*
//!
//! Each p-value is mapped to a standard Cauchy variate, the variates are summed, and the
//! sum is mapped back through the Cauchy upper tail:
//!
//! ```text
//! T = Σ tan((½ − pᵢ)·π)
//! p = ½ − atan(T)/π
//! ```
//!
//! The statistic is an unweighted sum. A p-value of exactly ½ contributes nothing, and the
//! heavy Cauchy tail lets a single very small p-value dominate the result.
//!
//! Small p-values sit next to the pole of the tangent, so the transform is evaluated in the
//! chosen tier and only the final probability is rounded to a double.

use crate::traits::real::Real;

/// Cauchy combination of `p_values` evaluated in the tier `T`.
///
/// - Empty input is an empty sum and gives `0.5`.
/// - Any NaN or infinite input gives NaN.
/// - Exact `0` and `1` are not special-cased. Their tangents are huge but finite because
///   the tier's π is rounded.
pub fn cauchy_combination<T: Real>(p_values: &[f64]) -> f64 {
    if p_values.iter().any(|p| !p.is_finite()) {
        return f64::NAN;
    }
    let half = T::from_f64(0.5);
    let pi = T::pi();
    let statistic = p_values.iter().fold(T::zero(), |acc, &p| {
        acc + ((half.clone() - T::from_f64(p)) * pi.clone()).tan()
    });
    (half - statistic.atan() / pi).to_f64()
}
