//! # **Scalar Distribution Utilities Module** - *Double-Precision Seeds and Exact Log-Gamma*
//!
//! Scalar building blocks shared by the distribution kernels:
//! - double-precision approximations (`ln_gamma`, `inv_std_normal`) that seed the
//!   tiered root finders,
//! - `ln_gamma_half`, the log-gamma function at integer and half-integer arguments in
//!   any precision tier, built from exact factor products.

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use crate::kernels::scientific::distributions::shared::constants::*;
use crate::traits::real::Real;

/// Natural log of the Gamma function for `x >= 0.5`.
///
/// Lanczos approximation (g = 7, n = 9). Used for seeds only, where a relative
/// accuracy near 1e-15 is ample.
#[inline(always)]
pub fn ln_gamma(x: f64) -> f64 {
    debug_assert!(x >= 0.5);
    let z = x - 1.0; // shift to minimise cancellation
    let mut a = COF[0];
    for (i, &c) in COF.iter().enumerate().skip(1) {
        a += c / (z + i as f64);
    }
    let t = z + 7.5; // g + ½  with g = 7
    HALF_LOG_TWO_PI + (z + 0.5) * t.ln() - t + a.ln()
}

/// Computes the inverse standard normal cumulative distribution function (quantile function).
///
/// Acklam's rational approximation, relative error below 1.15e-9.
///
/// # Domain and Range
/// - **Domain**: p ∈ (0, 1)
/// - **Range**: z ∈ (-∞, ∞)
/// - **Special cases**: `p` outside `(0, 1)` or NaN returns NaN
#[inline(always)]
pub fn inv_std_normal(p: f64) -> f64 {
    if !(p > 0.0 && p < 1.0) {
        return f64::NAN;
    }
    let (q, sign) = if p < 0.5 { (p, 1.0) } else { (1.0 - p, -1.0) };
    let x = if q < P_LOW {
        let t = (-2.0 * q.ln()).sqrt();
        (((((C[0] * t + C[1]) * t + C[2]) * t + C[3]) * t + C[4]) * t + C[5])
            / ((((D[0] * t + D[1]) * t + D[2]) * t + D[3]) * t + 1.0)
    } else {
        let t = q - 0.5;
        let r = t * t;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * t
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    };
    sign * x
}

/// ln Γ(twice / 2) in the precision tier `T`, for `twice >= 1`.
///
/// Uses `Γ(n) = (n−1)!` and `Γ(m + ½) = √π · Π_{k=1..m} (k − ½)`. Every factor is exact
/// in the tier, so the only rounding is one multiplication per factor plus the final
/// logarithms. The running product is folded into the logarithm whenever it passes
/// `T::product_limit()`. From `STIRLING_MIN_TWICE` on, the Stirling series replaces the
/// products, whose cost grows with the argument.
pub fn ln_gamma_half<T: Real>(twice: u32) -> T {
    debug_assert!(twice >= 1);
    if twice >= STIRLING_MIN_TWICE {
        ln_gamma_stirling(twice)
    } else {
        ln_gamma_product(twice)
    }
}

fn ln_gamma_product<T: Real>(twice: u32) -> T {
    let half = T::from_f64(0.5);
    let limit = T::product_limit();

    let (mut acc, first, last, offset) = if twice % 2 == 0 {
        // (n-1)! for n = twice/2, factors 2..=n-1
        (T::zero(), 2, twice / 2 - 1, T::zero())
    } else {
        // √π · Π (k - ½), factors k = 1..=m
        (half.clone() * T::pi().ln(), 1, (twice - 1) / 2, half.clone())
    };

    let mut prod = T::one();
    let mut k = first;
    while k <= last {
        prod = prod * (T::from_f64(k as f64) - offset.clone());
        if prod > limit {
            acc = acc + prod.ln();
            prod = T::one();
        }
        k += 1;
    }
    if prod.is_one() { acc } else { acc + prod.ln() }
}

/// `(a − ½)·ln a − a + ½·ln 2π + Σ B_2k / (2k(2k−1)·a^(2k−1))` with `a = twice / 2`.
fn ln_gamma_stirling<T: Real>(twice: u32) -> T {
    let half = T::from_f64(0.5);
    let a = T::from_f64(twice as f64) * half.clone();
    let inv = T::one() / a.clone();
    let inv2 = inv.clone() * inv.clone();

    let mut power = inv;
    let mut series = T::zero();
    for (i, &(num, den)) in BERNOULLI.iter().enumerate() {
        let two_k = 2.0 * (i + 1) as f64;
        let coeff = T::from_f64(num) / T::from_f64(den * two_k * (two_k - 1.0));
        series = series + coeff * power.clone();
        power = power * inv2.clone();
    }

    let two_pi = T::pi() * T::from_f64(2.0);
    (a.clone() - half.clone()) * a.ln() - a + half * two_pi.ln() + series
}
