// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Tiered Kernels** - *Double-In, Double-Out Entry Points*
//!
//! Scalar kernels that widen their double arguments into a precision tier, evaluate there,
//! and round the result back to a double. The tier is fixed by the function name:
//!
//! | Suffix | Tier |
//! |---|---|
//! | *(none)* | `f64` |
//! | `_128b` | `Quad`, 113-bit significand |
//! | `_100d` | `Extended`, 334-bit significand |
//!
//! Complements (`1 − x`, `1 − CDF`) are always formed inside the tier, after widening, so
//! a tail that rounds to zero in double survives in the wider tiers. The complement is
//! still a difference from one: `1 − CDF` is a multiple of the tier's spacing below one
//! (`2^-113` for quad, `2^-334` for extended) and is exactly zero once the tail drops
//! below half of it, near `1e-101` in the extended tier.
//!
//! Unbounded quantiles are returned as `+∞` rather than as an overflow error. Every other
//! failure is a `KernelError`.

use num_traits::One;

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::univariate::cauchy::cauchy_combination;
use crate::kernels::scientific::distributions::univariate::chi_squared::ChiSquared;
use crate::kernels::scientific::distributions::univariate::normal::Normal;
use crate::precision::{Extended, Quad};
use crate::traits::real::Real;

/// Chi-squared quantile at probability `1 − x`, in double precision.
///
/// `x = 0`, or any `x` below `2^-54`, asks for the quantile at probability one, which is
/// unbounded: it returns `+∞` instead of an overflow error.
#[inline]
pub fn invchi2cdf_1mx(x: f64, dof: i32) -> Result<f64, KernelError> {
    invchi2cdf_1mx_tier::<f64>(x, dof)
}

/// Chi-squared quantile at probability `1 − x`, in quad precision.
///
/// `x = 0`, and any `x` below about `2^-114` where `1 − x` rounds to one, asks for the
/// quantile at probability one: it returns `+∞` instead of an overflow error.
#[inline]
pub fn invchi2cdf_1mx_128b(x: f64, dof: i32) -> Result<f64, KernelError> {
    invchi2cdf_1mx_tier::<Quad>(x, dof)
}

/// Chi-squared quantile at probability `1 − x`, in extended precision.
///
/// `1 − x` is exact in 334 bits for every `x` above about `2^-280`. Below about `2^-335`
/// it rounds to one, and like `x = 0` the unbounded quantile is returned as `+∞` instead
/// of an overflow error.
#[inline]
pub fn invchi2cdf_1mx_100d(x: f64, dof: i32) -> Result<f64, KernelError> {
    invchi2cdf_1mx_tier::<Extended>(x, dof)
}

/// `1 − CDF(x)` of chi-squared, in double precision.
#[inline]
pub fn onemin_chi2cdf(x: f64, dof: i32) -> Result<f64, KernelError> {
    onemin_chi2cdf_tier::<f64>(x, dof)
}

/// `1 − CDF(x)` of chi-squared, in quad precision.
///
/// Tails below about `5e-35` return `0`.
#[inline]
pub fn onemin_chi2cdf_128b(x: f64, dof: i32) -> Result<f64, KernelError> {
    onemin_chi2cdf_tier::<Quad>(x, dof)
}

/// `1 − CDF(x)` of chi-squared, in extended precision.
///
/// Tails below about `1.4e-101` (half of `2^-334`) return `0`.
#[inline]
pub fn onemin_chi2cdf_100d(x: f64, dof: i32) -> Result<f64, KernelError> {
    onemin_chi2cdf_tier::<Extended>(x, dof)
}

/// Normal CDF at `x` with mean `m` and standard deviation `s`, in extended precision.
///
/// `x = −∞` gives `0` and `x = +∞` gives `1`.
pub fn normcdf_100d(x: f64, m: f64, s: f64) -> Result<f64, KernelError> {
    let n = normal_100d("normcdf_100d", x, m, s)?;
    if x.is_infinite() {
        return Ok(if x > 0.0 { 1.0 } else { 0.0 });
    }
    Ok(n.cdf(&Extended::from_f64(x)).to_f64())
}

/// `1 − CDF(x)` of the normal distribution, in extended precision.
///
/// `x = −∞` gives `1` and `x = +∞` gives `0`.
pub fn onemin_normcdf_100d(x: f64, m: f64, s: f64) -> Result<f64, KernelError> {
    let n = normal_100d("onemin_normcdf_100d", x, m, s)?;
    if x.is_infinite() {
        return Ok(if x > 0.0 { 0.0 } else { 1.0 });
    }
    Ok((Extended::one() - n.cdf(&Extended::from_f64(x))).to_f64())
}

/// Cauchy combination of `x`, in extended precision.
#[inline]
pub fn cauchytest_100d(x: &[f64]) -> f64 {
    cauchy_combination::<Extended>(x)
}

fn invchi2cdf_1mx_tier<T: Real>(x: f64, dof: i32) -> Result<f64, KernelError> {
    if !(0.0..=1.0).contains(&x) {
        return Err(KernelError::InvalidArguments(format!(
            "chi_square_quantile: 1 - x must lie in [0, 1], got x = {x}"
        )));
    }
    let chi2 = ChiSquared::<T>::new(dof)?;
    let p = T::one() - T::from_f64(x);
    match chi2.quantile(&p) {
        Ok(q) => Ok(q.to_f64()),
        Err(KernelError::Overflow(_)) => Ok(f64::INFINITY),
        Err(e) => Err(e),
    }
}

fn onemin_chi2cdf_tier<T: Real>(x: f64, dof: i32) -> Result<f64, KernelError> {
    if !(x >= 0.0 && x.is_finite()) {
        return Err(KernelError::InvalidArguments(format!(
            "chi_square_cdf: x must be finite and non-negative, got {x}"
        )));
    }
    let chi2 = ChiSquared::<T>::new(dof)?;
    let cdf = chi2.cdf(&T::from_f64(x))?;
    Ok((T::one() - cdf).to_f64())
}

// Parameters are checked in double before widening: NaN has no multiprecision value.
fn normal_100d(fname: &str, x: f64, m: f64, s: f64) -> Result<Normal<Extended>, KernelError> {
    if x.is_nan() {
        return Err(KernelError::InvalidArguments(format!("{fname}: x is NaN")));
    }
    if !m.is_finite() || !(s > 0.0 && s.is_finite()) {
        return Err(KernelError::InvalidArguments(format!(
            "{fname}: invalid mean {m} or standard deviation {s}"
        )));
    }
    Normal::new(Extended::from_f64(m), Extended::from_f64(s))
}
