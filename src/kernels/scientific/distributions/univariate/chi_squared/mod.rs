// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Chi-Squared Distribution** - *Tail Probabilities and Critical Values in Any Tier*
//!
//! The chi-squared distribution with an integer number of degrees of freedom, evaluated
//! in a chosen precision tier through the regularised incomplete gamma function.
//!
//! ### Parameters
//! - **`dof` (degrees of freedom)**: Shape parameter `k`, a positive integer
//!
//! ### Moment Properties
//! - **Mean**: `k`
//! - **Variance**: `2k`
//! - **Support**: `[0, ∞)`
//!
//! ## Relations
//! - `F(x; k) = P(k/2, x/2)`
//! - `1 − F(x; k) = Q(k/2, x/2)`
//! - `f(x; k) = ½ · g(x/2; k/2)` with `g` the unit-scale gamma density
//!
//! ## Applications
//! - **Hypothesis testing**: p-values of likelihood ratio and score statistics far in the tail
//! - **Critical values**: thresholds for very small significance levels

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::incomplete_gamma::{
    GammaShape, Tail, inverse_regularised_gamma, regularised_gamma,
};
use crate::traits::real::Real;

/// Chi-squared distribution with `dof` degrees of freedom in the tier `T`.
#[derive(Clone, Debug)]
pub struct ChiSquared<T> {
    dof: i32,
    shape: GammaShape<T>,
}

impl<T: Real> ChiSquared<T> {
    /// Builds the distribution. `dof` must be positive.
    pub fn new(dof: i32) -> Result<Self, KernelError> {
        if dof <= 0 {
            return Err(KernelError::InvalidArguments(format!(
                "chi_square: invalid dof {dof}"
            )));
        }
        Ok(ChiSquared { dof, shape: GammaShape::new(dof as u32) })
    }

    #[inline]
    pub fn dof(&self) -> i32 {
        self.dof
    }

    /// `P(X ≤ x)`.
    pub fn cdf(&self, x: &T) -> Result<T, KernelError> {
        let half_x = self.half_argument("chi_square_cdf", x)?;
        Ok(regularised_gamma(&self.shape, &half_x)?.p)
    }

    /// `P(X > x)`, evaluated directly rather than as `1 − cdf`.
    pub fn cdf_complement(&self, x: &T) -> Result<T, KernelError> {
        let half_x = self.half_argument("chi_square_cdf_complement", x)?;
        Ok(regularised_gamma(&self.shape, &half_x)?.q)
    }

    /// Density at `x`. With one degree of freedom the density is unbounded at the origin,
    /// which is reported as `KernelError::Overflow`.
    pub fn pdf(&self, x: &T) -> Result<T, KernelError> {
        let half_x = self.half_argument("chi_square_pdf", x)?;
        if half_x.is_zero() {
            return match self.dof {
                1 => Err(KernelError::Overflow(
                    "chi_square_pdf: density is unbounded at 0 for dof = 1".into(),
                )),
                2 => Ok(T::from_f64(0.5)),
                _ => Ok(T::zero()),
            };
        }
        let density = regularised_gamma(&self.shape, &half_x)?.density;
        Ok(density / T::from_f64(2.0))
    }

    /// The `x` with `P(X ≤ x) = p`. `p = 1` is `KernelError::Overflow`.
    pub fn quantile(&self, p: &T) -> Result<T, KernelError> {
        check_probability("chi_square_quantile", p)?;
        let half_x = inverse_regularised_gamma(&self.shape, p, Tail::Lower)?;
        Ok(half_x * T::from_f64(2.0))
    }

    /// The `x` with `P(X > x) = q`. `q = 0` is `KernelError::Overflow`.
    pub fn quantile_complement(&self, q: &T) -> Result<T, KernelError> {
        check_probability("chi_square_quantile_complement", q)?;
        let half_x = inverse_regularised_gamma(&self.shape, q, Tail::Upper)?;
        Ok(half_x * T::from_f64(2.0))
    }

    fn half_argument(&self, fname: &str, x: &T) -> Result<T, KernelError> {
        if !(*x >= T::zero()) || !x.is_finite() {
            return Err(KernelError::InvalidArguments(format!(
                "{fname}: x must be finite and non-negative, got {x:?}"
            )));
        }
        Ok(x.clone() / T::from_f64(2.0))
    }
}

fn check_probability<T: Real>(fname: &str, p: &T) -> Result<(), KernelError> {
    if !(*p >= T::zero() && *p <= T::one()) {
        return Err(KernelError::InvalidArguments(format!(
            "{fname}: probability must lie in [0, 1], got {p:?}"
        )));
    }
    Ok(())
}
