// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Tail Probabilities in Chosen Precision Tiers*
//!
//! Distribution descriptors and the special functions behind them, written once against
//! the `Real` trait and instantiated for double, quad and extended precision.
//!
//! ## Core Statistical Functions
//! - **Cumulative distribution functions**: both tails, each computed without cancellation
//! - **Quantile functions**: safeguarded Newton iteration on the log of the smaller tail
//! - **Densities**: for the continuous families
//! - **Combination tests**: Cauchy aggregation of p-values
//!
//! ## Numerical Precision and Stability
//! Each tier carries its own significand width through every intermediate value. Double
//! precision approximations only seed iterations, which then converge in the tier.
//! See `./tests` for the tolerances measured against mpmath.
//!
//! ## Disclaimer
//! This implementation is provided on a best-effort basis and is intended for
//! general scientific and engineering use. We make no guarantees as to correctness,
//! fitness for any particular purpose, or suitability for uses such as in
//! life-critical, safety-critical, or financial applications.
//!
//! By using these functions, you accept all responsibility for outcomes or decisions
//! based upon its results.

/// # **Shared Distribution Utilities** - *Special Functions for Every Tier*
///
/// ## Modules
/// - **`constants`**: Seed approximation coefficients
/// - **`scalar`**: Double-precision seeds and the exact half-integer log-gamma
/// - **`incomplete_gamma`**: Regularised incomplete gamma function and its inverse
pub mod shared {
    pub mod constants;
    pub mod incomplete_gamma;
    pub mod scalar;
}

/// # **Univariate Distributions** - *Single-Variable Probability Distributions*
///
/// - **Continuous**: chi-squared, normal
/// - **Combination**: Cauchy combination test
pub mod univariate {
    pub mod cauchy;
    pub mod chi_squared;
    pub mod normal;
}
