// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **hpstats** - *Tiered-Precision Tail Probabilities*
//!
//! Chi-squared and normal tail probabilities, chi-squared critical values and the Cauchy
//! combination test, each evaluated at a fixed precision tier:
//!
//! - double (`f64`);
//! - quad (`Quad`, 113-bit significand);
//! - extended (`Extended`, 334-bit significand, at least 100 decimal digits).
//!
//! Double arguments are widened before any complement is formed, so tails that round to
//! zero in double precision keep their value in the wider tiers, down to the spacing of
//! the tier below one (about `1e-101` for extended).
//!
//! ```rust
//! use hpstats::{onemin_chi2cdf, onemin_chi2cdf_100d};
//!
//! // The chi-squared(1) survival at 400 is about 5.5e-89.
//! assert_eq!(onemin_chi2cdf(400.0, 1).unwrap(), 0.0);
//! assert!(onemin_chi2cdf_100d(400.0, 1).unwrap() > 0.0);
//! // At 500 it is about 1e-110, below the extended spacing.
//! assert_eq!(onemin_chi2cdf_100d(500.0, 1).unwrap(), 0.0);
//! ```
//!
//! The distributions are generic over `Real` and can be used directly:
//!
//! ```rust
//! use hpstats::{ChiSquared, Quad, Real};
//!
//! let chi2 = ChiSquared::<Quad>::new(3).unwrap();
//! let x = chi2.quantile_complement(&Quad::from_f64(1e-20)).unwrap();
//! assert!(x.to_f64() > 90.0);
//! ```

pub mod kernels {
    pub mod scientific {
        pub mod distributions;
        pub mod erf;
    }
    pub mod tiered;
}

pub mod traits {
    pub mod real;
}

pub mod config;
pub mod errors;
pub mod precision;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use errors::KernelError;
pub use kernels::scientific::distributions::univariate::cauchy::cauchy_combination;
pub use kernels::scientific::distributions::univariate::chi_squared::ChiSquared;
pub use kernels::scientific::distributions::univariate::normal::Normal;
pub use kernels::tiered::{
    cauchytest_100d, invchi2cdf_1mx, invchi2cdf_1mx_100d, invchi2cdf_1mx_128b,
    normcdf_100d, onemin_chi2cdf, onemin_chi2cdf_100d, onemin_chi2cdf_128b,
    onemin_normcdf_100d,
};
pub use precision::{Extended, Quad};
pub use traits::real::Real;
