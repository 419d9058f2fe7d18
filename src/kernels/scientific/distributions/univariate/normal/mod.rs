// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Normal Distribution Module** - *Gaussian Tail Probabilities in Any Tier*
//!
//! The normal distribution `N(μ, σ²)` expressed through the complementary error function
//! of the chosen tier:
//!
//! ```text
//! F(x)     = ½ · erfc(−(x − μ) / (σ√2))
//! 1 − F(x) = ½ · erfc( (x − μ) / (σ√2))
//! ```
//!
//! Both tails are computed from `erfc` with a positive argument in the far tail, so neither
//! suffers cancellation against 1.
//!
//! ## Usage Examples
//! ```rust
//! use hpstats::{Extended, Normal, Real};
//!
//! let n = Normal::new(Extended::from_f64(0.0), Extended::from_f64(1.0)).unwrap();
//! let tail = n.cdf(&Extended::from_f64(-37.0));
//! assert!(tail.to_f64() > 0.0);
//! ```

use crate::errors::KernelError;
use crate::traits::real::Real;

/// Normal distribution with mean `mean` and standard deviation `std`.
#[derive(Clone, Debug)]
pub struct Normal<T> {
    mean: T,
    std: T,
    // σ√2
    erfc_scale: T,
}

impl<T: Real> Normal<T> {
    /// `mean` must be finite, `std` finite and strictly positive.
    pub fn new(mean: T, std: T) -> Result<Self, KernelError> {
        if !mean.is_finite() {
            return Err(KernelError::InvalidArguments(format!(
                "normal: mean must be finite, got {mean:?}"
            )));
        }
        if !(std > T::zero()) || !std.is_finite() {
            return Err(KernelError::InvalidArguments(format!(
                "normal: std must be finite and positive, got {std:?}"
            )));
        }
        let erfc_scale = std.clone() * T::from_f64(2.0).sqrt();
        Ok(Normal { mean, std, erfc_scale })
    }

    /// `P(X ≤ x)`.
    pub fn cdf(&self, x: &T) -> T {
        let u = (self.mean.clone() - x.clone()) / self.erfc_scale.clone();
        u.erfc() / T::from_f64(2.0)
    }

    /// `P(X > x)`.
    pub fn cdf_complement(&self, x: &T) -> T {
        let u = (x.clone() - self.mean.clone()) / self.erfc_scale.clone();
        u.erfc() / T::from_f64(2.0)
    }

    /// `exp(−z²/2) / (σ√(2π))` with `z = (x − μ)/σ`.
    pub fn pdf(&self, x: &T) -> T {
        let z = (x.clone() - self.mean.clone()) / self.std.clone();
        let norm = self.std.clone() * (T::from_f64(2.0) * T::pi()).sqrt();
        (-(z.clone() * z) / T::from_f64(2.0)).exp() / norm
    }
}
