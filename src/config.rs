// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Precision Tiers and Iteration Limits*
//!
//! Compile-time constants controlling the precision tiers and the iteration budgets
//! of the series, continued fractions and root finders.

/// Significand bits of the quad tier (IEEE binary128 layout).
pub const QUAD_BITS: usize = 113;

/// Significand bits of the extended tier.
///
/// 334 bits carry at least 100 significant decimal digits.
pub const EXTENDED_BITS: usize = 334;

/// Guard bits added while evaluating transcendental functions in the multiprecision tiers.
///
/// Results are rounded back to the tier afterwards.
pub const GUARD_BITS: usize = 32;

/// Upper bound on terms for the incomplete gamma series and continued fraction.
///
/// Reaching it returns `KernelError::Convergence` instead of looping on pathological input.
pub const MAX_SERIES_ITERATIONS: usize = 1_000_000;

/// Upper bound on safeguarded Newton steps when inverting the incomplete gamma function.
pub const MAX_ROOT_ITERATIONS: usize = 200;
