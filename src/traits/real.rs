//! # **Real trait** - *Arithmetic capability set of a precision tier*

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::kernels::scientific::erf;

/// Generic trait for the real-number types the distribution kernels are written against.
///
/// Unifies IEEE double precision and the multiprecision tiers, so a single
/// implementation of every special function serves all of them.
///
/// # Implementation Requirements
/// - Every arithmetic result is rounded to the tier's significand width.
/// - `from_f64` is exact for finite input.
/// - Transcendental functions are accurate to a few units in the last place of the tier.
///
/// Callers guarantee finite arguments and non-zero divisors. Values outside a
/// function's domain (`ln` of a non-positive number, `tan` at a pole) are
/// computation faults for the multiprecision tiers and panic there.
pub trait Real:
    Clone
    + PartialOrd
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Significand width in bits, including the implicit leading bit.
    const MANTISSA_BITS: usize;

    /// Widens a finite double exactly.
    fn from_f64(x: f64) -> Self;

    /// Rounds to the nearest double, ties to even.
    fn to_f64(&self) -> f64;

    /// Distance from 1 to the next representable value, `2^(1 - MANTISSA_BITS)`.
    fn epsilon() -> Self;

    /// Largest running product the log-gamma accumulator holds before folding it into a logarithm.
    fn product_limit() -> Self;

    fn pi() -> Self;
    fn abs(&self) -> Self;
    fn sqrt(&self) -> Self;
    fn exp(&self) -> Self;
    fn ln(&self) -> Self;
    fn tan(&self) -> Self;
    fn atan(&self) -> Self;
    fn erfc(&self) -> Self;
    fn is_finite(&self) -> bool;
}

/// IEEE 754 double precision, delegating to the platform maths library.
impl Real for f64 {
    const MANTISSA_BITS: usize = f64::MANTISSA_DIGITS as usize;

    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        x
    }

    #[inline(always)]
    fn to_f64(&self) -> f64 {
        *self
    }

    #[inline(always)]
    fn epsilon() -> Self {
        f64::EPSILON
    }

    #[inline(always)]
    fn product_limit() -> Self {
        // 2^900 leaves headroom for one more factor below f64::MAX.
        f64::from_bits(((1023 + 900) as u64) << 52)
    }

    #[inline(always)]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline(always)]
    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    #[inline(always)]
    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }

    #[inline(always)]
    fn exp(&self) -> Self {
        f64::exp(*self)
    }

    #[inline(always)]
    fn ln(&self) -> Self {
        f64::ln(*self)
    }

    #[inline(always)]
    fn tan(&self) -> Self {
        f64::tan(*self)
    }

    #[inline(always)]
    fn atan(&self) -> Self {
        f64::atan(*self)
    }

    #[inline(always)]
    fn erfc(&self) -> Self {
        erf::erfc(*self)
    }

    #[inline(always)]
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}
