// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *Double-Precision Seed Coefficients*
//!
//! Coefficients for the double-precision approximations that seed the tiered
//! iterations. Seeds only need a few correct digits; the tier refines them.

// ******** Acklam inverse normal ***********************************/

/// Acklam's inverse normal CDF approximation coefficients (numerator polynomial).
///
/// Rational function coefficients for the central probability region
/// 0.02425 < p < 0.97575 of Peter John Acklam's approximation to Φ⁻¹(p).
pub(crate) const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (denominator polynomial).
pub(crate) const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

/// Acklam's inverse normal CDF approximation coefficients (tail region numerator).
///
/// Used when p < 0.02425 or p > 0.97575, beyond roughly ±2σ.
pub(crate) const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (tail region denominator).
pub(crate) const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Lower probability threshold separating Acklam's central and tail regions.
pub(crate) const P_LOW: f64 = 0.02425;

// ******** Lanczos log-gamma ***************************************/

/// Lanczos approximation coefficients, g = 7 and n = 9.
pub(crate) const COF: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Half of the natural logarithm of 2π: ½ln(2π) ≈ 0.918938533204673.
pub(crate) const HALF_LOG_TWO_PI: f64 = 0.918_938_533_204_672_741_780_329_736_406;

// ******** Stirling log-gamma **************************************/

/// Smallest `2a` at which `ln_gamma_half` switches from exact products to the Stirling series.
///
/// From `a = 10^5` the first omitted term is below `1e-103`.
pub(crate) const STIRLING_MIN_TWICE: u32 = 200_000;

/// Bernoulli numbers `B_2 … B_20` as exact (numerator, denominator) pairs.
pub(crate) const BERNOULLI: [(f64, f64); 10] = [
    (1.0, 6.0),
    (-1.0, 30.0),
    (1.0, 42.0),
    (-1.0, 30.0),
    (5.0, 66.0),
    (-691.0, 2730.0),
    (7.0, 6.0),
    (-3617.0, 510.0),
    (43867.0, 798.0),
    (-174611.0, 330.0),
];

// ******** Seed selection ******************************************/

/// Smallest tail probability seeded from the Wilson–Hilferty cube.
///
/// Below it the power-law and exponential asymptotes of the incomplete gamma tails are closer.
pub(crate) const WILSON_HILFERTY_MIN_TAIL: f64 = 1e-3;
