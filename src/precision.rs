// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Precision Tiers** - *Fixed-Width Multiprecision Reals*
//!
//! Binary floating point numbers with a compile-time significand width, built on
//! `dashu_float::FBig`. Every value is carried at exactly `BITS` bits and every
//! operation rounds half-to-even back to that width, so a tier behaves like a wider
//! IEEE format with an unbounded exponent.
//!
//! ## Tiers
//! - **`Quad`**: 113-bit significand, the binary128 layout (about 34 decimal digits)
//! - **`Extended`**: 334-bit significand (at least 100 decimal digits)
//!
//! ## Transcendental functions
//! `exp`, `ln` and `sqrt` come from dashu. `pi`, `tan`, `atan` and `erfc` are
//! evaluated here on dashu arithmetic at `BITS + GUARD_BITS` and rounded once at the end:
//! - **pi**: Machin's formula `16·atan(1/5) − 4·atan(1/239)`, computed once at 1024 bits
//! - **tan**: quadrant reduction by a guarded π/2, Taylor sine and cosine
//! - **atan**: reciprocal for `|x| > 1`, argument halving, Taylor series
//! - **erfc**: positive-term erf series near the origin, Laplace continued fraction in the tail

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::OnceLock;

use dashu_base::{Abs, EstimatedLog2, SquareRoot};
use dashu_float::FBig;
use dashu_float::round::mode::HalfEven;
use num_traits::{One, Zero};

use crate::config::{EXTENDED_BITS, GUARD_BITS, QUAD_BITS};
use crate::traits::real::Real;

type Big = FBig<HalfEven, 2>;

/// Quad precision: 113-bit significand.
pub type Quad = Multiprecision<QUAD_BITS>;

/// Extended precision: 334-bit significand, at least 100 decimal digits.
pub type Extended = Multiprecision<EXTENDED_BITS>;

/// Arguments of `erfc` beyond this magnitude saturate to `0` (or `2` below zero).
///
/// `erfc(2^24)` is far below `2^-(2^47)`, which no tier converts to a non-zero double,
/// and the exponent of `exp(-x²)` would otherwise leave the range dashu can shift.
const ERFC_SATURATION: f64 = 16_777_216.0;

/// Largest integer part, in bits, that `tan` reduces by π/2.
const MAX_REDUCTION_BITS: usize = 1 << 16;

/// Width of the shared π. Narrower requests round it, wider ones recompute.
const PI_CACHE_BITS: usize = 1024;

static PI: OnceLock<Big> = OnceLock::new();

/// A real number carried at exactly `BITS` significand bits.
#[derive(Clone, PartialEq, PartialOrd)]
pub struct Multiprecision<const BITS: usize>(Big);

impl<const BITS: usize> Multiprecision<BITS> {
    /// Round to `BITS` significand bits, half to even.
    #[inline]
    fn round(v: Big) -> Self {
        // dashu keeps one extra digit after a cancelling subtraction and only rounds when
        // the context shrinks, so widen first to force the shrink.
        let v = if v.digits() > BITS && v.precision() <= BITS {
            v.with_precision(BITS + 1).value()
        } else {
            v
        };
        Multiprecision(v.with_precision(BITS).value())
    }
}

impl<const BITS: usize> fmt::Debug for Multiprecision<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiprecision<{}>({:e})", BITS, self.0.to_f64().value())
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident) => {
        impl<const BITS: usize> $trait for Multiprecision<BITS> {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::round($trait::$method(self.0, rhs.0))
            }
        }
    };
}

impl_binop!(Add, add);
impl_binop!(Sub, sub);
impl_binop!(Mul, mul);
impl_binop!(Div, div);

impl<const BITS: usize> Neg for Multiprecision<BITS> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Multiprecision(-self.0)
    }
}

impl<const BITS: usize> Zero for Multiprecision<BITS> {
    #[inline]
    fn zero() -> Self {
        Multiprecision(at(&Big::ZERO, BITS))
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.repr().is_zero()
    }
}

impl<const BITS: usize> One for Multiprecision<BITS> {
    #[inline]
    fn one() -> Self {
        Multiprecision(at(&Big::ONE, BITS))
    }
}

impl<const BITS: usize> Real for Multiprecision<BITS> {
    const MANTISSA_BITS: usize = BITS;

    fn from_f64(x: f64) -> Self {
        let v = Big::try_from(x).expect("from_f64: NaN has no multiprecision value");
        assert!(v.repr().is_finite(), "from_f64: infinite input");
        Multiprecision(at(&v, BITS))
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    #[inline]
    fn epsilon() -> Self {
        Multiprecision(at(&Big::ONE, BITS) >> (BITS as isize - 1))
    }

    #[inline]
    fn product_limit() -> Self {
        Multiprecision(at(&Big::ONE, BITS) << 65_536)
    }

    fn pi() -> Self {
        Self::round(pi(BITS + GUARD_BITS))
    }

    #[inline]
    fn abs(&self) -> Self {
        Multiprecision(self.0.clone().abs())
    }

    #[inline]
    fn sqrt(&self) -> Self {
        Self::round(self.0.sqrt())
    }

    fn exp(&self) -> Self {
        Self::round(at(&self.0, BITS + GUARD_BITS).exp())
    }

    fn ln(&self) -> Self {
        Self::round(at(&self.0, BITS + GUARD_BITS).ln())
    }

    fn tan(&self) -> Self {
        Self::round(tan(&self.0, BITS))
    }

    fn atan(&self) -> Self {
        Self::round(atan(&self.0, BITS + GUARD_BITS))
    }

    fn erfc(&self) -> Self {
        Self::round(erfc(&self.0, BITS))
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.0.repr().is_finite()
    }
}

// Working-precision helpers. Every function takes the precision it evaluates at.

#[inline]
fn at(x: &Big, bits: usize) -> Big {
    x.clone().with_precision(bits).value()
}

#[inline]
fn int(n: u64, bits: usize) -> Big {
    at(&Big::from(n), bits)
}

/// `|term| <= |sum|·2^-bits`: the term no longer changes a `bits`-bit sum.
#[inline]
fn negligible(term: &Big, sum: &Big, bits: usize) -> bool {
    let scaled = sum.clone().abs() >> bits as isize;
    term.clone().abs().cmp(&scaled) != Ordering::Greater
}

/// Approximate `log2|x|`, or `None` for zero.
#[inline]
fn log2_magnitude(x: &Big) -> Option<f32> {
    if x.repr().is_zero() {
        None
    } else {
        Some(x.log2_est())
    }
}

/// `atan(1/n)` by its alternating Taylor series.
fn atan_inv(n: u64, bits: usize) -> Big {
    let n2 = int(n * n, bits);
    let mut power = int(1, bits) / int(n, bits);
    let mut sum = power.clone();
    let mut k: u64 = 1;
    loop {
        power = power / &n2;
        let term = &power / (2 * k + 1);
        if negligible(&term, &sum, bits) {
            return sum;
        }
        sum = if k % 2 == 1 { sum - term } else { sum + term };
        k += 1;
    }
}

/// π at `bits`, rounded from the shared value when it is wide enough.
fn pi(bits: usize) -> Big {
    if bits + 8 <= PI_CACHE_BITS {
        at(PI.get_or_init(|| machin_pi(PI_CACHE_BITS)), bits)
    } else {
        machin_pi(bits)
    }
}

fn machin_pi(bits: usize) -> Big {
    let work = bits + 8;
    let machin = atan_inv(5, work) * 16u8 - atan_inv(239, work) * 4u8;
    at(&machin, bits)
}

/// Nearest multiple `k` of π/2 and the remainder `x − k·π/2`.
fn reduce_half_pi(x: &Big, bits: usize) -> (Big, Big) {
    let half_pi = pi(bits) >> 1;
    let k = (x / &half_pi).round();
    let y = x - &k * &half_pi;
    (k, y)
}

/// Taylor sine and cosine for `|y| <= π/4`.
fn sin_cos(y: &Big, bits: usize) -> (Big, Big) {
    let y2 = y * y;

    let mut term = y.clone();
    let mut sin = y.clone();
    let mut n: u64 = 1;
    loop {
        term = -(term * &y2) / ((2 * n) * (2 * n + 1));
        if negligible(&term, &sin, bits) {
            break;
        }
        sin += term.clone();
        n += 1;
    }

    let mut term = int(1, bits);
    let mut cos = term.clone();
    let mut n: u64 = 1;
    loop {
        term = -(term * &y2) / ((2 * n - 1) * (2 * n));
        if negligible(&term, &cos, bits) {
            break;
        }
        cos += term.clone();
        n += 1;
    }
    (sin, cos)
}

fn tan(x: &Big, bits: usize) -> Big {
    if x.repr().is_zero() {
        return at(x, bits);
    }
    let int_bits = log2_magnitude(x).map_or(0, |l| l.max(0.0) as usize + 1);
    assert!(int_bits <= MAX_REDUCTION_BITS, "tan: argument too large to reduce");
    let mut work = bits + GUARD_BITS + int_bits;
    let x = at(x, work);

    let (mut k, mut y) = reduce_half_pi(&x, work);
    // Near a multiple of π/2 the remainder cancels; redo it with the lost bits restored.
    if let Some(l) = log2_magnitude(&y) {
        if !k.repr().is_zero() && l < -((GUARD_BITS / 2) as f32) {
            work += (-l) as usize + GUARD_BITS;
            let x = at(&x, work);
            (k, y) = reduce_half_pi(&x, work);
        }
    }

    let (sin, cos) = sin_cos(&y, work);
    let odd = !(&k / 2u8).fract().repr().is_zero();
    if odd {
        assert!(!sin.repr().is_zero(), "tan: argument is a pole at working precision");
        -(cos / sin)
    } else {
        sin / cos
    }
}

fn atan(x: &Big, bits: usize) -> Big {
    if x.repr().is_zero() {
        return at(x, bits);
    }
    let negative = x < &Big::ZERO;
    let mut z = at(x, bits).abs();
    let one = int(1, bits);
    let reciprocal = z > one;
    if reciprocal {
        z = &one / z;
    }

    // atan(z) = 2·atan(z / (1 + sqrt(1 + z²)))
    let threshold = one.clone() >> 8;
    let mut halvings: isize = 0;
    while z > threshold {
        z = &z / (&one + (&one + &z * &z).sqrt());
        halvings += 1;
    }

    let z2 = &z * &z;
    let mut power = z.clone();
    let mut sum = z.clone();
    let mut k: u64 = 1;
    loop {
        power = -(power * &z2);
        let term = &power / (2 * k + 1);
        if negligible(&term, &sum, bits) {
            break;
        }
        sum += term;
        k += 1;
    }
    let mut r = sum << halvings;
    if reciprocal {
        r = (pi(bits) >> 1) - r;
    }
    if negative { -r } else { r }
}

fn erfc(x: &Big, bits: usize) -> Big {
    if x.repr().is_zero() {
        return int(1, bits);
    }
    if x < &Big::ZERO {
        let work = bits + GUARD_BITS;
        return int(2, work) - erfc(&-x.clone(), work);
    }
    let xf = x.to_f64().value();
    if xf >= ERFC_SATURATION {
        return at(&Big::ZERO, bits);
    }

    let x2f = xf * xf;
    if x2f < bits as f64 / 8.0 {
        // erf(x) = 2/√π · e^{-x²} · Σ (2x²)^n x / (1·3·…·(2n+1)), every term positive.
        let work = bits + GUARD_BITS + (1.45 * x2f) as usize + 1;
        let x = at(x, work);
        let x2 = &x * &x;
        let two_x2 = &x2 * 2u8;
        let mut term = x.clone();
        let mut sum = x;
        let mut n: u64 = 1;
        loop {
            term = term * &two_x2 / (2 * n + 1);
            if negligible(&term, &sum, work) {
                break;
            }
            sum += term.clone();
            n += 1;
        }
        let pi = pi(work);
        let erf = sum * 2u8 * (-x2).exp() / pi.sqrt();
        return int(1, work) - erf;
    }

    // Laplace continued fraction: erfc(x) = e^{-x²}/√π · 1/(x + (1/2)/(x + 1/(x + (3/2)/(x + …))))
    // evaluated by modified Lentz.
    let work = bits + GUARD_BITS;
    let x = at(x, work);
    let one = int(1, work);
    let tiny = one.clone() >> (2 * work) as isize;
    let mut f = x.clone();
    let mut c = f.clone();
    let mut d = at(&Big::ZERO, work);
    let mut n: u64 = 1;
    loop {
        let a = int(n, work) >> 1;
        d = &x + &a * d;
        if d.repr().is_zero() {
            d = tiny.clone();
        }
        c = &x + a / c;
        if c.repr().is_zero() {
            c = tiny.clone();
        }
        d = &one / d;
        let delta = &c * &d;
        f *= delta.clone();
        if negligible(&(delta - &one), &one, work) {
            break;
        }
        n += 1;
    }
    let x2 = &x * &x;
    (-x2).exp() / (pi(work).sqrt() * f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: &Extended, e: &Extended) -> f64 {
        ((a.clone() - e.clone()) / e.clone()).abs().to_f64()
    }

    #[test]
    fn widening_is_exact() {
        let v = 0.1_f64;
        assert_eq!(Quad::from_f64(v).to_f64(), v);
        assert_eq!(Extended::from_f64(-3.75e-200).to_f64(), -3.75e-200);
        assert!(Extended::zero().is_zero());
    }

    #[test]
    fn one_minus_tiny_survives_in_extended() {
        let x = 1e-40;
        let p = Extended::one() - Extended::from_f64(x);
        let back = Extended::one() - p;
        assert_eq!(back.to_f64(), x);
        let p = Quad::one() - Quad::from_f64(x);
        assert!((Quad::one() - p).is_zero());
    }

    #[test]
    fn arithmetic_rounds_to_tier() {
        // 1 − 1e-30 lies between multiples of 2^-113; the difference back from one is the
        // nearest one, 10385·2^-113.
        let p = Quad::one() - Quad::from_f64(1e-30);
        let back = Quad::one() - p;
        assert_eq!(back.to_f64(), 10385.0 * 2f64.powi(-113));
        assert!(back.0.digits() <= QUAD_BITS);

        let p = Extended::one() - Extended::from_f64(1e-30);
        assert!(p.0.digits() <= EXTENDED_BITS);
        let third = Quad::one() / Quad::from_f64(3.0);
        assert!(third.0.digits() <= QUAD_BITS);
    }

    #[test]
    fn epsilon_is_tier_ulp() {
        let eps = Quad::epsilon();
        assert_eq!(eps.to_f64(), 2f64.powi(-112));
        let one = Quad::one();
        assert!(one.clone() + eps.clone() > one);
        let half = eps / Quad::from_f64(2.0);
        assert!(!(one.clone() + half > one));
    }

    #[test]
    fn pi_tan_atan_consistent() {
        let pi = Extended::pi();
        assert_eq!(pi.to_f64(), std::f64::consts::PI);
        // tan(π/4) = 1, atan(1) = π/4
        let quarter = pi.clone() / Extended::from_f64(4.0);
        assert!(rel(&quarter.tan(), &Extended::one()) < 1e-98);
        assert!(rel(&Extended::one().atan(), &quarter) < 1e-98);
        // atan is odd and saturates at ±π/2
        let big = Extended::from_f64(1e80).atan();
        let half = pi / Extended::from_f64(2.0);
        assert!(rel(&big, &half) < 1e-79);
        assert!(rel(&(-Extended::from_f64(0.3)).atan(), &-(Extended::from_f64(0.3).atan())) < 1e-99);
    }

    /// Sum of a non-overlapping double expansion, exact to the 334-bit tier.
    fn expansion(parts: &[f64]) -> Extended {
        parts.iter().rev().fold(Extended::zero(), |acc, &p| acc + Extended::from_f64(p))
    }

    #[test]
    fn shared_pi_matches_machin() {
        for bits in [64, 146, 366, 1000, 1100] {
            let ulp = int(1, bits) >> (bits as isize - 2);
            let diff = (pi(bits) - machin_pi(bits)).abs();
            assert!(diff <= ulp, "bits={bits}");
        }
        assert!(PI.get().is_some());
    }

    // mpmath references at 800 bits, split into double expansions.
    #[test]
    fn pi_to_hundred_digits() {
        let expect = expansion(&[
            3.141592653589793, 1.2246467991473532e-16, -2.9947698097183397e-33,
            1.1124542208633653e-49, 5.672231979640316e-66, 1.7449862161352486e-83,
            6.02937273224954e-100, 1.91012354687999e-116,
        ]);
        assert!(rel(&Extended::pi(), &expect) < 1e-99);
    }

    #[test]
    fn tan_to_hundred_digits() {
        let cases: [(f64, [f64; 8]); 4] = [
            (0.7, [
                0.8422883804630794, -3.9128846706146343e-17, 2.291310853423559e-34,
                2.0186416975930496e-50, -5.980046265457129e-67, 2.5514835922251318e-83,
                -7.650340661789874e-100, -5.013650948933974e-116,
            ]),
            (-2.5, [
                0.7470222972386603, -3.6166133011893774e-17, -2.056559018110963e-33,
                7.82329837910019e-50, 3.558617682888968e-66, -1.2490716145838801e-82,
                -1.2504262282328592e-99, 2.55625674131324e-116,
            ]),
            (10.0, [
                0.6483608274590866, 4.076151603893501e-17, -5.510911949504599e-34,
                -2.7950799757012754e-50, 2.346543748014866e-67, 2.373422555200622e-84,
                1.2716408242079287e-100, 1.1478027660848711e-116,
            ]),
            (1e6, [
                -0.373624453987599, -3.578451556475479e-18, -1.6077198021185367e-34,
                -1.0502706850880218e-50, -5.156528695108587e-67, -5.94613281115876e-84,
                1.3210207015571128e-100, -5.937571868017582e-117,
            ]),
        ];
        for (x, parts) in cases {
            let got = Extended::from_f64(x).tan();
            assert!(rel(&got, &expansion(&parts)) < 1e-98, "tan({x})");
        }
    }

    #[test]
    fn atan_to_hundred_digits() {
        let cases: [(f64, [f64; 8]); 3] = [
            (0.3, [
                0.2914567944778671, -1.6448555435075034e-17, -1.035985182720163e-33,
                -2.297819484496719e-50, -2.2751402520448483e-66, -3.676406158188424e-83,
                -3.548379927145256e-99, -3.645726935130229e-116,
            ]),
            (2.5, [
                1.1902899496825317, 7.683333629842069e-17, -3.279232126663738e-34,
                1.614523478312987e-50, 6.162935548876536e-68, -1.31356259696976e-84,
                3.8398236710552435e-101, 2.8431648393377258e-117,
            ]),
            (-1e5, [
                -1.570786326794897, -1.5988503657719612e-17, -8.418354418122844e-34,
                -7.6799559516122905e-50, -3.8112080600013793e-66, 2.2782706105651064e-82,
                -5.89960690045339e-99, -1.6192571788889769e-115,
            ]),
        ];
        for (x, parts) in cases {
            let got = Extended::from_f64(x).atan();
            assert!(rel(&got, &expansion(&parts)) < 1e-98, "atan({x})");
        }
    }

    #[test]
    fn erfc_to_hundred_digits() {
        // Both the series (x² < 41) and the continued fraction are covered.
        let cases: [(f64, [f64; 8]); 5] = [
            (0.5, [
                0.4795001221869535, -1.900077467916287e-17, 1.0436449312314153e-33,
                4.71991081667056e-50, 4.570604032986159e-66, -2.5771018584729514e-82,
                1.3188643855877302e-98, 6.108108460447452e-115,
            ]),
            (3.0, [
                2.209049699858544e-05, 1.5563377960343457e-22, -1.0942346299041986e-38,
                -3.2900189532697295e-55, -8.422195453962609e-73, -2.2755560522934336e-89,
                -1.3867840892051616e-105, 8.302306404099221e-122,
            ]),
            (7.0, [
                4.183825607779414e-23, 1.889076310043994e-39, -1.4154626234837953e-55,
                3.9973306071160434e-72, -5.474313255596838e-89, -3.0208683338257707e-105,
                1.7370371319670938e-121, -2.2463882337971748e-139,
            ]),
            (20.0, [
                5.395865611607901e-176, -2.4980975484348278e-192, 8.160623520169242e-209,
                5.731202613937143e-226, 2.3610657119219497e-242, -4.4137997358270333e-259,
                2.3057005585646884e-275, 4.520432327481413e-292,
            ]),
            (-1.5, [
                1.9661051464753108, -3.3867031441680696e-17, 1.3085487775971452e-33,
                -1.0747373961966734e-50, -8.187082248908918e-67, -3.439443811994386e-83,
                -1.1237560711511202e-99, 9.772204919333484e-116,
            ]),
        ];
        for (x, parts) in cases {
            let got = Extended::from_f64(x).erfc();
            assert!(rel(&got, &expansion(&parts)) < 1e-98, "erfc({x})");
        }
    }

    #[test]
    fn tan_near_pole_keeps_relative_accuracy() {
        // tan((0.5 - p)π) = cot(pπ) ≈ 1/(pπ) for tiny p
        let p = Extended::from_f64(1e-60);
        let arg = (Extended::from_f64(0.5) - p.clone()) * Extended::pi();
        let expect = Extended::one() / (p * Extended::pi());
        assert!(rel(&arg.tan(), &expect) < 1e-30);
    }

    #[test]
    fn exp_ln_round_trip() {
        let x = Extended::from_f64(-700.25);
        let back = x.exp().ln();
        assert!(rel(&back, &x) < 1e-98);
        let q = Quad::from_f64(2.0).sqrt();
        let sq = q.clone() * q;
        assert!(((sq - Quad::from_f64(2.0)).abs().to_f64()) < 1e-32);
    }

    #[test]
    fn erfc_matches_reference() {
        // mpmath.erfc at 120 digits
        let cases = [
            (0.5, 0.4795001221869534623173),
            (1.0, 0.1572992070502851306588),
            (3.0, 2.209049699858544137278e-5),
            (7.0, 4.183825607779414398614e-23),
            (20.0, 5.395865611607900928935e-176),
            (-2.0, 1.995322265018952734162),
        ];
        for (x, e) in cases {
            let got = Extended::from_f64(x).erfc().to_f64();
            assert!(((got - e) / e).abs() < 1e-15, "erfc({x}) = {got}, expected {e}");
        }
        assert!(Extended::zero().erfc() == Extended::one());
        assert!(Extended::from_f64(1e9).erfc().is_zero());
    }
}
