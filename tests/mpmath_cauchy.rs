// AUTO-GENERATED FILE. DO NOT EDIT BY HAND.
// Generated from mpmath 1.3.0 on 2026-10-17T14:12:56Z.
// Cauchy combination test, extended tier
//
// This file is created by scripts/gen_mpmath_tests.py and contains reference
// tests whose expected values are produced by mpmath at 600 bits.
//

mod util;
mod mpmath_cauchy_tests {
    use super::util::assert_rel_close;
    use hpstats::cauchytest_100d;

    #[test]
    fn cauchy_mixed_pvalues() {
        let p = [0.01, 0.02, 0.3, 0.9];
        assert_rel_close(cauchytest_100d(&p), 0.007015671117283486, 1e-14);
    }

    #[test]
    fn cauchy_tiny_and_large() {
        let p = [1e-20, 0.7];
        assert_rel_close(cauchytest_100d(&p), 1e-20, 1e-14);
    }

    #[test]
    fn cauchy_dominant_tiny_pvalue() {
        let p = [1e-10, 0.5, 0.5, 0.5, 0.5];
        assert_rel_close(cauchytest_100d(&p), 1e-10, 1e-14);
    }

    #[test]
    fn cauchy_near_one() {
        let p = [0.999, 0.9999, 0.95];
        assert_rel_close(cauchytest_100d(&p), 0.9999092545142514, 1e-14);
    }

    #[test]
    fn cauchy_many_moderate() {
        let p = [0.05, 0.1, 0.15000000000000002, 0.2, 0.25, 0.30000000000000004, 0.35000000000000003, 0.4, 0.45, 0.5, 0.55, 0.6000000000000001, 0.65, 0.7000000000000001, 0.75, 0.8, 0.8500000000000001, 0.9, 0.9500000000000001];
        assert_rel_close(cauchytest_100d(&p), 0.5000000000000042, 1e-14);
    }

    #[test]
    fn cauchy_extreme_tail() {
        let p = [1e-80, 0.2, 0.4];
        assert_rel_close(cauchytest_100d(&p), 1e-80, 1e-14);
    }
}
