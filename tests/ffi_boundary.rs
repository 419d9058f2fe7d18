// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// The C entry points must agree with the Rust kernels they wrap.
// Domain errors abort the process at this boundary, so only valid input is exercised.

mod util;
#[cfg(feature = "ffi")]
mod ffi_boundary_tests {
    use super::util::assert_rel_close;
    use hpstats::ffi;

    #[test]
    fn chi2_wrappers_match_kernels() {
        for (x, dof) in [(0.05, 1), (1e-12, 3), (0.7, 25)] {
            assert_eq!(ffi::invchi2cdf_1mx(x, dof), hpstats::invchi2cdf_1mx(x, dof).unwrap());
            assert_eq!(
                ffi::invchi2cdf_1mx_128b(x, dof),
                hpstats::invchi2cdf_1mx_128b(x, dof).unwrap()
            );
            assert_eq!(
                ffi::invchi2cdf_1mx_100d(x, dof),
                hpstats::invchi2cdf_1mx_100d(x, dof).unwrap()
            );
        }
        for (x, dof) in [(3.84, 1), (50.0, 4), (0.0, 2)] {
            assert_eq!(ffi::onemin_chi2cdf(x, dof), hpstats::onemin_chi2cdf(x, dof).unwrap());
            assert_eq!(
                ffi::onemin_chi2cdf_128b(x, dof),
                hpstats::onemin_chi2cdf_128b(x, dof).unwrap()
            );
            assert_eq!(
                ffi::onemin_chi2cdf_100d(x, dof),
                hpstats::onemin_chi2cdf_100d(x, dof).unwrap()
            );
        }
    }

    #[test]
    fn unbounded_quantile_is_infinite() {
        assert_eq!(ffi::invchi2cdf_1mx(0.0, 3), f64::INFINITY);
        assert_eq!(ffi::invchi2cdf_1mx_100d(0.0, 3), f64::INFINITY);
    }

    #[test]
    fn normal_wrappers() {
        assert_eq!(ffi::normcdf_100d(0.0, 0.0, 1.0), 0.5);
        assert_rel_close(ffi::onemin_normcdf_100d(-1.0, 0.0, 1.0), 0.8413447460685429, 1e-15);
        assert_eq!(ffi::onemin_normcdf_100d(f64::INFINITY, 0.0, 1.0), 0.0);
    }

    #[test]
    fn cauchy_pointer_handling() {
        let p = [0.01, 0.02, 0.3, 0.9];
        let t = unsafe { ffi::cauchytest_100d(p.as_ptr(), p.len() as i32) };
        assert_eq!(t, hpstats::cauchytest_100d(&p));
        assert_eq!(unsafe { ffi::cauchytest_100d(std::ptr::null(), 4) }, 0.5);
        assert_eq!(unsafe { ffi::cauchytest_100d(p.as_ptr(), 0) }, 0.5);
        assert_eq!(unsafe { ffi::cauchytest_100d(p.as_ptr(), -3) }, 0.5);
        // Only the first n values are read.
        let t1 = unsafe { ffi::cauchytest_100d(p.as_ptr(), 1) };
        assert_rel_close(t1, 0.01, 1e-14);
    }
}
