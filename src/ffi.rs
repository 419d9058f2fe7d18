// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **C Interface** - *Unmangled Entry Points for the Scoring Pipeline*
//!
//! Plain `double`/`int` wrappers over `crate::kernels::tiered`, exported under their bare
//! names from the `cdylib`.
//!
//! The C contract has no error channel:
//! - an unbounded quantile is returned as `+inf`;
//! - a domain or convergence error panics, and the panic aborts the process at the
//!   `extern "C"` frame.

use std::os::raw::{c_double, c_int};

use crate::errors::KernelError;
use crate::kernels::tiered;

#[inline]
fn unwrap_or_abort(fname: &str, r: Result<f64, KernelError>) -> c_double {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{fname}: {e}"),
    }
}

#[no_mangle]
pub extern "C" fn invchi2cdf_1mx(x: c_double, dof: c_int) -> c_double {
    unwrap_or_abort("invchi2cdf_1mx", tiered::invchi2cdf_1mx(x, dof))
}

#[no_mangle]
pub extern "C" fn invchi2cdf_1mx_128b(x: c_double, dof: c_int) -> c_double {
    unwrap_or_abort("invchi2cdf_1mx_128b", tiered::invchi2cdf_1mx_128b(x, dof))
}

#[no_mangle]
pub extern "C" fn invchi2cdf_1mx_100d(x: c_double, dof: c_int) -> c_double {
    unwrap_or_abort("invchi2cdf_1mx_100d", tiered::invchi2cdf_1mx_100d(x, dof))
}

#[no_mangle]
pub extern "C" fn onemin_chi2cdf(x: c_double, dof: c_int) -> c_double {
    unwrap_or_abort("onemin_chi2cdf", tiered::onemin_chi2cdf(x, dof))
}

#[no_mangle]
pub extern "C" fn onemin_chi2cdf_128b(x: c_double, dof: c_int) -> c_double {
    unwrap_or_abort("onemin_chi2cdf_128b", tiered::onemin_chi2cdf_128b(x, dof))
}

#[no_mangle]
pub extern "C" fn onemin_chi2cdf_100d(x: c_double, dof: c_int) -> c_double {
    unwrap_or_abort("onemin_chi2cdf_100d", tiered::onemin_chi2cdf_100d(x, dof))
}

#[no_mangle]
pub extern "C" fn normcdf_100d(x: c_double, m: c_double, s: c_double) -> c_double {
    unwrap_or_abort("normcdf_100d", tiered::normcdf_100d(x, m, s))
}

#[no_mangle]
pub extern "C" fn onemin_normcdf_100d(x: c_double, m: c_double, s: c_double) -> c_double {
    unwrap_or_abort("onemin_normcdf_100d", tiered::onemin_normcdf_100d(x, m, s))
}

/// Cauchy combination of the `n` p-values at `x`.
///
/// A null `x` or `n <= 0` is an empty input and returns `0.5`.
///
/// # Safety
/// When `n > 0`, `x` must point to `n` readable, initialised doubles.
#[no_mangle]
pub unsafe extern "C" fn cauchytest_100d(x: *const c_double, n: c_int) -> c_double {
    if x.is_null() || n <= 0 {
        return tiered::cauchytest_100d(&[]);
    }
    let p = unsafe { std::slice::from_raw_parts(x, n as usize) };
    tiered::cauchytest_100d(p)
}
