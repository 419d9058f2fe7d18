// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for the tiered kernels with structured error reporting.
//!
//! ## Error Categories
//! - **Argument Errors**: Parameters outside the distribution's domain
//! - **Overflow**: Results that are unbounded, e.g. a quantile at probability 1
//! - **Convergence**: Series, continued fractions or root iterations that hit their limit
//!
//! Every message is prefixed with the failing function.

use core::fmt;
use std::error::Error;

/// Error type for all kernel operations.
///
/// Each variant carries a contextual message naming the function and the offending value.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Invalid arguments provided to kernel function.
    InvalidArguments(String),

    /// The mathematical result is unbounded.
    Overflow(String),

    /// An iterative evaluation did not converge within its configured limit.
    Convergence(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::Overflow(msg) => write!(f, "Overflow: {}", msg),
            KernelError::Convergence(msg) => write!(f, "Convergence failure: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for an iteration that exhausted its budget.
///
/// # Arguments
/// * `fname` - Function name where the iteration ran
/// * `limit` - Iteration limit that was reached
///
/// # Returns
/// A formatted error message string
pub fn log_iteration_limit(fname: &str, limit: usize) -> String {
    format!("{} => no convergence after {} iterations", fname, limit)
}
