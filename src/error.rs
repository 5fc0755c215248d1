use thiserror::Error;

use crate::isa::Isa;
use crate::radix::Radix;

/// Errors reported by the fallible parts of the crate: buffer allocation and the benchmark harness.
///
/// Misuse of a planned FFT (wrong buffer lengths, non-power-of-two grids) is a programming error and panics instead.
#[derive(Debug, Error)]
pub enum FftError {
    #[error("grid dimensions must be nonzero powers of two, got {width}x{height}")]
    InvalidSize { width: usize, height: usize },

    #[error("iteration count must be at least 1")]
    NoIterations,

    #[error("failed to allocate {bytes} bytes of aligned memory")]
    Allocation { bytes: usize },

    #[error("{0} kernels are not available on this CPU")]
    UnsupportedIsa(Isa),

    #[error("{radix} result differs from the reference: relative error {error:e} exceeds tolerance {tolerance:e}")]
    Mismatch {
        radix: Radix,
        error: f64,
        tolerance: f64,
    },
}

impl FftError {
    /// Checks that a grid shape can be transformed
    pub fn check_size(width: usize, height: usize) -> Result<(), FftError> {
        if width.is_power_of_two() && height.is_power_of_two() {
            Ok(())
        } else {
            Err(FftError::InvalidSize { width, height })
        }
    }
}
