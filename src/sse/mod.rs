use std::arch::x86_64::__m128;

use num_complex::Complex;

use crate::algorithm::{MixedRadix2d, RadixFamily};

mod sse_vector;

/// Runs every stage of `fft` on SSE3 vectors.
///
/// Callers must have verified that the CPU supports SSE3.
#[target_feature(enable = "sse3")]
pub(crate) unsafe fn process_sse3<R: RadixFamily>(
    fft: &MixedRadix2d<R>,
    input: &[Complex<f32>],
    output: &mut [Complex<f32>],
    scratch: &mut [Complex<f32>],
) {
    fft.perform_fft::<__m128>(input, output, scratch)
}
