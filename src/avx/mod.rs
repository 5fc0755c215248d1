use std::arch::x86_64::__m256;

use num_complex::Complex;

use crate::algorithm::{MixedRadix2d, RadixFamily};

mod avx_vector;

/// Runs every stage of `fft` on AVX vectors.
///
/// Callers must have verified that the CPU supports AVX.
#[target_feature(enable = "avx")]
pub(crate) unsafe fn process_avx<R: RadixFamily>(
    fft: &MixedRadix2d<R>,
    input: &[Complex<f32>],
    output: &mut [Complex<f32>],
    scratch: &mut [Complex<f32>],
) {
    fft.perform_fft::<__m256>(input, output, scratch)
}
