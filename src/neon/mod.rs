use core::arch::aarch64::float32x4_t;

use num_complex::Complex;

use crate::algorithm::{MixedRadix2d, RadixFamily};

mod neon_vector;

/// Runs every stage of `fft` on Neon vectors.
///
/// Callers must have verified that the CPU supports Neon.
#[target_feature(enable = "neon")]
pub(crate) unsafe fn process_neon<R: RadixFamily>(
    fft: &MixedRadix2d<R>,
    input: &[Complex<f32>],
    output: &mut [Complex<f32>],
    scratch: &mut [Complex<f32>],
) {
    fft.perform_fft::<float32x4_t>(input, output, scratch)
}
