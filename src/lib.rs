#![cfg_attr(docsrs, feature(doc_cfg))]

//! Radix2D computes forward two-dimensional FFTs of power-of-two complex grids.
//!
//! The transform runs as two passes of iterative Cooley-Tukey stages: every row is transformed, then every column.
//! Each pass is decomposed into radix-2, radix-4 or radix-8 stages. Every stage writes its outputs to their final
//! position for that stage, so the spectrum comes out in natural order without a separate bit-reversal pass.
//!
//! The stage kernels are written once, generically over a SIMD vector type. On x86_64 they are compiled for AVX and
//! SSE3, on AArch64 for Neon, and everywhere for a scalar `Complex<f32>` "vector" of width 1. The best available
//! instruction set is picked at run time.
//!
//! ### Usage
//!
//! ```
//! // Perform a forward 2D FFT of a 64x64 grid
//! use radix2d::{Fft2dPlanner, Radix};
//! use radix2d::num_complex::Complex;
//!
//! let mut planner = Fft2dPlanner::new();
//! let fft = planner.plan_fft2d_forward(64, 64, Radix::Radix8);
//!
//! let input = vec![Complex { re: 1.0f32, im: 0.0f32 }; 64 * 64];
//! let mut output = vec![Complex { re: 0.0f32, im: 0.0f32 }; 64 * 64];
//! fft.process_outofplace(&input, &mut output);
//!
//! // a constant grid transforms into a single spike at the origin
//! assert!((output[0].re - 4096.0).abs() < 1e-2);
//! ```
//!
//! ### Normalization
//!
//! The transform is unnormalized: every output bin is a plain sum over the input grid, with no `1/len` factor.
//!
//! ### Buffers and alignment
//!
//! The kernels use unaligned loads, so any slice works. [`AlignedBuffer`] provides 64-byte aligned storage for callers
//! that want every vector load to stay within a cache line.

pub use num_complex;
pub use num_traits;

#[macro_use]
mod common;

pub mod algorithm;
mod array_utils;
mod buffer;
mod error;
mod fft_cache;
pub mod harness;
mod isa;
pub mod oracle;
mod plan;
mod radix;
mod twiddles;
mod vector;

#[cfg(all(target_arch = "x86_64", feature = "avx"))]
mod avx;

#[cfg(all(target_arch = "x86_64", feature = "sse"))]
mod sse;

#[cfg(all(target_arch = "aarch64", feature = "neon"))]
mod neon;

#[cfg(test)]
mod test_utils;

use num_complex::Complex;
use num_traits::Zero;
use std::fmt::Display;

pub use crate::buffer::AlignedBuffer;
pub use crate::error::FftError;
pub use crate::isa::Isa;
pub use crate::plan::Fft2dPlanner;
pub use crate::radix::{
    radix2_output_index, radix4_output_index, radix8_output_index, stage_output_index, Radix,
    Stage, StagePlan,
};
pub use crate::twiddles::{twiddle, TwiddleTable};
pub use crate::vector::{ComplexVector, Rotation90};

/// Represents a FFT direction, IE a forward FFT or an inverse FFT
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}
impl FftDirection {
    /// Returns the opposite direction of `self`.
    ///
    ///  - If `self` is `FftDirection::Forward`, returns `FftDirection::Inverse`
    ///  - If `self` is `FftDirection::Inverse`, returns `FftDirection::Forward`
    #[inline]
    pub fn opposite_direction(&self) -> FftDirection {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }

    /// The sign of the twiddle factor exponent: -1 for forward, +1 for inverse
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Self::Forward => -1.0,
            Self::Inverse => 1.0,
        }
    }
}
impl Display for FftDirection {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> Result<(), ::std::fmt::Error> {
        match self {
            Self::Forward => f.write_str("Forward"),
            Self::Inverse => f.write_str("Inverse"),
        }
    }
}

/// A trait that allows 2D FFT algorithms to report their grid shape.
pub trait Length2d {
    /// The number of samples in one row of the grid
    fn width(&self) -> usize;

    /// The number of rows in the grid
    fn height(&self) -> usize;

    /// The total number of samples in the grid
    #[inline(always)]
    fn len(&self) -> usize {
        self.width() * self.height()
    }
}

/// Trait for algorithms that compute forward 2D FFTs of row-major `Complex<f32>` grids.
///
/// The input is never modified. The output receives the spectrum in natural row-major order: bin `(u, v)` lives at
/// `output[v * width + u]`.
pub trait Fft2d: Length2d + Sync + Send {
    /// Computes the 2D FFT of `input`, storing the spectrum in `output`.
    ///
    /// `scratch` is the ping-pong partner of `output`. It must be at least `get_scratch_len()` long; its contents on
    /// entry are ignored and its contents on return are unspecified.
    ///
    /// # Panics
    ///
    /// This method panics if:
    /// - `input.len() != self.len()`
    /// - `output.len() != self.len()`
    /// - `scratch.len() < self.get_scratch_len()`
    fn process_outofplace_with_scratch(
        &self,
        input: &[Complex<f32>],
        output: &mut [Complex<f32>],
        scratch: &mut [Complex<f32>],
    );

    /// Computes the 2D FFT of `input`, storing the spectrum in `output`.
    ///
    /// Convenience method that allocates a scratch buffer. Prefer `process_outofplace_with_scratch` when transforming
    /// repeatedly.
    fn process_outofplace(&self, input: &[Complex<f32>], output: &mut [Complex<f32>]) {
        let mut scratch = vec![Complex::zero(); self.get_scratch_len()];
        self.process_outofplace_with_scratch(input, output, &mut scratch);
    }

    /// Returns the size of the scratch buffer required by `process_outofplace_with_scratch`
    fn get_scratch_len(&self) -> usize;

    /// The radix family this algorithm decomposes each axis into
    fn radix(&self) -> Radix;

    /// The instruction set the stage kernels run on
    fn isa(&self) -> Isa;
}
