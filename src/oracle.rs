//! An independent 2D FFT built on `rustfft`, used to validate the radix kernels.

use std::sync::Arc;

use num_complex::Complex;
use num_traits::Zero;
use rustfft::{Fft, FftPlanner};

use crate::Length2d;

/// Forward 2D FFT computed as `rustfft` transforms of every row, then of every column.
///
/// The columns are transposed into rows, transformed, and transposed back, so the result uses the same unnormalized,
/// row-major convention as the radix kernels.
pub struct ReferenceFft2d {
    width: usize,
    height: usize,
    row_fft: Arc<dyn Fft<f32>>,
    column_fft: Arc<dyn Fft<f32>>,
}

impl ReferenceFft2d {
    pub fn new(width: usize, height: usize) -> Self {
        let mut planner = FftPlanner::new();
        let row_fft = planner.plan_fft_forward(width);
        let column_fft = planner.plan_fft_forward(height);
        Self {
            width,
            height,
            row_fft,
            column_fft,
        }
    }

    /// Transforms `input` into a newly allocated spectrum
    pub fn transform(&self, input: &[Complex<f32>]) -> Vec<Complex<f32>> {
        let mut output = vec![Complex::zero(); self.len()];
        self.transform_into(input, &mut output);
        output
    }

    /// Transforms `input` into `output`.
    ///
    /// # Panics
    ///
    /// Panics if either buffer does not hold exactly `width * height` elements.
    pub fn transform_into(&self, input: &[Complex<f32>], output: &mut [Complex<f32>]) {
        assert_eq!(input.len(), self.len(), "input must hold width * height samples");
        assert_eq!(output.len(), self.len(), "output must hold width * height samples");
        if self.len() == 0 {
            return;
        }

        let mut rows = input.to_vec();
        self.row_fft.process(&mut rows);

        // output temporarily holds the grid column-major, so each column is one contiguous chunk
        transpose::transpose(&rows, output, self.width, self.height);
        self.column_fft.process(output);
        transpose::transpose(output, &mut rows, self.height, self.width);

        output.copy_from_slice(&rows);
    }
}

impl Length2d for ReferenceFft2d {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::test_utils::{compare_vectors, dft_2d, random_signal};

    #[test]
    fn test_reference_matches_dft() {
        for (width, height) in [(1, 1), (4, 4), (8, 2), (3, 5), (16, 32)] {
            let input = random_signal(width * height);
            let actual = ReferenceFft2d::new(width, height).transform(&input);
            let expected = dft_2d(&input, width, height);
            assert!(compare_vectors(&actual, &expected), "{}x{}", width, height);
        }
    }
}
