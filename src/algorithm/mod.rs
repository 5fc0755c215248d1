//! The radix families and the 2D algorithm that drives them.

use num_complex::Complex;

use crate::radix::Radix;
use crate::vector::{ComplexVector, Rotation90};

mod mixed_radix_2d;
mod radix2;
mod radix4;
mod radix8;
mod stage_kernels;

pub use self::mixed_radix_2d::MixedRadix2d;
pub use self::radix2::Radix2Family;
pub use self::radix4::Radix4Family;
pub use self::radix8::Radix8Family;

/// The stage kernels of one radix family.
///
/// Each kernel reads `input` and writes every element of `output`; the two never alias. The kernels are generic over
/// the vector type, and they require the lane count of that vector type to divide the amount of work evenly: see
/// each method for the exact condition. Callers fall back to `Complex<f32>`, which always qualifies.
pub trait RadixFamily: Send + Sync + 'static {
    const RADIX: Radix;

    /// Twiddle-free first stage over one row. `input.len() / RADIX` must be a multiple of the lane count.
    unsafe fn first_stage_rows<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        rotation: Rotation90<V>,
    );

    /// A later stage over one row. `stride` must be a multiple of the lane count.
    unsafe fn generic_stage_rows<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        twiddles: &[Complex<f32>],
        stride: usize,
        rotation: Rotation90<V>,
    );

    /// Twiddle-free first stage down every column of a grid. `width` must be a multiple of the lane count.
    unsafe fn first_stage_columns<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        width: usize,
        rotation: Rotation90<V>,
    );

    /// A later stage down every column of a grid. `width` must be a multiple of the lane count.
    unsafe fn generic_stage_columns<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        twiddles: &[Complex<f32>],
        stride: usize,
        width: usize,
        rotation: Rotation90<V>,
    );
}

// The first stage of an axis may use a smaller radix than the rest of the plan, so it is dispatched on the stage's own radix.
#[inline(always)]
pub(crate) unsafe fn first_stage_rows<V: ComplexVector>(
    radix: Radix,
    output: &mut [Complex<f32>],
    input: &[Complex<f32>],
    rotation: Rotation90<V>,
) {
    match radix {
        Radix::Radix2 => Radix2Family::first_stage_rows(output, input, rotation),
        Radix::Radix4 => Radix4Family::first_stage_rows(output, input, rotation),
        Radix::Radix8 => Radix8Family::first_stage_rows(output, input, rotation),
    }
}

#[inline(always)]
pub(crate) unsafe fn first_stage_columns<V: ComplexVector>(
    radix: Radix,
    output: &mut [Complex<f32>],
    input: &[Complex<f32>],
    width: usize,
    rotation: Rotation90<V>,
) {
    match radix {
        Radix::Radix2 => Radix2Family::first_stage_columns(output, input, width, rotation),
        Radix::Radix4 => Radix4Family::first_stage_columns(output, input, width, rotation),
        Radix::Radix8 => Radix8Family::first_stage_columns(output, input, width, rotation),
    }
}

#[cfg(test)]
pub(crate) mod unit_tests {
    use super::*;
    use crate::test_utils::{compare_vectors, dft, random_signal};
    use crate::twiddles::TwiddleTable;
    use crate::FftDirection;
    use num_traits::Zero;

    // Runs every stage of a family's plan over one row with scalar vectors, and checks the result against a naive DFT
    pub fn check_family_rows<R: RadixFamily>(len: usize) {
        let input = random_signal(len);
        let table = TwiddleTable::new(len, R::RADIX, FftDirection::Forward);

        let mut current = input.clone();
        let mut next = vec![Complex::zero(); len];
        unsafe {
            let rotation = Complex::<f32>::make_rotation90(FftDirection::Forward);
            let stages = table.plan().stages().iter().zip(table.stage_blocks());
            for (index, (stage, twiddles)) in stages.enumerate() {
                if index == 0 {
                    first_stage_rows(stage.radix, &mut next, &current, rotation);
                } else {
                    R::generic_stage_rows(&mut next, &current, twiddles, stage.stride, rotation);
                }
                std::mem::swap(&mut current, &mut next);
            }
        }

        let expected = dft(&input, FftDirection::Forward);
        assert!(compare_vectors(&current, &expected), "{} len={}", R::RADIX, len);
    }

    // Runs every stage of a family's plan down the columns of a `width` x `height` grid with scalar vectors, and
    // checks each column against a naive DFT
    pub fn check_family_columns<R: RadixFamily>(width: usize, height: usize) {
        let input = random_signal(width * height);
        let table = TwiddleTable::new(height, R::RADIX, FftDirection::Forward);

        let mut current = input.clone();
        let mut next = vec![Complex::zero(); input.len()];
        unsafe {
            let rotation = Complex::<f32>::make_rotation90(FftDirection::Forward);
            let stages = table.plan().stages().iter().zip(table.stage_blocks());
            for (index, (stage, twiddles)) in stages.enumerate() {
                if index == 0 {
                    first_stage_columns(stage.radix, &mut next, &current, width, rotation);
                } else {
                    R::generic_stage_columns(
                        &mut next,
                        &current,
                        twiddles,
                        stage.stride,
                        width,
                        rotation,
                    );
                }
                std::mem::swap(&mut current, &mut next);
            }
        }

        for x in 0..width {
            let column: Vec<Complex<f32>> = (0..height).map(|y| input[y * width + x]).collect();
            let actual: Vec<Complex<f32>> = (0..height).map(|y| current[y * width + x]).collect();
            let expected = dft(&column, FftDirection::Forward);
            assert!(
                compare_vectors(&actual, &expected),
                "{} width={} height={} column={}",
                R::RADIX,
                width,
                height,
                x
            );
        }
    }
}
