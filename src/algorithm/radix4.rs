use num_complex::Complex;

use super::stage_kernels::{self, Butterfly};
use super::RadixFamily;
use crate::radix::Radix;
use crate::vector::{ComplexVector, Rotation90};

/// Radix-4 stages. Also provides the two-bit first stage of the radix-8 family.
///
/// Each butterfly is a 2x2 mixed radix: two size-2 FFTs, a 90 degree rotation, and two more size-2 FFTs.
pub struct Radix4Family;

impl Butterfly<4> for Radix4Family {
    #[inline(always)]
    unsafe fn butterfly<V: ComplexVector>(legs: [V; 4], rotation: Rotation90<V>) -> [V; 4] {
        V::column_butterfly4(legs, rotation)
    }
    #[inline(always)]
    unsafe fn transpose_packed<V: ComplexVector>(legs: [V; 4]) -> [V; 4] {
        V::transpose4_packed(legs)
    }
}

impl RadixFamily for Radix4Family {
    const RADIX: Radix = Radix::Radix4;

    #[inline(always)]
    unsafe fn first_stage_rows<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        rotation: Rotation90<V>,
    ) {
        stage_kernels::first_stage_rows::<V, Self, 4>(output, input, rotation)
    }
    #[inline(always)]
    unsafe fn generic_stage_rows<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        twiddles: &[Complex<f32>],
        stride: usize,
        rotation: Rotation90<V>,
    ) {
        stage_kernels::generic_stage_rows::<V, Self, 4>(output, input, twiddles, stride, rotation)
    }
    #[inline(always)]
    unsafe fn first_stage_columns<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        width: usize,
        rotation: Rotation90<V>,
    ) {
        stage_kernels::first_stage_columns::<V, Self, 4>(output, input, width, rotation)
    }
    #[inline(always)]
    unsafe fn generic_stage_columns<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        twiddles: &[Complex<f32>],
        stride: usize,
        width: usize,
        rotation: Rotation90<V>,
    ) {
        stage_kernels::generic_stage_columns::<V, Self, 4>(
            output, input, twiddles, stride, width, rotation,
        )
    }
}
