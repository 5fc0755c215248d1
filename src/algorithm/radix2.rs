use num_complex::Complex;

use super::stage_kernels::{self, Butterfly};
use super::RadixFamily;
use crate::radix::Radix;
use crate::vector::{ComplexVector, Rotation90};

/// Radix-2 stages. Also provides the one-bit first stage of the radix-4 and radix-8 families.
pub struct Radix2Family;

impl Butterfly<2> for Radix2Family {
    #[inline(always)]
    unsafe fn butterfly<V: ComplexVector>(legs: [V; 2], _rotation: Rotation90<V>) -> [V; 2] {
        V::column_butterfly2(legs)
    }
    #[inline(always)]
    unsafe fn transpose_packed<V: ComplexVector>(legs: [V; 2]) -> [V; 2] {
        V::transpose2_packed(legs)
    }
}

impl RadixFamily for Radix2Family {
    const RADIX: Radix = Radix::Radix2;

    #[inline(always)]
    unsafe fn first_stage_rows<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        rotation: Rotation90<V>,
    ) {
        stage_kernels::first_stage_rows::<V, Self, 2>(output, input, rotation)
    }
    #[inline(always)]
    unsafe fn generic_stage_rows<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        twiddles: &[Complex<f32>],
        stride: usize,
        rotation: Rotation90<V>,
    ) {
        stage_kernels::generic_stage_rows::<V, Self, 2>(output, input, twiddles, stride, rotation)
    }
    #[inline(always)]
    unsafe fn first_stage_columns<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        width: usize,
        rotation: Rotation90<V>,
    ) {
        stage_kernels::first_stage_columns::<V, Self, 2>(output, input, width, rotation)
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
        stage_kernels::generic_stage_columns::<V, Self, 2>(
            output, input, twiddles, stride, width, rotation,
        )
    }
}
