use num_complex::Complex;

use super::stage_kernels::{self, Butterfly};
use super::RadixFamily;
use crate::radix::Radix;
use crate::vector::{ComplexVector, Rotation90};

/// Radix-8 stages, built from two radix-4 butterflies, the size-8 twiddles, and four radix-2 butterflies.
pub struct Radix8Family;

impl Butterfly<8> for Radix8Family {
    #[inline(always)]
    unsafe fn butterfly<V: ComplexVector>(legs: [V; 8], rotation: Rotation90<V>) -> [V; 8] {
        V::column_butterfly8(legs, rotation)
    }
    #[inline(always)]
    unsafe fn transpose_packed<V: ComplexVector>(legs: [V; 8]) -> [V; 8] {
        V::transpose8_packed(legs)
    }
}

impl RadixFamily for Radix8Family {
    const RADIX: Radix = Radix::Radix8;

    #[inline(always)]
    unsafe fn first_stage_rows<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        rotation: Rotation90<V>,
    ) {
        stage_kernels::first_stage_rows::<V, Self, 8>(output, input, rotation)
    }
    #[inline(always)]
    unsafe fn generic_stage_rows<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        twiddles: &[Complex<f32>],
        stride: usize,
        rotation: Rotation90<V>,
    ) {
        stage_kernels::generic_stage_rows::<V, Self, 8>(output, input, twiddles, stride, rotation)
    }
    #[inline(always)]
    unsafe fn first_stage_columns<V: ComplexVector>(
        output: &mut [Complex<f32>],
        input: &[Complex<f32>],
        width: usize,
        rotation: Rotation90<V>,
    ) {
        stage_kernels::first_stage_columns::<V, Self, 8>(output, input, width, rotation)
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
        stage_kernels::generic_stage_columns::<V, Self, 8>(
            output, input, twiddles, stride, width, rotation,
        )
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::algorithm::unit_tests::{check_family_columns, check_family_rows};

    #[test]
    fn test_radix8_rows() {
        // 2, 4, 16, 32, 128 and 256 all need a smaller first stage
        for len in [2, 4, 8, 16, 32, 64, 128, 256, 512] {
            check_family_rows::<Radix8Family>(len);
        }
    }

    #[test]
    fn test_radix8_columns() {
        for height in [8, 16, 64] {
            check_family_columns::<Radix8Family>(2, height);
        }
    }
}
