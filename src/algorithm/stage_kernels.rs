//! The four stage kernels every radix family is built from.
//!
//! A stage of radix `N` and stride `p` over an axis of `L` samples runs one butterfly per position `i` in `0..L/N`.
//! Leg `m` of butterfly `i` is the sample at `i + m * L/N`, multiplied by `w^(m*k)`, where `k = i mod p` and `w` is the
//! primitive `N*p`-th root of unity. Output `s` of the butterfly is written to `stage_output_index(i, p) + s * p`.
//!
//! The row kernels transform one contiguous row, vectorizing across neighbouring butterflies. The column kernels
//! transform every column of a row-major grid at once, vectorizing across neighbouring columns, which share their
//! twiddle factors.

use std::array;

use num_complex::Complex;

use crate::radix::stage_output_index;
use crate::vector::{ComplexVector, Rotation90};

/// A size-`N` butterfly and its matching packed transpose, for any vector type.
pub trait Butterfly<const N: usize> {
    unsafe fn butterfly<V: ComplexVector>(legs: [V; N], rotation: Rotation90<V>) -> [V; N];
    unsafe fn transpose_packed<V: ComplexVector>(legs: [V; N]) -> [V; N];
}

#[inline(always)]
fn radix_bits<const N: usize>() -> u32 {
    N.trailing_zeros()
}

// Loads the twiddle-free first leg and the twiddled remaining legs of one butterfly. `twiddle` returns the twiddle
// vector for leg `m`, for `m` in `1..N`.
#[inline(always)]
unsafe fn load_twiddled_legs<V: ComplexVector, const N: usize>(
    input: *const Complex<f32>,
    leg_stride: usize,
    twiddle: impl Fn(usize) -> V,
) -> [V; N] {
    array::from_fn(|m| {
        let leg = V::load_complex(input.add(m * leg_stride));
        if m == 0 {
            leg
        } else {
            V::mul_complex(leg, twiddle(m))
        }
    })
}

/// First stage over one row. Every twiddle factor is 1, so none are applied.
///
/// `input.len() / N` must be a multiple of `V::COMPLEX_PER_VECTOR`.
#[inline(always)]
pub unsafe fn first_stage_rows<V, B, const N: usize>(
    output: &mut [Complex<f32>],
    input: &[Complex<f32>],
    rotation: Rotation90<V>,
) where
    V: ComplexVector,
    B: Butterfly<N>,
{
    let leg_len = input.len() / N;
    debug_assert_eq!(output.len(), input.len());
    debug_assert_eq!(leg_len % V::COMPLEX_PER_VECTOR, 0);

    let input = input.as_ptr();
    let output = output.as_mut_ptr();

    for i in (0..leg_len).step_by(V::COMPLEX_PER_VECTOR) {
        let legs: [V; N] = array::from_fn(|m| V::load_complex(input.add(i + m * leg_len)));
        let butterflies = B::butterfly(legs, rotation);

        // with a stride of 1, the N outputs of neighbouring butterflies are neighbours too, so transpose the lanes
        // and write everything out contiguously
        let packed = B::transpose_packed(butterflies);
        let destination = output.add(stage_output_index(i, 1, radix_bits::<N>()));
        for (n, chunk) in packed.iter().enumerate() {
            V::store_complex(destination.add(n * V::COMPLEX_PER_VECTOR), *chunk);
        }
    }
}

/// Any later stage over one row. `twiddles` is this stage's block of the twiddle table.
///
/// `stride` must be a multiple of `V::COMPLEX_PER_VECTOR`, so that the lanes of one vector share a sub-transform.
#[inline(always)]
pub unsafe fn generic_stage_rows<V, B, const N: usize>(
    output: &mut [Complex<f32>],
    input: &[Complex<f32>],
    twiddles: &[Complex<f32>],
    stride: usize,
    rotation: Rotation90<V>,
) where
    V: ComplexVector,
    B: Butterfly<N>,
{
    let leg_len = input.len() / N;
    debug_assert_eq!(output.len(), input.len());
    debug_assert_eq!(stride % V::COMPLEX_PER_VECTOR, 0);
    debug_assert!(twiddles.len() >= stride * (N - 1));

    let input = input.as_ptr();
    let output = output.as_mut_ptr();
    let twiddles = twiddles.as_ptr();

    for i in (0..leg_len).step_by(V::COMPLEX_PER_VECTOR) {
        let k = i & (stride - 1);
        let legs: [V; N] = load_twiddled_legs(input.add(i), leg_len, |m| {
            V::load_complex(twiddles.add((m - 1) * stride + k))
        });
        let butterflies = B::butterfly(legs, rotation);

        let destination = output.add(stage_output_index(i, stride, radix_bits::<N>()));
        for (s, value) in butterflies.iter().enumerate() {
            V::store_complex(destination.add(s * stride), *value);
        }
    }
}

/// First stage down every column of a row-major grid `width` samples wide.
///
/// `width` must be a multiple of `V::COMPLEX_PER_VECTOR`.
#[inline(always)]
pub unsafe fn first_stage_columns<V, B, const N: usize>(
    output: &mut [Complex<f32>],
    input: &[Complex<f32>],
    width: usize,
    rotation: Rotation90<V>,
) where
    V: ComplexVector,
    B: Butterfly<N>,
{
    let leg_lines = input.len() / width / N;
    let leg_stride = leg_lines * width;
    debug_assert_eq!(output.len(), input.len());
    debug_assert_eq!(width % V::COMPLEX_PER_VECTOR, 0);

    let input = input.as_ptr();
    let output = output.as_mut_ptr();

    for line in 0..leg_lines {
        let source = input.add(line * width);
        let destination = output.add(stage_output_index(line, 1, radix_bits::<N>()) * width);

        for x in (0..width).step_by(V::COMPLEX_PER_VECTOR) {
            let legs: [V; N] = array::from_fn(|m| V::load_complex(source.add(x + m * leg_stride)));
            let butterflies = B::butterfly(legs, rotation);
            for (s, value) in butterflies.iter().enumerate() {
                V::store_complex(destination.add(s * width + x), *value);
            }
        }
    }
}

/// Any later stage down every column of a row-major grid `width` samples wide.
///
/// `width` must be a multiple of `V::COMPLEX_PER_VECTOR`. Every column of one line uses the same twiddle factors, so
/// they are broadcast once per line.
#[inline(always)]
pub unsafe fn generic_stage_columns<V, B, const N: usize>(
    output: &mut [Complex<f32>],
    input: &[Complex<f32>],
    twiddles: &[Complex<f32>],
    stride: usize,
    width: usize,
    rotation: Rotation90<V>,
) where
    V: ComplexVector,
    B: Butterfly<N>,
{
    let leg_lines = input.len() / width / N;
    let leg_stride = leg_lines * width;
    let output_stride = stride * width;
    debug_assert_eq!(output.len(), input.len());
    debug_assert_eq!(width % V::COMPLEX_PER_VECTOR, 0);
    debug_assert!(twiddles.len() >= stride * (N - 1));

    let input = input.as_ptr();
    let output = output.as_mut_ptr();

    for line in 0..leg_lines {
        let k = line & (stride - 1);
        let line_twiddles: [V; N] = array::from_fn(|m| {
            if m == 0 {
                V::broadcast_complex_elements(Complex::new(1.0, 0.0))
            } else {
                V::broadcast_complex_elements(*twiddles.get_unchecked((m - 1) * stride + k))
            }
        });

        let source = input.add(line * width);
        let destination = output.add(stage_output_index(line, stride, radix_bits::<N>()) * width);

        for x in (0..width).step_by(V::COMPLEX_PER_VECTOR) {
            let legs: [V; N] = load_twiddled_legs(source.add(x), leg_stride, |m| line_twiddles[m]);
            let butterflies = B::butterfly(legs, rotation);
            for (s, value) in butterflies.iter().enumerate() {
                V::store_complex(destination.add(s * output_stride + x), *value);
            }
        }
    }
}
