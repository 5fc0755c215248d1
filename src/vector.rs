use std::fmt::Debug;

use num_complex::Complex;

use crate::FftDirection;

/// A vector of `Complex<f32>` values, stored with the real values and imaginary values interleaved.
/// Implemented for `__m256` (AVX), `__m128` (SSE3), `float32x4_t` (Neon), and for `Complex<f32>` itself, which acts as
/// a vector of width 1.
///
/// The stage kernels are generic over this trait, so every instruction set runs exactly the same sequence of
/// arithmetic. The provided methods only use the primitive operations below, which keeps the scalar and SIMD results
/// bit-identical.
pub trait ComplexVector: Copy + Debug + Send + Sync {
    const COMPLEX_PER_VECTOR: usize;

    // loads/stores of complex numbers. No alignment is required.
    unsafe fn load_complex(ptr: *const Complex<f32>) -> Self;
    unsafe fn store_complex(ptr: *mut Complex<f32>, data: Self);

    /// Fill a vector by repeating `value` across every complex slot
    unsafe fn broadcast_complex_elements(value: Complex<f32>) -> Self;

    unsafe fn half_root2() -> Self; // an entire vector filled with 0.5.sqrt()

    // Basic operations that map directly to 1-2 intrinsics
    unsafe fn add(left: Self, right: Self) -> Self;
    unsafe fn sub(left: Self, right: Self) -> Self;
    unsafe fn mul(left: Self, right: Self) -> Self;
    unsafe fn xor(left: Self, right: Self) -> Self;

    /// Subtracts `right` from `left` in the real slots and adds it in the imaginary slots
    unsafe fn addsub(left: Self, right: Self) -> Self;

    /// Swap each real number with its corresponding imaginary number
    unsafe fn swap_complex_components(self) -> Self;

    /// first return is the reals duplicated into the imaginaries, second return is the imaginaries duplicated into the reals
    unsafe fn duplicate_complex_components(self) -> (Self, Self);

    /// Packed transposes. These take a NxC array, where C is COMPLEX_PER_VECTOR, and transpose it to a CxN array,
    /// packed so that writing the returned vectors out back to back stores the transposed data contiguously.
    unsafe fn transpose2_packed(rows: [Self; 2]) -> [Self; 2];
    unsafe fn transpose4_packed(rows: [Self; 4]) -> [Self; 4];
    unsafe fn transpose8_packed(rows: [Self; 8]) -> [Self; 8];

    /// create a Rotation90 instance to rotate complex numbers either 90 or 270 degrees, based on `direction`
    #[inline(always)]
    unsafe fn make_rotation90(direction: FftDirection) -> Rotation90<Self> {
        let broadcast = match direction {
            FftDirection::Forward => Complex::new(-0.0, 0.0),
            FftDirection::Inverse => Complex::new(0.0, -0.0),
        };
        Rotation90(Self::broadcast_complex_elements(broadcast))
    }

    /// Pairwise multiply the complex numbers in `left` with the complex numbers in `right`.
    #[inline(always)]
    unsafe fn mul_complex(left: Self, right: Self) -> Self {
        // create a shuffled version of left where the imaginary values are swapped with the reals
        let left_shuffled = Self::swap_complex_components(left);

        // Extract the real and imaginary components from right into 2 separate registers
        let (right_real, right_imag) = Self::duplicate_complex_components(right);

        // (a*c - b*d) in the real slots, (b*c + a*d) in the imaginary slots
        Self::addsub(
            Self::mul(left, right_real),
            Self::mul(right_imag, left_shuffled),
        )
    }

    #[inline(always)]
    unsafe fn rotate90(self, rotation: Rotation90<Self>) -> Self {
        // Use the pre-computed vector stored in the Rotation90 instance to negate either the reals or imaginaries
        let negated = Self::xor(self, rotation.0);

        // Our goal is to swap the reals with the imaginaries, then negate either the reals or the imaginaries, based on whether we're an inverse or not
        Self::swap_complex_components(negated)
    }

    #[inline(always)]
    unsafe fn column_butterfly2(rows: [Self; 2]) -> [Self; 2] {
        [Self::add(rows[0], rows[1]), Self::sub(rows[0], rows[1])]
    }

    #[inline(always)]
    unsafe fn column_butterfly4(rows: [Self; 4], rotation: Rotation90<Self>) -> [Self; 4] {
        // Algorithm: 2x2 mixed radix

        // Perform the first set of size-2 FFTs.
        let [mid0, mid2] = Self::column_butterfly2([rows[0], rows[2]]);
        let [mid1, mid3] = Self::column_butterfly2([rows[1], rows[3]]);

        // Apply twiddle factors (in this case just a rotation)
        let mid3_rotated = mid3.rotate90(rotation);

        // Transpose the data and do size-2 FFTs down the columns
        let [output0, output1] = Self::column_butterfly2([mid0, mid1]);
        let [output2, output3] = Self::column_butterfly2([mid2, mid3_rotated]);

        // Swap outputs 1 and 2 in the output to do a square transpose
        [output0, output2, output1, output3]
    }

    #[inline(always)]
    unsafe fn column_butterfly8(rows: [Self; 8], rotation: Rotation90<Self>) -> [Self; 8] {
        // Algorithm: 4x2 mixed radix

        // Size-4 FFTs down the columns
        let mid0 = Self::column_butterfly4([rows[0], rows[2], rows[4], rows[6]], rotation);
        let mut mid1 = Self::column_butterfly4([rows[1], rows[3], rows[5], rows[7]], rotation);

        // Apply twiddle factors
        mid1[1] = apply_butterfly8_twiddle1(mid1[1], rotation);
        mid1[2] = mid1[2].rotate90(rotation);
        mid1[3] = apply_butterfly8_twiddle3(mid1[3], rotation);

        // Transpose the data and do size-2 FFTs down the columns
        let [output0, output1] = Self::column_butterfly2([mid0[0], mid1[0]]);
        let [output2, output3] = Self::column_butterfly2([mid0[1], mid1[1]]);
        let [output4, output5] = Self::column_butterfly2([mid0[2], mid1[2]]);
        let [output6, output7] = Self::column_butterfly2([mid0[3], mid1[3]]);

        [
            output0, output2, output4, output6, output1, output3, output5, output7,
        ]
    }
}

#[inline(always)]
pub unsafe fn apply_butterfly8_twiddle1<V: ComplexVector>(input: V, rotation: Rotation90<V>) -> V {
    let rotated = input.rotate90(rotation);
    let combined = V::add(rotated, input);
    V::mul(V::half_root2(), combined)
}
#[inline(always)]
pub unsafe fn apply_butterfly8_twiddle3<V: ComplexVector>(input: V, rotation: Rotation90<V>) -> V {
    let rotated = input.rotate90(rotation);
    let combined = V::sub(rotated, input);
    V::mul(V::half_root2(), combined)
}

/// A precomputed sign mask that rotates complex numbers by 90 degrees: multiplication by `-i` for forward FFTs, by `i` for inverse.
#[repr(transparent)]
#[derive(Clone, Copy, Debug)]
pub struct Rotation90<V>(V);

#[inline(always)]
fn xor_f32(left: f32, right: f32) -> f32 {
    f32::from_bits(left.to_bits() ^ right.to_bits())
}

impl ComplexVector for Complex<f32> {
    const COMPLEX_PER_VECTOR: usize = 1;

    #[inline(always)]
    unsafe fn load_complex(ptr: *const Complex<f32>) -> Self {
        ptr.read_unaligned()
    }
    #[inline(always)]
    unsafe fn store_complex(ptr: *mut Complex<f32>, data: Self) {
        ptr.write_unaligned(data)
    }
    #[inline(always)]
    unsafe fn broadcast_complex_elements(value: Complex<f32>) -> Self {
        value
    }
    #[inline(always)]
    unsafe fn half_root2() -> Self {
        Complex::new(0.5f32.sqrt(), 0.5f32.sqrt())
    }

    #[inline(always)]
    unsafe fn add(left: Self, right: Self) -> Self {
        left + right
    }
    #[inline(always)]
    unsafe fn sub(left: Self, right: Self) -> Self {
        left - right
    }
    #[inline(always)]
    unsafe fn mul(left: Self, right: Self) -> Self {
        // elementwise, like the SIMD multiply instructions. Complex multiplication is mul_complex
        Complex::new(left.re * right.re, left.im * right.im)
    }
    #[inline(always)]
    unsafe fn xor(left: Self, right: Self) -> Self {
        Complex::new(xor_f32(left.re, right.re), xor_f32(left.im, right.im))
    }
    #[inline(always)]
    unsafe fn addsub(left: Self, right: Self) -> Self {
        Complex::new(left.re - right.re, left.im + right.im)
    }

    #[inline(always)]
    unsafe fn swap_complex_components(self) -> Self {
        Complex::new(self.im, self.re)
    }
    #[inline(always)]
    unsafe fn duplicate_complex_components(self) -> (Self, Self) {
        (
            Complex::new(self.re, self.re),
            Complex::new(self.im, self.im),
        )
    }

    // With one complex number per vector, an Nx1 array is already its own packed transpose
    #[inline(always)]
    unsafe fn transpose2_packed(rows: [Self; 2]) -> [Self; 2] {
        rows
    }
    #[inline(always)]
    unsafe fn transpose4_packed(rows: [Self; 4]) -> [Self; 4] {
        rows
    }
    #[inline(always)]
    unsafe fn transpose8_packed(rows: [Self; 8]) -> [Self; 8] {
        rows
    }
}
