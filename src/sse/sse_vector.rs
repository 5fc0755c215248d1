use std::arch::x86_64::*;

use num_complex::Complex;

use crate::vector::ComplexVector;

// Copies the low complex of rows[0] and the low complex of rows[1] into one vector
#[inline(always)]
unsafe fn unpacklo_complex(rows: [__m128; 2]) -> __m128 {
    let row0_double = _mm_castps_pd(rows[0]);
    let row1_double = _mm_castps_pd(rows[1]);
    _mm_castpd_ps(_mm_unpacklo_pd(row0_double, row1_double))
}
// Copies the high complex of rows[0] and the high complex of rows[1] into one vector
#[inline(always)]
unsafe fn unpackhi_complex(rows: [__m128; 2]) -> __m128 {
    let row0_double = _mm_castps_pd(rows[0]);
    let row1_double = _mm_castps_pd(rows[1]);
    _mm_castpd_ps(_mm_unpackhi_pd(row0_double, row1_double))
}

impl ComplexVector for __m128 {
    const COMPLEX_PER_VECTOR: usize = 2;

    #[inline(always)]
    unsafe fn load_complex(ptr: *const Complex<f32>) -> Self {
        _mm_loadu_ps(ptr as *const f32)
    }
    #[inline(always)]
    unsafe fn store_complex(ptr: *mut Complex<f32>, data: Self) {
        _mm_storeu_ps(ptr as *mut f32, data)
    }
    #[inline(always)]
    unsafe fn broadcast_complex_elements(value: Complex<f32>) -> Self {
        _mm_set_ps(value.im, value.re, value.im, value.re)
    }
    #[inline(always)]
    unsafe fn half_root2() -> Self {
        _mm_set1_ps(0.5f32.sqrt())
    }

    #[inline(always)]
    unsafe fn add(left: Self, right: Self) -> Self {
        _mm_add_ps(left, right)
    }
    #[inline(always)]
    unsafe fn sub(left: Self, right: Self) -> Self {
        _mm_sub_ps(left, right)
    }
    #[inline(always)]
    unsafe fn mul(left: Self, right: Self) -> Self {
        _mm_mul_ps(left, right)
    }
    #[inline(always)]
    unsafe fn xor(left: Self, right: Self) -> Self {
        _mm_xor_ps(left, right)
    }
    #[inline(always)]
    unsafe fn addsub(left: Self, right: Self) -> Self {
        _mm_addsub_ps(left, right)
    }

    #[inline(always)]
    unsafe fn swap_complex_components(self) -> Self {
        _mm_shuffle_ps(self, self, 0xB1)
    }
    #[inline(always)]
    unsafe fn duplicate_complex_components(self) -> (Self, Self) {
        (_mm_moveldup_ps(self), _mm_movehdup_ps(self))
    }

    #[inline(always)]
    unsafe fn transpose2_packed(rows: [Self; 2]) -> [Self; 2] {
        [unpacklo_complex(rows), unpackhi_complex(rows)]
    }
    #[inline(always)]
    unsafe fn transpose4_packed(rows: [Self; 4]) -> [Self; 4] {
        let [unpacked0, unpacked1] = Self::transpose2_packed([rows[0], rows[1]]);
        let [unpacked2, unpacked3] = Self::transpose2_packed([rows[2], rows[3]]);

        [unpacked0, unpacked2, unpacked1, unpacked3]
    }
    #[inline(always)]
    unsafe fn transpose8_packed(rows: [Self; 8]) -> [Self; 8] {
        let chunk0 = [rows[0], rows[1], rows[2], rows[3]];
        let chunk1 = [rows[4], rows[5], rows[6], rows[7]];

        let output0 = Self::transpose4_packed(chunk0);
        let output1 = Self::transpose4_packed(chunk1);

        [
            output0[0], output0[1], output1[0], output1[1], output0[2], output0[3], output1[2],
            output1[3],
        ]
    }
}
