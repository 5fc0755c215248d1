use core::arch::aarch64::*;

use num_complex::Complex;

use crate::vector::ComplexVector;

// Pack low (1st) complex
// left: l1.re, l1.im, l2.re, l2.im
// right: r1.re, r1.im, r2.re, r2.im
// --> l1.re, l1.im, r1.re, r1.im
#[inline(always)]
unsafe fn extract_lo_lo_f32(left: float32x4_t, right: float32x4_t) -> float32x4_t {
    vcombine_f32(vget_low_f32(left), vget_low_f32(right))
}

// Pack high (2nd) complex
// left: l1.re, l1.im, l2.re, l2.im
// right: r1.re, r1.im, r2.re, r2.im
// --> l2.re, l2.im, r2.re, r2.im
#[inline(always)]
unsafe fn extract_hi_hi_f32(left: float32x4_t, right: float32x4_t) -> float32x4_t {
    vcombine_f32(vget_high_f32(left), vget_high_f32(right))
}

impl ComplexVector for float32x4_t {
    const COMPLEX_PER_VECTOR: usize = 2;

    #[inline(always)]
    unsafe fn load_complex(ptr: *const Complex<f32>) -> Self {
        vld1q_f32(ptr as *const f32)
    }
    #[inline(always)]
    unsafe fn store_complex(ptr: *mut Complex<f32>, data: Self) {
        vst1q_f32(ptr as *mut f32, data)
    }
    #[inline(always)]
    unsafe fn broadcast_complex_elements(value: Complex<f32>) -> Self {
        vld1q_f32([value.re, value.im, value.re, value.im].as_ptr())
    }
    #[inline(always)]
    unsafe fn half_root2() -> Self {
        vmovq_n_f32(0.5f32.sqrt())
    }

    #[inline(always)]
    unsafe fn add(left: Self, right: Self) -> Self {
        vaddq_f32(left, right)
    }
    #[inline(always)]
    unsafe fn sub(left: Self, right: Self) -> Self {
        vsubq_f32(left, right)
    }
    #[inline(always)]
    unsafe fn mul(left: Self, right: Self) -> Self {
        vmulq_f32(left, right)
    }
    #[inline(always)]
    unsafe fn xor(left: Self, right: Self) -> Self {
        vreinterpretq_f32_u32(veorq_u32(
            vreinterpretq_u32_f32(left),
            vreinterpretq_u32_f32(right),
        ))
    }
    #[inline(always)]
    unsafe fn addsub(left: Self, right: Self) -> Self {
        // Neon has no addsub instruction: flip the sign of the real slots of `right`, then add
        let sign = vld1q_f32([-0.0f32, 0.0, -0.0, 0.0].as_ptr());
        vaddq_f32(left, Self::xor(right, sign))
    }

    #[inline(always)]
    unsafe fn swap_complex_components(self) -> Self {
        vrev64q_f32(self)
    }
    #[inline(always)]
    unsafe fn duplicate_complex_components(self) -> (Self, Self) {
        (vtrn1q_f32(self, self), vtrn2q_f32(self, self))
    }

    #[inline(always)]
    unsafe fn transpose2_packed(rows: [Self; 2]) -> [Self; 2] {
        [
            extract_lo_lo_f32(rows[0], rows[1]),
            extract_hi_hi_f32(rows[0], rows[1]),
        ]
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
