use std::fmt::Display;

/// The instruction set a 2D FFT runs its stage kernels on.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Isa {
    /// Plain `Complex<f32>` arithmetic, one complex number at a time. Available everywhere.
    Scalar,
    /// 128-bit SSE3 vectors, two complex numbers per vector. x86_64 only.
    Sse3,
    /// 256-bit AVX vectors, four complex numbers per vector. x86_64 only.
    Avx,
    /// 128-bit Neon vectors, two complex numbers per vector. AArch64 only.
    Neon,
}

impl Isa {
    /// Returns the widest instruction set that was compiled in and that the current CPU supports.
    pub fn detect() -> Self {
        if has_avx() {
            Isa::Avx
        } else if has_sse3() {
            Isa::Sse3
        } else if has_neon() {
            Isa::Neon
        } else {
            Isa::Scalar
        }
    }

    /// Returns true if this instruction set was compiled in and the current CPU supports it.
    pub fn is_available(self) -> bool {
        match self {
            Isa::Scalar => true,
            Isa::Sse3 => has_sse3(),
            Isa::Avx => has_avx(),
            Isa::Neon => has_neon(),
        }
    }

    /// The number of complex numbers one vector of this instruction set holds
    pub const fn complex_per_vector(self) -> usize {
        match self {
            Isa::Scalar => 1,
            Isa::Sse3 | Isa::Neon => 2,
            Isa::Avx => 4,
        }
    }
}

impl Display for Isa {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> Result<(), ::std::fmt::Error> {
        match self {
            Isa::Scalar => f.write_str("scalar"),
            Isa::Sse3 => f.write_str("sse3"),
            Isa::Avx => f.write_str("avx"),
            Isa::Neon => f.write_str("neon"),
        }
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx"))]
fn has_avx() -> bool {
    is_x86_feature_detected!("avx")
}
#[cfg(not(all(target_arch = "x86_64", feature = "avx")))]
fn has_avx() -> bool {
    false
}

#[cfg(all(target_arch = "x86_64", feature = "sse"))]
fn has_sse3() -> bool {
    is_x86_feature_detected!("sse3")
}
#[cfg(not(all(target_arch = "x86_64", feature = "sse")))]
fn has_sse3() -> bool {
    false
}

#[cfg(all(target_arch = "aarch64", feature = "neon"))]
fn has_neon() -> bool {
    std::arch::is_aarch64_feature_detected!("neon")
}
#[cfg(not(all(target_arch = "aarch64", feature = "neon")))]
fn has_neon() -> bool {
    false
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_detected_isa_is_available() {
        let isa = Isa::detect();
        assert!(isa.is_available(), "detected {} but it is not available", isa);
        assert!(Isa::Scalar.is_available());
    }

    #[test]
    fn test_foreign_isa_unavailable() {
        if cfg!(target_arch = "x86_64") {
            assert!(!Isa::Neon.is_available());
        }
        if cfg!(target_arch = "aarch64") {
            assert!(!Isa::Avx.is_available());
            assert!(!Isa::Sse3.is_available());
        }
    }

    #[test]
    fn test_complex_per_vector() {
        assert_eq!(Isa::Scalar.complex_per_vector(), 1);
        assert_eq!(Isa::Sse3.complex_per_vector(), 2);
        assert_eq!(Isa::Neon.complex_per_vector(), 2);
        assert_eq!(Isa::Avx.complex_per_vector(), 4);
    }
}
