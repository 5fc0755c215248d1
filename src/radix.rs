use std::fmt::Display;

use crate::common::validate_axis_len;

/// The radix family a 2D FFT decomposes each axis into.
///
/// An axis of length `2^b` is split into stages of the family radix. When `b` is not a multiple of the family's bit
/// count, the first stage falls back to the smaller radix that covers the leftover bits.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Radix {
    Radix2,
    Radix4,
    Radix8,
}

impl Radix {
    /// All radix families, smallest first
    pub const ALL: [Radix; 3] = [Radix::Radix2, Radix::Radix4, Radix::Radix8];

    /// The number of legs one butterfly of this radix combines
    #[inline(always)]
    pub const fn len(self) -> usize {
        1 << self.bits()
    }

    /// log2 of the radix
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        match self {
            Radix::Radix2 => 1,
            Radix::Radix4 => 2,
            Radix::Radix8 => 3,
        }
    }

    pub(crate) fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            1 => Some(Radix::Radix2),
            2 => Some(Radix::Radix4),
            3 => Some(Radix::Radix8),
            _ => None,
        }
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> Result<(), ::std::fmt::Error> {
        write!(f, "radix-{}", self.len())
    }
}

/// One butterfly stage of an axis transform.
///
/// `stride` is the length of the sub-transforms this stage combines: the first stage has a stride of 1, and each later
/// stage multiplies it by the previous stage's radix.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Stage {
    pub radix: Radix,
    pub stride: usize,
}

impl Stage {
    /// The number of twiddle factors this stage reads: one per non-trivial leg per position in the sub-transform
    #[inline(always)]
    pub fn twiddle_count(&self) -> usize {
        self.stride * (self.radix.len() - 1)
    }
}

/// The ordered list of stages that transforms one axis of a power-of-two length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagePlan {
    len: usize,
    stages: Box<[Stage]>,
}

impl StagePlan {
    /// Splits an axis of `len` samples into stages of `radix`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is not a power of two.
    pub fn new(len: usize, radix: Radix) -> Self {
        validate_axis_len(len, "axis length");

        let total_bits = len.trailing_zeros();
        let mut stages = Vec::new();
        if total_bits > 0 {
            let leftover_bits = total_bits % radix.bits();
            let first_radix = Radix::from_bits(leftover_bits).unwrap_or(radix);
            stages.push(Stage {
                radix: first_radix,
                stride: 1,
            });

            let mut stride = first_radix.len();
            while stride < len {
                stages.push(Stage { radix, stride });
                stride *= radix.len();
            }
        }

        Self {
            len,
            stages: stages.into_boxed_slice(),
        }
    }

    /// The axis length this plan transforms
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// The total number of twiddle factors this plan's stages read
    pub fn twiddle_count(&self) -> usize {
        self.stages.iter().map(Stage::twiddle_count).sum()
    }
}

/// Computes where a stage writes the first output of the butterfly at input position `i`.
///
/// `stride` is the stage's sub-transform length and `radix_bits` is log2 of its radix. The butterfly's other outputs
/// follow at `stride`-sized steps.
#[inline(always)]
pub const fn stage_output_index(i: usize, stride: usize, radix_bits: u32) -> usize {
    let k = i & (stride - 1);
    ((i - k) << radix_bits) + k
}

/// Output position of the radix-2 butterfly at input position `i`, for a stage of the given stride
#[inline(always)]
pub const fn radix2_output_index(i: usize, stride: usize) -> usize {
    stage_output_index(i, stride, 1)
}

/// Output position of the radix-4 butterfly at input position `i`, for a stage of the given stride
#[inline(always)]
pub const fn radix4_output_index(i: usize, stride: usize) -> usize {
    stage_output_index(i, stride, 2)
}

/// Output position of the radix-8 butterfly at input position `i`, for a stage of the given stride
#[inline(always)]
pub const fn radix8_output_index(i: usize, stride: usize) -> usize {
    stage_output_index(i, stride, 3)
}
