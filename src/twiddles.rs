use num_complex::Complex;

use crate::radix::{Radix, StagePlan};
use crate::FftDirection;

/// Computes `cos(pi * sign * k / p) + i * sin(pi * sign * k / p)`, where `sign` is -1 for forward FFTs and +1 for inverse.
///
/// The angle is evaluated in f64 and the result rounded to f32.
pub fn twiddle(direction: FftDirection, k: usize, p: usize) -> Complex<f32> {
    let angle = std::f64::consts::PI * direction.sign() * k as f64 / p as f64;
    Complex {
        re: angle.cos() as f32,
        im: angle.sin() as f32,
    }
}

/// The precomputed twiddle factors of every stage of one axis transform.
///
/// Stages are laid out back to back in execution order. A stage of radix `q` and stride `p` owns a block of
/// `p * (q - 1)` factors; within the block, leg `m` (for `m` in `1..q`) occupies `[(m - 1) * p, m * p)`, and its entry `k`
/// is `exp(sign * 2 * pi * i * m * k / (q * p))`. The first stage's block multiplies by 1 everywhere and is skipped by
/// the kernels, but it is still stored so that every block sits at the offset the stage plan implies.
pub struct TwiddleTable {
    plan: StagePlan,
    radix: Radix,
    direction: FftDirection,
    twiddles: Box<[Complex<f32>]>,
}

impl TwiddleTable {
    pub fn new(len: usize, radix: Radix, direction: FftDirection) -> Self {
        let plan = StagePlan::new(len, radix);

        let mut twiddles = Vec::with_capacity(plan.twiddle_count());
        for stage in plan.stages() {
            let legs = stage.radix.len();
            let half_span = legs * stage.stride / 2;
            for leg in 1..legs {
                for k in 0..stage.stride {
                    twiddles.push(twiddle(direction, leg * k, half_span));
                }
            }
        }

        Self {
            plan,
            radix,
            direction,
            twiddles: twiddles.into_boxed_slice(),
        }
    }

    /// The stage plan the table was built for
    #[inline(always)]
    pub fn plan(&self) -> &StagePlan {
        &self.plan
    }

    /// The radix family the table was built for
    #[inline(always)]
    pub fn radix(&self) -> Radix {
        self.radix
    }

    #[inline(always)]
    pub fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.twiddles.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.twiddles.is_empty()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[Complex<f32>] {
        &self.twiddles
    }

    /// Splits the table into one block per stage, in stage order
    pub fn stage_blocks(&self) -> impl Iterator<Item = &[Complex<f32>]> + '_ {
        let mut remaining: &[Complex<f32>] = &self.twiddles;
        self.plan.stages().iter().map(move |stage| {
            let (block, rest) = remaining.split_at(stage.twiddle_count());
            remaining = rest;
            block
        })
    }
}
