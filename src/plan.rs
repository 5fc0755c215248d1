use std::sync::Arc;

use tracing::debug;

use crate::algorithm::{MixedRadix2d, Radix2Family, Radix4Family, Radix8Family, RadixFamily};
use crate::common::validate_axis_len;
use crate::fft_cache::{Fft2dCache, TwiddleCache};
use crate::isa::Isa;
use crate::radix::Radix;
use crate::Fft2d;

/// The 2D FFT planner creates new FFT algorithm instances.
///
/// The planner detects the widest instruction set the CPU supports once, when it is created, and every FFT it plans
/// runs on that instruction set. It also caches what it builds: planning the same grid shape and radix twice returns
/// the same instance, and axes of the same length share one twiddle table.
///
/// ~~~
/// // Perform a forward 2D FFT of a 128 x 32 grid
/// use std::sync::Arc;
/// use radix2d::{Fft2d, Fft2dPlanner, Radix};
/// use radix2d::num_complex::Complex;
///
/// let mut planner = Fft2dPlanner::new();
/// let fft = planner.plan_fft2d_forward(128, 32, Radix::Radix4);
///
/// let input = vec![Complex{ re: 0.0f32, im: 0.0f32 }; 128 * 32];
/// let mut output = vec![Complex{ re: 0.0f32, im: 0.0f32 }; 128 * 32];
/// fft.process_outofplace(&input, &mut output);
///
/// // The fft instance returned by the planner has the type `Arc<dyn Fft2d>`,
/// // so it can be shared between threads
/// let fft_clone = Arc::clone(&fft);
/// ~~~
pub struct Fft2dPlanner {
    isa: Isa,
    fft_cache: Fft2dCache,
    twiddle_cache: TwiddleCache,
}

impl Fft2dPlanner {
    /// Creates a new `Fft2dPlanner` that uses the widest instruction set this CPU supports.
    pub fn new() -> Self {
        Self::with_available_isa(Isa::detect())
    }

    /// Creates a new `Fft2dPlanner` that only plans scalar FFTs, regardless of what the CPU supports.
    pub fn new_scalar() -> Self {
        Self::with_available_isa(Isa::Scalar)
    }

    /// Creates a new `Fft2dPlanner` that plans FFTs for `isa`.
    ///
    /// Returns `None` if `isa` was not compiled in, or if this CPU does not support it.
    pub fn with_isa(isa: Isa) -> Option<Self> {
        if isa.is_available() {
            Some(Self::with_available_isa(isa))
        } else {
            None
        }
    }

    fn with_available_isa(isa: Isa) -> Self {
        debug!(isa = %isa, "created 2D FFT planner");
        Self {
            isa,
            fft_cache: Fft2dCache::new(),
            twiddle_cache: TwiddleCache::new(),
        }
    }

    /// The instruction set every planned FFT runs on
    pub fn isa(&self) -> Isa {
        self.isa
    }

    /// Returns a `Fft2d` instance which computes forward 2D FFTs of `width` x `height` grids using stages of `radix`.
    ///
    /// If this is called multiple times, the planner will attempt to re-use internal data between calls, reducing
    /// memory usage and FFT initialization time.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not a power of two.
    pub fn plan_fft2d_forward(&mut self, width: usize, height: usize, radix: Radix) -> Arc<dyn Fft2d> {
        validate_axis_len(width, "width");
        validate_axis_len(height, "height");

        if let Some(fft) = self.fft_cache.get(width, height, radix) {
            return fft;
        }

        let fft = match radix {
            Radix::Radix2 => self.build_fft::<Radix2Family>(width, height),
            Radix::Radix4 => self.build_fft::<Radix4Family>(width, height),
            Radix::Radix8 => self.build_fft::<Radix8Family>(width, height),
        };
        self.fft_cache.insert(&fft);
        debug!(
            width,
            height,
            radix = %radix,
            cached_twiddle_tables = self.twiddle_cache.len(),
            "planned 2D FFT"
        );
        fft
    }

    fn build_fft<R: RadixFamily>(&mut self, width: usize, height: usize) -> Arc<dyn Fft2d> {
        let row_twiddles = self.twiddle_cache.get_or_build(width, R::RADIX);
        let column_twiddles = self.twiddle_cache.get_or_build(height, R::RADIX);
        Arc::new(MixedRadix2d::<R>::with_twiddles(
            row_twiddles,
            column_twiddles,
            self.isa,
        )) as Arc<dyn Fft2d>
    }
}

impl Default for Fft2dPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::Length2d;

    #[test]
    fn test_plan_shape() {
        let mut planner = Fft2dPlanner::new();
        for radix in Radix::ALL {
            let fft = planner.plan_fft2d_forward(64, 8, radix);
            assert_eq!(fft.width(), 64);
            assert_eq!(fft.height(), 8);
            assert_eq!(fft.len(), 512);
            assert_eq!(fft.get_scratch_len(), 512);
            assert_eq!(fft.radix(), radix);
            assert_eq!(fft.isa(), planner.isa());
        }
    }

    #[test]
    fn test_plan_is_cached() {
        let mut planner = Fft2dPlanner::new();
        let first = planner.plan_fft2d_forward(32, 32, Radix::Radix8);
        let second = planner.plan_fft2d_forward(32, 32, Radix::Radix8);
        assert!(Arc::ptr_eq(&first, &second));

        let other = planner.plan_fft2d_forward(32, 32, Radix::Radix4);
        assert!(!Arc::ptr_eq(&first, &other));
    }

    #[test]
    fn test_twiddles_shared_between_axes() {
        let mut planner = Fft2dPlanner::new_scalar();
        planner.plan_fft2d_forward(16, 16, Radix::Radix2);
        assert_eq!(planner.twiddle_cache.len(), 1);
        planner.plan_fft2d_forward(16, 64, Radix::Radix2);
        assert_eq!(planner.twiddle_cache.len(), 2);
        planner.plan_fft2d_forward(64, 16, Radix::Radix2);
        assert_eq!(planner.twiddle_cache.len(), 2);
    }

    #[test]
    fn test_scalar_planner() {
        let mut planner = Fft2dPlanner::new_scalar();
        assert_eq!(planner.isa(), Isa::Scalar);
        assert_eq!(planner.plan_fft2d_forward(8, 8, Radix::Radix2).isa(), Isa::Scalar);
        assert!(Fft2dPlanner::with_isa(Isa::Scalar).is_some());
    }

    #[test]
    #[should_panic]
    fn test_non_power_of_two() {
        Fft2dPlanner::new().plan_fft2d_forward(12, 8, Radix::Radix2);
    }
}
