use std::marker::PhantomData;
use std::sync::Arc;

use num_complex::Complex;
use tracing::debug;

use super::{first_stage_columns, first_stage_rows, RadixFamily};
use crate::array_utils::stage_buffers;
use crate::common::validate_axis_len;
use crate::isa::Isa;
use crate::radix::{Radix, StagePlan};
use crate::twiddles::TwiddleTable;
use crate::vector::ComplexVector;
use crate::{Fft2d, FftDirection, Length2d};

/// Forward 2D FFT of a power-of-two grid, built from the stages of one radix family
///
/// Every row is transformed first, then every column. Stages alternate between the output buffer and the scratch
/// buffer so that the last one lands in the output.
///
/// ~~~
/// // Computes a forward FFT of a 256 x 64 grid with radix-4 stages on the best available instruction set
/// use radix2d::algorithm::{MixedRadix2d, Radix4Family};
/// use radix2d::Fft2d;
/// use radix2d::num_complex::Complex;
/// use radix2d::num_traits::Zero;
///
/// let input:  Vec<Complex<f32>> = vec![Zero::zero(); 256 * 64];
/// let mut output: Vec<Complex<f32>> = vec![Zero::zero(); 256 * 64];
///
/// let fft = MixedRadix2d::<Radix4Family>::new(256, 64);
/// fft.process_outofplace(&input, &mut output);
/// ~~~
pub struct MixedRadix2d<R> {
    row_twiddles: Arc<TwiddleTable>,
    column_twiddles: Arc<TwiddleTable>,
    width: usize,
    height: usize,
    isa: Isa,
    _phantom: PhantomData<R>,
}

boilerplate_fft2d!(MixedRadix2d);

impl<R: RadixFamily> MixedRadix2d<R> {
    /// Preallocates the twiddle factors for a `width` x `height` grid, and picks the best instruction set this CPU supports.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not a power of two.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_isa(width, height, Isa::detect())
    }

    /// Like `new`, but runs the stage kernels on `isa`.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not a power of two, or if `isa` is not available on this CPU.
    pub fn with_isa(width: usize, height: usize, isa: Isa) -> Self {
        validate_axis_len(width, "width");
        validate_axis_len(height, "height");

        let row_twiddles = Arc::new(TwiddleTable::new(width, R::RADIX, FftDirection::Forward));
        let column_twiddles = if height == width {
            Arc::clone(&row_twiddles)
        } else {
            Arc::new(TwiddleTable::new(height, R::RADIX, FftDirection::Forward))
        };
        Self::with_twiddles(row_twiddles, column_twiddles, isa)
    }

    /// Builds the algorithm from precomputed twiddle tables. The grid width is the row table's length, and the grid
    /// height is the column table's length.
    ///
    /// # Panics
    ///
    /// Panics if either table was not built for this radix family and the forward direction, or if `isa` is not
    /// available on this CPU.
    pub fn with_twiddles(
        row_twiddles: Arc<TwiddleTable>,
        column_twiddles: Arc<TwiddleTable>,
        isa: Isa,
    ) -> Self {
        for table in [&row_twiddles, &column_twiddles] {
            assert_eq!(
                table.radix(),
                R::RADIX,
                "Twiddle table was built for {}, but this algorithm uses {}",
                table.radix(),
                R::RADIX
            );
            assert_eq!(
                table.direction(),
                FftDirection::Forward,
                "MixedRadix2d only computes forward FFTs"
            );
        }
        assert!(isa.is_available(), "{} is not available on this CPU", isa);

        let width = row_twiddles.plan().len();
        let height = column_twiddles.plan().len();
        debug!(
            width,
            height,
            radix = %R::RADIX,
            isa = %isa,
            row_stages = row_twiddles.plan().stages().len(),
            column_stages = column_twiddles.plan().stages().len(),
            "created 2D FFT"
        );

        Self {
            row_twiddles,
            column_twiddles,
            width,
            height,
            isa,
            _phantom: PhantomData,
        }
    }

    /// The stages that transform each row
    pub fn row_plan(&self) -> &StagePlan {
        self.row_twiddles.plan()
    }

    /// The stages that transform each column
    pub fn column_plan(&self) -> &StagePlan {
        self.column_twiddles.plan()
    }

    fn perform_fft_dispatch(
        &self,
        input: &[Complex<f32>],
        output: &mut [Complex<f32>],
        scratch: &mut [Complex<f32>],
    ) {
        // Safety: `self.isa` was checked to be available when `self` was created
        unsafe {
            match self.isa {
                #[cfg(all(target_arch = "x86_64", feature = "avx"))]
                Isa::Avx => crate::avx::process_avx(self, input, output, scratch),
                #[cfg(all(target_arch = "x86_64", feature = "sse"))]
                Isa::Sse3 => crate::sse::process_sse3(self, input, output, scratch),
                #[cfg(all(target_arch = "aarch64", feature = "neon"))]
                Isa::Neon => crate::neon::process_neon(self, input, output, scratch),
                _ => self.perform_fft::<Complex<f32>>(input, output, scratch),
            }
        }
    }

    /// Runs the row pass and then the column pass with vectors of type `V`.
    ///
    /// Stages whose work does not divide into whole vectors of `V` run on scalar `Complex<f32>` instead. `input` and
    /// `output` must hold exactly `self.len()` elements, and `scratch` must hold at least that many.
    #[inline(always)]
    pub(crate) unsafe fn perform_fft<V: ComplexVector>(
        &self,
        input: &[Complex<f32>],
        output: &mut [Complex<f32>],
        scratch: &mut [Complex<f32>],
    ) {
        let rotation = V::make_rotation90(FftDirection::Forward);
        let scalar_rotation = Complex::<f32>::make_rotation90(FftDirection::Forward);
        let lanes = V::COMPLEX_PER_VECTOR;

        let row_stages = self.row_twiddles.plan().stages();
        let column_stages = self.column_twiddles.plan().stages();
        let total_stages = row_stages.len() + column_stages.len();
        if total_stages == 0 {
            output.copy_from_slice(input);
            return;
        }

        // Row pass. All stages of one row run before the next row starts.
        for y in 0..self.height {
            let row = y * self.width..(y + 1) * self.width;
            let stages = row_stages.iter().zip(self.row_twiddles.stage_blocks());
            for (index, (stage, twiddles)) in stages.enumerate() {
                let (source, destination) =
                    stage_buffers(index, total_stages, input, &mut *output, &mut *scratch);
                let source = &source[row.clone()];
                let destination = &mut destination[row.clone()];

                if index == 0 {
                    if (self.width / stage.radix.len()) % lanes == 0 {
                        first_stage_rows(stage.radix, destination, source, rotation);
                    } else {
                        first_stage_rows(stage.radix, destination, source, scalar_rotation);
                    }
                } else if stage.stride % lanes == 0 {
                    R::generic_stage_rows(destination, source, twiddles, stage.stride, rotation);
                } else {
                    R::generic_stage_rows(
                        destination,
                        source,
                        twiddles,
                        stage.stride,
                        scalar_rotation,
                    );
                }
            }
        }

        // Column pass, vectorized across neighbouring columns
        let columns_fit = self.width % lanes == 0;
        let stages = column_stages.iter().zip(self.column_twiddles.stage_blocks());
        for (index, (stage, twiddles)) in stages.enumerate() {
            let (source, destination) = stage_buffers(
                row_stages.len() + index,
                total_stages,
                input,
                &mut *output,
                &mut *scratch,
            );

            match (index, columns_fit) {
                (0, true) => {
                    first_stage_columns(stage.radix, destination, source, self.width, rotation)
                }
                (0, false) => first_stage_columns(
                    stage.radix,
                    destination,
                    source,
                    self.width,
                    scalar_rotation,
                ),
                (_, true) => R::generic_stage_columns(
                    destination,
                    source,
                    twiddles,
                    stage.stride,
                    self.width,
                    rotation,
                ),
                (_, false) => R::generic_stage_columns(
                    destination,
                    source,
                    twiddles,
                    stage.stride,
                    self.width,
                    scalar_rotation,
                ),
            }
        }
    }
}
