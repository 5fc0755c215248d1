// Prints an error raised by a 2D FFT call with out-of-place buffers. Always panics.
#[cold]
#[inline(never)]
pub fn fft_error_outofplace(
    expected_len: usize,
    actual_input: usize,
    actual_output: usize,
    expected_scratch: usize,
    actual_scratch: usize,
) {
    assert_eq!(
        actual_input, expected_len,
        "Provided FFT input buffer was length {}, but the grid holds {} samples",
        actual_input, expected_len
    );
    assert_eq!(
        actual_output, expected_len,
        "Provided FFT output buffer was length {}, but the grid holds {} samples",
        actual_output, expected_len
    );
    assert!(
        actual_scratch >= expected_scratch,
        "Not enough scratch space was provided. Expected scratch len >= {}, got scratch len = {}",
        expected_scratch,
        actual_scratch
    );
}

// Panics unless `len` is a usable axis length for the stage kernels
#[inline]
pub fn validate_axis_len(len: usize, axis: &str) {
    assert!(
        len.is_power_of_two(),
        "FFT {} must be a nonzero power of two, got {}",
        axis,
        len
    );
}

macro_rules! boilerplate_fft2d {
    ($struct_name:ident) => {
        impl<R: RadixFamily> Fft2d for $struct_name<R> {
            fn process_outofplace_with_scratch(
                &self,
                input: &[Complex<f32>],
                output: &mut [Complex<f32>],
                scratch: &mut [Complex<f32>],
            ) {
                let required_scratch = self.get_scratch_len();
                if input.len() != self.len()
                    || output.len() != self.len()
                    || scratch.len() < required_scratch
                {
                    // We want to trigger a panic, but we want to avoid doing it in this function to reduce code size, so call a function marked cold and inline(never) that will do it for us
                    crate::common::fft_error_outofplace(
                        self.len(),
                        input.len(),
                        output.len(),
                        required_scratch,
                        scratch.len(),
                    );
                    return; // Unreachable, because fft_error_outofplace asserts, but it helps codegen to put it here
                }

                let scratch = &mut scratch[..required_scratch];
                self.perform_fft_dispatch(input, output, scratch);
            }
            #[inline(always)]
            fn get_scratch_len(&self) -> usize {
                self.len()
            }
            #[inline(always)]
            fn radix(&self) -> Radix {
                R::RADIX
            }
            #[inline(always)]
            fn isa(&self) -> Isa {
                self.isa
            }
        }
        impl<R: RadixFamily> Length2d for $struct_name<R> {
            #[inline(always)]
            fn width(&self) -> usize {
                self.width
            }
            #[inline(always)]
            fn height(&self) -> usize {
                self.height
            }
        }
    };
}
