use std::alloc::{self, Layout};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use num_complex::Complex;

use crate::error::FftError;

/// Byte alignment of every `AlignedBuffer`: one cache line, and enough for any vector width the kernels use
pub const BUFFER_ALIGNMENT: usize = 64;

/// A zero-initialized, fixed-length buffer of `Complex<f32>` whose first element is aligned to `BUFFER_ALIGNMENT` bytes.
///
/// Dereferences to a slice, so it can be passed anywhere a `&[Complex<f32>]` or `&mut [Complex<f32>]` is expected.
pub struct AlignedBuffer {
    ptr: NonNull<Complex<f32>>,
    len: usize,
}

// The buffer uniquely owns its allocation, like a Box<[Complex<f32>]>
unsafe impl Send for AlignedBuffer {}
unsafe impl Sync for AlignedBuffer {}

impl AlignedBuffer {
    /// Allocates `len` zeroed complex numbers.
    pub fn new(len: usize) -> Result<Self, FftError> {
        if len == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len,
            });
        }

        let layout = Self::layout(len)?;
        // Safety: the layout has a nonzero size
        let raw = unsafe { alloc::alloc_zeroed(layout) } as *mut Complex<f32>;
        let ptr = NonNull::new(raw).ok_or(FftError::Allocation {
            bytes: layout.size(),
        })?;
        Ok(Self { ptr, len })
    }

    /// Allocates a buffer holding a copy of `data`.
    pub fn from_slice(data: &[Complex<f32>]) -> Result<Self, FftError> {
        let mut buffer = Self::new(data.len())?;
        buffer.copy_from_slice(data);
        Ok(buffer)
    }

    fn layout(len: usize) -> Result<Layout, FftError> {
        let overflow = FftError::Allocation { bytes: usize::MAX };
        let bytes = len
            .checked_mul(std::mem::size_of::<Complex<f32>>())
            .ok_or(overflow)?;
        Layout::from_size_align(bytes, BUFFER_ALIGNMENT).map_err(|_| FftError::Allocation { bytes })
    }
}

impl Drop for AlignedBuffer {
    fn drop(&mut self) {
        if self.len > 0 {
            // Safety: the same layout was accepted when the buffer was allocated
            unsafe {
                let layout = Layout::from_size_align_unchecked(
                    self.len * std::mem::size_of::<Complex<f32>>(),
                    BUFFER_ALIGNMENT,
                );
                alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
        }
    }
}

impl Deref for AlignedBuffer {
    type Target = [Complex<f32>];
    fn deref(&self) -> &Self::Target {
        // Safety: ptr is valid for len initialized elements, or dangling with len 0
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}
impl DerefMut for AlignedBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Clone for AlignedBuffer {
    fn clone(&self) -> Self {
        match Self::from_slice(self) {
            Ok(buffer) => buffer,
            Err(_) => alloc::handle_alloc_error(Layout::new::<Complex<f32>>()),
        }
    }
}

impl fmt::Debug for AlignedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("len", &self.len)
            .finish()
    }
}
