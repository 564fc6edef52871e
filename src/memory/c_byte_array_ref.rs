use crate::{Error, Result};

/// Borrowed view over bytes owned by the caller.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CByteArrayRef {
    data: *const u8,
    size: usize,
}

impl CByteArrayRef {
    pub fn new(data: *const u8, size: usize) -> CByteArrayRef {
        CByteArrayRef { data, size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// A null `data` with zero `size` is the empty slice.
    ///
    /// # Safety
    ///
    /// `data` must point to `size` initialized bytes that stay valid and
    /// unmodified for `'a`.
    pub unsafe fn try_as_slice<'a>(&self) -> Result<&'a [u8]> {
        if self.data.is_null() {
            return if self.size == 0 {
                Ok(&[])
            } else {
                Err(Error::NullPointer(self.size))
            };
        }
        if self.size > isize::MAX as usize {
            return Err(Error::LengthOverflow(self.size));
        }
        Ok(std::slice::from_raw_parts(self.data, self.size))
    }

    /// # Safety
    ///
    /// See [`CByteArrayRef::try_as_slice`].
    pub unsafe fn as_slice<'a>(&self) -> Option<&'a [u8]> {
        self.try_as_slice().ok()
    }

    /// # Safety
    ///
    /// See [`CByteArrayRef::try_as_slice`].
    pub unsafe fn to_vec(&self) -> Option<Vec<u8>> {
        self.as_slice().map(<[u8]>::to_vec)
    }
}
