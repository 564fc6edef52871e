use std::mem::ManuallyDrop;

/// Bytes allocated by Rust and handed to the caller.
///
/// The caller owns the array until it passes it back to
/// `tw_c_byte_array_free`. A null array signals that the producing call
/// failed.
#[repr(C)]
#[derive(Debug)]
pub struct CByteArray {
    data: *mut u8,
    size: usize,
    capacity: usize,
}

impl CByteArray {
    pub fn null() -> CByteArray {
        CByteArray {
            data: std::ptr::null_mut(),
            size: 0,
            capacity: 0,
        }
    }

    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }

    pub fn data(&self) -> *const u8 {
        self.data
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Takes the allocation back, leaving `self` null.
    ///
    /// # Safety
    ///
    /// `self` must have been produced by `CByteArray::from(Vec<u8>)` and its
    /// fields must not have been modified by the caller.
    pub unsafe fn take(&mut self) -> Vec<u8> {
        let array = std::mem::replace(self, CByteArray::null());
        array.into_vec()
    }

    /// # Safety
    ///
    /// See [`CByteArray::take`].
    pub unsafe fn into_vec(self) -> Vec<u8> {
        if self.is_null() {
            return Vec::new();
        }
        Vec::from_raw_parts(self.data, self.size, self.capacity)
    }
}

impl From<Vec<u8>> for CByteArray {
    fn from(data: Vec<u8>) -> Self {
        let mut data = ManuallyDrop::new(data);
        CByteArray {
            data: data.as_mut_ptr(),
            size: data.len(),
            capacity: data.capacity(),
        }
    }
}
