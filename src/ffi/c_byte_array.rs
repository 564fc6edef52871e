use crate::memory::{CByteArray, CByteArrayRef};
use crate::result::CUInt64Result;
use crate::try_or_else;

/// Copies `size` bytes at `data` into a new Rust-owned array. Returns a null
/// array if `data` is null while `size` is not zero.
#[no_mangle]
pub unsafe extern "C" fn tw_c_byte_array_new(data: *const u8, size: usize) -> CByteArray {
    log::trace!("tw_c_byte_array_new({} bytes)", size);
    let bytes = try_or_else!(CByteArrayRef::new(data, size).try_as_slice(), CByteArray::null);
    CByteArray::from(bytes.to_vec())
}

#[no_mangle]
pub unsafe extern "C" fn tw_c_byte_array_data(array: *const CByteArray) -> *const u8 {
    match array.as_ref() {
        Some(array) => array.data(),
        None => std::ptr::null(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn tw_c_byte_array_size(array: *const CByteArray) -> usize {
    array.as_ref().map_or(0, CByteArray::size)
}

/// Releases the bytes of `array` and nulls it, so a second call is a no-op.
#[no_mangle]
pub unsafe extern "C" fn tw_c_byte_array_free(array: *mut CByteArray) {
    if let Some(array) = array.as_mut() {
        log::trace!("tw_c_byte_array_free({} bytes)", array.size());
        drop(array.take());
    }
}

/// Reports the length of the caller buffer, or the error code that
/// `tw_c_byte_array_new` would have failed with.
#[no_mangle]
pub unsafe extern "C" fn tw_c_byte_array_checked_size(
    data: *const u8,
    size: usize,
) -> CUInt64Result {
    CByteArrayRef::new(data, size)
        .try_as_slice()
        .map(|bytes| bytes.len() as u64)
        .into()
}
