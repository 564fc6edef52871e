//! Byte buffers passed across the C ABI.

pub mod c_byte_array;
pub mod c_byte_array_ref;

pub use c_byte_array::CByteArray;
pub use c_byte_array_ref::CByteArrayRef;
