//! Rust functions bound to C and C++ callers through the C ABI.
//!
//! The exported surface is declared in `include/TWCryptoBindgen.h`. The
//! smallest member of that surface, `TWRustFunction`, returns a fixed value
//! and exists so that callers on the other side of the boundary can check
//! that the library links and resolves.

#![allow(clippy::missing_safety_doc)]

pub mod error;
pub mod ffi;
pub mod macros;
pub mod memory;
pub mod result;

pub use error::{Error, Result};

/// Value returned by every call to `TWRustFunction`.
pub const RUST_FUNCTION_VALUE: i32 = 42;

/// Safe counterpart of the exported `TWRustFunction`.
pub fn rust_function() -> i32 {
    RUST_FUNCTION_VALUE
}
