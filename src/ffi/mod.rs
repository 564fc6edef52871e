//! Exported C ABI symbols. Keep in sync with `include/TWCryptoBindgen.h`.

pub mod c_byte_array;

pub use c_byte_array::*;

/// Returns [`RUST_FUNCTION_VALUE`](crate::RUST_FUNCTION_VALUE). Linking
/// against this symbol and calling it is the cheapest check that the
/// bindings are wired.
#[export_name = "TWRustFunction"]
pub extern "C" fn tw_rust_function() -> i32 {
    log::trace!("TWRustFunction called");
    crate::rust_function()
}
