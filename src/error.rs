use thiserror::Error;

/// Errors raised while validating values that crossed the FFI boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("null pointer with a non-zero length of {0}")]
    NullPointer(usize),
    #[error("length {0} exceeds the addressable range")]
    LengthOverflow(usize),
}

impl Error {
    /// Code reported to C callers in `CResult::code`. Zero is reserved for success.
    pub fn code(&self) -> i32 {
        match self {
            Error::NullPointer(_) => 1,
            Error::LengthOverflow(_) => 2,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
