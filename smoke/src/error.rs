use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmokeError {
    #[error("failed to read cargo metadata: {0}")]
    Metadata(#[from] cargo_metadata::Error),
    #[error("`{0}` is not a known target triple")]
    UnknownTarget(String),
    #[error("`{0}` is not a member of the workspace")]
    UnknownPackage(String),
    #[error("the selected packages build no {0} target")]
    NoLibraries(&'static str),
    #[error("invalid value `{value}` for --{arg}")]
    InvalidArgument { arg: &'static str, value: String },
    #[error("failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    #[error("symbol `{symbol}` not found in {}: {source}", .path.display())]
    Symbol {
        symbol: String,
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    #[error("`{symbol}` returned {actual} on call {call}, expected {expected}")]
    Mismatch {
        symbol: String,
        call: u32,
        actual: i32,
        expected: i32,
    },
}
