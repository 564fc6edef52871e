use std::path::Path;

use clap::{App, Arg, ArgMatches, SubCommand};

use crate::config::{self, SmokeConfig};
use crate::error::SmokeError;
use crate::library;
use crate::platform::Platform;

// Subcommand Name
pub const CHECK: &str = "check";

// check options
const SYMBOL: &str = "symbol";
const EXPECT: &str = "expect";
const ITERATIONS: &str = "iterations";

const DEFAULT_SYMBOL: &str = "TWRustFunction";
const DEFAULT_EXPECT: i32 = 42;
const DEFAULT_ITERATIONS: u32 = 8;

/// Signature of the bound functions this subcommand can call.
type BoundFunction = unsafe extern "C" fn() -> i32;

pub fn subcommand() -> App<'static, 'static> {
    SubCommand::with_name(CHECK)
        .about("Loads each shared library and checks the value a bound function returns")
        .args(&config::selection_args())
        .arg(
            Arg::with_name(SYMBOL)
                .long("symbol")
                .value_name("NAME")
                .takes_value(true)
                .help("Exported zero-argument function returning an int32. Defaults to TWRustFunction."),
        )
        .arg(
            Arg::with_name(EXPECT)
                .long("expect")
                .value_name("VALUE")
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("Value every call must return. Defaults to 42."),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long("iterations")
                .value_name("COUNT")
                .takes_value(true)
                .help("How many times to call the function. Defaults to 8."),
        )
}

/// What `check` calls and what it expects back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    pub symbol: String,
    pub expected: i32,
    pub iterations: u32,
}

impl CheckOptions {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, SmokeError> {
        let symbol = matches.value_of(SYMBOL).unwrap_or(DEFAULT_SYMBOL).to_string();
        let expected = config::parse_value(matches, EXPECT, DEFAULT_EXPECT)?;
        let iterations = config::parse_value(matches, ITERATIONS, DEFAULT_ITERATIONS)?;
        if iterations == 0 {
            return Err(SmokeError::InvalidArgument {
                arg: ITERATIONS,
                value: iterations.to_string(),
            });
        }

        Ok(CheckOptions {
            symbol,
            expected,
            iterations,
        })
    }
}

pub fn invoke(args: &crate::SmokeSharedArgs, matches: &ArgMatches) -> Result<(), SmokeError> {
    let config = SmokeConfig::from_matches(matches);
    let options = CheckOptions::from_matches(matches)?;

    let platform = Platform::from_target(config.target.as_deref())?;
    let dir = library::artifact_dir(args.metadata.target_directory.as_std_path(), &config);

    let libraries: Vec<_> = library::select(&args.metadata, &config.packages)?
        .into_iter()
        .filter(|l| l.has_cdylib())
        .collect();
    if libraries.is_empty() {
        return Err(SmokeError::NoLibraries("cdylib"));
    }

    for library in &libraries {
        let path = dir.join(library.dynamic_lib_name(&platform));
        log::debug!("loading {}", path.display());

        call_bound_function(&path, &options)?;

        log::info!(
            "{}: `{}` returned {} on all {} calls",
            library.package(),
            options.symbol,
            options.expected,
            options.iterations
        );
    }

    Ok(())
}

/// Calls the bound function of the shared library at `path` until a call
/// returns something other than the expected value.
pub fn call_bound_function(path: &Path, options: &CheckOptions) -> Result<(), SmokeError> {
    // SAFETY: loading runs the static initializers of the library.
    let library = unsafe { libloading::Library::new(path) }.map_err(|source| SmokeError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let function = unsafe { library.get::<BoundFunction>(options.symbol.as_bytes()) }.map_err(
        |source| SmokeError::Symbol {
            symbol: options.symbol.clone(),
            path: path.to_path_buf(),
            source,
        },
    )?;

    verify(options, || unsafe { function() })
}

/// Runs `call` up to `options.iterations` times and fails on the first
/// value that differs from `options.expected`.
pub fn verify(options: &CheckOptions, mut call: impl FnMut() -> i32) -> Result<(), SmokeError> {
    for call_number in 1..=options.iterations {
        let actual = call();
        if actual != options.expected {
            return Err(SmokeError::Mismatch {
                symbol: options.symbol.clone(),
                call: call_number,
                actual,
                expected: options.expected,
            });
        }
    }
    Ok(())
}
