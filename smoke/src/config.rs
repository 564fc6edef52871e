use std::env;
use std::str::FromStr;

use clap::{Arg, ArgMatches};

use crate::error::SmokeError;

// Selection options shared by `locate` and `check`
const TARGET: &str = "target";
const PROFILE: &str = "profile";
const PACKAGE: &str = "package";

// Environment fallbacks
const TARGET_ENV: &str = "TW_BINDGEN_TARGET";
const PROFILE_ENV: &str = "TW_BINDGEN_PROFILE";

pub fn selection_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(TARGET)
            .long("target")
            .value_name("TRIPLE")
            .takes_value(true)
            .help("The target triple the library was built for. Defaults to $TW_BINDGEN_TARGET, then the host."),
        Arg::with_name(PROFILE)
            .long("profile")
            .value_name("PROFILE")
            .takes_value(true)
            .help("The cargo profile the library was built with. Defaults to $TW_BINDGEN_PROFILE, then dev."),
        Arg::with_name(PACKAGE)
            .long("package")
            .value_name("PACKAGE")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .help("Restricts the run to this workspace package. May be repeated."),
    ]
}

/// Which artifacts of the workspace a subcommand works on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SmokeConfig {
    pub target: Option<String>,
    pub profile: Option<String>,
    pub packages: Vec<String>,
}

impl SmokeConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self::resolve(matches, |name| env::var(name).ok())
    }

    fn resolve(matches: &ArgMatches, env: impl Fn(&str) -> Option<String>) -> Self {
        let target = matches
            .value_of(TARGET)
            .map(str::to_string)
            .or_else(|| env(TARGET_ENV));
        let profile = matches
            .value_of(PROFILE)
            .map(str::to_string)
            .or_else(|| env(PROFILE_ENV));
        let packages = matches
            .values_of(PACKAGE)
            .map_or(Vec::new(), |p| p.map(str::to_string).collect());

        SmokeConfig {
            target,
            profile,
            packages,
        }
    }

    /// Name of the directory cargo writes artifacts of the profile to.
    pub fn profile_dir(&self) -> &str {
        match self.profile.as_deref() {
            None | Some("dev") | Some("test") => "debug",
            Some("release") | Some("bench") => "release",
            Some(custom) => custom,
        }
    }
}

/// Parses the value of `name`, falling back to `default` when it was not given.
pub fn parse_value<T: FromStr>(
    matches: &ArgMatches,
    name: &'static str,
    default: T,
) -> Result<T, SmokeError> {
    match matches.value_of(name) {
        Some(value) => value.parse().map_err(|_| SmokeError::InvalidArgument {
            arg: name,
            value: value.to_string(),
        }),
        None => Ok(default),
    }
}
