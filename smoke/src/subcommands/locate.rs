use clap::{App, ArgMatches, SubCommand};

use crate::config::{self, SmokeConfig};
use crate::error::SmokeError;
use crate::library;
use crate::platform::Platform;

// Subcommand Name
pub const LOCATE: &str = "locate";

pub fn subcommand() -> App<'static, 'static> {
    SubCommand::with_name(LOCATE)
        .about("Prints where cargo places the static and shared libraries of the workspace")
        .args(&config::selection_args())
}

pub fn invoke(args: &crate::SmokeSharedArgs, matches: &ArgMatches) -> Result<(), SmokeError> {
    let config = SmokeConfig::from_matches(matches);
    let platform = Platform::from_target(config.target.as_deref())?;
    let dir = library::artifact_dir(args.metadata.target_directory.as_std_path(), &config);

    let libraries = library::select(&args.metadata, &config.packages)?;
    if libraries.is_empty() {
        return Err(SmokeError::NoLibraries("staticlib or cdylib"));
    }

    for library in &libraries {
        log::debug!("{} builds {:?}", library.package(), library);
        for name in library.artifact_names(&platform) {
            println!("{}", dir.join(name).display());
        }
    }

    Ok(())
}
