use std::process;

use clap::{App, AppSettings, Arg, ArgMatches};

mod config;
mod error;
mod library;
mod platform;

mod subcommands {
    pub mod check;
    pub mod locate;
    pub mod print_root;
}

use error::SmokeError;
use subcommands::*;

// common options
const MANIFEST_PATH: &str = "manifest-path";

pub struct SmokeSharedArgs {
    pub metadata: cargo_metadata::Metadata,
}

fn app() -> App<'static, 'static> {
    App::new("Bound library smoke runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Calls the C ABI functions of a Cargo workspace's shared libraries")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name(MANIFEST_PATH)
                .long("manifest-path")
                .value_name("Cargo.toml")
                .help("Specifies the target Cargo project")
                .takes_value(true),
        )
        .subcommand(print_root::subcommand())
        .subcommand(locate::subcommand())
        .subcommand(check::subcommand())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(&app().get_matches()) {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), SmokeError> {
    let mut cmd = cargo_metadata::MetadataCommand::new();
    if let Some(manifest_path) = matches.value_of(MANIFEST_PATH) {
        cmd.manifest_path(manifest_path);
    }
    cmd.no_deps();

    let args = SmokeSharedArgs {
        metadata: cmd.exec()?,
    };
    log::debug!("workspace root: {}", args.metadata.workspace_root);

    match matches.subcommand() {
        (print_root::PRINT_ROOT, _) => print_root::invoke(&args),
        (locate::LOCATE, Some(matches)) => locate::invoke(&args, matches),
        (check::CHECK, Some(matches)) => check::invoke(&args, matches),
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_arguments() {
        let matches = app()
            .get_matches_from_safe(vec![
                "tw-bindgen-smoke",
                "--manifest-path",
                "Cargo.toml",
                "check",
                "--package",
                "tw-crypto-bindgen",
                "--expect",
                "-1",
                "--iterations",
                "3",
            ])
            .unwrap();

        assert_eq!(matches.value_of(MANIFEST_PATH), Some("Cargo.toml"));
        let (name, check) = matches.subcommand();
        assert_eq!(name, check::CHECK);
        let check = check.unwrap();
        assert_eq!(check.value_of("expect"), Some("-1"));
        assert_eq!(check.value_of("iterations"), Some("3"));
        assert_eq!(
            check.values_of("package").unwrap().collect::<Vec<_>>(),
            vec!["tw-crypto-bindgen"]
        );
    }

    #[test]
    fn subcommand_is_required() {
        assert!(app().get_matches_from_safe(vec!["tw-bindgen-smoke"]).is_err());
    }

    #[test]
    fn print_root_takes_no_selection() {
        assert!(app()
            .get_matches_from_safe(vec!["tw-bindgen-smoke", "print-root", "--target", "x"])
            .is_err());
    }
}
