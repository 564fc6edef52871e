use clap::{App, SubCommand};

use crate::error::SmokeError;

// Subcommand Name
pub const PRINT_ROOT: &str = "print-root";

pub fn subcommand() -> App<'static, 'static> {
    SubCommand::with_name(PRINT_ROOT).about("Prints the root directory of the cargo workspace")
}

pub fn invoke(args: &crate::SmokeSharedArgs) -> Result<(), SmokeError> {
    println!("{}", args.metadata.workspace_root);
    Ok(())
}
