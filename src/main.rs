//! str-ebs - command-line front end for the Slay the Relics EBS client

use console::style;
use str_ebs_client::cli::Cli;
use str_ebs_client::{commands, logging, Error};

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

/// Main application entry point
fn run() -> i32 {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::execute(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{} {err:#}", style("Error:").red().bold());
            err.downcast_ref::<Error>().map_or(1, Error::exit_code)
        }
    }
}
