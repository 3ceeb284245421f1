//! bapple CLI entry point

use clap::error::ErrorKind;
use clap::Parser;

use bapple::cli::Cli;
use bapple::logging;
use bapple::terminal::restore_stdout;

mod commands;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging::init(cli.verbose);

    if let Err(e) = commands::play::handle(&cli) {
        restore_stdout();
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
