use clap::Parser;

mod cli;
mod error;

use crate::cli::Cli;

fn main() {
    env_logger::init();

    let args = Cli::parse();

    if let Err(e) = args.run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
