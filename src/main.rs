// Tue Jan 13 2026 - Alex

use beast::cli::handler::EXIT_CONFIG_ERROR;
use beast::cli::{Args, CommandHandler};
use clap::Parser;
use colored::Colorize;

fn main() {
    let args = Args::parse();

    match CommandHandler::new().execute(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            for cause in e.chain().skip(1) {
                eprintln!("    caused by: {}", cause);
            }
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    }
}
