#![forbid(unsafe_code)]

use clap::Parser;
use grayflip::cli::{self, Cli};
use std::process;

fn main() {
    let cli = Cli::parse();
    process::exit(cli::run(&cli));
}
