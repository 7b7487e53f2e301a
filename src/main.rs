use birdstats::cli::{args::Args, commands};
use clap::Parser;
use colored::*;
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(error) = commands::run(args) {
        eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
        process::exit(1);
    }
}
