// src/main.rs

mod cli;
mod commands;
mod error;
mod log_file;
mod models;

use clap::Parser;
use cli::Cli;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::process;

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Warn).init() {
        eprintln!("Logger init failed: {}", e);
    }

    if let Err(e) = commands::handle_run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
