// Author: Dustin Pilgrim
// License: MIT

mod app;
mod catalog;
mod cli;
mod config;
mod core;
mod dispatcher;
mod log;
mod services;
mod ui;

use clap::Parser;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    let result = app::run(args).await;
    if let Err(e) = &result {
        eprintln!("lapwatch: {e}");
    }
    let code = app::exit_code(&result);

    // stdin readers may still be parked on a blocking read
    std::process::exit(code);
}
