use clap::Parser;
use std::process::ExitCode;
use taguchi_cli::{Opts, Subcommand};
use tracing_subscriber::EnvFilter;

fn install_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let opts = Opts::parse();
    install_tracing(opts.configuration.verbose);

    match opts.subcommand.run(&opts.configuration) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
