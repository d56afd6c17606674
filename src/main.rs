use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dof::cameras::CameraTable;
use dof::cli::Cli;
use dof::config::Config;
use dof::error::DofError;
use dof::pipeline::Pipeline;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::from_cli(Cli::parse());
    init_tracing();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            let code = e.downcast_ref::<DofError>().map_or(1, DofError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &Config) -> Result<()> {
    let mut pipeline = Pipeline::new(config, CameraTable::builtin(), config.cache());
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    pipeline.run(&mut input, &mut out)
}
