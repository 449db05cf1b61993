use anyhow::Context;
use clap::Parser;
use fhub::domain::config::AppConfig;
use fhub::kernel::config::load_config;
use fhub_inspect::args::Cli;
use fhub_logger::Logger;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config: AppConfig = load_config(cli.global.config.as_deref())
        .context("Critical: Failed to load or parse configuration")?;

    let _log = Logger::builder(env!("CARGO_PKG_NAME")).with_config(&config.log)?.init()?;

    let ok = fhub_inspect::run(&cli, &config, &mut std::io::stdout().lock())?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
