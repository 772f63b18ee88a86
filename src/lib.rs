pub mod cli;
pub mod error;
pub mod format;
pub mod io_utils;
pub mod reports;
pub mod roster;
pub mod table;

use std::{env, io, sync::OnceLock};

use anyhow::Result;
use clap::Parser as _;
use log::{LevelFilter, info};

use crate::{cli::Cli, error::PipelineError};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("roster_report", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    execute(&cli)
}

fn execute(cli: &Cli) -> Result<()> {
    let encoding = io_utils::resolve_encoding(cli.input_encoding.as_deref())?;
    let table = roster::load_players(&cli.input, cli.delimiter, encoding)?;
    info!(
        "Loaded {} player(s) from '{}'",
        table.len(),
        cli.input.display()
    );
    let mut stdout = io::stdout().lock();
    reports::print_reports(&mut stdout, &table)?;
    info!("Printed 7 report(s)");
    Ok(())
}

/// User-facing failure text. A missing input file gets its dedicated
/// message with a remediation hint; everything else gets the generic one.
/// Messages go to stdout, matching the report output channel.
pub fn print_failure(err: &anyhow::Error) {
    match err.downcast_ref::<PipelineError>() {
        Some(PipelineError::MissingInput { path }) => {
            println!("ERRO: Arquivo '{}' não encontrado.", path.display());
            println!("Certifique-se de que o arquivo CSV está na mesma pasta do programa.");
        }
        _ => {
            println!("Ocorreu um erro ao processar os dados: {err:#}");
        }
    }
}
