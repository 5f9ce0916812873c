use anyhow::{Context, Result};
use std::fs;
use std::process::ExitCode;

use jpeg_recover::error::{RecoverError, EXIT_FAILURE};
use jpeg_recover::logging;
use jpeg_recover::presentation::cli::Cli;
use jpeg_recover::RecoverImagesUseCase;

fn main() -> ExitCode {
    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(Some(cli)) => cli,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    logging::init_logging(cli.log_level());

    match run(&cli) {
        Ok(count) => {
            println!("Found {} files", count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<RecoverError>()
                .map_or(EXIT_FAILURE, RecoverError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> Result<usize> {
    let options = cli.to_options()?;
    let report = RecoverImagesUseCase::new(options).execute()?;

    if let Some(path) = &cli.report {
        let json = report.to_json().context("Failed to serialise carve report")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
    }

    Ok(report.file_count())
}
