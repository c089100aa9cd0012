//! helpmdx CLI.

use clap::Parser;
use std::path::PathBuf;

use helpmdx::{DriverConfig, DriverError};

/// Convert help center Markdown into Starlight MDX.
#[derive(Parser, Debug)]
#[command(name = "helpmdx", version, about)]
struct Cli {
    /// YAML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Directory with standalone documents.
    #[arg(long, value_name = "DIR")]
    docs_dir: Option<PathBuf>,
    /// Directory with included fragments.
    #[arg(long, value_name = "DIR")]
    include_dir: Option<PathBuf>,
    /// Output directory (wiped before conversion).
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
    /// Maximum number of worker threads.
    #[arg(long, value_name = "N")]
    threads: Option<usize>,
    /// Print batch statistics as JSON.
    #[arg(long)]
    json: bool,
    /// Log per-file progress.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<(DriverConfig, bool), DriverError> {
        let mut config = match &self.config {
            Some(path) => DriverConfig::from_yaml_file(path)?,
            None => DriverConfig::default(),
        };
        if let Some(dir) = self.docs_dir {
            config.docs_dir = dir;
        }
        if let Some(dir) = self.include_dir {
            config.include_dir = dir;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(threads) = self.threads {
            config.max_threads = Some(threads);
        }
        Ok((config, self.json))
    }
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Info);
    }
    logger.init();

    let result = cli
        .into_config()
        .and_then(|(config, json)| helpmdx::run(&config).map(|stats| (stats, json)));

    match result {
        Ok((stats, true)) => match stats.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => fail(err),
        },
        Ok((stats, false)) => println!("Converted {} files.", stats.total),
        Err(err) => fail(err),
    }
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
