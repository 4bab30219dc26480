//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `region_finder` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use region_finder::app::{
    format_batch, format_client_region, format_log, format_lookup, format_lookup_failure,
    format_regions,
};
use region_finder::initialization::init_logger_with;
use region_finder::pipeline::StaticCandidateSource;
use region_finder::{join_uri, Command, Config, LookupErrorKind, Opt, RegionFinder};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(opt.command, &config).await {
        eprintln!("region_finder error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Lookup { job_id } => {
            let finder = RegionFinder::init(config).await?;
            match finder.lookup(&job_id).await {
                Ok(outcome) => println!("{}", format_lookup(&outcome)),
                Err(e) if e.kind() == LookupErrorKind::Input => {
                    println!("Enter a server ID");
                    process::exit(2);
                }
                Err(e) => {
                    log::error!("Region lookup error: {e}");
                    println!("{}", format_lookup_failure());
                    process::exit(1);
                }
            }
        }
        Command::Batch { file } => {
            let finder = RegionFinder::init(config).await?;
            let mut source = StaticCandidateSource::from_path(&file).await?;
            let report = finder.batch(&mut source).await?;
            println!("{}", format_batch(&report));
        }
        Command::Log => {
            let finder = RegionFinder::init(config).await?;
            println!("{}", format_log(&finder.recent_lookups().await));
        }
        Command::Region { code } => {
            let mut finder = RegionFinder::init(config).await?;
            if let Some(code) = code {
                finder.select_client_region(&code).await?;
            }
            println!("{}", format_client_region(finder.session().client_region()));
        }
        Command::Regions => {
            let finder = RegionFinder::init(config).await?;
            println!("{}", format_regions(finder.session().client_region()));
        }
        Command::Join { place_id, job_id } => {
            println!("{}", join_uri(&place_id, &job_id)?);
        }
    }
    Ok(())
}
