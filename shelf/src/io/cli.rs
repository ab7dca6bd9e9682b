use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{LevelFilter, info, warn};

use crate::config::ShelfConfig;
use crate::io;
use crate::io::store::{JsonFileStore, MemoryStore, Store};
use crate::run::run;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance to place, the last stored instance is used when absent
    #[arg(short, long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// File in which the last successfully placed instance is kept
    #[arg(short = 'p', long, value_name = "FILE")]
    pub store_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

/// Runs the command-line flow, the logger is expected to be set up already.
///
/// The store is only read when no input file is given. It is written once, after the solution
/// was placed and written to the solution folder; a failed write is logged.
pub fn run_cli(args: &Cli) -> Result<()> {
    let config: ShelfConfig = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            ShelfConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file).with_context(|| {
                format!("could not open config file: {}", config_file.display())
            })?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed ShelfConfig: {config:?}");

    let mut store: Box<dyn Store> = match &args.store_file {
        Some(path) => Box::new(JsonFileStore::new(path, &config.store_key)),
        None => Box::new(MemoryStore::new(&config.store_key)),
    };

    let (ext_instance, input_stem) = match &args.input_file {
        Some(input_file) => {
            let stem = input_file
                .file_stem()
                .and_then(|s| s.to_str())
                .context("input file has no valid name")?;
            (io::read_instance(input_file)?, stem.to_string())
        }
        None => match store.load()? {
            Some(stored) => {
                info!("[MAIN] No input file provided, using the stored instance");
                (stored, config.store_key.clone())
            }
            None => bail!("no input file provided and no stored instance found"),
        },
    };

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let result = run(ext_instance, &config)?;

    {
        let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&result.output, &solution_path)?;
    }

    for (i, svg) in result.svgs().iter().enumerate() {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_stem}_{i}.svg"));
        io::write_svg(svg, &svg_path)?;
    }

    if let Err(e) = store.save(&result.output.instance) {
        warn!("[MAIN] could not save the instance: {e:#}");
    }

    Ok(())
}
