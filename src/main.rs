extern crate woh;

use anyhow::anyhow;
use clap::Parser;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::FmtSubscriber;
use woh::output::FileOutput;
use woh::{run_project, ReferenceData};

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct WohArgs {
    /// JSON file describing the dwelling
    input_file: String,
    /// Directory holding the standard's reference CSV tables
    #[arg(long, short)]
    reference_data: PathBuf,
    /// Directory to write results to, defaulting to the input file's directory
    #[arg(long, short)]
    output_dir: Option<PathBuf>,
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = WohArgs::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input_path = Path::new(args.input_file.as_str());
    let input_file_stem = input_path
        .file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| anyhow!("Could not read a file name from {}", args.input_file))?;
    let output_dir = match args.output_dir {
        Some(output_dir) => output_dir,
        None => input_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let reference_data = ReferenceData::from_directory(&args.reference_data)?;
    let output = FileOutput::new(output_dir, format!("{input_file_stem}__{{}}.csv"));

    let results = run_project(
        BufReader::new(File::open(input_path)?),
        &output,
        &reference_data,
    )?;

    for (name, series) in &results {
        info!("{name}: {:.2} MJ a year", series.total());
    }

    Ok(())
}
