use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use warodai_xml::convert_tree;

#[derive(Parser, Debug)]
#[command(
    name = "warodai-xml",
    about = "Convert a Warodai source tree to Dictionary Service XML",
    version
)]
pub struct Cli {
    /// Root directory of the Warodai entry tree.
    root: PathBuf,

    /// Skip files whose header cannot be parsed instead of aborting.
    #[arg(long)]
    keep_going: bool,

    /// Write the document to a file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if !cli.root.is_dir() {
        return Err(format!("{} is not a directory", cli.root.display()).into());
    }

    let summary = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|err| format!("failed to create {}: {err}", path.display()))?;
            let mut out = BufWriter::new(file);
            let summary = convert_tree(&cli.root, &mut out, cli.keep_going)?;
            out.flush()?;
            summary
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let summary = convert_tree(&cli.root, &mut out, cli.keep_going)?;
            out.flush()?;
            summary
        }
    };

    info!(
        converted = summary.converted,
        skipped = summary.skipped,
        "conversion finished"
    );
    if summary.skipped > 0 {
        return Err(format!("{} entry file(s) could not be converted", summary.skipped).into());
    }
    Ok(())
}
