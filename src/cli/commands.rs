use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::output::write_events;
use crate::timeline::build_timeline;
use crate::utils::read_viminfo;

pub const MISSING_FILE_MESSAGE: &str = "Please provide a viminfo file to parse.";

#[derive(Parser)]
#[command(name = "viminfo-timeline")]
#[command(version = "0.1.0")]
#[command(
    about = "Create a mactime body file from a Vim .viminfo file",
    long_about = "Create a mactime body file from a Vim .viminfo file.\n\n\
        Body rows are written to stdout in file order; redirect to a file and \
        process with mactime to obtain a sorted timeline."
)]
pub struct Cli {
    /// Path to the .viminfo file to parse
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(path) = cli.file else {
        bail!(MISSING_FILE_MESSAGE);
    };

    let lines = read_viminfo(&path)?;
    let timeline = build_timeline(&lines)
        .with_context(|| format!("Failed to parse viminfo file: {}", path.display()))?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_events(&mut writer, &timeline.events).context("Failed to write body output")?;

    Ok(())
}
