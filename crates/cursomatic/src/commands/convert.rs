//! `cursomatic convert` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Path to the Markdown (.md) file to convert.
    input: PathBuf,

    /// Output file path (default: input path with .adoc extension).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ConvertArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        output.info(&format!("Reading Markdown file: {}", self.input.display()));
        let markdown = fs::read_to_string(&self.input)?;

        let adoc = cursomatic_convert::convert(&markdown);

        let out_path = self
            .output
            .unwrap_or_else(|| default_output_path(&self.input));
        fs::write(&out_path, adoc)?;

        output.success(&format!("Converted to AsciiDoc: {}", out_path.display()));
        Ok(())
    }
}

/// Input path with its extension replaced by `.adoc`.
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("adoc")
}
