//! `cursomatic translate` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use cursomatic_translate::{TranslateConfig, Translator, load_exclusion_keywords};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the translate command.
#[derive(Args)]
pub(crate) struct TranslateArgs {
    /// Path to the Markdown file to translate.
    input: PathBuf,

    /// Path to a file with exclusion keywords (one per line).
    #[arg(long)]
    exclude: Option<PathBuf>,

    /// Output file path (default: input path with a .es.md suffix).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// API key for the chat-completions endpoint.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Model to use for translation.
    #[arg(long, default_value = "gpt-4")]
    model: String,

    /// Chat-completions endpoint URL (default: the OpenAI API).
    #[arg(long)]
    api_url: Option<String>,
}

impl TranslateArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let exclusions = match &self.exclude {
            Some(path) => load_exclusion_keywords(path)?,
            None => Vec::new(),
        };

        output.info(&format!("Reading: {}", self.input.display()));
        let text = fs::read_to_string(&self.input)?;

        let mut config = TranslateConfig::new(self.api_key).model(self.model);
        if let Some(api_url) = self.api_url {
            config = config.api_url(api_url);
        }
        let translator = Translator::new(config);

        output.info("Sending text for translation...");
        let translated = translator.translate_document(&text, &exclusions)?;

        let out_path = self
            .output
            .unwrap_or_else(|| default_output_path(&self.input));
        fs::write(&out_path, translated)?;

        output.success(&format!(
            "Translation complete. Output written to: {}",
            out_path.display()
        ));
        Ok(())
    }
}

/// Output path next to the input, `<stem>.es.md`.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "translated".to_owned(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}.es.md"))
}
