//! English to Spanish Markdown translation for cursomatic.
//!
//! Sends Markdown content to an OpenAI-compatible chat-completions API and
//! returns the translated text. Fenced code blocks are shielded from the
//! model with the placeholder pair from `cursomatic-codeblock`, and an
//! exclusion keyword list marks terms the model must leave untranslated.
//!
//! Configuration is an explicit [`TranslateConfig`] value built by the
//! caller; this crate never reads environment variables or config files.
//!
//! # Example
//!
//! ```ignore
//! use cursomatic_translate::{TranslateConfig, Translator};
//!
//! let config = TranslateConfig::new("sk-...").model("gpt-4");
//! let translator = Translator::new(config);
//! let spanish = translator.translate_document("# Hello\n", &[])?;
//! ```

mod client;
mod error;
mod exclusions;

pub use client::{TranslateConfig, Translator};
pub use error::TranslateError;
pub use exclusions::load_exclusion_keywords;
