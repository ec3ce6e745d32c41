//! Command-line argument parsing for docqa

use clap::Parser;
use std::path::PathBuf;

/// docqa - answer questions about a text passage
#[derive(Parser, Debug)]
#[command(name = "docqa")]
#[command(version)]
#[command(about = "Answer natural-language questions against a text passage", long_about = None)]
pub struct Args {
    /// Question to answer
    #[arg(value_name = "QUESTION")]
    pub question: String,

    /// Context passage given inline
    #[arg(short, long)]
    pub context: Option<String>,

    /// Plain-text file whose contents are appended to the context
    #[arg(short = 'f', long)]
    pub context_file: Option<PathBuf>,

    /// Output language: en, hi or kn (anything else maps to en)
    #[arg(short, long, default_value = "en")]
    pub lang: String,

    /// Number of context sentences kept by the relevance selector
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Disable translation even for non-English target languages
    #[arg(long)]
    pub no_translate: bool,
}
