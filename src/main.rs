//! docqa - CLI entry point
//!
//! Thin I/O wrapper around the answering engine: assembles a plain
//! text context from the inline argument and an optional text file,
//! validates it, and prints the answer.

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use docqa::cli::Args;
use docqa::{AnsweringEngine, Config, Language};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = Config::load()?;
    if let Some(top_k) = args.top_k {
        config.engine.top_k = top_k;
    }
    if args.no_translate {
        config.translation.enabled = false;
    }

    let question = args.question.trim();
    if question.is_empty() {
        bail!("Question must not be empty");
    }

    let context = gather_context(&args)?;
    if context.is_empty() {
        bail!("No context provided: pass --context and/or --context-file");
    }

    let target = Language::parse(&args.lang);

    eprintln!("{}", "Loading models (first run downloads them)...".dimmed());
    let engine = AnsweringEngine::new(&config)?;

    let answer = engine.get_answer(&context, question, target).await?;

    if answer.is_empty() {
        println!("{}", "No answer found in the given context.".yellow());
    } else {
        println!("{} {}", "Answer:".green().bold(), answer);
    }

    Ok(())
}

/// Concatenate the inline context and the context file with a blank
/// line, matching how typed text and uploaded documents combine.
fn gather_context(args: &Args) -> Result<String> {
    let mut parts = Vec::new();

    if let Some(context) = &args.context {
        let trimmed = context.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
    }

    if let Some(path) = &args.context_file {
        let contents = std::fs::read_to_string(path)?;
        let trimmed = contents.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
    }

    Ok(parts.join("\n\n"))
}
