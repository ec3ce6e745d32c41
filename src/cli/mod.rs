//! CLI module for docqa
//!
//! Handles command-line argument parsing; everything here is a thin
//! wrapper that hands the engine plain text.

pub mod args;

pub use args::Args;
