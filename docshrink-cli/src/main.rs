// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Docshrink CLI
//!
//! Shrinks per-sample document lists in a retrieval eval dataset file.

use anyhow::{Context, Result};
use clap::Parser;
use docshrink_core::{
    load_samples, write_samples, ContextShrinker, ShrinkConfig, DEFAULT_SEED,
    DEFAULT_TARGET_LENGTH,
};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "docshrink")]
#[command(about = "Shrink per-sample document lists in retrieval eval datasets", long_about = None)]
struct Cli {
    /// Input JSON file (a sample object or an array of samples)
    input: PathBuf,

    /// Output JSON file for the shrunk samples
    output: PathBuf,

    /// Number of documents to keep per sample
    #[arg(long, default_value_t = DEFAULT_TARGET_LENGTH)]
    target_length: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let samples = load_samples(&cli.input)
        .with_context(|| format!("Failed to load samples from {}", cli.input.display()))?;
    info!("Loaded {} samples from {:?}", samples.len(), cli.input);

    let config = ShrinkConfig::new(cli.target_length, cli.seed);
    let mut shrinker = ContextShrinker::new(&config);
    let shrunk = shrinker.shrink_all(samples);

    write_samples(&cli.output, &shrunk)
        .with_context(|| format!("Failed to write output to {}", cli.output.display()))?;
    info!(
        "Shrunk {} samples to at most {} documents each",
        shrunk.len(),
        cli.target_length
    );

    println!("✓ Wrote {} samples to {:?}", shrunk.len(), cli.output);
    Ok(())
}
