//! # Validate Command
//!
//! Loads a record file, validates every record, prints the statistics
//! report, and writes the fully-valid subset. This is the default command:
//! `roster -input data.txt -output result.txt`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use roster_core::CodePage;
use roster_validate::{AggregateStats, Validator};

use crate::parse_code_page;

/// Arguments for validation.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the record file to validate.
    #[arg(long, default_value = "data.txt")]
    pub input: PathBuf,

    /// Where to write the fully-valid records.
    #[arg(long, default_value = "result.txt")]
    pub output: PathBuf,

    /// Text encoding of the input and output files.
    #[arg(long, default_value = "windows-1251", value_parser = parse_code_page)]
    pub encoding: &'static CodePage,

    /// Print the statistics as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute validation.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let validator = Validator::load(&args.input, args.encoding)
        .with_context(|| format!("failed to validate {}", args.input.display()))?;

    for (record, fields) in validator.failures() {
        let names: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();
        tracing::debug!("record {}: invalid {}", record.index(), names.join(", "));
    }

    print_report(validator.stats(), args.json)?;

    let written = validator
        .write_valid_records(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!(
        output = %args.output.display(),
        records = written,
        "wrote valid records"
    );

    Ok(0)
}

fn print_report(stats: &AggregateStats, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(stats).context("failed to serialize statistics")?
        );
    } else {
        print!("{stats}");
    }
    Ok(())
}
