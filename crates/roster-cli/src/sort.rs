//! # Sort Command
//!
//! Merge-sorts a record file by an integer field (weight by default) and
//! writes the ordered records. With `--check`, the written file is read
//! back and verified.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use roster_core::{load_records, write_records, CodePage};
use roster_sort::{is_sorted, sort_records, SortKey};

use crate::parse_code_page;

/// Arguments for the sort subcommand.
#[derive(Args, Debug, Clone)]
pub struct SortArgs {
    /// Path to the record file to sort.
    #[arg(long, default_value = "result.txt")]
    pub input: PathBuf,

    /// Where to write the sorted records.
    #[arg(long, default_value = "result_sort.txt")]
    pub output: PathBuf,

    /// Integer field to sort by.
    #[arg(long, default_value = "weight")]
    pub key: SortKey,

    /// Text encoding of the input and output files.
    #[arg(long, default_value = "windows-1251", value_parser = parse_code_page)]
    pub encoding: &'static CodePage,

    /// Re-read the output and verify its length and order.
    #[arg(long)]
    pub check: bool,
}

/// Execute the sort subcommand.
pub fn run_sort(args: &SortArgs) -> Result<u8> {
    let records = load_records(&args.input, args.encoding)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let count = records.len();

    let sorted = sort_records(records, args.key)
        .with_context(|| format!("failed to sort {} by {}", args.input.display(), args.key))?;

    write_records(&args.output, sorted.as_slice(), args.encoding)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    if args.check {
        verify_output(args, count)?;
    }

    println!(
        "sorted {count} records by {} into {}",
        args.key,
        args.output.display()
    );
    Ok(0)
}

fn verify_output(args: &SortArgs, expected: usize) -> Result<()> {
    let reread = load_records(&args.output, args.encoding)
        .with_context(|| format!("failed to re-read {}", args.output.display()))?;
    if reread.len() != expected {
        bail!(
            "{} holds {} records, expected {expected}",
            args.output.display(),
            reread.len()
        );
    }
    if !is_sorted(reread.as_slice(), args.key)? {
        bail!("{} is not ordered by {}", args.output.display(), args.key);
    }
    tracing::info!(output = %args.output.display(), records = expected, "sort check passed");
    Ok(())
}
