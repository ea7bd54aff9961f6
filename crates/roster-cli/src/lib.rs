//! # roster-cli: Command-Line Interface
//!
//! Provides the `roster` binary.
//!
//! ```bash
//! # Validate data.txt, print statistics, write valid records to result.txt:
//! roster -input data.txt -output result.txt
//!
//! # Sort the validated records by weight and verify the result:
//! roster sort -input result.txt -output result_sort.txt --check
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; validation and sorting are delegated to
//!   `roster-validate` and `roster-sort`.
//! - Handlers return `anyhow::Result<u8>`; the exit code is decided in `main`.
//! - The statistics report goes to stdout, logs go to stderr.

pub mod sort;
pub mod validate;

use roster_core::CodePage;

/// Long flags the legacy tool accepted with a single dash.
pub const LEGACY_LONG_FLAGS: &[&str] = &["input", "output"];

/// Rewrite `-input`/`-output` (and `-input=path`) to their `--` forms so
/// clap can parse them. Every other argument is passed through unchanged.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            let Some(rest) = arg.strip_prefix('-') else {
                return arg;
            };
            if rest.starts_with('-') {
                return arg;
            }
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if LEGACY_LONG_FLAGS.contains(&name) {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}

/// clap value parser for `--encoding`.
pub fn parse_code_page(label: &str) -> Result<&'static CodePage, String> {
    CodePage::by_label(label).ok_or_else(|| {
        let known: Vec<&str> = CodePage::available().collect();
        format!("unknown encoding '{label}' (supported: {})", known.join(", "))
    })
}
