//! # roster CLI entry point
//!
//! Parses command-line arguments and dispatches to the validate or sort
//! handler. Running with no subcommand validates, so the legacy invocation
//! `roster -input data.txt -output result.txt` keeps working.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roster_cli::normalize_legacy_flags;
use roster_cli::sort::{run_sort, SortArgs};
use roster_cli::validate::{run_validate, ValidateArgs};

/// Personnel record validator and sorter.
///
/// Validates a JSON collection of personnel records field by field, reports
/// statistics, writes the fully-valid records, and sorts them by weight.
#[derive(Parser, Debug)]
#[command(name = "roster", version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(flatten)]
    validate: ValidateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate records, print statistics, and write the valid subset.
    Validate(ValidateArgs),

    /// Sort records by an integer field using a stable merge sort.
    Sort(SortArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args()));

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!("roster CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Some(Commands::Validate(args)) => run_validate(&args),
        Some(Commands::Sort(args)) => run_sort(&args),
        None => run_validate(&cli.validate),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(normalize_legacy_flags(args.iter().map(|s| s.to_string()))).unwrap()
    }

    #[test]
    fn cli_parse_defaults_to_validation() {
        let cli = parse(&["roster"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.log_json);
        assert_eq!(cli.validate.input, Path::new("data.txt"));
        assert_eq!(cli.validate.output, Path::new("result.txt"));
        assert_eq!(cli.validate.encoding.name, "windows-1251");
        assert!(!cli.validate.json);
    }

    #[test]
    fn cli_parse_legacy_single_dash_flags() {
        let cli = parse(&["roster", "-input", "in.txt", "-output", "out.txt"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.validate.input, Path::new("in.txt"));
        assert_eq!(cli.validate.output, Path::new("out.txt"));
    }

    #[test]
    fn cli_parse_validate_subcommand() {
        let cli = parse(&["roster", "validate", "--input", "a.txt", "--json"]);
        if let Some(Commands::Validate(args)) = cli.command {
            assert_eq!(args.input, Path::new("a.txt"));
            assert_eq!(args.output, Path::new("result.txt"));
            assert!(args.json);
        } else {
            panic!("expected validate subcommand");
        }
    }

    #[test]
    fn cli_parse_sort_defaults() {
        let cli = parse(&["roster", "sort"]);
        if let Some(Commands::Sort(args)) = cli.command {
            assert_eq!(args.input, Path::new("result.txt"));
            assert_eq!(args.output, Path::new("result_sort.txt"));
            assert_eq!(args.key, roster_sort::SortKey::WEIGHT);
            assert!(!args.check);
        } else {
            panic!("expected sort subcommand");
        }
    }

    #[test]
    fn cli_parse_sort_with_key_and_check() {
        let cli = parse(&[
            "roster",
            "sort",
            "-input",
            "r.txt",
            "--key",
            "passport_number",
            "--check",
            "--encoding",
            "cp1251",
        ]);
        if let Some(Commands::Sort(args)) = cli.command {
            assert_eq!(args.input, Path::new("r.txt"));
            assert_eq!(args.key.field(), roster_core::Field::PassportNumber);
            assert!(args.check);
            assert_eq!(args.encoding.name, "windows-1251");
        } else {
            panic!("expected sort subcommand");
        }
    }

    #[test]
    fn cli_parse_verbosity_is_global() {
        assert_eq!(parse(&["roster", "-vv"]).verbose, 2);
        assert_eq!(parse(&["roster", "sort", "-vvv"]).verbose, 3);
    }

    #[test]
    fn cli_parse_log_json_is_global() {
        assert!(parse(&["roster", "--log-json"]).log_json);
        assert!(parse(&["roster", "sort", "--log-json", "--check"]).log_json);
    }

    #[test]
    fn cli_rejects_text_sort_key() {
        let err = Cli::try_parse_from(["roster", "sort", "--key", "email"]).unwrap_err();
        assert!(err.to_string().contains("not an integer field"));
    }

    #[test]
    fn cli_rejects_unknown_encoding() {
        assert!(Cli::try_parse_from(["roster", "--encoding", "koi8-r"]).is_err());
    }

    #[test]
    fn cli_rejects_top_level_args_with_subcommand() {
        assert!(Cli::try_parse_from(["roster", "--input", "a.txt", "sort"]).is_err());
    }

    #[test]
    fn cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["roster", "frobnicate"]).is_err());
    }
}
