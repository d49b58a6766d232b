//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - initializes logging
//! - runs the generator and/or processor
//! - prints summaries

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, GenerateArgs, RootArgs};
use crate::config::ProjectPaths;
use crate::domain::GenerateConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `finops` binary.
pub fn run() -> Result<(), AppError> {
    // Load `.env` before clap reads `FINOPS_ROOT`.
    dotenvy::dotenv().ok();
    init_tracing();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Generate(args) => handle_generate(&args),
        Command::Process(args) => handle_process(&args),
        Command::Run(args) => {
            handle_generate(&args)?;
            println!();
            handle_process(&args.root)
        }
    }
}

fn init_tracing() {
    // `try_init` so repeated calls (e.g. from tests) are harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_generate(args: &GenerateArgs) -> Result<(), AppError> {
    let paths = ProjectPaths::resolve(args.root.root.as_deref())?;
    let config = GenerateConfig { seed: args.seed };
    let out = pipeline::run_generate(&paths, &config)?;

    println!(
        "{}",
        crate::report::format_generate_summary(&paths.raw_csv, &out.data.stats, config.seed)
    );
    Ok(())
}

fn handle_process(args: &RootArgs) -> Result<(), AppError> {
    let paths = ProjectPaths::resolve(args.root.as_deref())?;
    let out = pipeline::run_process(&paths)?;

    println!(
        "{}",
        crate::report::format_process_summary(&paths.processed_csv, &out.summary, &out.row_errors)
    );
    Ok(())
}

/// Rewrite argv so `finops` defaults to `finops run`.
///
/// Rules:
/// - `finops`                          -> `finops run`
/// - `finops --seed 7 ...`             -> `finops run --seed 7 ...`
/// - `finops --help/--version/-h`      -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("run".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "run".to_string());
    }

    argv
}
