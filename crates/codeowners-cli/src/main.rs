//! GitHub CODEOWNERS CLI
//!
//! A command-line tool for formatting and inspecting GitHub CODEOWNERS files.

use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::config::{CliError, ExitCode, resolve_codeowners_path};
use cli::output::{HumanOutput, JsonOutput};
use cli::{Args, Command, FmtArgs, ShowArgs};
use github_codeowners::{
    CodeownersFile, WriterConfig, parse_codeowners, write_codeowners_file_with_config,
    write_codeowners_with_config,
};

fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json_output());

    let exit_code = run(&args);
    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the selected command, reporting failures on stderr.
fn run(args: &Args) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            let use_colors = io::stderr().is_terminal();
            let mut stderr = io::stderr().lock();
            let _ = HumanOutput::new(&mut stderr, use_colors).write_error(&e.to_string());
            ExitCode::StartupFailure
        }
    }
}

fn execute(args: &Args) -> Result<ExitCode, CliError> {
    let path = resolve_codeowners_path(&args.repository_path, args.codeowners_path.as_deref())?;
    info!("CODEOWNERS file: {}", path.display());

    let content = fs::read_to_string(&path)?;
    let document = parse_codeowners(&content);
    debug!(
        "Parsed {} line(s), {} rule(s)",
        document.len(),
        document.rules().count()
    );

    match &args.command {
        Command::Fmt(fmt) => run_fmt(&path, &content, &document, fmt),
        Command::Show(show) => run_show(&path, &document, show),
    }
}

/// Rewrites (or checks) the document in canonical form.
fn run_fmt(
    path: &Path,
    original: &str,
    document: &CodeownersFile,
    fmt: &FmtArgs,
) -> Result<ExitCode, CliError> {
    let config = fmt.writer_config();
    let use_colors = io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();
    let mut output = HumanOutput::new(&mut stdout, use_colors);

    if fmt.check {
        if is_formatted(original, document, &config)? {
            output.write_success(&format!("{} is formatted", path.display()))?;
            return Ok(ExitCode::Success);
        }
        output.write_error(&format!("{} is not formatted", path.display()))?;
        return Ok(ExitCode::Unformatted);
    }

    let target = fmt.output.as_deref().unwrap_or(path);
    write_codeowners_file_with_config(document, target, &config)?;
    info!("Wrote {}", target.display());
    output.write_success(&format!("Formatted {}", target.display()))?;
    Ok(ExitCode::Success)
}

/// Returns true if writing `document` would reproduce `original` byte for byte.
fn is_formatted(
    original: &str,
    document: &CodeownersFile,
    config: &WriterConfig,
) -> Result<bool, CliError> {
    let formatted = write_codeowners_with_config(document, config)?;
    Ok(formatted == original)
}

/// Prints the rules of the document.
fn run_show(
    path: &Path,
    document: &CodeownersFile,
    show: &ShowArgs,
) -> Result<ExitCode, CliError> {
    let mut stdout = io::stdout().lock();

    if show.json {
        JsonOutput::new(path, document).write(&mut stdout)?;
    } else {
        let use_colors = io::stdout().is_terminal();
        HumanOutput::new(&mut stdout, use_colors).write_document(path, document)?;
    }
    Ok(ExitCode::Success)
}
