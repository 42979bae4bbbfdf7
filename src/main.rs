use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use directive_sum::{sum_file, ErrorKind, EvalOptions};
use serde::Serialize;
use tracing::Level;

/// Sum the integers in a file, honoring @base, @include and @range directives.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Starting numeral base (2..=36)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(2..=36))]
    base: u32,
    /// Fail on data lines that are not valid integers instead of skipping them
    #[arg(long)]
    strict: bool,
    /// Print a JSON object instead of `SUM=<n>`
    #[arg(long)]
    json: bool,
    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Input file
    input_file: PathBuf,
}

#[derive(Serialize)]
struct Report<'a> {
    file: &'a Path,
    base: u32,
    strict: bool,
    // Decimal string so large totals survive JSON consumers.
    sum: String,
}

fn main() -> ExitCode {
    // clap reports usage errors itself and exits with status 2.
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let options = EvalOptions { base: args.base, strict: args.strict };
    let total = match sum_file(&args.input_file, options) {
        Ok(total) => total,
        Err(e) => {
            eprintln!("Error: {e}");
            return exit_code(e.kind());
        }
    };

    if args.json {
        let report = Report {
            file: &args.input_file,
            base: options.base,
            strict: options.strict,
            sum: total.to_string(),
        };
        match serde_json::to_string(&report) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("Error: cannot encode result: {e}");
                return ExitCode::from(1);
            }
        }
    } else {
        println!("SUM={total}");
    }
    ExitCode::SUCCESS
}

fn exit_code(kind: ErrorKind) -> ExitCode {
    match kind {
        ErrorKind::Parse => ExitCode::from(2),
        ErrorKind::InputFile | ErrorKind::IncludeIo | ErrorKind::IncludeCycle => ExitCode::from(1),
    }
}
