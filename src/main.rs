use std::{fs, path::PathBuf, process};

use clap::Parser;
use texcalc::{
    Settings,
    error::Error,
    interpreter::evaluator::core::{Context, MAX_CALL_DEPTH, MAX_ITERATIONS, MAX_RANGE_LEN, RANGE_STEP},
    process_file, render,
};
use tracing_subscriber::EnvFilter;

/// texcalc evaluates the `\begin{preproc}` blocks of a LaTeX document and
/// fills in their placeholders and graphics.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The LaTeX document to process.
    input: PathBuf,

    /// Where to write the result. Defaults to replacing the input.
    output: Option<PathBuf>,

    /// Maximum iterations of one `\while` or `\product` loop.
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    max_iterations: usize,

    /// Maximum depth of nested function calls.
    #[arg(long, default_value_t = MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Step of `\range` when none is given.
    #[arg(long, default_value_t = RANGE_STEP)]
    range_step: f64,

    /// Print the result to stdout instead of writing any file.
    #[arg(long)]
    dry_run: bool,

    /// Log every processed block.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
                             .with_writer(std::io::stderr)
                             .init();

    let settings = Settings { max_iterations: args.max_iterations,
                              max_call_depth: args.max_call_depth,
                              range_step:     args.range_step,
                              max_range_len:  MAX_RANGE_LEN, };

    let result = if args.dry_run {
        fs::read_to_string(&args.input).map_err(Error::from)
                                       .and_then(|source| render(&source, &mut Context::with_settings(settings)))
                                       .map(|rendered| print!("{rendered}"))
    } else {
        process_file(&args.input, args.output.as_deref(), settings)
    };

    if let Err(e) = result {
        eprintln!("{}:{e}", args.input.display());
        process::exit(1);
    }
}
