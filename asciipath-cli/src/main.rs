use std::fs;
use std::io::{self, Read, Write};

use asciipath::{report, Grid, TraceOptions};
use facet::Facet;
use facet_args as args;

/// Trace the path drawn on an ASCII map
#[derive(Facet, Debug)]
struct Args {
    /// Input file (reads from stdin if not provided)
    #[facet(default, args::positional)]
    input: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[facet(default, args::named, args::short = 'o')]
    output: Option<String>,

    /// Give up after this many steps
    #[facet(default, args::named)]
    max_steps: Option<usize>,

    /// Print the positions of a character instead of tracing
    #[facet(default, args::named)]
    locate: Option<String>,

    /// Log each step to stderr
    #[facet(args::named, args::short = 'v')]
    verbose: bool,

    /// Only log errors
    #[facet(args::named, args::short = 'q')]
    quiet: bool,
}

fn init_logging(args: &Args) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if args.verbose {
        builder.filter_level(log::LevelFilter::Trace);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn fail(err: asciipath::TraceError) -> ! {
    match err.position() {
        Some(at) => eprintln!("error: {err} at {at}"),
        None => eprintln!("error: {err}"),
    }
    std::process::exit(1);
}

fn main() {
    let args: Args = match args::from_std_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    init_logging(&args);

    let input = match &args.input {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
                eprintln!("Failed to read stdin: {}", e);
                std::process::exit(1);
            });
            buf
        }
    };

    let grid = Grid::new(&input);
    log::debug!(
        "read map with {} rows, {} cells",
        grid.height(),
        grid.cell_count()
    );

    let text = match &args.locate {
        Some(needle) => match grid.find_all_str(needle) {
            Ok(positions) => report::format_positions(&positions),
            Err(err) => fail(err),
        },
        None => {
            let mut options = TraceOptions::new();
            if let Some(limit) = args.max_steps {
                options = options.with_step_limit(limit);
            }
            match asciipath::run_with_options(&grid, &options) {
                Ok(trace) => report::format_trace(&trace),
                Err(err) => fail(err),
            }
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &text).unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            });
        }
        None => {
            io::stdout().write_all(text.as_bytes()).unwrap_or_else(|e| {
                eprintln!("Failed to write stdout: {}", e);
                std::process::exit(1);
            });
        }
    }
}
