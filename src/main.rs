use std::{fs, process::ExitCode};

use clap::Parser;
use log::LevelFilter;
use numwords::{ConvertOptions, run_line, run_lines};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// numwords spells numbers out as English words, and reads them back.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numwords to read one input per line from a file instead of the
    /// argument itself.
    #[arg(short, long)]
    file: bool,

    /// Treats decimals as dollars and cents, e.g. `12.34` becomes "twelve and
    /// thirty-four cents".
    #[arg(short, long)]
    currency: bool,

    /// Reads number words and prints the number they spell.
    #[arg(short, long)]
    parse: bool,

    /// Prints debug logging to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The number, the words, or the file path with `--file`. Negative numbers
    /// such as `-42` are accepted as values.
    #[arg(allow_negative_numbers = true)]
    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.verbose);

    let options = ConvertOptions { currency: args.currency };

    let results = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => run_lines(&text, args.parse, &options),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        vec![run_line(&args.contents, args.parse, &options).map_err(|e| e.to_string())]
    };

    let mut failed = false;
    for result in results {
        match result {
            Ok(output) => println!("{output}"),
            Err(message) => {
                failed = true;
                eprintln!("{message}");
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let config = ConfigBuilder::new().set_location_level(LevelFilter::Error)
                                     .build();

    if let Err(e) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Failed to initialize logging: {e}");
    }
}
