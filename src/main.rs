use std::{fs, process::exit};

use clap::Parser;
use infixcalc::{Error, Status, interpreter::parser::core::parse, solve_bytes};

/// infixcalc evaluates infix arithmetic expressions with `+`, `-`, `*`, `/`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells infixcalc to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Print the postfix (Reverse Polish) form instead of the value.
    #[arg(short, long)]
    postfix: bool,

    /// Number of digits printed after the decimal point.
    #[arg(long)]
    precision: Option<usize>,

    /// Increase log verbosity. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let input = if args.file {
        fs::read(&args.contents).unwrap_or_else(|_| {
                                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                               &args.contents);
                                     exit(Status::InvalidArgument.exit_code());
                                 })
    } else {
        args.contents.into_bytes()
    };
    let shown = String::from_utf8_lossy(&input);
    let shown = shown.trim_end();

    if args.postfix {
        print_postfix(shown, &input);
    } else {
        print_value(shown, &input, args.precision);
    }
}

fn print_value(shown: &str, input: &[u8], precision: Option<usize>) {
    let result = solve_bytes(input);
    let status = Status::from(&result);
    match result {
        Ok(value) => match precision {
            Some(digits) => println!("{shown} = {value:.digits$}"),
            None => println!("{shown} = {value}"),
        },
        Err(e) => report(shown, &e),
    }
    exit(status.exit_code());
}

fn print_postfix(shown: &str, input: &[u8]) {
    let parsed = std::str::from_utf8(input).map_err(Error::InvalidArgument)
                                           .and_then(|expression| parse(expression).map_err(Error::from));
    match parsed {
        Ok(postfix) => println!("{postfix}"),
        Err(e) => {
            report(shown, &e);
            exit(e.status().exit_code());
        },
    }
}

fn report(shown: &str, error: &Error) {
    eprintln!("{shown}");
    if let Some(pos) = error.position() {
        let column = shown.get(..pos).map_or(pos, |prefix| prefix.chars().count());
        eprintln!("{}^", " ".repeat(column));
    }
    eprintln!("{error}");
}
