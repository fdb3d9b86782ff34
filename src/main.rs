use std::fs;

use clap::{ArgAction, Parser};
use fal::{Error, frontend::parser::ParseOptions, run_with_options, tokenize};
use tracing_subscriber::EnvFilter;

/// fal parses arithmetic expressions and prints their syntax tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells fal to read the file named by `contents` instead of treating it
    /// as source.
    #[arg(short, long)]
    file: bool,

    /// Print the token stream instead of the syntax tree.
    #[arg(short, long)]
    tokens: bool,

    /// Number of leading tokens the parser ignores.
    #[arg(long, value_name = "N", default_value_t = 0)]
    skip_leading: usize,

    /// Increase logging verbosity (-v: debug, -vv+: trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                 EnvFilter::new(directive_for_verbosity(args.verbose))
                             }))
                             .with_writer(std::io::stderr)
                             .init();

    let (fname, source) = if args.file {
        let source = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                   &args.contents);
                         std::process::exit(1);
                     });
        (args.contents.as_str(), source)
    } else {
        ("<input>", args.contents.clone())
    };

    let printed = if args.tokens {
        tokenize(fname, &source).map(|tokens| {
                                    let items: Vec<String> =
                                        tokens.iter().map(ToString::to_string).collect();
                                    format!("[{}]", items.join(", "))
                                })
    } else {
        let options = ParseOptions { skip_leading_tokens: args.skip_leading };
        run_with_options(fname, &source, &options).map(|ast| ast.to_string())
    };

    match printed {
        Ok(out) => println!("{out}"),
        Err(e) => report(&e),
    }
}

fn report(error: &Error) -> ! {
    eprintln!("{error}");
    eprintln!("{}", error.excerpt());
    std::process::exit(1);
}

fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "fal=warn",
        1 => "fal=debug",
        _ => "fal=trace",
    }
}
