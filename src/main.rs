use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use jot::{interpreter::evaluator::core::Context, run_source};

/// jot is an interpreter for a subset of the J array programming
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a path to a J script instead of an expression.
    #[arg(short, long)]
    file: bool,

    /// The expression or script to run. Starts an interactive session
    /// when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let mut context = Context::new();
    match run_source(&script, &mut context) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Runs the interactive session: one sentence per line behind J's
/// three-space prompt, until `quit`, `exit` or end of input. Errors are
/// reported and the session continues; names persist between lines.
fn repl() {
    let mut context = Context::new();
    let stdin = io::stdin();

    loop {
        print!("   ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let sentence = line.trim();
        if sentence == "quit" || sentence == "exit" {
            break;
        }
        if sentence.is_empty() {
            continue;
        }

        match run_source(sentence, &mut context) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => eprintln!("{e}"),
        }
    }
}
