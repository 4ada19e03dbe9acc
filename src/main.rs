use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

use clap::Parser as ClapParser;
use log::{debug, error};
use misery::{
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
};

#[derive(ClapParser, Debug)]
#[command(name = "misery", version, about = "Read-parse-print loop for the misery language")]
struct Cli {
    /// Parse this file as a single chunk instead of starting the loop.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the token stream instead of the parsed trees.
    #[arg(long)]
    tokens: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.file {
        Some(path) => {
            let source = match read_to_string(path) {
                Ok(source) => source,
                Err(err) => {
                    error!("failed to read {}: {}", path.display(), err);
                    eprintln!("Failed to read {}: {}", path.display(), err);
                    process::exit(1);
                }
            };

            let origin = path.as_os_str().to_string_lossy();
            if !run_chunk(&source, &origin, cli.tokens) {
                process::exit(1);
            }
        }
        None => run_repl(cli.tokens),
    }
}

fn run_repl(show_tokens: bool) {
    println!("Welcome to misery {}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        if let Err(err) = io::stdout().flush() {
            error!("failed to flush prompt: {}", err);
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return,
            Ok(_) => {}
            Err(err) => {
                println!("{}", err);
                return;
            }
        }

        let text = line.trim_matches('\n');
        if text.is_empty() {
            continue;
        }

        if text == "exit" {
            return;
        }

        run_chunk(text, "<stdin>", show_tokens);
    }
}

/// Parses one chunk and prints the outcome. Returns false if parsing failed.
fn run_chunk(source: &str, origin: &str, show_tokens: bool) -> bool {
    if show_tokens {
        for token in tokenize(source) {
            println!("{}", token);
        }
        return true;
    }

    let (trees, error) = parse(source);
    debug!("{} trees from {}", trees.len(), origin);

    if let Some(error) = &error {
        println!("{}", render_error(error, source, origin));
    }

    for tree in &trees {
        println!("{}", tree);
    }

    error.is_none()
}
