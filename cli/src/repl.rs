use owo_colors::OwoColorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use retok::{PatternSpec, Scanner};

pub fn run(specs: &[PatternSpec]) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    println!(
        "{} {}",
        "retok".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Enter text to tokenize, Ctrl-D to exit".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim_end();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                print_tokens(specs, trimmed);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => {
                eprintln!("{} {err}", "repl error:".red().bold());
                break;
            }
        }
    }

    Ok(())
}

fn print_tokens(specs: &[PatternSpec], line: &str) {
    let mut scanner = Scanner::new(specs, line);
    while scanner.has_more() {
        match scanner.next_token() {
            Some(token) => println!("{}\t{}", token.name().green(), token.text),
            None => {
                if scanner.has_more() {
                    eprintln!(
                        "{} {:?}",
                        "unrecognized input:".red().bold(),
                        scanner.remainder()
                    );
                }
                break;
            }
        }
    }
}
