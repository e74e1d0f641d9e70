use std::fs;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use serde::Serialize;

use retok::{PatternSpec, ScanError, Token, diagnostics};

mod repl;
mod token_set;

#[derive(Parser)]
#[command(name = "retok", about = "A maximal-munch regex tokenizer")]
struct Cli {
    /// Path to a file to tokenize
    file: Option<String>,
    /// Tokenize inline text instead of a file
    #[arg(long)]
    eval: Option<String>,
    /// Load token rules from a JSON file instead of the built-in set
    #[arg(long)]
    rules: Option<String>,
    /// Emit the token stream as JSON
    #[arg(long)]
    json: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    name: &'a str,
    text: &'a str,
    start: usize,
    end: usize,
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{} {}",
            "retok".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    let specs = match load_rules(cli.rules.as_deref()) {
        Ok(specs) => specs,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
    };

    if cli.file.is_none() && cli.eval.is_none() {
        if let Err(err) = repl::run(&specs) {
            eprintln!("{} {err}", "repl error:".red().bold());
            process::exit(1);
        }
        return;
    }

    let (source, source_name) = if let Some(text) = cli.eval {
        (text, String::from("<eval>"))
    } else {
        let file = cli.file.expect("checked above");
        match fs::read_to_string(&file) {
            Ok(s) => (s, file),
            Err(e) => {
                eprintln!(
                    "{} could not read '{}': {e}",
                    "error:".red().bold(),
                    file.yellow()
                );
                process::exit(1);
            }
        }
    };

    let tokens = match retok::lex(&specs, &source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", format_scan_error(&source, &source_name, &err));
            process::exit(1);
        }
    };

    if cli.json {
        print_json(&tokens);
    } else {
        for token in &tokens {
            println!("{}\t{}", token.name().green(), token.text);
        }
    }
}

fn load_rules(path: Option<&str>) -> Result<Vec<PatternSpec>, String> {
    let Some(path) = path else {
        return token_set::default_rules().map_err(|err| err.to_string());
    };
    let text = fs::read_to_string(path).map_err(|err| format!("could not read '{path}': {err}"))?;
    let defs: Vec<token_set::RuleDef> =
        serde_json::from_str(&text).map_err(|err| format!("invalid rules file '{path}': {err}"))?;
    token_set::compile(&defs).map_err(|err| err.to_string())
}

fn print_json(tokens: &[Token<'_>]) {
    let records: Vec<TokenRecord<'_>> = tokens
        .iter()
        .map(|token| TokenRecord {
            name: token.name(),
            text: token.text,
            start: token.span.start,
            end: token.span.end,
        })
        .collect();
    match serde_json::to_string_pretty(&records) {
        Ok(out) => println!("{out}"),
        Err(err) => eprintln!("{} {err}", "error:".red().bold()),
    }
}

fn format_scan_error(source: &str, source_name: &str, err: &ScanError) -> String {
    let pos = diagnostics::position(source, err.offset);
    format!(
        "{} at {}:{}:{}: {}",
        "scan error".red().bold(),
        source_name.cyan(),
        pos.line,
        pos.col,
        err.to_string().bright_white()
    )
}
