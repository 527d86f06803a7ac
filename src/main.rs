use cs2vb::{lexer, parser, translator};

use ariadne::Source;
use clap::Parser;
use yansi::Paint;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

/// Translates curly-brace source files into VB-style keyword blocks.
#[derive(Parser)]
#[command(name = "cs2vb", version, about)]
struct Cli {
    /// Source files to translate; each produces a sibling `.vb` file
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Also write the token sequence as `<file>.tokens.json`
    #[arg(long)]
    tokens: bool,

    /// Also write the parsed tree as `<file>.ast.json`
    #[arg(long)]
    ast: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut failed = false;
    for file in &cli.files {
        if process_file(file, cli.tokens, cli.ast).is_err() {
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn process_file(file: &Path, dump_tokens: bool, dump_ast: bool) -> Result<(), ()> {
    println!("> Reading file: {}", file.display().bold());
    let source = fs::read_to_string(file).map_err(|err| {
        eprintln!("  {} {}", "error:".red().bold(), err);
    })?;

    let started = Instant::now();
    let tokens = lexer::tokenize(&source);
    println!(
        "  tokenizer finished in {:?} ({} tokens)",
        started.elapsed(),
        tokens.len()
    );

    if dump_tokens {
        let records = lexer::token_records(&tokens);
        write_json(&file.with_extension("tokens.json"), &records)?;
    }

    let started = Instant::now();
    let program = match parser::parse(tokens, Some(&source)) {
        Ok(program) => program,
        Err(error) => {
            let name = file.display().to_string();
            error
                .report(&name)
                .print((name.clone(), Source::from(source)))
                .map_err(|err| eprintln!("  {} {}", "error:".red().bold(), err))?;
            return Err(());
        }
    };
    println!("  parser finished in {:?}", started.elapsed());

    if dump_ast {
        write_json(&file.with_extension("ast.json"), &program)?;
    }

    let started = Instant::now();
    let translated = translator::translate(&program);
    println!("  translator finished in {:?}", started.elapsed());

    let target = file.with_extension("vb");
    fs::write(&target, translated).map_err(|err| {
        eprintln!("  {} {}", "error:".red().bold(), err);
    })?;
    println!("  {} {}", "wrote".green().bold(), target.display());

    Ok(())
}

fn write_json<T: serde::Serialize>(target: &Path, value: &T) -> Result<(), ()> {
    let json = serde_json::to_string_pretty(value).map_err(|err| {
        eprintln!("  {} {}", "error:".red().bold(), err);
    })?;
    fs::write(target, json).map_err(|err| {
        eprintln!("  {} {}", "error:".red().bold(), err);
    })?;
    println!("  {} {}", "wrote".green().bold(), target.display());
    Ok(())
}
