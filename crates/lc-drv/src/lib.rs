//! lc-drv - Compiler driver.
//!
//! The driver orchestrates the pipeline around the core crates: it
//! reads the input file, runs scan → parse → generate as far as the
//! requested emit stage, and writes the result to stdout or a file.
//! The core stays callable without any of this: `lc_lex::tokenize`,
//! `lc_par::parse`, and `lc_gen::generate` are plain functions.
//!
//! Diagnostics go to stderr: scan errors with their `line:column`,
//! parser warnings after a successful parse, phase progress under
//! `--verbose`. A syntax error aborts with exit code 1; warnings never
//! change the exit code.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use lc_lex::{dump_tokens, find_column, tokenize, Lexeme, Tag};
use lc_util::DumpFormat;

/// Which pipeline stage the driver prints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmitType {
    /// The scanned lexeme stream.
    Tokens,
    /// The parsed AST.
    Ast,
    /// The compiled output program.
    #[default]
    Code,
}

impl FromStr for EmitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tokens" => Ok(EmitType::Tokens),
            "ast" => Ok(EmitType::Ast),
            "code" => Ok(EmitType::Code),
            other => Err(format!(
                "unknown emit stage '{other}'. Only 'code', 'tokens', or 'ast' are allowed."
            )),
        }
    }
}

/// Driver configuration for one compiler invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input source file.
    pub input: PathBuf,

    /// Output file; stdout if not set.
    pub output: Option<PathBuf>,

    /// Pipeline stage to print.
    pub emit: EmitType,

    /// Dump format for the tokens and ast stages.
    pub format: DumpFormat,

    /// Report pipeline phases on stderr.
    pub verbose: bool,
}

impl Config {
    /// Parses command-line arguments (without the program name).
    ///
    /// Returns `Ok(None)` when help was requested and printed.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Option<Config>> {
        let mut args = args.into_iter();
        let mut input: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;
        let mut emit = EmitType::default();
        let mut format = DumpFormat::default();
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    print_help();
                    return Ok(None);
                }
                "-o" | "--output" => {
                    if output.is_some() {
                        bail!("output file set more than once");
                    }
                    let value = args
                        .next()
                        .with_context(|| format!("missing value for '{arg}'"))?;
                    output = Some(PathBuf::from(value));
                }
                "-e" | "--emit" => {
                    let value = args
                        .next()
                        .with_context(|| format!("missing value for '{arg}'"))?;
                    emit = value.parse().map_err(anyhow::Error::msg)?;
                }
                "-f" | "--format" => {
                    let value = args
                        .next()
                        .with_context(|| format!("missing value for '{arg}'"))?;
                    format = value.parse().map_err(anyhow::Error::msg)?;
                }
                "-v" | "--verbose" => verbose = true,
                other if other.starts_with('-') => {
                    bail!("unknown option '{other}' (try --help)");
                }
                _ => {
                    if input.is_some() {
                        bail!("more than one input file given");
                    }
                    input = Some(PathBuf::from(arg));
                }
            }
        }

        let Some(input) = input else {
            bail!("input file not specified (try --help)");
        };

        Ok(Some(Config {
            input,
            output,
            emit,
            format,
            verbose,
        }))
    }
}

/// Entry point used by the `lc` binary.
pub fn main() -> Result<()> {
    match Config::from_args(std::env::args().skip(1))? {
        Some(config) => run(&config),
        None => Ok(()),
    }
}

/// Runs one compiler invocation.
pub fn run(config: &Config) -> Result<()> {
    let source = fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read '{}'", config.input.display()))?;

    if config.verbose {
        eprintln!("lexing '{}'", config.input.display());
    }

    let output = match config.emit {
        EmitType::Tokens => {
            let lexemes: Vec<Lexeme> = tokenize(&source).collect();
            // Unknown characters never abort the scan, but each one is
            // reported with its position.
            for lex in lexemes.iter().filter(|lex| lex.tag == Tag::Error) {
                eprintln!(
                    "error: unknown literal '{}' at {}:{}",
                    lex.value.raw(),
                    lex.lineno,
                    find_column(&source, lex.index)
                );
            }
            dump_tokens(&lexemes, config.format)
        }
        EmitType::Ast => {
            if config.verbose {
                eprintln!("parsing");
            }
            let (program, warnings) = lc_par::parse(&source)?;
            report_warnings(&warnings);
            lc_par::dump_ast(&program, config.format)
        }
        EmitType::Code => {
            if config.verbose {
                eprintln!("parsing");
            }
            let (program, warnings) = lc_par::parse(&source)?;
            if config.verbose {
                eprintln!("generating code");
            }
            let lines = lc_gen::generate(&program);
            report_warnings(&warnings);
            lines.join("\n")
        }
    };

    write_output(config.output.as_deref(), &output)
}

fn report_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create '{}'", parent.display()))?;
                }
            }
            fs::write(path, format!("{content}\n"))
                .with_context(|| format!("failed to write '{}'", path.display()))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

fn print_help() {
    println!("lc - compiler for the L language");
    println!();
    println!("Usage: lc [options] <input-file>");
    println!();
    println!("Options:");
    println!("  -e, --emit <code|tokens|ast>   pipeline stage to print (default: code)");
    println!("  -f, --format <txt|json>        dump format for tokens/ast (default: txt)");
    println!("  -o, --output <path>            write output to a file instead of stdout");
    println!("  -v, --verbose                  report pipeline phases on stderr");
    println!("  -h, --help                     show this help");
}
