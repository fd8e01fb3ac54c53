use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser as ClapParser, Subcommand};
use declc::codegen::CodeGenerator;
use declc::config::Limits;
use declc::lexer::tokenize_with_limits;
use declc::parser::{parse, recognize};
use declc::pipeline::compile_file;
use declc::report;
use log::LevelFilter;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(ClapParser)]
#[command(name = "declc")]
#[command(about = "Compiler for a tiny C-like declaration language", long_about = None)]
struct Cli {
    #[command(flatten)]
    log: LoggingArgs,

    #[command(subcommand)]
    command: Commands,
}

/// `-v` / `-q` counted flags, applied on top of the default `warn` level
#[derive(Args)]
struct LoggingArgs {
    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true, conflicts_with = "quiet")]
    verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,
}

impl LoggingArgs {
    fn level_filter(&self) -> LevelFilter {
        match i16::from(self.verbose) - i16::from(self.quiet) {
            i16::MIN..=-2 => LevelFilter::Off,
            -1 => LevelFilter::Error,
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Args)]
struct LimitArgs {
    /// Maximum number of tokens
    #[arg(long, value_name = "N", default_value_t = Limits::DEFAULT_MAX_TOKENS)]
    max_tokens: usize,

    /// Maximum number of intermediate code records
    #[arg(long, value_name = "N", default_value_t = Limits::DEFAULT_MAX_IR_RECORDS)]
    max_ir_records: usize,
}

impl LimitArgs {
    fn limits(&self) -> Limits {
        Limits::default()
            .with_max_tokens(self.max_tokens)
            .with_max_ir_records(self.max_ir_records)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize the input file and print tokens
    Lex {
        /// Input file path
        #[arg(value_name = "FILE", default_value = "input.txt")]
        file: PathBuf,

        #[command(flatten)]
        limits: LimitArgs,
    },
    /// Validate the input file and print the parse trace and AST
    Parse {
        /// Input file path
        #[arg(value_name = "FILE", default_value = "input.txt")]
        file: PathBuf,

        #[command(flatten)]
        limits: LimitArgs,
    },
    /// Run every phase and print the full report
    Compile {
        /// Input file path
        #[arg(value_name = "FILE", default_value = "input.txt")]
        file: PathBuf,

        /// Write the assembly listing here instead of printing the report
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        #[command(flatten)]
        limits: LimitArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log.level_filter())
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Lex { file, limits } => lex_file(&file, &limits.limits())?,
        Commands::Parse { file, limits } => parse_file(&file, &limits.limits())?,
        Commands::Compile {
            file,
            output,
            limits,
        } => compile(&file, output.as_deref(), &limits.limits())?,
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file '{}'", path.display()))
}

fn lex_file(path: &Path, limits: &Limits) -> Result<()> {
    let input = read_source(path)?;

    let lexed = tokenize_with_limits(&input, *limits)
        .with_context(|| format!("failed to tokenize '{}'", path.display()))?;

    let mut out = io::stdout().lock();
    report::write_token_trace(&mut out, &lexed.tokens, &lexed.diagnostics)?;
    report::write_symbol_table(&mut out, &lexed.symbols)?;
    writeln!(out, "\nTotal tokens: {}", lexed.tokens.len())?;

    Ok(())
}

fn parse_file(path: &Path, limits: &Limits) -> Result<()> {
    let input = read_source(path)?;

    // Tokenize
    let lexed = tokenize_with_limits(&input, *limits)
        .with_context(|| format!("failed to tokenize '{}'", path.display()))?;

    // Validate, then build the tree
    let recognition = recognize(&lexed.tokens);
    let parsed = parse(&lexed.tokens);

    let mut out = io::stdout().lock();
    report::write_parse_trace(&mut out, &recognition)?;
    report::write_parse_errors(&mut out, &parsed.errors)?;
    report::write_ast(&mut out, &parsed.program)?;

    if recognition.is_valid() {
        writeln!(out, "\nParsing completed successfully!")?;
    }

    Ok(())
}

fn compile(path: &Path, output: Option<&Path>, limits: &Limits) -> Result<()> {
    let compilation = compile_file(path, limits)
        .with_context(|| format!("failed to compile '{}'", path.display()))?;

    if let Some(output_path) = output {
        let mut codegen = CodeGenerator::new();
        codegen.generate(&compilation.ir);
        codegen
            .write_to_file(output_path)
            .with_context(|| format!("failed to write assembly to '{}'", output_path.display()))?;
        println!("Assembly written to: {}", output_path.display());
    } else {
        let mut out = io::stdout().lock();
        report::write_report(&mut out, &compilation)?;
    }

    Ok(())
}
