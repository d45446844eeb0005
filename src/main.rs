use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use novolang::{
    Interpreter,
    ast::Node,
    interpreter::{
        backend::Backend, host::Stdout, keywords::KeywordSet, lexer::tokenize, parser::parse,
        render::render,
    },
};
use tracing_subscriber::EnvFilter;

/// novolang runs scripts whose keywords may be written in Chinese, English,
/// Japanese, Korean or Russian.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log pipeline stages to stderr. `RUST_LOG` overrides this.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a script.
    Run(RunArgs),
    /// Print the tokens of a script as JSON.
    Tokens {
        /// Source file to tokenize.
        file: PathBuf,
    },
    /// Print the syntax tree of a script as JSON.
    Ast {
        /// Source file to parse.
        file: PathBuf,
    },
    /// Re-spell a script's keywords in another language.
    Translate {
        /// Source file to translate.
        file: PathBuf,
        /// Target keyword set.
        #[arg(long, value_enum)]
        to:   KeywordSet,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Script file to run.
    #[arg(required_unless_present = "eval", conflicts_with = "eval")]
    file: Option<PathBuf>,

    /// Run this source text instead of a file.
    #[arg(short, long, value_name = "SOURCE")]
    eval: Option<String>,

    /// Treat the input as a JSON syntax tree instead of source text.
    #[arg(long)]
    ast: bool,

    /// Evaluator backend. Defaults to the fastest one compiled in.
    #[arg(long, value_enum, env = "NOVOLANG_BACKEND")]
    backend: Option<Backend>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let result = match cli.command {
        Command::Run(args) => cmd_run(args),
        Command::Tokens { file } => cmd_tokens(&file),
        Command::Ast { file } => cmd_ast(&file),
        Command::Translate { file, to } => cmd_translate(&file, to),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

fn read_source(path: &PathBuf) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

fn cmd_run(args: RunArgs) -> Result<()> {
    let source = match (args.eval, &args.file) {
        (Some(source), _) => source,
        (None, Some(file)) => read_source(file)?,
        (None, None) => anyhow::bail!("no script given"),
    };

    let mut interpreter =
        Interpreter::new().with_backend(args.backend.unwrap_or_else(Backend::preferred));

    if args.ast {
        let program: Node = serde_json::from_str(&source).context("invalid syntax tree")?;
        interpreter.execute(&program, &mut Stdout)?;
    } else {
        interpreter.run_with(&source, &mut Stdout)?;
    }
    Ok(())
}

fn cmd_tokens(file: &PathBuf) -> Result<()> {
    let tokens = tokenize(&read_source(file)?)?;
    println!("{}", serde_json::to_string_pretty(&tokens)?);
    Ok(())
}

fn cmd_ast(file: &PathBuf) -> Result<()> {
    let program = parse(&tokenize(&read_source(file)?)?)?;
    println!("{}", serde_json::to_string_pretty(&program)?);
    Ok(())
}

fn cmd_translate(file: &PathBuf, to: KeywordSet) -> Result<()> {
    let tokens = tokenize(&read_source(file)?)?;
    print!("{}", render(&tokens, Some(to)));
    Ok(())
}
