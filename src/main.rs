//! jvalue CLI.
//!
//! Parses JSON documents, dumps token streams and runs conformance corpora.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use jvalue::conformance::{CorpusRunner, TestResult};
use jvalue::json::limits::MAX_SUPPORTED_DEPTH;
use jvalue::json::{parse_with_limits, JsonValue, Lexer, Limits, Map, TokenKind, TokenSource};
use jvalue::ParseError;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jvalue")]
#[command(about = "Parse JSON into an immutable value model", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print it as compact JSON
    Parse {
        /// Input file (stdin when omitted)
        path: Option<PathBuf>,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Print the token stream of a document
    Tokens {
        /// Input file (stdin when omitted)
        path: Option<PathBuf>,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Run a conformance corpus
    Corpus {
        /// Corpus file
        path: PathBuf,
    },
}

#[derive(Args)]
struct LimitArgs {
    /// Use strict limits (small inputs, shallow nesting, ASCII only)
    #[arg(long)]
    strict: bool,

    /// Read limits from a JSON file; missing fields keep lenient values
    #[arg(long, value_name = "FILE", conflicts_with = "strict")]
    limits: Option<PathBuf>,
}

impl LimitArgs {
    fn resolve(&self) -> Result<Limits, String> {
        if self.strict {
            return Ok(Limits::strict());
        }
        match &self.limits {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
                let limits = Limits::from_json(&text)
                    .map_err(|e| format!("invalid limits file: {e}"))?;
                if limits.max_nesting_depth > MAX_SUPPORTED_DEPTH {
                    warn!(
                        configured = limits.max_nesting_depth,
                        enforced = MAX_SUPPORTED_DEPTH,
                        "nesting depth limit capped"
                    );
                }
                Ok(limits)
            }
            None => Ok(Limits::default()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Parse { path, limits } => run_parse(path.as_deref(), &limits),
        Commands::Tokens { path, limits } => run_tokens(path.as_deref(), &limits),
        Commands::Corpus { path } => run_corpus(&path),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Load input and limits, reporting failures on stderr.
fn prepare(path: Option<&Path>, limits: &LimitArgs) -> Result<(Vec<u8>, Limits), ExitCode> {
    let limits = limits.resolve().map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(2)
    })?;
    let input = read_input(path).map_err(|e| {
        eprintln!("error: cannot read input: {e}");
        ExitCode::from(2)
    })?;
    Ok((input, limits))
}

/// `{"err":{"code":N,"name":"...","message":"..."}}`
fn error_json(err: &ParseError) -> JsonValue {
    let details: Map = [
        ("code".to_string(), JsonValue::from(err.code())),
        ("name".to_string(), JsonValue::from(err.name())),
        ("message".to_string(), JsonValue::from(err.to_string())),
    ]
    .into_iter()
    .collect();
    JsonValue::Object([("err".to_string(), JsonValue::Object(details))].into_iter().collect())
}

fn run_parse(path: Option<&Path>, limits: &LimitArgs) -> ExitCode {
    let (input, limits) = match prepare(path, limits) {
        Ok(prepared) => prepared,
        Err(code) => return code,
    };

    match parse_with_limits(&input, limits) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", error_json(&err));
            ExitCode::FAILURE
        }
    }
}

fn run_tokens(path: Option<&Path>, limits: &LimitArgs) -> ExitCode {
    let (input, limits) = match prepare(path, limits) {
        Ok(prepared) => prepared,
        Err(code) => return code,
    };

    let result = Lexer::new(&input, limits).and_then(|mut lexer| loop {
        let kind = lexer.advance()?;
        if kind == TokenKind::EndOfInput {
            return Ok(());
        }
        let position = lexer.position();
        match lexer.current_text() {
            Some(text) if kind.has_text() => {
                println!("{}:{} {kind} {text:?}", position.line, position.column);
            }
            _ => println!("{}:{} {kind}", position.line, position.column),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", error_json(&err));
            ExitCode::FAILURE
        }
    }
}

fn run_corpus(path: &Path) -> ExitCode {
    let runner = match CorpusRunner::load(path) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let results = runner.run_all();
    for (id, result) in results.failures() {
        if let TestResult::Fail { expected, actual } = result {
            println!("FAIL {id}: expected {expected}, got {actual}");
        }
    }
    println!("{}", results.summary());

    if results.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
