use clap::Parser;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use pbt_toolkit::{
    count_vowels, encode_runs, merge_max_mappings, pairwise_dists, run_length_decoder,
    run_length_encoder, safe_name, softmax, try_leftpad, MappingValue, Matrix, PreconditionError,
    RleToken, Symbol,
};

mod cli;
use cli::display::{error_line, hint_line};
use cli::{Cli, Commands, RleAction};

/// Why a command could not produce a result.
#[derive(Debug)]
enum CliError {
    /// An argument was not the JSON we expected.
    Json {
        argument: &'static str,
        source: serde_json::Error,
    },
    /// The library rejected the input.
    Precondition(PreconditionError),
    /// Writing the result failed (closed pipe and the like).
    Output(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Json { argument, source } => {
                write!(f, "could not parse {} as JSON: {}", argument, source)
            }
            CliError::Precondition(err) => write!(f, "{}", err),
            CliError::Output(err) => write!(f, "could not write output: {}", err),
        }
    }
}

impl From<PreconditionError> for CliError {
    fn from(err: PreconditionError) -> Self {
        CliError::Precondition(err)
    }
}

impl CliError {
    fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Json { argument, .. } => match *argument {
                "first mapping" | "second mapping" => Some(r#"mappings look like '{"a": 1, "b": 2.5}'"#),
                "token stream" => Some(r#"token streams look like '["a","a",5,"b"]'"#),
                "x" | "y" => Some("point sets look like '[[0, 0], [1, 1]]'"),
                "value" => Some(r#"wrap strings in double quotes: '"core::option::Option"'"#),
                _ => None,
            },
            CliError::Precondition(PreconditionError::FillNotSingleChar { .. }) => {
                Some("pass exactly one character to --fill")
            }
            _ => None,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli.command).and_then(|value| emit(&value, cli.pretty));
    if let Err(e) = result {
        eprintln!("{}", error_line(&e.to_string()));
        if let Some(hint) = e.hint() {
            eprintln!("{}", hint_line(hint));
        }
        std::process::exit(1);
    }
}

fn emit(value: &Value, pretty: bool) -> Result<(), CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|source| CliError::Json {
        argument: "result",
        source,
    })?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered).map_err(CliError::Output)
}

fn parse<T: serde::de::DeserializeOwned>(raw: &str, argument: &'static str) -> Result<T, CliError> {
    serde_json::from_str(raw).map_err(|source| CliError::Json { argument, source })
}

fn run(command: Commands) -> Result<Value, CliError> {
    match command {
        Commands::Vowels { text, include_y } => Ok(json!(count_vowels(&text, include_y))),

        Commands::Merge { first, second } => {
            let a: HashMap<String, MappingValue> = parse(&first, "first mapping")?;
            let b: HashMap<String, MappingValue> = parse(&second, "second mapping")?;
            Ok(json!(merge_max_mappings(&a, &b)))
        }

        Commands::Leftpad { text, width, fill } => Ok(json!(try_leftpad(&text, width, &fill)?)),

        Commands::Rle { action } => match action {
            RleAction::Encode { text, pairs: false } => Ok(json!(run_length_encoder(&text))),
            RleAction::Encode { text, pairs: true } => Ok(json!(encode_runs(&text))),
            RleAction::Decode { tokens } => {
                let tokens: Vec<RleToken> = parse(&tokens, "token stream")?;
                Ok(json!(run_length_decoder(&tokens)?))
            }
        },

        Commands::Softmax { values } => Ok(json!(softmax(&values))),

        Commands::Dists { x, y } => {
            let x: Vec<Vec<f64>> = parse(&x, "x")?;
            let y: Vec<Vec<f64>> = parse(&y, "y")?;
            // An empty point set takes its dimension from the other one.
            let x_dim = x.first().map(Vec::len);
            let y_dim = y.first().map(Vec::len);
            let x = Matrix::from_rows(x, x_dim.or(y_dim).unwrap_or(0))?;
            let y = Matrix::from_rows(y, y_dim.or(x_dim).unwrap_or(0))?;
            let dists = pairwise_dists(&x, &y)?;
            Ok(json!({
                "shape": [dists.rows(), dists.cols()],
                "dists": dists.to_rows(),
            }))
        }

        Commands::Name { value, no_repr } => {
            let value: Value = parse(&value, "value")?;
            Ok(json!(safe_name(&symbol_for(&value), !no_repr)))
        }
    }
}

/// Map a JSON value onto the naming capabilities it can offer.
///
/// Strings containing `::` are item paths, other non-empty strings are bare
/// names, `null` offers nothing, and everything else can only describe
/// itself.
fn symbol_for(value: &Value) -> Symbol {
    match value {
        Value::String(s) if s.contains("::") => Symbol::from_path(s),
        Value::String(s) if !s.is_empty() => Symbol::Named(s.clone()),
        Value::String(_) | Value::Null => Symbol::Opaque,
        other => Symbol::Value(other.to_string()),
    }
}
