//! oxide-expr CLI
//!
//! Command-line tool for canonicalizing document-store CRUD expressions.

use std::fmt::Display;
use std::io::{self, BufRead};

use anyhow::bail;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_expr_core::ast::{
    render_document_path, Column, ColumnIdentifier, DocumentPathItem, Order, Projection,
    UpdateOperation,
};
use oxide_expr_core::{Expr, MalformedExpression, Parser as ExprParser, PlaceholderMap};

/// Parse and canonicalize document-store CRUD expressions.
#[derive(Parser)]
#[command(name = "oxide-expr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// What kind of text the inputs are.
    #[arg(short, long, value_enum, env = "OXIDE_EXPR_MODE", default_value_t = Mode::Expr)]
    mode: Mode,

    /// Print the parsed tree as JSON instead of its canonical form.
    #[arg(long)]
    json: bool,

    /// Print the position assigned to each placeholder.
    #[arg(short, long)]
    placeholders: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Inputs to parse. Non-empty stdin lines are used when none are given.
    inputs: Vec<String>,
}

/// Parser entry point to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// A single expression.
    Expr,
    /// An order specification.
    Order,
    /// A document projection list.
    DocumentProjection,
    /// A table select projection list.
    TableSelect,
    /// A table insert column list.
    TableInsert,
    /// A table update column list.
    TableUpdate,
    /// A list of update assignments.
    UpdateList,
    /// A standalone document path.
    DocumentPath,
}

/// The result of one input, in whatever shape its mode produces.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Parsed {
    Expr(Expr),
    Orders(Vec<Order>),
    Projections(Vec<Projection>),
    Columns(Vec<Column>),
    ColumnIdentifiers(Vec<ColumnIdentifier>),
    Updates(Vec<UpdateOperation>),
    Path(Vec<DocumentPathItem>),
}

impl Parsed {
    /// Returns the canonical text; lists are joined with `, `.
    fn render(&self) -> String {
        match self {
            Self::Expr(expr) => expr.to_string(),
            Self::Orders(items) => join(items),
            Self::Projections(items) => join(items),
            Self::Columns(items) => join(items),
            Self::ColumnIdentifiers(items) => join(items),
            Self::Updates(items) => join(items),
            Self::Path(path) => render_document_path(path),
        }
    }
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses one input with the entry point selected by `mode`.
fn compile(mode: Mode, input: &str) -> Result<(Parsed, PlaceholderMap), MalformedExpression> {
    let mut parser = ExprParser::new(input);
    let parsed = match mode {
        Mode::Expr => Parsed::Expr(parser.parse()?),
        Mode::Order => Parsed::Orders(parser.parse_order_spec()?),
        Mode::DocumentProjection => Parsed::Projections(parser.parse_document_projection()?),
        Mode::TableSelect => Parsed::Projections(parser.parse_table_select_projection()?),
        Mode::TableInsert => Parsed::Columns(parser.parse_table_insert_projection()?),
        Mode::TableUpdate => Parsed::ColumnIdentifiers(parser.parse_table_update_projection()?),
        Mode::UpdateList => Parsed::Updates(parser.parse_update_list()?),
        Mode::DocumentPath => Parsed::Path(parser.parse_document_path()?),
    };
    Ok((parsed, parser.into_placeholders()))
}

fn read_stdin_inputs() -> anyhow::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let inputs = if cli.inputs.is_empty() {
        read_stdin_inputs()?
    } else {
        cli.inputs.clone()
    };
    debug!(mode = ?cli.mode, count = inputs.len(), "processing inputs");

    let mut failures = 0usize;
    for input in &inputs {
        match compile(cli.mode, input) {
            Ok((parsed, placeholders)) => {
                if cli.json {
                    println!("{}", serde_json::to_string(&parsed)?);
                } else {
                    println!("{}", parsed.render());
                }
                if cli.placeholders {
                    for (key, position) in placeholders.iter() {
                        println!("{key} -> :{position}");
                    }
                }
            }
            Err(err) => {
                error!(input = %input, "{err}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} inputs were malformed", inputs.len());
    }
    Ok(())
}
