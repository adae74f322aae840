//! Command-line definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Demonstrations of composable predicates and orderings.
#[derive(Debug, Parser)]
#[command(name = "criteria", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate length and equality predicates, and their combinations, on words.
    Predicate(PredicateArgs),
    /// Sort people by a chain of keys.
    Sort(SortArgs),
    /// Filter, sort and page people with a query.
    Query(QueryArgs),
}

#[derive(Debug, Args)]
pub struct PredicateArgs {
    /// Words to test.
    #[arg(default_values = ["Yes", "Good Morning", "Good Morning Gentlemen"])]
    pub words: Vec<String>,

    /// The "shorter" predicate holds below this length.
    #[arg(long, default_value_t = 20)]
    pub max_len: usize,

    /// The "longer" predicate holds above this length.
    #[arg(long, default_value_t = 5)]
    pub min_len: usize,

    /// The "equals" predicate holds for this exact word.
    #[arg(long, default_value = "Yes")]
    pub equals: String,
}

#[derive(Debug, Args)]
pub struct SortArgs {
    /// Sort keys, most significant first. Repeat to add tiebreakers.
    #[arg(long = "by", value_enum, default_values = ["first-name", "age"])]
    pub keys: Vec<SortKey>,

    /// Sort in descending order.
    #[arg(long)]
    pub desc: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Keep people at least this old.
    #[arg(long)]
    pub min_age: Option<u32>,

    /// Keep people whose first name starts with this prefix.
    #[arg(long)]
    pub name_prefix: Option<String>,

    /// Drop people whose last name matches this regular expression.
    #[arg(long)]
    pub exclude_last: Option<String>,

    /// Maximum number of results.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Number of results to skip.
    #[arg(long)]
    pub offset: Option<usize>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Where people come from and how they are printed.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// JSON file holding an array of people. Defaults to built-in sample data.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    FirstName,
    LastName,
    Age,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
