//! Command implementations. Each returns the text to print.

use anyhow::{Context, Result};
use criteria::{
    at_least, by_key, by_key_ref, comparing, comparing_ref, is_equal_to, matches_regex,
    starts_with, Comparator, Dir, Predicate, Query, SharedComparator,
};
use tracing::{debug, info};

use crate::cli::{Command, Format, PredicateArgs, QueryArgs, SortArgs, SortKey};
use crate::people::{self, Person};

/// Runs a parsed command.
pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::Predicate(args) => Ok(run_predicate(args)),
        Command::Sort(args) => run_sort(args),
        Command::Query(args) => run_query(args),
    }
}

// ============================================================================
// predicate
// ============================================================================

fn run_predicate(args: &PredicateArgs) -> String {
    let max_len = args.max_len;
    let min_len = args.min_len;

    let shorter = move |s: &str| s.len() < max_len;
    let longer = move |s: &str| s.len() > min_len;
    let both = shorter.and(longer);
    let either = shorter.or(longer);
    let equals = is_equal_to(args.equals.clone());

    let report: Vec<String> = args
        .words
        .iter()
        .map(|word| {
            format!(
                "{word:?}: shorter={} longer={} and={} or={} equals={}",
                shorter.test(word.as_str()),
                longer.test(word.as_str()),
                both.test(word.as_str()),
                either.test(word.as_str()),
                equals.test(word),
            )
        })
        .collect();
    debug!(words = report.len(), "evaluated predicates");
    report.join("\n")
}

// ============================================================================
// sort
// ============================================================================

fn key_comparator(key: SortKey) -> SharedComparator<Person> {
    match key {
        SortKey::FirstName => comparing_ref(|p: &Person| p.first_name.as_str()).shared(),
        SortKey::LastName => comparing_ref(|p: &Person| p.last_name.as_str()).shared(),
        SortKey::Age => comparing(|p: &Person| p.age).shared(),
    }
}

/// Chains the comparators for `keys` with `then_comparing`, most significant first.
///
/// Returns `None` when no keys are given.
pub fn build_ordering(keys: &[SortKey], dir: Dir) -> Option<SharedComparator<Person>> {
    let mut comparators = keys.iter().map(|key| key_comparator(*key));
    let first = comparators.next()?;
    let chain = comparators.fold(first, |chain, next| chain.then_comparing(next).shared());
    Some(chain.directed(dir).shared())
}

fn run_sort(args: &SortArgs) -> Result<String> {
    let mut people = people::load(args.source.input.as_deref())?;
    let dir = Dir::descending_if(args.desc);

    if let Some(ordering) = build_ordering(&args.keys, dir) {
        ordering.sort(&mut people);
    }
    info!(count = people.len(), keys = ?args.keys, %dir, "sorted people");

    render(&people, args.source.format)
}

// ============================================================================
// query
// ============================================================================

/// Builds the people query described by `args`.
pub fn build_query(args: &QueryArgs) -> Result<Query<Person>> {
    let mut query = Query::builder();

    if let Some(min_age) = args.min_age {
        query = query.require(by_key(|p: &Person| p.age, at_least(min_age)));
    }
    if let Some(prefix) = &args.name_prefix {
        query = query.require(by_key_ref(
            |p: &Person| p.first_name.as_str(),
            starts_with(prefix.as_str()),
        ));
    }
    if let Some(pattern) = &args.exclude_last {
        let excluded = matches_regex(pattern)
            .with_context(|| format!("invalid --exclude-last pattern {pattern:?}"))?;
        query = query.exclude(by_key_ref(|p: &Person| p.last_name.as_str(), excluded));
    }

    query = query
        .order_by(comparing_ref(|p: &Person| p.last_name.as_str()))
        .order_by(comparing_ref(|p: &Person| p.first_name.as_str()));

    if let Some(offset) = args.offset {
        query = query.skip(offset);
    }
    if let Some(limit) = args.limit {
        query = query.take(limit);
    }
    Ok(query.build())
}

fn run_query(args: &QueryArgs) -> Result<String> {
    let people = people::load(args.source.input.as_deref())?;
    let query = build_query(args)?;
    let results = query.run_cloned(&people);
    info!(total = people.len(), returned = results.len(), "query complete");

    render(&results, args.source.format)
}

// ============================================================================
// Output
// ============================================================================

fn render(people: &[Person], format: Format) -> Result<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(people).context("failed to serialize people"),
        Format::Text => Ok(people
            .iter()
            .map(|p| format!("{} {} ({})", p.first_name, p.last_name, p.age))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
