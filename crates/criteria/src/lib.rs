//! Criteria - Composable predicates and orderings for in-memory values.
//!
//! Criteria provides two small capabilities and the combinators that build
//! new instances of them out of existing ones:
//!
//! - [`Predicate<T>`]: a boolean test, composed with `and`, `or` and `negate`
//! - [`Comparator<T>`]: a three-way comparison, built from key extractors and
//!   chained with `then_comparing` and `reversed`
//!
//! Every combinator consumes its operands and returns a new value; nothing is
//! mutated after construction, so composed predicates and comparators can be
//! shared freely between threads whenever their parts can.
//!
//! # Quick Start
//!
//! ```rust
//! use criteria::{comparing, comparing_ref, is_equal_to, Comparator, Predicate};
//!
//! #[derive(Debug)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut people = vec![
//!     Person { name: "Bob".into(), age: 30 },
//!     Person { name: "Bob".into(), age: 20 },
//!     Person { name: "Ann".into(), age: 25 },
//! ];
//!
//! // Orderings: name first, age to break ties
//! let by_name_then_age = comparing_ref(|p: &Person| p.name.as_str())
//!     .then_comparing(comparing(|p: &Person| p.age));
//! by_name_then_age.sort(&mut people);
//! assert_eq!(people[0].name, "Ann");
//! assert_eq!(people[1].age, 20);
//!
//! // Predicates: closures compose directly
//! let adult = |p: &Person| p.age >= 21;
//! let named_bob = |p: &Person| p.name == "Bob";
//! let adult_bob = adult.and(named_bob);
//! assert_eq!(people.iter().filter(|p| adult_bob.test(*p)).count(), 1);
//!
//! assert!(is_equal_to(5u32).test(&5u32));
//! ```
//!
//! # Evaluation Rules
//!
//! - `p.and(q)` evaluates `q` only when `p` holds; `p.or(q)` only when it
//!   does not.
//! - `c.then_comparing(d)` evaluates `d` only when `c` reports a tie, and
//!   evaluates `c` once per comparison.
//! - Chains group left to right: `p.and(q).or(r)` is `(p AND q) OR r`.
//! - Panics raised by caller-supplied functions propagate unchanged; no
//!   combinator catches them.
//!
//! # Querying Collections
//!
//! [`Query::builder`] collects required, alternative and excluded clauses
//! plus an ordering chain. Building compiles the clauses into one predicate
//! out of [`all_of`], [`any_of`] and [`not`]; the resulting [`Query`] selects,
//! orders and pages slices, and is itself a [`Predicate`].

mod comparator;
mod error;
mod key;
mod predicate;
mod query;
mod text;

// Re-export public API
pub use comparator::{
    from_sign, natural_order, nulls_first, nulls_last, Comparator, Dir, Directed, FromSign,
    NaturalOrder, NullsFirst, NullsLast, Reversed, SharedComparator, ThenComparing,
};
pub use error::{CriteriaError, Result};
pub use key::{
    by_key, by_key_ref, comparing, comparing_ref, comparing_with, ByKey, ByKeyRef, Comparing,
    ComparingRef, ComparingWith,
};
pub use predicate::{
    all_of, always, any_of, at_least, at_most, greater_than, is_equal_to, less_than, never, not,
    not_equal_to, one_of, AllOf, And, AnyOf, BoundOp, Bounded, Constant, IsEqualTo, Not, OneOf,
    Or, Predicate, SharedPredicate,
};
pub use query::{Query, QueryBuilder};
pub use text::{contains, ends_with, matches_regex, starts_with, Matches, Text, TextOp};
