//! Filtered, ordered and paged selections over slices.
//!
//! A [`QueryBuilder`] collects clauses in three groups and an ordering chain.
//! [`QueryBuilder::build`] compiles the groups into a single predicate,
//!
//! ```text
//! all_of(required) AND any_of(alternatives) AND NOT any_of(excluded)
//! ```
//!
//! where an empty alternatives group does not restrict anything. The result
//! is a [`Query`], which is itself a [`Predicate`] and can be run against a
//! slice.
//!
//! ```
//! use criteria::{at_least, by_key, by_key_ref, ends_with, Dir, Query};
//!
//! struct Order {
//!     customer: String,
//!     cents: u64,
//!     shipped: bool,
//! }
//!
//! let orders = vec![
//!     Order { customer: "acme.io".into(), cents: 12_00, shipped: false },
//!     Order { customer: "globex.com".into(), cents: 99_00, shipped: false },
//!     Order { customer: "initech.io".into(), cents: 45_00, shipped: false },
//!     Order { customer: "umbrella.io".into(), cents: 70_00, shipped: true },
//! ];
//!
//! let open_io_orders = Query::builder()
//!     .require(by_key_ref(|o: &Order| o.customer.as_str(), ends_with(".io")))
//!     .require(by_key(|o: &Order| o.cents, at_least(10_00u64)))
//!     .exclude(|o: &Order| o.shipped)
//!     .order_by_key(|o: &Order| o.cents, Dir::Desc)
//!     .build();
//!
//! let customers: Vec<&str> = open_io_orders
//!     .run(&orders)
//!     .into_iter()
//!     .map(|o| o.customer.as_str())
//!     .collect();
//! assert_eq!(customers, ["initech.io", "acme.io"]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::comparator::{Comparator, Dir, SharedComparator};
use crate::key::Comparing;
use crate::predicate::{all_of, always, any_of, not, Predicate, SharedPredicate};

/// Collects the clauses of a [`Query`].
///
/// Clauses within a group are checked in the order they were added.
pub struct QueryBuilder<T> {
    required: Vec<SharedPredicate<T>>,
    alternatives: Vec<SharedPredicate<T>>,
    excluded: Vec<SharedPredicate<T>>,
    ordering: Option<SharedComparator<T>>,
    skip: usize,
    take: Option<usize>,
}

impl<T: 'static> QueryBuilder<T> {
    pub fn new() -> Self {
        QueryBuilder {
            required: Vec::new(),
            alternatives: Vec::new(),
            excluded: Vec::new(),
            ordering: None,
            skip: 0,
            take: None,
        }
    }

    /// Every required clause must match.
    pub fn require<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<T> + Send + Sync + 'static,
    {
        self.required.push(predicate.shared());
        self
    }

    /// At least one alternative must match, once any are given.
    pub fn allow<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<T> + Send + Sync + 'static,
    {
        self.alternatives.push(predicate.shared());
        self
    }

    /// No excluded clause may match.
    pub fn exclude<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<T> + Send + Sync + 'static,
    {
        self.excluded.push(predicate.shared());
        self
    }

    /// Appends `comparator` to the ordering chain.
    ///
    /// The first comparator is the primary order; each later one breaks the
    /// ties left by the chain so far.
    pub fn order_by<C>(mut self, comparator: C) -> Self
    where
        C: Comparator<T> + Send + Sync + 'static,
    {
        self.ordering = Some(match self.ordering.take() {
            None => comparator.shared(),
            Some(chain) => chain.then_comparing(comparator).shared(),
        });
        self
    }

    /// Appends the natural order of an owned key, facing `dir`.
    pub fn order_by_key<K, F>(self, key: F, dir: Dir) -> Self
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.order_by(Comparing::new(key).directed(dir))
    }

    /// Skips the first `n` selected items.
    pub fn skip(mut self, n: usize) -> Self {
        self.skip = n;
        self
    }

    /// Keeps at most `n` selected items, counted after skipping.
    pub fn take(mut self, n: usize) -> Self {
        self.take = Some(n);
        self
    }

    /// Compiles the clause groups into a single predicate.
    pub fn build(self) -> Query<T> {
        let clauses = self.required.len() + self.alternatives.len() + self.excluded.len();

        let required = all_of(self.required);
        let excluded = not(any_of(self.excluded));
        let selector: SharedPredicate<T> = if self.alternatives.is_empty() {
            required.and(excluded).shared()
        } else {
            required
                .and(any_of(self.alternatives))
                .and(excluded)
                .shared()
        };

        Query {
            selector,
            clauses,
            ordering: self.ordering,
            skip: self.skip,
            take: self.take,
        }
    }
}

impl<T: 'static> Default for QueryBuilder<T> {
    fn default() -> Self {
        QueryBuilder::new()
    }
}

/// A compiled selection: one predicate, an optional ordering and a page window.
pub struct Query<T> {
    selector: SharedPredicate<T>,
    clauses: usize,
    ordering: Option<SharedComparator<T>>,
    skip: usize,
    take: Option<usize>,
}

impl<T: 'static> Query<T> {
    /// Starts a new query.
    pub fn builder() -> QueryBuilder<T> {
        QueryBuilder::new()
    }

    /// A query that selects every item in input order.
    pub fn everything() -> Self {
        Query {
            selector: SharedPredicate::new(always()),
            clauses: 0,
            ordering: None,
            skip: 0,
            take: None,
        }
    }
}

impl<T> Query<T> {
    /// Number of clauses compiled into the selector.
    pub fn clause_count(&self) -> usize {
        self.clauses
    }

    pub fn is_ordered(&self) -> bool {
        self.ordering.is_some()
    }

    /// The `(skip, take)` page window.
    pub fn window(&self) -> (usize, Option<usize>) {
        (self.skip, self.take)
    }

    /// Compares two items with the ordering chain. Unordered queries tie.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.ordering
            .as_ref()
            .map_or(Ordering::Equal, |ordering| ordering.compare(a, b))
    }

    /// Selects, orders and pages `items`.
    ///
    /// Ordering is stable, and the window applies after ordering.
    pub fn run<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut selected: Vec<&'a T> = items
            .iter()
            .filter(|item| self.selector.test(*item))
            .collect();
        let matched = selected.len();

        if let Some(ordering) = &self.ordering {
            selected.sort_by(|a, b| ordering.compare(a, b));
        }

        let page: Vec<&'a T> = selected
            .into_iter()
            .skip(self.skip)
            .take(self.take.unwrap_or(usize::MAX))
            .collect();

        debug!(
            total = items.len(),
            matched,
            returned = page.len(),
            skip = self.skip,
            "query run"
        );
        page
    }

    /// Like [`run`](Query::run), cloning the page.
    pub fn run_cloned(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        self.run(items).into_iter().cloned().collect()
    }

    /// Drops unselected items in place. Ordering and the window are ignored.
    pub fn retain(&self, items: &mut Vec<T>) {
        items.retain(|item| self.selector.test(item));
    }

    /// Number of selected items, ignoring the window.
    pub fn count(&self, items: &[T]) -> usize {
        items
            .iter()
            .filter(|item| self.selector.test(*item))
            .count()
    }

    /// First selected item in input order, ignoring ordering and the window.
    pub fn first<'a>(&self, items: &'a [T]) -> Option<&'a T> {
        items.iter().find(|item| self.selector.test(*item))
    }
}

impl<T> Predicate<T> for Query<T> {
    fn test(&self, value: &T) -> bool {
        self.selector.test(value)
    }
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Query {
            selector: self.selector.clone(),
            clauses: self.clauses,
            ordering: self.ordering.clone(),
            skip: self.skip,
            take: self.take,
        }
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("clauses", &self.clauses)
            .field("ordered", &self.is_ordered())
            .field("skip", &self.skip)
            .field("take", &self.take)
            .finish()
    }
}
