//! Three-way comparisons and the combinators that chain them.
//!
//! A [`Comparator`] has a single required method, [`Comparator::compare`].
//! Orderings are built up from key extractors (see [`comparing`]) and chained
//! with [`Comparator::then_comparing`]:
//!
//! ```
//! use criteria::{comparing_ref, Comparator};
//!
//! struct Person { name: String, age: u32 }
//!
//! let mut people = vec![
//!     Person { name: "Bob".into(), age: 30 },
//!     Person { name: "Bob".into(), age: 20 },
//!     Person { name: "Ann".into(), age: 25 },
//! ];
//!
//! let by_name_then_age = comparing_ref(|p: &Person| p.name.as_str())
//!     .then_comparing_key(|p: &Person| p.age);
//! by_name_then_age.sort(&mut people);
//!
//! let order: Vec<(&str, u32)> = people.iter().map(|p| (p.name.as_str(), p.age)).collect();
//! assert_eq!(order, [("Ann", 25), ("Bob", 20), ("Bob", 30)]);
//! ```
//!
//! Chaining never sums or mixes results from different keys: a later
//! comparator is consulted only when every earlier one reports a tie.
//!
//! [`comparing`]: crate::comparing

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::CriteriaError;
use crate::key::{Comparing, ComparingRef};

/// A three-way comparison between two values of type `T`.
///
/// Any `Fn(&T, &T) -> Ordering` closure or function is a comparator.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns a comparator that breaks ties in `self` with `next`.
    ///
    /// `next` is only evaluated for pairs that `self` reports as equal.
    fn then_comparing<C>(self, next: C) -> ThenComparing<Self, C>
    where
        Self: Sized,
        C: Comparator<T>,
    {
        ThenComparing { first: self, next }
    }

    /// Breaks ties in `self` by the natural order of an owned key.
    ///
    /// Shorthand for `self.then_comparing(comparing(key))`.
    fn then_comparing_key<K, F>(self, key: F) -> ThenComparing<Self, Comparing<K, F>>
    where
        Self: Sized,
        F: Fn(&T) -> K,
        K: Ord,
    {
        self.then_comparing(Comparing::new(key))
    }

    /// Breaks ties in `self` by the natural order of a key borrowed from the value.
    ///
    /// Shorthand for `self.then_comparing(comparing_ref(key))`.
    fn then_comparing_ref<K, F>(self, key: F) -> ThenComparing<Self, ComparingRef<K, F>>
    where
        Self: Sized,
        F: for<'a> Fn(&'a T) -> &'a K,
        K: Ord + ?Sized,
    {
        self.then_comparing(ComparingRef::new(key))
    }

    /// Returns the reverse of this ordering: less and greater swap, equal stays.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed { inner: self }
    }

    /// Applies a sort direction to this ordering.
    fn directed(self, dir: Dir) -> Directed<Self>
    where
        Self: Sized,
    {
        Directed { inner: self, dir }
    }

    /// Erases the concrete type behind a cheaply clonable [`SharedComparator`].
    fn shared(self) -> SharedComparator<T>
    where
        Self: Sized + Send + Sync + 'static,
    {
        SharedComparator::new(self)
    }

    /// Sorts `items` in place.
    ///
    /// The sort is stable: items that compare equal keep their relative order.
    fn sort(&self, items: &mut [T])
    where
        T: Sized,
    {
        items.sort_by(|a, b| self.compare(a, b));
    }

    /// Returns `true` if no adjacent pair in `items` is out of order.
    fn is_sorted(&self, items: &[T]) -> bool
    where
        T: Sized,
    {
        items
            .windows(2)
            .all(|pair| self.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }

    /// Returns the smallest item, or the first of several equally small ones.
    fn min_of<'a, I>(&self, items: I) -> Option<&'a T>
    where
        Self: Sized,
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        items.into_iter().min_by(|a, b| self.compare(a, b))
    }

    /// Returns the largest item, or the last of several equally large ones.
    fn max_of<'a, I>(&self, items: I) -> Option<&'a T>
    where
        Self: Sized,
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        items.into_iter().max_by(|a, b| self.compare(a, b))
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

// ============================================================================
// Composites
// ============================================================================

/// Lexicographic chain of two comparators. Built by [`Comparator::then_comparing`].
#[derive(Debug, Clone, Copy)]
pub struct ThenComparing<A, B> {
    first: A,
    next: B,
}

impl<T: ?Sized, A: Comparator<T>, B: Comparator<T>> Comparator<T> for ThenComparing<A, B> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.first
            .compare(a, b)
            .then_with(|| self.next.compare(a, b))
    }
}

/// Reverse of a comparator. Built by [`Comparator::reversed`].
#[derive(Debug, Clone, Copy)]
pub struct Reversed<C> {
    inner: C,
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner.compare(a, b).reverse()
    }
}

/// Which way a [`Directed`] comparator faces.
///
/// Parses from `asc`/`ascending` and `desc`/`descending`, ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

impl Dir {
    /// `Desc` when `descending` is set, `Asc` otherwise.
    pub fn descending_if(descending: bool) -> Dir {
        if descending {
            Dir::Desc
        } else {
            Dir::Asc
        }
    }

    /// The opposite direction.
    pub fn flip(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Orients an ascending result to face this direction.
    pub fn orient(self, ordering: Ordering) -> Ordering {
        if self == Dir::Desc {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl FromStr for Dir {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            _ => Err(CriteriaError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        })
    }
}

/// A comparator with a sort direction applied. Built by [`Comparator::directed`].
#[derive(Debug, Clone, Copy)]
pub struct Directed<C> {
    inner: C,
    dir: Dir,
}

impl<C> Directed<C> {
    /// Returns the direction.
    pub fn dir(&self) -> Dir {
        self.dir
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Directed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.dir.orient(self.inner.compare(a, b))
    }
}

// ============================================================================
// Factories
// ============================================================================

/// The natural order of an [`Ord`] type. Built by [`natural_order`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders values by their [`Ord`] implementation.
pub fn natural_order() -> NaturalOrder {
    NaturalOrder
}

/// Comparator from a signed-integer comparison function. Built by [`from_sign`].
#[derive(Clone, Copy)]
pub struct FromSign<F> {
    f: F,
}

impl<T: ?Sized, F> Comparator<T> for FromSign<F>
where
    F: Fn(&T, &T) -> i32,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.f)(a, b).cmp(&0)
    }
}

impl<F> fmt::Debug for FromSign<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromSign").finish_non_exhaustive()
    }
}

/// Adapts a function returning a negative, zero or positive integer.
///
/// ```
/// use std::cmp::Ordering;
/// use criteria::{from_sign, Comparator};
///
/// let by_age_desc = from_sign(|a: &i32, b: &i32| b - a);
/// assert_eq!(by_age_desc.compare(&30, &20), Ordering::Less);
/// ```
pub fn from_sign<F>(f: F) -> FromSign<F> {
    FromSign { f }
}

/// Orders `None` before every `Some`. Built by [`nulls_first`].
#[derive(Debug, Clone, Copy)]
pub struct NullsFirst<C> {
    inner: C,
}

impl<T, C: Comparator<T>> Comparator<Option<T>> for NullsFirst<C> {
    fn compare(&self, a: &Option<T>, b: &Option<T>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.inner.compare(a, b),
        }
    }
}

/// Orders `None` after every `Some`. Built by [`nulls_last`].
#[derive(Debug, Clone, Copy)]
pub struct NullsLast<C> {
    inner: C,
}

impl<T, C: Comparator<T>> Comparator<Option<T>> for NullsLast<C> {
    fn compare(&self, a: &Option<T>, b: &Option<T>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => self.inner.compare(a, b),
        }
    }
}

/// Lifts `inner` to optional values, with `None` sorting first.
pub fn nulls_first<C>(inner: C) -> NullsFirst<C> {
    NullsFirst { inner }
}

/// Lifts `inner` to optional values, with `None` sorting last.
pub fn nulls_last<C>(inner: C) -> NullsLast<C> {
    NullsLast { inner }
}

// ============================================================================
// Type erasure
// ============================================================================

/// A reference-counted, type-erased comparator.
pub struct SharedComparator<T: ?Sized> {
    inner: Arc<dyn Comparator<T> + Send + Sync>,
}

impl<T: ?Sized> SharedComparator<T> {
    /// Wraps `comparator`.
    pub fn new<C>(comparator: C) -> Self
    where
        C: Comparator<T> + Send + Sync + 'static,
    {
        SharedComparator {
            inner: Arc::new(comparator),
        }
    }
}

impl<T: ?Sized> Comparator<T> for SharedComparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner.compare(a, b)
    }
}

impl<T: ?Sized> Clone for SharedComparator<T> {
    fn clone(&self) -> Self {
        SharedComparator {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> fmt::Debug for SharedComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedComparator").finish_non_exhaustive()
    }
}
