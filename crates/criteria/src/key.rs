//! Key extraction: orderings and predicates derived from a field of a value.
//!
//! A key extractor is a function from `&T` to some key. Owned keys (`Fn(&T) -> K`)
//! suit cheap `Copy` fields; borrowed keys (`Fn(&T) -> &K`) avoid cloning
//! strings and other heap data on every comparison.
//!
//! Keys used for ordering must implement [`Ord`]. A key type without a total
//! order, such as `f64`, is rejected at compile time; order it explicitly with
//! [`comparing_with`] and a comparator such as `f64::total_cmp`.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::comparator::Comparator;
use crate::predicate::Predicate;

// ============================================================================
// Key-derived comparators
// ============================================================================

/// Orders values by the natural order of an owned key. Built by [`comparing`].
pub struct Comparing<K, F> {
    key: F,
    _key: PhantomData<fn(&K)>,
}

impl<K, F> Comparing<K, F> {
    pub(crate) fn new(key: F) -> Self {
        Comparing {
            key,
            _key: PhantomData,
        }
    }
}

impl<T, K, F> Comparator<T> for Comparing<K, F>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

/// Returns a comparator ordering values by `key(value)`.
///
/// ```
/// use criteria::{comparing, Comparator};
///
/// let by_len = comparing(|s: &&str| s.len());
/// let mut words = vec!["ccc", "a", "bb"];
/// by_len.sort(&mut words);
/// assert_eq!(words, ["a", "bb", "ccc"]);
/// ```
pub fn comparing<T, K, F>(key: F) -> Comparing<K, F>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    Comparing::new(key)
}

/// Orders values by the natural order of a borrowed key. Built by [`comparing_ref`].
pub struct ComparingRef<K: ?Sized, F> {
    key: F,
    _key: PhantomData<fn(&K)>,
}

impl<K: ?Sized, F> ComparingRef<K, F> {
    pub(crate) fn new(key: F) -> Self {
        ComparingRef {
            key,
            _key: PhantomData,
        }
    }
}

impl<T, K, F> Comparator<T> for ComparingRef<K, F>
where
    T: ?Sized,
    K: Ord + ?Sized,
    F: for<'a> Fn(&'a T) -> &'a K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp((self.key)(b))
    }
}

/// Returns a comparator ordering values by a key borrowed from them.
pub fn comparing_ref<T, K, F>(key: F) -> ComparingRef<K, F>
where
    T: ?Sized,
    K: Ord + ?Sized,
    F: for<'a> Fn(&'a T) -> &'a K,
{
    ComparingRef::new(key)
}

/// Orders values by a key, using an explicit comparator for the keys.
/// Built by [`comparing_with`].
pub struct ComparingWith<K, F, C> {
    key: F,
    cmp: C,
    _key: PhantomData<fn(&K)>,
}

impl<T, K, F, C> Comparator<T> for ComparingWith<K, F, C>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.cmp.compare(&(self.key)(a), &(self.key)(b))
    }
}

/// Returns a comparator ordering values by `cmp(key(a), key(b))`.
///
/// ```
/// use std::cmp::Ordering;
/// use criteria::{comparing_with, Comparator};
///
/// struct Reading { celsius: f64 }
///
/// let by_temp = comparing_with(|r: &Reading| r.celsius, f64::total_cmp);
/// let cold = Reading { celsius: -4.5 };
/// let warm = Reading { celsius: 21.0 };
/// assert_eq!(by_temp.compare(&cold, &warm), Ordering::Less);
/// ```
pub fn comparing_with<T, K, F, C>(key: F, cmp: C) -> ComparingWith<K, F, C>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    ComparingWith {
        key,
        cmp,
        _key: PhantomData,
    }
}

// ============================================================================
// Key-derived predicates
// ============================================================================

/// Tests a predicate against an owned key. Built by [`by_key`].
pub struct ByKey<K, F, P> {
    key: F,
    predicate: P,
    _key: PhantomData<fn(&K)>,
}

impl<T, K, F, P> Predicate<T> for ByKey<K, F, P>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    P: Predicate<K>,
{
    fn test(&self, value: &T) -> bool {
        self.predicate.test(&(self.key)(value))
    }
}

/// Returns a predicate testing `predicate` against `key(value)`.
///
/// ```
/// use criteria::{at_least, by_key, Predicate};
///
/// struct Person { age: u32 }
///
/// let adult = by_key(|p: &Person| p.age, at_least(18u32));
/// assert!(adult.test(&Person { age: 30 }));
/// assert!(!adult.test(&Person { age: 12 }));
/// ```
pub fn by_key<T, K, F, P>(key: F, predicate: P) -> ByKey<K, F, P>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    P: Predicate<K>,
{
    ByKey {
        key,
        predicate,
        _key: PhantomData,
    }
}

/// Tests a predicate against a borrowed key. Built by [`by_key_ref`].
pub struct ByKeyRef<K: ?Sized, F, P> {
    key: F,
    predicate: P,
    _key: PhantomData<fn(&K)>,
}

impl<T, K, F, P> Predicate<T> for ByKeyRef<K, F, P>
where
    T: ?Sized,
    K: ?Sized,
    F: for<'a> Fn(&'a T) -> &'a K,
    P: Predicate<K>,
{
    fn test(&self, value: &T) -> bool {
        self.predicate.test((self.key)(value))
    }
}

/// Returns a predicate testing `predicate` against a key borrowed from the value.
pub fn by_key_ref<T, K, F, P>(key: F, predicate: P) -> ByKeyRef<K, F, P>
where
    T: ?Sized,
    K: ?Sized,
    F: for<'a> Fn(&'a T) -> &'a K,
    P: Predicate<K>,
{
    ByKeyRef {
        key,
        predicate,
        _key: PhantomData,
    }
}

// The key extractors are closures more often than not, so these types get
// hand-written Clone and Debug impls that don't require K to implement them.

impl<K, F: Clone> Clone for Comparing<K, F> {
    fn clone(&self) -> Self {
        Comparing::new(self.key.clone())
    }
}

impl<K: ?Sized, F: Clone> Clone for ComparingRef<K, F> {
    fn clone(&self) -> Self {
        ComparingRef::new(self.key.clone())
    }
}

impl<K, F: Clone, C: Clone> Clone for ComparingWith<K, F, C> {
    fn clone(&self) -> Self {
        ComparingWith {
            key: self.key.clone(),
            cmp: self.cmp.clone(),
            _key: PhantomData,
        }
    }
}

impl<K, F: Clone, P: Clone> Clone for ByKey<K, F, P> {
    fn clone(&self) -> Self {
        ByKey {
            key: self.key.clone(),
            predicate: self.predicate.clone(),
            _key: PhantomData,
        }
    }
}

impl<K: ?Sized, F: Clone, P: Clone> Clone for ByKeyRef<K, F, P> {
    fn clone(&self) -> Self {
        ByKeyRef {
            key: self.key.clone(),
            predicate: self.predicate.clone(),
            _key: PhantomData,
        }
    }
}

impl<K, F> fmt::Debug for Comparing<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparing").finish_non_exhaustive()
    }
}

impl<K: ?Sized, F> fmt::Debug for ComparingRef<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparingRef").finish_non_exhaustive()
    }
}

impl<K, F, C: fmt::Debug> fmt::Debug for ComparingWith<K, F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparingWith")
            .field("cmp", &self.cmp)
            .finish_non_exhaustive()
    }
}

impl<K, F, P: fmt::Debug> fmt::Debug for ByKey<K, F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey")
            .field("predicate", &self.predicate)
            .finish_non_exhaustive()
    }
}

impl<K: ?Sized, F, P: fmt::Debug> fmt::Debug for ByKeyRef<K, F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKeyRef")
            .field("predicate", &self.predicate)
            .finish_non_exhaustive()
    }
}
