//! Boolean tests over a value type and the combinators that compose them.
//!
//! A [`Predicate`] has a single required method, [`Predicate::test`]. Every
//! other operation builds a new predicate out of existing ones:
//!
//! | Combinator | Result | Evaluates the right side |
//! |------------|--------|--------------------------|
//! | [`Predicate::and`] | `p(v) && q(v)` | only when `p(v)` is true |
//! | [`Predicate::or`] | `p(v) \|\| q(v)` | only when `p(v)` is false |
//! | [`Predicate::negate`] | `!p(v)` | n/a |
//!
//! Chains group left to right in the order the combinators are called, so
//! `p.and(q).or(r)` is `(p AND q) OR r`.
//!
//! Any `Fn(&T) -> bool` closure or function is a predicate.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A boolean test over values of type `T`.
///
/// # Example
///
/// ```
/// use criteria::Predicate;
///
/// let short = |s: &str| s.len() < 20;
/// let long = |s: &str| s.len() > 5;
///
/// let both = short.and(long);
/// assert!(!both.test("Yes"));
/// assert!(both.test("Good Morning"));
/// assert!(!both.test("Good Morning Gentlemen"));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Evaluates this predicate against `value`.
    fn test(&self, value: &T) -> bool;

    /// Returns a predicate that holds when both `self` and `other` hold.
    ///
    /// `other` is only evaluated when `self` returns `true`.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        And {
            left: self,
            right: other,
        }
    }

    /// Returns a predicate that holds when either `self` or `other` holds.
    ///
    /// `other` is only evaluated when `self` returns `false`.
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        Or {
            left: self,
            right: other,
        }
    }

    /// Returns the logical negation of this predicate.
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not { inner: self }
    }

    /// Erases the concrete type behind a cheaply clonable [`SharedPredicate`].
    fn shared(self) -> SharedPredicate<T>
    where
        Self: Sized + Send + Sync + 'static,
    {
        SharedPredicate::new(self)
    }
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

// ============================================================================
// Logical composites
// ============================================================================

/// Conjunction of two predicates. Built by [`Predicate::and`].
#[derive(Debug, Clone, Copy)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<T: ?Sized, L: Predicate<T>, R: Predicate<T>> Predicate<T> for And<L, R> {
    fn test(&self, value: &T) -> bool {
        self.left.test(value) && self.right.test(value)
    }
}

/// Disjunction of two predicates. Built by [`Predicate::or`].
#[derive(Debug, Clone, Copy)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<T: ?Sized, L: Predicate<T>, R: Predicate<T>> Predicate<T> for Or<L, R> {
    fn test(&self, value: &T) -> bool {
        self.left.test(value) || self.right.test(value)
    }
}

/// Negation of a predicate. Built by [`Predicate::negate`] or [`not`].
#[derive(Debug, Clone, Copy)]
pub struct Not<P> {
    inner: P,
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    fn test(&self, value: &T) -> bool {
        !self.inner.test(value)
    }
}

/// Negates `predicate`. Equivalent to [`Predicate::negate`].
pub fn not<P>(predicate: P) -> Not<P> {
    Not { inner: predicate }
}

// ============================================================================
// Factories
// ============================================================================

/// Predicate that returns a fixed answer. See [`always`] and [`never`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant(bool);

impl<T: ?Sized> Predicate<T> for Constant {
    fn test(&self, _value: &T) -> bool {
        self.0
    }
}

/// A predicate that matches every value.
pub fn always() -> Constant {
    Constant(true)
}

/// A predicate that matches no value.
pub fn never() -> Constant {
    Constant(false)
}

/// Value-equality test. Built by [`is_equal_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsEqualTo<U> {
    expected: U,
}

impl<T, U> Predicate<T> for IsEqualTo<U>
where
    T: ?Sized + PartialEq<U>,
{
    fn test(&self, value: &T) -> bool {
        PartialEq::eq(value, &self.expected)
    }
}

/// Returns a predicate testing `value == expected`.
///
/// Equality is value equality through [`PartialEq`], so any `T` comparable
/// with `U` can be tested, e.g. a `String` against a `&str`.
///
/// ```
/// use criteria::{is_equal_to, Predicate};
///
/// let yes = is_equal_to("Yes");
/// assert!(yes.test(&String::from("Yes")));
/// assert!(!yes.test(&String::from("No")));
/// ```
pub fn is_equal_to<U>(expected: U) -> IsEqualTo<U> {
    IsEqualTo { expected }
}

/// Returns a predicate testing `value != unexpected`.
pub fn not_equal_to<U>(unexpected: U) -> Not<IsEqualTo<U>> {
    not(is_equal_to(unexpected))
}

/// Relational operator used by [`Bounded`] predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundOp {
    /// Strictly greater than the bound.
    Gt,
    /// Greater than or equal to the bound.
    Gte,
    /// Strictly less than the bound.
    Lt,
    /// Less than or equal to the bound.
    Lte,
}

impl BoundOp {
    /// Evaluates this operator given the ordering of a value against its bound.
    pub fn eval(self, ordering: Ordering) -> bool {
        match self {
            BoundOp::Gt => ordering == Ordering::Greater,
            BoundOp::Gte => ordering != Ordering::Less,
            BoundOp::Lt => ordering == Ordering::Less,
            BoundOp::Lte => ordering != Ordering::Greater,
        }
    }

    /// Returns the symbol for this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            BoundOp::Gt => ">",
            BoundOp::Gte => ">=",
            BoundOp::Lt => "<",
            BoundOp::Lte => "<=",
        }
    }
}

impl fmt::Display for BoundOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison of a value against a fixed bound.
///
/// Values that are not comparable with the bound (NaN, for instance) never
/// match, whatever the operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounded<U> {
    bound: U,
    op: BoundOp,
}

impl<U> Bounded<U> {
    /// Creates a bounded predicate from an operator and a bound.
    pub fn new(op: BoundOp, bound: U) -> Self {
        Bounded { bound, op }
    }

    /// Returns the operator.
    pub fn op(&self) -> BoundOp {
        self.op
    }

    /// Returns the bound.
    pub fn bound(&self) -> &U {
        &self.bound
    }
}

impl<T, U> Predicate<T> for Bounded<U>
where
    T: ?Sized + PartialOrd<U>,
{
    fn test(&self, value: &T) -> bool {
        PartialOrd::partial_cmp(value, &self.bound).is_some_and(|ordering| self.op.eval(ordering))
    }
}

/// Matches values strictly greater than `bound`.
pub fn greater_than<U>(bound: U) -> Bounded<U> {
    Bounded::new(BoundOp::Gt, bound)
}

/// Matches values greater than or equal to `bound`.
pub fn at_least<U>(bound: U) -> Bounded<U> {
    Bounded::new(BoundOp::Gte, bound)
}

/// Matches values strictly less than `bound`.
pub fn less_than<U>(bound: U) -> Bounded<U> {
    Bounded::new(BoundOp::Lt, bound)
}

/// Matches values less than or equal to `bound`.
pub fn at_most<U>(bound: U) -> Bounded<U> {
    Bounded::new(BoundOp::Lte, bound)
}

/// Set membership test. Built by [`one_of`].
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf<U> {
    values: Vec<U>,
}

impl<T, U> Predicate<T> for OneOf<U>
where
    T: ?Sized + PartialEq<U>,
{
    fn test(&self, value: &T) -> bool {
        self.values
            .iter()
            .any(|candidate| PartialEq::eq(value, candidate))
    }
}

/// Matches values equal to any of `values`. An empty set matches nothing.
pub fn one_of<U, I>(values: I) -> OneOf<U>
where
    I: IntoIterator<Item = U>,
{
    OneOf {
        values: values.into_iter().collect(),
    }
}

// ============================================================================
// Groups
// ============================================================================

/// Conjunction over a list of predicates. Built by [`all_of`].
#[derive(Debug, Clone)]
pub struct AllOf<P> {
    predicates: Vec<P>,
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AllOf<P> {
    fn test(&self, value: &T) -> bool {
        self.predicates.iter().all(|p| p.test(value))
    }
}

/// Matches when every predicate matches, checking them in order and stopping
/// at the first failure. An empty group is trivially satisfied.
pub fn all_of<P, I>(predicates: I) -> AllOf<P>
where
    I: IntoIterator<Item = P>,
{
    AllOf {
        predicates: predicates.into_iter().collect(),
    }
}

/// Disjunction over a list of predicates. Built by [`any_of`].
#[derive(Debug, Clone)]
pub struct AnyOf<P> {
    predicates: Vec<P>,
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AnyOf<P> {
    fn test(&self, value: &T) -> bool {
        self.predicates.iter().any(|p| p.test(value))
    }
}

/// Matches when at least one predicate matches, checking them in order and
/// stopping at the first success. An empty group matches nothing.
pub fn any_of<P, I>(predicates: I) -> AnyOf<P>
where
    I: IntoIterator<Item = P>,
{
    AnyOf {
        predicates: predicates.into_iter().collect(),
    }
}

// ============================================================================
// Type erasure
// ============================================================================

/// A reference-counted, type-erased predicate.
///
/// Useful for storing predicates of different concrete types together, or
/// for handing the same predicate to several threads.
pub struct SharedPredicate<T: ?Sized> {
    inner: Arc<dyn Predicate<T> + Send + Sync>,
}

impl<T: ?Sized> SharedPredicate<T> {
    /// Wraps `predicate`.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<T> + Send + Sync + 'static,
    {
        SharedPredicate {
            inner: Arc::new(predicate),
        }
    }
}

impl<T: ?Sized> Predicate<T> for SharedPredicate<T> {
    fn test(&self, value: &T) -> bool {
        self.inner.test(value)
    }
}

impl<T: ?Sized> Clone for SharedPredicate<T> {
    fn clone(&self) -> Self {
        SharedPredicate {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> fmt::Debug for SharedPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedPredicate").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn even(n: &i64) -> bool {
        n % 2 == 0
    }

    fn positive(n: &i64) -> bool {
        *n > 0
    }

    #[test]
    fn closure_is_predicate() {
        let short = |s: &str| s.len() < 20;
        assert!(short.test("Hello"));
        assert!(!short.test("a sentence that is far too long"));
    }

    #[test]
    fn fn_item_is_predicate() {
        assert!(even.test(&4));
        assert!(!even.test(&3));
    }

    #[test]
    fn and_or_negate() {
        let both = even.and(positive);
        assert!(both.test(&2));
        assert!(!both.test(&-2));
        assert!(!both.test(&3));

        let either = even.or(positive);
        assert!(either.test(&-2));
        assert!(either.test(&3));
        assert!(!either.test(&-3));

        let odd = even.negate();
        assert!(odd.test(&3));
        assert!(!odd.test(&4));
        assert!(not(even).test(&5));
    }

    #[test]
    fn and_skips_right_side_when_left_fails() {
        let calls = Cell::new(0usize);
        let counted = |_: &i64| {
            calls.set(calls.get() + 1);
            true
        };

        let p = positive.and(counted);
        assert!(!p.test(&-1));
        assert_eq!(calls.get(), 0);

        assert!(p.test(&1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn or_skips_right_side_when_left_holds() {
        let calls = Cell::new(0usize);
        let counted = |_: &i64| {
            calls.set(calls.get() + 1);
            false
        };

        let p = positive.or(counted);
        assert!(p.test(&1));
        assert_eq!(calls.get(), 0);

        assert!(!p.test(&-1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn chains_group_left_to_right() {
        let yes = |_: &i64| true;
        let no = |_: &i64| false;

        // (false AND x) OR true == true, whereas false AND (x OR true) == false
        assert!(no.and(yes).or(yes).test(&0));
        assert!(!no.and(yes.or(yes)).test(&0));
    }

    #[test]
    fn is_equal_to_uses_value_equality() {
        let five = is_equal_to(5i32);
        let (a, b): (i32, i32) = (5, 6);
        assert!(five.test(&a));
        assert!(!five.test(&b));

        let yes = is_equal_to("Yes");
        assert!(yes.test(&String::from("Yes")));
        assert!(!yes.test(&String::from("No")));

        let not_yes = not_equal_to("Yes");
        assert!(not_yes.test(&String::from("No")));
    }

    #[test]
    fn bounded_predicates() {
        let values: [i64; 3] = [1, 5, 9];
        assert_eq!(
            values.iter().filter(|v| greater_than(5i64).test(*v)).count(),
            1
        );
        assert_eq!(values.iter().filter(|v| at_least(5i64).test(*v)).count(), 2);
        assert_eq!(values.iter().filter(|v| less_than(5i64).test(*v)).count(), 1);
        assert_eq!(values.iter().filter(|v| at_most(5i64).test(*v)).count(), 2);
    }

    #[test]
    fn bounded_never_matches_nan() {
        let nan = f64::NAN;
        assert!(!greater_than(0.0f64).test(&nan));
        assert!(!at_most(0.0f64).test(&nan));
        assert!(not(greater_than(0.0f64)).test(&nan));

        let p = Predicate::<f64>::and(not(greater_than(0.0f64)), at_most(0.0f64));
        assert!(!p.test(&nan));
    }

    #[test]
    fn bound_op_eval_and_display() {
        assert!(BoundOp::Gte.eval(Ordering::Equal));
        assert!(!BoundOp::Gt.eval(Ordering::Equal));
        assert!(BoundOp::Lte.eval(Ordering::Less));
        assert!(!BoundOp::Lt.eval(Ordering::Greater));
        assert_eq!(BoundOp::Gte.to_string(), ">=");

        let p = at_most(3u8);
        assert_eq!(p.op(), BoundOp::Lte);
        assert_eq!(*p.bound(), 3);
    }

    #[test]
    fn one_of_membership() {
        let primary = one_of(["red", "green", "blue"]);
        assert!(primary.test(&String::from("green")));
        assert!(!primary.test(&String::from("purple")));

        let empty = one_of(Vec::<u32>::new());
        assert!(!empty.test(&1u32));
    }

    #[test]
    fn groups() {
        let preds: Vec<fn(&i64) -> bool> = vec![even, positive];
        let all = all_of(preds.clone());
        let any = any_of(preds);

        assert!(all.test(&4));
        assert!(!all.test(&3));
        assert!(any.test(&3));
        assert!(!any.test(&-3));
    }

    #[test]
    fn constants() {
        assert!(always().test("anything"));
        assert!(!never().test(&42u8));
    }

    #[test]
    fn empty_groups() {
        let all = all_of(Vec::<fn(&i64) -> bool>::new());
        let any = any_of(Vec::<fn(&i64) -> bool>::new());
        assert!(all.test(&0));
        assert!(!any.test(&0));
    }

    #[test]
    fn shared_predicates_mix_types() {
        let preds: Vec<SharedPredicate<i64>> = vec![
            positive.shared(),
            even.and(positive).shared(),
            at_least(10i64).shared(),
        ];

        let hits: Vec<bool> = preds.iter().map(|p| p.test(&12)).collect();
        assert_eq!(hits, vec![true, true, true]);

        let copy = preds[2].clone();
        assert!(!copy.test(&4));
    }

    #[test]
    fn shared_predicate_crosses_threads() {
        let p = even.and(positive).shared();
        let handle = {
            let p = p.clone();
            std::thread::spawn(move || p.test(&8))
        };
        assert!(handle.join().unwrap());
        assert!(!p.test(&7));
    }

    #[test]
    #[should_panic(expected = "caller failure")]
    fn caller_panics_propagate() {
        let failing = |_: &i64| -> bool { panic!("caller failure") };
        positive.and(failing).test(&1);
    }
}
