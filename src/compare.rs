//! Total-ordering comparators.
//!
//! A [`Comparator`] decides the relative order of two values without
//! requiring the values themselves to implement [`Ord`]. The ordered
//! operations of [`ConsList`] are parameterized over this trait.
//!
//! [`ConsList`]: crate::collections::cons_list::ConsList

use core::cmp::Ordering;

/// A total order over values of type `T`.
///
/// Any closure of the shape `Fn(&T, &T) -> Ordering` is a comparator, so
/// ad-hoc orders do not need a named type:
///
/// ```
/// use core::cmp::Ordering;
/// use ringlist::prelude::*;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"hi", &"there"), Ordering::Less);
/// ```
pub trait Comparator<T> {
    /// Compares `a` against `b`, returning their relative order.
    ///
    /// Implementations must define a total order: antisymmetric,
    /// transitive, and total.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The order already defined by a type's [`Ord`] implementation.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use ringlist::prelude::*;
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
/// assert_eq!(Natural.compare(&"b", &"a"), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the order of an inner comparator.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use ringlist::prelude::*;
///
/// assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
/// assert_eq!(Reversed(Natural).compare(&2, &2), Ordering::Equal);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C>(
    /// The comparator whose order is reversed.
    pub C,
);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_natural_matches_ord() {
        assert_eq!(Natural.compare(&3, &7), Ordering::Less);
        assert_eq!(Natural.compare(&7, &3), Ordering::Greater);
        assert_eq!(Natural.compare(&5, &5), Ordering::Equal);
    }

    #[test]
    fn test_reversed_inverts() {
        let cmp = Reversed(Natural);
        assert_eq!(cmp.compare(&3, &7), Ordering::Greater);
        assert_eq!(cmp.compare(&7, &3), Ordering::Less);
        assert_eq!(cmp.compare(&5, &5), Ordering::Equal);
    }

    #[test]
    fn test_closure_comparator() {
        let by_second = |a: &(i32, i32), b: &(i32, i32)| a.1.cmp(&b.1);
        assert_eq!(by_second.compare(&(0, 9), &(9, 0)), Ordering::Greater);

        // Reversing a closure comparator also works.
        let cmp = Reversed(by_second);
        assert_eq!(cmp.compare(&(0, 9), &(9, 0)), Ordering::Less);
    }
}
