//! An immutable, insertion-ordered singly linked sequence.
//!
//! `ConsList` is either empty or a value consed onto a rest. Lists share
//! structure: [`cons`] allocates exactly one cell and keeps the original
//! list as its tail, so "modifying" a list never touches existing cells.
//! The rebuilding operations (filter, map, sort) produce fresh lists and
//! leave their input intact.
//!
//! [`cons`]: ConsList::cons

use core::cmp::Ordering;
use core::fmt;
use std::rc::Rc;

use crate::compare::Comparator;

/// Creates a `ConsList` containing the arguments, front to back.
///
/// # Examples
///
/// ```
/// use ringlist::prelude::*;
///
/// let list = cons![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.first(), Some(&1));
/// ```
#[macro_export]
macro_rules! cons {
    () => {
        $crate::collections::cons_list::ConsList::new()
    };
    ($($elem:expr)=>*) => {{
        [$($elem),*]
            .into_iter()
            .collect::<$crate::collections::cons_list::ConsList<_>>()
    }};
}

/// An immutable singly linked sequence with structural sharing.
///
/// # Examples
///
/// ```
/// use ringlist::prelude::*;
///
/// let rest = cons![2 => 3];
/// let list = rest.cons(1);
///
/// assert!(list.iter().eq([&1, &2, &3]));
/// // `rest` is untouched.
/// assert!(rest.iter().eq([&2, &3]));
/// ```
pub struct ConsList<T> {
    head: Link<T>,
}

enum Link<T> {
    Empty,
    Cons(Rc<Node<T>>),
}

struct Node<T> {
    first: T,
    rest: Link<T>,
}

impl<T> ConsList<T> {
    /// Creates a new, empty `ConsList<T>`.
    #[inline]
    pub const fn new() -> Self {
        Self { head: Link::Empty }
    }

    /// Returns a new list with `first` prepended onto this one.
    ///
    /// The receiver is shared as the new list's rest, not copied.
    pub fn cons(&self, first: T) -> Self {
        Self {
            head: Link::Cons(Rc::new(Node {
                first,
                rest: self.head.clone(),
            })),
        }
    }

    /// Returns `true` if the list contains no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.head, Link::Empty)
    }

    /// Returns the number of values in the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The count is produced by walking the cells.
    pub fn len(&self) -> usize {
        self.head.len()
    }

    /// Returns a reference to the first value, or [`None`] if the list is
    /// empty.
    pub fn first(&self) -> Option<&T> {
        match &self.head {
            Link::Empty => None,
            Link::Cons(node) => Some(&node.first),
        }
    }

    /// Returns the list after the first value, or [`None`] if the list is
    /// empty. The returned list shares cells with this one.
    pub fn rest(&self) -> Option<Self> {
        match &self.head {
            Link::Empty => None,
            Link::Cons(node) => Some(Self {
                head: node.rest.clone(),
            }),
        }
    }

    /// Returns an iterator over the values, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let list = cons![1 => 2 => 3];
    /// assert!(list.iter().eq([&1, &2, &3]));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { link: &self.head }
    }

    /// Folds the list from the right: the last value is combined with
    /// `init` first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let list = cons![1 => 2 => 3];
    /// // 1 - (2 - (3 - 0))
    /// assert_eq!(list.fold_right(0, |v, acc| v - acc), 2);
    /// ```
    pub fn fold_right<U, F>(&self, init: U, f: F) -> U
    where
        F: Fn(&T, U) -> U,
    {
        self.head.fold_right(init, &f)
    }

    /// Returns a new list of `f` applied to every value, order preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let list = cons![1 => 2 => 3];
    /// let doubled = list.map(|v| v * 2);
    /// assert!(doubled.iter().eq([&2, &4, &6]));
    /// ```
    pub fn map<U, F>(&self, f: F) -> ConsList<U>
    where
        F: Fn(&T) -> U,
    {
        self.fold_right(ConsList::new(), |value, acc| acc.cons(f(value)))
    }
}

impl<T: Clone> ConsList<T> {
    /// Returns a new list keeping only the values the predicate holds
    /// for, in their original order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let list = cons![1 => 2 => 3 => 4];
    /// let even = list.filter(|v| v % 2 == 0);
    /// assert!(even.iter().eq([&2, &4]));
    /// ```
    pub fn filter<P>(&self, pred: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.fold_right(ConsList::new(), |value, acc| {
            if pred(value) {
                acc.cons(value.clone())
            } else {
                acc
            }
        })
    }

    /// Returns a new list with `value` inserted before the first existing
    /// value that is not less than it. On a list already sorted under
    /// `cmp` this preserves sortedness, and equal values keep their
    /// relative order.
    pub fn insert_ordered<C>(&self, cmp: &C, value: T) -> Self
    where
        C: Comparator<T>,
    {
        match &self.head {
            Link::Empty => ConsList::new().cons(value),
            Link::Cons(node) => {
                if cmp.compare(&node.first, &value) == Ordering::Less {
                    let rest = Self {
                        head: node.rest.clone(),
                    };
                    rest.insert_ordered(cmp, value).cons(node.first.clone())
                } else {
                    self.cons(value)
                }
            }
        }
    }

    /// Returns a new list of the same values sorted under `cmp`.
    ///
    /// The sort is a stable insertion sort: values comparing equal keep
    /// their insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let list = cons![3 => 1 => 2];
    /// assert!(list.sorted_by(&Natural).iter().eq([&1, &2, &3]));
    /// assert!(list.sorted_by(&Reversed(Natural)).iter().eq([&3, &2, &1]));
    /// ```
    pub fn sorted_by<C>(&self, cmp: &C) -> Self
    where
        C: Comparator<T>,
    {
        match &self.head {
            Link::Empty => Self::new(),
            Link::Cons(node) => {
                let rest = Self {
                    head: node.rest.clone(),
                };
                rest.sorted_by(cmp).insert_ordered(cmp, node.first.clone())
            }
        }
    }
}

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        match self {
            Link::Empty => Link::Empty,
            Link::Cons(node) => Link::Cons(Rc::clone(node)),
        }
    }
}

impl<T> Link<T> {
    fn len(&self) -> usize {
        match self {
            Link::Empty => 0,
            Link::Cons(node) => 1 + node.rest.len(),
        }
    }

    fn fold_right<U, F>(&self, init: U, f: &F) -> U
    where
        F: Fn(&T, U) -> U,
    {
        match self {
            Link::Empty => init,
            Link::Cons(node) => f(&node.first, node.rest.fold_right(init, f)),
        }
    }
}

impl<T> Clone for ConsList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for ConsList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ConsList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        while let Some(value) = values.pop() {
            list = list.cons(value);
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for ConsList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ConsList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ConsList<T> {}

/// An iterator that borrows a `ConsList<T>` immutably.
#[derive(Debug)]
pub struct Iter<'a, T> {
    link: &'a Link<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.link {
            Link::Empty => None,
            Link::Cons(node) => {
                self.link = &node.rest;
                Some(&node.first)
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Link::Empty => f.write_str("Empty"),
            Link::Cons(node) => f.debug_tuple("Cons").field(&node.first).finish(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compare::{Natural, Reversed};

    #[test]
    fn test_cons_order_and_len() {
        let list = ConsList::new().cons(3).cons(2).cons(1);
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
        assert!(list.iter().eq([&1, &2, &3]));

        assert_eq!(list.first(), Some(&1));
        assert!(list.rest().unwrap().iter().eq([&2, &3]));

        let empty: ConsList<i32> = ConsList::new();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.first(), None);
        assert!(empty.rest().is_none());
    }

    #[test]
    fn test_structural_sharing() {
        let rest = cons![2 => 3];
        let list = rest.cons(1);

        // The new cell's rest is the same allocation, not a copy.
        match (&list.rest().unwrap().head, &rest.head) {
            (Link::Cons(a), Link::Cons(b)) => assert!(Rc::ptr_eq(a, b)),
            _ => panic!("both lists should be non-empty"),
        }
    }

    #[test]
    fn test_filter() {
        let list = cons![1 => 2 => 3 => 4 => 5];
        assert!(list.filter(|v| v % 2 == 1).iter().eq([&1, &3, &5]));
        assert!(list.filter(|_| false).is_empty());
        // The original is untouched.
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_map() {
        let list = cons![1 => 2 => 3];
        let strings = list.map(|v| v.to_string());
        assert!(strings.iter().map(String::as_str).eq(["1", "2", "3"]));

        let empty: ConsList<i32> = ConsList::new();
        assert!(empty.map(|v| v + 1).is_empty());
    }

    #[test]
    fn test_fold_right() {
        let list = cons![1 => 2 => 3];
        // Right fold of a non-commutative operation pins the direction.
        assert_eq!(list.fold_right(0, |v, acc| v - acc), 2);
        assert_eq!(list.fold_right(0, |_, acc: i32| acc + 1), 3);

        let empty: ConsList<i32> = ConsList::new();
        assert_eq!(empty.fold_right(42, |v, acc| v + acc), 42);
    }

    #[test]
    fn test_insert_ordered() {
        let list = cons![1 => 3 => 5];
        assert!(list.insert_ordered(&Natural, 4).iter().eq([&1, &3, &4, &5]));
        assert!(list.insert_ordered(&Natural, 0).iter().eq([&0, &1, &3, &5]));
        assert!(list.insert_ordered(&Natural, 9).iter().eq([&1, &3, &5, &9]));

        let empty: ConsList<i32> = ConsList::new();
        assert!(empty.insert_ordered(&Natural, 7).iter().eq([&7]));
    }

    #[test]
    fn test_sorted_by() {
        let list = cons![3 => 1 => 4 => 1 => 5 => 9 => 2 => 6];
        assert!(list
            .sorted_by(&Natural)
            .iter()
            .eq([&1, &1, &2, &3, &4, &5, &6, &9]));
        assert!(list
            .sorted_by(&Reversed(Natural))
            .iter()
            .eq([&9, &6, &5, &4, &3, &2, &1, &1]));

        let empty: ConsList<i32> = ConsList::new();
        assert!(empty.sorted_by(&Natural).is_empty());
    }

    #[test]
    fn test_sort_is_stable() {
        // Sort pairs by key only; payloads record insertion order.
        let list = cons![(2, 'a') => (1, 'b') => (2, 'c') => (1, 'd')];
        let by_key = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);

        let sorted: Vec<(i32, char)> = list.sorted_by(&by_key).iter().copied().collect();
        assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_traits_and_macro() {
        let list = cons![1 => 2 => 3];
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
        assert_eq!(list, list.clone());
        assert_ne!(list, cons![1 => 2]);

        let from_iter: ConsList<i32> = (1..=3).collect();
        assert_eq!(list, from_iter);

        let empty: ConsList<i32> = cons![];
        assert!(empty.is_empty());
        assert_eq!(empty, ConsList::default());
    }
}
