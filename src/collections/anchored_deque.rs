//! A double-ended queue built on an anchored circular chain.
//!
//! The `AnchoredDeque` allows pushing, popping, and accessing elements at
//! either end in *constant* time, addresses positions with signed offsets
//! from both ends, and supports removing an arbitrary element through a
//! [`Handle`] obtained from a prior search.
//!
//! Internally the chain is circular and passes through a single non-data
//! *anchor* node, so head and tail operations never special-case the empty
//! deque: the anchor is simultaneously "one past the tail" and "one before
//! the head". Nodes live in an arena of generation-counted slots and links
//! are slot indices, so splicing an element in or out is two index
//! rewrites and a stale handle can never reach a recycled slot.

use core::fmt;
use core::mem;

use crate::error::Error;

/// Creates an `AnchoredDeque` containing the arguments.
///
/// # Examples
///
/// ```
/// use ringlist::prelude::*;
///
/// let mut deque = deque![1 => 2 => 3];
/// assert_eq!(deque.len(), 3);
/// assert!(deque.iter().eq([&1, &2, &3]));
///
/// assert_eq!(deque.pop_back(), Ok(3));
/// assert_eq!(deque.pop_back(), Ok(2));
/// assert_eq!(deque.pop_back(), Ok(1));
/// ```
///
/// ```
/// use ringlist::prelude::*;
///
/// let deque = deque![7; 4];
/// assert_eq!(deque.len(), 4);
/// assert!(deque.iter().eq([&7, &7, &7, &7]));
/// ```
#[macro_export]
macro_rules! deque {
    () => {
        $crate::collections::anchored_deque::AnchoredDeque::new()
    };
    ($($elem:expr)=>*) => {{
        let mut deque = $crate::collections::anchored_deque::AnchoredDeque::new();
        $(deque.push_back($elem);)*
        deque
    }};
    ($elem:expr; $n:expr) => {{
        // Ensure the expression is only evaluated once.
        let count = $n;

        let mut deque = $crate::collections::anchored_deque::AnchoredDeque::new();
        deque.extend(::core::iter::repeat($elem).take(count));
        deque
    }};
}

/// The anchor's slot. It is allocated first and never freed.
const ANCHOR: usize = 0;

/// A double-ended queue on an anchored circular chain.
///
/// Non-negative offsets address elements from the head (`0` is the first
/// element), negative offsets address them from the tail (`-1` is the
/// last). For a deque of `n` elements the valid offsets are `-n ..= n - 1`.
///
/// # Examples
///
/// ```
/// use ringlist::prelude::*;
///
/// let mut deque = AnchoredDeque::new();
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_front(0);
///
/// assert_eq!(deque.get(0), Ok(&0));
/// assert_eq!(deque.get(1), Ok(&1));
/// assert_eq!(deque.get(-1), Ok(&2));
/// ```
pub struct AnchoredDeque<T> {
    /// Arena of chain nodes; slot `ANCHOR` always holds the anchor.
    slots: Vec<Slot<T>>,
    /// Vacated slots available for reuse.
    free: Vec<usize>,
}

struct Slot<T> {
    /// Index of the next slot in chain order.
    next: usize,
    /// Index of the previous slot in chain order.
    prev: usize,
    /// Bumped every time the slot is vacated, so handles to a former
    /// occupant never resolve after the slot is reused.
    generation: u32,
    node: Node<T>,
}

/// The two chain node variants, plus the off-chain free-list state.
///
/// Every traversal is written once against this split: reaching the anchor
/// is the single base case (empty, exhausted, or not found), an element is
/// the single recursive case. `Vacant` slots are never reachable through
/// chain links.
enum Node<T> {
    Anchor,
    Element(T),
    Vacant,
}

/// An opaque reference to one element of an [`AnchoredDeque`], obtained
/// from [`AnchoredDeque::find`].
///
/// A handle stays pinned to its element as the deque around it changes.
/// Once the element is removed by any path the handle goes stale:
/// dereferencing it yields [`None`] and removing through it is a harmless
/// no-op, even if the underlying storage has been reused for a new
/// element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    slot: usize,
    generation: u32,
}

impl<T> AnchoredDeque<T> {
    /// Constructs a new, empty `AnchoredDeque<T>`.
    ///
    /// Only the anchor is allocated up front; it is its own neighbor in
    /// both directions until elements arrive.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let deque: AnchoredDeque<i32> = AnchoredDeque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                next: ANCHOR,
                prev: ANCHOR,
                generation: 0,
                node: Node::Anchor,
            }],
            free: Vec::new(),
        }
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The count is produced by walking the chain
    /// forward from the anchor until the anchor is reached again.
    pub fn len(&self) -> usize {
        self.size_from(self.slots[ANCHOR].next)
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots[ANCHOR].next == ANCHOR
    }

    /// Prepends an element to the front of the deque.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The new element is linked directly after the
    /// anchor, regardless of the deque's length.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let mut deque = AnchoredDeque::new();
    /// deque.push_front(3);
    /// deque.push_front(4);
    /// assert_eq!(deque.pop_front(), Ok(4));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let head = self.slots[ANCHOR].next;
        self.splice(value, ANCHOR, head);
    }

    /// Appends an element to the back of the deque.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The new element is linked directly before the
    /// anchor, regardless of the deque's length.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let mut deque = AnchoredDeque::new();
    /// deque.push_back(3);
    /// deque.push_back(4);
    /// assert_eq!(deque.pop_front(), Ok(3));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let tail = self.slots[ANCHOR].prev;
        self.splice(value, tail, ANCHOR);
    }

    /// Removes the first element from the deque and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let mut deque = deque![5 => 6];
    /// assert_eq!(deque.pop_front(), Ok(5));
    /// assert_eq!(deque.pop_front(), Ok(6));
    /// assert_eq!(deque.pop_front(), Err(Error::OutOfRange));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, Error> {
        self.remove_at(0)
    }

    /// Removes the last element from the deque and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let mut deque = deque![5 => 6];
    /// assert_eq!(deque.pop_back(), Ok(6));
    /// assert_eq!(deque.pop_back(), Ok(5));
    /// assert_eq!(deque.pop_back(), Err(Error::OutOfRange));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, Error> {
        self.remove_at(-1)
    }

    /// Removes the element at the given signed offset and returns it.
    ///
    /// Non-negative offsets count forward from the head, negative offsets
    /// count backward from the tail (`-1` is the last element).
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The chain is traversed in the direction the
    /// offset's sign selects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the offset runs past the live
    /// elements, including any offset against an empty deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let mut deque = deque![0 => 1 => 2];
    /// assert_eq!(deque.remove_at(1), Ok(1));
    /// assert!(deque.iter().eq([&0, &2]));
    ///
    /// assert_eq!(deque.remove_at(-2), Ok(0));
    /// assert_eq!(deque.remove_at(5), Err(Error::OutOfRange));
    /// ```
    pub fn remove_at(&mut self, offset: isize) -> Result<T, Error> {
        let (start, offset) = self.entry(offset);
        self.remove_from(start, offset)
    }

    /// Returns a reference to the element at the given signed offset.
    ///
    /// Non-negative offsets count forward from the head, negative offsets
    /// count backward from the tail (`-1` is the last element).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the offset runs past the live
    /// elements, including any offset against an empty deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let deque = deque![0 => 1 => 2];
    /// assert_eq!(deque.get(0), Ok(&0));
    /// assert_eq!(deque.get(-1), Ok(&2));
    /// assert_eq!(deque.get(-3), Ok(&0));
    /// assert_eq!(deque.get(3), Err(Error::OutOfRange));
    /// ```
    pub fn get(&self, offset: isize) -> Result<&T, Error> {
        let (start, offset) = self.entry(offset);
        self.value_from(start, offset)
    }

    /// Returns a reference to the first element, or [`None`] if the deque
    /// is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Returns a reference to the last element, or [`None`] if the deque
    /// is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(-1).ok()
    }

    /// Returns a handle to the first element, in forward order, for which
    /// the predicate holds, or [`None`] if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let deque = deque!["one" => "two" => "six"];
    ///
    /// let handle = deque.find(|word| word.len() == 3).unwrap();
    /// assert_eq!(deque.lookup(handle), Some(&"one"));
    ///
    /// assert!(deque.find(|word| word.len() == 5).is_none());
    /// ```
    pub fn find<P>(&self, mut pred: P) -> Option<Handle>
    where
        P: FnMut(&T) -> bool,
    {
        let at = self.find_from(self.slots[ANCHOR].next, &mut pred);
        if at == ANCHOR {
            None
        } else {
            Some(Handle {
                slot: at,
                generation: self.slots[at].generation,
            })
        }
    }

    /// Returns a reference to the element a handle refers to, or [`None`]
    /// if the handle is stale.
    pub fn lookup(&self, handle: Handle) -> Option<&T> {
        let at = self.live(handle)?;
        match &self.slots[at].node {
            Node::Element(value) => Some(value),
            _ => unreachable!("live handles always resolve to elements"),
        }
    }

    /// Removes the element a handle refers to, wherever it currently sits
    /// in the deque, and returns its value.
    ///
    /// Removing through a stale handle, including a handle whose element
    /// was already removed by any path, is a harmless no-op returning
    /// [`None`]. It is never an error, and repeating it changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let mut deque = deque![1 => 2 => 3];
    ///
    /// let handle = deque.find(|v| *v == 2).unwrap();
    /// assert_eq!(deque.remove_handle(handle), Some(2));
    /// assert_eq!(deque.len(), 2);
    ///
    /// // The element is gone; the same handle is now inert.
    /// assert_eq!(deque.remove_handle(handle), None);
    /// assert_eq!(deque.len(), 2);
    /// ```
    pub fn remove_handle(&mut self, handle: Handle) -> Option<T> {
        let at = self.live(handle)?;
        Some(self.unlink(at))
    }

    /// Inserts an element directly before the element a handle refers to,
    /// returning a handle to the new element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLink`] if the handle is stale: an element
    /// can only ever be constructed between two live neighbors.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let mut deque = deque![1 => 3];
    /// let handle = deque.find(|v| *v == 3).unwrap();
    ///
    /// deque.insert_before(handle, 2).unwrap();
    /// assert!(deque.iter().eq([&1, &2, &3]));
    /// ```
    pub fn insert_before(&mut self, handle: Handle, value: T) -> Result<Handle, Error> {
        let at = self.live(handle).ok_or(Error::InvalidLink)?;
        let prev = self.slots[at].prev;
        let new = self.splice(value, prev, at);
        Ok(Handle {
            slot: new,
            generation: self.slots[new].generation,
        })
    }

    /// Inserts an element directly after the element a handle refers to,
    /// returning a handle to the new element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLink`] if the handle is stale: an element
    /// can only ever be constructed between two live neighbors.
    pub fn insert_after(&mut self, handle: Handle, value: T) -> Result<Handle, Error> {
        let at = self.live(handle).ok_or(Error::InvalidLink)?;
        let next = self.slots[at].next;
        let new = self.splice(value, at, next);
        Ok(Handle {
            slot: new,
            generation: self.slots[new].generation,
        })
    }

    /// Clears the deque, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let mut deque = deque![3 => 4 => 5];
    /// assert!(!deque.is_empty());
    ///
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// ```
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Returns a one-shot forward iterator over the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let deque = deque![1 => 2 => 3];
    /// assert!(deque.iter().eq([&1, &2, &3]));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            cursor: 0,
        }
    }

    /// Returns a one-shot reverse iterator over the deque, yielding
    /// elements from the tail toward the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let deque = deque![1 => 2 => 3];
    /// assert!(deque.rev_iter().eq([&3, &2, &1]));
    /// ```
    #[inline]
    pub fn rev_iter(&self) -> RevIter<'_, T> {
        RevIter {
            cursor: self.len() as isize - 1,
            deque: self,
        }
    }

    /// Maps a signed offset to a traversal start next to the anchor.
    ///
    /// Non-negative offsets walk forward from the first element; negative
    /// offsets walk backward from the last, with `-1` landing on it.
    fn entry(&self, offset: isize) -> (usize, isize) {
        if offset >= 0 {
            (self.slots[ANCHOR].next, offset)
        } else {
            (self.slots[ANCHOR].prev, offset + 1)
        }
    }

    /// Counts the elements from `at` forward until the anchor.
    fn size_from(&self, at: usize) -> usize {
        match self.slots[at].node {
            Node::Anchor => 0,
            Node::Element(_) => 1 + self.size_from(self.slots[at].next),
            Node::Vacant => unreachable!("chain links never reach vacant slots"),
        }
    }

    /// Resolves an offset to a value starting from `at`, recursing in the
    /// direction of the offset's sign. Reaching the anchor means the
    /// offset ran past the live elements.
    fn value_from(&self, at: usize, offset: isize) -> Result<&T, Error> {
        match &self.slots[at].node {
            Node::Anchor => Err(Error::OutOfRange),
            Node::Element(value) => {
                if offset == 0 {
                    Ok(value)
                } else if offset > 0 {
                    self.value_from(self.slots[at].next, offset - 1)
                } else {
                    self.value_from(self.slots[at].prev, offset + 1)
                }
            }
            Node::Vacant => unreachable!("chain links never reach vacant slots"),
        }
    }

    /// Mutating analogue of [`Self::value_from`]: the element where the
    /// offset bottoms out is spliced out of the chain.
    fn remove_from(&mut self, at: usize, offset: isize) -> Result<T, Error> {
        let (next, prev) = (self.slots[at].next, self.slots[at].prev);
        match self.slots[at].node {
            Node::Anchor => Err(Error::OutOfRange),
            Node::Element(_) => {
                if offset == 0 {
                    Ok(self.unlink(at))
                } else if offset > 0 {
                    self.remove_from(next, offset - 1)
                } else {
                    self.remove_from(prev, offset + 1)
                }
            }
            Node::Vacant => unreachable!("chain links never reach vacant slots"),
        }
    }

    /// Walks forward from `at` to the first element matching the
    /// predicate. Returns the anchor's index when nothing matches; the
    /// public [`Self::find`] turns that into [`None`].
    fn find_from<P>(&self, at: usize, pred: &mut P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        match &self.slots[at].node {
            Node::Anchor => ANCHOR,
            Node::Element(value) => {
                if pred(value) {
                    at
                } else {
                    self.find_from(self.slots[at].next, pred)
                }
            }
            Node::Vacant => unreachable!("chain links never reach vacant slots"),
        }
    }

    /// Validates a handle against the arena, returning its slot index only
    /// if that slot still holds the element the handle was issued for.
    fn live(&self, handle: Handle) -> Option<usize> {
        match self.slots.get(handle.slot) {
            Some(slot)
                if slot.generation == handle.generation
                    && matches!(slot.node, Node::Element(_)) =>
            {
                Some(handle.slot)
            }
            _ => None,
        }
    }

    /// Links a new element between `prev` and `next`, rewriting both
    /// neighbors' opposite links in the same operation. An element never
    /// exists outside a consistent chain.
    fn splice(&mut self, value: T, prev: usize, next: usize) -> usize {
        debug_assert!(
            !matches!(self.slots[prev].node, Node::Vacant)
                && !matches!(self.slots[next].node, Node::Vacant),
            "elements link only between live nodes"
        );

        let at = match self.free.pop() {
            Some(at) => {
                let slot = &mut self.slots[at];
                slot.next = next;
                slot.prev = prev;
                slot.node = Node::Element(value);
                at
            }
            None => {
                self.slots.push(Slot {
                    next,
                    prev,
                    generation: 0,
                    node: Node::Element(value),
                });
                self.slots.len() - 1
            }
        };

        self.slots[prev].next = at;
        self.slots[next].prev = at;
        at
    }

    /// Splices the element at `at` out of the chain, vacates its slot, and
    /// returns the value. The slot's generation is bumped so outstanding
    /// handles to the removed element go stale.
    fn unlink(&mut self, at: usize) -> T {
        let (next, prev) = (self.slots[at].next, self.slots[at].prev);
        self.slots[prev].next = next;
        self.slots[next].prev = prev;

        let slot = &mut self.slots[at];
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(at);

        match mem::replace(&mut self.slots[at].node, Node::Vacant) {
            Node::Element(value) => value,
            _ => unreachable!("only elements are ever unlinked"),
        }
    }
}

impl<T> Default for AnchoredDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for AnchoredDeque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for AnchoredDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for AnchoredDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T: fmt::Debug> fmt::Debug for AnchoredDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for AnchoredDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for AnchoredDeque<T> {}

/// A one-shot forward iterator over an [`AnchoredDeque`].
///
/// The iterator holds a cursor into the live deque rather than a snapshot;
/// borrowing rules guarantee the deque cannot be mutated while any
/// iterator over it exists.
#[derive(Debug)]
pub struct Iter<'a, T> {
    deque: &'a AnchoredDeque<T>,
    cursor: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Returns the next element, or fails once the sequence is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] on every call after the last element
    /// has been yielded.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::prelude::*;
    ///
    /// let deque = deque![1];
    /// let mut iter = deque.iter();
    ///
    /// assert_eq!(iter.try_next(), Ok(&1));
    /// assert_eq!(iter.try_next(), Err(Error::Exhausted));
    /// assert_eq!(iter.try_next(), Err(Error::Exhausted));
    /// ```
    pub fn try_next(&mut self) -> Result<&'a T, Error> {
        let deque = self.deque;
        if self.cursor < deque.len() {
            let value = deque.get(self.cursor as isize)?;
            self.cursor += 1;
            Ok(value)
        } else {
            Err(Error::Exhausted)
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.deque.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

/// A one-shot reverse iterator over an [`AnchoredDeque`], yielding
/// elements from the tail toward the head.
#[derive(Debug)]
pub struct RevIter<'a, T> {
    deque: &'a AnchoredDeque<T>,
    cursor: isize,
}

impl<'a, T> RevIter<'a, T> {
    /// Returns the next element toward the head, or fails once the
    /// sequence is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] on every call after the first element
    /// has been yielded.
    pub fn try_next(&mut self) -> Result<&'a T, Error> {
        if self.cursor >= 0 {
            let deque = self.deque;
            let value = deque.get(self.cursor)?;
            self.cursor -= 1;
            Ok(value)
        } else {
            Err(Error::Exhausted)
        }
    }
}

impl<'a, T> Iterator for RevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.cursor + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

/// An iterator that moves out of an `AnchoredDeque<T>`, front to back.
#[derive(Debug)]
pub struct IntoIter<T> {
    deque: AnchoredDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl<T> IntoIterator for AnchoredDeque<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a AnchoredDeque<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
