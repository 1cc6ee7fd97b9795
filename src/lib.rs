//! A double-ended queue on an anchored circular chain.
//!
//! The core type is [`AnchoredDeque`], an ordered mutable sequence with
//! constant-time insertion and removal at either end, signed offset
//! addressing from both ends, predicate search, and targeted removal
//! through [`Handle`]s. Alongside it live [`ConsList`], an immutable
//! insertion-ordered sequence, and the [`Comparator`] abstraction its
//! sorting is built on.
//!
//! [`AnchoredDeque`]: collections::anchored_deque::AnchoredDeque
//! [`Handle`]: collections::anchored_deque::Handle
//! [`ConsList`]: collections::cons_list::ConsList
//! [`Comparator`]: compare::Comparator

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod collections;
pub mod compare;
pub mod error;

/// Ringlist Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{cons, deque};

    #[doc(no_inline)]
    pub use super::collections::anchored_deque::{AnchoredDeque, Handle};
    #[doc(no_inline)]
    pub use super::collections::cons_list::ConsList;

    #[doc(no_inline)]
    pub use super::compare::{Comparator, Natural, Reversed};
    #[doc(no_inline)]
    pub use super::error::Error;
}
