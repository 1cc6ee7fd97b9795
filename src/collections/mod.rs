//! Collection Types.

pub mod anchored_deque;
pub mod cons_list;

/// Ringlist Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{cons, deque};

    #[doc(no_inline)]
    pub use super::anchored_deque::{AnchoredDeque, Handle};
    #[doc(no_inline)]
    pub use super::cons_list::ConsList;
}
