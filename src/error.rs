//! Error types shared across the crate's collections.

use thiserror::Error;

/// Failures surfaced by deque and iterator operations.
///
/// All of these are local, synchronous conditions reported at the call
/// site; nothing in the crate retries internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An offset-based read or removal ran past the live elements. This
    /// covers every such operation on an empty deque as well as offsets
    /// whose magnitude exceeds the element count.
    #[error("offset out of range: the deque is empty or the offset exceeds the element count")]
    OutOfRange,

    /// An element was asked to link against a neighbor that is not a live
    /// node, e.g. through a stale [`Handle`]. This is a contract violation
    /// on the caller's side, not a condition to recover from.
    ///
    /// [`Handle`]: crate::collections::anchored_deque::Handle
    #[error("invalid link: neighbor is not a live node")]
    InvalidLink,

    /// An iterator's [`try_next`] was called after its sequence was fully
    /// consumed.
    ///
    /// [`try_next`]: crate::collections::anchored_deque::Iter::try_next
    #[error("iterator exhausted")]
    Exhausted,
}
