use crate::frame::{expand_and_collapse, try_expand_and_collapse};
use crate::recursive::{Base, HasRecursiveFrame};

/// The ability to recursively expand a seed into some recursive type, frame by frame.
/// This is `embed`: building one layer of `Self` from a frame holding already-built children.
///
/// ```rust
/// use std::collections::VecDeque;
/// use recursion_schemes::{Expandable, ListFrame};
///
/// let countdown = VecDeque::<u32>::expand_frames(3, |n| {
///     if n == 0 {
///         ListFrame::Nil
///     } else {
///         ListFrame::Cons(n, n - 1)
///     }
/// });
///
/// assert_eq!(countdown, VecDeque::from(vec![3, 2, 1]));
/// ```
pub trait Expandable: HasRecursiveFrame + Sized {
    /// Build a single layer of `Self` from a frame whose recursive positions are already built
    fn from_frame(val: Base<Self, Self>) -> Self;

    /// Expand some seed into an instance of this type, generating frames via
    /// some function from 'In -> Frame<In>'
    ///
    /// This is an anamorphism. It is defined on the trait to allow for optimized impls
    fn expand_frames<In>(input: In, expand_frame: impl FnMut(In) -> Base<Self, In>) -> Self {
        expand_and_collapse::<Self::FrameToken, In, Self>(input, expand_frame, Self::from_frame)
    }

    /// Fallible version of `expand_frames`, halting on the first error
    fn try_expand_frames<In, E>(
        input: In,
        expand_frame: impl FnMut(In) -> Result<Base<Self, In>, E>,
    ) -> Result<Self, E> {
        try_expand_and_collapse::<Self::FrameToken, In, Self, E>(input, expand_frame, |frame| {
            Ok(Self::from_frame(frame))
        })
    }
}
