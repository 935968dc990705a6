use crate::frame::{expand_and_collapse, try_expand_and_collapse};
use crate::recursive::{Base, HasRecursiveFrame};

/// The ability to recursively collapse some type into some output type, frame by frame.
/// This is `project`: exposing one layer of `Self` with its recursive positions as `Self`.
///
/// For example:
///
/// ```rust
/// use recursion_schemes::{Collapsible, HasRecursiveFrame, MappableFrame, PartiallyApplied};
///
/// enum IntTreeFrame<A> {
///     Leaf { value: usize },
///     Node { left: A, right: A },
/// }
///
/// impl MappableFrame for IntTreeFrame<PartiallyApplied> {
///     type Frame<X> = IntTreeFrame<X>;
///
///     fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
///         match input {
///             IntTreeFrame::Leaf { value } => IntTreeFrame::Leaf { value },
///             IntTreeFrame::Node { left, right } => IntTreeFrame::Node {
///                 left: f(left),
///                 right: f(right),
///             },
///         }
///     }
/// }
///
/// enum IntTree {
///     Leaf { value: usize },
///     Node { left: Box<Self>, right: Box<Self> },
/// }
///
/// impl<'a> HasRecursiveFrame for &'a IntTree {
///     type FrameToken = IntTreeFrame<PartiallyApplied>;
/// }
///
/// impl<'a> Collapsible for &'a IntTree {
///     fn into_frame(self) -> IntTreeFrame<Self> {
///         match self {
///             IntTree::Leaf { value } => IntTreeFrame::Leaf { value: *value },
///             IntTree::Node { left, right } => IntTreeFrame::Node {
///                 left: left.as_ref(),
///                 right: right.as_ref(),
///             },
///         }
///     }
/// }
///
/// let tree = IntTree::Node {
///     left: Box::new(IntTree::Leaf { value: 1 }),
///     right: Box::new(IntTree::Leaf { value: 2 }),
/// };
///
/// let sum = (&tree).collapse_frames(|frame| match frame {
///     IntTreeFrame::Leaf { value } => value,
///     IntTreeFrame::Node { left, right } => left + right,
/// });
///
/// assert_eq!(sum, 3);
/// ```
pub trait Collapsible: HasRecursiveFrame + Sized {
    /// Given an instance of this type, generate a frame holding the data owned by it,
    /// with any recursive instances of 'Self' owned by this node as the frame elements
    fn into_frame(self) -> Base<Self, Self>;

    /// Given an instance of this type, collapse it into a single value of type 'Out' by
    /// traversing the recursive structure of 'self', generating frames, and collapsing
    /// those frames using some function from 'Frame<Out> -> Out'
    ///
    /// This is a catamorphism. It is defined on the trait to allow for optimized impls
    fn collapse_frames<Out>(self, collapse_frame: impl FnMut(Base<Self, Out>) -> Out) -> Out {
        expand_and_collapse::<Self::FrameToken, Self, Out>(self, Self::into_frame, collapse_frame)
    }

    /// Fallible version of `collapse_frames`, halting on the first error
    fn try_collapse_frames<Out, E>(
        self,
        collapse_frame: impl FnMut(Base<Self, Out>) -> Result<Out, E>,
    ) -> Result<Out, E> {
        try_expand_and_collapse::<Self::FrameToken, Self, Out, E>(
            self,
            |seed| Ok(Self::into_frame(seed)),
            collapse_frame,
        )
    }
}
