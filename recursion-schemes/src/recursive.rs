use crate::frame::MappableFrame;

pub mod collapse;
pub mod expand;

/// A recursive type together with its base functor, in the form of a frame token.
///
/// Both [`collapse::Collapsible`] and [`expand::Expandable`] extend this trait, so the two
/// capabilities always agree on a single frame type.
pub trait HasRecursiveFrame {
    type FrameToken: MappableFrame;
}

/// A single layer of `T`, with recursive positions holding `X`
pub type Base<T, X> = <<T as HasRecursiveFrame>::FrameToken as MappableFrame>::Frame<X>;

/// Convert between two recursive representations that share a frame token, by folding
/// the source straight into the target's `from_frame`.
///
/// ```rust
/// # use std::collections::VecDeque;
/// # use recursion_schemes::{refix, Fix, ListFrame, PartiallyApplied};
/// let list: VecDeque<u8> = VecDeque::from(vec![1, 2, 3]);
/// let fixed: Fix<ListFrame<u8, PartiallyApplied>> = refix(list.clone());
/// let back: VecDeque<u8> = refix(fixed);
///
/// assert_eq!(back, list);
/// ```
pub fn refix<S, T>(source: S) -> T
where
    S: collapse::Collapsible,
    T: expand::Expandable<FrameToken = S::FrameToken>,
{
    source.collapse_frames(T::from_frame)
}
