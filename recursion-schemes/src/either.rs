use crate::frame::{MappableFrame, MappableFrameRef, PartiallyApplied};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value of one of two types. As a frame, `Either<L, PartiallyApplied>` maps over `Right`.
///
/// Used by apomorphisms, where `Left` holds an already-finished subtree and `Right` a seed
/// that still needs to be expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Case analysis
    pub fn either<T>(self, left: impl FnOnce(L) -> T, right: impl FnOnce(R) -> T) -> T {
        match self {
            Either::Left(l) => left(l),
            Either::Right(r) => right(r),
        }
    }
}

impl<L> MappableFrame for Either<L, PartiallyApplied> {
    type Frame<X> = Either<L, X>;

    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            Either::Left(l) => Either::Left(l),
            Either::Right(a) => Either::Right(f(a)),
        }
    }
}

impl<L: Clone> MappableFrameRef for Either<L, PartiallyApplied> {
    fn map_frame_ref<'a, A: 'a, B>(
        input: &'a Self::Frame<A>,
        mut f: impl FnMut(&'a A) -> B,
    ) -> Self::Frame<B> {
        match input {
            Either::Left(l) => Either::Left(l.clone()),
            Either::Right(a) => Either::Right(f(a)),
        }
    }
}
