use crate::frame::{MappableFrame, MappableFrameRef, PartiallyApplied};
use crate::recursive::collapse::Collapsible;
use crate::recursive::expand::Expandable;
use crate::recursive::HasRecursiveFrame;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Natural numbers, one successor at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Peano<Next> {
    Zero,
    Succ(Next),
}

impl MappableFrame for Peano<PartiallyApplied> {
    type Frame<X> = Peano<X>;

    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            Peano::Zero => Peano::Zero,
            Peano::Succ(next) => Peano::Succ(f(next)),
        }
    }
}

impl MappableFrameRef for Peano<PartiallyApplied> {
    fn map_frame_ref<'a, A: 'a, B>(
        input: &'a Self::Frame<A>,
        mut f: impl FnMut(&'a A) -> B,
    ) -> Self::Frame<B> {
        match input {
            Peano::Zero => Peano::Zero,
            Peano::Succ(next) => Peano::Succ(f(next)),
        }
    }
}

impl HasRecursiveFrame for usize {
    type FrameToken = Peano<PartiallyApplied>;
}

impl Collapsible for usize {
    fn into_frame(self) -> Peano<Self> {
        match self.checked_sub(1) {
            Some(pred) => Peano::Succ(pred),
            None => Peano::Zero,
        }
    }
}

/// Saturates at `usize::MAX`: the successor of `usize::MAX` is `usize::MAX` itself.
impl Expandable for usize {
    fn from_frame(val: Peano<Self>) -> Self {
        match val {
            Peano::Zero => 0,
            Peano::Succ(pred) => pred.saturating_add(1),
        }
    }
}
