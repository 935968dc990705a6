use std::collections::VecDeque;

use crate::frame::{MappableFrame, MappableFrameRef, PartiallyApplied};
use crate::recursive::collapse::Collapsible;
use crate::recursive::expand::Expandable;
use crate::recursive::HasRecursiveFrame;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One layer of a cons list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ListFrame<Elem, Next> {
    Cons(Elem, Next),
    Nil,
}

impl<Elem> MappableFrame for ListFrame<Elem, PartiallyApplied> {
    type Frame<Next> = ListFrame<Elem, Next>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            ListFrame::Cons(elem, next) => ListFrame::Cons(elem, f(next)),
            ListFrame::Nil => ListFrame::Nil,
        }
    }
}

impl<Elem: Clone> MappableFrameRef for ListFrame<Elem, PartiallyApplied> {
    #[inline(always)]
    fn map_frame_ref<'a, A: 'a, B>(
        input: &'a Self::Frame<A>,
        mut f: impl FnMut(&'a A) -> B,
    ) -> Self::Frame<B> {
        match input {
            ListFrame::Cons(elem, next) => ListFrame::Cons(elem.clone(), f(next)),
            ListFrame::Nil => ListFrame::Nil,
        }
    }
}

impl<Elem> HasRecursiveFrame for VecDeque<Elem> {
    type FrameToken = ListFrame<Elem, PartiallyApplied>;
}

impl<Elem> Collapsible for VecDeque<Elem> {
    #[inline(always)]
    fn into_frame(mut self) -> ListFrame<Elem, Self> {
        match self.pop_front() {
            Some(first) => ListFrame::Cons(first, self),
            None => ListFrame::Nil,
        }
    }
}

impl<Elem> Expandable for VecDeque<Elem> {
    #[inline(always)]
    fn from_frame(val: ListFrame<Elem, Self>) -> Self {
        match val {
            ListFrame::Cons(first, mut rest) => {
                rest.push_front(first);
                rest
            }
            ListFrame::Nil => VecDeque::new(),
        }
    }
}

impl<'a, Elem> HasRecursiveFrame for &'a [Elem] {
    type FrameToken = ListFrame<&'a Elem, PartiallyApplied>;
}

// slices can only be taken apart, there is no general way to build one from a borrowed tail
impl<'a, Elem> Collapsible for &'a [Elem] {
    #[inline(always)]
    fn into_frame(self) -> ListFrame<&'a Elem, Self> {
        match self.split_first() {
            Some((first, rest)) => ListFrame::Cons(first, rest),
            None => ListFrame::Nil,
        }
    }
}
