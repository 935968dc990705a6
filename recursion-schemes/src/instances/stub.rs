//! Non-recursive types whose base functor is `Const` of themselves. Every scheme applied to
//! them reduces to a single step of case analysis.

use std::marker::PhantomData;

use crate::either::Either;
use crate::frame::{MappableFrame, MappableFrameRef, PartiallyApplied};
use crate::recursive::collapse::Collapsible;
use crate::recursive::expand::Expandable;
use crate::recursive::HasRecursiveFrame;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A frame with no recursive positions, holding only a `C`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Const<C, X>(pub C, pub PhantomData<X>);

impl<C, X> Const<C, X> {
    pub fn new(value: C) -> Self {
        Const(value, PhantomData)
    }

    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<C> MappableFrame for Const<C, PartiallyApplied> {
    type Frame<X> = Const<C, X>;

    fn map_frame<A, B>(input: Self::Frame<A>, _f: impl FnMut(A) -> B) -> Self::Frame<B> {
        Const::new(input.0)
    }
}

impl<C: Clone> MappableFrameRef for Const<C, PartiallyApplied> {
    fn map_frame_ref<'a, A: 'a, B>(
        input: &'a Self::Frame<A>,
        _f: impl FnMut(&'a A) -> B,
    ) -> Self::Frame<B> {
        Const::new(input.0.clone())
    }
}

macro_rules! const_instance {
    ($ty:ty, [$($param:ident),*]) => {
        impl<$($param),*> HasRecursiveFrame for $ty {
            type FrameToken = Const<$ty, PartiallyApplied>;
        }

        impl<$($param),*> Collapsible for $ty {
            fn into_frame(self) -> Const<$ty, Self> {
                Const::new(self)
            }
        }

        impl<$($param),*> Expandable for $ty {
            fn from_frame(val: Const<$ty, Self>) -> Self {
                val.into_inner()
            }
        }
    };
}

const_instance!(Option<T>, [T]);
const_instance!(Result<T, E>, [T, E]);
const_instance!(Either<L, R>, [L, R]);
