pub mod eval;
pub mod naive;

use recursion_schemes::{MappableFrame, MappableFrameRef, PartiallyApplied};
use serde::{Deserialize, Serialize};

/// Simple expression language with some operations on integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExprFrame<A> {
    Add(A, A),
    Sub(A, A),
    Mul(A, A),
    Neg(A),
    LiteralInt(i64),
}

pub type ExprToken = ExprFrame<PartiallyApplied>;

impl MappableFrame for ExprFrame<PartiallyApplied> {
    type Frame<X> = ExprFrame<X>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            ExprFrame::Add(a, b) => ExprFrame::Add(f(a), f(b)),
            ExprFrame::Sub(a, b) => ExprFrame::Sub(f(a), f(b)),
            ExprFrame::Mul(a, b) => ExprFrame::Mul(f(a), f(b)),
            ExprFrame::Neg(a) => ExprFrame::Neg(f(a)),
            ExprFrame::LiteralInt(x) => ExprFrame::LiteralInt(x),
        }
    }
}

impl MappableFrameRef for ExprFrame<PartiallyApplied> {
    #[inline(always)]
    fn map_frame_ref<'a, A: 'a, B>(
        input: &'a Self::Frame<A>,
        mut f: impl FnMut(&'a A) -> B,
    ) -> Self::Frame<B> {
        match input {
            ExprFrame::Add(a, b) => ExprFrame::Add(f(a), f(b)),
            ExprFrame::Sub(a, b) => ExprFrame::Sub(f(a), f(b)),
            ExprFrame::Mul(a, b) => ExprFrame::Mul(f(a), f(b)),
            ExprFrame::Neg(a) => ExprFrame::Neg(f(a)),
            ExprFrame::LiteralInt(x) => ExprFrame::LiteralInt(*x),
        }
    }
}

impl<A> ExprFrame<A> {
    /// number of recursive positions
    pub fn arity(&self) -> usize {
        match self {
            ExprFrame::Add(..) | ExprFrame::Sub(..) | ExprFrame::Mul(..) => 2,
            ExprFrame::Neg(_) => 1,
            ExprFrame::LiteralInt(_) => 0,
        }
    }
}
