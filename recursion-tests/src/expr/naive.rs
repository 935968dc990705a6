use proptest::prelude::*;
use recursion_schemes::{Collapsible, Expandable, HasRecursiveFrame};

use crate::expr::{ExprFrame, ExprToken};

/// simple naive representation of a recursive expression AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    LiteralInt(i64),
}

impl HasRecursiveFrame for Expr {
    type FrameToken = ExprToken;
}

impl<'a> HasRecursiveFrame for &'a Expr {
    type FrameToken = ExprToken;
}

impl<'a> Collapsible for &'a Expr {
    #[inline(always)]
    fn into_frame(self) -> ExprFrame<Self> {
        match self {
            Expr::Add(a, b) => ExprFrame::Add(a, b),
            Expr::Sub(a, b) => ExprFrame::Sub(a, b),
            Expr::Mul(a, b) => ExprFrame::Mul(a, b),
            Expr::Neg(a) => ExprFrame::Neg(a),
            Expr::LiteralInt(x) => ExprFrame::LiteralInt(*x),
        }
    }
}

impl Collapsible for Expr {
    #[inline(always)]
    fn into_frame(self) -> ExprFrame<Self> {
        match self {
            Expr::Add(a, b) => ExprFrame::Add(*a, *b),
            Expr::Sub(a, b) => ExprFrame::Sub(*a, *b),
            Expr::Mul(a, b) => ExprFrame::Mul(*a, *b),
            Expr::Neg(a) => ExprFrame::Neg(*a),
            Expr::LiteralInt(x) => ExprFrame::LiteralInt(x),
        }
    }
}

impl Expandable for Expr {
    fn from_frame(val: ExprFrame<Self>) -> Self {
        match val {
            ExprFrame::Add(a, b) => Expr::Add(Box::new(a), Box::new(b)),
            ExprFrame::Sub(a, b) => Expr::Sub(Box::new(a), Box::new(b)),
            ExprFrame::Mul(a, b) => Expr::Mul(Box::new(a), Box::new(b)),
            ExprFrame::Neg(a) => Expr::Neg(Box::new(a)),
            ExprFrame::LiteralInt(x) => Expr::LiteralInt(x),
        }
    }
}

/// a full binary tree of additions, `depth` levels deep, with zeros at the leaves
pub fn balanced_sum(depth: u32) -> Expr {
    Expr::expand_frames(depth, |x| {
        if x > 0 {
            ExprFrame::Add(x - 1, x - 1)
        } else {
            ExprFrame::LiteralInt(0)
        }
    })
}

pub fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![any::<i8>().prop_map(|x| Expr::LiteralInt(x as i64)),];
    leaf.prop_recursive(
        8,   // 8 levels deep
        256, // Shoot for maximum size of 256 nodes
        10,  // We put up to 10 items per collection
        |inner| {
            prop_oneof![
                (inner.clone(), inner.clone())
                    .prop_map(|(a, b)| Expr::Add(Box::new(a), Box::new(b))),
                (inner.clone(), inner.clone())
                    .prop_map(|(a, b)| Expr::Sub(Box::new(a), Box::new(b))),
                (inner.clone(), inner.clone())
                    .prop_map(|(a, b)| Expr::Mul(Box::new(a), Box::new(b))),
                inner.prop_map(|a| Expr::Neg(Box::new(a))),
            ]
        },
    )
}
