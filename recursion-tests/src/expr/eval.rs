use recursion_schemes::{try_hylo, Collapsible};

use crate::expr::naive::Expr;
use crate::expr::{ExprFrame, ExprToken};

#[cfg(test)]
use crate::expr::naive::arb_expr;
#[cfg(test)]
use proptest::proptest;

pub type CompileError = &'static str;

#[inline(always)]
pub fn eval_layer(node: ExprFrame<i64>) -> i64 {
    match node {
        ExprFrame::Add(a, b) => a.wrapping_add(b),
        ExprFrame::Sub(a, b) => a.wrapping_sub(b),
        ExprFrame::Mul(a, b) => a.wrapping_mul(b),
        ExprFrame::Neg(a) => a.wrapping_neg(),
        ExprFrame::LiteralInt(x) => x,
    }
}

pub fn naive_eval(expr: &Expr) -> i64 {
    match expr {
        Expr::Add(a, b) => naive_eval(a).wrapping_add(naive_eval(b)),
        Expr::Sub(a, b) => naive_eval(a).wrapping_sub(naive_eval(b)),
        Expr::Mul(a, b) => naive_eval(a).wrapping_mul(naive_eval(b)),
        Expr::Neg(a) => naive_eval(a).wrapping_neg(),
        Expr::LiteralInt(x) => *x,
    }
}

// only looks at literal case - add/sub/mul/neg ops are always valid
pub fn compile<A>(layer: ExprFrame<A>) -> Result<ExprFrame<A>, CompileError> {
    match layer {
        // arbitrary check
        ExprFrame::LiteralInt(x) if x > 99 => Err("invalid literal"),
        valid => Ok(valid),
    }
}

/// evaluate while validating, without building a compiled tree in between
pub fn eval_with_fused_compile(expr: &Expr) -> Result<i64, CompileError> {
    try_hylo::<ExprToken, _, _, _>(
        expr,
        |seed| compile(seed.into_frame()),
        |layer| Ok(eval_layer(layer)),
    )
}

pub fn eval(expr: &Expr) -> i64 {
    expr.collapse_frames(eval_layer)
}

#[cfg(test)]
fn has_invalid_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) => {
            has_invalid_literal(a) || has_invalid_literal(b)
        }
        Expr::Neg(a) => has_invalid_literal(a),
        Expr::LiteralInt(x) => *x > 99,
    }
}

// generate a bunch of expression trees and evaluate them
#[cfg(test)]
proptest! {
    #[test]
    fn expr_eval(expr in arb_expr()) {
        use recursion_schemes::{cata, hylo, refix, Fix};

        let simple = naive_eval(&expr);
        let borrowed = eval(&expr);
        let owned = cata(expr.clone(), eval_layer);
        let fused = hylo::<ExprToken, _, _>(&expr, <&Expr>::into_frame, eval_layer);
        let fixed: Fix<ExprToken> = refix(&expr);
        let via_fix = cata(&fixed, eval_layer);

        assert_eq!(simple, borrowed);
        assert_eq!(simple, owned);
        assert_eq!(simple, fused);
        assert_eq!(simple, via_fix);
    }

    #[test]
    fn compile_rejects_large_literals(expr in arb_expr()) {
        match eval_with_fused_compile(&expr) {
            Ok(res) => {
                assert!(!has_invalid_literal(&expr));
                assert_eq!(res, naive_eval(&expr));
            }
            Err(err) => {
                assert!(has_invalid_literal(&expr));
                assert_eq!(err, "invalid literal");
            }
        }
    }
}
