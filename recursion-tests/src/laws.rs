//! Every scheme agrees with its simpler or generalized counterparts on arbitrary expressions.

use std::cmp::Ordering;

use proptest::prelude::*;
use recursion_schemes::law::{dist_ana, dist_cata, NaturalTransformation, Refl};
use recursion_schemes::{
    ana, apo, cata, colambek, gana, gapo, gcata, ghisto, ghylo, gpara, gzygo, histo, hylo, lambek,
    para, postpro, prepro, refix, try_cata, zygo, Cofree, Collapsible, Compact, Either, Expandable,
    Fix, MappableFrame, MappableFrameRef, Mu, Nu,
};

use crate::expr::eval::{eval_layer, naive_eval};
use crate::expr::naive::{arb_expr, Expr};
use crate::expr::{ExprFrame, ExprToken};

type FixExpr = Fix<ExprToken>;

fn size_layer(layer: ExprFrame<u64>) -> u64 {
    match layer {
        ExprFrame::Add(a, b) | ExprFrame::Sub(a, b) | ExprFrame::Mul(a, b) => 1 + a + b,
        ExprFrame::Neg(a) => 1 + a,
        ExprFrame::LiteralInt(_) => 1,
    }
}

// sum of the sizes of every proper subtree, given a way to size each child
fn weigh<X>(layer: ExprFrame<(X, u64)>, mut size: impl FnMut(X) -> u64) -> u64 {
    let mut total = 0;
    <ExprToken as MappableFrame>::map_frame(layer, |(child, acc)| total += size(child) + acc);
    total
}

// one plus, for every child, its result and its own number of children
fn look_ahead(layer: &ExprFrame<Cofree<ExprToken, u64>>) -> u64 {
    let mut total = 1;
    <ExprToken as MappableFrameRef>::map_frame_ref(layer, |child| {
        total += child.head + child.children().arity() as u64
    });
    total
}

fn contains_neg(layer: ExprFrame<bool>) -> bool {
    match layer {
        ExprFrame::Add(a, b) | ExprFrame::Sub(a, b) | ExprFrame::Mul(a, b) => a || b,
        ExprFrame::Neg(_) => true,
        ExprFrame::LiteralInt(_) => false,
    }
}

// literal children are handed over as finished, everything else keeps unfolding
fn stop_at_literals(expr: Expr) -> ExprFrame<Either<Expr, Expr>> {
    <ExprToken as MappableFrame>::map_frame(expr.into_frame(), |child| match child {
        Expr::LiteralInt(_) => Either::Left(child),
        _ => Either::Right(child),
    })
}

struct SwapAddMul;

impl NaturalTransformation<ExprToken> for SwapAddMul {
    fn transform<X>(&mut self, layer: ExprFrame<X>) -> ExprFrame<X> {
        match layer {
            ExprFrame::Add(a, b) => ExprFrame::Mul(a, b),
            ExprFrame::Mul(a, b) => ExprFrame::Add(a, b),
            other => other,
        }
    }
}

// evaluate with addition and multiplication trading places on every odd level
fn eval_alternating(expr: &Expr, depth: usize) -> i64 {
    let next = depth + 1;
    let swapped = depth % 2 == 1;
    match expr {
        Expr::Add(a, b) | Expr::Mul(a, b) => {
            let (a, b) = (eval_alternating(a, next), eval_alternating(b, next));
            if matches!(expr, Expr::Add(..)) != swapped {
                a.wrapping_add(b)
            } else {
                a.wrapping_mul(b)
            }
        }
        Expr::Sub(a, b) => eval_alternating(a, next).wrapping_sub(eval_alternating(b, next)),
        Expr::Neg(a) => eval_alternating(a, next).wrapping_neg(),
        Expr::LiteralInt(x) => *x,
    }
}

proptest! {
    #[test]
    fn project_embed_round_trips(expr in arb_expr()) {
        let rebuilt: Expr = cata(expr.clone(), Expr::from_frame);
        prop_assert_eq!(&rebuilt, &expr);

        let unfolded: Expr = ana(expr.clone(), Expr::into_frame);
        prop_assert_eq!(&unfolded, &expr);

        let back: Expr = colambek(lambek(expr.clone()));
        prop_assert_eq!(&back, &expr);
    }

    #[test]
    fn fixed_points_agree(expr in arb_expr()) {
        let fixed: FixExpr = refix(&expr);
        let mu: Mu<ExprToken> = refix(fixed.clone());
        let nu: Nu<ExprToken> = refix(mu.clone());

        prop_assert_eq!(&Mu::from_fix(fixed.clone()), &mu);
        prop_assert_eq!(&Nu::from_fix(fixed.clone()), &nu);
        prop_assert_eq!(mu.fold(eval_layer), naive_eval(&expr));
        prop_assert_eq!(cata(nu.clone(), eval_layer), naive_eval(&expr));
        prop_assert_eq!(fixed.cmp(&nu.to_fix()), Ordering::Equal);

        let back: Expr = refix(nu);
        prop_assert_eq!(&back, &expr);
    }

    #[test]
    fn para_zygo_and_generalizations_agree(expr in arb_expr()) {
        let fixed: FixExpr = refix(&expr);

        let via_para = para(&expr, |layer: ExprFrame<(&Expr, u64)>| {
            weigh(layer, |sub| cata(sub, size_layer))
        });
        let via_zygo = zygo(&expr, size_layer, |layer: ExprFrame<(u64, u64)>| {
            weigh(layer, |size| size)
        });
        let via_gzygo = gzygo(&expr, size_layer, dist_cata(), |layer: ExprFrame<(u64, u64)>| {
            weigh(layer, |size| size)
        });
        let via_gpara = gpara(fixed, dist_cata(), |layer: ExprFrame<(FixExpr, u64)>| {
            weigh(layer, |sub| cata(&sub, size_layer))
        });

        prop_assert_eq!(via_para, via_zygo);
        prop_assert_eq!(via_para, via_gzygo);
        prop_assert_eq!(via_para, via_gpara);
    }

    #[test]
    fn generalized_folds_with_trivial_laws(expr in arb_expr()) {
        let expected = naive_eval(&expr);

        prop_assert_eq!(gcata(&expr, dist_cata(), eval_layer), expected);
        prop_assert_eq!(
            hylo::<ExprToken, _, _>(&expr, <&Expr>::into_frame, eval_layer),
            expected
        );
        prop_assert_eq!(
            ghylo::<ExprToken, _, _, _, _>(
                &expr,
                dist_cata(),
                dist_ana(),
                <&Expr>::into_frame,
                eval_layer
            ),
            expected
        );

        let via_gana: Expr = gana(expr.clone(), dist_ana(), Expr::into_frame);
        prop_assert_eq!(&via_gana, &expr);
    }

    #[test]
    fn histo_is_ghisto_over_itself(expr in arb_expr()) {
        let via_histo = histo(&expr, look_ahead);
        let via_ghisto = ghisto(&expr, Refl, |layer: ExprFrame<Cofree<ExprToken, u64>>| {
            look_ahead(&layer)
        });
        prop_assert_eq!(via_histo, via_ghisto);
    }

    #[test]
    fn apo_and_gapo_splice_finished_branches(expr in arb_expr()) {
        let via_apo: Expr = apo(expr.clone(), stop_at_literals);
        let via_gapo: Expr = gapo(expr.clone(), Expr::into_frame, stop_at_literals);

        prop_assert_eq!(&via_apo, &expr);
        prop_assert_eq!(&via_gapo, &expr);
    }

    #[test]
    fn pre_and_postpro_rewrite_by_depth(expr in arb_expr()) {
        let expected = eval_alternating(&expr, 0);

        prop_assert_eq!(prepro(&expr, SwapAddMul, eval_layer), expected);

        let rewritten: Expr = postpro(expr.clone(), SwapAddMul, Expr::into_frame);
        prop_assert_eq!(naive_eval(&rewritten), expected);
    }

    #[test]
    fn try_cata_fails_exactly_when_the_algebra_does(expr in arb_expr()) {
        let res = try_cata(&expr, |layer: ExprFrame<i64>| match layer {
            ExprFrame::Neg(_) => Err("negation"),
            other => Ok(eval_layer(other)),
        });

        if cata(&expr, contains_neg) {
            prop_assert_eq!(res, Err("negation"));
        } else {
            prop_assert_eq!(res, Ok(naive_eval(&expr)));
        }
    }

    #[test]
    fn compact_round_trips(expr in arb_expr()) {
        let fixed: FixExpr = refix(&expr);
        let compact = Compact::new(&expr);

        prop_assert_eq!(compact.layers().len() as u64, cata(&expr, size_layer));
        prop_assert_eq!(compact.into_fix(), Ok(fixed));
    }

    #[test]
    fn json_round_trips(expr in arb_expr()) {
        let fixed: FixExpr = refix(&expr);
        let json = serde_json::to_string(&fixed).unwrap();
        let decoded: FixExpr = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&decoded, &fixed);

        let mu = Mu::from_fix(fixed.clone());
        let json = serde_json::to_string(&mu).unwrap();
        let decoded: Mu<ExprToken> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&decoded, &mu);

        let nu = Nu::from_fix(fixed);
        let json = serde_json::to_string(&nu).unwrap();
        let decoded: Nu<ExprToken> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&decoded, &nu);
    }
}
