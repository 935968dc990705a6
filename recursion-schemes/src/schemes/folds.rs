use crate::context::{Cofree, Comonad};
use crate::frame::{expand_and_collapse, Compose, MappableFrame, MappableFrameRef, PartiallyApplied};
use crate::law::{
    dist_ghisto, dist_para_t, dist_zygo_t, FoldContext, FoldLaw, FrameLaw, NaturalTransformation,
};
use crate::recursive::collapse::Collapsible;
use crate::recursive::expand::Expandable;
use crate::recursive::Base;

/// Catamorphism: collapse `t` bottom-up, one frame at a time.
///
/// ```rust
/// # use std::collections::VecDeque;
/// # use recursion_schemes::{cata, ListFrame};
/// let list: VecDeque<u32> = (1..=5).collect();
/// let len = cata(list, |layer| match layer {
///     ListFrame::Nil => 0,
///     ListFrame::Cons(_, acc) => acc + 1,
/// });
///
/// assert_eq!(len, 5);
/// ```
pub fn cata<T: Collapsible, A>(t: T, alg: impl FnMut(Base<T, A>) -> A) -> A {
    t.collapse_frames(alg)
}

/// Fallible catamorphism, halting on the first error returned by `alg`
pub fn try_cata<T: Collapsible, A, E>(
    t: T,
    alg: impl FnMut(Base<T, A>) -> Result<A, E>,
) -> Result<A, E> {
    t.try_collapse_frames(alg)
}

/// Paramorphism: like [`cata`], but each recursive position also carries the substructure it
/// was collapsed from.
///
/// `T: Clone` should be cheap here, so this is usually called on a borrow (`&[E]`, `&Fix<F>`).
pub fn para<T, A>(t: T, alg: impl FnMut(Base<T, (T, A)>) -> A) -> A
where
    T: Collapsible + Clone,
{
    expand_and_collapse::<Compose<T::FrameToken, (T, PartiallyApplied)>, T, A>(
        t,
        |t| T::FrameToken::map_frame(t.into_frame(), |child| (child.clone(), child)),
        alg,
    )
}

/// Zygomorphism: run an auxiliary fold `aux` alongside the main fold, exposing its result at
/// every recursive position.
pub fn zygo<T, B, A>(
    t: T,
    mut aux: impl FnMut(Base<T, B>) -> B,
    mut alg: impl FnMut(Base<T, (B, A)>) -> A,
) -> A
where
    T: Collapsible,
    T::FrameToken: MappableFrameRef,
    B: Clone,
{
    let (_, a) = t.collapse_frames(|layer: Base<T, (B, A)>| {
        let aux_layer = T::FrameToken::map_frame_ref(&layer, |(b, _)| b.clone());
        (aux(aux_layer), alg(layer))
    });
    a
}

/// Histomorphism: each recursive position holds the full history of results computed below it.
///
/// The algebra borrows its layer, so no history is ever copied.
pub fn histo<T: Collapsible, A>(
    t: T,
    mut alg: impl FnMut(&Base<T, Cofree<T::FrameToken, A>>) -> A,
) -> A {
    t.collapse_frames(|layer: Base<T, Cofree<T::FrameToken, A>>| {
        Cofree::new(alg(&layer), layer)
    })
    .head
}

/// Prepromorphism: every layer is rewritten by `nat` once per level of depth before it is
/// folded, so the root is left untouched, its children are rewritten once, and so on.
pub fn prepro<T, N, A>(t: T, mut nat: N, alg: impl FnMut(Base<T, A>) -> A) -> A
where
    T: Collapsible,
    N: NaturalTransformation<T::FrameToken>,
{
    expand_and_collapse::<T::FrameToken, (T, usize), A>(
        (t, 0),
        |(t, depth)| {
            let mut layer = t.into_frame();
            for _ in 0..depth {
                layer = nat.transform::<T>(layer);
            }
            T::FrameToken::map_frame(layer, |child| (child, depth + 1))
        },
        alg,
    )
}

/// One half of Lambek's lemma: `cata(fmap embed)`, the inverse of [`crate::colambek`].
pub fn lambek<T>(t: T) -> Base<T, T>
where
    T: Collapsible + Expandable,
{
    t.collapse_frames(|layer: Base<T, Base<T, T>>| T::FrameToken::map_frame(layer, T::from_frame))
}

/// Generalized catamorphism: thread the comonadic context of `law` through the fold.
///
/// `alg` sees each position wrapped in the law's context, and the context of the root is
/// extracted at the end.
pub fn gcata<T, L, A>(
    t: T,
    mut law: L,
    mut alg: impl FnMut(Base<T, FoldContext<L, T::FrameToken, A>>) -> A,
) -> A
where
    T: Collapsible,
    L: FoldLaw<T::FrameToken>,
    A: Clone,
    FoldContext<L, T::FrameToken, A>: Clone,
{
    let root = t.collapse_frames(|layer: Base<T, FoldContext<L, T::FrameToken, A>>| {
        let duplicated = T::FrameToken::map_frame(layer, L::Context::duplicate::<A>);
        let distributed = law.distribute::<FoldContext<L, T::FrameToken, A>>(duplicated);
        L::Context::map_frame(distributed, &mut alg)
    });
    L::Context::extract(root)
}

/// Generalized zygomorphism: [`zygo`] over some inner fold law
pub fn gzygo<T, B, K, A>(
    t: T,
    aux: impl FnMut(Base<T, B>) -> B,
    inner: K,
    alg: impl FnMut(Base<T, (B, FoldContext<K, T::FrameToken, A>)>) -> A,
) -> A
where
    T: Collapsible,
    T::FrameToken: MappableFrameRef,
    K: FoldLaw<T::FrameToken>,
    B: Clone,
    A: Clone,
    FoldContext<K, T::FrameToken, A>: Clone,
{
    gcata(t, dist_zygo_t::<_, B, K>(aux, inner), alg)
}

/// Generalized paramorphism: [`para`] over some inner fold law
pub fn gpara<T, K, A>(
    t: T,
    inner: K,
    alg: impl FnMut(Base<T, (T, FoldContext<K, T::FrameToken, A>)>) -> A,
) -> A
where
    T: Collapsible + Expandable + Clone,
    T::FrameToken: MappableFrameRef,
    K: FoldLaw<T::FrameToken>,
    A: Clone,
    FoldContext<K, T::FrameToken, A>: Clone,
{
    gcata(t, dist_para_t::<T, K>(inner), alg)
}

/// Generalized histomorphism: histories branch according to `inner` rather than the frame of
/// `T` itself. With [`crate::law::Refl`] this computes the same result as [`histo`].
pub fn ghisto<T, K, A>(
    t: T,
    inner: K,
    alg: impl FnMut(Base<T, Cofree<K::Target, A>>) -> A,
) -> A
where
    T: Collapsible,
    T::FrameToken: MappableFrameRef,
    K: FrameLaw<T::FrameToken>,
    A: Clone,
{
    gcata(t, dist_ghisto(inner), alg)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::law::{dist_cata, dist_histo, dist_para, dist_zygo, Refl};
    use crate::{Either, ListFrame};

    type List = VecDeque<i64>;
    type Token = ListFrame<i64, PartiallyApplied>;

    fn list(elems: &[i64]) -> List {
        elems.iter().copied().collect()
    }

    fn length(layer: ListFrame<i64, usize>) -> usize {
        match layer {
            ListFrame::Nil => 0,
            ListFrame::Cons(_, acc) => acc + 1,
        }
    }

    #[test]
    fn length_of_five() {
        assert_eq!(cata(list(&[5, 4, 3, 2, 1]), length), 5);
        assert_eq!(gcata(list(&[5, 4, 3, 2, 1]), dist_cata(), length), 5);
    }

    #[test]
    fn cata_embed_is_identity() {
        let l = list(&[1, 2, 3]);
        assert_eq!(cata(l.clone(), VecDeque::from_frame), l);
    }

    #[test]
    fn para_sees_untouched_suffix() {
        let elems: [i64; 3] = [1, 2, 3];
        let res = para(&elems[..], |layer| match layer {
            ListFrame::Nil => 0,
            ListFrame::Cons(_, (rest, acc)) => acc + rest.iter().sum::<i64>(),
        });
        assert_eq!(res, 8);
    }

    #[test]
    fn para_ignoring_substructure_is_cata() {
        let elems: [i64; 3] = [4, 5, 6];
        let via_para = para(&elems[..], |layer| match layer {
            ListFrame::Nil => 0,
            ListFrame::Cons(e, (_, acc)) => *e + acc,
        });
        let via_cata = cata(&elems[..], |layer| match layer {
            ListFrame::Nil => 0,
            ListFrame::Cons(e, acc) => *e + acc,
        });
        assert_eq!(via_para, via_cata);
    }

    fn suffix_alg(layer: ListFrame<i64, (List, i64)>) -> i64 {
        match layer {
            ListFrame::Nil => 0,
            ListFrame::Cons(_, (rest, acc)) => acc + rest.iter().sum::<i64>(),
        }
    }

    #[test]
    fn para_agrees_with_generalized_forms() {
        let l = list(&[1, 2, 3, 10]);
        let expected = para(l.clone(), suffix_alg);

        assert_eq!(zygo(l.clone(), VecDeque::from_frame, suffix_alg), expected);
        assert_eq!(gcata(l.clone(), dist_para::<List>(), suffix_alg), expected);
        assert_eq!(gpara(l, dist_cata(), suffix_alg), expected);
    }

    fn count(layer: ListFrame<i64, i64>) -> i64 {
        match layer {
            ListFrame::Nil => 0,
            ListFrame::Cons(_, n) => n + 1,
        }
    }

    // each element weighted by the number of elements after it
    fn weighted(layer: ListFrame<i64, (i64, i64)>) -> i64 {
        match layer {
            ListFrame::Nil => 0,
            ListFrame::Cons(e, (after, acc)) => acc + e * after,
        }
    }

    #[test]
    fn zygo_and_generalized_zygo() {
        let l = list(&[1, 2, 3]);
        assert_eq!(zygo(l.clone(), count, weighted), 4);
        assert_eq!(gcata(l.clone(), dist_zygo::<_, i64>(count), weighted), 4);
        assert_eq!(gzygo(l, count, dist_cata(), weighted), 4);
    }

    type History = Cofree<Token, i64>;

    // sum of every other element, starting from the head
    fn alternating(layer: &ListFrame<i64, History>) -> i64 {
        match layer {
            ListFrame::Nil => 0,
            ListFrame::Cons(e, history) => match history.children() {
                ListFrame::Nil => *e,
                ListFrame::Cons(_, skipped) => e + skipped.head,
            },
        }
    }

    #[test]
    fn histo_and_generalized_histo() {
        let l = list(&[1, 2, 3, 4, 5]);
        assert_eq!(histo(l.clone(), alternating), 9);
        assert_eq!(gcata(l.clone(), dist_histo(), |layer| alternating(&layer)), 9);
        assert_eq!(ghisto(l, Refl, |layer| alternating(&layer)), 9);
    }

    fn history_len(history: &History) -> usize {
        let mut len = 1;
        let mut cur = history;
        while let ListFrame::Cons(_, next) = cur.children() {
            len += 1;
            cur = next;
        }
        len
    }

    #[test]
    fn zygo_and_para_over_a_history() {
        let l = list(&[1, 2, 3]);

        // the tail's history holds one entry per suffix, the empty one included
        let depth = gzygo(
            l.clone(),
            count,
            dist_histo(),
            |layer: ListFrame<i64, (i64, History)>| match layer {
                ListFrame::Nil => 0,
                ListFrame::Cons(_, (_, history)) => history_len(&history) as i64,
            },
        );
        assert_eq!(depth, 3);

        let via_gzygo = gzygo(
            l.clone(),
            count,
            dist_histo(),
            |layer: ListFrame<i64, (i64, History)>| match layer {
                ListFrame::Nil => 0,
                ListFrame::Cons(e, (after, history)) => history.head + e * after,
            },
        );
        assert_eq!(via_gzygo, zygo(l, count, weighted));

        let l = list(&[1, 2, 3, 10]);
        let via_gpara = gpara(
            l.clone(),
            dist_histo(),
            |layer: ListFrame<i64, (List, History)>| match layer {
                ListFrame::Nil => 0,
                ListFrame::Cons(_, (rest, history)) => history.head + rest.iter().sum::<i64>(),
            },
        );
        assert_eq!(via_gpara, para(l, suffix_alg));
    }

    // histories that never branch: only the direct child's result is kept
    struct Forget;

    impl FrameLaw<Token> for Forget {
        type Target = Either<(), PartiallyApplied>;

        fn distribute<X>(
            &mut self,
            layer: ListFrame<i64, Either<(), X>>,
        ) -> Either<(), ListFrame<i64, X>> {
            match layer {
                ListFrame::Cons(e, Either::Right(x)) => Either::Right(ListFrame::Cons(e, x)),
                _ => Either::Left(()),
            }
        }
    }

    #[test]
    fn ghisto_branches_like_its_frame_law() {
        type Shallow = Cofree<Either<(), PartiallyApplied>, i64>;

        let sum = ghisto(list(&[1, 2, 3]), Forget, |layer: ListFrame<i64, Shallow>| {
            match layer {
                ListFrame::Nil => 0,
                ListFrame::Cons(e, history) => {
                    assert!(matches!(history.children(), Either::Left(())));
                    e + history.head
                }
            }
        });
        assert_eq!(sum, 6);
    }

    struct Double;

    impl NaturalTransformation<Token> for Double {
        fn transform<X>(&mut self, layer: ListFrame<i64, X>) -> ListFrame<i64, X> {
            match layer {
                ListFrame::Cons(e, next) => ListFrame::Cons(e * 2, next),
                ListFrame::Nil => ListFrame::Nil,
            }
        }
    }

    #[test]
    fn prepro_rewrites_deeper_layers_more() {
        let sum = prepro(list(&[1, 1, 1]), Double, |layer| match layer {
            ListFrame::Nil => 0,
            ListFrame::Cons(e, acc) => e + acc,
        });
        assert_eq!(sum, 1 + 2 + 4);
    }

    #[test]
    fn lambek_exposes_one_layer() {
        assert_eq!(lambek(list(&[1, 2])), ListFrame::Cons(1, list(&[2])));
        assert_eq!(lambek(list(&[])), ListFrame::Nil);
    }

    #[test]
    fn try_cata_stops_on_error() {
        let mut visited = 0;
        let res = try_cata(list(&[1, -2, 3]), |layer| {
            visited += 1;
            match layer {
                ListFrame::Nil => Ok(0),
                ListFrame::Cons(e, _) if e < 0 => Err(format!("negative: {}", e)),
                ListFrame::Cons(e, acc) => Ok(e + acc),
            }
        });

        assert_eq!(res, Err("negative: -2".to_string()));
        // Nil, then 3, then -2
        assert_eq!(visited, 3);
    }

    #[test]
    fn deep_list_does_not_overflow() {
        let l: List = (0..100_000).collect();
        assert_eq!(cata(l, count), 100_000);
    }
}
