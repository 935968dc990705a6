use crate::context::{Comonad, Monad};
use crate::frame::{expand_and_collapse, try_expand_and_collapse, MappableFrame};
use crate::law::{FoldLaw, UnfoldLaw};

/// Hylomorphism: expand `seed` with `coalg` and collapse the result with `alg`, without ever
/// building the intermediate structure. `F` is the frame shared by both halves.
///
/// ```rust
/// # use recursion_schemes::{hylo, ListFrame, PartiallyApplied};
/// let len = hylo::<ListFrame<u32, PartiallyApplied>, _, _>(
///     4,
///     |n| if n == 0 { ListFrame::Nil } else { ListFrame::Cons(n, n - 1) },
///     |layer| match layer {
///         ListFrame::Nil => 0,
///         ListFrame::Cons(_, acc) => acc + 1,
///     },
/// );
///
/// assert_eq!(len, 4);
/// ```
pub fn hylo<F: MappableFrame, S, A>(
    seed: S,
    coalg: impl FnMut(S) -> F::Frame<S>,
    alg: impl FnMut(F::Frame<A>) -> A,
) -> A {
    expand_and_collapse::<F, S, A>(seed, coalg, alg)
}

/// Fallible hylomorphism, halting on the first error returned by either half
pub fn try_hylo<F: MappableFrame, S, A, E>(
    seed: S,
    coalg: impl FnMut(S) -> Result<F::Frame<S>, E>,
    alg: impl FnMut(F::Frame<A>) -> Result<A, E>,
) -> Result<A, E> {
    try_expand_and_collapse::<F, S, A, E>(seed, coalg, alg)
}

/// Generalized hylomorphism: [`hylo`] threading the monadic context of `unfold_law` through
/// the expansion and the comonadic context of `fold_law` through the collapse.
#[allow(clippy::type_complexity)]
pub fn ghylo<F, W, M, S, A>(
    seed: S,
    mut fold_law: W,
    mut unfold_law: M,
    mut coalg: impl FnMut(S) -> F::Frame<<M::Context as MappableFrame>::Frame<S>>,
    mut alg: impl FnMut(F::Frame<<W::Context as MappableFrame>::Frame<A>>) -> A,
) -> A
where
    F: MappableFrame,
    W: FoldLaw<F>,
    M: UnfoldLaw<F>,
    A: Clone,
    <W::Context as MappableFrame>::Frame<A>: Clone,
{
    let root = expand_and_collapse::<F, <M::Context as MappableFrame>::Frame<S>, _>(
        M::Context::pure(seed),
        |seed| {
            let layer = M::Context::map_frame(seed, &mut coalg);
            let distributed =
                unfold_law.distribute::<<M::Context as MappableFrame>::Frame<S>>(layer);
            F::map_frame(distributed, M::Context::join::<S>)
        },
        |layer: F::Frame<<W::Context as MappableFrame>::Frame<A>>| {
            let duplicated = F::map_frame(layer, W::Context::duplicate::<A>);
            let distributed =
                fold_law.distribute::<<W::Context as MappableFrame>::Frame<A>>(duplicated);
            W::Context::map_frame(distributed, &mut alg)
        },
    );
    W::Context::extract(root)
}
