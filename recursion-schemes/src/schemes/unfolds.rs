use crate::context::Monad;
use crate::either::Either;
use crate::frame::{expand_and_collapse, Compose, MappableFrame, PartiallyApplied};
use crate::law::{dist_gapo, NaturalTransformation, UnfoldContext, UnfoldLaw};
use crate::recursive::collapse::Collapsible;
use crate::recursive::expand::Expandable;
use crate::recursive::Base;

/// Anamorphism: expand `seed` top-down into a `T`, one frame at a time.
///
/// The whole structure is built eagerly: for unbounded coalgebras use [`crate::Nu::unfold`].
pub fn ana<T: Expandable, S>(seed: S, coalg: impl FnMut(S) -> Base<T, S>) -> T {
    T::expand_frames(seed, coalg)
}

/// Fallible anamorphism, halting on the first error returned by `coalg`
pub fn try_ana<T: Expandable, S, E>(
    seed: S,
    coalg: impl FnMut(S) -> Result<Base<T, S>, E>,
) -> Result<T, E> {
    T::try_expand_frames(seed, coalg)
}

/// Apomorphism: at each recursive position the coalgebra either returns a finished
/// substructure (`Left`), spliced in without being traversed, or a seed to keep expanding
/// (`Right`).
pub fn apo<T: Expandable, S>(seed: S, coalg: impl FnMut(S) -> Base<T, Either<T, S>>) -> T {
    expand_and_collapse::<Compose<T::FrameToken, Either<T, PartiallyApplied>>, S, T>(
        seed,
        coalg,
        |layer| {
            T::from_frame(T::FrameToken::map_frame(layer, |branch| match branch {
                Either::Left(done) => done,
                Either::Right(built) => built,
            }))
        },
    )
}

/// Postpromorphism: every layer produced at depth `n` is rewritten by `nat` `n` times, so the
/// root is left untouched, its children are rewritten once, and so on.
pub fn postpro<T, N, S>(seed: S, mut nat: N, mut coalg: impl FnMut(S) -> Base<T, S>) -> T
where
    T: Expandable,
    N: NaturalTransformation<T::FrameToken>,
{
    expand_and_collapse::<T::FrameToken, (S, usize), T>(
        (seed, 0),
        |(seed, depth)| {
            let mut layer = coalg(seed);
            for _ in 0..depth {
                layer = nat.transform::<S>(layer);
            }
            T::FrameToken::map_frame(layer, |child| (child, depth + 1))
        },
        T::from_frame,
    )
}

/// The other half of Lambek's lemma: `ana(fmap project)`, the inverse of [`crate::lambek`].
pub fn colambek<T>(layer: Base<T, T>) -> T
where
    T: Collapsible + Expandable,
{
    T::expand_frames(layer, |layer: Base<T, T>| {
        T::FrameToken::map_frame(layer, T::into_frame)
    })
}

/// Generalized anamorphism: thread the monadic context of `law` through the unfold.
pub fn gana<T, L, S>(
    seed: S,
    mut law: L,
    mut coalg: impl FnMut(S) -> Base<T, UnfoldContext<L, T::FrameToken, S>>,
) -> T
where
    T: Expandable,
    L: UnfoldLaw<T::FrameToken>,
{
    let start = L::Context::pure(coalg(seed));
    expand_and_collapse::<T::FrameToken, _, T>(
        start,
        |seed| {
            let distributed = law.distribute::<UnfoldContext<L, T::FrameToken, S>>(seed);
            T::FrameToken::map_frame(distributed, |nested| {
                L::Context::map_frame(L::Context::join::<S>(nested), &mut coalg)
            })
        },
        T::from_frame,
    )
}

/// Generalized apomorphism: a `Left` seed is handed to the auxiliary coalgebra `aux` and
/// expanded by it from then on.
pub fn gapo<T, B, S>(
    seed: S,
    aux: impl FnMut(B) -> Base<T, B>,
    coalg: impl FnMut(S) -> Base<T, Either<B, S>>,
) -> T
where
    T: Expandable,
{
    gana(seed, dist_gapo::<_, B>(aux), coalg)
}
