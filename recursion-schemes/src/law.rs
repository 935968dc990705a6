//! Distributive laws: how an auxiliary context commutes with one layer of a frame.
//!
//! A law is a plain value passed to a generalized combinator. Its associated `Context` type
//! selects the comonad (for folds) or monad (for unfolds) being threaded.
//!
//! Every law must be natural in `X` and must respect the laws of its context. Neither is
//! checked: a law that breaks them makes the generalized combinators return wrong results.

use std::marker::PhantomData;

use crate::context::{Cofree, Comonad, EitherT, EnvT, Identity, Monad};
use crate::either::Either;
use crate::frame::{MappableFrame, MappableFrameRef, PartiallyApplied};
use crate::recursive::collapse::Collapsible;
use crate::recursive::expand::Expandable;
use crate::recursive::Base;

/// `Frame<Context<X>> -> Context<Frame<X>>`
pub trait FoldLaw<F: MappableFrame> {
    type Context: Comonad;

    fn distribute<X: Clone>(
        &mut self,
        layer: F::Frame<<Self::Context as MappableFrame>::Frame<X>>,
    ) -> <Self::Context as MappableFrame>::Frame<F::Frame<X>>;
}

/// `Context<Frame<X>> -> Frame<Context<X>>`
pub trait UnfoldLaw<F: MappableFrame> {
    type Context: Monad;

    fn distribute<X>(
        &mut self,
        seed: <Self::Context as MappableFrame>::Frame<F::Frame<X>>,
    ) -> F::Frame<<Self::Context as MappableFrame>::Frame<X>>;
}

/// The context `X` is wrapped in by the fold law `L` over frame `F`
pub type FoldContext<L, F, X> = <<L as FoldLaw<F>>::Context as MappableFrame>::Frame<X>;

/// The context `X` is wrapped in by the unfold law `L` over frame `F`
pub type UnfoldContext<L, F, X> = <<L as UnfoldLaw<F>>::Context as MappableFrame>::Frame<X>;

/// Commutes one frame with another: `F<Target<X>> -> Target<F<X>>`.
/// Generalized histomorphisms are parameterized by one of these.
pub trait FrameLaw<F: MappableFrame> {
    type Target: MappableFrameRef;

    fn distribute<X>(
        &mut self,
        layer: F::Frame<<Self::Target as MappableFrame>::Frame<X>>,
    ) -> <Self::Target as MappableFrame>::Frame<F::Frame<X>>;
}

/// A natural transformation from a frame to itself, as used by [`crate::prepro`] and
/// [`crate::postpro`]. It may rewrite the frame's non-recursive contents or drop and reorder
/// recursive positions, but it may not inspect them.
pub trait NaturalTransformation<F: MappableFrame> {
    fn transform<X>(&mut self, layer: F::Frame<X>) -> F::Frame<X>;
}

/// The trivial law over the identity context
pub struct DistCata;

/// The trivial law over the identity monad
pub struct DistAna;

/// The identity [`FrameLaw`] of a frame with itself
pub struct Refl;

/// Pairs every position with the result of an auxiliary algebra, on top of some inner law
pub struct DistZygoT<G, B, K> {
    aux: G,
    inner: K,
    _aux_result: PhantomData<fn() -> B>,
}

/// Threads the full history of a fold, branching according to the inner [`FrameLaw`]
pub struct DistGHisto<K>(K);

/// Lets an unfold stop a branch early with a `Left` seed, continued by an auxiliary coalgebra
pub struct DistGApo<G, B> {
    aux: G,
    _aux_seed: PhantomData<fn(B)>,
}

/// [`DistGApo`] on top of some inner unfold law
pub struct DistGApoT<G, B, K> {
    aux: G,
    inner: K,
    _aux_seed: PhantomData<fn(B)>,
}

pub fn dist_cata() -> DistCata {
    DistCata
}

pub fn dist_ana() -> DistAna {
    DistAna
}

pub fn dist_zygo<G, B>(aux: G) -> DistZygoT<G, B, DistCata> {
    dist_zygo_t(aux, DistCata)
}

pub fn dist_zygo_t<G, B, K>(aux: G, inner: K) -> DistZygoT<G, B, K> {
    DistZygoT {
        aux,
        inner,
        _aux_result: PhantomData,
    }
}

/// [`dist_zygo`] with `from_frame` as the auxiliary algebra: every position is paired with
/// the original substructure it was folded from.
#[allow(clippy::type_complexity)]
pub fn dist_para<T: Expandable>() -> DistZygoT<fn(Base<T, T>) -> T, T, DistCata> {
    dist_para_t(DistCata)
}

#[allow(clippy::type_complexity)]
pub fn dist_para_t<T: Expandable, K>(inner: K) -> DistZygoT<fn(Base<T, T>) -> T, T, K> {
    dist_zygo_t(T::from_frame as fn(Base<T, T>) -> T, inner)
}

pub fn dist_histo() -> DistGHisto<Refl> {
    DistGHisto(Refl)
}

pub fn dist_ghisto<K>(inner: K) -> DistGHisto<K> {
    DistGHisto(inner)
}

/// [`dist_gapo`] with `into_frame` as the auxiliary coalgebra: a `Left` seed is a finished
/// substructure, spliced into the output one layer at a time.
#[allow(clippy::type_complexity)]
pub fn dist_apo<T: Collapsible>() -> DistGApo<fn(T) -> Base<T, T>, T> {
    dist_gapo(T::into_frame as fn(T) -> Base<T, T>)
}

pub fn dist_gapo<G, B>(aux: G) -> DistGApo<G, B> {
    DistGApo {
        aux,
        _aux_seed: PhantomData,
    }
}

pub fn dist_gapo_t<G, B, K>(aux: G, inner: K) -> DistGApoT<G, B, K> {
    DistGApoT {
        aux,
        inner,
        _aux_seed: PhantomData,
    }
}

impl<F: MappableFrame> FoldLaw<F> for DistCata {
    type Context = Identity;

    fn distribute<X: Clone>(&mut self, layer: F::Frame<X>) -> F::Frame<X> {
        layer
    }
}

impl<F: MappableFrame> UnfoldLaw<F> for DistAna {
    type Context = Identity;

    fn distribute<X>(&mut self, seed: F::Frame<X>) -> F::Frame<X> {
        seed
    }
}

impl<F: MappableFrameRef> FrameLaw<F> for Refl {
    type Target = F;

    fn distribute<X>(&mut self, layer: F::Frame<F::Frame<X>>) -> F::Frame<F::Frame<X>> {
        layer
    }
}

impl<F, G, B, K> FoldLaw<F> for DistZygoT<G, B, K>
where
    F: MappableFrameRef,
    G: FnMut(F::Frame<B>) -> B,
    B: Clone,
    K: FoldLaw<F>,
{
    type Context = EnvT<B, K::Context>;

    fn distribute<X: Clone>(
        &mut self,
        layer: F::Frame<(B, <K::Context as MappableFrame>::Frame<X>)>,
    ) -> (B, <K::Context as MappableFrame>::Frame<F::Frame<X>>) {
        let aux_layer = F::map_frame_ref(&layer, |(b, _)| b.clone());
        let env = (self.aux)(aux_layer);
        let inner = F::map_frame(layer, |(_, w)| w);
        (env, self.inner.distribute::<X>(inner))
    }
}

impl<F, K> FoldLaw<F> for DistGHisto<K>
where
    F: MappableFrameRef,
    K: FrameLaw<F>,
{
    type Context = Cofree<K::Target, PartiallyApplied>;

    fn distribute<X: Clone>(
        &mut self,
        layer: F::Frame<Cofree<K::Target, X>>,
    ) -> Cofree<K::Target, F::Frame<X>> {
        let head = F::map_frame_ref(&layer, |history| history.head.clone());
        let unwrapped = F::map_frame(layer, |history| *history.tail);
        let branches = self.0.distribute::<Cofree<K::Target, X>>(unwrapped);
        let tail = <K::Target as MappableFrame>::map_frame(branches, |seed| {
            <Self as FoldLaw<F>>::distribute::<X>(self, seed)
        });
        Cofree::new(head, tail)
    }
}

fn gapo_step<F: MappableFrame, B, X>(
    aux: &mut impl FnMut(B) -> F::Frame<B>,
    seed: Either<B, F::Frame<X>>,
) -> F::Frame<Either<B, X>> {
    match seed {
        Either::Left(b) => F::map_frame(aux(b), Either::Left),
        Either::Right(fx) => F::map_frame(fx, Either::Right),
    }
}

impl<F, G, B> UnfoldLaw<F> for DistGApo<G, B>
where
    F: MappableFrame,
    G: FnMut(B) -> F::Frame<B>,
{
    type Context = Either<B, PartiallyApplied>;

    fn distribute<X>(&mut self, seed: Either<B, F::Frame<X>>) -> F::Frame<Either<B, X>> {
        gapo_step::<F, B, X>(&mut self.aux, seed)
    }
}

impl<F, G, B, K> UnfoldLaw<F> for DistGApoT<G, B, K>
where
    F: MappableFrame,
    G: FnMut(B) -> F::Frame<B>,
    K: UnfoldLaw<F>,
{
    type Context = EitherT<B, K::Context>;

    fn distribute<X>(
        &mut self,
        seed: <K::Context as MappableFrame>::Frame<Either<B, F::Frame<X>>>,
    ) -> F::Frame<<K::Context as MappableFrame>::Frame<Either<B, X>>> {
        let aux = &mut self.aux;
        let stepped = <K::Context as MappableFrame>::map_frame(seed, |e| {
            gapo_step::<F, B, X>(&mut *aux, e)
        });
        self.inner.distribute::<Either<B, X>>(stepped)
    }
}
