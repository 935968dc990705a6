//! Contexts threaded through generalized folds ([`Comonad`]) and unfolds ([`Monad`]).
//!
//! Like frames, contexts are encoded as tokens: the context itself is the token's
//! `MappableFrame::Frame<X>`, so `map_frame` doubles as the context's functor map.

use std::marker::PhantomData;

use crate::either::Either;
use crate::frame::{MappableFrame, MappableFrameRef, PartiallyApplied};

/// A comonadic context, used by [`crate::gcata`] and friends.
///
/// Laws (unchecked): `extract(duplicate(w)) == w`, `map(duplicate(w), extract) == w` and
/// duplication is associative.
pub trait Comonad: MappableFrame {
    fn extract<X>(wx: Self::Frame<X>) -> X;

    fn duplicate<X: Clone>(wx: Self::Frame<X>) -> Self::Frame<Self::Frame<X>>;
}

/// A monadic context, used by [`crate::gana`] and friends.
///
/// Laws (unchecked): `join(pure(m)) == m`, `join(map(m, pure)) == m` and joining is associative.
pub trait Monad: MappableFrame {
    fn pure<X>(x: X) -> Self::Frame<X>;

    fn join<X>(mmx: Self::Frame<Self::Frame<X>>) -> Self::Frame<X>;
}

/// The trivial context: `Identity::Frame<X> = X`
pub enum Identity {}

impl MappableFrame for Identity {
    type Frame<X> = X;

    #[inline(always)]
    fn map_frame<A, B>(input: A, mut f: impl FnMut(A) -> B) -> B {
        f(input)
    }
}

impl MappableFrameRef for Identity {
    #[inline(always)]
    fn map_frame_ref<'a, A: 'a, B>(input: &'a A, mut f: impl FnMut(&'a A) -> B) -> B {
        f(input)
    }
}

impl Comonad for Identity {
    fn extract<X>(wx: X) -> X {
        wx
    }

    fn duplicate<X: Clone>(wx: X) -> X {
        wx
    }
}

impl Monad for Identity {
    fn pure<X>(x: X) -> X {
        x
    }

    fn join<X>(mmx: X) -> X {
        mmx
    }
}

/// The environment comonad transformer: pairs some context `W` with an environment `E`.
///
/// `EnvT<E, W>::Frame<X> = (E, W::Frame<X>)`
pub struct EnvT<E, W>(PhantomData<E>, PhantomData<W>);

impl<E, W: MappableFrame> MappableFrame for EnvT<E, W> {
    type Frame<X> = (E, W::Frame<X>);

    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        let (env, wa) = input;
        (env, W::map_frame(wa, f))
    }
}

impl<E: Clone, W: Comonad> Comonad for EnvT<E, W> {
    fn extract<X>(wx: Self::Frame<X>) -> X {
        W::extract(wx.1)
    }

    fn duplicate<X: Clone>(wx: Self::Frame<X>) -> Self::Frame<Self::Frame<X>> {
        let (env, wx) = wx;
        let nested = W::map_frame(W::duplicate(wx), |w| (env.clone(), w));
        (env, nested)
    }
}

/// A non-empty tree of values shaped by `H`: the history of a histomorphism.
///
/// `head` is the result computed at this node and `tail` holds the histories of its children.
/// As a context, `Cofree<H, PartiallyApplied>::Frame<A> = Cofree<H, A>`.
///
/// # Stack usage
///
/// Cloning, mapping, duplicating and dropping a history recurse once per layer, so very deep
/// histories can exhaust the call stack. [`crate::histo`] builds its history on the heap but
/// drops it the same way.
pub struct Cofree<H: MappableFrame, A> {
    pub head: A,
    pub tail: Box<H::Frame<Cofree<H, A>>>,
}

impl<H: MappableFrame, A> Cofree<H, A> {
    pub fn new(head: A, tail: H::Frame<Cofree<H, A>>) -> Self {
        Self {
            head,
            tail: Box::new(tail),
        }
    }

    /// The histories of this node's children
    pub fn children(&self) -> &H::Frame<Cofree<H, A>> {
        &self.tail
    }
}

impl<H: MappableFrameRef, A: Clone> Clone for Cofree<H, A> {
    fn clone(&self) -> Self {
        Cofree::new(
            self.head.clone(),
            H::map_frame_ref(&*self.tail, |child| child.clone()),
        )
    }
}

impl<H: MappableFrame> MappableFrame for Cofree<H, PartiallyApplied> {
    type Frame<X> = Cofree<H, X>;

    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        fn go<H, A, B, G>(node: Cofree<H, A>, f: &mut G) -> Cofree<H, B>
        where
            H: MappableFrame,
            G: FnMut(A) -> B,
        {
            let head = f(node.head);
            let tail = H::map_frame(*node.tail, |child| go(child, f));
            Cofree::new(head, tail)
        }

        go(input, &mut f)
    }
}

impl<H: MappableFrameRef> Comonad for Cofree<H, PartiallyApplied> {
    fn extract<X>(wx: Cofree<H, X>) -> X {
        wx.head
    }

    fn duplicate<X: Clone>(wx: Cofree<H, X>) -> Cofree<H, Cofree<H, X>> {
        let head = wx.clone();
        let tail = H::map_frame(*wx.tail, Self::duplicate);
        Cofree::new(head, tail)
    }
}

impl<L> Monad for Either<L, PartiallyApplied> {
    fn pure<X>(x: X) -> Either<L, X> {
        Either::Right(x)
    }

    fn join<X>(mmx: Either<L, Either<L, X>>) -> Either<L, X> {
        match mmx {
            Either::Left(l) => Either::Left(l),
            Either::Right(mx) => mx,
        }
    }
}

/// The either monad transformer: `EitherT<L, M>::Frame<X> = M::Frame<Either<L, X>>`
pub struct EitherT<L, M>(PhantomData<L>, PhantomData<M>);

impl<L, M: MappableFrame> MappableFrame for EitherT<L, M> {
    type Frame<X> = M::Frame<Either<L, X>>;

    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        M::map_frame(input, |e| match e {
            Either::Left(l) => Either::Left(l),
            Either::Right(a) => Either::Right(f(a)),
        })
    }
}

impl<L, M: Monad> Monad for EitherT<L, M> {
    fn pure<X>(x: X) -> Self::Frame<X> {
        M::pure(Either::Right(x))
    }

    fn join<X>(mmx: Self::Frame<Self::Frame<X>>) -> Self::Frame<X> {
        M::join(M::map_frame(mmx, |e| match e {
            Either::Left(l) => M::pure(Either::Left(l)),
            Either::Right(inner) => inner,
        }))
    }
}
