//! Folds and unfolds over recursive data described by a base functor.
//!
//! A recursive type is split into a single layer (a frame, see [`MappableFrame`]) plus the
//! operations that take one layer off ([`Collapsible`]) or put one on ([`Expandable`]). Every
//! scheme in this crate is written once against that interface and runs on a heap allocated
//! stack machine, so deep structures never exhaust the call stack. The same holds for
//! dropping, comparing and folding [`Fix`], [`Mu`] and [`Nu`]; the remaining exceptions are
//! listed under "Stack usage" on [`Fix`] and [`Cofree`].
//!
//! ```rust
//! use std::collections::VecDeque;
//! use recursion_schemes::{cata, para, ListFrame};
//!
//! let list: VecDeque<u32> = VecDeque::from(vec![1, 2, 3]);
//!
//! let sum = cata(list.clone(), |layer: ListFrame<u32, u32>| match layer {
//!     ListFrame::Nil => 0,
//!     ListFrame::Cons(e, acc) => e + acc,
//! });
//! assert_eq!(sum, 6);
//!
//! // every element, weighted by how many elements follow it
//! let weighted = para(list, |layer: ListFrame<u32, (VecDeque<u32>, u32)>| match layer {
//!     ListFrame::Nil => 0,
//!     ListFrame::Cons(e, (rest, acc)) => e * rest.len() as u32 + acc,
//! });
//! assert_eq!(weighted, 4);
//! ```

pub mod context;
mod either;
mod fixpoint;
mod frame;
pub mod instances;
pub mod law;
mod recursive;
mod schemes;

pub use context::{Cofree, Comonad, EitherT, EnvT, Identity, Monad};
pub use either::Either;
pub use fixpoint::{Church, Compact, CompactError, Fix, Mu, Nu, Unfold};
pub use frame::{
    expand_and_collapse, try_expand_and_collapse, Compose, MappableFrame, MappableFrameRef,
    PartiallyApplied,
};
pub use instances::list::ListFrame;
pub use instances::peano::Peano;
pub use instances::stub::Const;
pub use recursive::collapse::Collapsible;
pub use recursive::expand::Expandable;
pub use recursive::{refix, Base, HasRecursiveFrame};
pub use schemes::*;
