use std::convert::Infallible;
use std::marker::PhantomData;

/// A single 'frame' of some recursive structure, with the recursive positions abstracted
/// to a type parameter. This is the base functor of that structure.
///
/// # Implementing this trait
///
/// Rust does not allow implementing a trait for a partially applied type: we can implement a
/// trait for `Option<usize>` but not for just `Option`. For this reason the convention is to
/// implement this trait for some marker token, usually the frame type itself applied to the
/// uninhabited [`PartiallyApplied`] enum:
///
/// ```rust
/// # use recursion_schemes::{MappableFrame, PartiallyApplied};
/// #[derive(Debug, PartialEq, Eq)]
/// enum TreeFrame<A> {
///     Leaf(u32),
///     Node(A, A),
/// }
///
/// impl MappableFrame for TreeFrame<PartiallyApplied> {
///     type Frame<X> = TreeFrame<X>;
///
///     fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
///         match input {
///             TreeFrame::Leaf(n) => TreeFrame::Leaf(n),
///             TreeFrame::Node(l, r) => TreeFrame::Node(f(l), f(r)),
///         }
///     }
/// }
///
/// let frame = TreeFrame::Node(1, 2);
/// let mapped = TreeFrame::<PartiallyApplied>::map_frame(frame, |n| n * 10);
///
/// assert_eq!(mapped, TreeFrame::Node(10, 20));
/// ```
///
/// # Laws
///
/// `map_frame` must be a lawful functor map (identity and composition), and it must visit the
/// recursive positions of a frame in the same order every time it is called on frames of the
/// same shape. The stack machine and [`crate::Compact`] both rely on that ordering.
pub trait MappableFrame {
    /// the frame type that is mapped over by `map_frame`
    type Frame<X>;

    /// Apply some function `f` to each recursive position inside a frame
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B>;
}

/// Mapping over a borrowed frame.
///
/// The non-recursive contents of the frame are cloned and each recursive position is handed to
/// `f` by reference. This is what lets a frame be duplicated, so it backs `Clone`, equality,
/// ordering and `Debug` for [`crate::Fix`], as well as [`crate::zygo`] and the history comonad.
///
/// `map_frame_ref` must visit positions in the same order as [`MappableFrame::map_frame`].
pub trait MappableFrameRef: MappableFrame {
    fn map_frame_ref<'a, A: 'a, B>(
        input: &'a Self::Frame<A>,
        f: impl FnMut(&'a A) -> B,
    ) -> Self::Frame<B>;
}

/// An uninhabited type used to define [`MappableFrame`] instances for partially-applied types.
///
/// For example: the `MappableFrame` instance for `MyFrame<A>` cannot be written over the
/// partially-applied type `MyFrame`, so instead we write it over `MyFrame<PartiallyApplied>`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartiallyApplied {}

/// The composition of two frames: `F1::Frame<F2::Frame<X>>`
pub struct Compose<F1, F2>(PhantomData<F1>, PhantomData<F2>);

impl<F1: MappableFrame, F2: MappableFrame> MappableFrame for Compose<F1, F2> {
    type Frame<X> = F1::Frame<F2::Frame<X>>;

    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        F1::map_frame(input, |inner| F2::map_frame(inner, |x| f(x)))
    }
}

impl<F1, F2> MappableFrameRef for Compose<F1, F2>
where
    F1: MappableFrameRef,
    // `F2::Frame<A>: 'a` must hold for any caller-chosen `'a`, which a type parameter only
    // satisfies through `'static`
    F2: MappableFrameRef + 'static,
{
    fn map_frame_ref<'a, A: 'a, B>(
        input: &'a Self::Frame<A>,
        mut f: impl FnMut(&'a A) -> B,
    ) -> Self::Frame<B> {
        F1::map_frame_ref(input, |inner| F2::map_frame_ref(inner, |x| f(x)))
    }
}

// annotates each position with some fixed value, used by `para`
impl<T> MappableFrame for (T, PartiallyApplied) {
    type Frame<X> = (T, X);

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        (input.0, f(input.1))
    }
}

impl<T: Clone> MappableFrameRef for (T, PartiallyApplied) {
    fn map_frame_ref<'a, A: 'a, B>(
        input: &'a Self::Frame<A>,
        mut f: impl FnMut(&'a A) -> B,
    ) -> Self::Frame<B> {
        (input.0.clone(), f(&input.1))
    }
}

/// Split a borrowed frame into its shape (recursive positions erased) and its recursive
/// positions, in visiting order.
pub(crate) fn peel<'a, F: MappableFrameRef, A: 'a>(
    layer: &'a F::Frame<A>,
) -> (F::Frame<()>, Vec<&'a A>) {
    let mut children = Vec::new();
    let shape = F::map_frame_ref(layer, |child| children.push(child));
    (shape, children)
}

/// This function generates a stack machine for some frame `F::Frame`,
/// expanding some seed value `Seed` into frames via a function `Seed -> Frame<Seed>`
/// and collapsing those values via a function `Frame<Out> -> Out`.
///
/// Branches are expanded depth-first, left to right (in `map_frame` visiting order), and each
/// frame is collapsed as soon as all of its children have been collapsed. No intermediate
/// recursive structure is ever built: this is a hylomorphism.
///
/// This function is stack safe (it does not use the call stack), but it
/// does use an internal stack data structure and is thus, technically,
/// susceptible to stack overflows if said stack expands
pub fn expand_and_collapse<F: MappableFrame, Seed, Out>(
    seed: Seed,
    mut expand_frame: impl FnMut(Seed) -> F::Frame<Seed>,
    mut collapse_frame: impl FnMut(F::Frame<Out>) -> Out,
) -> Out {
    let res = try_expand_and_collapse::<F, Seed, Out, Infallible>(
        seed,
        |seed| Ok(expand_frame(seed)),
        |frame| Ok(collapse_frame(frame)),
    );

    match res {
        Ok(out) => out,
        Err(never) => match never {},
    }
}

/// Fallible version of [`expand_and_collapse`]: the first `Err` returned by either
/// `expand_frame` or `collapse_frame` halts the traversal and is returned as-is.
pub fn try_expand_and_collapse<F: MappableFrame, Seed, Out, E>(
    seed: Seed,
    expand_frame: impl FnMut(Seed) -> Result<F::Frame<Seed>, E>,
    collapse_frame: impl FnMut(F::Frame<Out>) -> Result<Out, E>,
) -> Result<Out, E> {
    run::<F, Seed, Out, E>(seed, expand_frame, collapse_frame, &mut Slots::new())
}

fn run<F: MappableFrame, Seed, Out, E>(
    seed: Seed,
    mut expand_frame: impl FnMut(Seed) -> Result<F::Frame<Seed>, E>,
    mut collapse_frame: impl FnMut(F::Frame<Out>) -> Result<Out, E>,
    slots: &mut Slots<Out>,
) -> Result<Out, E> {
    enum Visit<Seed, Pending> {
        Enter { slot: usize, seed: Seed },
        Leave { slot: usize, frame: Pending },
    }

    let root = slots.reserve();
    let mut stack = vec![Visit::Enter { slot: root, seed }];
    #[cfg(feature = "tracing")]
    let mut expanded: usize = 0;

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter { slot, seed } => {
                let frame = expand_frame(seed)?;
                #[cfg(feature = "tracing")]
                {
                    expanded += 1;
                }

                let mut children = Vec::new();
                let frame = F::map_frame(frame, |seed| {
                    let child = slots.reserve();
                    children.push(Visit::Enter { slot: child, seed });
                    child
                });

                stack.push(Visit::Leave { slot, frame });
                // reversed so the leftmost child is popped (and so expanded) first
                stack.extend(children.into_iter().rev());
            }
            Visit::Leave { slot, frame } => {
                let frame = F::map_frame(frame, |child: usize| slots.take(child));
                slots.fill(slot, collapse_frame(frame)?);
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(frames = expanded, "expand_and_collapse finished");

    Ok(slots.take(root))
}

/// Results waiting for the frame that consumes them. A slot is recycled as soon as its result
/// is taken, so memory follows the number of pending results rather than the size of the
/// whole structure.
pub(crate) struct Slots<T> {
    values: Vec<Option<T>>,
    free: Vec<usize>,
}

impl<T> Slots<T> {
    pub(crate) fn new() -> Self {
        Slots {
            values: Vec::new(),
            free: Vec::new(),
        }
    }

    /// An empty slot, to be filled exactly once
    pub(crate) fn reserve(&mut self) -> usize {
        match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.values.push(None);
                self.values.len() - 1
            }
        }
    }

    pub(crate) fn fill(&mut self, slot: usize, value: T) {
        self.values[slot] = Some(value);
    }

    pub(crate) fn insert(&mut self, value: T) -> usize {
        let slot = self.reserve();
        self.fill(slot, value);
        slot
    }

    pub(crate) fn take(&mut self, slot: usize) -> T {
        let value = self.values[slot].take().unwrap();
        self.free.push(slot);
        value
    }

    // the most slots ever held at once
    #[cfg(test)]
    fn high_water(&self) -> usize {
        self.values.len()
    }
}
