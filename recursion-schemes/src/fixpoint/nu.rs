use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::fixpoint::fix::Fix;
use crate::frame::{MappableFrame, MappableFrameRef};
use crate::recursive::collapse::Collapsible;
use crate::recursive::expand::Expandable;
use crate::recursive::{refix, HasRecursiveFrame};

/// Something that can produce its next layer on demand.
pub trait Unfold<F: MappableFrame> {
    fn step(&self) -> F::Frame<Nu<F>>;
}

/// Codata fix point of some frame: a seed paired with the coalgebra that unfolds it.
///
/// Layers are only produced when projected, so a `Nu` may be infinite. Anything that looks at
/// the whole value (comparison, hashing, `Debug`, serialization, [`Nu::to_fix`]) does not
/// terminate on an infinite value.
pub struct Nu<F: MappableFrame>(Rc<Node<F>>);

enum Node<F: MappableFrame> {
    // a single layer over children that are already `Nu`, only emptied while dropping
    Layer(Option<F::Frame<Nu<F>>>),
    Unfold(Box<dyn Unfold<F>>),
}

struct Seeded<S, G> {
    seed: S,
    coalgebra: Rc<G>,
}

impl<F, S, G> Unfold<F> for Seeded<S, G>
where
    F: MappableFrame + 'static,
    S: Clone + 'static,
    G: Fn(S) -> F::Frame<S> + 'static,
{
    fn step(&self) -> F::Frame<Nu<F>> {
        let layer = (self.coalgebra)(self.seed.clone());
        F::map_frame(layer, |seed| {
            Nu::from_unfold(Seeded {
                seed,
                coalgebra: self.coalgebra.clone(),
            })
        })
    }
}

impl<F: MappableFrame> Clone for Nu<F> {
    fn clone(&self) -> Self {
        Nu(self.0.clone())
    }
}

impl<F: MappableFrame> Drop for Nu<F> {
    fn drop(&mut self) {
        let mut layers = Vec::new();
        unlink(&mut self.0, &mut layers);
        while let Some(layer) = layers.pop() {
            F::map_frame(layer, |mut child: Nu<F>| unlink(&mut child.0, &mut layers));
        }
    }
}

// detach the layer of a node nothing else points to
fn unlink<F: MappableFrame>(node: &mut Rc<Node<F>>, layers: &mut Vec<F::Frame<Nu<F>>>) {
    if let Some(Node::Layer(layer)) = Rc::get_mut(node) {
        layers.extend(layer.take());
    }
}

impl<F: MappableFrame + 'static> Nu<F> {
    /// Wrap any generator of layers
    pub fn from_unfold(generator: impl Unfold<F> + 'static) -> Self {
        Nu(Rc::new(Node::Unfold(Box::new(generator))))
    }

    /// Lazy anamorphism: nothing runs until the result is projected, and each projection
    /// runs `coalg` exactly once.
    ///
    /// ```rust
    /// # use recursion_schemes::{Collapsible, ListFrame, Nu, PartiallyApplied};
    /// let naturals: Nu<ListFrame<u64, PartiallyApplied>> =
    ///     Nu::unfold(0, |n| ListFrame::Cons(n, n + 1));
    ///
    /// match naturals.into_frame() {
    ///     ListFrame::Cons(head, _rest) => assert_eq!(head, 0),
    ///     ListFrame::Nil => unreachable!(),
    /// }
    /// ```
    pub fn unfold<S>(seed: S, coalg: impl Fn(S) -> F::Frame<S> + 'static) -> Self
    where
        S: Clone + 'static,
    {
        Nu::from_unfold(Seeded {
            seed,
            coalgebra: Rc::new(coalg),
        })
    }
}

impl<F: MappableFrameRef + 'static> Nu<F> {
    /// Force the whole value. Never returns if the value is infinite.
    pub fn to_fix(&self) -> Fix<F> {
        refix(self.clone())
    }

    /// Every layer is embedded up front, so projecting never copies what is left of `fix`.
    pub fn from_fix(fix: Fix<F>) -> Self {
        refix(fix)
    }
}

impl<F: MappableFrame> HasRecursiveFrame for Nu<F> {
    type FrameToken = F;
}

impl<F: MappableFrameRef + 'static> Collapsible for Nu<F> {
    fn into_frame(self) -> F::Frame<Self> {
        match &*self.0 {
            Node::Unfold(generator) => generator.step(),
            Node::Layer(layer) => F::map_frame_ref(layer.as_ref().unwrap(), |child| child.clone()),
        }
    }
}

impl<F: MappableFrameRef + 'static> Expandable for Nu<F> {
    fn from_frame(val: F::Frame<Self>) -> Self {
        Nu(Rc::new(Node::Layer(Some(val))))
    }
}

impl<F: MappableFrameRef + 'static> PartialEq for Nu<F>
where
    F::Frame<()>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.to_fix() == other.to_fix()
    }
}

impl<F: MappableFrameRef + 'static> Eq for Nu<F> where F::Frame<()>: Eq {}

impl<F: MappableFrameRef + 'static> PartialOrd for Nu<F>
where
    F::Frame<()>: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_fix().partial_cmp(&other.to_fix())
    }
}

impl<F: MappableFrameRef + 'static> Ord for Nu<F>
where
    F::Frame<()>: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_fix().cmp(&other.to_fix())
    }
}

impl<F: MappableFrameRef + 'static> Hash for Nu<F>
where
    F::Frame<()>: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_fix().hash(state)
    }
}

impl<F: MappableFrameRef + 'static> Debug for Nu<F>
where
    for<'a> F::Frame<&'a dyn Debug>: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FromFix").field(&self.to_fix()).finish()
    }
}
