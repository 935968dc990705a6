use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::fixpoint::fix::Fix;
use crate::frame::{MappableFrame, MappableFrameRef, Slots};
use crate::recursive::collapse::Collapsible;
use crate::recursive::expand::Expandable;
use crate::recursive::{refix, HasRecursiveFrame};

/// Something that knows how to fold itself.
///
/// The algebra works on slot indices rather than results so that this trait stays object
/// safe: [`Mu::fold`] keeps the actual results in an arena indexed by those slots.
pub trait Church<F: MappableFrame> {
    /// Fold with an algebra over slot indices, returning the slot of the result. Every slot
    /// handed to `alg` must come from an earlier call to `alg` and is used exactly once.
    fn fold_slots(&self, alg: &mut dyn FnMut(F::Frame<usize>) -> usize) -> usize;
}

/// Church-encoded fix point of some frame: a value is its own fold.
///
/// Folding is cheap, while projecting a single layer (`into_frame`) folds the whole value.
/// Layers built with `from_frame` are folded and dropped without using the call stack; a
/// value built with [`Mu::from_church`] is trusted to fold itself.
pub struct Mu<F: MappableFrame>(Rc<Node<F>>);

enum Node<F: MappableFrame> {
    // a single layer over already church-encoded children, only emptied while dropping
    Layer(Option<F::Frame<Mu<F>>>),
    Church(Box<dyn Church<F>>),
}

// any clonable collapsible value, folded on demand
struct Folded<T>(T);

impl<T> Church<T::FrameToken> for Folded<T>
where
    T: Collapsible + Clone,
{
    fn fold_slots(
        &self,
        alg: &mut dyn FnMut(<T::FrameToken as MappableFrame>::Frame<usize>) -> usize,
    ) -> usize {
        self.0.clone().collapse_frames(alg)
    }
}

impl<F: MappableFrame> Clone for Mu<F> {
    fn clone(&self) -> Self {
        Mu(self.0.clone())
    }
}

impl<F: MappableFrame> Drop for Mu<F> {
    fn drop(&mut self) {
        let mut layers = Vec::new();
        unlink(&mut self.0, &mut layers);
        while let Some(layer) = layers.pop() {
            F::map_frame(layer, |mut child: Mu<F>| unlink(&mut child.0, &mut layers));
        }
    }
}

// detach the layer of a node nothing else points to
fn unlink<F: MappableFrame>(node: &mut Rc<Node<F>>, layers: &mut Vec<F::Frame<Mu<F>>>) {
    if let Some(Node::Layer(layer)) = Rc::get_mut(node) {
        layers.extend(layer.take());
    }
}

impl<F: MappableFrame + 'static> Mu<F> {
    /// Wrap any value that knows how to fold itself
    pub fn from_church(church: impl Church<F> + 'static) -> Self {
        Mu(Rc::new(Node::Church(Box::new(church))))
    }

    /// Church-encode any clonable collapsible value, which is then cloned and folded each time
    /// this `Mu` is folded.
    pub fn from_fold<T>(t: T) -> Self
    where
        T: Collapsible<FrameToken = F> + Clone + 'static,
    {
        Mu::from_church(Folded(t))
    }
}

impl<F: MappableFrameRef + 'static> Mu<F> {
    /// Fold this value with some algebra
    pub fn fold<A>(&self, mut alg: impl FnMut(F::Frame<A>) -> A) -> A {
        let mut results = Slots::new();
        let root = self.fold_slots(&mut |layer| {
            let layer = F::map_frame(layer, |slot| results.take(slot));
            results.insert(alg(layer))
        });
        results.take(root)
    }

    pub fn to_fix(&self) -> Fix<F> {
        self.fold(Fix::new)
    }

    pub fn from_fix(fix: Fix<F>) -> Self {
        refix(fix)
    }

    // embedded layers are walked with an explicit stack, anything else folds itself
    fn fold_slots(&self, alg: &mut dyn FnMut(F::Frame<usize>) -> usize) -> usize {
        enum Visit<'a, F: MappableFrame> {
            Enter { slot: usize, mu: &'a Mu<F> },
            Leave { slot: usize, layer: F::Frame<usize> },
        }

        let mut pending: Slots<usize> = Slots::new();
        let root = pending.reserve();
        let mut stack = vec![Visit::Enter { slot: root, mu: self }];

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter { slot, mu } => match &*mu.0 {
                    Node::Church(church) => pending.fill(slot, church.fold_slots(alg)),
                    Node::Layer(layer) => {
                        let mut children = Vec::new();
                        let layer = F::map_frame_ref(layer.as_ref().unwrap(), |child| {
                            let child_slot = pending.reserve();
                            children.push(Visit::Enter {
                                slot: child_slot,
                                mu: child,
                            });
                            child_slot
                        });
                        stack.push(Visit::Leave { slot, layer });
                        stack.extend(children.into_iter().rev());
                    }
                },
                Visit::Leave { slot, layer } => {
                    let layer = F::map_frame(layer, |child| pending.take(child));
                    pending.fill(slot, alg(layer));
                }
            }
        }

        pending.take(root)
    }
}

impl<F: MappableFrame> HasRecursiveFrame for Mu<F> {
    type FrameToken = F;
}

impl<F: MappableFrameRef + 'static> Collapsible for Mu<F> {
    fn into_frame(self) -> F::Frame<Self> {
        self.fold(|layer: F::Frame<F::Frame<Self>>| F::map_frame(layer, Mu::from_frame))
    }

    fn collapse_frames<Out>(self, collapse_frame: impl FnMut(F::Frame<Out>) -> Out) -> Out {
        self.fold(collapse_frame)
    }
}

impl<F: MappableFrameRef + 'static> Expandable for Mu<F> {
    fn from_frame(val: F::Frame<Self>) -> Self {
        Mu(Rc::new(Node::Layer(Some(val))))
    }
}

impl<F: MappableFrameRef + 'static> PartialEq for Mu<F>
where
    F::Frame<()>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.to_fix() == other.to_fix()
    }
}

impl<F: MappableFrameRef + 'static> Eq for Mu<F> where F::Frame<()>: Eq {}

impl<F: MappableFrameRef + 'static> PartialOrd for Mu<F>
where
    F::Frame<()>: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_fix().partial_cmp(&other.to_fix())
    }
}

impl<F: MappableFrameRef + 'static> Ord for Mu<F>
where
    F::Frame<()>: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_fix().cmp(&other.to_fix())
    }
}

impl<F: MappableFrameRef + 'static> Hash for Mu<F>
where
    F::Frame<()>: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_fix().hash(state)
    }
}

impl<F: MappableFrameRef + 'static> Debug for Mu<F>
where
    for<'a> F::Frame<&'a dyn Debug>: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FromFix").field(&self.to_fix()).finish()
    }
}
