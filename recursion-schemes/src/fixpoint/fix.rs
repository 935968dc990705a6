use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

use crate::frame::{peel, MappableFrame, MappableFrameRef};
use crate::recursive::collapse::Collapsible;
use crate::recursive::expand::Expandable;
use crate::recursive::HasRecursiveFrame;

/// heap allocated fix point of some frame: every layer is materialized
///
/// Comparison and hashing treat a value as the pre-order sequence of its layers with the
/// recursive positions erased (`F::Frame<()>`), and never use the call stack to descend.
/// Dropping takes a value apart one layer at a time in the same way.
///
/// # Stack usage
///
/// `Debug` output nests one level per layer, so rendering a value recurses to its depth.
pub struct Fix<F: MappableFrame>(Option<Box<F::Frame<Fix<F>>>>);

impl<F: MappableFrame> Fix<F> {
    pub fn new(layer: F::Frame<Self>) -> Self {
        Self(Some(Box::new(layer)))
    }

    pub fn as_frame(&self) -> &F::Frame<Self> {
        // only emptied by `into_frame` and `drop`, which both consume the value
        self.0.as_deref().unwrap()
    }
}

impl<F: MappableFrame> Drop for Fix<F> {
    fn drop(&mut self) {
        let mut layers: Vec<F::Frame<Fix<F>>> = Vec::new();
        layers.extend(self.0.take().map(|layer| *layer));
        while let Some(layer) = layers.pop() {
            F::map_frame(layer, |mut child: Fix<F>| {
                layers.extend(child.0.take().map(|layer| *layer))
            });
        }
    }
}

impl<F: MappableFrame> HasRecursiveFrame for Fix<F> {
    type FrameToken = F;
}

impl<F: MappableFrame> Collapsible for Fix<F> {
    fn into_frame(mut self) -> F::Frame<Self> {
        *self.0.take().unwrap()
    }
}

impl<F: MappableFrame> Expandable for Fix<F> {
    fn from_frame(val: F::Frame<Self>) -> Self {
        Fix::new(val)
    }
}

impl<'a, F: MappableFrameRef> HasRecursiveFrame for &'a Fix<F> {
    type FrameToken = F;
}

impl<'a, F: MappableFrameRef> Collapsible for &'a Fix<F> {
    fn into_frame(self) -> F::Frame<Self> {
        F::map_frame_ref(self.as_frame(), |child| child)
    }
}

impl<F: MappableFrameRef> Clone for Fix<F> {
    fn clone(&self) -> Self {
        self.collapse_frames(Fix::new)
    }
}

impl<F: MappableFrameRef> Fix<F> {
    // walks both values in lockstep, pre-order, until `visit` returns a verdict
    fn zip_layers<R>(
        &self,
        other: &Self,
        mut visit: impl FnMut(&F::Frame<()>, &F::Frame<()>) -> Option<R>,
    ) -> Option<R> {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            let (left_shape, left_children) = peel::<F, Self>(left.as_frame());
            let (right_shape, right_children) = peel::<F, Self>(right.as_frame());
            if let Some(verdict) = visit(&left_shape, &right_shape) {
                return Some(verdict);
            }
            stack.extend(left_children.into_iter().zip(right_children).rev());
        }
        None
    }
}

impl<F: MappableFrameRef> PartialEq for Fix<F>
where
    F::Frame<()>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.zip_layers(other, |l, r| (l != r).then_some(())).is_none()
    }
}

impl<F: MappableFrameRef> Eq for Fix<F> where F::Frame<()>: Eq {}

impl<F: MappableFrameRef> PartialOrd for Fix<F>
where
    F::Frame<()>: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let verdict = self.zip_layers(other, |l, r| match l.partial_cmp(r) {
            Some(Ordering::Equal) => None,
            unequal => Some(unequal),
        });
        verdict.unwrap_or(Some(Ordering::Equal))
    }
}

impl<F: MappableFrameRef> Ord for Fix<F>
where
    F::Frame<()>: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.zip_layers(other, |l, r| match l.cmp(r) {
            Ordering::Equal => None,
            unequal => Some(unequal),
        })
        .unwrap_or(Ordering::Equal)
    }
}

impl<F: MappableFrameRef> Hash for Fix<F>
where
    F::Frame<()>: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            let (shape, children) = peel::<F, Self>(node.as_frame());
            shape.hash(state);
            stack.extend(children.into_iter().rev());
        }
    }
}

impl<F: MappableFrameRef> Debug for Fix<F>
where
    for<'a> F::Frame<&'a dyn Debug>: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layer = F::map_frame_ref(self.as_frame(), |child| child as &dyn Debug);
        f.debug_tuple("Fix").field(&layer).finish()
    }
}
