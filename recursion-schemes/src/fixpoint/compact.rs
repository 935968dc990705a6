use std::fmt::{self, Debug};

use crate::fixpoint::fix::Fix;
use crate::frame::{peel, MappableFrame, MappableFrameRef};
use crate::recursive::collapse::Collapsible;

/// A recursive value flattened into its layers, children first (post-order), with every
/// recursive position erased.
///
/// Since `map_frame` visits recursive positions in a fixed order, the number of `()` holes in
/// each layer is enough to rebuild the tree: a layer's children are the values built just
/// before it.
pub struct Compact<F: MappableFrame>(Vec<F::Frame<()>>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompactError {
    #[error("compact encoding holds no layers")]
    Empty,
    #[error("layer {index} needs {expected} children but only {available} are available")]
    MissingChildren {
        index: usize,
        expected: usize,
        available: usize,
    },
    #[error("compact encoding holds {roots} separate roots")]
    Disconnected { roots: usize },
}

impl<F: MappableFrame> Compact<F> {
    /// Flatten any collapsible value
    pub fn new<T: Collapsible<FrameToken = F>>(t: T) -> Self {
        let mut layers = Vec::new();
        t.collapse_frames(|layer: F::Frame<()>| layers.push(layer));
        Compact(layers)
    }

    /// Wrap layers that are already in children-first order. They are only checked by
    /// [`Compact::into_fix`].
    pub fn from_layers(layers: Vec<F::Frame<()>>) -> Self {
        Compact(layers)
    }

    pub fn layers(&self) -> &[F::Frame<()>] {
        &self.0
    }

    pub fn into_layers(self) -> Vec<F::Frame<()>> {
        self.0
    }
}

impl<F: MappableFrameRef> Compact<F> {
    pub fn from_fix(fix: &Fix<F>) -> Self {
        Compact::new(fix)
    }

    /// Rebuild the tree, failing if the layers do not describe exactly one.
    pub fn into_fix(self) -> Result<Fix<F>, CompactError> {
        if self.0.is_empty() {
            return Err(rejected(CompactError::Empty));
        }

        let mut built: Vec<Fix<F>> = Vec::new();
        for (index, shape) in self.0.into_iter().enumerate() {
            let expected = peel::<F, ()>(&shape).1.len();
            if expected > built.len() {
                return Err(rejected(CompactError::MissingChildren {
                    index,
                    expected,
                    available: built.len(),
                }));
            }

            let mut children = built.split_off(built.len() - expected).into_iter();
            let layer = F::map_frame(shape, |()| children.next().unwrap());
            built.push(Fix::new(layer));
        }

        match built.len() {
            1 => Ok(built.pop().unwrap()),
            roots => Err(rejected(CompactError::Disconnected { roots })),
        }
    }
}

fn rejected(err: CompactError) -> CompactError {
    #[cfg(feature = "tracing")]
    tracing::debug!(%err, "rejected compact encoding");
    err
}

impl<F: MappableFrame> Clone for Compact<F>
where
    F::Frame<()>: Clone,
{
    fn clone(&self) -> Self {
        Compact(self.0.clone())
    }
}

impl<F: MappableFrame> PartialEq for Compact<F>
where
    F::Frame<()>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<F: MappableFrame> Debug for Compact<F>
where
    F::Frame<()>: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Compact").field(&self.0).finish()
    }
}

#[cfg(feature = "serde")]
mod serialize {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Compact;
    use crate::fixpoint::{Fix, Mu, Nu};
    use crate::frame::{MappableFrame, MappableFrameRef};

    // Mu and Nu are tagged so they never decode as a plain Fix by accident
    #[derive(Serialize, Deserialize)]
    #[serde(rename = "FromFix")]
    struct FromFix<T>(T);

    impl<F: MappableFrame> Serialize for Compact<F>
    where
        F::Frame<()>: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.0.serialize(serializer)
        }
    }

    impl<'de, F: MappableFrame> Deserialize<'de> for Compact<F>
    where
        F::Frame<()>: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Vec::deserialize(deserializer).map(Compact)
        }
    }

    impl<F: MappableFrameRef> Serialize for Fix<F>
    where
        F::Frame<()>: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Compact::from_fix(self).serialize(serializer)
        }
    }

    impl<'de, F: MappableFrameRef> Deserialize<'de> for Fix<F>
    where
        F::Frame<()>: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Compact::<F>::deserialize(deserializer)?
                .into_fix()
                .map_err(D::Error::custom)
        }
    }

    impl<F: MappableFrameRef + 'static> Serialize for Mu<F>
    where
        F::Frame<()>: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            FromFix(self.to_fix()).serialize(serializer)
        }
    }

    impl<'de, F: MappableFrameRef + 'static> Deserialize<'de> for Mu<F>
    where
        F::Frame<()>: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let FromFix(fix) = FromFix::<Fix<F>>::deserialize(deserializer)?;
            Ok(Mu::from_fix(fix))
        }
    }

    impl<F: MappableFrameRef + 'static> Serialize for Nu<F>
    where
        F::Frame<()>: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            FromFix(self.to_fix()).serialize(serializer)
        }
    }

    impl<'de, F: MappableFrameRef + 'static> Deserialize<'de> for Nu<F>
    where
        F::Frame<()>: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let FromFix(fix) = FromFix::<Fix<F>>::deserialize(deserializer)?;
            Ok(Nu::from_fix(fix))
        }
    }
}
