//! Fixed points of a frame. [`Fix`] materializes every layer, [`Mu`] is a value that knows how
//! to fold itself, and [`Nu`] is a seed plus the coalgebra that unfolds it, so it may be
//! infinite. [`Compact`] is the flat encoding used for serialization.

mod compact;
mod fix;
mod mu;
mod nu;

pub use compact::{Compact, CompactError};
pub use fix::Fix;
pub use mu::{Church, Mu};
pub use nu::{Nu, Unfold};
