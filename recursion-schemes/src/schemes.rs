//! The recursion schemes themselves. Everything that traverses a structure runs on the stack
//! machine from [`crate::expand_and_collapse`], so recursion depth is bounded by the heap
//! rather than by the call stack.

mod folds;
mod refolds;
mod unfolds;

pub use folds::{cata, gcata, ghisto, gpara, gzygo, histo, lambek, para, prepro, try_cata, zygo};
pub use refolds::{ghylo, hylo, try_hylo};
pub use unfolds::{ana, apo, colambek, gana, gapo, postpro, try_ana};

pub use folds::cata as fold;
pub use folds::gcata as gfold;
pub use refolds::ghylo as grefold;
pub use refolds::hylo as refold;
pub use unfolds::ana as unfold;
pub use unfolds::gana as gunfold;
