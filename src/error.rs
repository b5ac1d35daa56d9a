//! All kinds of errors in this crate.

use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("item index {index} is out of range for a universe of {n_items} items")]
    ItemOutOfRange { index: usize, n_items: usize },
    #[error("children passed to `node` must share one level, got {lhs} and {rhs}")]
    LevelMismatch { lhs: usize, rhs: usize },
    #[error("`node` requires children at level >= 4, got level {0}")]
    LevelTooLow(usize),
    #[error("tile ASCII must contain at least 64 cell characters ('0' or '1'), got {0}")]
    ShortTileAscii(usize),
}
