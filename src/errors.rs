#[cfg(doc)]
use crate::{Options, Problem};

/// Input validation errors of [`Problem::new`] and of the preseed in [`Options`].
///
/// Both are raised before the search starts. Running out of solutions, a
/// contradictory preseed or a universe element that no subset covers are
/// regular outcomes and are reported as an empty result instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error<C, R> {
    /// A subset contains an element that is not part of the universe.
    #[error("element {column:?} in subset {row:?} is not in the universe")]
    UnknownColumnInRow {
        /// The element missing from the universe
        column: C,
        /// The subset containing it
        row: R,
    },
    /// The preseed names a subset that does not exist.
    #[error("element {row:?} in preseed is not in the subsets")]
    UnknownPreseedRow {
        /// The unknown subset identifier
        row: R,
    },
}

/// Error for [`Sudoku::from_bytes`](crate::Sudoku::from_bytes)
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::from_bytes_slice`](crate::Sudoku::from_bytes_slice)
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(FromBytesError),
}
