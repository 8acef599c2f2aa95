#![warn(missing_docs)]
//! The Exact Cover library
//!
//! ## Overview
//!
//! Given a universe of elements and a collection of subsets of it, an exact
//! cover is a selection of subsets such that every element of the universe is
//! contained in exactly one of them. This library finds all of them, or just a
//! few, or only counts them.
//!
//! The search is a depth first backtracking search with constraint propagation:
//! choosing a subset removes every other subset that shares an element with it,
//! and the element with the fewest remaining subsets is always branched on first.
//!
//! Problems like sudoku or polyomino tilings can be expressed as exact cover
//! problems. A sudoku solver built on this library is available as [`Sudoku`].
//!
//! ## Example
//!
//! ```
//! use exact_cover::{solve, Options, Solutions};
//!
//! let universe = 1..=7;
//! let subsets = vec![
//!     ("A", vec![1, 4, 7]),
//!     ("B", vec![1, 4]),
//!     ("C", vec![4, 5, 7]),
//!     ("D", vec![3, 5, 6]),
//!     ("E", vec![2, 3, 6, 7]),
//!     ("F", vec![2, 7]),
//!     ("G", vec![3, 5, 6]),
//! ];
//!
//! // every solution lists its subsets in the order they were given
//! let solutions = solve(universe.clone(), subsets.clone(), &Options::new()).unwrap();
//! assert_eq!(solutions, Solutions::List(vec![vec!["B", "D", "F"], vec!["B", "F", "G"]]));
//!
//! // force "G" into the solution and only count
//! let options = Options::new().preseed(vec!["G"]).count(true);
//! assert_eq!(solve(universe, subsets, &options).unwrap(), Solutions::Count(1));
//! ```
//!
//! Subsets may only contain elements of the universe:
//!
//! ```
//! use exact_cover::{solve, Error, Options};
//!
//! let result = solve(1..=3, vec![('A', vec![1, 2]), ('B', vec![3, 10])], &Options::new());
//! assert_eq!(result, Err(Error::UnknownColumnInRow { column: 10, row: 'B' }));
//! ```

mod board;
mod errors;
mod helper;
mod matrix;
mod options;
pub mod parse_errors;
mod problem;
mod solver;
mod transaction;

use std::hash::Hash;

pub use crate::board::{Candidate, Constraint, Sudoku};
pub use crate::errors::{Error, FromBytesError, FromBytesSliceError};
pub use crate::options::{Limit, Options};
pub use crate::problem::Problem;
pub use crate::solver::Solutions;

/// Solve the exact cover problem given by `universe` and `subsets`.
///
/// This is [`Problem::new`] followed by [`Problem::solve_with`].
/// Randomization uses the thread local RNG. Use [`Problem::solve_with_rng`]
/// for reproducible randomized results.
pub fn solve<C, R, U, S, I>(universe: U, subsets: S, options: &Options<R>) -> Result<Solutions<R>, Error<C, R>>
where
    C: Clone + Eq + Hash,
    R: Clone + Eq + Hash,
    U: IntoIterator<Item = C>,
    S: IntoIterator<Item = (R, I)>,
    I: IntoIterator<Item = C>,
{
    Problem::new(universe, subsets)?.solve_with(options)
}
