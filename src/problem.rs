use std::collections::hash_map::{Entry, HashMap};
use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::Error;
use crate::helper::{ColumnArray, ColumnId};
use crate::matrix::Matrix;
use crate::options::{Limit, Options};
use crate::solver::{ExactCoverSolver, Solutions};

/// A validated exact cover problem: a universe of elements and a collection of
/// subsets of it.
///
/// The problem keeps its own copy of the input and can be solved any number
/// of times with different [`Options`].
///
/// ```
/// use exact_cover::Problem;
///
/// let problem = Problem::new(
///     1..=7,
///     vec![
///         ('A', vec![1, 4, 7]),
///         ('B', vec![1, 4]),
///         ('C', vec![4, 5, 7]),
///         ('D', vec![3, 5, 6]),
///         ('E', vec![2, 3, 6, 7]),
///         ('F', vec![2, 7]),
///     ],
/// ).unwrap();
///
/// assert_eq!(problem.solve_all(), vec![vec!['B', 'D', 'F']]);
/// ```
#[derive(Clone, Debug)]
pub struct Problem<C, R> {
    /// Deduplicated universe, in first occurrence order
    columns: Vec<C>,
    column_ids: HashMap<C, ColumnId>,
    /// Subset identifiers in caller order
    rows: Vec<R>,
    row_positions: HashMap<R, usize>,
    /// Deduplicated columns of each subset, indexed like `rows`
    subsets: Vec<Vec<ColumnId>>,
    /// Original elements of each subset, indexed like `rows`
    elements: Vec<Vec<C>>,
}

impl<C, R> Problem<C, R>
where
    C: Clone + Eq + Hash,
    R: Clone + Eq + Hash,
{
    /// Validate the input and build the problem.
    ///
    /// Duplicate elements of the universe and duplicate elements inside a
    /// subset are ignored. If a subset identifier appears more than once,
    /// the last subset given for it wins but it keeps the position of its
    /// first appearance.
    ///
    /// Fails with [`Error::UnknownColumnInRow`] if a subset contains an element
    /// that is not in the universe.
    pub fn new<U, S, I>(universe: U, subsets: S) -> Result<Self, Error<C, R>>
    where
        U: IntoIterator<Item = C>,
        S: IntoIterator<Item = (R, I)>,
        I: IntoIterator<Item = C>,
    {
        let mut columns = Vec::new();
        let mut column_ids = HashMap::new();
        for element in universe {
            if let Entry::Vacant(entry) = column_ids.entry(element.clone()) {
                entry.insert(ColumnId(columns.len()));
                columns.push(element);
            }
        }

        let mut rows = Vec::new();
        let mut row_positions = HashMap::new();
        let mut raw_subsets: Vec<Vec<C>> = Vec::new();
        for (row, elements) in subsets {
            let elements = elements.into_iter().collect();
            match row_positions.entry(row.clone()) {
                Entry::Occupied(entry) => raw_subsets[*entry.get()] = elements,
                Entry::Vacant(entry) => {
                    entry.insert(rows.len());
                    rows.push(row);
                    raw_subsets.push(elements);
                }
            }
        }

        let mut subsets = Vec::with_capacity(raw_subsets.len());
        let mut elements = Vec::with_capacity(raw_subsets.len());
        // scratch space, all false between subsets
        let mut seen = ColumnArray::filled(false, columns.len());
        for (row, raw) in rows.iter().zip(raw_subsets) {
            let mut ids = Vec::with_capacity(raw.len());
            let mut kept = Vec::with_capacity(raw.len());
            for element in raw {
                let id = match column_ids.get(&element) {
                    Some(&id) => id,
                    None => {
                        return Err(Error::UnknownColumnInRow {
                            column: element,
                            row: row.clone(),
                        })
                    }
                };
                if !seen[id] {
                    seen[id] = true;
                    ids.push(id);
                    kept.push(element);
                }
            }
            for &id in &ids {
                seen[id] = false;
            }
            subsets.push(ids);
            elements.push(kept);
        }

        Ok(Problem {
            columns,
            column_ids,
            rows,
            row_positions,
            subsets,
            elements,
        })
    }

    /// Number of distinct universe elements
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of distinct subsets
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// The universe without duplicates, in first occurrence order
    pub fn columns(&self) -> &[C] {
        &self.columns
    }

    /// The subset identifiers, in the order they were given
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// The elements of subset `row`, without duplicates
    pub fn row(&self, row: &R) -> Option<&[C]> {
        self.row_positions.get(row).map(|&pos| &self.elements[pos][..])
    }

    /// Whether `element` is part of the universe
    pub fn contains_column(&self, element: &C) -> bool {
        self.column_ids.contains_key(element)
    }

    /// Find all solutions.
    pub fn solve_all(&self) -> Vec<Vec<R>> {
        self.solve_at_most(0)
    }

    /// Find the first solution, if any exists.
    pub fn solve_one(&self) -> Option<Vec<R>> {
        self.solve_at_most(1).pop()
    }

    /// Find and return up to `limit` solutions. A limit of 0 means no limit.
    pub fn solve_at_most(&self, limit: usize) -> Vec<Vec<R>> {
        self.run(Limit::from(limit), false, &[], self.caller_order())
            .into_vec()
            .unwrap_or_default()
    }

    /// Count all solutions.
    pub fn count_all(&self) -> usize {
        self.count_at_most(0)
    }

    /// Count solutions, stopping at `limit`. A limit of 0 means no limit.
    pub fn count_at_most(&self, limit: usize) -> usize {
        self.run(Limit::from(limit), true, &[], self.caller_order()).len()
    }

    /// Solve with the given options.
    ///
    /// Fails with [`Error::UnknownPreseedRow`] if the preseed names a subset
    /// that does not exist. A preseed whose subsets overlap is not an error,
    /// it just has no solutions.
    pub fn solve_with(&self, options: &Options<R>) -> Result<Solutions<R>, Error<C, R>> {
        self.solve_with_rng(options, &mut rand::thread_rng())
    }

    /// Like [`solve_with`](Self::solve_with) but randomizes with `rng`,
    /// which makes randomized searches reproducible.
    pub fn solve_with_rng<G>(&self, options: &Options<R>, rng: &mut G) -> Result<Solutions<R>, Error<C, R>>
    where
        G: Rng + ?Sized,
    {
        let mut preseed = Vec::with_capacity(options.preseed.len());
        let mut chosen = vec![false; self.rows.len()];
        for row in &options.preseed {
            match self.row_positions.get(row) {
                Some(&pos) => {
                    if !chosen[pos] {
                        chosen[pos] = true;
                        preseed.push(pos);
                    }
                }
                None => return Err(Error::UnknownPreseedRow { row: row.clone() }),
            }
        }

        let mut order = self.caller_order();
        if options.randomize {
            order.shuffle(rng);
        }

        Ok(self.run(options.limit, options.count, &preseed, order))
    }

    fn caller_order(&self) -> Vec<usize> {
        (0..self.rows.len()).collect()
    }

    // `preseed` and `order` hold caller order positions
    fn run(&self, limit: Limit, count: bool, preseed: &[usize], order: Vec<usize>) -> Solutions<R> {
        let matrix = Matrix::build(self.columns.len(), &self.subsets, &order);
        let mut solver = ExactCoverSolver::new(&matrix, limit, count);

        let preseed = preseed.iter().map(|&pos| matrix.row_at(pos)).collect::<Vec<_>>();
        if solver.preseed(&preseed).is_err() {
            return if count {
                Solutions::Count(0)
            } else {
                Solutions::List(vec![])
            };
        }

        solver.solve().into_solutions(&self.rows)
    }

    /// Check that `solution` is an exact cover: its subsets are pairwise
    /// disjoint and together contain every element of the universe.
    /// Unknown subsets make the check fail.
    pub fn is_exact_cover(&self, solution: &[R]) -> bool {
        let mut covered = vec![false; self.columns.len()];
        for row in solution {
            let pos = match self.row_positions.get(row) {
                Some(&pos) => pos,
                None => return false,
            };
            for id in &self.subsets[pos] {
                if covered[id.as_index()] {
                    return false;
                }
                covered[id.as_index()] = true;
            }
        }
        covered.into_iter().all(|covered| covered)
    }
}
