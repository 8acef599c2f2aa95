use std::ops::ControlFlow;

use crate::helper::{Contradiction, RowId};
use crate::matrix::Matrix;
use crate::options::Limit;
use crate::transaction::{ColumnIndex, Transaction};

/// The result of a search.
///
/// When the solver finds a solution it can save it or just count.
/// Every solution lists its subsets in the order they were given to the
/// [`Problem`](crate::Problem), regardless of randomization or the order
/// in which they were chosen.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Solutions<R> {
    /// Number of solutions found
    Count(usize),
    /// The solutions found
    List(Vec<Vec<R>>),
}

impl<R> Solutions<R> {
    /// Number of solutions found
    pub fn len(&self) -> usize {
        match self {
            Solutions::Count(len) => *len,
            Solutions::List(list) => list.len(),
        }
    }

    /// No solution found
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The solutions, `None` if they were only counted
    pub fn into_vec(self) -> Option<Vec<Vec<R>>> {
        match self {
            Solutions::List(list) => Some(list),
            Solutions::Count(_) => None,
        }
    }

    /// Alias for [`len`](Self::len)
    pub fn count(&self) -> usize {
        self.len()
    }
}

// What gets stored while searching. Solutions are kept as caller order
// positions and only turned into row identifiers once the search is done.
#[derive(Debug)]
pub(crate) enum Found {
    Count(usize),
    Positions(Vec<Vec<usize>>),
}

impl Found {
    pub fn new(count: bool) -> Self {
        if count {
            Found::Count(0)
        } else {
            Found::Positions(vec![])
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Found::Count(len) => *len,
            Found::Positions(list) => list.len(),
        }
    }

    pub fn into_solutions<R: Clone>(self, rows: &[R]) -> Solutions<R> {
        match self {
            Found::Count(count) => Solutions::Count(count),
            Found::Positions(list) => Solutions::List(
                list.into_iter()
                    .map(|positions| positions.into_iter().map(|pos| rows[pos].clone()).collect())
                    .collect(),
            ),
        }
    }
}

/// Depth first search over one matrix.
pub(crate) struct ExactCoverSolver<'m, 'p> {
    matrix: &'m Matrix<'p>,
    index: ColumnIndex,
    limit: Limit,
    found: Found,
}

impl<'m, 'p> ExactCoverSolver<'m, 'p> {
    pub fn new(matrix: &'m Matrix<'p>, limit: Limit, count: bool) -> Self {
        ExactCoverSolver {
            matrix,
            index: ColumnIndex::new(matrix),
            limit,
            found: Found::new(count),
        }
    }

    /// Force `rows` into the solution.
    ///
    /// Fails when two of them share a column. The partial state is left as is
    /// in that case, the solver must not be used for searching anymore.
    pub fn preseed(&mut self, rows: &[RowId]) -> Result<(), Contradiction> {
        for &row in rows {
            self.index.try_reduce(self.matrix, row).map(Transaction::commit)?;
        }
        Ok(())
    }

    /// Find solutions until the limit is hit or the search space is exhausted.
    pub fn solve(mut self) -> Found {
        // stopping at the limit and exhausting the search end it the same way
        let _ = self.search();
        self.found
    }

    // Break(()) means the limit has been reached, which must stop the whole search.
    // In that case the state is not restored, nobody looks at it anymore.
    fn search(&mut self) -> ControlFlow<()> {
        if self.index.is_empty() {
            return self.record_solution();
        }

        let column = match self.index.select_column() {
            Some(column) if self.index.live(column) > 0 => column,
            // some column can't be covered anymore, dead end
            _ => return ControlFlow::Continue(()),
        };

        let matrix = self.matrix;
        for &row in matrix.rows_of(column) {
            if !self.index.is_alive(row) {
                continue;
            }
            let transaction = self.index.reduce(matrix, row);
            if let ControlFlow::Break(()) = self.search() {
                transaction.commit();
                return ControlFlow::Break(());
            }
            self.index.restore(transaction);
        }
        ControlFlow::Continue(())
    }

    fn record_solution(&mut self) -> ControlFlow<()> {
        debug_assert!(
            !self.limit.is_reached(self.found.len()),
            "too many solutions: limit: {:?}, len: {}",
            self.limit,
            self.found.len()
        );
        match &mut self.found {
            Found::Count(count) => *count += 1,
            Found::Positions(list) => list.push(self.matrix.positions_of(self.index.partial())),
        }

        if self.limit.is_reached(self.found.len()) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
