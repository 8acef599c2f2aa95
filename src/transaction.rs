// The state of the search and its undo log
//
// The matrix never changes during a search. What changes is which columns
// still need to be covered and which rows can still be chosen. A column is
// active until a chosen row covers it. A row is alive until a chosen row
// shares a column with it, it is chosen itself, or it is ruled out by the
// current path in some other way.
//
// For every active column, `live` counts the alive rows covering it.
// That count drives the minimum remaining values heuristic and tells
// the search when a column can no longer be covered.
//
// Choosing a row (reduce) deactivates its columns and kills every alive row
// that covers one of them. Each killed row stops counting towards its other
// columns. All of this is written down in a `Transaction` which restore
// replays backwards.

use crate::helper::{ColumnArray, ColumnId, Contradiction, RowArray, RowId};
use crate::matrix::Matrix;

/// Undo record of a single reduce.
#[derive(Debug)]
#[must_use = "a transaction must be restored or deliberately committed"]
pub(crate) struct Transaction {
    /// The chosen row
    row: RowId,
    /// Columns that were deactivated
    covered: Vec<ColumnId>,
    /// Rows that were killed, together with the active columns
    /// whose live count they no longer contribute to
    eliminated: Vec<(RowId, Vec<ColumnId>)>,
}

impl Transaction {
    /// Keep the effects of the reduce for good.
    #[inline]
    pub fn commit(self) {}
}

/// The column index: active columns, alive rows, live counts
/// and the partial solution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ColumnIndex {
    active: ColumnArray<bool>,
    live: ColumnArray<usize>,
    alive: RowArray<bool>,
    n_active: usize,
    partial: Vec<RowId>,
    // scratch space, all false between calls
    in_chosen_row: ColumnArray<bool>,
}

impl ColumnIndex {
    pub fn new(matrix: &Matrix<'_>) -> Self {
        let n_columns = matrix.n_columns();
        let live = (0..n_columns)
            .map(|column| matrix.rows_of(ColumnId(column)).len())
            .collect();

        ColumnIndex {
            active: ColumnArray::filled(true, n_columns),
            live: ColumnArray(live),
            alive: RowArray::filled(true, matrix.n_rows()),
            n_active: n_columns,
            partial: Vec::new(),
            in_chosen_row: ColumnArray::filled(false, n_columns),
        }
    }

    /// True when every column has been covered, i.e. the partial solution is complete.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_active == 0
    }

    #[inline(always)]
    pub fn is_alive(&self, row: RowId) -> bool {
        self.alive[row]
    }

    /// Number of rows that can still cover `column`.
    #[inline(always)]
    pub fn live(&self, column: ColumnId) -> usize {
        self.live[column]
    }

    /// Rows chosen so far, in the order they were chosen.
    #[inline]
    pub fn partial(&self) -> &[RowId] {
        &self.partial
    }

    /// The active column with the fewest live rows.
    /// Ties go to the lowest column id. `None` when no column is active.
    pub fn select_column(&self) -> Option<ColumnId> {
        let mut best: Option<(usize, ColumnId)> = None;
        for (idx, (&active, &live)) in self.active.iter().zip(self.live.iter()).enumerate() {
            if !active {
                continue;
            }
            if best.map_or(true, |(min_live, _)| live < min_live) {
                best = Some((live, ColumnId(idx)));
                // can't do better than impossible
                if live == 0 {
                    break;
                }
            }
        }
        best.map(|(_, column)| column)
    }

    /// Choose `row`, unless one of its columns has already been covered.
    ///
    /// Nothing is modified when this fails.
    pub fn try_reduce(&mut self, matrix: &Matrix<'_>, row: RowId) -> Result<Transaction, Contradiction> {
        if matrix.columns_of(row).iter().any(|&column| !self.active[column]) {
            return Err(Contradiction);
        }
        Ok(self.reduce(matrix, row))
    }

    /// Choose `row`. All of its columns must be active.
    pub fn reduce(&mut self, matrix: &Matrix<'_>, row: RowId) -> Transaction {
        let columns = matrix.columns_of(row);
        for &column in columns {
            debug_assert!(self.active[column], "reduce on covered column {:?}", column);
            self.in_chosen_row[column] = true;
        }

        let mut transaction = Transaction {
            row,
            covered: Vec::with_capacity(columns.len()),
            eliminated: Vec::new(),
        };

        for &column in columns {
            for &conflicting_row in matrix.rows_of(column) {
                // dead rows were either killed earlier or already handled in this reduce
                if !self.alive[conflicting_row] {
                    continue;
                }
                self.alive[conflicting_row] = false;

                let mut removed_from = Vec::new();
                for &other_column in matrix.columns_of(conflicting_row) {
                    if self.in_chosen_row[other_column] {
                        continue;
                    }
                    debug_assert!(self.active[other_column]);
                    self.live[other_column] -= 1;
                    removed_from.push(other_column);
                }
                transaction.eliminated.push((conflicting_row, removed_from));
            }

            self.active[column] = false;
            self.n_active -= 1;
            transaction.covered.push(column);
        }

        for &column in columns {
            self.in_chosen_row[column] = false;
        }
        self.partial.push(row);
        transaction
    }

    /// Undo `transaction`. It must be the most recent one not yet undone.
    pub fn restore(&mut self, transaction: Transaction) {
        let Transaction { row, covered, eliminated } = transaction;

        for column in covered.into_iter().rev() {
            debug_assert!(!self.active[column]);
            self.active[column] = true;
            self.n_active += 1;
        }
        for (eliminated_row, removed_from) in eliminated.into_iter().rev() {
            for column in removed_from {
                self.live[column] += 1;
            }
            self.alive[eliminated_row] = true;
        }

        let last = self.partial.pop();
        debug_assert_eq!(last, Some(row), "transactions restored out of order");
    }
}
