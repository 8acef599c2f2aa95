use crate::helper::{ColumnArray, ColumnId, RowArray, RowId};

/// The sparse exact cover matrix used by one search.
///
/// Built fresh for every solve from the validated subsets of a
/// [`Problem`](crate::Problem). Rows get their [`RowId`] in visitation order,
/// which is either the caller's order or a shuffled one. Everything the search
/// iterates over (the candidate rows of a column, the rows it eliminates) is
/// kept sorted by that id, so the visitation order decides the order in which
/// solutions are found.
///
/// The matrix is read-only during the search, only the
/// [`ColumnIndex`](crate::transaction::ColumnIndex) changes.
#[derive(Debug)]
pub(crate) struct Matrix<'p> {
    /// Columns covered by each row. Borrowed from the problem.
    row_columns: RowArray<&'p [ColumnId]>,
    /// Rows covering each column, ascending by id.
    column_rows: ColumnArray<Vec<RowId>>,
    /// Position of each row in the caller's subset order.
    positions: RowArray<usize>,
    /// Inverse of `positions`.
    ids: Vec<RowId>,
}

impl<'p> Matrix<'p> {
    /// Index `subsets` (in caller order) visiting them in `order`.
    ///
    /// `order` must be a permutation of `0..subsets.len()`.
    pub fn build(n_columns: usize, subsets: &'p [Vec<ColumnId>], order: &[usize]) -> Self {
        debug_assert_eq!(subsets.len(), order.len());

        let mut row_columns = Vec::with_capacity(order.len());
        let mut column_rows = ColumnArray::filled(Vec::new(), n_columns);
        let mut ids = vec![RowId(0); order.len()];

        for (id, &position) in order.iter().enumerate() {
            let row = RowId(id);
            let columns = &subsets[position][..];
            for &column in columns {
                column_rows[column].push(row);
            }
            row_columns.push(columns);
            ids[position] = row;
        }

        Matrix {
            row_columns: RowArray(row_columns),
            column_rows,
            positions: RowArray(order.to_vec()),
            ids,
        }
    }

    #[inline]
    pub fn n_columns(&self) -> usize {
        self.column_rows.len()
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.row_columns.len()
    }

    /// Columns covered by `row`
    #[inline(always)]
    pub fn columns_of(&self, row: RowId) -> &'p [ColumnId] {
        self.row_columns[row]
    }

    /// All rows covering `column`, eliminated or not
    #[inline(always)]
    pub fn rows_of(&self, column: ColumnId) -> &[RowId] {
        &self.column_rows[column]
    }

    /// The row that sits at `position` in the caller's subset order
    #[inline]
    pub fn row_at(&self, position: usize) -> RowId {
        self.ids[position]
    }

    /// Caller order positions of `rows`, sorted
    pub fn positions_of(&self, rows: &[RowId]) -> Vec<usize> {
        let mut positions = rows.iter().map(|&row| self.positions[row]).collect::<Vec<_>>();
        positions.sort_unstable();
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subsets() -> Vec<Vec<ColumnId>> {
        vec![
            vec![ColumnId(0), ColumnId(1)],
            vec![ColumnId(1), ColumnId(2)],
            vec![],
            vec![ColumnId(2), ColumnId(0)],
        ]
    }

    #[test]
    fn build_in_caller_order() {
        let subsets = subsets();
        let matrix = Matrix::build(3, &subsets, &[0, 1, 2, 3]);

        assert_eq!(matrix.n_columns(), 3);
        assert_eq!(matrix.n_rows(), 4);
        assert_eq!(matrix.rows_of(ColumnId(0)), &[RowId(0), RowId(3)]);
        assert_eq!(matrix.rows_of(ColumnId(1)), &[RowId(0), RowId(1)]);
        assert_eq!(matrix.rows_of(ColumnId(2)), &[RowId(1), RowId(3)]);
        assert!(matrix.columns_of(RowId(2)).is_empty());
    }

    #[test]
    fn build_in_permuted_order() {
        let subsets = subsets();
        let matrix = Matrix::build(3, &subsets, &[3, 1, 0, 2]);

        // row ids follow the visitation order
        assert_eq!(matrix.rows_of(ColumnId(0)), &[RowId(0), RowId(2)]);
        assert_eq!(matrix.columns_of(RowId(0)), &[ColumnId(2), ColumnId(0)]);
        assert_eq!(matrix.row_at(3), RowId(0));
        assert_eq!(matrix.row_at(0), RowId(2));
        assert_eq!(matrix.positions_of(&[RowId(0), RowId(1), RowId(2)]), vec![0, 1, 3]);
    }
}
