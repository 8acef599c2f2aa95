// A collection of internal helper types
// like vectors that can only be indexed by the right id structs

use std::ops::{Deref, Index, IndexMut};

/// Returned when a row is applied on top of a choice it conflicts with.
/// This is a normal outcome for preseeding, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Contradiction;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Dense id of a universe element.
/// The id doubles as the element's sequence number for tie-breaks.
pub(crate) struct ColumnId(pub usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Dense id of a subset, assigned in the order rows are visited while building
/// the matrix (caller order, or shuffled).
pub(crate) struct RowId(pub usize);

impl ColumnId {
    #[inline(always)]
    pub fn as_index(self) -> usize {
        self.0
    }
}

impl RowId {
    #[inline(always)]
    pub fn as_index(self) -> usize {
        self.0
    }
}

///////////////////////////////
#[derive(Clone, Debug, PartialEq, Eq)]
/// Container with one slot for each column.
pub(crate) struct ColumnArray<T>(pub Vec<T>);

impl<T: Clone> ColumnArray<T> {
    pub fn filled(value: T, len: usize) -> Self {
        ColumnArray(vec![value; len])
    }
}

impl<T> Deref for ColumnArray<T> {
    type Target = [T];
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Index<ColumnId> for ColumnArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: ColumnId) -> &Self::Output {
        &self.0[idx.as_index()]
    }
}

impl<T> IndexMut<ColumnId> for ColumnArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: ColumnId) -> &mut Self::Output {
        &mut self.0[idx.as_index()]
    }
}

///////////////////////////////
#[derive(Clone, Debug, PartialEq, Eq)]
/// Container with one slot for each row.
pub(crate) struct RowArray<T>(pub Vec<T>);

impl<T: Clone> RowArray<T> {
    pub fn filled(value: T, len: usize) -> Self {
        RowArray(vec![value; len])
    }
}

impl<T> Deref for RowArray<T> {
    type Target = [T];
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Index<RowId> for RowArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: RowId) -> &Self::Output {
        &self.0[idx.as_index()]
    }
}

impl<T> IndexMut<RowId> for RowArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: RowId) -> &mut Self::Output {
        &mut self.0[idx.as_index()]
    }
}
