/// Represents a digit in a specific cell. These are the subsets of the
/// exact cover formulation of sudoku.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Cell number from 0..=80, left to right, top to bottom
    pub cell: u8,
    /// Digit from 1..=9
    pub digit: u8,
}

/// A requirement of a filled sudoku. These are the universe
/// elements of the exact cover formulation of sudoku.
///
/// There are a total of 729 (81 cells * 9 digits) candidates.
/// Every candidate satisfies 4 constraints
/// 1. a cell   needs to be filled               (81 cells, 1 digit each)
/// 2. a row    needs to have 1 of each digit (9 rows, 9 digits each)
/// 3. a column needs to have 1 of each digit (9 cols, 9 digits each)
/// 4. a block  needs to have 1 of each digit (9 blocks, 9 digits each)
///
/// For a total of 81*4 = 324 constraints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Constraint {
    Cell(u8),
    Row { row: u8, digit: u8 },
    Col { col: u8, digit: u8 },
    Block { block: u8, digit: u8 },
}

impl Candidate {
    /// Constructs a new candidate.
    ///
    /// # Panics
    ///
    /// panics if `cell >= 81` or `!(1..=9).contains(digit)`
    #[inline]
    pub fn new(cell: u8, digit: u8) -> Candidate {
        assert!(cell < 81);
        assert!(0 < digit && digit < 10);
        Candidate { cell, digit }
    }

    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        self.cell / 9
    }

    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        self.cell % 9
    }

    /// Block index from 0..=8, numbering from left to right, top to bottom
    #[inline]
    pub fn block(self) -> u8 {
        self.row() / 3 * 3 + self.col() / 3
    }

    /// The 4 constraints this candidate satisfies
    pub fn constraints(self) -> [Constraint; 4] {
        let digit = self.digit;
        [
            Constraint::Cell(self.cell),
            Constraint::Row { row: self.row(), digit },
            Constraint::Col { col: self.col(), digit },
            Constraint::Block { block: self.block(), digit },
        ]
    }

    /// Returns an iterator over all 729 candidates
    pub fn all() -> impl Iterator<Item = Candidate> {
        (0..81).flat_map(|cell| (1..10).map(move |digit| Candidate { cell, digit }))
    }

    /// Whether both candidates can't be in the same sudoku
    pub fn conflicts_with(self, other: Self) -> bool {
        self != other
            && self.constraints().iter().any(|constraint| other.constraints().contains(constraint))
    }
}

impl Constraint {
    /// Returns an iterator over all 324 constraints
    pub fn all() -> impl Iterator<Item = Constraint> {
        let cells = (0..81).map(Constraint::Cell);
        let houses = (0..9).flat_map(|house| {
            (1..10).flat_map(move |digit| {
                vec![
                    Constraint::Row { row: house, digit },
                    Constraint::Col { col: house, digit },
                    Constraint::Block { block: house, digit },
                ]
            })
        });
        cells.chain(houses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counts() {
        assert_eq!(Candidate::all().count(), 729);
        assert_eq!(Constraint::all().collect::<HashSet<_>>().len(), 324);
    }

    #[test]
    fn positions() {
        let candidate = Candidate::new(40, 5);
        assert_eq!(candidate.row(), 4);
        assert_eq!(candidate.col(), 4);
        assert_eq!(candidate.block(), 4);

        let candidate = Candidate::new(80, 9);
        assert_eq!((candidate.row(), candidate.col(), candidate.block()), (8, 8, 8));
    }

    #[test]
    fn conflicts() {
        let candidate = Candidate::new(0, 1);
        // same cell
        assert!(candidate.conflicts_with(Candidate::new(0, 2)));
        // same digit in row, col, block
        assert!(candidate.conflicts_with(Candidate::new(8, 1)));
        assert!(candidate.conflicts_with(Candidate::new(72, 1)));
        assert!(candidate.conflicts_with(Candidate::new(20, 1)));
        // different digit elsewhere
        assert!(!candidate.conflicts_with(Candidate::new(20, 2)));
        assert!(!candidate.conflicts_with(candidate));
    }
}
