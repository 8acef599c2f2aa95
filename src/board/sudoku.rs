use std::{fmt, iter};

use rand::Rng;

use crate::board::{Candidate, Constraint};
use crate::errors::{FromBytesError, FromBytesSliceError};
use crate::parse_errors::{InvalidEntry, LineParseError};
use crate::{Options, Problem, Solutions};

const N_CELLS: usize = 81;

/// A 9x9 sudoku grid, solved as an exact cover problem.
///
/// Cells are numbered 0..=80 from left to right, top to bottom. Empty cells are 0.
/// The clues are handed to the solver as preseed, so a sudoku whose clues
/// already conflict simply has no solution.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sudoku([u8; N_CELLS]);

// Every candidate with its 4 constraints. Building it takes a fraction of
// the time of any search on it.
fn exact_cover_problem() -> Problem<Constraint, Candidate> {
    Problem::new(
        Constraint::all(),
        Candidate::all().map(|candidate| (candidate, candidate.constraints())),
    )
    .expect("every constraint of a candidate is part of the universe")
}

impl Sudoku {
    /// Creates a sudoku from a byte array.
    /// All numbers must be below 10. Empty cells are denoted by 0, clues by the numbers 1-9.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Sudoku, FromBytesError> {
        match bytes.iter().all(|&byte| byte <= 9) {
            true => Ok(Sudoku(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Creates a sudoku from a byte slice.
    /// All numbers must be below 10. Empty cells are denoted by 0, clues by the numbers 1-9.
    /// The slice must be of length 81.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Sudoku::from_bytes(array).map_err(FromBytesSliceError::FromBytesError)
    }

    /// Reads a sudoku in the line format.
    ///
    /// ```text
    /// ..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.. optional comment
    /// ```
    ///
    /// Accepted digits are 1-9, empty cells can be '.', '_' or '0'.
    /// Anything after the 81st cell must be separated by a space or tab.
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0;
        for ch in s.chars() {
            if n_cells == N_CELLS {
                match ch {
                    ' ' | '\t' | '\r' | '\n' => break,
                    '1'..='9' | '.' | '_' | '0' => return Err(LineParseError::TooManyCells),
                    _ => return Err(LineParseError::MissingCommentDelimiter),
                }
            }
            match ch {
                '1'..='9' => grid[n_cells] = ch as u8 - b'0',
                '.' | '_' | '0' => {}
                ' ' | '\t' | '\r' | '\n' => return Err(LineParseError::NotEnoughCells(n_cells as u8)),
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: n_cells as u8,
                        ch,
                    }))
                }
            }
            n_cells += 1;
        }

        if n_cells != N_CELLS {
            return Err(LineParseError::NotEnoughCells(n_cells as u8));
        }
        Ok(Sudoku(grid))
    }

    /// Returns the cell contents, 0 for empty cells
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Returns the sudoku in the line format with '.' for empty cells
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&num| match num {
                0 => '.',
                num => (b'0' + num) as char,
            })
            .collect()
    }

    /// Returns an iterator over the cells, `None` for empty ones
    pub fn iter(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.0.iter().map(|&num| if num == 0 { None } else { Some(num) })
    }

    /// Number of filled cells
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// The filled cells as candidates
    pub fn clues(&self) -> impl Iterator<Item = Candidate> + '_ {
        (0..N_CELLS as u8)
            .zip(self.0.iter())
            .filter(|&(_, &digit)| digit != 0)
            .map(|(cell, &digit)| Candidate { cell, digit })
    }

    /// Check whether the sudoku is completely and correctly filled.
    pub fn is_solved(&self) -> bool {
        let candidates = self.clues().collect::<Vec<_>>();
        candidates.len() == N_CELLS && exact_cover_problem().is_exact_cover(&candidates)
    }

    /// Find a solution to the sudoku. If multiple solutions exist, it will not find them and just stop at the first.
    /// Return `None` if no solution exists.
    pub fn solve_one(self) -> Option<Sudoku> {
        self.solve_at_most(1).into_iter().next()
    }

    /// Solve sudoku and return solution if solution is unique.
    pub fn solve_unique(self) -> Option<Sudoku> {
        let mut solutions = self.solve_at_most(2);
        match solutions.len() {
            1 => solutions.pop(),
            _ => None,
        }
    }

    /// Solve sudoku and return the first `limit` solutions it finds. If less solutions exist, return only those.
    /// A limit of 0 returns every solution.
    pub fn solve_at_most(self, limit: usize) -> Vec<Sudoku> {
        let solutions = self.solve_with(Options::new().limit(limit), &mut rand::thread_rng());
        solutions
            .into_vec()
            .unwrap_or_default()
            .into_iter()
            .map(|candidates| candidates.into_iter().collect())
            .collect()
    }

    /// Counts number of solutions to sudoku up to `limit`.
    /// A limit of 0 counts every solution.
    pub fn count_at_most(self, limit: usize) -> usize {
        self.solve_with(Options::new().limit(limit).count(true), &mut rand::thread_rng())
            .len()
    }

    /// Generate a random, solved sudoku
    pub fn generate_filled() -> Sudoku {
        Sudoku::generate_filled_with_rng(&mut rand::thread_rng())
    }

    /// Generate a random, solved sudoku using `rng`
    pub fn generate_filled_with_rng<G: Rng + ?Sized>(rng: &mut G) -> Sudoku {
        let options = Options::new().limit(1).randomize(true);
        let solution = Sudoku([0; N_CELLS])
            .solve_with(options, rng)
            .into_vec()
            .and_then(|mut solutions| solutions.pop())
            .expect("the empty grid always has a solution");
        solution.into_iter().collect()
    }

    fn solve_with<G: Rng + ?Sized>(self, options: Options<Candidate>, rng: &mut G) -> Solutions<Candidate> {
        let options = options.preseed(self.clues());
        exact_cover_problem()
            .solve_with_rng(&options, rng)
            .expect("clues are always valid candidates")
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (cell, &num) in self.0.iter().enumerate() {
            match (cell / 9, cell % 9) {
                (_, 3) | (_, 6) => write!(f, " ")?,    // seperate blocks in columns
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate blocks in rows
                (0, 0) => {}
                (_, 0) => write!(f, "\n")?, // separate lines not between blocks
                _ => {}
            }
            match num {
                0 => write!(f, "_")?,
                num => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Sudoku({})", self.to_str_line())
    }
}

impl iter::FromIterator<Candidate> for Sudoku {
    fn from_iter<I: IntoIterator<Item = Candidate>>(candidates: I) -> Self {
        let mut grid = [0; N_CELLS];
        for candidate in candidates {
            grid[candidate.cell as usize] = candidate.digit;
        }
        Sudoku(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PUZZLE: &str = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
    const SOLUTION: &str = "854219763397865421261473985785126394649538172132947856926384517513792648478651239";

    #[test]
    fn parse_line() {
        let sudoku = Sudoku::from_str_line(PUZZLE).unwrap();
        assert_eq!(sudoku.n_clues(), 27);
        assert_eq!(sudoku.to_str_line(), PUZZLE);

        let commented = format!("{} some comment", PUZZLE);
        assert_eq!(Sudoku::from_str_line(&commented).unwrap(), sudoku);
    }

    #[test]
    fn parse_line_errors() {
        assert_eq!(
            Sudoku::from_str_line(&PUZZLE[..80]),
            Err(LineParseError::NotEnoughCells(80))
        );
        assert_eq!(
            Sudoku::from_str_line(&format!("{}1", PUZZLE)),
            Err(LineParseError::TooManyCells)
        );
        assert_eq!(
            Sudoku::from_str_line(&format!("{}x", PUZZLE)),
            Err(LineParseError::MissingCommentDelimiter)
        );
        let err = Sudoku::from_str_line(&format!("..x{}", &PUZZLE[3..])).unwrap_err();
        assert_eq!(err, LineParseError::InvalidEntry(InvalidEntry { cell: 2, ch: 'x' }));
        assert_eq!(err.to_string(), "invalid character 'x' in row 0, column 2");

        let err = Sudoku::from_str_line(&format!("{}?{}", &PUZZLE[..22], &PUZZLE[23..])).unwrap_err();
        assert_eq!(err, LineParseError::InvalidEntry(InvalidEntry { cell: 22, ch: '?' }));
        assert_eq!(err.to_string(), "invalid character '?' in row 2, column 4");
    }

    #[test]
    fn from_bytes() {
        assert!(Sudoku::from_bytes([0; 81]).is_ok());
        assert!(Sudoku::from_bytes([10; 81]).is_err());
        match Sudoku::from_bytes_slice(&[0; 80]) {
            Err(FromBytesSliceError::WrongLength(80)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn solve_unique() {
        let sudoku = Sudoku::from_str_line(PUZZLE).unwrap();
        let solution = sudoku.solve_unique().unwrap();
        assert_eq!(solution.to_str_line(), SOLUTION);
        assert!(solution.is_solved());
        assert!(!sudoku.is_solved());
    }

    #[test]
    fn conflicting_clues_have_no_solution() {
        let mut bytes = [0; 81];
        bytes[0] = 1;
        bytes[1] = 1;
        let sudoku = Sudoku::from_bytes(bytes).unwrap();
        assert_eq!(sudoku.solve_one(), None);
        assert_eq!(sudoku.count_at_most(0), 0);
    }

    #[test]
    fn empty_grid_has_many_solutions() {
        let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        assert_eq!(sudoku.count_at_most(10), 10);
        assert_eq!(sudoku.solve_unique(), None);
    }

    #[test]
    fn generate_filled_is_reproducible() {
        let first = Sudoku::generate_filled_with_rng(&mut StdRng::seed_from_u64(7));
        let second = Sudoku::generate_filled_with_rng(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
        assert!(first.is_solved());
    }

    #[test]
    fn display_block() {
        let sudoku = Sudoku::from_str_line(SOLUTION).unwrap();
        let block = sudoku.to_string();
        let mut lines = block.lines();
        assert_eq!(lines.next(), Some("854 219 763"));
        assert_eq!(block.lines().count(), 11);
    }
}
