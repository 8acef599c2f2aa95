//! Sudoku on top of the exact cover solver
mod candidate;
mod sudoku;

pub use self::{
    candidate::{Candidate, Constraint},
    sudoku::Sudoku,
};
