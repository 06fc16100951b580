use crate::pegs::CodePeg;
use crate::pegs::HintPeg;
use crate::results::GameError;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A row on the board. Contains ordered code pegs and unordered hint pegs.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    code_pegs: Vec<Option<CodePeg>>,
    /// Kept in the order they were added.
    hint_pegs: Vec<HintPeg>,
}

impl Row {
    /// Constructs a row with `nb_holes` empty holes and no hint pegs.
    pub fn new(nb_holes: usize) -> Row {
        Row {
            code_pegs: vec![None; nb_holes],
            hint_pegs: Vec::with_capacity(nb_holes),
        }
    }

    /// The number of holes in this row.
    pub fn nb_holes(&self) -> usize {
        self.code_pegs.len()
    }

    /// The code peg in each hole, or `None` for an empty hole.
    pub fn code_pegs(&self) -> &[Option<CodePeg>] {
        &self.code_pegs
    }

    /// The code peg in the given hole.
    pub fn code_peg(&self, hole_index: usize) -> Result<Option<CodePeg>, GameError> {
        self.code_pegs
            .get(hole_index)
            .copied()
            .ok_or(GameError::HoleOutOfRange(self.nb_holes()))
    }

    /// Returns the code pegs if every hole is filled.
    pub fn complete_code(&self) -> Option<Vec<CodePeg>> {
        self.code_pegs.iter().copied().collect()
    }

    /// Returns `true` iff every hole holds a code peg.
    pub fn is_complete(&self) -> bool {
        self.code_pegs.iter().all(Option::is_some)
    }

    /// Places a code peg in one hole.
    pub fn set_code_peg(&mut self, hole_index: usize, code_peg: CodePeg) -> Result<(), GameError> {
        let nb_holes = self.nb_holes();
        let hole = self
            .code_pegs
            .get_mut(hole_index)
            .ok_or(GameError::HoleOutOfRange(nb_holes))?;
        *hole = Some(code_peg);
        Ok(())
    }

    /// Fills every hole at once. Exactly one code peg per hole must be given.
    pub fn set_code_pegs(&mut self, code_pegs: &[CodePeg]) -> Result<(), GameError> {
        if code_pegs.len() != self.nb_holes() {
            return Err(GameError::CodeLength(self.nb_holes()));
        }
        for (hole, code_peg) in self.code_pegs.iter_mut().zip(code_pegs) {
            *hole = Some(*code_peg);
        }
        Ok(())
    }

    /// Returns a copy of the hint pegs, with [`HintPeg::ColorAndPosition`] before
    /// [`HintPeg::ColorOnly`].
    pub fn hint_pegs(&self) -> Vec<HintPeg> {
        let mut hint_pegs = self.hint_pegs.clone();
        hint_pegs.sort_unstable();
        hint_pegs
    }

    /// The number of hint pegs of the given kind.
    pub fn count_hint_pegs(&self, kind: HintPeg) -> usize {
        self.hint_pegs.iter().filter(|hint| **hint == kind).count()
    }

    /// Adds one hint peg. A row holds at most one hint peg per hole.
    pub fn add_hint_peg(&mut self, hint_peg: HintPeg) -> Result<(), GameError> {
        if self.hint_pegs.len() == self.nb_holes() {
            return Err(GameError::TooManyHints(self.nb_holes()));
        }
        self.hint_pegs.push(hint_peg);
        Ok(())
    }
}

/// A game board. Contains the secret row, and a fixed number of guess rows.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    nb_holes: usize,
    secret_row: Row,
    guess_rows: Vec<Row>,
}

impl Board {
    /// Constructs a board whose rows all have `nb_holes` holes, with `nb_rows` guess rows. Every
    /// hole starts empty.
    pub fn new(nb_holes: usize, nb_rows: usize) -> Result<Board, GameError> {
        if nb_holes == 0 || nb_rows == 0 {
            return Err(GameError::InvalidDimensions);
        }
        Ok(Board {
            nb_holes,
            secret_row: Row::new(nb_holes),
            guess_rows: vec![Row::new(nb_holes); nb_rows],
        })
    }

    pub fn nb_holes(&self) -> usize {
        self.nb_holes
    }

    pub fn nb_rows(&self) -> usize {
        self.guess_rows.len()
    }

    pub fn secret_row(&self) -> &Row {
        &self.secret_row
    }

    pub fn guess_rows(&self) -> &[Row] {
        &self.guess_rows
    }

    /// The guess row at the given index.
    pub fn guess_row(&self, row_index: usize) -> Result<&Row, GameError> {
        self.guess_rows
            .get(row_index)
            .ok_or(GameError::RowOutOfRange(self.nb_rows()))
    }

    pub(crate) fn secret_row_mut(&mut self) -> &mut Row {
        &mut self.secret_row
    }

    pub(crate) fn guess_row_mut(&mut self, row_index: usize) -> Result<&mut Row, GameError> {
        let nb_rows = self.nb_rows();
        self.guess_rows
            .get_mut(row_index)
            .ok_or(GameError::RowOutOfRange(nb_rows))
    }
}
