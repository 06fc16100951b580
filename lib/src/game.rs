use crate::board::*;
use crate::pegs::*;
use crate::results::*;
use log::debug;
use rand::Rng;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of holes per row in a standard game.
pub const DEFAULT_NB_HOLES: usize = 4;

/// The number of guess rows in a standard game.
pub const DEFAULT_NB_ROWS: usize = 12;

/// Represents an ongoing game.
///
/// A game is played by setting the secret, then repeatedly filling the current guess row with
/// [`Game::set_guess`] and submitting it with [`Game::validate_guess`], until a terminal
/// [`GuessResult`] is returned. A finished game cannot be restarted: construct a new one instead.
///
/// ```
/// use color_secret::CodePeg::*;
/// use color_secret::Game;
/// use color_secret::GameError;
/// use color_secret::GuessResult;
///
/// let mut game = Game::new(4, 10)?;
/// game.set_secret(&[Red, Green, Blue, Yellow])?;
///
/// for (hole, peg) in [Red, Blue, Green, Purple].into_iter().enumerate() {
///     game.set_guess(game.current_guess(), hole, peg)?;
/// }
/// assert_eq!(game.validate_guess()?, GuessResult::TryAgain);
/// assert_eq!(game.current_guess(), 1);
/// # Ok::<(), GameError>(())
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    board: Board,
    current_guess: usize,
    status: GameStatus,
}

impl Game {
    /// Constructs a game with `nb_holes` holes per row and `nb_rows` guess rows.
    ///
    /// Both must be at least one.
    pub fn new(nb_holes: usize, nb_rows: usize) -> Result<Game, GameError> {
        Ok(Game {
            board: Board::new(nb_holes, nb_rows)?,
            current_guess: 0,
            status: GameStatus::InProgress,
        })
    }

    /// A read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn nb_holes(&self) -> usize {
        self.board.nb_holes()
    }

    pub fn nb_rows(&self) -> usize {
        self.board.nb_rows()
    }

    /// Sets the secret code. Exactly one code peg per hole must be given.
    ///
    /// This is meant to be called once, before any guess is validated.
    pub fn set_secret(&mut self, code_pegs: &[CodePeg]) -> Result<(), GameError> {
        self.board.secret_row_mut().set_code_pegs(code_pegs)
    }

    /// Sets a secret where each hole is picked uniformly at random from [`CodePeg::ALL`].
    pub fn set_random_secret(&mut self) -> Result<(), GameError> {
        self.set_random_secret_with(&mut rand::thread_rng())
    }

    /// Same as [`Game::set_random_secret`], drawing from the given random number generator.
    pub fn set_random_secret_with<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let secret: Vec<CodePeg> = (0..self.nb_holes())
            .map(|_| CodePeg::ALL[rng.gen_range(0..CodePeg::COUNT)])
            .collect();
        debug!("Secret: {:?}", secret);
        self.set_secret(&secret)
    }

    /// The secret code, with `None` in each hole while the secret is not set.
    pub fn secret(&self) -> &[Option<CodePeg>] {
        self.board.secret_row().code_pegs()
    }

    /// Places a code peg in one hole of a guess row.
    ///
    /// Any guess row can be written. Only the row at [`Game::current_guess`] is scored by the next
    /// call to [`Game::validate_guess`].
    pub fn set_guess(
        &mut self,
        row_index: usize,
        hole_index: usize,
        code_peg: CodePeg,
    ) -> Result<(), GameError> {
        self.board
            .guess_row_mut(row_index)?
            .set_code_peg(hole_index, code_peg)
    }

    /// Returns whether every hole of the given guess row holds a code peg.
    pub fn is_row_complete(&self, row_index: usize) -> Result<bool, GameError> {
        Ok(self.board.guess_row(row_index)?.is_complete())
    }

    /// Scores the current guess row against the secret, records its hint pegs, and moves on to the
    /// next row unless the game is now over.
    ///
    /// All checks run before the board is modified, so an error leaves the game unchanged.
    pub fn validate_guess(&mut self) -> Result<GuessResult, GameError> {
        match self.status {
            GameStatus::Won => return Err(GameError::AlreadyWon),
            GameStatus::GameOver => return Err(GameError::NoRowsRemaining),
            GameStatus::InProgress => {}
        }
        let row_index = self.current_guess;
        let secret = self
            .board
            .secret_row()
            .complete_code()
            .ok_or(GameError::SecretNotSet)?;
        let guess = self
            .board
            .guess_row(row_index)?
            .complete_code()
            .ok_or(GameError::IncompleteRow(row_index))?;

        let hints = get_hints_for_guess(&secret, &guess)?;
        let row = self.board.guess_row_mut(row_index)?;
        for hint in hints.iter() {
            row.add_hint_peg(*hint)?;
        }

        // Counted on the unsorted hints, as scored.
        let num_exact = hints
            .iter()
            .filter(|hint| **hint == HintPeg::ColorAndPosition)
            .count();
        let result = if num_exact == self.nb_holes() {
            self.status = GameStatus::Won;
            GuessResult::Won
        } else {
            self.current_guess += 1;
            if self.current_guess == self.nb_rows() {
                self.status = GameStatus::GameOver;
                GuessResult::GameOver
            } else {
                GuessResult::TryAgain
            }
        };
        debug!(
            "Row {}: {:?} scored {:?} -> {:?}",
            row_index, guess, hints, result
        );
        Ok(result)
    }

    /// The hint pegs of the given guess row, with [`HintPeg::ColorAndPosition`] first.
    pub fn get_hints(&self, row_index: usize) -> Result<Vec<HintPeg>, GameError> {
        Ok(self.board.guess_row(row_index)?.hint_pegs())
    }

    /// The index of the guess row currently being played.
    ///
    /// This equals [`Game::nb_rows`] once every row was played without a win. After a win, it stays
    /// on the winning row.
    pub fn current_guess(&self) -> usize {
        self.current_guess
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The number of guess rows that have been validated.
    pub fn num_guesses(&self) -> usize {
        match self.status {
            GameStatus::Won => self.current_guess + 1,
            _ => self.current_guess,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pegs::CodePeg::*;

    fn fill_row(game: &mut Game, row_index: usize, code: &[CodePeg]) {
        for (hole_index, peg) in code.iter().enumerate() {
            game.set_guess(row_index, hole_index, *peg).unwrap();
        }
    }

    #[test]
    fn failed_validation_leaves_game_unchanged() {
        let mut game = Game::new(3, 2).unwrap();
        game.set_secret(&[Red, Green, Blue]).unwrap();
        game.set_guess(0, 0, Red).unwrap();
        let before = game.clone();

        assert_eq!(game.validate_guess(), Err(GameError::IncompleteRow(0)));
        assert_eq!(game, before);
    }

    #[test]
    fn num_guesses_counts_winning_row() {
        let mut game = Game::new(2, 3).unwrap();
        game.set_secret(&[Red, Green]).unwrap();
        fill_row(&mut game, 0, &[Green, Red]);
        fill_row(&mut game, 1, &[Red, Green]);

        assert_eq!(game.validate_guess(), Ok(GuessResult::TryAgain));
        assert_eq!(game.num_guesses(), 1);
        assert_eq!(game.validate_guess(), Ok(GuessResult::Won));
        assert_eq!(game.num_guesses(), 2);
        assert_eq!(game.current_guess(), 1);
    }
}
