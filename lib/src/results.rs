use crate::pegs::CodePeg;
use crate::pegs::HintPeg;
use log::trace;
use std::error::Error;
use std::fmt;
use std::iter::zip;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of validating one guess row.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GuessResult {
    /// The guess did not match the secret, and there are rows left to play.
    TryAgain,
    /// The guess did not match the secret, and it was played on the last row.
    GameOver,
    /// The guess matched the secret.
    Won,
}

/// Where a game is in its lifecycle.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The secret has not been found and there are rows left to play.
    InProgress,
    /// The secret was found. This is terminal.
    Won,
    /// Every row was played without finding the secret. This is terminal.
    GameOver,
}

impl GameStatus {
    /// Returns true if no more guesses can be validated.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Indicates that the board or game was used in a way it does not support.
///
/// These are all caller errors: a collaborator that only writes into the current row, only submits
/// complete rows, and stops once a game is over will never see one.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameError {
    /// A board needs at least one hole per row and at least one guess row.
    InvalidDimensions,
    /// The row index must be less than the given number of rows.
    RowOutOfRange(usize),
    /// The hole index must be less than the given number of holes.
    HoleOutOfRange(usize),
    /// Exactly the given number of code pegs must be provided.
    CodeLength(usize),
    /// A row cannot hold more hint pegs than the given number of holes.
    TooManyHints(usize),
    /// Every guess row has already been validated.
    NoRowsRemaining,
    /// The secret has already been found.
    AlreadyWon,
    /// The given guess row still has empty holes.
    IncompleteRow(usize),
    /// The secret must be set before a guess is validated.
    SecretNotSet,
    /// The text does not name a known code peg.
    UnknownPeg,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidDimensions => {
                write!(f, "A board needs at least one hole and one row.")
            }
            GameError::RowOutOfRange(nb_rows) => {
                write!(f, "Row index must be less than {}.", nb_rows)
            }
            GameError::HoleOutOfRange(nb_holes) => {
                write!(f, "Hole index must be less than {}.", nb_holes)
            }
            GameError::CodeLength(nb_holes) => {
                write!(f, "You must pass exactly {} code pegs.", nb_holes)
            }
            GameError::TooManyHints(nb_holes) => {
                write!(f, "Cannot add more than {} hint pegs to a row.", nb_holes)
            }
            GameError::NoRowsRemaining => {
                write!(f, "Already reached the maximum number of guesses.")
            }
            GameError::AlreadyWon => write!(f, "The secret has already been found."),
            GameError::IncompleteRow(row) => write!(f, "Row {} has empty holes.", row),
            GameError::SecretNotSet => write!(f, "The secret has not been set."),
            GameError::UnknownPeg => write!(
                f,
                "Unknown color. Use one of: {}.",
                CodePeg::ALL
                    .iter()
                    .map(|peg| peg.name())
                    .collect::<Vec<&str>>()
                    .join(", ")
            ),
        }
    }
}

impl Error for GameError {}

/// Determines the hint pegs earned by `guess` against `secret`.
///
/// Exact matches are found first, in hole order, and are returned first. Then each remaining guess
/// peg, in hole order, is matched against the first remaining secret peg of the same color. No
/// peg from either code is counted twice.
///
/// ```
/// use color_secret::CodePeg::*;
/// use color_secret::HintPeg;
/// use color_secret::get_hints_for_guess;
///
/// let hints = get_hints_for_guess(&[Red, Green, Blue, Yellow], &[Red, Blue, Green, Purple]);
/// assert_eq!(
///     hints,
///     Ok(vec![HintPeg::ColorAndPosition, HintPeg::ColorOnly, HintPeg::ColorOnly])
/// );
/// ```
pub fn get_hints_for_guess(
    secret: &[CodePeg],
    guess: &[CodePeg],
) -> Result<Vec<HintPeg>, GameError> {
    if secret.len() != guess.len() {
        return Err(GameError::CodeLength(secret.len()));
    }
    // Matched pegs are taken out of these working copies.
    let mut remaining_secret: Vec<Option<CodePeg>> = secret.iter().copied().map(Some).collect();
    let mut remaining_guess: Vec<Option<CodePeg>> = guess.iter().copied().map(Some).collect();
    let mut hints = Vec::with_capacity(secret.len());

    for (secret_peg, guess_peg) in zip(remaining_secret.iter_mut(), remaining_guess.iter_mut()) {
        if secret_peg == guess_peg {
            hints.push(HintPeg::ColorAndPosition);
            *secret_peg = None;
            *guess_peg = None;
        }
    }

    for guess_peg in remaining_guess.iter_mut() {
        let Some(peg) = *guess_peg else {
            continue;
        };
        if let Some(secret_peg) = remaining_secret
            .iter_mut()
            .find(|secret_peg| **secret_peg == Some(peg))
        {
            hints.push(HintPeg::ColorOnly);
            *secret_peg = None;
            *guess_peg = None;
        }
    }

    trace!("Hints for {:?} against {:?}: {:?}", guess, secret, hints);
    Ok(hints)
}
