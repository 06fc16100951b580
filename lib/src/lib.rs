#![cfg_attr(feature = "unstable", feature(test))]

//! A code-breaking puzzle engine in the style of Mastermind.
//!
//! A [`Game`] hides a secret row of [`CodePeg`]s on a [`Board`]. The player fills one guess row
//! at a time, and each validated row earns [`HintPeg`]s: one [`HintPeg::ColorAndPosition`] per
//! peg that is the right color in the right hole, and one [`HintPeg::ColorOnly`] per other peg
//! whose color is still unmatched somewhere in the secret.
//!
//! ```
//! use color_secret::CodePeg::*;
//! use color_secret::{Game, GameError, GuessResult, HintPeg};
//!
//! let mut game = Game::new(4, 12)?;
//! game.set_secret(&[Red, Red, Green, Blue])?;
//!
//! for (hole, peg) in [Red, Green, Red, Blue].into_iter().enumerate() {
//!     game.set_guess(0, hole, peg)?;
//! }
//! assert!(game.is_row_complete(0)?);
//! assert_eq!(game.validate_guess()?, GuessResult::TryAgain);
//! assert_eq!(
//!     game.get_hints(0)?,
//!     vec![
//!         HintPeg::ColorAndPosition,
//!         HintPeg::ColorAndPosition,
//!         HintPeg::ColorOnly,
//!         HintPeg::ColorOnly,
//!     ]
//! );
//! # Ok::<(), GameError>(())
//! ```

mod board;
mod game;
mod pegs;
mod results;

pub use board::Board;
pub use board::Row;
pub use game::*;
pub use pegs::*;
pub use results::*;
