use crate::results::GameError;
use std::fmt;
use std::str::FromStr;
use strum_macros::FromRepr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A colored peg that can be placed in a hole of the secret row or of a guess row.
///
/// The variants are ordered, and this order is stable: it is the order used to pick random
/// secrets, and the order in which [`CodePeg::ALL`] lists the colors.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromRepr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum CodePeg {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
}

impl CodePeg {
    /// Every code peg, in order.
    pub const ALL: [CodePeg; 6] = [
        CodePeg::Red,
        CodePeg::Green,
        CodePeg::Blue,
        CodePeg::Yellow,
        CodePeg::Orange,
        CodePeg::Purple,
    ];

    /// The number of distinct code pegs.
    pub const COUNT: usize = CodePeg::ALL.len();

    /// Returns the lowercase name of this color.
    pub fn name(self) -> &'static str {
        match self {
            CodePeg::Red => "red",
            CodePeg::Green => "green",
            CodePeg::Blue => "blue",
            CodePeg::Yellow => "yellow",
            CodePeg::Orange => "orange",
            CodePeg::Purple => "purple",
        }
    }

    /// Returns the single letter that can be used to type this color.
    pub fn letter(self) -> char {
        match self {
            CodePeg::Red => 'r',
            CodePeg::Green => 'g',
            CodePeg::Blue => 'b',
            CodePeg::Yellow => 'y',
            CodePeg::Orange => 'o',
            CodePeg::Purple => 'p',
        }
    }
}

impl fmt::Display for CodePeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses the full color name or its first letter, ignoring case, or the color's one-based
/// position in [`CodePeg::ALL`].
///
/// ```
/// use color_secret::CodePeg;
///
/// assert_eq!("Blue".parse::<CodePeg>(), Ok(CodePeg::Blue));
/// assert_eq!("p".parse::<CodePeg>(), Ok(CodePeg::Purple));
/// assert_eq!("2".parse::<CodePeg>(), Ok(CodePeg::Green));
/// assert!("teal".parse::<CodePeg>().is_err());
/// assert!("0".parse::<CodePeg>().is_err());
/// ```
impl FromStr for CodePeg {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowercase = s.trim().to_lowercase();
        if let Ok(position) = lowercase.parse::<u8>() {
            return position
                .checked_sub(1)
                .and_then(CodePeg::from_repr)
                .ok_or(GameError::UnknownPeg);
        }
        CodePeg::ALL
            .into_iter()
            .find(|peg| {
                lowercase == peg.name()
                    || (lowercase.chars().count() == 1 && lowercase.starts_with(peg.letter()))
            })
            .ok_or(GameError::UnknownPeg)
    }
}

/// A feedback peg, describing how one guessed code peg matched the secret.
///
/// `ColorAndPosition` sorts before `ColorOnly`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HintPeg {
    /// The right color in the right hole.
    ColorAndPosition,
    /// A color that is in the secret, but in another hole.
    ColorOnly,
}
