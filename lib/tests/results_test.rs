#[macro_use]
extern crate assert_matches;

use color_secret::CodePeg::*;
use color_secret::*;

use std::collections::HashMap;

fn count_hints(hints: &[HintPeg]) -> (usize, usize) {
    (
        hints
            .iter()
            .filter(|hint| **hint == HintPeg::ColorAndPosition)
            .count(),
        hints
            .iter()
            .filter(|hint| **hint == HintPeg::ColorOnly)
            .count(),
    )
}

fn count_colors(code: &[CodePeg]) -> HashMap<CodePeg, usize> {
    let mut counts = HashMap::new();
    for peg in code {
        *counts.entry(*peg).or_insert(0) += 1;
    }
    counts
}

#[test]
fn get_hints_for_guess_correct() {
    let result = get_hints_for_guess(&[Red, Green, Blue, Yellow], &[Red, Green, Blue, Yellow]);

    assert_eq!(result, Ok(vec![HintPeg::ColorAndPosition; 4]));
}

#[test]
fn get_hints_for_guess_swapped_colors() {
    let result = get_hints_for_guess(&[Red, Green, Blue, Yellow], &[Red, Blue, Green, Purple]);

    assert_eq!(
        result,
        Ok(vec![
            HintPeg::ColorAndPosition,
            HintPeg::ColorOnly,
            HintPeg::ColorOnly
        ])
    );
}

#[test]
fn get_hints_for_guess_repeated_colors() {
    let result = get_hints_for_guess(&[Red, Red, Green, Blue], &[Red, Green, Red, Blue]);

    // Exact at holes 0 and 3, then the guessed GREEN and the second guessed RED each find an
    // unmatched secret peg.
    assert_eq!(
        result,
        Ok(vec![
            HintPeg::ColorAndPosition,
            HintPeg::ColorAndPosition,
            HintPeg::ColorOnly,
            HintPeg::ColorOnly
        ])
    );
}

#[test]
fn get_hints_for_guess_does_not_double_count() {
    // One RED in the secret, already matched exactly: the other guessed REDs earn nothing.
    let result = get_hints_for_guess(&[Red, Green, Blue, Yellow], &[Red, Red, Red, Red]);
    assert_eq!(result, Ok(vec![HintPeg::ColorAndPosition]));

    // One guessed RED against many secret REDs earns a single hint.
    let result = get_hints_for_guess(&[Green, Red, Red, Red], &[Red, Blue, Blue, Blue]);
    assert_eq!(result, Ok(vec![HintPeg::ColorOnly]));
}

#[test]
fn get_hints_for_guess_prefers_exact_matches() {
    // The guessed RED at hole 0 must not take the secret RED at hole 2 before the exact match
    // at hole 2 is found.
    let result = get_hints_for_guess(&[Blue, Green, Red], &[Red, Yellow, Red]);

    assert_eq!(result, Ok(vec![HintPeg::ColorAndPosition]));
}

#[test]
fn get_hints_for_guess_none_match() {
    let result = get_hints_for_guess(&[Red, Green, Blue, Yellow], &[Orange, Purple, Orange, Purple]);

    assert_eq!(result, Ok(vec![]));
}

#[test]
fn get_hints_for_guess_single_hole() {
    assert_eq!(
        get_hints_for_guess(&[Orange], &[Orange]),
        Ok(vec![HintPeg::ColorAndPosition])
    );
    assert_eq!(get_hints_for_guess(&[Orange], &[Red]), Ok(vec![]));
}

#[test]
fn get_hints_for_guess_invalid_guess() {
    assert_matches!(
        get_hints_for_guess(&[Red, Green, Blue, Yellow], &[Red, Green, Blue]),
        Err(GameError::CodeLength(4))
    );
    assert_matches!(
        get_hints_for_guess(&[Red, Green], &[Red, Green, Blue]),
        Err(GameError::CodeLength(2))
    );
}

#[test]
fn get_hints_for_guess_matches_color_counts() {
    // Walks every 3-hole secret and guess built from 4 colors.
    let colors = [Red, Green, Blue, Yellow];
    let mut codes: Vec<Vec<CodePeg>> = Vec::new();
    for a in colors {
        for b in colors {
            for c in colors {
                codes.push(vec![a, b, c]);
            }
        }
    }

    for secret in codes.iter() {
        for guess in codes.iter() {
            let hints = get_hints_for_guess(secret, guess).unwrap();
            let (num_exact, num_color_only) = count_hints(&hints);

            let expected_exact = secret
                .iter()
                .zip(guess.iter())
                .filter(|(s, g)| s == g)
                .count();
            let secret_counts = count_colors(secret);
            let guess_counts = count_colors(guess);
            let expected_total: usize = secret_counts
                .iter()
                .map(|(peg, count)| *count.min(guess_counts.get(peg).unwrap_or(&0)))
                .sum();

            assert_eq!(num_exact, expected_exact, "{:?} vs {:?}", secret, guess);
            assert_eq!(
                num_exact + num_color_only,
                expected_total,
                "{:?} vs {:?}",
                secret,
                guess
            );
            assert!(hints.len() <= secret.len());
        }
    }
}

#[test]
fn game_error_display() {
    assert_eq!(
        GameError::CodeLength(4).to_string(),
        "You must pass exactly 4 code pegs."
    );
    assert_eq!(
        GameError::NoRowsRemaining.to_string(),
        "Already reached the maximum number of guesses."
    );
    assert_eq!(
        GameError::UnknownPeg.to_string(),
        "Unknown color. Use one of: red, green, blue, yellow, orange, purple."
    );
}
