use clap::{Parser, Subcommand};
use color_secret::*;
use log::info;
use std::error::Error;
use std::io;
use std::io::Write;

/// Simple program to play a Mastermind-style code-breaking game in the terminal.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Number of holes in the secret and in each guess.
    #[clap(long, default_value_t = DEFAULT_NB_HOLES)]
    holes: usize,

    /// Number of guesses allowed.
    #[clap(long, default_value_t = DEFAULT_NB_ROWS)]
    rows: usize,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Try to break a random secret, entering one guess per line.
    Interactive,
    /// Score the given guesses against the given secret.
    Single {
        /// The secret, e.g. "rgby" or "red,green,blue,yellow".
        #[clap(short, long)]
        secret: String,
        /// The guesses, played in order.
        guesses: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    info!("Playing with {} holes and {} rows", args.holes, args.rows);

    let mut game = Game::new(args.holes, args.rows)?;
    match args.command {
        Command::Interactive => play_interactive_game(&mut game)?,
        Command::Single { secret, guesses } => play_single_game(&mut game, &secret, &guesses)?,
    }
    Ok(())
}

fn play_single_game(game: &mut Game, secret: &str, guesses: &[String]) -> Result<(), GameError> {
    game.set_secret(&parse_code(secret, game.nb_holes())?)?;
    for guess in guesses {
        let result = play_guess(game, &parse_code(guess, game.nb_holes())?)?;
        if result != GuessResult::TryAgain {
            print_result(game, result);
            return Ok(());
        }
    }
    println!(
        "Secret not found after {} guesses, {} left.",
        game.num_guesses(),
        game.nb_rows() - game.num_guesses()
    );
    Ok(())
}

fn play_interactive_game(game: &mut Game) -> Result<(), Box<dyn Error>> {
    game.set_random_secret()?;
    println!(
        "I picked a secret of {} pegs. You have {} guesses to find it.\n\n\
         Colors: {}.\n\
         Enter a guess as letters (e.g. \"rgby\"), names or numbers separated by spaces.\n\n\
         Hints:\n\n\
           * 'X' = a peg has the right color in the right hole\n\
           * 'o' = a peg has a color of the secret, but in another hole\n",
        game.nb_holes(),
        game.nb_rows(),
        CodePeg::ALL
            .iter()
            .enumerate()
            .map(|(index, peg)| format!("{}={} ({})", index + 1, peg, peg.letter()))
            .collect::<Vec<String>>()
            .join(", ")
    );

    loop {
        print!("Guess {}/{}: ", game.current_guess() + 1, game.nb_rows());
        io::stdout().flush()?;
        let mut buffer = String::new();
        if io::stdin().read_line(&mut buffer)? == 0 {
            return Ok(());
        }
        let guess = match parse_code(&buffer, game.nb_holes()) {
            Ok(guess) => guess,
            Err(error) => {
                println!("{} Try again.", error);
                continue;
            }
        };
        let result = play_guess(game, &guess)?;
        if result != GuessResult::TryAgain {
            print_result(game, result);
            return Ok(());
        }
    }
}

/// Fills the current row with the given code, validates it and prints its hints.
fn play_guess(game: &mut Game, guess: &[CodePeg]) -> Result<GuessResult, GameError> {
    let row_index = game.current_guess();
    for (hole_index, peg) in guess.iter().enumerate() {
        game.set_guess(row_index, hole_index, *peg)?;
    }
    let result = game.validate_guess()?;
    println!(
        "{}  {}",
        format_code(game.board().guess_row(row_index)?.code_pegs()),
        format_hints(&game.get_hints(row_index)?, game.nb_holes())
    );
    Ok(result)
}

fn print_result(game: &Game, result: GuessResult) {
    match result {
        GuessResult::Won => println!("You found it! It took you {} guesses.", game.num_guesses()),
        GuessResult::GameOver => println!(
            "Game over :( The secret was {}.",
            format_code(game.secret())
        ),
        GuessResult::TryAgain => {}
    }
}

/// Parses a code either as one letter per peg, or as one token per peg.
fn parse_code(input: &str, nb_holes: usize) -> Result<Vec<CodePeg>, GameError> {
    let tokens: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();
    let code = match tokens.as_slice() {
        [letters] if letters.chars().count() == nb_holes && nb_holes > 1 => letters
            .chars()
            .map(|letter| letter.to_string().parse::<CodePeg>())
            .collect::<Result<Vec<CodePeg>, GameError>>()?,
        _ => tokens
            .iter()
            .map(|token| token.parse::<CodePeg>())
            .collect::<Result<Vec<CodePeg>, GameError>>()?,
    };
    if code.len() != nb_holes {
        return Err(GameError::CodeLength(nb_holes));
    }
    Ok(code)
}

fn format_code(code: &[Option<CodePeg>]) -> String {
    code.iter()
        .map(|peg| peg.map_or('.', |peg| peg.letter().to_ascii_uppercase()))
        .collect()
}

fn format_hints(hints: &[HintPeg], nb_holes: usize) -> String {
    let mut formatted: String = hints
        .iter()
        .map(|hint| match hint {
            HintPeg::ColorAndPosition => 'X',
            HintPeg::ColorOnly => 'o',
        })
        .collect();
    while formatted.len() < nb_holes {
        formatted.push('-');
    }
    formatted
}
