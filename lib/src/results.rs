use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::iter::zip;

/// The result of a given letter at a specific location.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum LetterResult {
    /// The letter is in the objective word at this location.
    Correct,
    /// The letter is in the objective word, but not at this location.
    PresentNotHere,
    /// The letter has no unmatched occurrence left in the objective word.
    NotPresent,
}

/// Indicates that an error occurred while trying to guess the objective word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordleError {
    /// Indicates that a word had the wrong number of letters. Provides the expected
    /// number of letters.
    WordLength(usize),
    /// Indicates that the given word is not in the legal-guess list.
    IllegalGuess(Box<str>),
    /// Indicates that every candidate word has been eliminated, so the given
    /// `GuessResult`s must be inconsistent.
    EmptyCandidatePool,
    /// Indicates that a word list contained no words.
    EmptyWordList,
    /// Indicates that a word list could not be read.
    WordListIo(Box<str>),
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordleError::WordLength(expected) => {
                write!(f, "expected a word with {} letters", expected)
            }
            WordleError::IllegalGuess(word) => {
                write!(f, "the word '{}' is not a legal guess", word)
            }
            WordleError::EmptyCandidatePool => write!(
                f,
                "no candidate words remain, so the given results must be inconsistent"
            ),
            WordleError::EmptyWordList => write!(f, "the word list contained no words"),
            WordleError::WordListIo(message) => {
                write!(f, "could not read the word list: {}", message)
            }
        }
    }
}

impl std::error::Error for WordleError {}

impl From<io::Error> for WordleError {
    fn from(error: io::Error) -> WordleError {
        WordleError::WordListIo(error.to_string().into_boxed_str())
    }
}

/// The result of a single word guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult<'a> {
    pub guess: &'a str,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl<'a> GuessResult<'a> {
    /// Returns `true` iff every letter was [`LetterResult::Correct`].
    pub fn is_win(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Correct)
    }
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Box<str>>),
    /// Indicates that the guesser failed to guess the word, and provides the guesses that
    /// were given.
    Failure(Vec<Box<str>>),
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Each letter of the objective can satisfy at most one letter of the guess. Exact
/// matches are consumed first, then leftover objective letters credit unmatched guess
/// letters as [`LetterResult::PresentNotHere`] from left to right, so when the guess
/// repeats a letter more often than the objective contains it, the earlier guess
/// locations win.
///
/// ```
/// use greedy_wordle_solver::get_result_for_guess;
/// use greedy_wordle_solver::LetterResult;
///
/// let result = get_result_for_guess("erase", "speed").unwrap();
///
/// assert_eq!(
///     result.results,
///     vec![
///         LetterResult::PresentNotHere,
///         LetterResult::NotPresent,
///         LetterResult::PresentNotHere,
///         LetterResult::PresentNotHere,
///         LetterResult::NotPresent,
///     ]
/// );
/// ```
pub fn get_result_for_guess<'a>(
    objective: &str,
    guess: &'a str,
) -> Result<GuessResult<'a>, WordleError> {
    let expected_length = objective.chars().count();
    if guess.chars().count() != expected_length {
        return Err(WordleError::WordLength(expected_length));
    }
    let mut results = vec![LetterResult::NotPresent; expected_length];
    // Objective letters not consumed by an exact match, by remaining count.
    let mut unmatched: HashMap<char, u32> = HashMap::new();
    for (index, (guess_letter, objective_letter)) in
        zip(guess.chars(), objective.chars()).enumerate()
    {
        if guess_letter == objective_letter {
            results[index] = LetterResult::Correct;
        } else {
            *unmatched.entry(objective_letter).or_insert(0) += 1;
        }
    }
    for (index, guess_letter) in guess.chars().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        if let Entry::Occupied(mut entry) = unmatched.entry(guess_letter) {
            results[index] = LetterResult::PresentNotHere;
            *entry.get_mut() -= 1;
            if *entry.get() == 0 {
                entry.remove();
            }
        }
    }
    Ok(GuessResult { guess, results })
}
