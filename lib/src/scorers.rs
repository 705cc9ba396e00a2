use crate::results::WordleError;
use rayon::prelude::*;
use std::collections::HashMap;
use std::iter::zip;
use std::sync::Arc;

/// Gives words a score, where the maximum score indicates the best guess.
pub trait WordScorer {
    /// Updates the scorer with the latest guess and the updated list of possible words.
    fn update(
        &mut self,
        latest_guess: &str,
        possible_words: &[Arc<str>],
    ) -> Result<(), WordleError>;
    /// Determines a score for the given word. The higher the score, the better the guess.
    fn score_word(&self, word: &Arc<str>) -> i64;
}

/// Scores each word by how many exact-position letter matches it would collect against
/// every word that is still a possible answer, itself included.
///
/// Dividing that total by the number of possible words gives the expected number of
/// [`Correct`](crate::LetterResult::Correct) letters against a uniformly random
/// remaining candidate. The divisor is the same for every word scored in one round, so
/// the raw total is returned instead; it orders the words identically and stays exact
/// where a float quotient would not.
///
/// Scoring one word costs O(*n* × *L*) over *n* possible words of length *L*, so a full
/// selection round is O(*n*² × *L*). That is the dominant cost of this scorer, but it is
/// fine for word lists up to a few thousand words. The scores for the opening round are
/// precomputed in parallel at construction and reused until the first update.
#[derive(Clone)]
pub struct ExpectedMatchesScorer {
    possible_words: Vec<Arc<str>>,
    first_round_scores: Arc<HashMap<Arc<str>, i64>>,
    is_first_round: bool,
}

impl ExpectedMatchesScorer {
    /// Constructs an `ExpectedMatchesScorer` for the given possible words, usually
    /// [`WordBank::answer_words`](crate::WordBank::answer_words).
    ///
    /// ```
    /// use greedy_wordle_solver::Guesser;
    /// use greedy_wordle_solver::MaxScoreGuesser;
    /// use greedy_wordle_solver::WordBank;
    /// use greedy_wordle_solver::scorers::ExpectedMatchesScorer;
    ///
    /// let bank = WordBank::from_iterator(["abc", "def", "ghi"]).unwrap();
    /// let scorer = ExpectedMatchesScorer::new(bank.answer_words());
    /// let mut guesser = MaxScoreGuesser::new(&bank, scorer);
    ///
    /// assert!(guesser.select_next_guess().is_ok());
    /// ```
    pub fn new(possible_words: &[Arc<str>]) -> ExpectedMatchesScorer {
        let first_round_scores = possible_words
            .par_iter()
            .map(|word| {
                (
                    Arc::clone(word),
                    count_position_matches(word, possible_words),
                )
            })
            .collect();
        ExpectedMatchesScorer {
            possible_words: possible_words.to_vec(),
            first_round_scores: Arc::new(first_round_scores),
            is_first_round: true,
        }
    }
}

impl WordScorer for ExpectedMatchesScorer {
    fn update(
        &mut self,
        _latest_guess: &str,
        possible_words: &[Arc<str>],
    ) -> Result<(), WordleError> {
        self.possible_words = possible_words.to_vec();
        self.is_first_round = false;
        Ok(())
    }

    fn score_word(&self, word: &Arc<str>) -> i64 {
        if self.is_first_round {
            if let Some(score) = self.first_round_scores.get(word) {
                return *score;
            }
        }
        count_position_matches(word, &self.possible_words)
    }
}

/// Counts the positional letter coincidences of `word` against every word in `words`.
fn count_position_matches(word: &str, words: &[Arc<str>]) -> i64 {
    words
        .iter()
        .map(|other_word| {
            zip(word.chars(), other_word.chars())
                .filter(|(letter, other_letter)| letter == other_letter)
                .count() as i64
        })
        .sum()
}
