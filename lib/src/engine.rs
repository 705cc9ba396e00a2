use crate::data::WordBank;
use crate::pool::CandidatePool;
use crate::results::{get_result_for_guess, GameResult, GuessResult, WordleError};
use crate::scorers::{ExpectedMatchesScorer, WordScorer};
use rand::Rng;
use std::sync::Arc;

/// Guesses words in response to hints from previous guesses.
pub trait Guesser {
    /// Updates this guesser with the result of the latest guess.
    fn update(&mut self, result: &GuessResult) -> Result<(), WordleError>;

    /// Selects the next guess. Returns [`WordleError::EmptyCandidatePool`] if no
    /// candidate words remain, which means the previous results were inconsistent.
    fn select_next_guess(&mut self) -> Result<Arc<str>, WordleError>;

    /// Restores this guesser to its state at construction, so it can be reused for a new
    /// game without being rebuilt.
    fn reset(&mut self);
}

/// Selects the word with the maximum score according to the given [`WordScorer`],
/// guessing only from the words that are still possible answers.
///
/// On each update the candidate pool is narrowed with the latest result, using
/// [`get_result_for_guess`] as the consistency check: a word stays in the pool only if
/// guessing against it would have produced exactly the received result. Ties between
/// equally scored words go to the earliest word in pool order, so selection is
/// deterministic.
pub struct MaxScoreGuesser<S: WordScorer + Clone> {
    pool: CandidatePool,
    scorer: S,
    initial_scorer: S,
}

impl<S: WordScorer + Clone> MaxScoreGuesser<S> {
    /// Constructs a `MaxScoreGuesser` over the answer words of the given bank.
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
    /// assert_eq!(guesser.select_next_guess().unwrap().as_ref(), "abc");
    /// ```
    pub fn new(bank: &WordBank, scorer: S) -> MaxScoreGuesser<S> {
        MaxScoreGuesser {
            pool: CandidatePool::new(bank),
            initial_scorer: scorer.clone(),
            scorer,
        }
    }

    /// Retrieves the words that are still possible answers.
    pub fn possible_words(&self) -> &[Arc<str>] {
        self.pool.candidates()
    }
}

impl<S: WordScorer + Clone> Guesser for MaxScoreGuesser<S> {
    fn update(&mut self, result: &GuessResult) -> Result<(), WordleError> {
        self.pool.eliminate(result)?;
        self.scorer.update(result.guess, self.pool.candidates())
    }

    fn select_next_guess(&mut self) -> Result<Arc<str>, WordleError> {
        let mut best: Option<(&Arc<str>, i64)> = None;
        for word in self.pool.candidates() {
            let score = self.scorer.score_word(word);
            // Only a strictly higher score displaces the earlier word.
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((word, score)),
            }
        }
        best.map(|(word, _)| Arc::clone(word))
            .ok_or(WordleError::EmptyCandidatePool)
    }

    fn reset(&mut self) {
        self.pool.reset();
        self.scorer = self.initial_scorer.clone();
    }
}

/// A fixed objective word that answers guesses with per-letter hints.
///
/// The objective is immutable for the duration of one game.
pub struct GameOracle<'a> {
    bank: &'a WordBank,
    objective: Arc<str>,
}

impl<'a> GameOracle<'a> {
    /// Creates an oracle for the given objective word, which is lower-cased and must be
    /// in the bank's answer list.
    pub fn new(bank: &'a WordBank, objective: &str) -> Result<GameOracle<'a>, WordleError> {
        let objective = objective.to_lowercase();
        match bank
            .answer_words()
            .iter()
            .find(|word| word.as_ref() == objective)
        {
            Some(word) => Ok(GameOracle {
                bank,
                objective: Arc::clone(word),
            }),
            None => Err(WordleError::IllegalGuess(objective.into_boxed_str())),
        }
    }

    /// Creates an oracle with an objective drawn uniformly from the bank's answer list.
    ///
    /// The random source is injected so that games can be replayed from a seeded
    /// generator.
    pub fn with_random_answer<R: Rng>(bank: &'a WordBank, rng: &mut R) -> GameOracle<'a> {
        let index = rng.gen_range(0..bank.answer_words().len());
        GameOracle {
            bank,
            objective: Arc::clone(&bank.answer_words()[index]),
        }
    }

    /// Retrieves the objective word.
    pub fn objective(&self) -> &str {
        self.objective.as_ref()
    }

    /// Determines the result of the given guess against the objective word.
    ///
    /// Fails with [`WordleError::WordLength`] if the guess has the wrong number of
    /// letters, and with [`WordleError::IllegalGuess`] if it is not in the bank's
    /// legal-guess list.
    pub fn respond<'g>(&self, guess: &'g str) -> Result<GuessResult<'g>, WordleError> {
        if guess.chars().count() != self.bank.word_length() {
            return Err(WordleError::WordLength(self.bank.word_length()));
        }
        if !self.bank.is_legal_guess(guess) {
            return Err(WordleError::IllegalGuess(Box::from(guess)));
        }
        get_result_for_guess(self.objective.as_ref(), guess)
    }
}

/// Attempts to guess the oracle's objective word within the maximum number of guesses,
/// using the given guesser.
pub fn play_game_with_guesser<G: Guesser>(
    oracle: &GameOracle,
    max_num_guesses: u32,
    guesser: &mut G,
) -> Result<GameResult, WordleError> {
    let mut guesses: Vec<Box<str>> = Vec::new();
    for _ in 0..max_num_guesses {
        let guess = guesser.select_next_guess()?;
        guesses.push(Box::from(guess.as_ref()));
        let result = oracle.respond(guess.as_ref())?;
        if result.is_win() {
            return Ok(GameResult::Success(guesses));
        }
        guesser.update(&result)?;
    }
    Ok(GameResult::Failure(guesses))
}

/// Attempts to guess the given objective word within the maximum number of guesses,
/// using an [`ExpectedMatchesScorer`] over the bank's answer words.
pub fn play_game(
    objective: &str,
    max_num_guesses: u32,
    bank: &WordBank,
) -> Result<GameResult, WordleError> {
    let oracle = GameOracle::new(bank, objective)?;
    let scorer = ExpectedMatchesScorer::new(bank.answer_words());
    let mut guesser = MaxScoreGuesser::new(bank, scorer);
    play_game_with_guesser(&oracle, max_num_guesses, &mut guesser)
}
