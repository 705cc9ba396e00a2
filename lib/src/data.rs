use crate::results::WordleError;
use std::collections::HashSet;
use std::io::BufRead;
use std::sync::Arc;

/// Contains the legal guess and answer words for a Wordle game.
///
/// The guess list is the full vocabulary that may be guessed. The answer list is the
/// subset of it that may be chosen as the objective word; it seeds each
/// [`CandidatePool`](crate::CandidatePool) and is what random objectives are drawn from.
#[derive(Debug)]
pub struct WordBank {
    guess_words: Vec<Arc<str>>,
    guess_set: HashSet<Arc<str>>,
    answer_words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading the guess and answer word lists from the
    /// given readers.
    ///
    /// Each reader should provide one word per line. Words are trimmed and converted to
    /// lower case, and empty lines are skipped. Fails if either list is empty
    /// ([`WordleError::EmptyWordList`]), if the words don't all share one length
    /// ([`WordleError::WordLength`]), or if an answer word is missing from the guess list
    /// ([`WordleError::IllegalGuess`]).
    pub fn from_readers<G: BufRead, A: BufRead>(
        guess_reader: &mut G,
        answer_reader: &mut A,
    ) -> Result<WordBank, WordleError> {
        let guesses = read_words(guess_reader)?;
        let answers = read_words(answer_reader)?;
        WordBank::from_vecs(guesses, answers)
    }

    /// Constructs a new `WordBank` from a single reader, where every word may also be
    /// the objective.
    pub fn from_reader<R: BufRead>(word_reader: &mut R) -> Result<WordBank, WordleError> {
        let words = read_words(word_reader)?;
        WordBank::from_vecs(words.clone(), words)
    }

    /// Constructs a new `WordBank` from the given guess and answer words.
    pub fn from_iterators<G, A>(guesses: G, answers: A) -> Result<WordBank, WordleError>
    where
        G: IntoIterator,
        G::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        WordBank::from_vecs(
            guesses
                .into_iter()
                .map(|word| word.as_ref().to_string())
                .collect(),
            answers
                .into_iter()
                .map(|word| word.as_ref().to_string())
                .collect(),
        )
    }

    /// Constructs a new `WordBank` where the given words serve as both the guess and the
    /// answer list.
    ///
    /// ```
    /// use greedy_wordle_solver::WordBank;
    ///
    /// let bank = WordBank::from_iterator(["abc", "def", "ghi"]).unwrap();
    ///
    /// assert_eq!(bank.len(), 3);
    /// assert_eq!(bank.word_length(), 3);
    /// ```
    pub fn from_iterator<I>(words: I) -> Result<WordBank, WordleError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().to_string())
            .collect();
        WordBank::from_vecs(words.clone(), words)
    }

    fn from_vecs(guesses: Vec<String>, answers: Vec<String>) -> Result<WordBank, WordleError> {
        let (guess_words, word_length) = normalize_words(guesses)?;
        let (answer_words, answer_length) = normalize_words(answers)?;
        if answer_length != word_length {
            return Err(WordleError::WordLength(word_length));
        }
        let guess_set: HashSet<Arc<str>> = guess_words.iter().map(Arc::clone).collect();
        for answer in &answer_words {
            if !guess_set.contains(&**answer) {
                return Err(WordleError::IllegalGuess(Box::from(answer.as_ref())));
            }
        }
        Ok(WordBank {
            guess_words,
            guess_set,
            answer_words,
            word_length,
        })
    }

    /// Retrieves the full legal-guess vocabulary.
    pub fn guess_words(&self) -> &[Arc<str>] {
        &self.guess_words
    }

    /// Retrieves the words that may be the objective, in their original order.
    pub fn answer_words(&self) -> &[Arc<str>] {
        &self.answer_words
    }

    /// Returns `true` iff the given word may legally be guessed.
    pub fn is_legal_guess(&self, word: &str) -> bool {
        self.guess_set.contains(word)
    }

    /// Returns the number of possible answer words.
    pub fn len(&self) -> usize {
        self.answer_words.len()
    }

    /// Returns `true` iff there are no possible answer words. Construction fails for
    /// empty word lists, so this is always `false` in practice.
    pub fn is_empty(&self) -> bool {
        self.answer_words.is_empty()
    }

    /// Returns the number of letters in every word in the bank.
    pub fn word_length(&self) -> usize {
        self.word_length
    }
}

fn read_words<R: BufRead>(word_reader: &mut R) -> Result<Vec<String>, WordleError> {
    word_reader
        .lines()
        .map(|maybe_word| maybe_word.map_err(WordleError::from))
        .collect()
}

/// Lower-cases the given words, dropping empty lines and checking that every word has
/// the same number of letters as the first.
fn normalize_words(words: Vec<String>) -> Result<(Vec<Arc<str>>, usize), WordleError> {
    let mut word_length = 0;
    let mut normalized: Vec<Arc<str>> = Vec::with_capacity(words.len());
    for word in words {
        let word = word.trim();
        if word.is_empty() {
            continue;
        }
        let word = word.to_lowercase();
        let length = word.chars().count();
        if word_length == 0 {
            word_length = length;
        } else if length != word_length {
            return Err(WordleError::WordLength(word_length));
        }
        normalized.push(Arc::from(word.as_str()));
    }
    if normalized.is_empty() {
        return Err(WordleError::EmptyWordList);
    }
    Ok((normalized, word_length))
}
