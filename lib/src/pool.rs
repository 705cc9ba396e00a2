use crate::data::WordBank;
use crate::results::{get_result_for_guess, GuessResult, WordleError};
use std::sync::Arc;

/// The words that are still consistent with every guess result seen so far.
///
/// The pool starts as the full legal-answer list and only ever shrinks. It keeps the
/// answer-list order, which makes tie-breaking between equally scored guesses
/// deterministic.
#[derive(Clone)]
pub struct CandidatePool {
    all_words: Vec<Arc<str>>,
    candidates: Vec<Arc<str>>,
}

impl CandidatePool {
    /// Creates a pool holding every legal answer in the given bank.
    pub fn new(bank: &WordBank) -> CandidatePool {
        CandidatePool {
            all_words: bank.answer_words().to_vec(),
            candidates: bank.answer_words().to_vec(),
        }
    }

    /// Retrieves the surviving candidates, in their original order.
    pub fn candidates(&self) -> &[Arc<str>] {
        &self.candidates
    }

    /// Returns the number of surviving candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` iff no candidates survive.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Removes every candidate that could not have produced the given result.
    ///
    /// A candidate survives only if guessing `result.guess` against it would have
    /// produced exactly `result`, so re-applying the same result leaves the pool
    /// unchanged. Returns [`WordleError::EmptyCandidatePool`] if nothing survives, which
    /// means the given results were inconsistent; the pool is left empty in that case.
    pub fn eliminate(&mut self, result: &GuessResult) -> Result<(), WordleError> {
        let mut remaining = Vec::with_capacity(self.candidates.len());
        for candidate in &self.candidates {
            let hypothetical = get_result_for_guess(candidate.as_ref(), result.guess)?;
            if hypothetical.results == result.results {
                remaining.push(Arc::clone(candidate));
            }
        }
        self.candidates = remaining;
        if self.candidates.is_empty() {
            return Err(WordleError::EmptyCandidatePool);
        }
        Ok(())
    }

    /// Refills the pool with the full legal-answer list, ready for a new game.
    pub fn reset(&mut self) {
        self.candidates = self.all_words.clone();
    }
}
