#[macro_use]
extern crate assert_matches;

use greedy_wordle_solver::scorers::*;
use greedy_wordle_solver::*;

use std::result::Result;
use std::sync::Arc;

fn to_arc_vec(words: &[&str]) -> Vec<Arc<str>> {
    words.iter().map(|word| Arc::from(*word)).collect()
}

#[test]
fn expected_matches_scorer_prefers_words_that_resemble_the_pool() {
    let words = to_arc_vec(&["below", "endow", "elbow"]);
    let scorer = ExpectedMatchesScorer::new(&words);

    // "below": 5 (itself) + 2 ("endow") + 2 ("elbow").
    assert_eq!(scorer.score_word(&words[0]), 9);
    // "endow": 2 + 5 + 3, and "elbow": 2 + 3 + 5.
    assert_eq!(scorer.score_word(&words[1]), 10);
    assert_eq!(scorer.score_word(&words[2]), 10);
}

#[test]
fn solve_wordle() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(["alpha", "allot", "begot", "below", "endow", "ingot"])?;
    let scorer = ExpectedMatchesScorer::new(bank.answer_words());
    let mut guesser = MaxScoreGuesser::new(&bank, scorer);
    let oracle = GameOracle::new(&bank, "alpha")?;

    let result = play_game_with_guesser(&oracle, bank.len() as u32, &mut guesser)?;

    assert_matches!(result, GameResult::Success(_guesses));
    Ok(())
}

#[test]
fn scores_count_positional_matches_against_the_whole_pool() {
    let words = to_arc_vec(&["aaaa", "aaab", "zzzz"]);
    let scorer = ExpectedMatchesScorer::new(&words);

    // "aaaa": 4 against itself, 3 against "aaab", 0 against "zzzz".
    assert_eq!(scorer.score_word(&words[0]), 7);
    assert_eq!(scorer.score_word(&words[1]), 7);
    assert_eq!(scorer.score_word(&words[2]), 4);
}

#[test]
fn update_restricts_scoring_to_the_surviving_words() -> Result<(), WordleError> {
    let words = to_arc_vec(&["aaaa", "aaab", "zzzz"]);
    let mut scorer = ExpectedMatchesScorer::new(&words);

    scorer.update("zzzz", &words[0..2])?;

    assert_eq!(scorer.score_word(&words[0]), 7);
    assert_eq!(scorer.score_word(&words[1]), 7);
    assert_eq!(scorer.score_word(&words[2]), 0);
    Ok(())
}

#[test]
fn tied_scores_go_to_the_earliest_word() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(["abcd", "abce", "wxyz", "wxyq"])?;
    let scorer = ExpectedMatchesScorer::new(bank.answer_words());
    let mut guesser = MaxScoreGuesser::new(&bank, scorer);

    // Every word scores 7, so pool order decides.
    assert_eq!(guesser.select_next_guess()?.as_ref(), "abcd");
    Ok(())
}
