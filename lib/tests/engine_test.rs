#[macro_use]
extern crate assert_matches;

use greedy_wordle_solver::scorers::*;
use greedy_wordle_solver::*;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::result::Result;

fn create_guesser(bank: &WordBank) -> MaxScoreGuesser<ExpectedMatchesScorer> {
    MaxScoreGuesser::new(bank, ExpectedMatchesScorer::new(bank.answer_words()))
}

#[test]
fn guesser_converges_on_the_objective() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(["abcd", "abce", "wxyz", "wxyq"])?;
    let oracle = GameOracle::new(&bank, "abce")?;
    let mut guesser = create_guesser(&bank);

    // All four words tie on the opening score, so the first in pool order wins.
    let first_guess = guesser.select_next_guess()?;
    assert_eq!(first_guess.as_ref(), "abcd");

    let result = oracle.respond(first_guess.as_ref())?;
    assert_eq!(
        result.results,
        vec![
            LetterResult::Correct,
            LetterResult::Correct,
            LetterResult::Correct,
            LetterResult::NotPresent
        ]
    );

    guesser.update(&result)?;
    assert_eq!(guesser.possible_words().len(), 1);
    assert_eq!(guesser.select_next_guess()?.as_ref(), "abce");
    Ok(())
}

#[test]
fn guesser_fails_once_every_candidate_is_eliminated() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(["abcd", "abce"])?;
    let mut guesser = create_guesser(&bank);

    // No candidate is consistent with its own letters all being absent.
    let update_result = guesser.update(&GuessResult {
        guess: "abcd",
        results: vec![LetterResult::NotPresent; 4],
    });

    assert_matches!(update_result, Err(WordleError::EmptyCandidatePool));
    assert_matches!(
        guesser.select_next_guess(),
        Err(WordleError::EmptyCandidatePool)
    );
    Ok(())
}

#[test]
fn guesser_reset_replays_the_opening_guess() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(["alpha", "allot", "begot", "below", "endow", "ingot"])?;
    let mut guesser = create_guesser(&bank);

    let opening_guess = guesser.select_next_guess()?;
    let oracle = GameOracle::new(&bank, "endow")?;
    play_game_with_guesser(&oracle, bank.len() as u32, &mut guesser)?;

    guesser.reset();

    assert_eq!(guesser.possible_words().len(), bank.len());
    assert_eq!(guesser.select_next_guess()?, opening_guess);
    Ok(())
}

#[test]
fn play_game_solves_every_word_in_the_bank() -> Result<(), WordleError> {
    let words = ["alpha", "allot", "begot", "below", "endow", "ingot"];
    let bank = WordBank::from_iterator(words)?;

    for objective in words {
        let game_result = play_game(objective, bank.len() as u32, &bank)?;
        assert_matches!(game_result, GameResult::Success(guesses) if guesses.last().map(|guess| guess.as_ref()) == Some(objective));
    }
    Ok(())
}

#[test]
fn play_game_rejects_an_unknown_objective() {
    let bank = WordBank::from_iterator(["alpha", "allot"]).unwrap();

    assert_matches!(
        play_game("other", 10, &bank),
        Err(WordleError::IllegalGuess(_))
    );
}

#[test]
fn oracle_rejects_illegal_guesses() -> Result<(), WordleError> {
    let bank = WordBank::from_iterators(["alpha", "allot", "begot"], ["alpha"])?;
    let oracle = GameOracle::new(&bank, "alpha")?;

    assert_matches!(
        oracle.respond("other"),
        Err(WordleError::IllegalGuess(word)) if word.as_ref() == "other"
    );
    assert_matches!(oracle.respond("goal"), Err(WordleError::WordLength(5)));
    Ok(())
}

#[test]
fn oracle_answers_legal_guesses_from_the_full_guess_list() -> Result<(), WordleError> {
    let bank = WordBank::from_iterators(["alpha", "allot", "begot"], ["alpha"])?;
    let oracle = GameOracle::new(&bank, "alpha")?;

    // "begot" can never be the answer but is still a legal probe.
    let result = oracle.respond("begot")?;

    assert_eq!(
        result.results,
        vec![
            LetterResult::NotPresent,
            LetterResult::NotPresent,
            LetterResult::NotPresent,
            LetterResult::NotPresent,
            LetterResult::NotPresent
        ]
    );
    Ok(())
}

#[test]
fn random_oracle_draws_from_the_answer_list() {
    let bank = WordBank::from_iterators(["alpha", "allot", "begot"], ["allot"]).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let oracle = GameOracle::with_random_answer(&bank, &mut rng);

    assert_eq!(oracle.objective(), "allot");
}

#[test]
fn seeded_games_are_repeatable() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(["alpha", "allot", "begot", "below", "endow", "ingot"])?;

    let first_oracle = GameOracle::with_random_answer(&bank, &mut StdRng::seed_from_u64(17));
    let second_oracle = GameOracle::with_random_answer(&bank, &mut StdRng::seed_from_u64(17));
    let mut first_guesser = create_guesser(&bank);
    let mut second_guesser = create_guesser(&bank);

    let first_game = play_game_with_guesser(&first_oracle, 10, &mut first_guesser)?;
    let second_game = play_game_with_guesser(&second_oracle, 10, &mut second_guesser)?;

    assert_eq!(first_game, second_game);
    Ok(())
}
