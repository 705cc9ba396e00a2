use clap::{Parser, Subcommand};
use greedy_wordle_solver::scorers::ExpectedMatchesScorer;
use greedy_wordle_solver::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io;
use std::time::Instant;

/// Simple program to run a Wordle game in reverse, where the computer guesses the word.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains the legal guess words, with one word on each line.
    #[clap(short = 'g', long)]
    guesses_file: String,

    /// Path to a file that contains the legal answer words, with one word on each line.
    /// Every answer word must also appear in the guesses file. Defaults to the guesses
    /// file, in which case every word may be the answer.
    #[clap(short = 'a', long)]
    answers_file: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Benchmark the solver against every word in the answers file.
    Benchmark,
    /// Run a single game with the given word.
    Single { word: String },
    /// Run a single game with a randomly drawn answer.
    Random {
        /// Seed for the random draw, for repeatable games.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Run an interactive game against the solver.
    Interactive,
}

fn main() -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let args = Args::parse();

    let word_bank = load_word_bank(&args)?;
    println!("There are {} possible answers.", word_bank.len());

    match args.command {
        Command::Benchmark => run_benchmark(&word_bank)?,
        Command::Single { word } => play_single_game(&word, &word_bank)?,
        Command::Random { seed } => play_random_game(seed, &word_bank)?,
        Command::Interactive => play_interactive_game(&word_bank)?,
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn load_word_bank(args: &Args) -> Result<WordBank, Box<dyn Error>> {
    let mut guess_reader = io::BufReader::new(File::open(&args.guesses_file)?);
    let word_bank = match &args.answers_file {
        Some(answers_file) => {
            let mut answer_reader = io::BufReader::new(File::open(answers_file)?);
            WordBank::from_readers(&mut guess_reader, &mut answer_reader)?
        }
        None => WordBank::from_reader(&mut guess_reader)?,
    };
    Ok(word_bank)
}

fn create_guesser(word_bank: &WordBank) -> MaxScoreGuesser<ExpectedMatchesScorer> {
    MaxScoreGuesser::new(
        word_bank,
        ExpectedMatchesScorer::new(word_bank.answer_words()),
    )
}

fn run_benchmark(word_bank: &WordBank) -> Result<(), WordleError> {
    let mut guesser = create_guesser(word_bank);
    let mut num_guesses_per_game: Vec<u32> = Vec::new();
    for word in word_bank.answer_words() {
        let oracle = GameOracle::new(word_bank, word)?;
        match play_game_with_guesser(&oracle, 128, &mut guesser)? {
            GameResult::Success(guesses) => num_guesses_per_game.push(guesses.len() as u32),
            GameResult::Failure(guesses) => {
                eprintln!(
                    "Error: couldn't solve the word '{}' within {} guesses.",
                    word,
                    guesses.len()
                );
                std::process::exit(1);
            }
        }
        guesser.reset();
    }
    println!("Solved {} words. Results:", word_bank.len());

    let mut num_games_per_round: HashMap<u32, u32> = HashMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds = num_games_per_round.keys().copied().collect::<Vec<u32>>();
    num_rounds.sort_unstable();
    for num_round in num_rounds.iter() {
        println!(
            "|{}|{}|",
            num_round,
            num_games_per_round.get(num_round).unwrap()
        );
    }

    let average: f64 = num_games_per_round
        .iter()
        .fold(0, |acc, (num_guesses, num_games)| {
            acc + (num_guesses * num_games)
        }) as f64
        / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
    Ok(())
}

fn play_single_game(word: &str, word_bank: &WordBank) -> Result<(), WordleError> {
    let oracle = match GameOracle::new(word_bank, word) {
        Ok(oracle) => oracle,
        Err(WordleError::IllegalGuess(_)) => {
            eprintln!("Error: given word not in the answer list.");
            std::process::exit(1);
        }
        Err(error) => return Err(error),
    };
    run_game(&oracle, word_bank)
}

fn play_random_game(seed: Option<u64>, word_bank: &WordBank) -> Result<(), WordleError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let oracle = GameOracle::with_random_answer(word_bank, &mut rng);
    println!("The answer is: {}", oracle.objective());
    run_game(&oracle, word_bank)
}

fn run_game(oracle: &GameOracle, word_bank: &WordBank) -> Result<(), WordleError> {
    let mut guesser = create_guesser(word_bank);
    match play_game_with_guesser(oracle, 128, &mut guesser)? {
        GameResult::Success(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::Failure(guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
    }
    Ok(())
}

fn play_interactive_game(word_bank: &WordBank) -> Result<(), Box<dyn Error>> {
    let mut guesser = create_guesser(word_bank);
    println!("Choose a word from the answer list. Press enter once you've chosen.");

    {
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
    }

    println!(
        "I will now try to guess your word.\n\n\
         For each guess, enter the correctness of each letter as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"g.gy.\""
    );

    for round in 1..7 {
        let guess = guesser.select_next_guess()?;
        println!("I'm guessing: {}. How did I do?", guess);

        let mut result = read_result_for_guess(guess.as_ref());
        while result.is_err() {
            println!("{}", result.unwrap_err());
            result = read_result_for_guess(guess.as_ref());
        }

        let result = result.unwrap();

        if result.is_win() {
            println!("I did it! It took me {} guesses.", round);
            return Ok(());
        }

        match guesser.update(&result) {
            Err(WordleError::EmptyCandidatePool) => {
                println!("Your results don't match any word I know. Did you mistype one?");
                return Ok(());
            }
            other => other?,
        }
    }

    println!("I couldn't guess it :(");

    Ok(())
}

fn read_result_for_guess(guess: &str) -> io::Result<GuessResult> {
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    let input = buffer.trim();

    if guess.len() != input.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Input {} didn't match the length of my guess. Try again.",
                input
            ),
        ));
    }

    Ok(GuessResult {
        guess,
        results: input
            .chars()
            .map(|letter| match letter {
                '.' => Ok(LetterResult::NotPresent),
                'y' => Ok(LetterResult::PresentNotHere),
                'g' => Ok(LetterResult::Correct),
                _ => Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Must enter only the letters '.', 'y', or 'g'. Try again.",
                )),
            })
            .collect::<io::Result<Vec<LetterResult>>>()?,
    })
}
