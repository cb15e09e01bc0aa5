use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::debug;

use rs_predict_core::model::generator::Generator;

/// Predicts the word(s) most likely to follow a seed word in a text corpus.
///
/// Without a mode, prints the k most frequent successors of the seed.
/// With `one`, prints a chain of k words that always follows the most
/// frequent successor. With `all`, prints a chain of k words sampled
/// proportionally to observed frequencies.
#[derive(Parser)]
#[command(name = "rs-predict", version)]
struct Args {
    /// Path to the corpus text file
    file: PathBuf,

    /// Seed word (matched against lowercased, punctuation-stripped tokens)
    seed: String,

    /// Number of words to output
    k: usize,

    /// Chain mode: `one` (greedy) or `all` (weighted random)
    #[arg(value_enum)]
    mode: Option<Mode>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Chain of the most probable words
    One,
    /// Chain of randomly selected words, weighted by frequency
    All,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let generator = Generator::from_file(&args.file)?;
    debug!(
        "model built from {}: {} distinct predecessors",
        args.file.display(),
        generator.model().len()
    );

    let words: Vec<String> = match args.mode {
        None => {
            let ranked = generator.ranked(&args.seed, args.k);
            for stat in &ranked {
                debug!("{} followed '{}' {} time(s)", stat.word(), args.seed, stat.occurrence());
            }
            ranked.iter().map(|stat| stat.word().to_owned()).collect()
        }
        Some(Mode::One) => generator.greedy_chain(&args.seed, args.k),
        Some(Mode::All) => generator.weighted_chain(&args.seed, args.k),
    };

    println!("{}", words.join(" "));

    Ok(())
}
