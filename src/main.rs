use std::io::prelude::*;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scramble::{Lexicon, Round, WordList};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Make words from the letters of the round's root word.
///
/// Every line you type is submitted as an answer. `:new` deals a fresh root
/// word, `:quit` leaves the game.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Seed for root-word selection.
    ///
    /// Pass the same seed to replay the same sequence of rounds. By default
    /// selection is seeded from the operating system.
    #[clap(short, long)]
    seed: Option<u64>,

    /// Newline-delimited file of root words to use instead of the bundled
    /// list.
    #[clap(short, long)]
    words: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();

    let args = Args::parse();

    let custom;
    let words = match &args.words {
        Some(path) => {
            custom = WordList::from_path(path)
                .with_context(|| format!("could not read word list {}", path.display()))?;
            &custom
        }
        None => WordList::bundled(),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut round = Round::start(words, &mut rng);
    render(&round);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let answer = line.context("could not read from stdin")?;
        match answer.as_str() {
            ":quit" | ":q" => break,
            ":new" => {
                round.restart(words, &mut rng);
                render(&round);
            }
            _ => match round.submit(&answer, &Lexicon) {
                Ok(()) => render(&round),
                Err(rejection) => println!("{}: {}", rejection.title(), rejection),
            },
        }
    }
    Ok(())
}

fn render(round: &Round) {
    println!("== {} ==", round.root());
    for word in round.used() {
        println!("  {}", word);
    }
}
