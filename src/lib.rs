//! Core of the word-scramble game: a round hands the player a root word, and
//! every submission is checked against three rules before it joins the
//! round's history. Spellability from the root's letters, originality within
//! the round, and realness (length, not the root itself, known to the
//! dictionary) are decided here; rendering and input collection live in the
//! binary.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

pub mod words;

pub use words::{Lexicon, WordList};

/// Root word used when the word list has nothing to offer.
pub const FALLBACK_ROOT: &str = "silkworm";

/// A word-validity oracle.
///
/// The game treats the answer as authoritative and final; no retry, no
/// caching. The bundled [`Lexicon`] is the real thing, and a plain `HashSet`
/// stands in for it in tests.
pub trait Dictionary {
    /// Whether `word` is a correctly spelled English word.
    fn is_valid(&self, word: &str) -> bool;
}

impl<'a, S: std::hash::BuildHasher> Dictionary for HashSet<&'a str, S> {
    fn is_valid(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Why a submission was turned away.
///
/// Each reason carries its alert text: [`Rejection::title`] is the headline
/// and the `Display` impl is the body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Needs letters the root word does not have.
    #[error("You can't spell that word from {0}")]
    NotPossible(String),
    /// Already accepted earlier this round.
    #[error("Be more original!")]
    AlreadyUsed,
    /// Shorter than three letters.
    #[error("Word can't be less than 3 letters")]
    TooShort,
    /// The candidate is the root word itself.
    #[error("Word can't be the same as the title")]
    SameAsRoot,
    /// The dictionary has never heard of it.
    #[error("You can't just make them up, you know!")]
    NotReal,
}

impl Rejection {
    pub fn title(&self) -> &'static str {
        match self {
            Rejection::NotPossible(_) => "Word not possible",
            Rejection::AlreadyUsed => "Word used already",
            Rejection::TooShort => "Short word",
            Rejection::SameAsRoot => "Repeated title",
            Rejection::NotReal => "Word not recognised",
        }
    }
}

/// Whether `candidate` can be assembled from the letters of `root`, each
/// letter used at most as many times as `root` has it.
///
/// Both sides are expected in lowercase; [`validate`] takes care of that.
/// The empty candidate passes vacuously.
pub fn is_possible(candidate: &str, root: &str) -> bool {
    let mut pool: Vec<char> = root.chars().collect();
    for letter in candidate.chars() {
        match pool.iter().position(|&held| held == letter) {
            Some(at) => {
                pool.swap_remove(at);
            }
            None => return false,
        }
    }
    true
}

/// Whether `candidate` has not been accepted yet this round.
///
/// Membership is tested against the history exactly as stored, so an entry
/// recorded with uppercase letters in it never matches the lowercased
/// candidate.
pub fn is_original(candidate: &str, used: &[String]) -> bool {
    !used.iter().any(|word| word == candidate)
}

/// Decide a submission.
///
/// The checks run in a fixed order and stop at the first failure, so every
/// outcome maps to exactly one [`Rejection`]. The candidate is lowercased
/// once up front; the history keeps whatever casing was recorded (see
/// [`Round::record`]).
pub fn validate<D>(
    candidate: &str,
    root: &str,
    used: &[String],
    dictionary: &D,
) -> Result<(), Rejection>
where
    D: Dictionary + ?Sized,
{
    let candidate = candidate.to_lowercase();
    if !is_possible(&candidate, &root.to_lowercase()) {
        return Err(Rejection::NotPossible(root.to_lowercase()));
    }
    if !is_original(&candidate, used) {
        return Err(Rejection::AlreadyUsed);
    }
    if candidate.encode_utf16().count() < 3 {
        return Err(Rejection::TooShort);
    }
    if candidate == root {
        return Err(Rejection::SameAsRoot);
    }
    if !dictionary.is_valid(&candidate) {
        return Err(Rejection::NotReal);
    }
    Ok(())
}

/// One round of play: the root word and every submission accepted against it.
///
/// The two fields only ever change together: [`Round::start`] and
/// [`Round::restart`] swap in a fresh root with an empty history in one move,
/// and accepted submissions grow the history. Nothing else mutates a round.
pub struct Round {
    root: String,
    used: Vec<String>,
}

impl Round {
    /// Open a round on a root word drawn uniformly from `words`.
    ///
    /// An empty list is not an error; the round falls back to
    /// [`FALLBACK_ROOT`].
    pub fn start<R: Rng>(words: &WordList, rng: &mut R) -> Self {
        let root = words.choose(rng).unwrap_or(FALLBACK_ROOT).to_owned();
        tracing::debug!(%root, "starting round");
        Self {
            root,
            used: Vec::new(),
        }
    }

    /// Throw the current round away and start over.
    pub fn restart<R: Rng>(&mut self, words: &WordList, rng: &mut R) {
        *self = Self::start(words, rng);
    }

    /// The word of the round, as drawn from the list.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted submissions, most recent first.
    pub fn used(&self) -> &[String] {
        &self.used
    }

    /// Validate `candidate` against this round and, if it holds up, record
    /// it.
    pub fn submit<D>(&mut self, candidate: &str, dictionary: &D) -> Result<(), Rejection>
    where
        D: Dictionary + ?Sized,
    {
        match validate(candidate, &self.root, &self.used, dictionary) {
            Ok(()) => {
                tracing::debug!(candidate, "accepted");
                self.record(candidate);
                Ok(())
            }
            Err(rejection) => {
                tracing::debug!(candidate, reason = rejection.title(), "rejected");
                Err(rejection)
            }
        }
    }

    /// Push an accepted submission, in its original casing, to the front of
    /// the history.
    ///
    /// The caller vouches that `candidate` already passed [`validate`]
    /// against this round; nothing is re-checked here.
    pub fn record(&mut self, candidate: &str) {
        self.used.insert(0, candidate.to_owned());
    }
}

#[cfg(test)]
macro_rules! dict {
    ($($word:literal),* $(,)?) => {
        vec![$($word),*]
            .into_iter()
            .collect::<std::collections::HashSet<&str>>()
    };
}
