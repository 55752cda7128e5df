//! Word data: the bundled root-word pool and English lexicon, both embedded
//! at build time, plus loading of custom lists from disk.

use std::borrow::Cow;
use std::io;
use std::path::Path;

use once_cell::sync::OnceCell;
use rand::seq::SliceRandom;
use rand::Rng;

include!(concat!(env!("OUT_DIR"), "/wordlists.rs"));

static BUNDLED: OnceCell<WordList> = OnceCell::new();

/// A pool of candidate root words.
///
/// Lists are newline-delimited, one word per line, and entries are taken
/// verbatim: no trimming, no validation. A file that ends in a newline
/// therefore grows a final empty entry; callers own the hygiene of their
/// lists, and [`crate::Round::start`] copes with whatever comes out.
pub struct WordList {
    words: Vec<Cow<'static, str>>,
}

impl WordList {
    /// The list shipped with the game.
    pub fn bundled() -> &'static Self {
        BUNDLED.get_or_init(|| Self {
            words: START_WORDS.iter().copied().map(Cow::Borrowed).collect(),
        })
    }

    /// A pool with nothing in it, as a failed load would produce.
    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Parse a newline-delimited list.
    pub fn from_contents(contents: &str) -> Self {
        Self {
            words: contents
                .split('\n')
                .map(|line| Cow::Owned(line.to_owned()))
                .collect(),
        }
    }

    /// Read a list from disk.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::from_contents(&std::fs::read_to_string(path)?))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw one word uniformly at random; `None` only from an empty pool.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(|word| word.as_ref())
    }
}

/// The bundled English lexicon, compiled into the binary as a perfect-hash
/// set.
///
/// Stands in for a platform spell checker: a word is real if the list has
/// it. Lookups allocate nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lexicon;

impl crate::Dictionary for Lexicon {
    fn is_valid(&self, word: &str) -> bool {
        LEXICON.contains(word)
    }
}
