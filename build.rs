use std::io::prelude::*;

const START_WORDS: &str = include_str!("words/start.txt");
const DICTIONARY: &str = include_str!("words/dictionary.txt");

fn main() {
    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let mut f = std::fs::File::create(out_dir.join("wordlists.rs"))
        .expect("could not create file in OUT_DIR");

    let start = Vec::from_iter(START_WORDS.lines().filter(|line| !line.is_empty()));
    writeln!(f, "pub static START_WORDS: [&str; {}] = [", start.len()).unwrap();
    for word in start {
        writeln!(f, "\"{}\",", word).unwrap();
    }
    writeln!(f, "];").unwrap();

    let mut lexicon = phf_codegen::Set::new();
    for word in DICTIONARY.lines().filter(|line| !line.is_empty()) {
        lexicon.entry(word);
    }
    writeln!(
        f,
        "static LEXICON: phf::Set<&'static str> = {};",
        lexicon.build()
    )
    .unwrap();
}
