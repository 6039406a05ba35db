use rs_lex_core::features::consonants::consonant_frequency;
use rs_lex_core::features::shape::word_shape;
use rs_lex_core::features::syllables::num_syllables;
use rs_lex_core::features::unigrams::Unigrams;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Show resource and table loads as they happen
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    // Consonant density. The vowel set is lowercase-only, so "AEIOU"
    // scores 1.0 while "aeiou" scores 0.0
    for word in ["sky", "hello", "aeiou", "AEIOU", "extraordinary"] {
        println!("consonant_frequency({word}) = {}", consonant_frequency(word)?);
    }

    // An empty word has a zero-length denominator and is rejected
    match consonant_frequency("") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Empty word rejected: {e}"),
    }

    // Syllable counts use one hyphenation dictionary per language,
    // loaded on first use and shared afterwards
    for language in ["english", "spanish", "german"] {
        let count = num_syllables("universal", language)?;
        println!("num_syllables(universal, {language}) = {count}");
    }

    // Multiword phrases are split on whitespace and summed per token
    println!(
        "num_syllables(hello world, english) = {}",
        num_syllables("hello world", "english")?
    );

    // Language names are matched exactly; anything else is rejected
    // before any dictionary is loaded
    match num_syllables("mot", "french") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("French is not supported: {e}"),
    }

    // Orthographic shapes of the first token: case pattern, digit runs,
    // punctuation. Runs longer than four are truncated
    for word in ["Apple", "123", "HELLO", "don't", "Covid-19"] {
        println!("word_shape({word}, english) = {}", word_shape(word, "english")?);
    }

    // Whitespace-only input produces no tokens to classify
    match word_shape("   ", "english") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Nothing to analyze: {e}"),
    }

    // Load the unigram table from the "data" directory.
    // A compact .bin sidecar is written on first load and preferred on
    // the next run
    let unigrams = Unigrams::open("./data/unigrams.csv")?;
    println!("Loaded {} unigrams", unigrams.len());

    for word in ["the", "extraordinary", "borborygmus"] {
        match unigrams.probability(word) {
            Some(p) => println!("P({word}) = {p}"),
            None => println!("P({word}) is unknown"),
        }
    }

    Ok(())
}
