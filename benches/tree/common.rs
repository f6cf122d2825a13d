use std::ops::Range;

use rand::{
    distr::Alphanumeric,
    seq::{IndexedRandom, SliceRandom},
    Rng, SeedableRng,
};

/// Generates words that share a configurable amount of prefixes, the way autocomplete
/// dictionaries do.
pub fn get_words(
    seed: u64,
    prefix_count: usize,
    prefix_sizes: Range<usize>,
    suffix_count: usize,
    suffix_size: usize,
) -> Vec<String> {
    let random_string = |seed: u64, size: usize| {
        rand::rngs::StdRng::seed_from_u64(seed)
            .sample_iter(Alphanumeric)
            .map(char::from)
            .take(size)
            .collect::<String>()
    };
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut words = Vec::new();
    for prefix_size in prefix_sizes {
        let prefixes: Vec<_> = (0..prefix_count)
            .map(|_| random_string(rng.random(), prefix_size))
            .collect();
        for suffix_index in 0..suffix_count {
            let mut word: String = prefixes
                .iter()
                .take(1 + suffix_index % prefix_count)
                .map(String::as_str)
                .collect();
            word.push_str(&random_string(rng.random(), suffix_size));
            words.push(word);
        }
    }
    words.shuffle(&mut rng);
    words
}

/// Picks query prefixes by truncating some of the words.
pub fn get_prefixes(seed: u64, words: &[String], count: usize, len: usize) -> Vec<String> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    words
        .choose_multiple(&mut rng, count)
        .map(|word| word.chars().take(len).collect())
        .collect()
}
