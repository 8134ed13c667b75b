//! Phonetic building blocks shared by the generation modes.
//!
//! Syllables here are synthetic two-character consonant+vowel units, not
//! natural-language syllables. `estimate_syllables` is a vowel-run heuristic,
//! adequate for 5-7-5 packing but not a phonetic authority.

use rand::{Rng, RngExt};

/// Soft consonants used for generating pleasant-sounding syllables.
pub const SOFT_CONSONANTS: &str = "flmnrschv";
/// Vowels used for syllable synthesis and syllable estimation.
pub const VOWELS: &str = "aeiouy";

/// Generate a random two-character syllable: one soft consonant followed by
/// one vowel.
pub fn syllable<R: Rng>(rng: &mut R) -> String {
    let mut s = String::with_capacity(2);
    s.push(random_char(rng, SOFT_CONSONANTS));
    s.push(random_char(rng, VOWELS));
    s
}

/// Pick one uniformly random character from a non-empty ASCII charset.
pub fn random_char<R: Rng>(rng: &mut R, charset: &str) -> char {
    let bytes = charset.as_bytes();
    bytes[rng.random_range(0..bytes.len())] as char
}

/// Pick one uniformly random integer in the inclusive range `[min, max]`.
pub fn random_int<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.random_range(min..=max)
}

/// Pick one uniformly random element from a non-empty slice.
pub fn random_element<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Uppercase the first character of a word, leaving the rest unchanged.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Estimate the syllable count of a word.
///
/// Counts maximal runs of vowels (`aeiouy`) as one syllable each, subtracts
/// one for a trailing silent 'e' when more than one run was found, and floors
/// the result at 1 for any non-empty input. Empty input yields 0.
pub fn estimate_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let word = word.to_lowercase();
    let is_vowel = |c: char| VOWELS.contains(c);

    let mut count = 0;
    let mut prev_was_vowel = false;
    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = vowel;
    }

    if word.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}
