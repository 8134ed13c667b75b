//! The nine key-generation modes and their dispatch.
//!
//! Every mode is a pure function of a theme's word list and an injected
//! randomness source. Generated keys are kept in lockstep with the
//! structural patterns in [`crate::classify`]: whatever a mode emits, its
//! pattern must accept.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::phonetics::{capitalize, estimate_syllables, random_element, random_int, syllable};
use crate::theme::Theme;

/// Time-flavored rune values appended by the rune mode.
pub const RUNES: [&str; 7] = [
    "now+1d",
    "now-2h",
    "dawn",
    "midnight",
    "solstice",
    "infinite",
    "epoch",
];

/// Sentinel returned when 5-7-5 packing cannot be completed.
pub const INCOMPLETE_HAIKU: &str = "incomplete-haiku";

/// Maximum number of keys a single batch request may ask for.
pub const MAX_BATCH: usize = 100;

/// Errors surfaced by the string-facing wrapper API.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error(
        "unknown mode '{0}' (expected one of: haiku, lace, mirrora, rune, sonnet, sigil, seed, mantra, quartz)"
    )]
    UnknownMode(String),
    #[error(
        "unknown theme '{0}' (expected one of: haiku, nocturnal, sunny, floreal, oceanic, crystalline, mythic, forest, desert, celestial, library, decay, steampunk)"
    )]
    UnknownTheme(String),
    #[error("count must be between 1 and {MAX_BATCH}, got {0}")]
    InvalidCount(usize),
}

/// Closed set of generation modes.
///
/// Declaration order is the classifier's enumeration order; an unqualified
/// classification reports the first matching mode in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Haiku,
    Lace,
    Mirrora,
    Rune,
    Sonnet,
    Sigil,
    Seed,
    Mantra,
    Quartz,
}

impl Mode {
    /// All modes, in enumeration order.
    pub const ALL: [Mode; 9] = [
        Mode::Haiku,
        Mode::Lace,
        Mode::Mirrora,
        Mode::Rune,
        Mode::Sonnet,
        Mode::Sigil,
        Mode::Seed,
        Mode::Mantra,
        Mode::Quartz,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Haiku => "haiku",
            Self::Lace => "lace",
            Self::Mirrora => "mirrora",
            Self::Rune => "rune",
            Self::Sonnet => "sonnet",
            Self::Sigil => "sigil",
            Self::Seed => "seed",
            Self::Mantra => "mantra",
            Self::Quartz => "quartz",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "haiku" => Some(Self::Haiku),
            "lace" => Some(Self::Lace),
            "mirrora" => Some(Self::Mirrora),
            "rune" => Some(Self::Rune),
            "sonnet" => Some(Self::Sonnet),
            "sigil" => Some(Self::Sigil),
            "seed" => Some(Self::Seed),
            "mantra" => Some(Self::Mantra),
            "quartz" => Some(Self::Quartz),
            _ => None,
        }
    }

    pub fn from_name(s: &str) -> Result<Self, KeyError> {
        Self::parse(s).ok_or_else(|| KeyError::UnknownMode(s.to_string()))
    }
}

impl Theme {
    pub fn from_name(s: &str) -> Result<Self, KeyError> {
        Self::parse(s).ok_or_else(|| KeyError::UnknownTheme(s.to_string()))
    }
}

/// Generate one key with the thread-local RNG.
pub fn generate(mode: Mode, theme: Theme) -> String {
    generate_with(mode, theme, &mut rand::rng())
}

/// Generate one key with an injected randomness source.
pub fn generate_with<R: Rng>(mode: Mode, theme: Theme, rng: &mut R) -> String {
    let words = theme.words();
    match mode {
        Mode::Haiku => haiku(words, rng),
        Mode::Lace => lace(words, rng),
        Mode::Mirrora => mirrora(rng),
        Mode::Rune => rune(words, rng),
        Mode::Sonnet => sonnet(words, rng),
        Mode::Sigil => sigil(words, rng),
        Mode::Seed => seed(words, rng),
        Mode::Mantra => mantra(words, rng),
        Mode::Quartz => quartz(words, rng),
    }
}

/// Generate `count` independent keys, validating `1 <= count <= 100`.
pub fn generate_batch(mode: Mode, theme: Theme, count: usize) -> Result<Vec<String>, KeyError> {
    if count < 1 || count > MAX_BATCH {
        return Err(KeyError::InvalidCount(count));
    }
    let mut rng = rand::rng();
    Ok((0..count)
        .map(|_| generate_with(mode, theme, &mut rng))
        .collect())
}

/// Pack one haiku line: greedily accept words whose syllable count fits the
/// remaining target, stopping once the target is hit exactly.
fn pack_line(pool: &[&str], used: &mut [bool], target: usize) -> Option<String> {
    let mut line = String::new();
    let mut total = 0;

    for (i, word) in pool.iter().enumerate() {
        if used[i] {
            continue;
        }
        let syll = estimate_syllables(word);
        if syll == 0 {
            continue;
        }
        if total + syll <= target {
            line.push_str(&capitalize(word));
            used[i] = true;
            total += syll;
            if total == target {
                break;
            }
        }
    }

    (total == target).then_some(line)
}

/// 5-7-5 syllable packing over the theme's pooled vocabulary. Words are drawn
/// in a random order, without replacement across lines. Returns
/// [`INCOMPLETE_HAIKU`] when any line misses its exact target.
fn haiku<R: Rng>(words: &[&str], rng: &mut R) -> String {
    let mut pool: Vec<&str> = words.iter().copied().filter(|w| !w.is_empty()).collect();
    pool.shuffle(rng);

    // Duplicate entries in a theme collapse to a single draw.
    let mut seen = HashSet::new();
    pool.retain(|w| seen.insert(*w));

    let mut used = vec![false; pool.len()];
    let first = pack_line(&pool, &mut used, 5);
    let second = pack_line(&pool, &mut used, 7);
    let third = pack_line(&pool, &mut used, 5);

    match (first, second, third) {
        (Some(a), Some(b), Some(c)) => format!("{a}-{b}-{c}"),
        _ => INCOMPLETE_HAIKU.to_string(),
    }
}

/// Palindromic pattern: `word+syllable-reversedSyllable+reversedWord`.
fn lace<R: Rng>(words: &[&str], rng: &mut R) -> String {
    let word = random_element(rng, words);
    let mid = syllable(rng);
    let rev_mid: String = mid.chars().rev().collect();
    let rev_word: String = word.chars().rev().collect();
    format!("{word}{mid}-{rev_mid}{rev_word}")
}

/// Mirrored syllable pair; ignores the theme entirely.
fn mirrora<R: Rng>(rng: &mut R) -> String {
    let s = syllable(rng);
    let rev: String = s.chars().rev().collect();
    format!("{rev}-{s}")
}

/// Capitalized haiku base plus an underscore-separated temporal rune.
///
/// The haiku base is computed once and reused; when packing fails the
/// sentinel propagates as `Incomplete-haiku_<rune>`, which intentionally
/// falls outside the rune pattern.
fn rune<R: Rng>(words: &[&str], rng: &mut R) -> String {
    let base = capitalize(&haiku(words, rng));
    let rune = random_element(rng, &RUNES);
    format!("{base}_{rune}")
}

/// Two capitalized words, each embellished with a two-character syllable.
fn sonnet<R: Rng>(words: &[&str], rng: &mut R) -> String {
    let first = random_element(rng, words);
    let second = random_element(rng, words);
    let first_syll = syllable(rng);
    let second_syll = syllable(rng);
    format!(
        "{}{first_syll}-{}{second_syll}",
        capitalize(first),
        capitalize(second)
    )
}

/// `Word-###-Word` with a random three-digit number.
fn sigil<R: Rng>(words: &[&str], rng: &mut R) -> String {
    let first = random_element(rng, words);
    let second = random_element(rng, words);
    let num = random_int(rng, 100, 999);
    format!("{}-{num}-{}", capitalize(first), capitalize(second))
}

/// Capitalized word prefix (at most four characters) plus a four-digit
/// lowercase hex suffix in `[0x1000, 0x9999]`.
fn seed<R: Rng>(words: &[&str], rng: &mut R) -> String {
    let word = random_element(rng, words);
    let prefix: String = word.chars().take(4).collect();
    let hex = random_int(rng, 0x1000, 0x9999);
    format!("{}-{:x}", capitalize(&prefix), hex)
}

/// One word repeated twice, then an independently drawn second word.
fn mantra<R: Rng>(words: &[&str], rng: &mut R) -> String {
    let first = random_element(rng, words);
    let second = random_element(rng, words);
    let word = capitalize(first);
    let other = capitalize(second);
    format!("{word}-{word}-{other}")
}

/// `Word##.##fragment` where the fragment is the reversed capitalized word
/// truncated to four characters and the two-digit number repeats verbatim.
fn quartz<R: Rng>(words: &[&str], rng: &mut R) -> String {
    let root = random_element(rng, words);
    let capitalized = capitalize(root);
    let fragment: String = capitalized.chars().rev().take(4).collect();
    let num = random_int(rng, 10, 99);
    format!("{capitalized}{num}.{num}{fragment}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_mode_parse_as_str_roundtrip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(Mode::parse("ballad"), None);
    }

    #[test]
    fn test_from_name_errors_list_valid_values() {
        let err = Mode::from_name("ballad").unwrap_err();
        assert!(err.to_string().contains("mirrora"));
        let err = Theme::from_name("volcanic").unwrap_err();
        assert!(err.to_string().contains("steampunk"));
    }

    #[test]
    fn test_haiku_packs_exact_targets() {
        let mut r = rng(42);
        for _ in 0..50 {
            let key = haiku(Theme::Haiku.words(), &mut r);
            if key == INCOMPLETE_HAIKU {
                continue;
            }
            let lines: Vec<&str> = key.split('-').collect();
            assert_eq!(lines.len(), 3);
            for (line, target) in lines.iter().zip([5, 7, 5]) {
                let total: usize = split_words(line).iter().map(|w| estimate_syllables(w)).sum();
                assert_eq!(total, target, "line {line:?} missed target {target}");
            }
        }
    }

    // Split a concatenated haiku line back into its capitalized words.
    fn split_words(line: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut current = String::new();
        for c in line.chars() {
            if c.is_ascii_uppercase() && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
        if !current.is_empty() {
            words.push(current);
        }
        words
    }

    #[test]
    fn test_haiku_never_reuses_a_word() {
        let mut r = rng(9);
        for _ in 0..50 {
            let key = haiku(Theme::Forest.words(), &mut r);
            if key == INCOMPLETE_HAIKU {
                continue;
            }
            let mut seen = HashSet::new();
            for line in key.split('-') {
                for word in split_words(line) {
                    assert!(seen.insert(word.clone()), "{word} reused in {key}");
                }
            }
        }
    }

    #[test]
    fn test_haiku_thin_vocabulary_always_incomplete() {
        // Pooled vocabulary well under 17 syllables can never pack 5-7-5.
        let thin = ["sun", "sky", "sea"];
        let mut r = rng(1);
        for _ in 0..1000 {
            assert_eq!(haiku(&thin, &mut r), INCOMPLETE_HAIKU);
        }
    }

    #[test]
    fn test_haiku_filters_empty_entries() {
        let with_blanks = ["", "moon", "", "river", "lantern", "blossom", "whisper", "harbor", "autumn", "willow", "shadow"];
        let mut r = rng(4);
        for _ in 0..20 {
            let key = haiku(&with_blanks, &mut r);
            assert!(!key.contains("--"), "empty word leaked into {key}");
        }
    }

    #[test]
    fn test_lace_is_a_reflection() {
        let mut r = rng(6);
        let key = lace(Theme::Oceanic.words(), &mut r);
        let (front, back) = key.split_once('-').unwrap();
        let reflected: String = front.chars().rev().collect();
        assert_eq!(back, reflected);
    }

    #[test]
    fn test_mirrora_shape() {
        let mut r = rng(8);
        for _ in 0..100 {
            let key = mirrora(&mut r);
            assert_eq!(key.len(), 5);
            let (a, b) = key.split_once('-').unwrap();
            let rev: String = b.chars().rev().collect();
            assert_eq!(a, rev);
        }
    }

    #[test]
    fn test_rune_appends_known_rune() {
        let mut r = rng(12);
        let key = rune(Theme::Mythic.words(), &mut r);
        let (_, suffix) = key.rsplit_once('_').unwrap();
        assert!(RUNES.contains(&suffix));
    }

    #[test]
    fn test_rune_propagates_capitalized_sentinel() {
        let thin = ["sun"];
        let mut r = rng(2);
        let key = rune(&thin, &mut r);
        let (base, suffix) = key.rsplit_once('_').unwrap();
        assert_eq!(base, "Incomplete-haiku");
        assert!(RUNES.contains(&suffix));
    }

    #[test]
    fn test_sigil_number_is_three_digits() {
        let mut r = rng(21);
        for _ in 0..100 {
            let key = sigil(Theme::Crystalline.words(), &mut r);
            let num = key.split('-').nth(1).unwrap();
            assert_eq!(num.len(), 3);
            let value: u32 = num.parse().unwrap();
            assert!((100..=999).contains(&value));
        }
    }

    #[test]
    fn test_seed_hex_suffix_in_range() {
        let mut r = rng(33);
        for _ in 0..200 {
            let key = seed(Theme::Desert.words(), &mut r);
            let (prefix, hex) = key.split_once('-').unwrap();
            assert!(prefix.len() <= 4);
            assert_eq!(hex.len(), 4);
            let value = u32::from_str_radix(hex, 16).unwrap();
            assert!((0x1000..=0x9999).contains(&value));
            assert_eq!(hex, hex.to_lowercase());
        }
    }

    #[test]
    fn test_mantra_repeats_first_word() {
        let mut r = rng(44);
        let key = mantra(Theme::Sunny.words(), &mut r);
        let parts: Vec<&str> = key.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], parts[1]);
    }

    #[test]
    fn test_quartz_numeric_fields_match() {
        let mut r = rng(55);
        for _ in 0..100 {
            let key = quartz(Theme::Steampunk.words(), &mut r);
            let digits_head: String = key.chars().filter(|c| c.is_ascii_digit()).collect();
            assert_eq!(digits_head.len(), 4);
            assert_eq!(&digits_head[..2], &digits_head[2..]);
            let (before, after) = key.split_once('.').unwrap();
            assert_eq!(&before[before.len() - 2..], &after[..2]);
        }
    }

    #[test]
    fn test_single_word_theme_duplicates_are_legitimate() {
        let lonely = ["gem"];
        let mut r = rng(66);
        assert_eq!(mantra(&lonely, &mut r), "Gem-Gem-Gem");
        let key = sigil(&lonely, &mut r);
        assert!(key.starts_with("Gem-") && key.ends_with("-Gem"));
        let key = sonnet(&lonely, &mut r);
        assert!(key.starts_with("Gem") && key.contains("-Gem"));
    }

    #[test]
    fn test_generate_with_is_deterministic_under_seed() {
        for mode in Mode::ALL {
            let a = generate_with(mode, Theme::Celestial, &mut rng(123));
            let b = generate_with(mode, Theme::Celestial, &mut rng(123));
            assert_eq!(a, b, "{} not reproducible", mode.as_str());
        }
    }

    #[test]
    fn test_generate_batch_validates_count() {
        assert!(matches!(
            generate_batch(Mode::Sigil, Theme::Haiku, 0),
            Err(KeyError::InvalidCount(0))
        ));
        assert!(matches!(
            generate_batch(Mode::Sigil, Theme::Haiku, 101),
            Err(KeyError::InvalidCount(101))
        ));
        let keys = generate_batch(Mode::Sigil, Theme::Haiku, 5).unwrap();
        assert_eq!(keys.len(), 5);
    }

    #[test]
    fn test_generate_returns_nonempty_for_all_modes_and_themes() {
        for theme in Theme::ALL {
            for mode in Mode::ALL {
                assert!(!generate(mode, theme).is_empty());
            }
        }
    }
}
