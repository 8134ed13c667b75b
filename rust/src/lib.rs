//! keyfleur: poetic, human-pronounceable key generation and classification.
//!
//! Keys are short identifier strings built from themed word lists under nine
//! structural patterns ("modes"), for applications that want memorable,
//! whimsical tokens instead of opaque random strings.
//!
//! # Shapes
//!
//! ```text
//! haiku   ::= Line5 "-" Line7 "-" Line5        (5-7-5 syllable packing)
//! lace    ::= word syll "-" rev(syll) rev(word)
//! mirrora ::= rev(syll) "-" syll
//! rune    ::= haiku "_" RUNE
//! sonnet  ::= Word syll "-" Word syll
//! sigil   ::= Word "-" digit{3} "-" Word
//! seed    ::= Prefix4 "-" hex{4}
//! mantra  ::= Word "-" Word "-" Word2
//! quartz  ::= Word num "." num rev-fragment
//! ```
//!
//! # Example
//!
//! ```
//! use keyfleur::{Mode, Theme, classify, generate};
//!
//! let key = generate(Mode::Sigil, Theme::Crystalline);
//! println!("{}", key); // e.g., "Crystal-459-Gem"
//! assert!(classify(&key).valid);
//! ```

mod async_api;
mod classify;
mod modes;
mod phonetics;
mod theme;

pub use async_api::{async_generate, async_key_batch};
pub use classify::{Classification, classify, classify_as, pattern_for};
pub use modes::{
    INCOMPLETE_HAIKU, KeyError, MAX_BATCH, Mode, RUNES, generate, generate_batch, generate_with,
};
pub use phonetics::{
    SOFT_CONSONANTS, VOWELS, capitalize, estimate_syllables, random_char, random_element,
    random_int, syllable,
};
pub use theme::Theme;
