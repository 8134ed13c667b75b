//! Structural classification of keys against the nine mode patterns.
//!
//! Each mode's pattern accepts exactly the strings its generator can emit
//! (the `incomplete-haiku` sentinel excepted). haiku and mantra share a
//! surface grammar: every mantra-shaped key also parses as a single-word-
//! per-line haiku, so an unqualified [`classify`] reports `haiku` for it.
//! Use [`classify_as`] to test mantra explicitly.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::modes::Mode;

/// Outcome of testing a key against one or all mode patterns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<String>>,
}

// A haiku line is one or more concatenated capitalized words.
static HAIKU_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Z][a-z]+)+-(?:[A-Z][a-z]+)+-(?:[A-Z][a-z]+)+$").unwrap()
});

static LACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+[a-z]{2}-[a-z]{2}[a-z]+$").unwrap());

static MIRRORA_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]{2}-[a-z]{2}$").unwrap());

static RUNE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[A-Z][a-z]+)+-(?:[A-Z][a-z]+)+-(?:[A-Z][a-z]+)+_(now\+1d|now-2h|dawn|midnight|solstice|infinite|epoch)$",
    )
    .unwrap()
});

static SONNET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+[a-z]{2}-[A-Z][a-z]+[a-z]{2}$").unwrap());

static SIGIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+-\d{3}-[A-Z][a-z]+$").unwrap());

static SEED_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]{1,3}-[a-f0-9]{4}$").unwrap());

static MANTRA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+-[A-Z][a-z]+-[A-Z][a-z]+$").unwrap());

// The reversed fragment starts with the word's last (lowercase) letter and,
// for words of four letters or fewer, ends with the capitalized first one.
static QUARTZ_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-z]+\d{2}\.\d{2}(?:[a-z]{4}|[a-z]{1,3}[A-Z])$").unwrap()
});

/// The structural pattern for one mode.
pub fn pattern_for(mode: Mode) -> &'static Regex {
    match mode {
        Mode::Haiku => &HAIKU_PATTERN,
        Mode::Lace => &LACE_PATTERN,
        Mode::Mirrora => &MIRRORA_PATTERN,
        Mode::Rune => &RUNE_PATTERN,
        Mode::Sonnet => &SONNET_PATTERN,
        Mode::Sigil => &SIGIL_PATTERN,
        Mode::Seed => &SEED_PATTERN,
        Mode::Mantra => &MANTRA_PATTERN,
        Mode::Quartz => &QUARTZ_PATTERN,
    }
}

fn split_parts(key: &str) -> Vec<String> {
    key.split(['-', '_', '.']).map(str::to_string).collect()
}

fn empty_key() -> Classification {
    Classification {
        valid: false,
        mode: None,
        reason: Some("key must be a non-empty string".to_string()),
        parts: None,
    }
}

/// Test a key against one specific mode's pattern.
pub fn classify_as(key: &str, mode: Mode) -> Classification {
    if key.is_empty() {
        return empty_key();
    }

    if pattern_for(mode).is_match(key) {
        Classification {
            valid: true,
            mode: Some(mode),
            reason: None,
            parts: Some(split_parts(key)),
        }
    } else {
        Classification {
            valid: false,
            mode: None,
            reason: Some(format!("key does not match {} pattern", mode.as_str())),
            parts: None,
        }
    }
}

/// Test a key against every mode in enumeration order, first match wins.
pub fn classify(key: &str) -> Classification {
    if key.is_empty() {
        return empty_key();
    }

    for mode in Mode::ALL {
        if pattern_for(mode).is_match(key) {
            return Classification {
                valid: true,
                mode: Some(mode),
                reason: None,
                parts: Some(split_parts(key)),
            };
        }
    }

    Classification {
        valid: false,
        mode: None,
        reason: Some("key does not match any known pattern".to_string()),
        parts: None,
    }
}
