//! Async convenience API built on top of the sync generators.

use crate::{KeyError, Mode, Theme, generate, generate_batch};

/// Get one key in async contexts.
pub async fn async_generate(mode: Mode, theme: Theme) -> String {
    generate(mode, theme)
}

/// Generate a finite batch of keys in async contexts.
pub async fn async_key_batch(
    mode: Mode,
    theme: Theme,
    count: usize,
) -> Result<Vec<String>, KeyError> {
    generate_batch(mode, theme, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify_as;
    use futures::executor::block_on;

    #[test]
    fn async_generate_sigil_is_valid() {
        let key = block_on(async_generate(Mode::Sigil, Theme::Crystalline));
        assert!(classify_as(&key, Mode::Sigil).valid);
    }

    #[test]
    fn async_batch_count_matches() {
        let keys = block_on(async_key_batch(Mode::Seed, Theme::Forest, 3)).unwrap();
        assert_eq!(keys.len(), 3);
        assert!(keys.iter().all(|k| classify_as(k, Mode::Seed).valid));
    }

    #[test]
    fn async_batch_rejects_bad_count() {
        assert!(matches!(
            block_on(async_key_batch(Mode::Seed, Theme::Forest, 0)),
            Err(KeyError::InvalidCount(0))
        ));
    }
}
