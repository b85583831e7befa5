//! Token counting.
//!
//! Splitting against a token budget needs to know how many tokens a piece of
//! text costs in the downstream model. That is an external concern: the
//! engine only consumes a [`TokenCounter`].
//!
//! Two implementations ship with the crate:
//!
//! - [`CharCounter`]: one token per character. This is the approximation
//!   the splitters fall back to when no real tokenizer is available. It is
//!   exact for nothing but close enough for CJK prose (roughly one token per
//!   character under BPE vocabularies) and deterministic, which the tests
//!   rely on.
//! - `HfTokenCounter` (feature `hf-tokenizer`): wraps a HuggingFace
//!   `tokenizers::Tokenizer`. If encoding fails, it logs a warning and
//!   degrades to the character count rather than aborting the split.
//!
//! Counts are advisory for *targeting*; every emitted chunk's `token_count`
//! is re-measured through the same counter, so chunks never carry estimated
//! counts.

/// Counts tokens in a piece of text.
///
/// Implementations must be deterministic within one split call: the engine
/// measures the whole document once and individual chunks many times, and
/// inconsistent answers would break budget targeting.
pub trait TokenCounter: Send + Sync {
    /// Number of tokens in `text`. Must return 0 only for empty text.
    fn count(&self, text: &str) -> usize;
}

impl<T: TokenCounter + ?Sized> TokenCounter for &T {
    fn count(&self, text: &str) -> usize {
        (**self).count(text)
    }
}

/// Character-count approximation of token counting.
///
/// ```rust
/// use folio::{CharCounter, TokenCounter};
///
/// assert_eq!(CharCounter.count("第一章"), 3);
/// assert_eq!(CharCounter.count(""), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCounter;

impl TokenCounter for CharCounter {
    fn count(&self, text: &str) -> usize {
        text.chars().count()
    }
}

#[cfg(feature = "hf-tokenizer")]
mod hf {
    use super::TokenCounter;
    use crate::{Error, Result};
    use std::path::Path;

    /// Token counter backed by a HuggingFace tokenizer.
    ///
    /// Counting never fails: if the backend errors on a given text, the
    /// counter logs a warning and falls back to the character count. The
    /// fallback shifts the chars-per-token estimate and may move chunk
    /// boundaries slightly; it does not affect correctness of the output
    /// sequence.
    pub struct HfTokenCounter {
        tokenizer: tokenizers::Tokenizer,
    }

    impl HfTokenCounter {
        /// Wrap an already-loaded tokenizer.
        #[must_use]
        pub fn new(tokenizer: tokenizers::Tokenizer) -> Self {
            Self { tokenizer }
        }

        /// Load a tokenizer from a `tokenizer.json` file.
        ///
        /// # Errors
        ///
        /// Returns [`Error::Tokenizer`] if the file cannot be loaded.
        pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
            let tokenizer = tokenizers::Tokenizer::from_file(path.as_ref())
                .map_err(|e| Error::Tokenizer(e.to_string()))?;
            Ok(Self { tokenizer })
        }
    }

    impl TokenCounter for HfTokenCounter {
        fn count(&self, text: &str) -> usize {
            match self.tokenizer.encode(text, false) {
                Ok(encoding) => encoding.get_ids().len(),
                Err(err) => {
                    log::warn!("tokenizer failed, falling back to character count: {err}");
                    text.chars().count()
                }
            }
        }
    }
}

#[cfg(feature = "hf-tokenizer")]
pub use hf::HfTokenCounter;
