//! Token budget configuration.
//!
//! ## The Problem
//!
//! A token target alone is not enough to split well. Three knobs interact:
//!
//! - `target`: how many tokens each chunk should aim for.
//! - `overlap_rate`: how much context to repeat at chunk seams, as a fraction
//!   of the target.
//! - `min_chunk_ratio`: how small a chunk may get before the splitter would
//!   rather extend it past the target (or merge a trailing remainder into
//!   the previous chunk) than emit a starved fragment.
//!
//! A starved chunk (say 40 tokens at the tail of a document) embeds and
//! summarizes poorly, so the floor is enforced in absolute terms too: the
//! minimum is never below [`MIN_CHUNK_FLOOR`] tokens regardless of ratio.
//!
//! ## Validation
//!
//! All three values are validated on construction, before any text is
//! touched. A splitter holding a `TokenBudget` never re-checks them.

use crate::{Error, Result};

/// Absolute floor for the minimum chunk size, in tokens.
///
/// `min_chunk_tokens = max(MIN_CHUNK_FLOOR, target * min_chunk_ratio)`.
pub const MIN_CHUNK_FLOOR: usize = 200;

/// Default token target per chunk.
pub const DEFAULT_TARGET: usize = 2500;
/// Default overlap rate at chunk seams.
pub const DEFAULT_OVERLAP_RATE: f64 = 0.05;
/// Default minimum chunk ratio.
pub const DEFAULT_MIN_CHUNK_RATIO: f64 = 0.2;

/// Validated configuration for token-budgeted splitting.
///
/// # Examples
///
/// ```rust
/// use folio::TokenBudget;
///
/// let budget = TokenBudget::new(300)
///     .unwrap()
///     .with_overlap_rate(0.1)
///     .unwrap()
///     .with_min_chunk_ratio(0.2)
///     .unwrap();
///
/// assert_eq!(budget.target(), 300);
/// assert_eq!(budget.overlap_tokens(), 30);
/// // ratio would give 60, but the absolute floor wins
/// assert_eq!(budget.min_chunk_tokens(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenBudget {
    target: usize,
    overlap_rate: f64,
    min_chunk_ratio: f64,
}

impl TokenBudget {
    /// Create a budget with the given token target and default overlap and
    /// minimum-chunk settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTarget`] if `target == 0`.
    pub fn new(target: usize) -> Result<Self> {
        if target == 0 {
            return Err(Error::InvalidTarget(target));
        }
        Ok(Self {
            target,
            overlap_rate: DEFAULT_OVERLAP_RATE,
            min_chunk_ratio: DEFAULT_MIN_CHUNK_RATIO,
        })
    }

    /// Set the overlap rate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOverlapRate`] unless `0.0 <= rate < 1.0`.
    pub fn with_overlap_rate(self, rate: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&rate) {
            return Err(Error::InvalidOverlapRate(rate));
        }
        Ok(Self {
            overlap_rate: rate,
            ..self
        })
    }

    /// Set the minimum chunk ratio.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMinRatio`] unless `0.0 < ratio <= 1.0`.
    pub fn with_min_chunk_ratio(self, ratio: f64) -> Result<Self> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(Error::InvalidMinRatio(ratio));
        }
        Ok(Self {
            min_chunk_ratio: ratio,
            ..self
        })
    }

    /// The token target per chunk.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// The configured overlap rate.
    #[must_use]
    pub const fn overlap_rate(&self) -> f64 {
        self.overlap_rate
    }

    /// The configured minimum chunk ratio.
    #[must_use]
    pub const fn min_chunk_ratio(&self) -> f64 {
        self.min_chunk_ratio
    }

    /// Tokens to repeat at each chunk seam.
    #[must_use]
    pub fn overlap_tokens(&self) -> usize {
        (self.target as f64 * self.overlap_rate) as usize
    }

    /// Smallest chunk the splitter will emit without remediation.
    #[must_use]
    pub fn min_chunk_tokens(&self) -> usize {
        MIN_CHUNK_FLOOR.max((self.target as f64 * self.min_chunk_ratio) as usize)
    }
}

impl Default for TokenBudget {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            overlap_rate: DEFAULT_OVERLAP_RATE,
            min_chunk_ratio: DEFAULT_MIN_CHUNK_RATIO,
        }
    }
}
