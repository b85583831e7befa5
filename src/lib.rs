//! # folio
//!
//! Token-budgeted text segmentation for feeding long documents to models
//! with fixed context windows.
//!
//! ## The Problem
//!
//! You have a 600k-character novel and a model that accepts a few thousand
//! tokens per request. Splitting is easy; splitting *well* is not:
//!
//! - A cut mid-sentence produces garbage at both ends of the seam
//! - A chunk of 40 tokens wastes a whole request and summarizes badly
//! - A chapter split across two chunks loses its narrative frame
//! - Character counts lie about token counts, in both directions
//!
//! folio splits against a **token budget** while cutting only at legal
//! boundaries (sentence ends, paragraph breaks) and, when asked, respecting
//! chapter structure.
//!
//! ## Splitting Modes
//!
//! ### Token budget
//!
//! Walk the document emitting chunks whose token counts track a target,
//! snapping every cut back to the nearest sentence or paragraph boundary.
//! Undersized chunks are remediated: extended forward past the target, or
//! merged into the previous chunk when the tail is too small to stand alone.
//!
//! ```text
//! target = 300 tokens, 1000-token document, boundaries every 10 tokens
//!
//! Chunk 1: tokens    0..300
//! Chunk 2: tokens  300..600
//! Chunk 3: tokens  600..900  + merged 100-token remainder
//! ```
//!
//! **When to use**: uniform prose, no structure worth preserving.
//!
//! ### Chapter packing
//!
//! Detect chapter headings (CJK numbered, English keywords, Markdown `#`),
//! then greedily pack whole chapters under a token ceiling. Chapters are
//! never split; one that alone exceeds the ceiling becomes its own
//! oversized chunk.
//!
//! **When to use**: structured documents where chapter integrity outranks
//! uniform chunk sizes.
//!
//! ### Hybrid
//!
//! Chapters first, tokens second: chapters that fit become single chunks,
//! oversized chapters are subdivided by the token-budget core, and ordinals
//! stay global across both kinds.
//!
//! **When to use**: real books, where most chapters are reasonable and the
//! occasional one is enormous.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::{CharCounter, Splitter, TokenBudget, TokenBudgetSplitter};
//!
//! let text = "第一段。第二段！\n\n第三段。".repeat(200);
//!
//! let budget = TokenBudget::new(500).unwrap();
//! let splitter = TokenBudgetSplitter::new(budget, CharCounter);
//! let chunks = splitter.split(&text).unwrap();
//!
//! assert_eq!(chunks[0].ordinal, 1);
//! for chunk in &chunks {
//!     println!("{chunk}");
//! }
//! ```
//!
//! ## Token Counting
//!
//! Splitters are generic over a [`TokenCounter`]. [`CharCounter`] (one token
//! per character) ships by default; the `hf-tokenizer` feature adds a
//! HuggingFace-backed counter that degrades to character counts with a
//! logged warning if the backend fails. Targeting uses a global
//! chars-per-token estimate, but every emitted chunk's count is re-measured
//! exactly.
//!
//! ## Guarantees
//!
//! For every successful split, in all three modes:
//!
//! - ordinals are `1..=N`, contiguous, no gaps or repeats
//! - every cut (other than end-of-text) lands on a boundary from
//!   [`find_boundaries`] / a chapter edge
//! - the engine is pure and single-threaded: no I/O, no shared state, and
//!   either the full sequence is returned or an error with no chunks
//!
//! Offsets everywhere are **character** offsets, not bytes.

mod boundary;
mod chapter;
mod chapter_split;
mod chars;
mod chunk;
mod config;
mod encoding;
mod error;
mod hybrid;
mod normalize;
mod token_budget;
mod tokens;

pub use boundary::{find_boundaries, BoundarySet};
pub use chapter::{detect_chapters, extract_title, ChapterSpan, UNKNOWN_TITLE};
pub use chapter_split::ChapterSplitter;
pub use chunk::{Chunk, ChunkLabel};
pub use config::{
    TokenBudget, DEFAULT_MIN_CHUNK_RATIO, DEFAULT_OVERLAP_RATE, DEFAULT_TARGET, MIN_CHUNK_FLOOR,
};
pub use encoding::{decode_bytes, read_text};
pub use error::{Error, Result};
pub use hybrid::HybridSplitter;
pub use normalize::normalize;
pub use token_budget::{TokenBudgetSplitter, MERGED_TAIL_MARKER};
pub use tokens::{CharCounter, TokenCounter};

#[cfg(feature = "hf-tokenizer")]
pub use tokens::HfTokenCounter;

/// A document splitting strategy.
///
/// All three modes implement this trait, enabling polymorphic usage:
///
/// ```rust
/// use folio::{CharCounter, ChapterSplitter, Splitter, TokenBudget, TokenBudgetSplitter};
///
/// fn split_document(splitter: &dyn Splitter, text: &str) -> usize {
///     splitter.split(text).map(|chunks| chunks.len()).unwrap_or(0)
/// }
///
/// let by_tokens = TokenBudgetSplitter::new(TokenBudget::new(500).unwrap(), CharCounter);
/// let by_chapters = ChapterSplitter::new(500, CharCounter).unwrap();
///
/// let text = "第一章 开端\n\n故事从这里开始。";
/// assert_eq!(split_document(&by_tokens, text), 1);
/// assert_eq!(split_document(&by_chapters, text), 1);
/// ```
pub trait Splitter: Send + Sync {
    /// Split a document into an ordered sequence of chunks.
    ///
    /// Each chunk is a [`Chunk`] with a 1-based ordinal, exact token count,
    /// and character offsets into the text the splitter operated on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] when there is nothing to split. The
    /// sequence is all-or-nothing: no chunks accompany an error.
    fn split(&self, text: &str) -> Result<Vec<Chunk>>;
}
