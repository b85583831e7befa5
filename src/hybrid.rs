//! Hybrid chapter + token splitting (Mode C).
//!
//! Chapters first, tokens second: every chapter that fits under the ceiling
//! becomes one chunk; every chapter that does not is handed to the token
//! budget core, scoped to that chapter's text with the ceiling as the
//! target. Sub-chunks carry the parent chapter's title plus a 1-based part
//! index.
//!
//! Ordinals are one global sequence across whole-chapter chunks and
//! sub-chunks, never reset per chapter, so output files sort in reading
//! order regardless of which chapters were subdivided. The remainder-merge
//! rule applies within each oversized chapter: a too-small tail merges into
//! that chapter's last sub-chunk and never bleeds into the next chapter.

use crate::chapter::detect_chapters;
use crate::token_budget::split_with_budget;
use crate::tokens::TokenCounter;
use crate::{Chunk, ChunkLabel, Error, Result, Splitter, TokenBudget};

/// Hybrid splitter (Mode C).
///
/// ## Example
///
/// ```rust
/// use folio::{CharCounter, ChunkLabel, HybridSplitter, Splitter};
///
/// let text = format!("第一章 长\n\n{}\n\n第二章 短\n\n完。", "句子。".repeat(300));
/// let splitter = HybridSplitter::new(400, 0.0, 0.2, CharCounter).unwrap();
/// let chunks = splitter.split(&text).unwrap();
///
/// // the long chapter was subdivided; the short one stayed whole
/// assert!(chunks.len() > 2);
/// assert!(matches!(
///     chunks[0].label,
///     Some(ChunkLabel::TitlePart { part: 1, .. })
/// ));
/// assert!(matches!(
///     chunks.last().unwrap().label,
///     Some(ChunkLabel::Title(_))
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct HybridSplitter<C> {
    budget: TokenBudget,
    counter: C,
}

impl<C: TokenCounter> HybridSplitter<C> {
    /// Create a hybrid splitter.
    ///
    /// `max_tokens` is both the whole-chapter ceiling and the token target
    /// for subdividing oversized chapters; `overlap_rate` and
    /// `min_chunk_ratio` apply to that subdivision.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `max_tokens == 0`, `overlap_rate`
    /// is outside `[0, 1)`, or `min_chunk_ratio` is outside `(0, 1]`.
    pub fn new(
        max_tokens: usize,
        overlap_rate: f64,
        min_chunk_ratio: f64,
        counter: C,
    ) -> Result<Self> {
        let budget = TokenBudget::new(max_tokens)
            .map_err(|_| Error::InvalidMaxTokens(max_tokens))?
            .with_overlap_rate(overlap_rate)?
            .with_min_chunk_ratio(min_chunk_ratio)?;
        Ok(Self { budget, counter })
    }

    /// The token ceiling (and subdivision target) per chunk.
    #[must_use]
    pub const fn max_tokens(&self) -> usize {
        self.budget.target()
    }
}

impl<C: TokenCounter> Splitter for HybridSplitter<C> {
    fn split(&self, text: &str) -> Result<Vec<Chunk>> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let spans = detect_chapters(text);
        let mut chunks: Vec<Chunk> = Vec::new();

        for span in &spans {
            let tokens = self.counter.count(&span.text);

            if tokens <= self.budget.target() {
                chunks.push(Chunk::new(
                    chunks.len() + 1,
                    span.text.clone(),
                    tokens,
                    span.start,
                    span.end,
                    Some(ChunkLabel::Title(span.title.clone())),
                ));
            } else {
                // Oversized: run the token core on this chapter alone.
                // Sub-chunk offsets come back chapter-relative.
                let raw = split_with_budget(&span.text, &self.budget, &self.counter);
                for (part, r) in raw.into_iter().enumerate() {
                    chunks.push(Chunk::new(
                        chunks.len() + 1,
                        r.text,
                        r.tokens,
                        span.start + r.start,
                        span.start + r.end,
                        Some(ChunkLabel::TitlePart {
                            title: span.title.clone(),
                            part: part + 1,
                        }),
                    ));
                }
            }
        }

        Ok(chunks)
    }
}
