//! Token-budgeted splitting (boundary-snapped, with overlap and
//! minimum-size remediation).
//!
//! ## The Algorithm
//!
//! Re-tokenizing on every candidate offset would make splitting quadratic,
//! so the engine estimates first and measures after:
//!
//! 1. Measure the whole document once; derive a global `chars_per_token`
//!    ratio.
//! 2. From the cursor, project the token target to an estimated character
//!    offset and snap it to the nearest legal boundary at or before the
//!    estimate.
//! 3. Measure the resulting chunk exactly. If it came in under the minimum
//!    (and is not the first chunk), extend it forward to the next boundary;
//!    one oversized chunk beats one starved chunk.
//! 4. Advance the cursor. The overlap offset is computed `overlap_tokens`
//!    back from the target, snapped, then clamped so the next chunk never
//!    starts before the end of the one just emitted.
//! 5. If the text left is nonzero but under the minimum, append it to the
//!    last chunk behind [`MERGED_TAIL_MARKER`] and stop.
//!
//! The ratio is a global average; on text where token density varies
//! locally (mixed CJK/Latin especially) the *estimate* drifts, but every
//! emitted count is re-measured, never derived from the ratio. Binary
//! searching true token counts would pin boundaries tighter at several
//! extra tokenizer calls per chunk; existing consumers depend on the
//! estimate-then-snap offsets, so that trade stays as it is.
//!
//! Either the full chunk sequence is produced or an error is returned
//! before any chunk exists; there is no partial output.

use crate::boundary::find_boundaries_with;
use crate::chars::CharTable;
use crate::normalize::normalize;
use crate::tokens::TokenCounter;
use crate::{Chunk, Error, Result, Splitter, TokenBudget};

/// Separator inserted when a trailing remainder is merged into the final
/// chunk instead of being emitted as an undersized chunk of its own.
pub const MERGED_TAIL_MARKER: &str = "\n\n[merged remainder]\n";

/// A chunk before ordinals and labels are assigned. Shared between the
/// token mode and the hybrid mode, which numbers across chapters.
#[derive(Debug)]
pub(crate) struct RawChunk {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub tokens: usize,
}

/// Core splitting loop over one stretch of text. Offsets in the returned
/// chunks are character offsets into `text`.
pub(crate) fn split_with_budget<C: TokenCounter>(
    text: &str,
    budget: &TokenBudget,
    counter: &C,
) -> Vec<RawChunk> {
    let table = CharTable::new(text);
    let char_len = table.char_len();
    let total_tokens = counter.count(text);
    if char_len == 0 || total_tokens == 0 {
        return Vec::new();
    }

    let boundaries = find_boundaries_with(text, &table);
    let target = budget.target();
    let overlap_tokens = budget.overlap_tokens();
    let min_chunk_tokens = budget.min_chunk_tokens();
    let chars_per_token = char_len as f64 / total_tokens as f64;

    let mut chunks: Vec<RawChunk> = Vec::new();
    let mut cur_char = 0usize;
    let mut cur_tok = 0usize;

    while cur_tok < total_tokens && cur_char < char_len {
        let target_end_tok = (cur_tok + target).min(total_tokens);
        let target_end_char = (target_end_tok as f64 * chars_per_token) as usize;
        let mut end = boundaries.snap(target_end_char).max(cur_char);
        let mut chunk_text = table.slice(text, cur_char, end);
        let mut tokens = counter.count(chunk_text);

        // Undersized and not the first chunk: take the next boundary instead
        // and accept overshooting the target.
        if tokens < min_chunk_tokens && !chunks.is_empty() {
            if let Some(next) = boundaries.next_after(end) {
                end = next;
                chunk_text = table.slice(text, cur_char, end);
                tokens = counter.count(chunk_text);
            }
        }

        chunks.push(RawChunk {
            text: chunk_text.to_string(),
            start: cur_char,
            end,
            tokens,
        });

        // Next cursor: overlap_tokens back from the target, snapped, clamped
        // so the new start never precedes the chunk just emitted.
        let back = target_end_tok
            .saturating_sub(overlap_tokens)
            .saturating_sub(cur_tok);
        let overlap_char = cur_char + (back as f64 * chars_per_token) as usize;
        cur_char = end.max(boundaries.snap(overlap_char));
        cur_tok = (cur_char as f64 / chars_per_token) as usize;

        // A remainder too small to stand alone merges into the last chunk.
        let remaining = total_tokens.saturating_sub(cur_tok);
        if remaining > 0 && remaining < min_chunk_tokens && cur_char < char_len {
            let tail = table.slice(text, cur_char, char_len).to_string();
            let last = chunks.last_mut().expect("a chunk was just emitted");
            last.text.push_str(MERGED_TAIL_MARKER);
            last.text.push_str(&tail);
            last.end = char_len;
            last.tokens = counter.count(&last.text);
            break;
        }
    }

    chunks
}

/// Token-budgeted splitter (Mode A).
///
/// Normalizes the input, then emits chunks whose token counts track the
/// budget's target, cutting only at legal boundaries. Chunk offsets refer to
/// the **normalized** text.
///
/// ## Example
///
/// ```rust
/// use folio::{CharCounter, Splitter, TokenBudget, TokenBudgetSplitter};
///
/// let budget = TokenBudget::new(300).unwrap();
/// let splitter = TokenBudgetSplitter::new(budget, CharCounter);
///
/// let chunks = splitter.split("一句。".repeat(400).as_str()).unwrap();
/// assert!(chunks.len() > 1);
/// assert_eq!(chunks[0].ordinal, 1);
/// ```
#[derive(Debug, Clone)]
pub struct TokenBudgetSplitter<C> {
    budget: TokenBudget,
    counter: C,
}

impl<C: TokenCounter> TokenBudgetSplitter<C> {
    /// Create a splitter from a validated budget and a token counter.
    pub fn new(budget: TokenBudget, counter: C) -> Self {
        Self { budget, counter }
    }

    /// The budget this splitter runs with.
    #[must_use]
    pub const fn budget(&self) -> &TokenBudget {
        &self.budget
    }
}

impl<C: TokenCounter> Splitter for TokenBudgetSplitter<C> {
    fn split(&self, text: &str) -> Result<Vec<Chunk>> {
        let text = normalize(text);
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }
        let raw = split_with_budget(&text, &self.budget, &self.counter);
        Ok(raw
            .into_iter()
            .enumerate()
            .map(|(i, r)| Chunk::new(i + 1, r.text, r.tokens, r.start, r.end, None))
            .collect())
    }
}
