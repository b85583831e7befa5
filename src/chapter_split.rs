//! Chapter packing (Mode B).
//!
//! Greedy bin-packing of whole chapters under a token ceiling. Chapters are
//! never split in this mode: a chapter that alone exceeds the ceiling is
//! flushed as its own oversized chunk, after first flushing whatever was
//! accumulating. Everything else packs forward in document order.
//!
//! Each chunk is labeled with the titles of its first and last constituent
//! chapter, so output files can be named `novel_03(第五章-第八章).txt`.

use crate::chapter::{detect_chapters, ChapterSpan};
use crate::tokens::TokenCounter;
use crate::{Chunk, ChunkLabel, Error, Result, Splitter};

/// Chapter-packing splitter (Mode B).
///
/// Operates on the text as given (no normalization), so concatenating all
/// chunks with the overlap-free chapter partition reproduces the input.
///
/// ## Example
///
/// ```rust
/// use folio::{CharCounter, ChapterSplitter, ChunkLabel, Splitter};
///
/// let text = "第一章 开端\n\n这是第一段。这是第二段！\n\n第二章 发展\n\n继续的故事。";
/// let splitter = ChapterSplitter::new(100, CharCounter).unwrap();
/// let chunks = splitter.split(text).unwrap();
///
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(
///     chunks[0].label,
///     Some(ChunkLabel::TitleRange {
///         first: "第一章 开端".into(),
///         last: "第二章 发展".into(),
///     })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ChapterSplitter<C> {
    max_tokens: usize,
    counter: C,
}

/// Running accumulator of whole chapters not yet flushed.
struct Pending {
    start: usize,
    end: usize,
    first_title: String,
    last_title: String,
    tokens: usize,
    text: String,
}

impl Pending {
    fn open(span: &ChapterSpan, tokens: usize) -> Self {
        Self {
            start: span.start,
            end: span.end,
            first_title: span.title.clone(),
            last_title: span.title.clone(),
            tokens,
            text: span.text.clone(),
        }
    }

    fn push(&mut self, span: &ChapterSpan, tokens: usize) {
        self.end = span.end;
        self.last_title = span.title.clone();
        self.tokens += tokens;
        self.text.push_str(&span.text);
    }

    fn into_chunk(self, ordinal: usize) -> Chunk {
        Chunk::new(
            ordinal,
            self.text,
            self.tokens,
            self.start,
            self.end,
            Some(ChunkLabel::TitleRange {
                first: self.first_title,
                last: self.last_title,
            }),
        )
    }
}

impl<C: TokenCounter> ChapterSplitter<C> {
    /// Create a splitter with the given token ceiling per chunk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxTokens`] if `max_tokens == 0`.
    pub fn new(max_tokens: usize, counter: C) -> Result<Self> {
        if max_tokens == 0 {
            return Err(Error::InvalidMaxTokens(max_tokens));
        }
        Ok(Self {
            max_tokens,
            counter,
        })
    }

    /// The token ceiling per chunk.
    #[must_use]
    pub const fn max_tokens(&self) -> usize {
        self.max_tokens
    }
}

impl<C: TokenCounter> Splitter for ChapterSplitter<C> {
    fn split(&self, text: &str) -> Result<Vec<Chunk>> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let spans = detect_chapters(text);
        let mut chunks: Vec<Chunk> = Vec::new();
        let mut pending: Option<Pending> = None;

        for span in &spans {
            let tokens = self.counter.count(&span.text);

            if tokens > self.max_tokens {
                // Oversized chapter: flush what is pending, then emit the
                // chapter alone. It is allowed to exceed the ceiling.
                if let Some(p) = pending.take() {
                    chunks.push(p.into_chunk(chunks.len() + 1));
                }
                chunks.push(Pending::open(span, tokens).into_chunk(chunks.len() + 1));
            } else if let Some(p) = pending.as_mut() {
                if p.tokens + tokens <= self.max_tokens {
                    p.push(span, tokens);
                } else {
                    let full = pending.take().expect("pending just matched");
                    chunks.push(full.into_chunk(chunks.len() + 1));
                    pending = Some(Pending::open(span, tokens));
                }
            } else {
                pending = Some(Pending::open(span, tokens));
            }
        }

        if let Some(p) = pending.take() {
            chunks.push(p.into_chunk(chunks.len() + 1));
        }

        Ok(chunks)
    }
}
