//! The Chunk type: a piece of a document with ordering and provenance.

/// Where a chunk came from, for labeling output files and logs.
///
/// Chunks produced by pure token splitting carry no label. Chapter-aware
/// modes record which chapters a chunk holds, or which part of an oversized
/// chapter it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkLabel {
    /// A whole chapter emitted as a single chunk.
    Title(String),
    /// One or more whole chapters packed together; `first` and `last` are
    /// the titles of the first and last constituent chapter (identical when
    /// the chunk holds one chapter).
    TitleRange {
        /// Title of the first chapter in the chunk.
        first: String,
        /// Title of the last chapter in the chunk.
        last: String,
    },
    /// A sub-chunk of an oversized chapter; `part` is 1-based within the
    /// chapter while the chunk's ordinal stays global.
    TitlePart {
        /// Title of the parent chapter.
        title: String,
        /// 1-based part index within the parent chapter.
        part: usize,
    },
}

impl std::fmt::Display for ChunkLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChunkLabel::Title(title) => write!(f, "{title}"),
            ChunkLabel::TitleRange { first, last } if first == last => write!(f, "{first}"),
            ChunkLabel::TitleRange { first, last } => write!(f, "{first}-{last}"),
            ChunkLabel::TitlePart { title, part } => write!(f, "{title}_part{part}"),
        }
    }
}

/// A piece of a document produced by one split invocation.
///
/// Chunks from a single call form an ordered sequence with contiguous
/// 1-based ordinals. `start` and `end` are **character** offsets (Unicode
/// scalar values) into the text the splitter operated on: the normalized
/// document for token splitting, the raw document for chapter modes.
///
/// ```rust
/// use folio::Chunk;
///
/// let chunk = Chunk::new(1, "世界", 2, 3, 5, None);
/// assert_eq!(chunk.span(), 3..5);
/// assert_eq!(chunk.char_len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based position of this chunk in the output sequence. Contiguous and
    /// gapless across one split call, including hybrid sub-chunks.
    pub ordinal: usize,
    /// The chunk text.
    pub text: String,
    /// Exact token count of `text`, re-measured by the token counter.
    pub token_count: usize,
    /// Character offset where this chunk starts in the source text.
    pub start: usize,
    /// Character offset where this chunk ends (exclusive) in the source text.
    pub end: usize,
    /// Chapter provenance, if the chunk came from a chapter-aware mode.
    pub label: Option<ChunkLabel>,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(
        ordinal: usize,
        text: impl Into<String>,
        token_count: usize,
        start: usize,
        end: usize,
        label: Option<ChunkLabel>,
    ) -> Self {
        Self {
            ordinal,
            text: text.into(),
            token_count,
            start,
            end,
            label,
        }
    }

    /// The length of this chunk in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether this chunk holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The character span of this chunk in the source text.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ ordinal: {}, span: {}..{}, tokens: {} }}",
            self.ordinal, self.start, self.end, self.token_count
        )
    }
}
