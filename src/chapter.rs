//! Chapter detection.
//!
//! Classifies lines as chapter/section headings and partitions the document
//! into contiguous spans, one per chapter. Heading detection is an ordered
//! table of compiled rules, evaluated per line:
//!
//! 1. CJK numbered headings: `第三章`, `12回`, `第１０场` (full-width
//!    digits included), with an optional `:：-—` separator and subtitle;
//! 2. English keyword headings: `Chapter 7`, `Part IV:` (`Chapter`, `Scene`,
//!    `Part`, `Act`, `Prologue`, `Epilogue`, `Appendix`, case-insensitive,
//!    followed by whitespace);
//! 3. CJK structural keywords: `序幕`, `尾声`, `楔子`, `终章`, `后记`,
//!    `前言`, `引子`, `附录`;
//! 4. Markdown headers: `#`, `##`, `###`.
//!
//! Spans partition the document exactly: concatenating all spans in order
//! reproduces the input, with each heading line attributed to the span it
//! opens. Text before the first heading becomes its own span titled
//! `Unknown`, as does the whole document when no line matches.

use once_cell::sync::Lazy;
use regex::Regex;

const CJK_NUMBERED: &str = r"^第?[零一二三四五六七八九十百\d]+[章节回篇幕场]\s*[:：\-—]?\s*.*$";
const KEYWORD: &str = r"(?i)^(?:Chapter|Scene|Part|Act|Prologue|Epilogue|Appendix)\s+\d*[A-Za-z]?\s*:?.*$";
const CJK_STRUCTURAL: &str = r"^(?:序幕|尾声|楔子|终章|后记|前言|引子|附录)\s*:?.*$";
const MARKDOWN: &str = r"^#{1,3}\s+(.+)$";

/// Which heading rule matched a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadingKind {
    CjkNumbered,
    Keyword,
    CjkStructural,
    Markdown,
}

static HEADING_RULES: Lazy<Vec<(HeadingKind, Regex)>> = Lazy::new(|| {
    vec![
        (HeadingKind::CjkNumbered, Regex::new(CJK_NUMBERED).unwrap()),
        (HeadingKind::Keyword, Regex::new(KEYWORD).unwrap()),
        (HeadingKind::CjkStructural, Regex::new(CJK_STRUCTURAL).unwrap()),
        (HeadingKind::Markdown, Regex::new(MARKDOWN).unwrap()),
    ]
});

/// Title used when no heading rule matches a span's first line.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// A contiguous chapter of the document.
///
/// Spans from one [`detect_chapters`] call are non-overlapping, in order,
/// and cover the whole document with no gaps. `start`/`end` are character
/// offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSpan {
    /// Character offset where the chapter starts (its heading line).
    pub start: usize,
    /// Character offset where the chapter ends (exclusive).
    pub end: usize,
    /// Extracted heading, or [`UNKNOWN_TITLE`].
    pub title: String,
    /// The chapter's text, heading line included.
    pub text: String,
}

impl ChapterSpan {
    /// The character span of this chapter in the document.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

fn is_heading(line: &str) -> bool {
    HEADING_RULES.iter().any(|(_, re)| re.is_match(line))
}

/// Extract a display title from a chapter's first line.
///
/// Returns the trimmed heading line when a rule matches (for Markdown
/// headers, the text after the `#` marks), or [`UNKNOWN_TITLE`] otherwise.
/// Never fails: titles label output files, they carry no data integrity.
#[must_use]
pub fn extract_title(span_text: &str) -> String {
    let first = span_text.lines().next().unwrap_or("").trim();
    for (kind, re) in HEADING_RULES.iter() {
        if let Some(caps) = re.captures(first) {
            return match kind {
                HeadingKind::Markdown => caps[1].trim().to_string(),
                _ => first.to_string(),
            };
        }
    }
    UNKNOWN_TITLE.to_string()
}

/// Partition `text` into chapters.
///
/// A document with no heading lines yields exactly one span covering the
/// whole text, titled [`UNKNOWN_TITLE`]. Empty input yields no spans.
///
/// ```rust
/// use folio::detect_chapters;
///
/// let spans = detect_chapters("第一章 开端\n\n正文。\n\n第二章 发展\n\n续。");
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[0].title, "第一章 开端");
/// assert_eq!(spans[1].title, "第二章 发展");
/// ```
#[must_use]
pub fn detect_chapters(text: &str) -> Vec<ChapterSpan> {
    let mut spans = Vec::new();
    let mut span_start = 0usize; // char offset
    let mut span_text = String::new();
    let mut pos = 0usize;

    for line in text.split_inclusive('\n') {
        let line_chars = line.chars().count();
        if is_heading(line.trim()) && !span_text.is_empty() {
            spans.push(make_span(span_start, pos, std::mem::take(&mut span_text)));
            span_start = pos;
        }
        span_text.push_str(line);
        pos += line_chars;
    }
    if !span_text.is_empty() {
        spans.push(make_span(span_start, pos, span_text));
    }
    spans
}

fn make_span(start: usize, end: usize, text: String) -> ChapterSpan {
    let title = extract_title(&text);
    ChapterSpan {
        start,
        end,
        title,
        text,
    }
}
