//! Whitespace normalization, paragraph-preserving.
//!
//! Scanned or converted documents arrive with run-on spaces, tabs standing in
//! for layout, and stray whitespace around punctuation, especially in mixed
//! CJK/Latin text where OCR inserts a space before `」` or after `（`.
//! Normalizing first means the boundary scanner sees one consistent shape of
//! text and chunk sizes do not waste budget on whitespace.
//!
//! The transformation is paragraph-preserving: text is split on blank-line
//! runs, each paragraph is cleaned in place, and paragraphs are rejoined with
//! exactly one blank line. Within a paragraph:
//!
//! - runs of spaces/tabs collapse to a single space;
//! - whitespace *after* sentence-final or clause punctuation is removed
//!   (`你好。 世界` → `你好。世界`);
//! - whitespace *before* closing brackets/quotes and CJK punctuation is
//!   removed (`你好 」` → `你好」`);
//! - whitespace *after* opening brackets is removed (`（ 你好` → `（你好`);
//! - leading/trailing whitespace is trimmed.
//!
//! The function is idempotent: `normalize(normalize(x)) == normalize(x)`.

use once_cell::sync::Lazy;
use regex::Regex;

static PARA_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());
static WS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static AFTER_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([。！？.!?,;:；，：、])\s+").unwrap());
static BEFORE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s+([）】」』、。，！？；："'])"#).unwrap());
static AFTER_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([(（【「『])\s+").unwrap());

/// Normalize whitespace in `text` without disturbing paragraph structure.
///
/// ```rust
/// use folio::normalize;
///
/// let raw = "第一段。  第二段！\n\n\n（ 引用 ）";
/// assert_eq!(normalize(raw), "第一段。第二段！\n\n（引用）");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    for para in PARA_SPLIT.split(text) {
        if para.trim().is_empty() {
            continue;
        }
        let cleaned = WS_RUN.replace_all(para, " ");
        let cleaned = AFTER_PUNCT.replace_all(&cleaned, "$1");
        let cleaned = BEFORE_CLOSE.replace_all(&cleaned, "$1");
        let cleaned = AFTER_OPEN.replace_all(&cleaned, "$1");
        let cleaned = cleaned.trim();
        if !cleaned.is_empty() {
            paragraphs.push(cleaned.to_string());
        }
    }
    paragraphs.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_space_runs() {
        assert_eq!(normalize("hello   world"), "hello world");
        assert_eq!(normalize("a\tb\t\tc"), "a b c");
    }

    #[test]
    fn test_strips_space_after_punctuation() {
        assert_eq!(normalize("你好。 世界！  完"), "你好。世界！完");
        assert_eq!(normalize("One. Two! Three"), "One.Two!Three");
    }

    #[test]
    fn test_bracket_spacing() {
        assert_eq!(normalize("（ 你好 ）"), "（你好）");
        assert_eq!(normalize("「 引用 」"), "「引用」");
        // half-width close paren is deliberately not in the closing set
        assert_eq!(normalize("(hello )"), "(hello )");
    }

    #[test]
    fn test_paragraphs_rejoined_with_one_blank_line() {
        assert_eq!(normalize("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\n \n\t\nb"), "a\n\nb");
    }

    #[test]
    fn test_empty_paragraphs_dropped() {
        assert_eq!(normalize("\n\n\n\nfirst\n\n\n\n"), "first");
        assert_eq!(normalize("   \n\n   "), "");
    }

    #[test]
    fn test_trims_each_paragraph() {
        assert_eq!(normalize("  a  \n\n  b  "), "a\n\nb");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "第一段。  第二段！\n\n\n（ 引用 ）",
            "plain text",
            "a\tb\n\nc  d",
            "",
            "你好。 「 世界 」",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
