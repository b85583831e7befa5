//! End-to-end coverage: concrete documents through the full pipeline,
//! exercising all three modes, label formatting, and file decoding.

use std::io::Write;

use folio::{
    CharCounter, ChapterSplitter, ChunkLabel, HybridSplitter, Splitter, TokenBudget,
    TokenBudgetSplitter, MERGED_TAIL_MARKER,
};

/// A small "novel": one chapter far over any reasonable budget, then a tiny
/// one. With `CharCounter` every size below is exact: chapter one spans
/// characters 0..1009, chapter two 1009..1019.
fn novel() -> String {
    format!("第一章 序\n\n{}\n\n第二章 终\n\n结束。", "abcdefghi.".repeat(100))
}

// =============================================================================
// Cross-Mode Behavior
// =============================================================================

#[test]
fn test_three_modes_on_the_same_novel() {
    let text = novel();

    // Token mode ignores chapters: the normalized 1019-token document cuts
    // at boundaries 297 and 597, and the 122-token tail merges into the
    // third chunk.
    let token_mode =
        TokenBudgetSplitter::new(TokenBudget::new(300).unwrap(), CharCounter);
    let chunks = token_mode.split(&text).unwrap();
    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|c| c.label.is_none()));

    // Chapter mode never cuts inside a chapter: the big one stands alone
    // over the ceiling, the small one follows.
    let chapter_mode = ChapterSplitter::new(300, CharCounter).unwrap();
    let chunks = chapter_mode.split(&text).unwrap();
    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].token_count > 300);
    assert!(chunks[1].token_count <= 300);

    // Hybrid subdivides only the big chapter: three parts plus the small
    // chapter whole.
    let hybrid = HybridSplitter::new(300, 0.05, 0.2, CharCounter).unwrap();
    let chunks = hybrid.split(&text).unwrap();
    assert_eq!(chunks.len(), 4);
}

#[test]
fn test_modes_are_interchangeable_behind_the_trait() {
    let text = novel();
    let splitters: Vec<Box<dyn Splitter>> = vec![
        Box::new(TokenBudgetSplitter::new(
            TokenBudget::new(300).unwrap(),
            CharCounter,
        )),
        Box::new(ChapterSplitter::new(300, CharCounter).unwrap()),
        Box::new(HybridSplitter::new(300, 0.05, 0.2, CharCounter).unwrap()),
    ];

    for splitter in &splitters {
        let chunks = splitter.split(&text).unwrap();
        assert!(!chunks.is_empty());
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.ordinal, i + 1);
        }
    }
}

#[test]
fn test_empty_documents_rejected_by_all_modes() {
    let splitters: Vec<Box<dyn Splitter>> = vec![
        Box::new(TokenBudgetSplitter::new(TokenBudget::default(), CharCounter)),
        Box::new(ChapterSplitter::new(2500, CharCounter).unwrap()),
        Box::new(HybridSplitter::new(2500, 0.05, 0.2, CharCounter).unwrap()),
    ];

    for splitter in &splitters {
        for text in ["", "   ", "\n\n\t\n"] {
            assert!(splitter.split(text).is_err(), "accepted {text:?}");
        }
    }
}

// =============================================================================
// Token Mode: Overlap Clamping
// =============================================================================

#[test]
fn test_overlap_is_clamped_to_forward_progress() {
    // Even at a 30% overlap rate the next chunk never starts before the end
    // of the previous one: the overlap offset snaps to a boundary behind the
    // cut and is clamped forward. Seams stay contiguous.
    let text = "abcdefghi.".repeat(100);
    let budget = TokenBudget::new(300)
        .unwrap()
        .with_overlap_rate(0.3)
        .unwrap();
    let splitter = TokenBudgetSplitter::new(budget, CharCounter);
    let chunks = splitter.split(&text).unwrap();

    assert_eq!(chunks.len(), 3);
    for w in chunks.windows(2) {
        assert_eq!(w[0].end, w[1].start);
    }
    assert!(chunks[2].text.contains(MERGED_TAIL_MARKER));
    assert_eq!(chunks[2].end, 1000);
}

// =============================================================================
// Chapter Mode: Heading Styles and Preambles
// =============================================================================

#[test]
fn test_mixed_heading_styles_pack_greedily() {
    // Markdown, English keyword, and CJK numbered headings in one document.
    // Spans are 30, 28, and 11 tokens; a ceiling of 40 packs the last two.
    let text = "# Overture\n\nIntro text here.\n\nChapter 1: Rise\n\nBody one.\n\n第二章 落\n\n正文二。";
    let splitter = ChapterSplitter::new(40, CharCounter).unwrap();
    let chunks = splitter.split(text).unwrap();

    assert_eq!(chunks.len(), 2);
    assert_eq!(
        chunks[0].label.as_ref().map(ToString::to_string),
        Some("Overture".to_string())
    );
    assert_eq!(
        chunks[1].label.as_ref().map(ToString::to_string),
        Some("Chapter 1: Rise-第二章 落".to_string())
    );

    let rebuilt: String = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(rebuilt, text);
}

#[test]
fn test_preamble_before_first_heading() {
    // Text ahead of the first heading becomes an Unknown-titled span; an
    // over-ceiling chapter after it is flushed as its own chunk.
    let text = "开场白说明。\n\n第一章 正\n\n内容。";
    let splitter = ChapterSplitter::new(8, CharCounter).unwrap();
    let chunks = splitter.split(text).unwrap();

    assert_eq!(chunks.len(), 2);
    assert!(matches!(
        &chunks[0].label,
        Some(ChunkLabel::TitleRange { first, .. }) if first == folio::UNKNOWN_TITLE
    ));
    assert!(chunks[1].token_count > 8);
    assert_eq!(
        chunks[1].label.as_ref().map(ToString::to_string),
        Some("第一章 正".to_string())
    );
}

// =============================================================================
// Hybrid Mode: Labels as Filename Stems
// =============================================================================

#[test]
fn test_labels_format_as_filename_stems() {
    let splitter = HybridSplitter::new(300, 0.05, 0.2, CharCounter).unwrap();
    let chunks = splitter.split(&novel()).unwrap();

    let stems: Vec<String> = chunks
        .iter()
        .map(|c| c.label.as_ref().map(ToString::to_string).unwrap_or_default())
        .collect();
    assert_eq!(
        stems,
        vec![
            "第一章 序_part1",
            "第一章 序_part2",
            "第一章 序_part3",
            "第二章 终",
        ]
    );
}

// =============================================================================
// File Decoding into the Pipeline
// =============================================================================

#[test]
fn test_utf16_file_to_labeled_chunks() {
    let doc = "第一章 日\n\n句子。句子。\n\n第二章 月\n\n终。";
    let mut bytes = vec![0xFF, 0xFE];
    for unit in doc.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();

    let text = folio::read_text(file.path()).unwrap();
    assert_eq!(text, doc);

    let splitter = HybridSplitter::new(100, 0.05, 0.2, CharCounter).unwrap();
    let chunks = splitter.split(&text).unwrap();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].label, Some(ChunkLabel::Title("第一章 日".into())));
    assert_eq!(chunks[1].label, Some(ChunkLabel::Title("第二章 月".into())));
}
