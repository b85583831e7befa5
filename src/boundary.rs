//! Legal cut point detection.
//!
//! A cut is "legal" where it does not break a sentence or a paragraph:
//! immediately after sentence-final punctuation (plus its trailing
//! whitespace), at the start of a new paragraph, and at end-of-text. The
//! splitters only ever cut at offsets in this set.
//!
//! ## The Hard Part: Periods
//!
//! Full-width terminators (`。．！？`) are unambiguous. The ASCII period is
//! not:
//!
//! ```text
//! "The U.S. economy"   <- abbreviation, not a sentence end
//! "Pi is 3.14"         <- decimal, not a sentence end
//! "Wait... what"       <- ellipsis, not a sentence end
//! ```
//!
//! The guard here is a hand-tuned lookback, kept exactly as the established
//! behavior downstream consumers rely on, asymmetries included:
//!
//! - a period preceded by an uppercase letter or digit is skipped, *unless*
//!   the character two back is a letter other than a period (so `CAT.` still
//!   ends a sentence while `U.S.` and `3.14` do not);
//! - a period preceded by two more periods is skipped, which suppresses the
//!   third dot of an ASCII ellipsis but lets the first two through. Do not
//!   "fix" this: chunk boundaries are stable output.
//!
//! All offsets are character offsets, and the set always contains the text's
//! character length.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::chars::CharTable;

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[。．！？.!?]\s*").unwrap());

/// An ordered, deduplicated set of character offsets at which a cut is safe.
///
/// Strictly increasing, and always contains the character length of the text
/// it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundarySet {
    offsets: Vec<usize>,
}

impl BoundarySet {
    /// The boundary offsets, strictly increasing.
    #[must_use]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of boundaries in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the set holds no boundaries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Whether `offset` is a legal cut point.
    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        self.offsets.binary_search(&offset).is_ok()
    }

    /// Nearest legal cut for `target`: the largest boundary `<= target`, or
    /// failing that the smallest boundary `> target`, or `target` itself if
    /// the set is empty. Cutting *before* the target is always preferred.
    ///
    /// ```rust
    /// use folio::find_boundaries;
    ///
    /// let set = find_boundaries("One. Two. Three.");
    /// assert_eq!(set.snap(7), 5);   // backs up to after "One. "
    /// assert_eq!(set.snap(2), 5);   // nothing earlier: first boundary after
    /// ```
    #[must_use]
    pub fn snap(&self, target: usize) -> usize {
        match self.offsets.partition_point(|&b| b <= target) {
            0 => self.offsets.first().copied().unwrap_or(target),
            i => self.offsets[i - 1],
        }
    }

    /// The smallest boundary strictly greater than `offset`, if any.
    #[must_use]
    pub fn next_after(&self, offset: usize) -> Option<usize> {
        let i = self.offsets.partition_point(|&b| b <= offset);
        self.offsets.get(i).copied()
    }
}

/// Compute the set of legal cut points for `text`.
#[must_use]
pub fn find_boundaries(text: &str) -> BoundarySet {
    find_boundaries_with(text, &CharTable::new(text))
}

pub(crate) fn find_boundaries_with(text: &str, table: &CharTable) -> BoundarySet {
    let char_len = table.char_len();
    let chars: Vec<char> = text.chars().collect();
    let mut offsets = BTreeSet::new();

    // Paragraph starts: the offset just past a blank line that follows a
    // non-blank line. A run of blank lines yields one boundary, at the end
    // of its first line.
    let mut pos = 0usize;
    let mut prev_was_empty = false;
    for line in text.split('\n') {
        let end = pos + line.chars().count() + 1; // past the newline
        let is_empty = line.trim().is_empty();
        if is_empty && !prev_was_empty {
            offsets.insert(end.min(char_len));
        }
        prev_was_empty = is_empty;
        pos = end;
    }

    // Sentence ends: terminator plus trailing whitespace, minus the period
    // lookback guard documented at module level.
    for m in SENTENCE_END.find_iter(text) {
        let start = table.char_at(m.start());
        let end = table.char_at(m.end());
        let ch = chars[start];
        if ch == '.' && start > 0 {
            let prev = chars[start - 1];
            if prev.is_uppercase() || prev.is_numeric() {
                if start >= 2 && chars[start - 2] == '.' {
                    continue;
                }
                if start < 2 || !chars[start - 2].is_alphabetic() {
                    continue;
                }
            }
            if start >= 2 && chars[start - 2] == '.' && chars[start - 1] == '.' {
                continue;
            }
        }
        offsets.insert(end);
    }

    offsets.insert(char_len);
    BoundarySet {
        offsets: offsets.into_iter().collect(),
    }
}
