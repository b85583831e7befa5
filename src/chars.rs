//! Character/byte offset mapping.
//!
//! The splitting arithmetic and the public API work in character offsets,
//! while Rust string slicing and regex matches use byte offsets. `CharTable`
//! is built once per split call and converts in both directions.

/// Byte offset of every character in a text, in order.
#[derive(Debug)]
pub(crate) struct CharTable {
    byte_of: Vec<usize>,
    total_bytes: usize,
}

impl CharTable {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            byte_of: text.char_indices().map(|(b, _)| b).collect(),
            total_bytes: text.len(),
        }
    }

    /// Number of characters in the text.
    pub(crate) fn char_len(&self) -> usize {
        self.byte_of.len()
    }

    /// Byte offset of the character at `char_idx`; one past the last byte
    /// when `char_idx == char_len()`.
    pub(crate) fn byte_at(&self, char_idx: usize) -> usize {
        self.byte_of
            .get(char_idx)
            .copied()
            .unwrap_or(self.total_bytes)
    }

    /// Character index of the char starting at `byte`. `byte` must be a char
    /// boundary (regex match offsets always are).
    pub(crate) fn char_at(&self, byte: usize) -> usize {
        self.byte_of.partition_point(|&b| b < byte)
    }

    /// Slice `text` by character offsets. `start` is clamped to `end`.
    pub(crate) fn slice<'t>(&self, text: &'t str, start: usize, end: usize) -> &'t str {
        let start = start.min(end);
        &text[self.byte_at(start)..self.byte_at(end)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_multibyte() {
        let text = "a日b語c";
        let table = CharTable::new(text);
        assert_eq!(table.char_len(), 5);
        assert_eq!(table.byte_at(0), 0);
        assert_eq!(table.byte_at(1), 1);
        assert_eq!(table.byte_at(2), 4); // after 3-byte 日
        assert_eq!(table.byte_at(5), text.len());
        assert_eq!(table.char_at(4), 2);
        assert_eq!(table.slice(text, 1, 4), "日b語");
    }

    #[test]
    fn test_empty() {
        let table = CharTable::new("");
        assert_eq!(table.char_len(), 0);
        assert_eq!(table.byte_at(0), 0);
    }
}
