//! Tests for the byte-offset line index

#[cfg(test)]
mod tests {
    use crate::line_index::LineIndex;

    #[test]
    fn test_offsets_key_each_line_start() {
        let index = LineIndex::build("alpha\nbeta\ngamma");

        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_at(0), Some((0, "alpha")));
        assert_eq!(index.line_at(6), Some((1, "beta")));
        assert_eq!(index.line_at(11), Some((2, "gamma")));
    }

    #[test]
    fn test_mid_line_offset_misses() {
        let index = LineIndex::build("alpha\nbeta");
        assert_eq!(index.line_at(3), None);
        assert_eq!(index.line_at(7), None);
    }

    #[test]
    fn test_trailing_delimiter_yields_virtual_line() {
        // End-of-match offsets can land exactly one past the final character;
        // the empty line after a trailing delimiter must resolve them.
        let text = "one\ntwo\n";
        let index = LineIndex::build(text);

        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_at(text.len()), Some((2, "")));
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        let index = LineIndex::build("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_at(0), Some((0, "")));
    }

    #[test]
    fn test_offset_arithmetic_invariant() {
        // Offset of line i+1 = offset of line i + content length + 1.
        let text = "a\n\nlonger line\nx";
        let index = LineIndex::build(text);

        let mut offset = 0;
        for (expected_num, line) in text.split('\n').enumerate() {
            assert_eq!(index.line_at(offset), Some((expected_num, line)));
            offset += line.len() + 1;
        }
    }

    #[test]
    fn test_carriage_return_stays_in_content() {
        let index = LineIndex::build("a\r\nb");
        assert_eq!(index.line_at(0), Some((0, "a\r")));
        assert_eq!(index.line_at(3), Some((1, "b")));
    }
}
