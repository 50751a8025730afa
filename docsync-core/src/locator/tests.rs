//! Tests for header insertion-point location

#[cfg(test)]
mod tests {
    use crate::matcher::Scanner;

    const EXPORTED_BLOCK: &str = "/****\n [docexport foo]\n *//**\n * Does foo.\n ***/\nvoid foo(int x);";

    #[test]
    fn test_existing_block_range_is_replaced() {
        let header = format!(
            "#ifndef TEST_H\n#define TEST_H\n\n{EXPORTED_BLOCK}\n\n#endif /* TEST_H */\n"
        );
        let mut session = Scanner::new();

        // Block spans lines 3..=8; the match ends at the end of line 8, so
        // the half-open range extends to line 9.
        assert_eq!(session.locate_insertion_range(&header), (3, 9));
    }

    #[test]
    fn test_fallback_inserts_above_include_guard() {
        let header = "#ifndef TEST_H\n#define TEST_H\n\nvoid foo(int x);\n\n#endif /* TEST_H */\n";
        let mut session = Scanner::new();

        // `#endif` sits at zero-based line 5; insertion point is line 4, as a
        // zero-width range.
        assert_eq!(session.locate_insertion_range(header), (4, 4));
    }

    #[test]
    fn test_fallback_uses_last_endif() {
        let header = "#ifdef A\n#endif\n\n#ifdef B\n#endif\n";
        let mut session = Scanner::new();

        // Reverse scan finds the later guard at line 4.
        assert_eq!(session.locate_insertion_range(header), (3, 3));
    }

    #[test]
    fn test_no_blocks_and_no_guard() {
        let mut session = Scanner::new();
        assert_eq!(session.locate_insertion_range("void foo(int x);\n"), (0, 0));
    }

    #[test]
    fn test_guard_on_first_line_clamps_to_zero() {
        let mut session = Scanner::new();
        assert_eq!(session.locate_insertion_range("#endif\n"), (0, 0));
    }

    #[test]
    fn test_match_ending_at_end_of_text_resolves() {
        // The block is the final content; the end-of-match lookup lands one
        // past the last character, on the virtual trailing line.
        let header = format!("#ifndef T_H\n#define T_H\n{EXPORTED_BLOCK}\n");
        let mut session = Scanner::new();

        // Block spans lines 2..=7; the trailing delimiter's empty line 8
        // closes the range.
        assert_eq!(session.locate_insertion_range(&header), (2, 8));
    }

    #[test]
    fn test_indented_block_start_defaults_to_line_zero() {
        // A match starting mid-line has no registered line-start key; that
        // component falls back to 0.
        let header = format!("#ifndef T_H\n#define T_H\n  {EXPORTED_BLOCK}\n\n#endif\n");
        let mut session = Scanner::new();

        let (start, end) = session.locate_insertion_range(&header);
        assert_eq!(start, 0);
        assert_eq!(end, 8);
    }

    #[test]
    fn test_empty_header() {
        let mut session = Scanner::new();
        assert_eq!(session.locate_insertion_range(""), (0, 0));
    }
}
