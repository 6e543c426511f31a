use crate::parser::source_code::CommentScanner;
use crate::parser::TextSpan;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HUNK_HEADER: Regex =
        Regex::new(r"^@@ -\d+(?:,(\d+))? \+\d+(?:,(\d+))? @@").unwrap();
}

/// Lines still expected from the current hunk, per side.
#[derive(Debug, Default, Clone, Copy)]
struct Hunk {
    old: usize,
    new: usize,
}

impl Hunk {
    fn from_header(line: &str) -> Option<Self> {
        let caps = HUNK_HEADER.captures(line)?;
        let count = |i: usize| {
            caps.get(i)
                .map_or(Some(1), |m| m.as_str().parse::<usize>().ok())
        };
        Some(Hunk {
            old: count(1)?,
            new: count(2)?,
        })
    }

    fn is_open(&self) -> bool {
        self.old > 0 || self.new > 0
    }

    /// Account for one body line; returns whether it was an added line.
    fn consume(&mut self, line: &str) -> bool {
        match line.as_bytes().first() {
            Some(b'+') => {
                self.new = self.new.saturating_sub(1);
                true
            }
            Some(b'-') => {
                self.old = self.old.saturating_sub(1);
                false
            }
            Some(b'\\') => false,
            _ => {
                self.old = self.old.saturating_sub(1);
                self.new = self.new.saturating_sub(1);
                false
            }
        }
    }
}

/// Extract words from comments on the added lines of a unified diff.
///
/// Inside a hunk every `+` line is an added line, whatever follows the marker. Outside
/// one, `+++` lines are file headers and are skipped, while other `+` lines still count
/// so that bare `+`-prefixed snippets work. Block comments are tracked across added
/// lines; context and removed lines neither contribute words nor change the comment state.
pub fn parse(content: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut scanner = CommentScanner::default();
    let mut hunk = Hunk::default();

    for (line_num, line) in content.lines().enumerate() {
        let added = if hunk.is_open() {
            hunk.consume(line)
        } else if let Some(header) = Hunk::from_header(line) {
            hunk = header;
            false
        } else {
            line.starts_with('+') && !line.starts_with("+++")
        };

        if added {
            scanner.scan(line_num + 1, line, 1, &line[1..], &mut spans);
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(spans: &[TextSpan]) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_only_added_lines() {
        let patch = "\
--- a/main.c
+++ b/main.c
@@ -1,3 +1,4 @@
 /* context comment */
-/* removed comment */
+/* added comment */
+int value = 0;
";
        let spans = parse(patch);
        assert_eq!(words(&spans), vec!["added", "comment"]);
        assert_eq!(spans[0].line, 6);
        assert_eq!(spans[0].column, 5);
        assert_eq!(spans[0].original_text, "+/* added comment */");
    }

    #[test]
    fn test_multi_line_block_comment() {
        let patch = "\
+/*
+ * Allocate the bufer
+ * before use. */
+static int count;
+/* Single */ int x; /* tail note
+   continues */
";
        let spans = parse(patch);
        assert_eq!(
            words(&spans),
            vec!["allocate", "the", "bufer", "before", "use", "single", "tail", "note", "continues"]
        );
    }

    #[test]
    fn test_line_comments_on_added_lines() {
        let patch = "+int x = 1; // Initialise cuonter\n+char *url = \"http\";\n";
        let spans = parse(patch);
        assert_eq!(words(&spans), vec!["initialise", "cuonter"]);
    }

    #[test]
    fn test_context_lines_do_not_change_state() {
        let patch = "\
+/* opened
 unrelated context words
+still inside */
+outside words
";
        let spans = parse(patch);
        assert_eq!(words(&spans), vec!["opened", "still", "inside"]);
    }

    #[test]
    fn test_triple_plus_inside_hunk_is_code() {
        let patch = "\
--- a/loop.c
+++ b/loop.c
@@ -1,2 +1,3 @@
 int i;
+++i; /* incremnt the
+   countr */
-i++;
";
        let spans = parse(patch);
        assert_eq!(words(&spans), vec!["incremnt", "the", "countr"]);
        assert_eq!(spans[0].line, 5);
        assert_eq!(spans[0].column, 10);
    }

    #[test]
    fn test_headers_of_later_files_are_skipped() {
        let patch = "\
--- a/one.c
+++ b/one.c /* not a comment */
@@ -1 +1 @@
-/* old */
+/* first */
--- a/two.c
+++ b/two.c /* still a header */
@@ -0,0 +1 @@
+/* second */
";
        let spans = parse(patch);
        assert_eq!(words(&spans), vec!["first", "second"]);
    }

    #[test]
    fn test_hunk_header_counts() {
        assert!(Hunk::from_header("@@ -3 +3,2 @@ fn main()").is_some());
        let hunk = Hunk::from_header("@@ -10,6 +10,9 @@").unwrap();
        assert_eq!((hunk.old, hunk.new), (6, 9));
        assert!(Hunk::from_header("@@ garbage @@").is_none());
    }

    #[test]
    fn test_code_outside_comments_is_ignored() {
        let spans = parse("+return lenght;\n");
        assert!(spans.is_empty());
    }
}
