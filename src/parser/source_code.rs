use crate::parser::{CommentStyle, TextSpan};

/// Parse source code and extract checkable text from comments
pub fn parse(content: &str, style: CommentStyle) -> Vec<TextSpan> {
    match style {
        CommentStyle::CStyle => parse_c_style(content),
        CommentStyle::Hash => parse_hash_style(content),
    }
}

fn parse_c_style(content: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut scanner = CommentScanner::default();

    for (line_num, line) in content.lines().enumerate() {
        scanner.scan(line_num + 1, line, 0, line, &mut spans);
    }

    spans
}

fn parse_hash_style(content: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if let Some(idx) = hash_comment_start(line) {
            spans.extend(TextSpan::from_segment(
                line_num + 1,
                line,
                idx + 1,
                &line[idx + 1..],
            ));
        }
    }

    spans
}

/// Byte index of the first `#` that is not inside a quoted string.
fn hash_comment_start(line: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (idx, c) in line.char_indices() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(open) if c == open => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '#' => return Some(idx),
            None => {}
        }
    }

    None
}

/// Line-by-line tracker for C-style comments.
///
/// Remembers whether the previous line left a `/* ...` block open and collects the words
/// of every comment body it sees: block comments (single or multi-line) and `//` comments.
#[derive(Debug, Default)]
pub struct CommentScanner {
    in_comment: bool,
}

impl CommentScanner {
    pub fn in_comment(&self) -> bool {
        self.in_comment
    }

    /// Scan `text`, which starts at byte `offset` of `line`.
    pub fn scan(
        &mut self,
        line_num: usize,
        line: &str,
        mut offset: usize,
        mut text: &str,
        spans: &mut Vec<TextSpan>,
    ) {
        loop {
            if self.in_comment {
                match text.find("*/") {
                    Some(close) => {
                        spans.extend(TextSpan::from_segment(
                            line_num,
                            line,
                            offset,
                            &text[..close],
                        ));
                        self.in_comment = false;
                        offset += close + 2;
                        text = &text[close + 2..];
                    }
                    None => {
                        spans.extend(TextSpan::from_segment(line_num, line, offset, text));
                        return;
                    }
                }
            }

            let block = text.find("/*");
            let slashes = text.find("//");

            match (block, slashes) {
                (Some(open), slashes) if slashes.map_or(true, |s| open < s) => {
                    self.in_comment = true;
                    offset += open + 2;
                    text = &text[open + 2..];
                }
                (_, Some(start)) => {
                    spans.extend(TextSpan::from_segment(
                        line_num,
                        line,
                        offset + start + 2,
                        &text[start + 2..],
                    ));
                    return;
                }
                _ => return,
            }
        }
    }
}
