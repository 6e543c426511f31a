use crate::parser::TextSpan;

/// Parse plain text and extract all words
pub fn parse(content: &str) -> Vec<TextSpan> {
    content
        .lines()
        .enumerate()
        .flat_map(|(line_num, line)| TextSpan::from_segment(line_num + 1, line, 0, line))
        .collect()
}
