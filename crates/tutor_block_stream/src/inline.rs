//! Inline formatting: splits one line into plain, bold and math spans.

use serde::{Deserialize, Serialize};

/// One inline-formatted segment of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Span {
    Text(String),
    Bold(String),
    Math(String),
}

/// Split a line into spans. `$...$` pairs (non-empty, no embedded dollar)
/// become math spans first; `**...**` pairs inside the remaining text become
/// bold spans. Unterminated delimiters stay literal text; this never fails.
pub fn format_line(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while let Some(offset) = line[cursor..].find('$') {
        let open = cursor + offset;
        let after = &line[open + 1..];
        match after.find('$') {
            Some(close) if close > 0 => {
                push_text(&mut spans, &line[text_start..open]);
                spans.push(Span::Math(after[..close].to_string()));
                cursor = open + 1 + close + 1;
                text_start = cursor;
            }
            Some(_) => {
                // "$$": the first dollar is literal, rescan from the second
                cursor = open + 1;
            }
            None => break,
        }
    }

    push_text(&mut spans, &line[text_start..]);
    spans
}

fn push_text(spans: &mut Vec<Span>, text: &str) {
    let mut rest = text;
    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        match after.find("**") {
            Some(close) => {
                if open > 0 {
                    spans.push(Span::Text(rest[..open].to_string()));
                }
                spans.push(Span::Bold(after[..close].to_string()));
                rest = &after[close + 2..];
            }
            None => break,
        }
    }
    if !rest.is_empty() {
        spans.push(Span::Text(rest.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_plain_text() {
        let actual = format_line("xem lại bài cũ");
        assert_eq!(actual, vec![Span::Text("xem lại bài cũ".to_string())]);
    }

    #[test]
    fn test_inline_math() {
        let actual = format_line("Diện tích là $S = a^2$.");
        assert_eq!(actual, vec![
            Span::Text("Diện tích là ".to_string()),
            Span::Math("S = a^2".to_string()),
            Span::Text(".".to_string()),
        ]);
    }

    #[test]
    fn test_bold_within_text() {
        let actual = format_line("**Lưu ý:** xem lại");
        assert_eq!(actual, vec![
            Span::Bold("Lưu ý:".to_string()),
            Span::Text(" xem lại".to_string()),
        ]);
    }

    #[test]
    fn test_bold_and_math_mixed() {
        let actual = format_line("**Ta có:** $x + 1 = 0$ nên $x = -1$");
        assert_eq!(actual, vec![
            Span::Bold("Ta có:".to_string()),
            Span::Text(" ".to_string()),
            Span::Math("x + 1 = 0".to_string()),
            Span::Text(" nên ".to_string()),
            Span::Math("x = -1".to_string()),
        ]);
    }

    #[test]
    fn test_unterminated_math_stays_literal() {
        let actual = format_line("giá $x chưa đóng");
        assert_eq!(actual, vec![Span::Text("giá $x chưa đóng".to_string())]);
    }

    #[test]
    fn test_empty_math_pair_stays_literal() {
        let actual = format_line("tiền $$ rồi $y$");
        assert_eq!(actual, vec![
            Span::Text("tiền $".to_string()),
            Span::Math(" rồi ".to_string()),
            Span::Text("y$".to_string()),
        ]);
    }

    #[test]
    fn test_unterminated_bold_stays_literal() {
        let actual = format_line("**mở mà không đóng");
        assert_eq!(actual, vec![Span::Text("**mở mà không đóng".to_string())]);
    }

    #[test]
    fn test_bold_not_matched_inside_math() {
        let actual = format_line("$a ** b$");
        assert_eq!(actual, vec![Span::Math("a ** b".to_string())]);
    }

    #[test]
    fn test_empty_line() {
        let actual = format_line("");
        assert_eq!(actual, Vec::<Span>::new());
    }
}
