//! Line classification for the question parser.

/// A content line, tagged by whether it opens with a question number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A leading digit run, optional separators, then the remaining text.
    Numbered { id: i64, content: String },
    /// No leading digit run.
    Plain { text: String },
}

/// Characters accepted between the number and the text.
fn is_separator(c: char) -> bool {
    c == '.' || c == '-' || c == ')' || c.is_whitespace()
}

/// Classify a trimmed content line.
///
/// The digit run may be fused straight into the text ("58Domanda"), or
/// followed by any mix of dot, hyphen, closing parenthesis, and
/// whitespace. A digit run too long for `i64` is treated as plain text.
pub fn classify(line: &str) -> LineKind {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    let digits = &line[..digits_end];
    if digits.is_empty() {
        return LineKind::Plain {
            text: line.to_string(),
        };
    }
    let Ok(id) = digits.parse::<i64>() else {
        return LineKind::Plain {
            text: line.to_string(),
        };
    };
    let content = line[digits_end..]
        .trim_start_matches(is_separator)
        .trim()
        .to_string();
    LineKind::Numbered { id, content }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbered(id: i64, content: &str) -> LineKind {
        LineKind::Numbered {
            id,
            content: content.to_string(),
        }
    }

    #[test]
    fn dot_separator() {
        assert_eq!(classify("1. Qual e la capitale?"), numbered(1, "Qual e la capitale?"));
    }

    #[test]
    fn fused_digits_and_text() {
        assert_eq!(classify("58Domanda testuale"), numbered(58, "Domanda testuale"));
    }

    #[test]
    fn mixed_separators() {
        assert_eq!(classify("7.- ) risposta"), numbered(7, "risposta"));
        assert_eq!(classify("12)  testo"), numbered(12, "testo"));
    }

    #[test]
    fn bare_number_has_empty_content() {
        assert_eq!(classify("42"), numbered(42, ""));
        assert_eq!(classify("42."), numbered(42, ""));
    }

    #[test]
    fn no_leading_digit_is_plain() {
        assert_eq!(
            classify("Domanda senza numero"),
            LineKind::Plain {
                text: "Domanda senza numero".to_string()
            }
        );
    }

    #[test]
    fn digit_run_beyond_i64_is_plain() {
        let line = "99999999999999999999 troppo lungo";
        assert_eq!(
            classify(line),
            LineKind::Plain {
                text: line.to_string()
            }
        );
    }
}
