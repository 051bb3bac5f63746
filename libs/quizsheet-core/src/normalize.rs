//! Text normalizer and line filter for OCR page dumps.
//!
//! Repairs known mis-decoded glyphs, splits the dump into trimmed
//! non-empty lines, and drops document boilerplate (section banners,
//! provenance watermarks, page labels) before the parser sees anything.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// Known mis-decoded glyphs and their intended replacements.
///
/// The scan backend renders an eth for `d` under some font encodings and
/// substitutes typographic quotes and dashes for their ASCII forms.
const GLYPH_FIXES: &[(char, char)] = &[
    ('\u{00F0}', 'd'),
    ('\u{00D0}', 'D'),
    ('\u{2018}', '\''),
    ('\u{2019}', '\''),
    ('\u{201C}', '"'),
    ('\u{201D}', '"'),
    ('\u{2013}', '-'),
    ('\u{2014}', '-'),
];

/// Banner words that open section header lines in the source sheets.
const HEADER_PREFIXES: &[&str] = &["DOMANDE", "RISPOSTE", "QUESTIONARIO", "QUIZ", "CAPITOLO"];

/// Watermark fragments left by the sites the sheets circulate on.
const PROVENANCE_MARKS: &[&str] = &["WWW.", "SCARICATO DA", "TUTTI I DIRITTI"];

/// Page indicator word followed by a number ("Pagina 12", "pag. 3").
const PAGE_LABEL_PATTERN: &str = r"(?i)^pag(?:ina|\.)?\s*\d+$";

static DEFAULT_PAGE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PAGE_LABEL_PATTERN).expect("default page label pattern compiles"));

/// Line-level noise predicate with a configurable vocabulary.
///
/// The defaults cover the Italian quiz-sheet dialect this importer
/// targets; other dialects can supply their own tables via [`NoiseFilter::new`].
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    header_prefixes: Vec<String>,
    provenance_marks: Vec<String>,
    page_label: Regex,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self {
            header_prefixes: HEADER_PREFIXES.iter().map(|p| p.to_string()).collect(),
            provenance_marks: PROVENANCE_MARKS.iter().map(|m| m.to_string()).collect(),
            page_label: DEFAULT_PAGE_LABEL.clone(),
        }
    }
}

impl NoiseFilter {
    /// Build a filter for another document dialect.
    ///
    /// Keyword tables are matched case-insensitively; the page label
    /// pattern is compiled as given.
    pub fn new(
        header_prefixes: Vec<String>,
        provenance_marks: Vec<String>,
        page_label_pattern: &str,
    ) -> Result<Self> {
        Ok(Self {
            header_prefixes: header_prefixes.into_iter().map(|p| p.to_uppercase()).collect(),
            provenance_marks: provenance_marks.into_iter().map(|m| m.to_uppercase()).collect(),
            page_label: Regex::new(page_label_pattern)?,
        })
    }

    /// Whether a trimmed line is document boilerplate rather than content.
    pub fn is_noise(&self, line: &str) -> bool {
        let upper = line.to_uppercase();
        if self.header_prefixes.iter().any(|p| upper.starts_with(p)) {
            return true;
        }
        if self.provenance_marks.iter().any(|m| upper.contains(m)) {
            return true;
        }
        if self.page_label.is_match(line) {
            return true;
        }
        // A lone page number.
        !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
    }
}

/// Normalize a raw OCR dump into trimmed content lines using the default
/// noise vocabulary.
pub fn normalize(raw: &str) -> Vec<String> {
    normalize_with(raw, &NoiseFilter::default())
}

/// Normalize a raw OCR dump with a caller-supplied noise filter.
pub fn normalize_with(raw: &str, filter: &NoiseFilter) -> Vec<String> {
    let cleaned = fix_glyphs(raw).replace("\r\n", "\n");
    cleaned
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !filter.is_noise(line))
        .map(str::to_string)
        .collect()
}

/// Apply the glyph substitution table to every character.
fn fix_glyphs(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            GLYPH_FIXES
                .iter()
                .find(|(bad, _)| *bad == c)
                .map_or(c, |(_, good)| *good)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_and_trims_lines() {
        let lines = normalize("  prima riga  \n\n  seconda riga\n");
        assert_eq!(lines, vec!["prima riga".to_string(), "seconda riga".to_string()]);
    }

    #[test]
    fn normalizes_crlf() {
        let lines = normalize("uno\r\ndue\r\n");
        assert_eq!(lines, vec!["uno".to_string(), "due".to_string()]);
    }

    #[test]
    fn repairs_eth_glyph() {
        let lines = normalize("1 quanðo parti?");
        assert_eq!(lines, vec!["1 quando parti?".to_string()]);
    }

    #[test]
    fn repairs_typographic_punctuation() {
        let lines = normalize("un\u{2019}ora \u{201C}buona\u{201D} \u{2013} forse");
        assert_eq!(lines, vec![r#"un'ora "buona" - forse"#.to_string()]);
    }

    #[test]
    fn drops_header_banners_case_insensitively() {
        let filter = NoiseFilter::default();
        assert!(filter.is_noise("DOMANDE E RISPOSTE"));
        assert!(filter.is_noise("Questionario di verifica"));
        assert!(!filter.is_noise("Qual e la capitale?"));
    }

    #[test]
    fn drops_provenance_watermarks() {
        let filter = NoiseFilter::default();
        assert!(filter.is_noise("scaricato da esempio.it"));
        assert!(filter.is_noise("www.esempio.it - raccolta quiz"));
        assert!(filter.is_noise("Tutti i diritti riservati"));
    }

    #[test]
    fn drops_page_labels_and_bare_numbers() {
        let filter = NoiseFilter::default();
        assert!(filter.is_noise("Pagina 12"));
        assert!(filter.is_noise("pag. 3"));
        assert!(filter.is_noise("PAG 7"));
        assert!(filter.is_noise("42"));
        assert!(!filter.is_noise("12 risposte possibili"));
    }

    #[test]
    fn idempotent_on_clean_text() {
        let clean = "1 Prima domanda?\n1 Prima risposta.\n2 Seconda domanda?";
        let once = normalize(clean);
        let twice = normalize(&once.join("\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn custom_dialect_tables() {
        let filter = NoiseFilter::new(
            vec!["questions".to_string()],
            vec!["downloaded from".to_string()],
            r"(?i)^page\s+\d+$",
        )
        .unwrap();
        assert!(filter.is_noise("QUESTIONS - unit 4"));
        assert!(filter.is_noise("Downloaded from example.com"));
        assert!(filter.is_noise("Page 9"));
        assert!(!filter.is_noise("Pagina 9"));
    }

    #[test]
    fn rejects_invalid_page_label_pattern() {
        let result = NoiseFilter::new(vec![], vec![], "(unclosed");
        assert!(result.is_err());
    }
}
