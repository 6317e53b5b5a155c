//! Citation sub-grammar.
//!
//! Parses the free-form, comma-delimited payload of a `[quote, ...]`
//! header into author/source fields. The grammar is ad hoc: the branch is
//! picked by the payload's first character, and quote characters are
//! trimmed one-per-side afterwards.

use crate::ast::Citation;

/// Parse a raw citation payload into a [`Citation`].
///
/// Returns `None` for an empty payload, and for a payload whose segments
/// are all empty after quote trimming.
pub fn parse_citation(raw: &str) -> Option<Citation> {
    if raw.is_empty() {
        return None;
    }

    let (author, source) = if raw.starts_with('"') {
        split_quoted(raw, "\", ")
    } else if raw.starts_with('\'') {
        split_quoted(raw, "', ")
    } else if let Some(rest) = raw.strip_prefix(',') {
        (None, Some(rest.trim().to_string()))
    } else if let Some(idx) = raw.find(',') {
        // Plain `Author, Source` form; the separator is comma-plus-space.
        let author = raw[..idx].to_string();
        let source = raw.get(idx + 2..).unwrap_or("").to_string();
        (Some(author), Some(source))
    } else {
        (Some(raw.to_string()), None)
    };

    let author = author
        .map(|a| trim_quotish(&a).to_string())
        .filter(|a| !a.is_empty());
    let source = source
        .map(|s| trim_quotish(&s).to_string())
        .filter(|s| !s.is_empty());

    if author.is_none() && source.is_none() {
        return None;
    }
    Some(Citation { author, source })
}

/// Split a payload whose author is itself quoted, e.g.
/// `"Fox, George", Journal`. Takes the first two segments of the split.
fn split_quoted(raw: &str, separator: &str) -> (Option<String>, Option<String>) {
    let mut parts = raw.split(separator);
    let author = parts.next().map(str::to_string);
    let source = parts.next().map(str::to_string);
    (author, source)
}

/// Strip exactly one leading and one trailing `"` or `'`, each side
/// independently.
fn trim_quotish(segment: &str) -> &str {
    let segment = segment
        .strip_prefix('"')
        .or_else(|| segment.strip_prefix('\''))
        .unwrap_or(segment);
    segment
        .strip_suffix('"')
        .or_else(|| segment.strip_suffix('\''))
        .unwrap_or(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_payload_has_no_citation() {
        assert_eq!(parse_citation(""), None);
    }

    #[test]
    fn test_lone_quote_characters_have_no_citation() {
        assert_eq!(parse_citation("\""), None);
    }

    #[test]
    fn test_citation_table() {
        let cases: &[(&str, Option<&str>, Option<&str>)] = &[
            ("George Fox", Some("George Fox"), None),
            ("George Fox, Journal", Some("George Fox"), Some("Journal")),
            (
                "\"Fox, George\", Journal",
                Some("Fox, George"),
                Some("Journal"),
            ),
            (
                "George Fox, \"Journal\"",
                Some("George Fox"),
                Some("Journal"),
            ),
            (
                "'Fox, George', Journal",
                Some("Fox, George"),
                Some("Journal"),
            ),
            ("George Fox, 'Journal'", Some("George Fox"), Some("Journal")),
            (
                "Bob, \"Apology, prop. 7, sec. 3\"",
                Some("Bob"),
                Some("Apology, prop. 7, sec. 3"),
            ),
            (
                ", \"Apology, prop. 7, sec. 3\"",
                None,
                Some("Apology, prop. 7, sec. 3"),
            ),
        ];

        for (raw, author, source) in cases {
            let citation = parse_citation(raw)
                .unwrap_or_else(|| panic!("no citation parsed from {raw:?}"));
            assert_eq!(
                citation.author.as_deref(),
                *author,
                "author mismatch for {raw:?}"
            );
            assert_eq!(
                citation.source.as_deref(),
                *source,
                "source mismatch for {raw:?}"
            );
        }
    }

    #[test]
    fn test_source_only_payload_is_trimmed() {
        let citation = parse_citation(", Journal").unwrap();
        assert_eq!(citation.author, None);
        assert_eq!(citation.source.as_deref(), Some("Journal"));
    }

    #[test]
    fn test_author_without_comma() {
        let citation = parse_citation("JFK").unwrap();
        assert_eq!(citation.author.as_deref(), Some("JFK"));
        assert_eq!(citation.source, None);
    }
}
