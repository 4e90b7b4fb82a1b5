//! Recovery Stages
//!
//! Each stage is a pure function over the candidate text, independently unit
//! testable and composed by the parser through early-return-on-success. The
//! syntactic repairs only ever run on text that has already failed a strict
//! decode, so they cannot change the meaning of input that was valid JSON to
//! begin with. The two scanners (`strip_trailing_commas`, `quote_bare_keys`)
//! track string-literal state so content inside string values is left alone.
//!
//! The repairs in `REPAIR_SEQUENCE` are cumulative: the parser decodes after
//! each step and stops at the first success, so a later, more aggressive
//! repair never runs on text an earlier step already fixed.

use regex::Regex;
use std::sync::OnceLock;

/// Markdown fence marker with an optional language tag (```json, ```, ...).
fn fence_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"```[A-Za-z0-9_+\-]*").expect("valid fence pattern"))
}

/// Runs of two or more consecutive double quotes.
fn doubled_quotes() -> &'static Regex {
    static DOUBLED: OnceLock<Regex> = OnceLock::new();
    DOUBLED.get_or_init(|| Regex::new(r#""{2,}"#).expect("valid quote-run pattern"))
}

/// Remove markdown code-fence markers and any language tag glued to them.
pub fn strip_code_fences(text: &str) -> String {
    fence_marker().replace_all(text, "").into_owned()
}

/// Slice to the span from the first `{` to the last `}`, inclusive.
///
/// Returns `None` when either brace is absent or the first `{` does not
/// precede the last `}`.
pub fn slice_to_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start > end {
        return None;
    }
    Some(&text[start..=end])
}

/// Strip control characters (below U+0020 and in U+007F-U+009F).
///
/// Strict JSON forbids raw control characters inside string literals, so any
/// that survive into the brace span are noise from the generation side.
pub fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| *c >= '\u{20}' && !('\u{7f}'..='\u{9f}').contains(c))
        .collect()
}

/// Remove commas that sit immediately before a closing `}` or `]`.
///
/// Commas inside string literals are untouched.
pub fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                let dangling = matches!(chars.get(j).copied(), Some('}') | Some(']'));
                if !dangling {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Quote bare object keys: an identifier followed by `:` immediately after
/// `{` or `,` (whitespace allowed) becomes a quoted key.
///
/// The scanner tracks string-literal state, so an identifier-colon sequence
/// inside a string value (`"note": "{word: ...}"`) is never rewritten, and
/// keys that are already quoted do not start with an identifier character and
/// are skipped.
pub fn quote_bare_keys(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            i += 1;
            continue;
        }

        out.push(c);
        i += 1;

        if c != '{' && c != ',' {
            continue;
        }

        // Candidate key position: whitespace, identifier, whitespace, ':'.
        let mut j = i;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        let ident_start = j;
        while j < chars.len() && (chars[j].is_alphanumeric() || chars[j] == '_') {
            j += 1;
        }
        if j == ident_start {
            continue;
        }
        let mut k = j;
        while k < chars.len() && chars[k].is_whitespace() {
            k += 1;
        }
        if chars.get(k) != Some(&':') {
            continue;
        }

        for &w in &chars[i..ident_start] {
            out.push(w);
        }
        out.push('"');
        for &id in &chars[ident_start..j] {
            out.push(id);
        }
        out.push('"');
        i = j;
    }

    out
}

/// Collapse runs of 2+ consecutive double quotes into a single quote.
pub fn collapse_repeated_quotes(text: &str) -> String {
    doubled_quotes().replace_all(text, "\"").into_owned()
}

/// The ordered syntactic repair sequence, mildest first.
///
/// Applied cumulatively with a decode attempt between steps. The quote-run
/// collapse must never see an empty string value exposed by the
/// trailing-comma repair, so it runs last and only when the earlier steps
/// did not yield a decodable object.
pub const REPAIR_SEQUENCE: &[(&str, fn(&str) -> String)] = &[
    ("strip_control_chars", strip_control_chars),
    ("strip_trailing_commas", strip_trailing_commas),
    ("quote_bare_keys", quote_bare_keys),
    ("collapse_repeated_quotes", collapse_repeated_quotes),
];

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // strip_code_fences tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_strip_fences_with_language_tag() {
        let text = "Here you go:\n```json\n{\"a\": 1}\n```";
        let stripped = strip_code_fences(text);
        assert!(!stripped.contains("```"));
        assert!(!stripped.contains("json"));
        assert!(stripped.contains("{\"a\": 1}"));
    }

    #[test]
    fn test_strip_fences_bare() {
        let stripped = strip_code_fences("```\n{\"a\": 1}\n```");
        assert_eq!(stripped.trim(), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_fences_no_fences() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
    }

    // -----------------------------------------------------------------------
    // slice_to_object tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_slice_strips_surrounding_prose() {
        let text = "The result is {\"a\": 1} as requested.";
        assert_eq!(slice_to_object(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_slice_no_braces() {
        assert_eq!(slice_to_object("no json here"), None);
    }

    #[test]
    fn test_slice_missing_close() {
        assert_eq!(slice_to_object("{\"a\": 1"), None);
    }

    #[test]
    fn test_slice_reversed_braces() {
        assert_eq!(slice_to_object("} nothing {"), None);
    }

    #[test]
    fn test_slice_nested_objects_kept_whole() {
        let text = "x {\"a\": {\"b\": 2}} y";
        assert_eq!(slice_to_object(text), Some("{\"a\": {\"b\": 2}}"));
    }

    // -----------------------------------------------------------------------
    // strip_control_chars tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_strip_control_chars() {
        let text = "{\"a\":\u{0001} 1,\u{009f} \"b\": 2}";
        assert_eq!(strip_control_chars(text), "{\"a\": 1, \"b\": 2}");
    }

    #[test]
    fn test_strip_control_chars_keeps_unicode_text() {
        let text = "{\"a\": \"héllo 世界\"}";
        assert_eq!(strip_control_chars(text), text);
    }

    // -----------------------------------------------------------------------
    // strip_trailing_commas tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_trailing_comma_object() {
        assert_eq!(
            strip_trailing_commas("{\"a\": 1, \"b\": 2,}"),
            "{\"a\": 1, \"b\": 2}"
        );
    }

    #[test]
    fn test_trailing_comma_array() {
        assert_eq!(strip_trailing_commas("[1, 2, 3, ]"), "[1, 2, 3 ]");
    }

    #[test]
    fn test_trailing_comma_with_newline() {
        assert_eq!(
            strip_trailing_commas("{\"a\": 1,\n}"),
            "{\"a\": 1\n}"
        );
    }

    #[test]
    fn test_comma_inside_string_untouched() {
        let text = "{\"a\": \"one, }\"}";
        assert_eq!(strip_trailing_commas(text), text);
    }

    #[test]
    fn test_separating_comma_untouched() {
        let text = "{\"a\": 1, \"b\": 2}";
        assert_eq!(strip_trailing_commas(text), text);
    }

    // -----------------------------------------------------------------------
    // quote_bare_keys tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_quote_bare_keys_simple() {
        assert_eq!(quote_bare_keys("{a: 1, b: 2}"), "{\"a\": 1, \"b\": 2}");
    }

    #[test]
    fn test_quote_bare_keys_mixed() {
        assert_eq!(
            quote_bare_keys("{\"a\": 1, b: 2}"),
            "{\"a\": 1, \"b\": 2}"
        );
    }

    #[test]
    fn test_quoted_keys_untouched() {
        let text = "{\"a\": 1, \"b\": 2}";
        assert_eq!(quote_bare_keys(text), text);
    }

    #[test]
    fn test_identifier_inside_string_untouched() {
        let text = "{\"note\": \"{word: value}\"}";
        assert_eq!(quote_bare_keys(text), text);
    }

    #[test]
    fn test_quote_bare_keys_nested() {
        assert_eq!(
            quote_bare_keys("{a: {b: 1}}"),
            "{\"a\": {\"b\": 1}}"
        );
    }

    #[test]
    fn test_bare_value_not_quoted() {
        // `true` here is a value, not a key: no trailing colon.
        let text = "{\"a\": true, \"b\": 2}";
        assert_eq!(quote_bare_keys(text), text);
    }

    // -----------------------------------------------------------------------
    // collapse_repeated_quotes tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_collapse_doubled_quotes() {
        assert_eq!(
            collapse_repeated_quotes("{\"\"a\"\": 1}"),
            "{\"a\": 1}"
        );
    }

    #[test]
    fn test_collapse_quote_run() {
        assert_eq!(collapse_repeated_quotes("\"\"\"\""), "\"");
    }

    // -----------------------------------------------------------------------
    // repair sequence tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_repair_sequence_combined_defects() {
        let mut text = String::from("{a: 1,\u{0002} \"b\": \"x\",}");
        for &(_, repair) in REPAIR_SEQUENCE {
            text = repair(&text);
        }
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(value["b"], "x");
    }

    #[test]
    fn test_repair_sequence_order() {
        let names: Vec<&str> = REPAIR_SEQUENCE.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "strip_control_chars",
                "strip_trailing_commas",
                "quote_bare_keys",
                "collapse_repeated_quotes",
            ]
        );
    }
}
