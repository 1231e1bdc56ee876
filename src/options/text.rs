//! String helpers shared by the line reader and parser.

/// Characters that start a comment running to the end of the line.
const COMMENT_CHARS: [char; 2] = ['#', ';'];

/// Characters stripped from both ends of keys and values.
pub const KEY_VALUE_TRIM: [char; 4] = [' ', '\t', '"', '\r'];

/// Normalizes one raw line: drops everything from the first comment
/// character, trims surrounding whitespace and lower-cases every character
/// outside a quoted span.
///
/// Comment characters are not escapable, even inside quotes.
pub fn normalize_line(raw: &str) -> String {
    let uncommented = strip_comment(raw);
    lowercase_unquoted(uncommented.trim())
}

/// Returns the part of `s` before the first comment character.
pub fn strip_comment(s: &str) -> &str {
    match s.find(&COMMENT_CHARS[..]) {
        Some(pos) => &s[..pos],
        None => s,
    }
}

/// Lower-cases ASCII characters that are not inside a `'...'` or `"..."`
/// span. A span is closed by the same quote character that opened it; the
/// quote marks themselves are kept.
pub fn lowercase_unquoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut open: Option<char> = None;

    for ch in s.chars() {
        match open {
            Some(q) if ch == q => open = None,
            None if ch == '\'' || ch == '"' => open = Some(ch),
            _ => {}
        }
        if open.is_none() {
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

/// Trims any of `chars` from both ends of `s`.
pub fn trim_set<'a>(s: &'a str, chars: &[char]) -> &'a str {
    s.trim_matches(|c| chars.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comment_first_marker_wins() {
        assert_eq!(strip_comment("a = 1 ; note # more"), "a = 1 ");
        assert_eq!(strip_comment("# whole line"), "");
        assert_eq!(strip_comment("no comment"), "no comment");
    }

    #[test]
    fn test_lowercase_keeps_quoted_case() {
        assert_eq!(
            lowercase_unquoted("Name = 'Hello World'"),
            "name = 'Hello World'"
        );
        assert_eq!(lowercase_unquoted("KEY = \"MiXeD\" TAIL"), "key = \"MiXeD\" tail");
    }

    #[test]
    fn test_lowercase_nested_other_quote() {
        assert_eq!(lowercase_unquoted("'It\"S' X"), "'It\"S' x");
    }

    #[test]
    fn test_normalize_line() {
        assert_eq!(normalize_line("   NOUT = 10   ; steps"), "nout = 10");
        assert_eq!(normalize_line("   ; only a comment"), "");
        assert_eq!(normalize_line("\t\r"), "");
    }

    #[test]
    fn test_trim_set() {
        assert_eq!(trim_set(" \"value\"\t", &KEY_VALUE_TRIM), "value");
        assert_eq!(trim_set("[]grp[]", &['[', ']']), "grp");
        assert_eq!(trim_set("\"\"", &KEY_VALUE_TRIM), "");
    }
}
