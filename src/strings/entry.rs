//! Recognition of single-line `"key" = "value";` entries.

use std::sync::LazyLock;

use regex::Regex;

static RE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*"([^"]+)"\s*=\s*".*";"#).unwrap());

/// Key of a `"key" = "value";` line, or `None` for comments, blanks and
/// anything else.
#[inline]
pub fn entry_key(line: &str) -> Option<&str> {
    RE_ENTRY
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split text into lines, keeping each line's terminator.
///
/// Joining the result reproduces the input exactly.
#[inline]
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_key_basic() {
        assert_eq!(entry_key("\"charts\" = \"Charts\";"), Some("charts"));
        assert_eq!(entry_key("  \"history\"=\"Verlauf\";\n"), Some("history"));
        assert_eq!(entry_key("\"report\" = \"Отчет\"; // trailing"), Some("report"));
    }

    #[test]
    fn test_entry_key_rejects_non_entries() {
        assert_eq!(entry_key("// Match Result Additions"), None);
        assert_eq!(entry_key(""), None);
        assert_eq!(entry_key("\n"), None);
        assert_eq!(entry_key("\"\" = \"empty key\";"), None);
        assert_eq!(entry_key("\"missing\" = \"semicolon\""), None);
        assert_eq!(entry_key("/* \"charts\" = \"x\"; */"), None);
    }

    #[test]
    fn test_entry_key_keeps_case_and_unicode() {
        assert_eq!(entry_key("\"Charts\" = \"チャート\";"), Some("Charts"));
        assert_eq!(entry_key("\"மேலும்\" = \"x\";"), Some("மேலும்"));
    }

    #[test]
    fn test_split_lines_round_trips() {
        let content = "a\r\nb\n\nc";
        let lines = split_lines(content);
        assert_eq!(lines, ["a\r\n", "b\n", "\n", "c"]);
        assert_eq!(lines.concat(), content);
        assert!(split_lines("").is_empty());
    }
}
