//! Small text helpers shared by the analyzers. All offsets are byte offsets that
//! land on char boundaries; window sizes are counted in chars.

use regex::Regex;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte offset `n` chars before `byte_idx` (or 0).
pub fn retreat_chars(text: &str, byte_idx: usize, n: usize) -> usize {
    if n == 0 {
        return byte_idx;
    }
    text[..byte_idx]
        .char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset `n` chars after `byte_idx` (or `text.len()`).
pub fn advance_chars(text: &str, byte_idx: usize, n: usize) -> usize {
    text[byte_idx..]
        .char_indices()
        .nth(n)
        .map(|(i, _)| byte_idx + i)
        .unwrap_or(text.len())
}

/// Trimmed snippet spanning `radius` chars either side of `start..end`.
pub fn context_snippet(text: &str, start: usize, end: usize, radius: usize) -> String {
    let from = retreat_chars(text, start, radius);
    let to = advance_chars(text, end, radius);
    text[from..to].trim().to_string()
}

/// Case-insensitive whole-word pattern for a literal keyword.
///
/// `\b` only goes on an edge whose char is a word char, otherwise keywords like
/// `c++`, `c#` or `.net` could never match.
pub fn whole_word_pattern(keyword: &str) -> String {
    let lead = match keyword.chars().next() {
        Some(c) if is_word_char(c) => r"\b",
        _ => "",
    };
    let trail = match keyword.chars().last() {
        Some(c) if is_word_char(c) => r"\b",
        _ => "",
    };
    format!("(?i){lead}{}{trail}", regex::escape(keyword))
}

/// Compiles [`whole_word_pattern`]. Escaped literals always compile.
pub fn whole_word_regex(keyword: &str) -> Regex {
    Regex::new(&whole_word_pattern(keyword)).expect("escaped keyword is a valid regex")
}

/// Whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_snippet_clips_at_edges() {
        let text = "Reduced load time by 40%.";
        let start = text.find("40%").unwrap();
        let snippet = context_snippet(text, start, start + 3, 50);
        assert_eq!(snippet, text);
    }

    #[test]
    fn test_context_snippet_respects_multibyte_chars() {
        let text = "ééééé 40% ééééé";
        let start = text.find("40%").unwrap();
        let snippet = context_snippet(text, start, start + 3, 2);
        assert_eq!(snippet, "é 40% é");
    }

    #[test]
    fn test_whole_word_skips_substrings() {
        let re = whole_word_regex("java");
        assert!(re.is_match("Java and Spring"));
        assert!(!re.is_match("javascript only"));
    }

    #[test]
    fn test_whole_word_handles_symbol_edges() {
        assert!(whole_word_regex("c++").is_match("fluent in C++ and Rust"));
        assert!(whole_word_regex("c#").is_match("C#, F#"));
        assert!(whole_word_regex(".net").is_match("ASP.NET Core"));
        assert!(whole_word_regex("ci/cd").is_match("owned CI/CD pipelines"));
    }

    #[test]
    fn test_word_count_ignores_whitespace_runs() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  one \n\t two   three "), 3);
    }
}
