//! Obfuscation helpers: undo leetspeak and build vowel-tolerant patterns.
//! Neither runs automatically; callers opt in via `ScanMode`.

use regex::RegexBuilder;

/// Lower-case `text` and map common leetspeak substitutions back to letters.
pub fn normalize_leetspeak(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|ch| match ch {
            '3' => 'e',
            '1' => 'i',
            '0' => 'o',
            '4' => 'a',
            '5' => 's',
            '7' => 't',
            '8' => 'b',
            '@' => 'a',
            '$' => 's',
            '!' => 'i',
            other => other,
        })
        .collect()
}

/// Regex source for `word` with every vowel widened to the characters
/// commonly used to disguise it.
pub fn fuzzy_pattern(word: &str) -> String {
    let mut pattern = String::with_capacity(word.len() * 4);
    let mut buf = [0u8; 4];
    for ch in word.chars() {
        if matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u') {
            pattern.push_str("[aeiou@3!0*]");
        } else {
            pattern.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
        }
    }
    pattern
}

/// Case-insensitive fuzzy containment check, e.g. `fuzzy_match("you l0s3r", "loser")`.
pub fn fuzzy_match(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    RegexBuilder::new(&fuzzy_pattern(word))
        .case_insensitive(true)
        .build()
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}
