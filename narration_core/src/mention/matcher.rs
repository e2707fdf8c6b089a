//! Case folding and whole-word search over `char` sequences.
//!
//! Offsets produced here are `char` indices, never byte indices.

/// Lowercase a single `char`, keeping it unchanged when Unicode lowercasing
/// would expand it to more than one `char`.
///
/// This keeps folded text exactly as long as the original, so offsets found in
/// the folded copy are valid positions in the original text.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Fold a string with [`fold_char`].
pub fn fold(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

/// Narration text folded once for repeated keyword searches.
#[derive(Debug, Clone)]
pub struct FoldedText {
    chars: Vec<char>,
}

impl FoldedText {
    pub fn new(text: &str) -> Self {
        Self { chars: fold(text) }
    }

    /// Length in `char`s.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// First whole-word occurrence of an already folded keyword.
    pub fn find_whole_word(&self, keyword: &[char]) -> Option<usize> {
        find_whole_word(&self.chars, keyword)
    }
}

/// Find the first occurrence of `needle` in `haystack` that is not directly
/// preceded or followed by an alphanumeric `char`.
pub fn find_whole_word(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(start, _)| start)
        .find(|&start| is_word_boundary(haystack, start, start + needle.len()))
}

/// Check the neighbours of `haystack[start..end]`.
fn is_word_boundary(haystack: &[char], start: usize, end: usize) -> bool {
    let before = start.checked_sub(1).map(|i| haystack[i]);
    let after = haystack.get(end).copied();

    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(text: &str, keyword: &str) -> Option<usize> {
        FoldedText::new(text).find_whole_word(&fold(keyword))
    }

    #[test]
    fn test_whole_word_rejects_prefix_of_longer_word() {
        assert_eq!(find("an archaeological dig", "arch"), None);
    }

    #[test]
    fn test_whole_word_matches_case_insensitively() {
        assert_eq!(find("the Arch of Triumph", "arch"), Some(4));
        assert_eq!(find("THE ARCH", "Arch"), Some(4));
    }

    #[test]
    fn test_skips_embedded_occurrence_and_finds_later_one() {
        // "arch" inside "archway" is skipped, the standalone one is found
        assert_eq!(find("archway and arch", "arch"), Some(12));
    }

    #[test]
    fn test_punctuation_counts_as_boundary() {
        assert_eq!(find("(Carthage)", "carthage"), Some(1));
        assert_eq!(find("Carthage's ports", "carthage"), Some(0));
        assert_eq!(find("carthage2", "carthage"), None);
    }

    #[test]
    fn test_text_edges_are_boundaries() {
        assert_eq!(find("bardo", "bardo"), Some(0));
        assert_eq!(find("visit bardo", "bardo"), Some(6));
    }

    #[test]
    fn test_multi_word_keyword() {
        assert_eq!(find("Then Sidi Bou Said at dusk", "sidi bou said"), Some(5));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(find("", "medina"), None);
        assert_eq!(find("medina", ""), None);
        assert_eq!(find("med", "medina"), None);
    }

    #[test]
    fn test_offsets_are_char_indices() {
        // "Café " is five chars but six bytes
        assert_eq!(find("Café Galata", "galata"), Some(5));
    }

    #[test]
    fn test_non_ascii_alphanumerics_block_matches() {
        assert_eq!(find("Topkapıs", "topkapı"), None);
        assert_eq!(find("Topkapı sarayı", "topkapı"), Some(0));
    }

    #[test]
    fn test_fold_keeps_length() {
        // U+0130 lowercases to two chars, so it is left as is
        let text = "İstanbul";
        assert_eq!(fold(text).len(), text.chars().count());
        assert_eq!(fold_char('İ'), 'İ');
        assert_eq!(fold_char('Ş'), 'ş');
    }
}
