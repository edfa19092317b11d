//! Word list module - the vocabulary a batch of articles must practice

/// An ordered list of target words loaded from a word list file.
///
/// Words are trimmed, empty lines are dropped and duplicates are removed
/// case-insensitively, keeping the first spelling seen. The list is
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    group: String,
    words: Vec<String>,
}

impl WordList {
    /// Build a word list for `group` from any sequence of words
    pub fn new<I, S>(group: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = std::collections::HashSet::new();
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(w.to_lowercase()))
            .collect();

        Self {
            group: group.into(),
            words,
        }
    }

    /// Parse the contents of a word list file (one word per line)
    pub fn parse(group: impl Into<String>, contents: &str) -> Self {
        Self::new(group, contents.lines())
    }

    /// Name of the word list group (the file stem)
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The words in file order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        let needle = word.trim().to_lowercase();
        self.words.iter().any(|w| w.to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines() {
        let list = WordList::parse("travel", "apple\n\n  banana  \n\ncherry\n");
        assert_eq!(list.group(), "travel");
        assert_eq!(list.words(), &["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_duplicates_collapse_case_insensitively() {
        let list = WordList::new("g", ["Apple", "apple", "APPLE", "pear"]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.words()[0], "Apple");
        assert!(list.contains("aPPle"));
        assert!(!list.contains("plum"));
    }

    #[test]
    fn test_empty_list() {
        let list = WordList::parse("empty", "\n \n");
        assert!(list.is_empty());
    }
}
