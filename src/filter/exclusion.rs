//! Exclusion set of characters to strip from text.

use std::collections::HashSet;

/// Set of characters removed by a filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    chars: HashSet<char>,
}

impl ExclusionSet {
    /// Build a set from one line of input, every character is a member.
    ///
    /// A trailing `\n` or `\r\n` left over from reading the line is not part of the set.
    pub fn from_line(line: &str) -> Self {
        let line = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line);
        line.chars().collect()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Return `text` with every member of the set removed, order preserved.
    pub fn filter(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }
        text.chars().filter(|ch| !self.contains(*ch)).collect()
    }
}

impl FromIterator<char> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}
