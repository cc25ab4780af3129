//! Bubble value type and the ordered, duplicate-free bubble list.

use serde::{Deserialize, Serialize};

use crate::content::prepare_content;

/// A committed piece of content, rendered as a single chip.
///
/// Construction normalizes the raw text; two bubbles are equal exactly when
/// their normalized contents are equal. Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Bubble {
    content: String,
}

impl Bubble {
    /// Create a bubble from raw text, normalizing it first.
    pub fn new(raw: &str) -> Self {
        Self {
            content: prepare_content(raw),
        }
    }

    /// The normalized content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl From<String> for Bubble {
    fn from(raw: String) -> Self {
        Bubble::new(&raw)
    }
}

impl From<Bubble> for String {
    fn from(bubble: Bubble) -> Self {
        bubble.content
    }
}

/// Ordered sequence of unique bubbles.
///
/// Insertion order is significant. The list never holds two bubbles with
/// equal content, and never holds content that normalization would change.
/// Duplicate or empty content and out-of-range indices are tolerated as
/// no-ops; every mutating method reports whether the list actually changed.
/// Serializes as a plain list of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct BubbleList {
    bubbles: Vec<Bubble>,
}

impl BubbleList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    /// Bubble at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Bubble> {
        self.bubbles.get(index)
    }

    /// Iterate bubbles in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bubble> {
        self.bubbles.iter()
    }

    /// Ordered snapshot of all contents. This is the change-notification
    /// payload.
    pub fn contents(&self) -> Vec<String> {
        self.bubbles
            .iter()
            .map(|bubble| bubble.content().to_string())
            .collect()
    }

    /// Position of the bubble whose content equals `content`, which is
    /// normalized before the comparison.
    pub fn position(&self, content: &str) -> Option<usize> {
        let needle = prepare_content(content);
        self.bubbles
            .iter()
            .position(|bubble| bubble.content() == needle)
    }

    /// True when no bubble has content equal to `content`.
    pub fn is_unique(&self, content: &str) -> bool {
        self.position(content).is_none()
    }

    /// Append a bubble. No-op when the normalized content is empty or
    /// already present. Returns whether the list changed.
    pub fn push(&mut self, content: &str) -> bool {
        let bubble = Bubble::new(content);
        if bubble.content().is_empty() || !self.is_unique(bubble.content()) {
            return false;
        }
        self.bubbles.push(bubble);
        true
    }

    /// Replace the bubble at `index`. No-op when the index is out of range,
    /// the normalized content is empty, or the content is already present
    /// (at this slot or any other). Returns whether the list changed.
    pub fn replace_at(&mut self, index: usize, content: &str) -> bool {
        if index >= self.bubbles.len() {
            return false;
        }
        let bubble = Bubble::new(content);
        if bubble.content().is_empty() || !self.is_unique(bubble.content()) {
            return false;
        }
        self.bubbles[index] = bubble;
        true
    }

    /// Remove the bubble at `index`. No-op when out of range. Returns
    /// whether the list changed.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.bubbles.len() {
            return false;
        }
        self.bubbles.remove(index);
        true
    }

    /// Remove the last bubble. No-op when the list is empty. Returns
    /// whether the list changed.
    pub fn pop(&mut self) -> bool {
        self.bubbles.pop().is_some()
    }
}

impl<S: AsRef<str>> FromIterator<S> for BubbleList {
    /// Collect raw contents into a list, normalizing each entry and
    /// silently skipping duplicates and empties.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = BubbleList::new();
        for raw in iter {
            list.push(raw.as_ref());
        }
        list
    }
}

impl From<Vec<String>> for BubbleList {
    fn from(contents: Vec<String>) -> Self {
        contents.into_iter().collect()
    }
}

impl From<BubbleList> for Vec<String> {
    fn from(list: BubbleList) -> Self {
        list.bubbles.into_iter().map(String::from).collect()
    }
}

impl<'a> IntoIterator for &'a BubbleList {
    type Item = &'a Bubble;
    type IntoIter = std::slice::Iter<'a, Bubble>;

    fn into_iter(self) -> Self::IntoIter {
        self.bubbles.iter()
    }
}

impl std::ops::Index<usize> for BubbleList {
    type Output = Bubble;

    fn index(&self, index: usize) -> &Bubble {
        &self.bubbles[index]
    }
}
