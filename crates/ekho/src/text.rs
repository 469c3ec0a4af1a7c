//! The immutable rich text tree.

use crate::style::Style;

/// One styled text segment and its ordered children.
///
/// A `Text` is produced by [`ekho`](crate::ekho) and never changes afterwards.
/// Consumers read it through [`content`](Text::content),
/// [`style`](Text::style) and [`children`](Text::children).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    content: String,
    style: Style,
    children: Vec<Text>,
}

impl Text {
    pub(crate) fn new(content: String, style: Style, children: Vec<Text>) -> Self {
        Self {
            content,
            style,
            children,
        }
    }

    /// An unstyled leaf.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content.into(), Style::EMPTY, Vec::new())
    }

    /// Literal text of this segment only.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn children(&self) -> &[Text] {
        &self.children
    }

    /// Returns true if this segment has children.
    pub fn is_complex(&self) -> bool {
        !self.children.is_empty()
    }

    /// Concatenated content of the whole tree, depth first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ekho::ekho;
    ///
    /// let text = ekho("Hello", |b| {
    ///     b.child(", ").child_with("World", |b| {
    ///         b.child("!");
    ///     });
    /// });
    /// assert_eq!(text.to_plain_string(), "Hello, World!");
    /// ```
    pub fn to_plain_string(&self) -> String {
        self.iter().map(|(_, text)| text.content()).collect()
    }

    /// Iterate over every segment in pre-order, with its depth.
    pub fn iter(&self) -> TextIter<'_> {
        TextIter { stack: vec![(0, self)] }
    }
}

impl<'a> IntoIterator for &'a Text {
    type Item = (usize, &'a Text);
    type IntoIter = TextIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first pre-order iterator over a [`Text`] tree.
///
/// Yields `(depth, segment)` where the root has depth 0.
#[derive(Debug)]
pub struct TextIter<'a> {
    stack: Vec<(usize, &'a Text)>,
}

impl<'a> Iterator for TextIter<'a> {
    type Item = (usize, &'a Text);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, text) = self.stack.pop()?;
        // Reverse so the first child is popped next.
        self.stack
            .extend(text.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Text {
        Text::new(
            "a".into(),
            Style::EMPTY,
            vec![
                Text::new("b".into(), Style::EMPTY, vec![Text::plain("c")]),
                Text::plain("d"),
            ],
        )
    }

    #[test]
    fn iter_is_preorder() {
        let tree = tree();
        let visited: Vec<(usize, &str)> = tree.iter().map(|(d, t)| (d, t.content())).collect();
        assert_eq!(visited, vec![(0, "a"), (1, "b"), (2, "c"), (1, "d")]);
    }

    #[test]
    fn plain_string_concatenates() {
        assert_eq!(tree().to_plain_string(), "abcd");
    }

    #[test]
    fn complex_vs_leaf() {
        let tree = tree();
        assert!(tree.is_complex());
        assert!(tree.children()[0].is_complex());
        assert!(!tree.children()[1].is_complex());
        assert!(Text::plain("x").style().is_empty());
    }
}
