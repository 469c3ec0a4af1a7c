//! Declarative construction of [`Text`] trees.
//!
//! [`ekho`] runs a closure against an [`EkhoBuilder`]. Each nesting level gets
//! its own builder, seeded with the style chosen by the child call that
//! created it. When the closure returns, the builder is consumed and its
//! pending children are attached in call order.

use crate::style::{Style, StyleBuilder};
use crate::text::Text;

/// Whether a new child starts from its parent's style or from nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Inheritance {
    /// Start from the parent's style as resolved so far.
    #[default]
    Inherit,
    /// Start from the empty style.
    Reset,
}

impl Inheritance {
    fn seed(self, parent: &Style) -> Style {
        match self {
            Inheritance::Inherit => parent.clone(),
            Inheritance::Reset => Style::EMPTY,
        }
    }
}

impl From<bool> for Inheritance {
    fn from(inherit: bool) -> Self {
        if inherit {
            Inheritance::Inherit
        } else {
            Inheritance::Reset
        }
    }
}

/// Build a rich text tree.
///
/// The root starts with `base` as its content and the empty style.
///
/// # Examples
///
/// ```
/// use ekho::ekho;
///
/// let text = ekho("root ", |b| {
///     b.style(|s| {
///         s.bold();
///     });
///     b.child("hello").newline().child("world");
/// });
///
/// assert_eq!(text.children().len(), 3);
/// assert_eq!(text.children()[0].style().bold(), Some(true));
/// assert!(text.children()[1].style().is_empty());
/// ```
pub fn ekho(base: impl Into<String>, configure: impl FnOnce(&mut EkhoBuilder)) -> Text {
    EkhoBuilder::new(base.into(), Style::EMPTY).run(configure)
}

/// Builder for one level of a [`Text`] tree.
///
/// Only reachable through the closures passed to [`ekho`] and
/// [`add_child_with`](EkhoBuilder::add_child_with); finalization consumes it.
#[derive(Debug)]
pub struct EkhoBuilder {
    content: String,
    style: Style,
    siblings: Vec<Text>,
}

impl EkhoBuilder {
    fn new(content: String, seed: Style) -> Self {
        Self {
            content,
            style: seed,
            siblings: Vec::new(),
        }
    }

    fn run(mut self, configure: impl FnOnce(&mut EkhoBuilder)) -> Text {
        configure(&mut self);
        self.finish()
    }

    fn finish(self) -> Text {
        log::trace!(
            "ekho: finalized {:?} with {} children",
            self.content,
            self.siblings.len()
        );
        Text::new(self.content, self.style, self.siblings)
    }

    /// Style of the node under construction, as resolved so far.
    pub fn current_style(&self) -> &Style {
        &self.style
    }

    /// Replace the node's style with overrides applied on top of it.
    pub fn style(&mut self, configure: impl FnOnce(&mut StyleBuilder)) -> &mut Self {
        let mut resolver = StyleBuilder::new(std::mem::take(&mut self.style));
        configure(&mut resolver);
        self.style = resolver.build();
        self
    }

    /// Append a leaf.
    ///
    /// With [`Inheritance::Inherit`] (or `true`) the leaf copies the current
    /// style; with [`Inheritance::Reset`] (or `false`) it is unstyled.
    pub fn add_child(
        &mut self,
        content: impl Into<String>,
        inheritance: impl Into<Inheritance>,
    ) -> &mut Self {
        let style = inheritance.into().seed(&self.style);
        self.siblings
            .push(Text::new(content.into(), style, Vec::new()));
        self
    }

    /// Append a subtree built by `nested`.
    pub fn add_child_with(
        &mut self,
        content: impl Into<String>,
        inheritance: impl Into<Inheritance>,
        nested: impl FnOnce(&mut EkhoBuilder),
    ) -> &mut Self {
        let seed = inheritance.into().seed(&self.style);
        let child = EkhoBuilder::new(content.into(), seed).run(nested);
        self.siblings.push(child);
        self
    }

    /// Append a leaf that inherits the current style.
    pub fn child(&mut self, content: impl Into<String>) -> &mut Self {
        self.add_child(content, Inheritance::Inherit)
    }

    /// Append an inheriting subtree built by `nested`.
    pub fn child_with(
        &mut self,
        content: impl Into<String>,
        nested: impl FnOnce(&mut EkhoBuilder),
    ) -> &mut Self {
        self.add_child_with(content, Inheritance::Inherit, nested)
    }

    /// Append a line break. Line breaks are always unstyled.
    pub fn newline(&mut self) -> &mut Self {
        self.siblings.push(Text::plain("\n"));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_converts_to_inheritance() {
        assert_eq!(Inheritance::from(true), Inheritance::Inherit);
        assert_eq!(Inheritance::from(false), Inheritance::Reset);
        assert_eq!(Inheritance::default(), Inheritance::Inherit);
    }

    #[test]
    fn empty_block_yields_bare_root() {
        let text = ekho("", |_| {});
        assert_eq!(text, Text::plain(""));
    }

    #[test]
    fn style_calls_accumulate() {
        let text = ekho("x", |b| {
            b.style(|s| {
                s.bold();
            })
            .style(|s| {
                s.italic();
            });
            assert_eq!(b.current_style().bold(), Some(true));
        });

        assert_eq!(text.style().bold(), Some(true));
        assert_eq!(text.style().italic(), Some(true));
    }

    #[test]
    fn leaf_copies_style_at_call_time() {
        let text = ekho("", |b| {
            b.child("before");
            b.style(|s| {
                s.bold();
            });
            b.child("after");
        });

        assert!(text.children()[0].style().is_empty());
        assert_eq!(text.children()[1].style().bold(), Some(true));
    }

    #[test]
    fn reset_child_does_not_affect_later_style_calls() {
        let text = ekho("", |b| {
            b.style(|s| {
                s.bold();
            });
            b.add_child("plain", false);
            b.style(|s| {
                s.red();
            });
        });

        assert_eq!(text.style().bold(), Some(true));
        assert!(text.style().color().is_some());
    }
}
