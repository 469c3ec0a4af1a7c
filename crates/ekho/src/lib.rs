//! Declarative builder for hierarchical, styled rich text.
//!
//! This crate builds immutable trees of text segments. Each segment carries a
//! resolved [`Style`]; styles flow from parent to child unless a child resets
//! them or overrides individual fields.
//!
//! # Overview
//!
//! - [`ekho`] - Build a tree from a base string and a closure
//! - [`EkhoBuilder`] - Append children, line breaks, and style the current node
//! - [`StyleBuilder`] - Set colors, decorations, click and hover payloads
//! - [`Text`] - The finished, immutable tree
//!
//! # Inheritance
//!
//! Children inherit the style their parent has at the moment they are added.
//! Passing `false` (or [`Inheritance::Reset`]) starts the child from the empty
//! style instead. Line breaks never carry a style.
//!
//! # Usage
//!
//! ```
//! use ekho::{ekho, Formatting, TextColor};
//!
//! let text = ekho("root ", |b| {
//!     b.style(|s| {
//!         s.bold();
//!     });
//!     b.add_child_with("x", false, |b| {
//!         b.style(|s| {
//!             s.italic().red();
//!         });
//!         b.child("y");
//!     });
//! });
//!
//! let x = &text.children()[0];
//! assert_eq!(x.style().bold(), None);
//! assert_eq!(x.children()[0].style().color(), Some(TextColor::Palette(Formatting::Red)));
//! ```

pub mod builder;
pub mod color;
pub mod error;
pub mod event;
pub mod pretty;
pub mod style;
pub mod text;

// Re-export main types at crate root
pub use builder::{EkhoBuilder, Inheritance, ekho};
pub use color::{Formatting, MAX_RGB, TextColor};
pub use error::ColorError;
pub use event::{ClickEvent, EntityDescriptor, HoverEvent, ItemStack};
pub use pretty::Pretty;
pub use style::{Style, StyleBuilder};
pub use text::{Text, TextIter};
