//! Human-readable dump of a [`Text`] tree.
//!
//! One line per segment, indented two spaces per level:
//!
//! ```text
//! "root " Style{bold=true}
//!   "hello" Style{bold=true}
//!   "\n" Style{}
//! ```

use std::fmt;

use crate::text::Text;

/// Display adapter returned by [`Text::pretty`].
#[derive(Debug, Clone, Copy)]
pub struct Pretty<'a> {
    text: &'a Text,
}

impl Text {
    /// Format the whole tree, one segment per line.
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty { text: self }
    }
}

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, text) in self.text.iter() {
            writeln!(
                f,
                "{:indent$}{:?} {}",
                "",
                text.content(),
                text.style(),
                indent = depth * 2
            )?;
        }
        Ok(())
    }
}
