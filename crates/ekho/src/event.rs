//! Click and hover payloads carried by a [`Style`](crate::Style).
//!
//! The builder never inspects these values. They are stored as-is and handed
//! to whatever consumes the finished tree.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::text::Text;

/// Action performed when a segment is clicked.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickEvent {
    /// Open a URL.
    OpenUrl(String),
    /// Put a command into the input box without running it.
    SuggestCommand(String),
    /// Run a command.
    RunCommand(String),
}

impl ClickEvent {
    pub fn open_url(url: impl Into<String>) -> Self {
        ClickEvent::OpenUrl(url.into())
    }

    pub fn suggest_command(command: impl Into<String>) -> Self {
        ClickEvent::SuggestCommand(command.into())
    }

    pub fn run_command(command: impl Into<String>) -> Self {
        ClickEvent::RunCommand(command.into())
    }

    /// Action name, e.g. `open_url`.
    pub fn action(&self) -> &'static str {
        match self {
            ClickEvent::OpenUrl(_) => "open_url",
            ClickEvent::SuggestCommand(_) => "suggest_command",
            ClickEvent::RunCommand(_) => "run_command",
        }
    }

    /// The URL or command string.
    pub fn value(&self) -> &str {
        match self {
            ClickEvent::OpenUrl(value)
            | ClickEvent::SuggestCommand(value)
            | ClickEvent::RunCommand(value) => value,
        }
    }
}

impl fmt::Display for ClickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.action(), self.value())
    }
}

/// An item shown in a hover tooltip.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemStack {
    item: String,
    count: u32,
}

impl ItemStack {
    /// A single item with the given identifier.
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            count: 1,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// An entity shown in a hover tooltip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityDescriptor {
    kind: String,
    id: Uuid,
    name: Option<Arc<Text>>,
}

impl EntityDescriptor {
    pub fn new(kind: impl Into<String>, id: Uuid) -> Self {
        Self {
            kind: kind.into(),
            id,
            name: None,
        }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: Text) -> Self {
        self.name = Some(Arc::new(name));
        self
    }

    /// Entity type identifier, e.g. `minecraft:player`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> Option<&Text> {
        self.name.as_deref()
    }
}

/// Content shown when a segment is hovered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// A nested rich text tree.
    ShowText(Arc<Text>),
    /// An item tooltip.
    ShowItem(ItemStack),
    /// An entity tooltip.
    ShowEntity(EntityDescriptor),
}

impl HoverEvent {
    pub fn show_text(text: Text) -> Self {
        HoverEvent::ShowText(Arc::new(text))
    }

    pub fn show_item(item: ItemStack) -> Self {
        HoverEvent::ShowItem(item)
    }

    pub fn show_entity(entity: EntityDescriptor) -> Self {
        HoverEvent::ShowEntity(entity)
    }

    /// Action name, e.g. `show_text`.
    pub fn action(&self) -> &'static str {
        match self {
            HoverEvent::ShowText(_) => "show_text",
            HoverEvent::ShowItem(_) => "show_item",
            HoverEvent::ShowEntity(_) => "show_entity",
        }
    }
}

impl fmt::Display for HoverEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoverEvent::ShowText(text) => {
                write!(f, "{}({:?})", self.action(), text.to_plain_string())
            }
            HoverEvent::ShowItem(item) => {
                write!(f, "{}({} x{})", self.action(), item.item(), item.count())
            }
            HoverEvent::ShowEntity(entity) => {
                write!(f, "{}({} {}", self.action(), entity.kind(), entity.id())?;
                if let Some(name) = entity.name() {
                    write!(f, " {:?}", name.to_plain_string())?;
                }
                f.write_str(")")
            }
        }
    }
}
