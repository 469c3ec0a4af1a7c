//! Style types for rich text segments.
//!
//! Every field of a [`Style`] is optional. An unset field carries no
//! information at that node, which is different from a field explicitly set to
//! `false`. [`StyleBuilder`] collects overrides and merges them on top of a
//! parent style.

use std::fmt;

use crate::color::{Formatting, TextColor};
use crate::event::{ClickEvent, EntityDescriptor, HoverEvent, ItemStack};
use crate::text::Text;

/// Immutable style of one text segment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    color: Option<TextColor>,
    bold: Option<bool>,
    italic: Option<bool>,
    underlined: Option<bool>,
    strikethrough: Option<bool>,
    obfuscated: Option<bool>,
    click_event: Option<ClickEvent>,
    hover_event: Option<HoverEvent>,
}

impl Style {
    /// Style with every field unset.
    pub const EMPTY: Style = Style {
        color: None,
        bold: None,
        italic: None,
        underlined: None,
        strikethrough: None,
        obfuscated: None,
        click_event: None,
        hover_event: None,
    };

    /// Start a [`StyleBuilder`] on top of this style.
    pub fn to_builder(&self) -> StyleBuilder {
        StyleBuilder::new(self.clone())
    }

    pub fn color(&self) -> Option<TextColor> {
        self.color
    }

    pub fn bold(&self) -> Option<bool> {
        self.bold
    }

    pub fn italic(&self) -> Option<bool> {
        self.italic
    }

    pub fn underlined(&self) -> Option<bool> {
        self.underlined
    }

    pub fn strikethrough(&self) -> Option<bool> {
        self.strikethrough
    }

    pub fn obfuscated(&self) -> Option<bool> {
        self.obfuscated
    }

    pub fn click_event(&self) -> Option<&ClickEvent> {
        self.click_event.as_ref()
    }

    pub fn hover_event(&self) -> Option<&HoverEvent> {
        self.hover_event.as_ref()
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Style::EMPTY
    }

    /// Apply another style on top of this one.
    ///
    /// Fields set in `other` win; unset fields fall back to `self`.
    pub fn apply(&self, other: &Style) -> Style {
        Style {
            color: other.color.or(self.color),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            underlined: other.underlined.or(self.underlined),
            strikethrough: other.strikethrough.or(self.strikethrough),
            obfuscated: other.obfuscated.or(self.obfuscated),
            click_event: other
                .click_event
                .clone()
                .or_else(|| self.click_event.clone()),
            hover_event: other
                .hover_event
                .clone()
                .or_else(|| self.hover_event.clone()),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<String> = Vec::new();

        if let Some(color) = self.color {
            fields.push(format!("color={color}"));
        }
        let flags = [
            ("bold", self.bold),
            ("italic", self.italic),
            ("underlined", self.underlined),
            ("strikethrough", self.strikethrough),
            ("obfuscated", self.obfuscated),
        ];
        for (name, value) in flags {
            if let Some(value) = value {
                fields.push(format!("{name}={value}"));
            }
        }
        if let Some(click) = &self.click_event {
            fields.push(format!("click={click}"));
        }
        if let Some(hover) = &self.hover_event {
            fields.push(format!("hover={hover}"));
        }

        write!(f, "Style{{{}}}", fields.join(", "))
    }
}

macro_rules! palette_setters {
    ($($method:ident => $entry:ident),* $(,)?) => {
        $(
            #[doc = concat!("Set the color to palette `", stringify!($method), "`.")]
            pub fn $method(&mut self) -> &mut Self {
                self.palette(Formatting::$entry)
            }
        )*
    };
}

/// Collects style overrides and resolves them against a parent style.
///
/// Setters record explicit values; calling a setter twice keeps the last
/// value. [`build`](StyleBuilder::build) takes each field from the overrides
/// when set, otherwise from the parent.
///
/// # Examples
///
/// ```
/// use ekho::{Style, StyleBuilder, TextColor, Formatting};
///
/// let mut parent = StyleBuilder::new(Style::EMPTY);
/// parent.bold().red();
/// let parent = parent.build();
///
/// let mut child = StyleBuilder::new(parent);
/// child.italic().green();
/// let style = child.build();
///
/// assert_eq!(style.bold(), Some(true));
/// assert_eq!(style.italic(), Some(true));
/// assert_eq!(style.color(), Some(TextColor::Palette(Formatting::Green)));
/// ```
#[derive(Debug)]
#[must_use]
pub struct StyleBuilder {
    parent: Style,
    overrides: Style,
}

impl StyleBuilder {
    pub fn new(parent: Style) -> Self {
        Self {
            parent,
            overrides: Style::EMPTY,
        }
    }

    palette_setters! {
        black => Black,
        dark_blue => DarkBlue,
        dark_green => DarkGreen,
        dark_aqua => DarkAqua,
        dark_red => DarkRed,
        dark_purple => DarkPurple,
        gold => Gold,
        gray => Gray,
        dark_gray => DarkGray,
        blue => Blue,
        green => Green,
        aqua => Aqua,
        red => Red,
        light_purple => LightPurple,
        yellow => Yellow,
        white => White,
    }

    /// Set the color to a palette entry.
    pub fn palette(&mut self, formatting: Formatting) -> &mut Self {
        self.text_color(TextColor::from_formatting(formatting))
    }

    /// Set the color to an explicit 24-bit RGB value.
    ///
    /// Values that do not fit in 24 bits are replaced with
    /// [`TextColor::DEFAULT`] and reported through `log::warn!`.
    pub fn color(&mut self, rgb: u32) -> &mut Self {
        let color = TextColor::from_rgb(rgb).unwrap_or_else(|err| {
            log::warn!(
                "[ekho] error parsing color {rgb:#X} from rgb ({err}), defaulting to {}",
                TextColor::DEFAULT
            );
            TextColor::DEFAULT
        });
        self.text_color(color)
    }

    pub fn text_color(&mut self, color: TextColor) -> &mut Self {
        self.overrides.color = Some(color);
        self
    }

    pub fn bold(&mut self) -> &mut Self {
        self.overrides.bold = Some(true);
        self
    }

    pub fn no_bold(&mut self) -> &mut Self {
        self.overrides.bold = Some(false);
        self
    }

    pub fn italic(&mut self) -> &mut Self {
        self.overrides.italic = Some(true);
        self
    }

    pub fn no_italic(&mut self) -> &mut Self {
        self.overrides.italic = Some(false);
        self
    }

    pub fn underline(&mut self) -> &mut Self {
        self.overrides.underlined = Some(true);
        self
    }

    pub fn no_underline(&mut self) -> &mut Self {
        self.overrides.underlined = Some(false);
        self
    }

    pub fn strikethrough(&mut self) -> &mut Self {
        self.overrides.strikethrough = Some(true);
        self
    }

    pub fn no_strikethrough(&mut self) -> &mut Self {
        self.overrides.strikethrough = Some(false);
        self
    }

    pub fn obfuscated(&mut self) -> &mut Self {
        self.overrides.obfuscated = Some(true);
        self
    }

    pub fn no_obfuscation(&mut self) -> &mut Self {
        self.overrides.obfuscated = Some(false);
        self
    }

    /// Set the click action, replacing any earlier one.
    pub fn click_event(&mut self, event: ClickEvent) -> &mut Self {
        self.overrides.click_event = Some(event);
        self
    }

    pub fn open_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.click_event(ClickEvent::open_url(url))
    }

    pub fn suggest_command(&mut self, command: impl Into<String>) -> &mut Self {
        self.click_event(ClickEvent::suggest_command(command))
    }

    pub fn run_command(&mut self, command: impl Into<String>) -> &mut Self {
        self.click_event(ClickEvent::run_command(command))
    }

    /// Set the hover content, replacing any earlier one.
    pub fn hover_event(&mut self, event: HoverEvent) -> &mut Self {
        self.overrides.hover_event = Some(event);
        self
    }

    pub fn show_text(&mut self, text: Text) -> &mut Self {
        self.hover_event(HoverEvent::show_text(text))
    }

    pub fn show_item(&mut self, item: ItemStack) -> &mut Self {
        self.hover_event(HoverEvent::show_item(item))
    }

    pub fn show_entity(&mut self, entity: EntityDescriptor) -> &mut Self {
        self.hover_event(HoverEvent::show_entity(entity))
    }

    /// Resolve the overrides against the parent style.
    pub fn build(self) -> Style {
        self.parent.apply(&self.overrides)
    }
}
