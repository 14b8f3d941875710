//! Translation of style class names into terminal styles.
//!
//! Rows and buttons carry utility class strings such as
//! `"bg-gray-100 cursor-pointer"` or `"mx-2 px-4 rounded bg-red-400
//! hover:bg-red-400 text-white"`. This module resolves the classes that
//! have a terminal equivalent (backgrounds and text color) and ignores the
//! rest. `hover:` classes apply only while the element is hovered, which
//! in the terminal means focused.

use ratatui::style::{Color, Style};

/// Prefix of classes that only apply while hovered.
const HOVER_PREFIX: &str = "hover:";

/// Resolves a background class to a color.
#[must_use]
pub fn background_color(class: &str) -> Option<Color> {
    let color = match class {
        "bg-white" => Color::Rgb(0xff, 0xff, 0xff),
        "bg-gray-100" => Color::Rgb(0xf3, 0xf4, 0xf6),
        "bg-gray-300" => Color::Rgb(0xd1, 0xd5, 0xdb),
        "bg-gray-400" => Color::Rgb(0x9c, 0xa3, 0xaf),
        "bg-green-400" => Color::Rgb(0x4a, 0xde, 0x80),
        "bg-blue-400" => Color::Rgb(0x60, 0xa5, 0xfa),
        "bg-blue-500" => Color::Rgb(0x3b, 0x82, 0xf6),
        "bg-red-400" => Color::Rgb(0xf8, 0x71, 0x71),
        _ => return None,
    };
    Some(color)
}

/// Builds the style for a class string.
///
/// Later classes win over earlier ones. Elements with a background but no
/// `text-white` get black text so they stay readable on dark terminals.
///
/// # Examples
///
/// ```
/// use ratatui::style::{Color, Style};
/// use roster_tui::theme::style_for_classes;
///
/// let idle = style_for_classes("bg-gray-300 hover:bg-gray-400", false);
/// let hovered = style_for_classes("bg-gray-300 hover:bg-gray-400", true);
/// assert_eq!(idle.bg, Some(Color::Rgb(0xd1, 0xd5, 0xdb)));
/// assert_eq!(hovered.bg, Some(Color::Rgb(0x9c, 0xa3, 0xaf)));
///
/// assert_eq!(style_for_classes("", false), Style::default());
/// ```
#[must_use]
pub fn style_for_classes(classes: &str, hovered: bool) -> Style {
    let mut style = Style::default();
    let mut light_text = false;

    for class in classes.split_whitespace() {
        let class = match class.strip_prefix(HOVER_PREFIX) {
            Some(inner) if hovered => inner,
            Some(_) => continue,
            None => class,
        };

        if class == "text-white" {
            light_text = true;
        } else if let Some(color) = background_color(class) {
            style = style.bg(color);
        }
    }

    if light_text {
        style.fg(Color::White)
    } else if style.bg.is_some() {
        style.fg(Color::Black)
    } else {
        style
    }
}
