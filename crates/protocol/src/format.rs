//! Input masks and display mappings.
//!
//! Every function in this module is a pure string transformation. The masks
//! are applied to form input on every keystroke, so stored draft text never
//! contains characters the field does not accept. The color mappings produce
//! opaque style class names which the UI layer translates into concrete
//! styles.
//!
//! # Examples
//!
//! ```
//! use roster_protocol::format::{to_alphabetic, to_grouped_numeric, to_numeric};
//!
//! assert_eq!(to_alphabetic("J0hn"), "John");
//! assert_eq!(to_numeric("12a3"), "123");
//! assert_eq!(to_grouped_numeric("1234567"), "1 234 567");
//! ```

use crate::error::{ProtocolError, Result};

/// Background class used by the "safe" mapping when a color has no background.
pub const NEUTRAL_BACKGROUND: &str = "bg-gray-300";

/// Strips every character that is not an ASCII letter, whitespace, or `+`.
///
/// Used for first and last name fields.
///
/// # Examples
///
/// ```
/// use roster_protocol::format::to_alphabetic;
///
/// assert_eq!(to_alphabetic("Mary-Jane O'Neil"), "MaryJane ONeil");
/// assert_eq!(to_alphabetic("a+b"), "a+b");
/// ```
#[must_use]
pub fn to_alphabetic(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace() || *c == '+')
        .collect()
}

/// Strips every character that is not an ASCII digit.
///
/// Used for the employee id field.
///
/// # Examples
///
/// ```
/// use roster_protocol::format::to_numeric;
///
/// assert_eq!(to_numeric("1 234 567"), "1234567");
/// assert_eq!(to_numeric("abc"), "");
/// ```
#[must_use]
pub fn to_numeric(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Keeps only digits and groups them in threes from the right.
///
/// A single space separates each group; the result never starts or ends
/// with a space. Existing spaces are dropped before grouping, so an already
/// grouped value is regrouped rather than doubled up.
///
/// # Examples
///
/// ```
/// use roster_protocol::format::to_grouped_numeric;
///
/// assert_eq!(to_grouped_numeric("1234567"), "1 234 567");
/// assert_eq!(to_grouped_numeric("1 23 4"), "1 234");
/// assert_eq!(to_grouped_numeric("12"), "12");
/// assert_eq!(to_grouped_numeric(""), "");
/// ```
#[must_use]
pub fn to_grouped_numeric(s: &str) -> String {
    let digits = to_numeric(s);
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    // Digits are ASCII, so byte positions and char positions coincide.
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    grouped
}

/// Turns an upper-case enumeration code into a display label.
///
/// The first character is kept as is and the remainder is lower-cased.
///
/// # Errors
///
/// Returns [`ProtocolError::EmptyLabel`] when `s` is empty.
///
/// # Examples
///
/// ```
/// use roster_protocol::format::capitalize_enum;
///
/// assert_eq!(capitalize_enum("GREEN").unwrap(), "Green");
/// assert_eq!(capitalize_enum("MR").unwrap(), "Mr");
/// assert!(capitalize_enum("").is_err());
/// ```
pub fn capitalize_enum(s: &str) -> Result<String> {
    let mut chars = s.chars();
    let first = chars.next().ok_or(ProtocolError::EmptyLabel)?;

    let mut label = String::with_capacity(s.len());
    label.push(first);
    label.push_str(&chars.as_str().to_lowercase());
    Ok(label)
}

/// Maps a profile color code to its background class.
///
/// `DEFAULT` and unrecognized codes map to the empty class, meaning "no
/// special background".
#[must_use]
pub fn color_to_background_class(color: &str) -> &'static str {
    match color {
        "GREEN" => "bg-green-400",
        "BLUE" => "bg-blue-400",
        "RED" => "bg-red-400",
        _ => "",
    }
}

/// Maps a profile color code to its background class, falling back to
/// [`NEUTRAL_BACKGROUND`] when the color has none.
///
/// # Examples
///
/// ```
/// use roster_protocol::format::color_to_background_class_safe;
///
/// assert_eq!(color_to_background_class_safe("RED"), "bg-red-400");
/// assert_eq!(color_to_background_class_safe("DEFAULT"), "bg-gray-300");
/// assert_eq!(color_to_background_class_safe("PURPLE"), "bg-gray-300");
/// ```
#[must_use]
pub fn color_to_background_class_safe(color: &str) -> &'static str {
    match color_to_background_class(color) {
        "" => NEUTRAL_BACKGROUND,
        class => class,
    }
}

/// Maps a profile color code to its hover class.
///
/// Unlike the background mapping, `DEFAULT` has a hover class of its own.
/// Unrecognized codes map to the empty class.
#[must_use]
pub fn color_to_hover_class(color: &str) -> &'static str {
    match color {
        "GREEN" => "hover:bg-green-400",
        "BLUE" => "hover:bg-blue-500",
        "RED" => "hover:bg-red-400",
        "DEFAULT" => "hover:bg-gray-400",
        _ => "",
    }
}
