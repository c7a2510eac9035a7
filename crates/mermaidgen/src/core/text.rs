//! Shared text utilities for notation output
//!
//! Labels are user text dropped into a line-oriented grammar, so line
//! breaks and delimiter characters must be neutralised before emission.

use std::borrow::Cow;

/// One level of nesting inside blocks such as subgraphs or composite states
pub const INDENT: &str = "    ";

/// Characters that end or confuse an unquoted label in the notation
const UNSAFE_BARE: &[char] = &['"', '[', ']', '(', ')', '{', '}', '|', '<', '>', ';', '#', '&'];

/// Escape text for use inside a double-quoted label.
///
/// Double quotes become the `#quot;` entity and line breaks become `<br>`.
///
/// # Example
/// ```
/// use mermaidgen::core::escape_label;
///
/// assert_eq!(escape_label("say \"hi\""), "say #quot;hi#quot;");
/// assert_eq!(escape_label("two\nlines"), "two<br>lines");
/// ```
pub fn escape_label(text: &str) -> Cow<'_, str> {
    if !text.contains(['"', '\n', '\r']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(flatten_lines(text).replace('"', "#quot;"))
}

/// Escape text for the double-quoted `label` inside `@{ ... }` shape data.
///
/// The shape data is read as YAML, so backslashes are doubled on top of
/// [`escape_label`] to keep sequences like `\n` literal.
///
/// # Example
/// ```
/// use mermaidgen::core::escape_shape_label;
///
/// assert_eq!(escape_shape_label(r"C:\new"), r"C:\\new");
/// ```
pub fn escape_shape_label(text: &str) -> Cow<'_, str> {
    let escaped = escape_label(text);
    if escaped.contains('\\') {
        Cow::Owned(escaped.replace('\\', "\\\\"))
    } else {
        escaped
    }
}

/// Replace line breaks with `<br>` so the text stays on one line.
pub fn flatten_lines(text: &str) -> String {
    text.replace("\r\n", "<br>").replace(['\n', '\r'], "<br>")
}

/// Render text for a bare label slot (`[title]`, `|text|`).
///
/// Plain text is emitted as-is; anything containing delimiter characters
/// is wrapped in double quotes after escaping.
pub fn bare_label(text: &str) -> Cow<'_, str> {
    if text.contains(UNSAFE_BARE) {
        Cow::Owned(format!("\"{}\"", escape_label(text)))
    } else if text.contains(['\n', '\r']) {
        Cow::Owned(flatten_lines(text))
    } else {
        Cow::Borrowed(text)
    }
}

/// Render a string as a YAML scalar for front-matter.
///
/// Simple words stay plain; everything else becomes a double-quoted
/// scalar, which YAML reads with JSON string escaping rules. Words a YAML
/// reader would resolve to a bool, null or number are quoted too.
pub fn yaml_scalar(text: &str) -> Cow<'_, str> {
    let plain = !text.is_empty()
        && text.chars().all(|c| c.is_alphanumeric() || " -_./".contains(c))
        && !text.starts_with([' ', '-', '.'])
        && !text.ends_with(' ')
        && !is_yaml_keyword(text)
        && !looks_numeric(text);
    if plain {
        Cow::Borrowed(text)
    } else {
        // Serializing a &str cannot fail
        Cow::Owned(serde_json::to_string(text).unwrap_or_default())
    }
}

/// Plain scalars that resolve to bool or null (YAML 1.1 and 1.2 forms)
fn is_yaml_keyword(text: &str) -> bool {
    matches!(
        text.to_ascii_lowercase().as_str(),
        "true" | "false" | "yes" | "no" | "on" | "off" | "y" | "n" | "null" | "~"
    )
}

/// Plain scalars a YAML reader could resolve to an int or float.
///
/// Anything that starts like a number is treated as one; over-quoting is
/// harmless, a retyped value is not.
fn looks_numeric(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    if matches!(lower.trim_start_matches(['+', '-']), ".inf" | ".nan") {
        return true;
    }
    let digits = lower.trim_start_matches(['+', '-']);
    let digits = digits.strip_prefix('.').unwrap_or(digits);
    digits.starts_with(|c: char| c.is_ascii_digit())
}
