//! Helpers for building markup strings

/// Escape text for use in element content or a double-quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `" active"` when `active`, otherwise empty
pub fn active_class(active: bool) -> &'static str {
    if active {
        " active"
    } else {
        ""
    }
}

/// `" disabled"` attribute when `disabled`, otherwise empty
pub fn disabled_attr(disabled: bool) -> &'static str {
    if disabled {
        " disabled"
    } else {
        ""
    }
}
