//! Single-pass `{{token}}` substitution and the escaping helpers used to
//! build token values.

use serde_json::Value;

/// Replace every `{{name}}` in `template` for which `lookup` has a value.
///
/// Substituted text is never rescanned. Unknown tokens and an unterminated
/// `{{` are copied through unchanged.
pub fn render<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after_open[..end].trim();
        match lookup(name) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON text made safe to sit inside a `<script>` element
pub fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// A JavaScript string literal for `text`
pub fn js_string(text: &str) -> String {
    script_safe(&Value::String(text.to_string()).to_string())
}
