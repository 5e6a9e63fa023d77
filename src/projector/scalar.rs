use std::{borrow::Cow, str::FromStr};

/// Parse the leading integer of a text input, ignoring trailing junk.
///
/// `" 8080abc"` yields `8080`; text with no leading digits yields `None`, as does
/// a value that does not fit in `T`.
pub fn parse_int<T: FromStr>(input: &str) -> Option<T> {
    let trimmed = input.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    format!("{}{}", sign, &digits[..end]).parse().ok()
}

/// Double-quoted YAML scalar
pub fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Identifier scalar: plain when YAML reads it back as the same string, quoted otherwise
pub fn plain(value: &str) -> Cow<'_, str> {
    if needs_quotes(value) {
        Cow::Owned(quoted(value))
    } else {
        Cow::Borrowed(value)
    }
}

/// Bracketed flow sequence of quoted strings, e.g. `["sh", "-c"]`
pub fn flow_list<S: AsRef<str>>(items: &[S]) -> String {
    let items: Vec<String> = items.iter().map(|i| quoted(i.as_ref())).collect();
    format!("[{}]", items.join(", "))
}

const RESERVED: &[&str] = &[
    "true", "false", "yes", "no", "on", "off", "y", "n", "null", "~", ".inf", "-.inf", "+.inf",
    ".nan",
];

fn needs_quotes(value: &str) -> bool {
    let Some(first) = value.chars().next() else {
        return true;
    };
    if value.trim() != value
        || value.ends_with(':')
        || value.contains(": ")
        || value.contains(" #")
        || value.chars().any(is_line_break)
        || "-?:,[]{}#&*!|>'\"%@`".contains(first)
    {
        return true;
    }
    if RESERVED.contains(&value.to_ascii_lowercase().as_str()) {
        return true;
    }
    looks_numeric(value)
}

// YAML 1.1 also breaks lines on the Unicode line and paragraph separators
fn is_line_break(c: char) -> bool {
    c.is_control() || c == '\u{2028}' || c == '\u{2029}'
}

fn looks_numeric(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    let unsigned = lower.trim_start_matches(['+', '-']);
    if let Some(hex) = unsigned.strip_prefix("0x") {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if let Some(oct) = unsigned.strip_prefix("0o") {
        return !oct.is_empty() && oct.chars().all(|c| ('0'..='7').contains(&c));
    }
    // f64 parsing also accepts `inf`/`nan` spellings; quoting those is harmless
    unsigned.replace('_', "").parse::<f64>().is_ok()
}
