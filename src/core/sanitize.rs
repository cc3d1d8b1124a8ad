// src/core/sanitize.rs

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Lookup key for display names: lowercase, letters and digits only.
/// "Anti-Ballistic Missiles" and "antiballistic missiles" meet on the same key.
pub fn name_key(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Cut a display name at the first occurrence of `marker` and trim.
/// "Fritz (i)" with marker "(i" → "Fritz".
pub fn cut_at<'a>(s: &'a str, marker: &str) -> &'a str {
    match s.find(marker) {
        Some(i) => s[..i].trim(),
        None => s.trim(),
    }
}
