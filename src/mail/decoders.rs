const HTML_WRAP_WIDTH: usize = 100;

/// Collapse a body into one line of at most `max_chars` characters.
pub fn normalize_snippet(s: &str, max_chars: usize) -> String {
    let mut out = String::new();
    for line in s.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(line);
        if out.chars().count() >= max_chars {
            break;
        }
    }
    out.chars().take(max_chars).collect()
}

/// Readable text from an HTML body; the raw HTML if conversion fails.
pub fn html_to_text(html: &str) -> String {
    match html2text::from_read(html.as_bytes(), HTML_WRAP_WIDTH) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("html2text failed: {e}");
            html.to_string()
        }
    }
}
