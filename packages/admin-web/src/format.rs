//! Display helpers for backend values

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Render a backend timestamp as e.g. `Mar 04, 2025`.
///
/// Accepts RFC 3339, naive ISO date-times and plain dates; anything else is
/// shown as received.
pub fn display_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "-".to_string();
    };

    const OUTPUT: &str = "%b %d, %Y";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(OUTPUT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(OUTPUT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(OUTPUT).to_string();
    }

    raw.to_string()
}

/// Strip tags from an HTML body for a one-line excerpt.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let mut text = String::with_capacity(html.len().min(max_chars * 2));
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let cut: String = collapsed.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Escape plain text for embedding in generated HTML.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("R&D <team>"), "R&amp;D &lt;team&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_display_date_formats() {
        assert_eq!(display_date(Some("2025-03-04T10:15:00Z")), "Mar 04, 2025");
        assert_eq!(display_date(Some("2025-03-04T10:15:00.123456")), "Mar 04, 2025");
        assert_eq!(display_date(Some("2025-03-04")), "Mar 04, 2025");
    }

    #[test]
    fn test_display_date_fallbacks() {
        assert_eq!(display_date(None), "-");
        assert_eq!(display_date(Some("  ")), "-");
        assert_eq!(display_date(Some("yesterday")), "yesterday");
    }

    #[test]
    fn test_excerpt_strips_markup() {
        let html = "<h1>Hiring</h1><p>We are <b>growing</b> fast</p>";
        assert_eq!(excerpt(html, 100), "Hiring We are growing fast");
        assert_eq!(excerpt(html, 9), "Hiring We...");
    }
}
