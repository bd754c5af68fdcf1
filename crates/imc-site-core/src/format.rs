//! Text helpers shared by the renderers

/// Abbreviate a download count: `38`, `1.5K`, `2.3M`
pub fn format_downloads(downloads: u64) -> String {
    if downloads >= 1_000_000 {
        format!("{:.1}M", downloads as f64 / 1_000_000.0)
    } else if downloads >= 1_000 {
        format!("{:.1}K", downloads as f64 / 1_000.0)
    } else {
        downloads.to_string()
    }
}

/// Escape text for HTML element content and double-quoted attributes
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
    fn test_format_downloads() {
        assert_eq!(format_downloads(0), "0");
        assert_eq!(format_downloads(38), "38");
        assert_eq!(format_downloads(999), "999");
        assert_eq!(format_downloads(1000), "1.0K");
        assert_eq!(format_downloads(1500), "1.5K");
        assert_eq!(format_downloads(2_300_000), "2.3M");
    }

    #[test]
    fn test_format_downloads_rounds_up_below_a_million() {
        assert_eq!(format_downloads(999_949), "999.9K");
        assert_eq!(format_downloads(999_950), "1000.0K");
        assert_eq!(format_downloads(999_999), "1000.0K");
        assert_eq!(format_downloads(1_000_000), "1.0M");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
