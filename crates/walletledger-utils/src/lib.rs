//! Utility functions and helpers

/// Format a plain decimal string with a thousands separator in its integer part.
///
/// The fractional part and a leading minus sign are kept as written:
/// `"1234567.5"` becomes `"1,234,567.5"`.
pub fn format_number(s: &str, separator: &str) -> String {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::new();
    let mut count = 0;
    for c in int_part.chars().rev() {
        if count == 3 {
            grouped.push_str(&separator.chars().rev().collect::<String>());
            count = 0;
        }
        grouped.push(c);
        count += 1;
    }
    let mut result: String = grouped.chars().rev().collect();

    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(frac);
    }
    format!("{}{}", sign, result)
}

/// Escape text for embedding in HTML element content or quoted attributes
pub fn escape_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
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
    fn test_format_number() {
        assert_eq!(format_number("0", ","), "0");
        assert_eq!(format_number("999", ","), "999");
        assert_eq!(format_number("1200", ","), "1,200");
        assert_eq!(format_number("1234567", ","), "1,234,567");
        assert_eq!(format_number("-3000", ","), "-3,000");
        assert_eq!(format_number("1234.56", ","), "1,234.56");
        assert_eq!(format_number("1234567", " "), "1 234 567");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Rent"), "Rent");
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
    }
}
