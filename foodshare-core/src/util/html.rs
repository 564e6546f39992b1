/// escapes text for placement inside HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape_html(r#"<b>Tom & Jerry's "Diner"</b>"#),
            "&lt;b&gt;Tom &amp; Jerry&#x27;s &quot;Diner&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Vaishali"), "Vaishali");
    }
}
